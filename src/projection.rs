//! Plot plane projections
use crate::coords::{Equatorial, Horizontal};

/// Polar (zenithal equidistant) projection of the visible hemisphere:
/// theta is the azimuth in radians, r the zenith distance in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PolarProjection;

impl PolarProjection {
    /// Outer ring (horizon) radius
    pub const R_MAX: f64 = 90.0;

    /// Projects horizon coordinates to (theta, r)
    pub fn project(&self, horizontal: &Horizontal) -> (f64, f64) {
        (horizontal.azimuth.to_radians(), 90.0 - horizontal.altitude)
    }

    /// Converts (theta, r) to cartesian plot coordinates, North up
    /// and East to the left, as when looking up at the sky.
    pub fn to_cartesian(&self, theta: f64, r: f64) -> (f64, f64) {
        (-r * theta.sin(), r * theta.cos())
    }
}

/// Stereographic projection of the celestial sphere, around a centre.
/// The centre projects to (0, 0); x grows to the West (sky view).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StereographicProjection {
    center: Equatorial,
    sin_dec0: f64,
    cos_dec0: f64,
}

impl StereographicProjection {
    /// Builds a new projection, centred on given position
    pub fn new(center: Equatorial) -> Self {
        let (sin_dec0, cos_dec0) = center.dec.to_radians().sin_cos();
        Self {
            center,
            sin_dec0,
            cos_dec0,
        }
    }

    pub fn center(&self) -> Equatorial {
        self.center
    }

    /// Projects given position to (x, y). Returns None for the antipode
    /// of the centre, which cannot be projected.
    pub fn project(&self, position: &Equatorial) -> Option<(f64, f64)> {
        let (sin_dec, cos_dec) = position.dec.to_radians().sin_cos();
        let (sin_dra, cos_dra) = (position.ra - self.center.ra).to_radians().sin_cos();

        let cos_c = self.sin_dec0 * sin_dec + self.cos_dec0 * cos_dec * cos_dra;
        let denominator = 1.0 + cos_c;
        if denominator < 1.0E-12 {
            return None;
        }

        let x = -cos_dec * sin_dra / denominator;
        let y = (self.cos_dec0 * sin_dec - self.sin_dec0 * cos_dec * cos_dra) / denominator;
        Some((x, y))
    }

    /// Half extent of the plot, for given field of view (degrees)
    pub fn limit(field_of_view: f64) -> f64 {
        let angle = std::f64::consts::PI - field_of_view / 360.0 * std::f64::consts::PI;
        angle.sin() / (1.0 - angle.cos())
    }
}

/// Linearly rescales `values` so that their minimum maps to `bounds.0`
/// and their maximum to `bounds.1`. A single (or constant) value maps to `bounds.0`.
pub fn scale_to(values: &[f64], bounds: (f64, f64)) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if values.is_empty() || span == 0.0 {
        return values.iter().map(|_| bounds.0).collect();
    }
    let k = (bounds.1 - bounds.0) / span;
    let d = bounds.0 - k * min;
    values.iter().map(|v| k * v + d).collect()
}
