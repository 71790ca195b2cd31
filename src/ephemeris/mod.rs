//! Low precision solar system ephemerides (planets, comets),
//! from osculating Keplerian elements.
use nalgebra::{Rotation3, Vector3};

use crate::coords::{ecliptic_to_equatorial, Equatorial};

pub mod comet;
pub mod planet;

/// Maximal number of Newton iterations
const MAX_ITERATIONS: usize = 50;

/// Convergence criterion on the anomaly, in radians
const TOLERANCE: f64 = 1.0E-12;

/// Solves Kepler's equation `M = E - e sin(E)` for the eccentric anomaly (radians).
/// Elliptic orbits only (e < 1).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(2.0 * std::f64::consts::PI);
    // highly eccentric orbits converge faster from PI
    let mut ea = if e > 0.8 { std::f64::consts::PI } else { m };
    for _ in 0..MAX_ITERATIONS {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < TOLERANCE {
            break;
        }
    }
    ea
}

/// Solves the hyperbolic Kepler equation `M = e sinh(H) - H` (e > 1)
pub fn solve_hyperbolic_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly;
    let mut h = (2.0 * m.abs() / e + 1.8).ln() * m.signum();
    for _ in 0..MAX_ITERATIONS {
        let delta = (e * h.sinh() - h - m) / (e * h.cosh() - 1.0);
        h -= delta;
        if delta.abs() < TOLERANCE {
            break;
        }
    }
    h
}

/// Orientation of an orbit, in the ecliptic J2000 frame. Angles in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation {
    /// Argument of perihelion
    pub perihelion: f64,
    /// Longitude of the ascending node
    pub node: f64,
    /// Inclination
    pub inclination: f64,
}

impl Orientation {
    /// Rotates an in-plane position (x toward perihelion) into ecliptic J2000 coordinates
    pub fn to_ecliptic(&self, x: f64, y: f64) -> Vector3<f64> {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), self.node.to_radians())
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.inclination.to_radians())
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.perihelion.to_radians());
        rotation * Vector3::new(x, y, 0.0)
    }
}

/// Geocentric J2000 position of a body, given its heliocentric ecliptic J2000
/// position and the Earth's one (AU). Returns position and distance (AU).
pub fn geocentric(body: &Vector3<f64>, earth: &Vector3<f64>) -> (Equatorial, f64) {
    let geo = ecliptic_to_equatorial(&(body - earth));
    (Equatorial::from_cartesian(&geo), geo.norm())
}
