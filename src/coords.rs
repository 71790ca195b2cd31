//! Celestial coordinates and reference frame conversions.
//!
//! All angles are expressed in degrees unless stated otherwise.
//! The model is a standard one: mean sidereal time, IAU 1976 precession
//! and linear proper motion. Nutation, aberration and refraction are ignored,
//! which is far below what a printed chart can show.
use hifitime::Epoch;
use nalgebra::{Rotation3, Vector3};

use crate::constants::{Gmst, Julian, J2000, MAS_PER_DEG, OBLIQUITY_J2000_DEG};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equatorial coordinates (right ascension, declination)
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equatorial {
    /// Right ascension in degrees, [0, 360[
    pub ra: f64,
    /// Declination in degrees, [-90, 90]
    pub dec: f64,
}

/// Horizon coordinates (azimuth, altitude)
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Horizontal {
    /// Azimuth in degrees, from North (0°) through East (90°)
    pub azimuth: f64,
    /// Altitude above the geometric horizon, in degrees
    pub altitude: f64,
}

impl Equatorial {
    /// Builds new [Equatorial] coordinates, right ascension is wrapped to [0, 360[
    pub fn new(ra: f64, dec: f64) -> Self {
        Self {
            ra: ra.rem_euclid(360.0),
            dec,
        }
    }

    /// Builds [Equatorial] coordinates from a (not necessarily unit) cartesian vector
    pub fn from_cartesian(v: &Vector3<f64>) -> Self {
        let rho = (v.x * v.x + v.y * v.y).sqrt();
        let ra = v.y.atan2(v.x).to_degrees();
        let dec = v.z.atan2(rho).to_degrees();
        Self::new(ra, dec)
    }

    /// Returns the unit vector pointing at self
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_ra, cos_ra) = self.ra.to_radians().sin_cos();
        let (sin_dec, cos_dec) = self.dec.to_radians().sin_cos();
        Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
    }

    /// Angular separation to other position, in degrees
    pub fn separation(&self, rhs: &Self) -> f64 {
        let dot = self.to_cartesian().dot(&rhs.to_cartesian());
        dot.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Propagates a J2000 catalogue position with linear proper motion.
    ///   - pm_ra: proper motion in ra * cos(dec), mas/yr
    ///   - pm_dec: proper motion in declination, mas/yr
    ///   - from_year, to_year: julian years
    pub fn with_proper_motion(&self, pm_ra: f64, pm_dec: f64, from_year: f64, to_year: f64) -> Self {
        let dt = to_year - from_year;
        let cos_dec = self.dec.to_radians().cos();
        let dra = if cos_dec.abs() > 1.0E-9 {
            pm_ra * dt / MAS_PER_DEG / cos_dec
        } else {
            0.0
        };
        let ddec = pm_dec * dt / MAS_PER_DEG;
        Self::new(self.ra + dra, (self.dec + ddec).clamp(-90.0, 90.0))
    }

    /// Precesses J2000 mean coordinates to the mean equator and equinox of `epoch`
    /// (IAU 1976 angles).
    pub fn precess_from_j2000(&self, epoch: Epoch) -> Self {
        let t = julian_centuries(epoch);
        let (zeta, z, theta) = precession_angles(t);

        let ra0 = self.ra.to_radians();
        let (sin_dec0, cos_dec0) = self.dec.to_radians().sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();

        let a = cos_dec0 * (ra0 + zeta).sin();
        let b = cos_theta * cos_dec0 * (ra0 + zeta).cos() - sin_theta * sin_dec0;
        let c = sin_theta * cos_dec0 * (ra0 + zeta).cos() + cos_theta * sin_dec0;

        let ra = a.atan2(b) + z;
        let dec = c.clamp(-1.0, 1.0).asin();
        Self::new(ra.to_degrees(), dec.to_degrees())
    }

    /// Converts to [Horizontal] coordinates, given local sidereal time (degrees)
    /// and site latitude (degrees). Self should be expressed in the equinox of date.
    pub fn to_horizontal(&self, lst_deg: f64, latitude_deg: f64) -> Horizontal {
        let ha = (lst_deg - self.ra).to_radians();
        let (sin_ha, cos_ha) = ha.sin_cos();
        let (sin_dec, cos_dec) = self.dec.to_radians().sin_cos();
        let (sin_lat, cos_lat) = latitude_deg.to_radians().sin_cos();

        let sin_alt = sin_lat * sin_dec + cos_lat * cos_dec * cos_ha;
        let altitude = sin_alt.clamp(-1.0, 1.0).asin().to_degrees();

        let y = -cos_dec * sin_ha;
        let x = sin_dec * cos_lat - cos_dec * cos_ha * sin_lat;
        let azimuth = y.atan2(x).to_degrees().rem_euclid(360.0);

        Horizontal { azimuth, altitude }
    }
}

impl Horizontal {
    /// Zenith distance, in degrees
    pub fn zenith_distance(&self) -> f64 {
        90.0 - self.altitude
    }
}

impl std::fmt::Display for Equatorial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hours = self.ra / 15.0;
        write!(f, "ra={:.4}h dec={:+.4}°", hours, self.dec)
    }
}

impl std::fmt::Display for Horizontal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "az={:.3}° alt={:+.3}°", self.azimuth, self.altitude)
    }
}

/// Days elapsed since J2000, UT based
pub fn days_since_j2000(epoch: Epoch) -> f64 {
    epoch.to_jde_utc_days() - J2000::JD
}

/// Julian centuries elapsed since J2000
pub fn julian_centuries(epoch: Epoch) -> f64 {
    days_since_j2000(epoch) / Julian::DAYS_PER_CENTURY
}

/// Julian year of given epoch (J2000 = 2000.0)
pub fn julian_year(epoch: Epoch) -> f64 {
    J2000::YEAR + days_since_j2000(epoch) / Julian::DAYS_PER_YEAR
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360[
pub fn greenwich_mean_sidereal_time(epoch: Epoch) -> f64 {
    let d = days_since_j2000(epoch);
    let t = d / Julian::DAYS_PER_CENTURY;
    let gmst = Gmst::BASE_DEG + Gmst::ROTATION_PER_DAY * d + Gmst::T2 * t * t
        - t * t * t / Gmst::T3_DIVISOR;
    gmst.rem_euclid(360.0)
}

/// Local Mean Sidereal Time in degrees, for given east longitude (degrees)
pub fn local_sidereal_time(epoch: Epoch, longitude_deg: f64) -> f64 {
    (greenwich_mean_sidereal_time(epoch) + longitude_deg).rem_euclid(360.0)
}

/*
 * IAU 1976 precession angles (zeta, z, theta) in radians
 */
fn precession_angles(t: f64) -> (f64, f64, f64) {
    let arcsec = |x: f64| (x / 3600.0).to_radians();
    let zeta = arcsec(2306.2181 * t + 0.30188 * t * t + 0.017998 * t * t * t);
    let z = arcsec(2306.2181 * t + 1.09468 * t * t + 0.018203 * t * t * t);
    let theta = arcsec(2004.3109 * t - 0.42665 * t * t - 0.041833 * t * t * t);
    (zeta, z, theta)
}

/// Rotates an ecliptic (J2000) vector into the equatorial (J2000) frame
pub fn ecliptic_to_equatorial(v: &Vector3<f64>) -> Vector3<f64> {
    let rot = Rotation3::from_axis_angle(&Vector3::x_axis(), OBLIQUITY_J2000_DEG.to_radians());
    rot * v
}
