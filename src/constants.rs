//! Astronomical constants

/// J2000.0 reference epoch
pub(crate) struct J2000;

impl J2000 {
    /// Julian Date of J2000.0 (2000-01-01T12:00:00 TT)
    pub const JD: f64 = 2451545.0;
    /// Julian year of J2000.0
    pub const YEAR: f64 = 2000.0;
}

pub(crate) struct Julian;

impl Julian {
    pub const DAYS_PER_YEAR: f64 = 365.25;
    pub const DAYS_PER_CENTURY: f64 = 36525.0;
}

/// Greenwich Mean Sidereal Time polynomial (IAU 1982),
/// expressed in degrees, as function of days since J2000
pub(crate) struct Gmst;

impl Gmst {
    pub const BASE_DEG: f64 = 280.46061837;
    pub const ROTATION_PER_DAY: f64 = 360.98564736629;
    pub const T2: f64 = 0.000387933;
    pub const T3_DIVISOR: f64 = 38710000.0;
}

/// Mean obliquity of the ecliptic at J2000, in degrees
pub(crate) const OBLIQUITY_J2000_DEG: f64 = 23.43928;

/// Gaussian gravitational constant, in rad/day
pub(crate) const GAUSS_K: f64 = 0.01720209895;

/// Milli arc seconds per degree
pub(crate) const MAS_PER_DEG: f64 = 3.6E6;

/// Arc seconds per degree
pub(crate) const ARCSEC_PER_DEG: f64 = 3600.0;
