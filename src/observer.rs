//! Observation site
use hifitime::{Epoch, Unit};

use crate::{
    coords::{julian_year, local_sidereal_time, Equatorial, Horizontal},
    error::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic location of the observer
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// Elevation above sea level, in meters
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: f64,
}

impl Default for Observer {
    /// Builds a default [Observer], located in Potsdam (Germany)
    fn default() -> Self {
        Self {
            latitude: 52.4,
            longitude: 13.10,
            elevation: 36.0,
        }
    }
}

impl Observer {
    /// Builds a new [Observer]
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Converts J2000 equatorial coordinates to horizon coordinates, at `epoch`
    pub fn horizontal(&self, j2000: &Equatorial, epoch: Epoch) -> Horizontal {
        let lst = local_sidereal_time(epoch, self.longitude);
        j2000
            .precess_from_j2000(epoch)
            .to_horizontal(lst, self.latitude)
    }

    /// Converts a catalogue position with proper motion, to horizon coordinates
    pub fn horizontal_with_proper_motion(
        &self,
        position: &Equatorial,
        pm: (f64, f64),
        catalogue_year: f64,
        epoch: Epoch,
    ) -> Horizontal {
        let j2000 = position.with_proper_motion(pm.0, pm.1, catalogue_year, julian_year(epoch));
        self.horizontal(&j2000, epoch)
    }
}

impl std::fmt::Display for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.2}°{} {:.2}°{} {:.0}m",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew,
            self.elevation
        )
    }
}

/// Interprets a local civil time description (for example "2019-12-01 23:00:00"),
/// given its offset to UTC in hours, and returns the corresponding UTC [Epoch].
pub fn local_time_to_utc(local: &str, utc_offset_hours: f64) -> Result<Epoch, Error> {
    let local = local.trim();
    // hifitime expects the ISO 'T' separator
    let iso = match local.find(' ') {
        Some(offset) if offset == 10 => {
            format!("{}T{}", &local[..offset], local[offset + 1..].trim())
        },
        _ => local.to_string(),
    };
    let epoch =
        Epoch::from_gregorian_str(&iso).map_err(|e| Error::EpochParsing(format!("{}: {}", local, e)))?;
    Ok(epoch - Unit::Hour * utc_offset_hours)
}
