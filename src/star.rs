//! Stars, as seen by an observer
use crate::coords::Horizontal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [StarRecord] is one catalogue star, converted to horizon coordinates
/// for a given site and instant. Produced once per run, read-only afterward.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarRecord {
    /// Catalogue name, normalized (see [crate::catalogue])
    pub name: String,
    /// Visual magnitude
    pub magnitude: f64,
    /// Azimuth in degrees, from North through East
    pub azimuth: f64,
    /// Altitude above the horizon, in degrees
    pub altitude: f64,
}

impl StarRecord {
    /// Builds a new [StarRecord]
    pub fn new(name: &str, magnitude: f64, horizontal: Horizontal) -> Self {
        Self {
            name: name.to_string(),
            magnitude,
            azimuth: horizontal.azimuth,
            altitude: horizontal.altitude,
        }
    }
    /// Returns true if this star stands above the horizon
    pub fn is_visible(&self) -> bool {
        self.altitude > 0.0
    }
    /// Returns horizon coordinates
    pub fn horizontal(&self) -> Horizontal {
        Horizontal {
            azimuth: self.azimuth,
            altitude: self.altitude,
        }
    }
}

impl std::fmt::Display for StarRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} (mag {:.2}) az={:.3}° alt={:.3}°",
            self.name, self.magnitude, self.azimuth, self.altitude
        )
    }
}
