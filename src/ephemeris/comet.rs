//! Comets, described by Minor Planet Center one-line orbital elements
//! (CometEls.txt layout).
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use hifitime::{Epoch, Unit};
use nalgebra::Vector3;
use thiserror::Error;

#[cfg(feature = "log")]
use log::debug;

use super::{geocentric, planet::earth_heliocentric, solve_hyperbolic_kepler, solve_kepler, Orientation};
use crate::{constants::GAUSS_K, coords::Equatorial, resolver::Resolver};

/// Orbits this close to e = 1 are treated as parabolic
const PARABOLIC_TOLERANCE: f64 = 1.0E-8;

const YEAR: (usize, usize) = (14, 18);
const MONTH: (usize, usize) = (19, 21);
const DAY: (usize, usize) = (22, 29);
const PERIHELION_DISTANCE: (usize, usize) = (30, 39);
const ECCENTRICITY: (usize, usize) = (41, 49);
const PERIHELION: (usize, usize) = (51, 59);
const NODE: (usize, usize) = (61, 69);
const INCLINATION: (usize, usize) = (71, 79);
const ABS_MAGNITUDE: (usize, usize) = (91, 95);
const SLOPE: (usize, usize) = (96, 100);
const DESIGNATION: (usize, usize) = (102, 158);

/// Comet elements parsing errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid {0} field")]
    InvalidField(&'static str),
    #[error("invalid perihelion date")]
    InvalidDate,
    #[error("comet \"{0}\" not found")]
    NotFound(String),
}

/// Heliocentric orbit of a comet
#[derive(Debug, Clone, PartialEq)]
pub struct CometElements {
    /// Designation and name, for example "C/2020 F3 (NEOWISE)"
    pub designation: String,
    /// Time of perihelion passage
    pub perihelion_time: Epoch,
    /// Perihelion distance, in AU
    pub perihelion_distance: f64,
    /// Eccentricity
    pub eccentricity: f64,
    /// Orbit orientation (ecliptic J2000)
    pub orientation: Orientation,
    /// Absolute magnitude and slope parameter, when published
    pub magnitude: Option<(f64, f64)>,
}

fn field(line: &str, range: (usize, usize)) -> &str {
    let end = range.1.min(line.len());
    if range.0 >= end {
        return "";
    }
    line.get(range.0..end).unwrap_or("").trim()
}

fn parse_f64(line: &str, range: (usize, usize), name: &'static str) -> Result<f64, Error> {
    field(line, range)
        .parse::<f64>()
        .map_err(|_| Error::InvalidField(name))
}

impl FromStr for CometElements {
    type Err = Error;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let year = field(line, YEAR)
            .parse::<i32>()
            .map_err(|_| Error::InvalidDate)?;
        let month = field(line, MONTH)
            .parse::<u8>()
            .map_err(|_| Error::InvalidDate)?;
        let day = field(line, DAY)
            .parse::<f64>()
            .map_err(|_| Error::InvalidDate)?;
        if !(1..=12).contains(&month) || !(1.0..32.0).contains(&day) {
            return Err(Error::InvalidDate);
        }

        let perihelion_time = Epoch::from_gregorian_utc_at_midnight(year, month, day.trunc() as u8)
            + Unit::Day * day.fract();

        let perihelion_distance = parse_f64(line, PERIHELION_DISTANCE, "q")?;
        let eccentricity = parse_f64(line, ECCENTRICITY, "e")?;
        let orientation = Orientation {
            perihelion: parse_f64(line, PERIHELION, "Peri.")?,
            node: parse_f64(line, NODE, "Node")?,
            inclination: parse_f64(line, INCLINATION, "Incl.")?,
        };

        let magnitude = match (
            field(line, ABS_MAGNITUDE).parse::<f64>(),
            field(line, SLOPE).parse::<f64>(),
        ) {
            (Ok(h), Ok(g)) => Some((h, g)),
            _ => None,
        };

        let designation = field(line, DESIGNATION).to_string();
        if designation.is_empty() {
            return Err(Error::InvalidField("designation"));
        }

        Ok(Self {
            designation,
            perihelion_time,
            perihelion_distance,
            eccentricity,
            orientation,
            magnitude,
        })
    }
}

impl CometElements {
    /// Parses all comets by consuming a [BufReader].
    /// Lines that do not parse are skipped.
    pub fn parse<R: Read>(reader: &mut BufReader<R>) -> Result<Vec<Self>, Error> {
        let mut comets = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Self::from_str(&line) {
                Ok(comet) => comets.push(comet),
                Err(_e) => {
                    #[cfg(feature = "log")]
                    debug!("skipped comet elements \"{}\": {}", line.trim(), _e);
                },
            }
        }
        Ok(comets)
    }

    /// Parses all comets from local file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, Error> {
        let fd = File::open(path)?;
        let mut reader = BufReader::new(fd);
        Self::parse(&mut reader)
    }

    /// Picks one comet by designation: exact match first,
    /// then first designation that contains it (for example "NEOWISE").
    pub fn select(comets: &[Self], designation: &str) -> Result<Self, Error> {
        let names = comets
            .iter()
            .map(|comet| comet.designation.as_str())
            .collect::<Vec<_>>();
        if designation.trim().is_empty() {
            return Err(Error::NotFound(designation.to_string()));
        }
        Resolver::new(&names)
            .find(designation.trim())
            .map(|index| comets[index].clone())
            .ok_or(Error::NotFound(designation.to_string()))
    }

    /// Returns true if this orbit is closed
    pub fn is_elliptic(&self) -> bool {
        self.eccentricity < 1.0 - PARABOLIC_TOLERANCE
    }

    /// Heliocentric ecliptic J2000 position, in AU
    pub fn heliocentric(&self, epoch: Epoch) -> Vector3<f64> {
        let dt = epoch.to_jde_utc_days() - self.perihelion_time.to_jde_utc_days();
        let q = self.perihelion_distance;
        let e = self.eccentricity;

        let (x, y) = if (e - 1.0).abs() < PARABOLIC_TOLERANCE {
            // Barker's equation
            let w = 3.0 * GAUSS_K / (2.0 * q * q * q).sqrt() * dt;
            let y = (w / 2.0 + (w * w / 4.0 + 1.0).sqrt()).cbrt();
            let s = y - 1.0 / y;
            let nu = 2.0 * s.atan();
            let r = q * (1.0 + s * s);
            (r * nu.cos(), r * nu.sin())
        } else if e < 1.0 {
            let a = q / (1.0 - e);
            let n = GAUSS_K / (a * a * a).sqrt();
            let ea = solve_kepler(n * dt, e);
            (a * (ea.cos() - e), a * (1.0 - e * e).sqrt() * ea.sin())
        } else {
            let a = q / (e - 1.0);
            let n = GAUSS_K / (a * a * a).sqrt();
            let h = solve_hyperbolic_kepler(n * dt, e);
            (a * (e - h.cosh()), a * (e * e - 1.0).sqrt() * h.sinh())
        };

        self.orientation.to_ecliptic(x, y)
    }

    /// Geocentric J2000 equatorial position
    pub fn position(&self, epoch: Epoch) -> Equatorial {
        self.position_and_distance(epoch).0
    }

    /// Geocentric J2000 equatorial position and distance to the Earth (AU)
    pub fn position_and_distance(&self, epoch: Epoch) -> (Equatorial, f64) {
        geocentric(&self.heliocentric(epoch), &earth_heliocentric(epoch))
    }

    /// Positions at `center` shifted by each offset (in days)
    pub fn track(&self, center: Epoch, offsets_days: &[f64]) -> Vec<(Epoch, Equatorial)> {
        offsets_days
            .iter()
            .map(|offset| {
                let epoch = center + Unit::Day * *offset;
                (epoch, self.position(epoch))
            })
            .collect()
    }
}
