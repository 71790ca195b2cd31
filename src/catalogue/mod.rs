//! Star catalogues.
//!
//! Two layouts are supported:
//!   - the Yale Bright Star Catalogue (BSC5, fixed width records),
//!     with Bayer / Flamsteed names like "58Alp Ori"
//!   - the Hipparcos main catalogue (hip_main.dat, '|' separated records),
//!     where each star is named after its HIP number.
//!
//! Names are decoded as text and trimmed, internal spacing is preserved
//! ("13Mu  Gem"). The few BSC entries that share one name are renamed at load time.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

#[cfg(feature = "log")]
use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::Equatorial;

mod bsc;
mod hipparcos;

/// Catalogue parsing errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("line {line}: invalid {field} field")]
    InvalidField { line: usize, field: &'static str },
    #[error("empty catalogue")]
    EmptyCatalogue,
    #[error("unknown catalogue kind \"{0}\"")]
    UnknownKind(String),
    #[error("gzip compressed catalogue: requires the flate2 feature")]
    GzipUnsupported,
}

/// Supported catalogue layouts
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CatalogueKind {
    /// Yale Bright Star Catalogue, 5th revised edition
    #[default]
    BrightStar,
    /// Hipparcos main catalogue
    Hipparcos,
}

impl CatalogueKind {
    /// Julian year of the catalogue positions
    pub fn epoch(&self) -> f64 {
        match self {
            Self::BrightStar => 2000.0,
            Self::Hipparcos => 1991.25,
        }
    }
}

impl FromStr for CatalogueKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "bsc" | "bsc5" | "bright" | "brightstar" | "yale" => Ok(Self::BrightStar),
            "hip" | "hipparcos" => Ok(Self::Hipparcos),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for CatalogueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::BrightStar => write!(f, "Yale Bright Star"),
            Self::Hipparcos => write!(f, "Hipparcos"),
        }
    }
}

/// One catalogue entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogueStar {
    /// Catalogue number (HR or HIP)
    pub id: u32,
    /// Normalized name
    pub name: String,
    /// Visual magnitude
    pub magnitude: f64,
    /// J2000 position
    pub position: Equatorial,
    /// Proper motion in ra * cos(dec), mas/yr
    pub pm_ra: f64,
    /// Proper motion in declination, mas/yr
    pub pm_dec: f64,
}

/// [Catalogue] is the parsed, in-memory star table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    /// Layout this catalogue was parsed from
    pub kind: CatalogueKind,
    /// Stars, in catalogue order
    pub stars: Vec<CatalogueStar>,
}

/// Normalizes a raw catalogue name
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim().to_string()
}

impl Catalogue {
    /// Builds a [Catalogue] from given stars
    pub fn new(kind: CatalogueKind, stars: Vec<CatalogueStar>) -> Self {
        Self { kind, stars }
    }

    /// Parses a [Catalogue] by consuming a [BufReader].
    /// Records that do not describe a position or a magnitude (withdrawn entries)
    /// are skipped, any other malformed record is an error.
    pub fn parse<R: Read>(reader: &mut BufReader<R>, kind: CatalogueKind) -> Result<Self, Error> {
        let mut stars = Vec::with_capacity(1024);
        for (nth, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let star = match kind {
                CatalogueKind::BrightStar => bsc::parse_record(&line, nth + 1)?,
                CatalogueKind::Hipparcos => hipparcos::parse_record(&line, nth + 1)?,
            };
            match star {
                Some(star) => stars.push(star),
                None => {
                    #[cfg(feature = "log")]
                    debug!("{} line {}: no position, skipped", kind, nth + 1);
                },
            }
        }
        if stars.is_empty() {
            return Err(Error::EmptyCatalogue);
        }
        let mut catalogue = Self::new(kind, stars);
        if kind == CatalogueKind::BrightStar {
            bsc::rename_duplicates(&mut catalogue.stars);
        }
        #[cfg(feature = "log")]
        info!("{} catalogue: {} stars", kind, catalogue.len());
        Ok(catalogue)
    }

    /// Parses [Catalogue] from local readable file.
    /// See [Self::from_gzip_file] for seamless Gzip support.
    pub fn from_file<P: AsRef<Path>>(path: P, kind: CatalogueKind) -> Result<Self, Error> {
        let fd = File::open(path)?;
        let mut reader = BufReader::new(fd);
        Self::parse(&mut reader, kind)
    }

    /// Parses [Catalogue] from local gzip compressed file.
    #[cfg(feature = "flate2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "flate2")))]
    pub fn from_gzip_file<P: AsRef<Path>>(path: P, kind: CatalogueKind) -> Result<Self, Error> {
        let fd = File::open(path)?;
        let reader = GzDecoder::new(fd);
        let mut reader = BufReader::new(reader);
        Self::parse(&mut reader, kind)
    }

    /// Parses [Catalogue] from local file, picking the gzip decoder
    /// when the file name terminates with ".gz" (requires the flate2 feature).
    pub fn from_path<P: AsRef<Path>>(path: P, kind: CatalogueKind) -> Result<Self, Error> {
        let path = path.as_ref();
        let gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        if gzip {
            #[cfg(feature = "flate2")]
            return Self::from_gzip_file(path, kind);
            #[cfg(not(feature = "flate2"))]
            return Err(Error::GzipUnsupported);
        }
        Self::from_file(path, kind)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Julian year of the catalogue positions
    pub fn epoch(&self) -> f64 {
        self.kind.epoch()
    }

    /// Returns a new [Catalogue] retaining stars strictly brighter than given magnitude
    pub fn brighter_than(&self, magnitude: f64) -> Self {
        Self {
            kind: self.kind,
            stars: self
                .stars
                .iter()
                .filter(|star| star.magnitude < magnitude)
                .cloned()
                .collect(),
        }
    }

    /// Returns all names, in catalogue order
    pub fn names(&self) -> Vec<&str> {
        self.stars.iter().map(|star| star.name.as_str()).collect()
    }

    /// Returns first star with given catalogue number
    pub fn get_by_id(&self, id: u32) -> Option<&CatalogueStar> {
        self.stars.iter().find(|star| star.id == id)
    }

    /// Returns first star with given (exact) name
    pub fn get_by_name(&self, name: &str) -> Option<&CatalogueStar> {
        self.stars.iter().find(|star| star.name == name)
    }
}
