//! Stellarium constellation lines (constellationship.fab).
//!
//! Each line describes one constellation:
//! `<abbreviation> <number of pairs> <hip> <hip> <hip> <hip> ...`
//! where each pair of Hipparcos numbers is one line edge.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use itertools::Itertools;
use thiserror::Error;

#[cfg(feature = "log")]
use log::debug;

use crate::figure::Figure;

/// Stellarium parsing errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("line {0}: missing pairs count")]
    MissingPairsCount(usize),
    #[error("line {line}: invalid HIP number \"{value}\"")]
    InvalidHipNumber { line: usize, value: String },
    #[error("line {line}: {name} announces {expected} pairs, {found} star numbers found")]
    PairsMismatch {
        line: usize,
        name: String,
        expected: usize,
        found: usize,
    },
}

/// One constellation: abbreviation and line edges (pairs of HIP numbers)
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    pub name: String,
    pub edges: Vec<(u32, u32)>,
}

/// [Stellarium] constellation line set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stellarium {
    pub constellations: Vec<Constellation>,
}

impl Stellarium {
    /// Parses constellation lines by consuming a [BufReader].
    /// Blank lines and '#' comments are ignored.
    pub fn parse<R: Read>(reader: &mut BufReader<R>) -> Result<Self, Error> {
        let mut constellations = Vec::with_capacity(88);
        for (nth, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let mut items = content.split_ascii_whitespace();
            let name = match items.next() {
                Some(name) => name.to_string(),
                None => continue,
            };
            let pairs = items
                .next()
                .and_then(|count| count.parse::<usize>().ok())
                .ok_or(Error::MissingPairsCount(nth + 1))?;

            let stars = items
                .map(|item| {
                    item.parse::<u32>().map_err(|_| Error::InvalidHipNumber {
                        line: nth + 1,
                        value: item.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if stars.len() != 2 * pairs {
                return Err(Error::PairsMismatch {
                    line: nth + 1,
                    name,
                    expected: pairs,
                    found: stars.len(),
                });
            }

            let edges = stars.into_iter().tuples().collect::<Vec<(u32, u32)>>();

            #[cfg(feature = "log")]
            debug!("{}: {} edges", name, edges.len());

            constellations.push(Constellation { name, edges });
        }
        Ok(Self { constellations })
    }

    /// Parses constellation lines from local file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let fd = File::open(path)?;
        let mut reader = BufReader::new(fd);
        Self::parse(&mut reader)
    }

    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }

    /// Iterates over all edges, of all constellations
    pub fn edges(&self) -> impl Iterator<Item = (&str, u32, u32)> + '_ {
        self.constellations.iter().flat_map(|constellation| {
            constellation
                .edges
                .iter()
                .map(move |(start, end)| (constellation.name.as_str(), *start, *end))
        })
    }

    /// Converts to two star [Figure]s (one per edge),
    /// named after Hipparcos numbers.
    pub fn figures(&self) -> Vec<Figure> {
        self.edges()
            .map(|(name, start, end)| {
                Figure::edge(Some(name), &start.to_string(), &end.to_string())
            })
            .collect()
    }
}
