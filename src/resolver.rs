//! Constellation line resolution.
//!
//! A constellation figure is a chain of star names. The [Resolver] matches
//! each name against the catalogue names, left to right, and produces the
//! plot-plane [Polyline] to draw:
//!   1. exact equality, first occurrence wins
//!   2. on exact miss, first catalogue name containing the token
//!   3. no match: the token is omitted and resolution carries on.
//!
//! Missing stars never fail a chart: the figure simply renders as an open
//! (or empty) line. Ambiguous exact matches are not an error either,
//! the first occurrence is used everywhere in this crate.
use std::collections::HashMap;

use thiserror::Error;

#[cfg(feature = "log")]
use log::{debug, warn};

/// Resolution errors, only raised on malformed inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("empty constellation segment")]
    EmptySegment,
    #[error("empty star token in constellation segment")]
    EmptyToken,
    #[error("coordinates mismatch: {names} names, {theta} theta, {r} r")]
    CoordinatesMismatch { names: usize, theta: usize, r: usize },
}

/// How a token was matched
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchKind {
    /// Exact equality. Number of catalogue names equal to the token:
    /// more than one means the lookup was ambiguous.
    Exact { occurrences: usize },
    /// Catalogue name contains the token
    Substring,
}

/// Successful lookup
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Match {
    /// Index in the catalogue names
    pub index: usize,
    /// Match kind
    pub kind: MatchKind,
}

/// Ordered sequence of (theta, r) plot-plane points.
/// One point per resolved token, in token order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Builds a [Polyline] from given points
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }
    /// Appends a point
    pub fn push(&mut self, theta: f64, r: f64) {
        self.points.push((theta, r));
    }
    /// Returns points as (theta, r) pairs
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
    /// Returns all theta coordinates, in order
    pub fn theta(&self) -> Vec<f64> {
        self.points.iter().map(|(theta, _)| *theta).collect()
    }
    /// Returns all r coordinates, in order
    pub fn r(&self) -> Vec<f64> {
        self.points.iter().map(|(_, r)| *r).collect()
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// A polyline with less than two points cannot be drawn as a line
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

impl IntoIterator for Polyline {
    type Item = (f64, f64);
    type IntoIter = std::vec::IntoIter<(f64, f64)>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// [Resolver] matches constellation tokens against catalogue names.
/// It holds no state other than the borrowed names: resolving twice
/// yields identical results.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, S: AsRef<str>> {
    names: &'a [S],
    substring_fallback: bool,
}

impl<'a, S: AsRef<str>> Resolver<'a, S> {
    /// Builds a new [Resolver] over given catalogue names,
    /// with substring fallback enabled.
    pub fn new(names: &'a [S]) -> Self {
        Self {
            names,
            substring_fallback: true,
        }
    }

    /// Disables the substring fallback. Use this when names are numeric
    /// identifiers, where a partial match would designate another star.
    pub fn exact_only(&self) -> Self {
        Self {
            names: self.names,
            substring_fallback: false,
        }
    }

    /// Number of catalogue names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Two-phase lookup of given token. Each name is compared once.
    /// The token is trimmed first, a blank token never matches.
    pub fn lookup(&self, token: &str) -> Option<Match> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let mut exact = None;
        let mut occurrences = 0;
        let mut partial = None;

        for (index, name) in self.names.iter().enumerate() {
            let name = name.as_ref();
            if name == token {
                occurrences += 1;
                if exact.is_none() {
                    exact = Some(index);
                }
            } else if partial.is_none() && self.substring_fallback && name.contains(token) {
                partial = Some(index);
            }
        }

        match (exact, partial) {
            (Some(index), _) => Some(Match {
                index,
                kind: MatchKind::Exact { occurrences },
            }),
            (None, Some(index)) => Some(Match {
                index,
                kind: MatchKind::Substring,
            }),
            (None, None) => None,
        }
    }

    /// Returns index of the catalogue name matching given token, if any.
    /// The caller decides what a miss means.
    pub fn find(&self, token: &str) -> Option<usize> {
        self.lookup(token).map(|m| m.index)
    }

    /// Same as [Self::find], but ambiguous matches and misses are traced.
    pub fn resolve_token(&self, token: &str) -> Option<usize> {
        let token = token.trim();
        match self.lookup(token) {
            Some(m) => {
                match m.kind {
                    MatchKind::Exact { occurrences } if occurrences > 1 => {
                        #[cfg(feature = "log")]
                        warn!(
                            "\"{}\": {} catalogue entries, using first one",
                            token, occurrences
                        );
                    },
                    MatchKind::Substring => {
                        #[cfg(feature = "log")]
                        debug!(
                            "\"{}\" resolved as \"{}\"",
                            token,
                            self.names[m.index].as_ref()
                        );
                    },
                    _ => {},
                }
                Some(m.index)
            },
            None => {
                #[cfg(feature = "log")]
                warn!("\"{}\": star not found", token);
                None
            },
        }
    }

    /// Resolves all tokens of a segment into catalogue indices.
    /// Unresolved tokens are omitted.
    pub fn resolve_indices<T: AsRef<str>>(&self, tokens: &[T]) -> Result<Vec<usize>, Error> {
        if tokens.is_empty() {
            return Err(Error::EmptySegment);
        }
        if tokens.iter().any(|token| token.as_ref().trim().is_empty()) {
            return Err(Error::EmptyToken);
        }
        Ok(tokens
            .iter()
            .filter_map(|token| self.resolve_token(token.as_ref()))
            .collect())
    }

    /// Resolves a segment into a [Polyline], picking coordinates
    /// from `theta` and `r`, which are index-aligned with the names.
    pub fn resolve<T: AsRef<str>>(
        &self,
        tokens: &[T],
        theta: &[f64],
        r: &[f64],
    ) -> Result<Polyline, Error> {
        if theta.len() != self.names.len() || r.len() != self.names.len() {
            return Err(Error::CoordinatesMismatch {
                names: self.names.len(),
                theta: theta.len(),
                r: r.len(),
            });
        }
        let points = self
            .resolve_indices(tokens)?
            .into_iter()
            .map(|index| (theta[index], r[index]))
            .collect();
        Ok(Polyline::new(points))
    }

    /// Resolves every segment, see [Self::resolve].
    pub fn resolve_all<T: AsRef<str>>(
        &self,
        segments: &[Vec<T>],
        theta: &[f64],
        r: &[f64],
    ) -> Result<Vec<Polyline>, Error> {
        segments
            .iter()
            .map(|segment| self.resolve(segment, theta, r))
            .collect()
    }

    /// Resolves a single line edge: both ends must resolve,
    /// otherwise the edge is not drawn.
    pub fn resolve_edge(&self, start: &str, end: &str) -> Result<Option<(usize, usize)>, Error> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(Error::EmptyToken);
        }
        match (self.find(start), self.find(end)) {
            (Some(start), Some(end)) => Ok(Some((start, end))),
            _ => {
                #[cfg(feature = "log")]
                debug!("edge {} - {} dropped: missing star", start, end);
                Ok(None)
            },
        }
    }

    /// Index of the first occurrence of each (trimmed) name, for repeated
    /// exact lookups over large catalogues.
    pub fn first_indices(&self) -> HashMap<&'a str, usize> {
        let names: &'a [S] = self.names;
        let mut indices = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            indices.entry(name.as_ref().trim()).or_insert(index);
        }
        indices
    }
}
