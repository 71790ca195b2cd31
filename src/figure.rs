//! Constellation figures and star labels
use crate::resolver::{Error as ResolverError, Polyline, Resolver};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
 * Built-in tables, generated by build.rs from data/figures.json and data/labels.json
 */
include!(concat!(env!("OUT_DIR"), "/figures.rs"));

/// [Figure] is a chain of star names, drawn as a line.
/// Names may repeat (to close a polygon) and may only partially
/// match a catalogue name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Figure {
    /// Constellation this figure belongs to
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Star names, in drawing order
    pub stars: Vec<String>,
}

/// [Label] annotates a prominent star
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Label {
    /// Catalogue name of the star
    pub star: String,
    /// Displayed text
    pub label: String,
}

impl Figure {
    /// Builds a new [Figure]
    pub fn new(name: Option<&str>, stars: &[&str]) -> Self {
        Self {
            name: name.map(|name| name.to_string()),
            stars: stars.iter().map(|star| star.to_string()).collect(),
        }
    }

    /// Builds a two star [Figure], describing one line edge
    pub fn edge(name: Option<&str>, start: &str, end: &str) -> Self {
        Self::new(name, &[start, end])
    }

    /// Returns true if this figure is a single line edge
    pub fn is_edge(&self) -> bool {
        self.stars.len() == 2
    }

    /// Resolves self against catalogue names, see [Resolver::resolve]
    pub fn resolve<S: AsRef<str>>(
        &self,
        resolver: &Resolver<'_, S>,
        theta: &[f64],
        r: &[f64],
    ) -> Result<Polyline, ResolverError> {
        resolver.resolve(&self.stars, theta, r)
    }
}

impl Label {
    pub fn new(star: &str, label: &str) -> Self {
        Self {
            star: star.to_string(),
            label: label.to_string(),
        }
    }
}

/// Returns the built-in constellation figures,
/// described with Bright Star Catalogue names.
pub fn builtin_figures() -> Vec<Figure> {
    FIGURE_TABLE
        .iter()
        .map(|helper| Figure::new(helper.name, helper.stars))
        .collect()
}

/// Returns the built-in labels (prominent stars).
pub fn builtin_labels() -> Vec<Label> {
    LABEL_TABLE
        .iter()
        .map(|helper| Label::new(helper.star, helper.label))
        .collect()
}

/// Returns all constellation names, as described in the built-in figures
pub fn builtin_constellations() -> Vec<&'static str> {
    let mut names = FIGURE_TABLE
        .iter()
        .filter_map(|helper| helper.name)
        .collect::<Vec<_>>();
    names.dedup();
    names
}
