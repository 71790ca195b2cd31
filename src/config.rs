//! Chart configuration, as read from a JSON description.
//! Every field is optional: a missing field takes its default value.
use std::path::PathBuf;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::{
    catalogue::CatalogueKind,
    chart::{polar::PolarChartOpts, stereo::StereoChartOpts},
    coords::Equatorial,
    error::Error,
    figure::{builtin_figures, builtin_labels, Figure, Label},
    observer::{local_time_to_utc, Observer},
};

fn default_site() -> String {
    String::from("Potsdam")
}

fn default_time() -> String {
    String::from("2019-12-01 23:00:00")
}

fn default_utc_offset() -> f64 {
    1.0
}

fn default_load_magnitude() -> f64 {
    7.0
}

fn default_bright_magnitude() -> f64 {
    4.5
}

fn default_faint_magnitude() -> f64 {
    6.0
}

fn default_catalogue() -> PathBuf {
    PathBuf::from("bsc5.dat")
}

fn default_output() -> PathBuf {
    PathBuf::from("starchart.html")
}

fn default_size() -> (u32, u32) {
    (1200, 1200)
}

fn default_planets() -> bool {
    true
}

fn default_center() -> Equatorial {
    Equatorial::new(0.0, 90.0)
}

fn default_field_of_view() -> f64 {
    90.0
}

fn default_limiting_magnitude() -> f64 {
    5.0
}

fn default_hipparcos() -> PathBuf {
    PathBuf::from("hip_main.dat")
}

fn default_fab() -> PathBuf {
    PathBuf::from("constellationship.fab")
}

fn default_track_offsets() -> Vec<f64> {
    vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]
}

/// Comet to draw on a stereographic chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CometConfig {
    /// MPC one-line elements file (CometEls.txt)
    pub elements: PathBuf,
    /// Designation, or part of it (for example "NEOWISE")
    pub designation: String,
    /// Track sampling, in days relative to the chart epoch
    #[serde(default = "default_track_offsets")]
    pub track_offsets_days: Vec<f64>,
}

/// Stereographic chart options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StereoConfig {
    /// Projection centre
    #[serde(default = "default_center")]
    pub center: Equatorial,
    /// Field of view, in degrees
    #[serde(default = "default_field_of_view")]
    pub field_of_view: f64,
    /// Faintest star drawn
    #[serde(default = "default_limiting_magnitude")]
    pub limiting_magnitude: f64,
    /// Hipparcos catalogue file: constellation lines refer to HIP numbers
    #[serde(default = "default_hipparcos")]
    pub catalogue: PathBuf,
    /// Stellarium constellationship.fab file
    #[serde(default = "default_fab")]
    pub fab: PathBuf,
    /// Optional comet
    #[serde(default)]
    pub comet: Option<CometConfig>,
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            field_of_view: default_field_of_view(),
            limiting_magnitude: default_limiting_magnitude(),
            catalogue: default_hipparcos(),
            fab: default_fab(),
            comet: None,
        }
    }
}

impl StereoConfig {
    /// Converts to [StereoChartOpts]
    pub fn chart_opts(&self) -> StereoChartOpts {
        StereoChartOpts {
            center: self.center,
            field_of_view: self.field_of_view,
            limiting_magnitude: self.limiting_magnitude,
            track_offsets_days: match &self.comet {
                Some(comet) => comet.track_offsets_days.clone(),
                None => default_track_offsets(),
            },
        }
    }
}

/// [ChartConfig] describes a complete chart run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Site name, used in the caption
    #[serde(default = "default_site")]
    pub site: String,
    /// Observation site
    #[serde(default)]
    pub observer: Observer,
    /// Local civil time, "YYYY-MM-DD HH:MM:SS"
    #[serde(default = "default_time")]
    pub time: String,
    /// Offset of the local time to UTC, in hours
    #[serde(default = "default_utc_offset")]
    pub utc_offset: f64,
    /// Stars fainter than this are not loaded
    #[serde(default = "default_load_magnitude")]
    pub load_magnitude: f64,
    /// Stars brighter than this are drawn with sized markers
    #[serde(default = "default_bright_magnitude")]
    pub bright_magnitude: f64,
    /// Faint layer magnitude limit
    #[serde(default = "default_faint_magnitude")]
    pub faint_magnitude: f64,
    /// Star catalogue file
    #[serde(default = "default_catalogue")]
    pub catalogue: PathBuf,
    /// Star catalogue layout
    #[serde(default)]
    pub catalogue_kind: CatalogueKind,
    /// Output file (HTML)
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Chart size, in pixels
    #[serde(default = "default_size")]
    pub size: (u32, u32),
    /// Place planets on the polar chart
    #[serde(default = "default_planets")]
    pub planets: bool,
    /// Custom constellation figures, replacing the built-in ones
    #[serde(default)]
    pub figures: Option<Vec<Figure>>,
    /// Custom labels, replacing the built-in ones
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
    /// Stereographic chart options
    #[serde(default)]
    pub stereo: StereoConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            site: default_site(),
            observer: Observer::default(),
            time: default_time(),
            utc_offset: default_utc_offset(),
            load_magnitude: default_load_magnitude(),
            bright_magnitude: default_bright_magnitude(),
            faint_magnitude: default_faint_magnitude(),
            catalogue: default_catalogue(),
            catalogue_kind: CatalogueKind::default(),
            output: default_output(),
            size: default_size(),
            planets: default_planets(),
            figures: None,
            labels: None,
            stereo: StereoConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Observation instant (UTC)
    pub fn epoch(&self) -> Result<Epoch, Error> {
        local_time_to_utc(&self.time, self.utc_offset)
    }

    /// Converts to [PolarChartOpts]
    pub fn polar_opts(&self) -> PolarChartOpts {
        PolarChartOpts {
            load_magnitude: self.load_magnitude,
            bright_magnitude: self.bright_magnitude,
            faint_magnitude: self.faint_magnitude,
            planets: self.planets,
            figures: self.figures.clone().unwrap_or_else(builtin_figures),
            labels: self.labels.clone().unwrap_or_else(builtin_labels),
            ..Default::default()
        }
    }

    /// Chart caption
    pub fn caption(&self) -> String {
        format!("Star chart for {}, {} (UTC{:+})", self.site, self.time, self.utc_offset)
    }
}
