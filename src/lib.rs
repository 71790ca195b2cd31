#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::type_complexity)]

/*
 * Star charts for a given site and instant.
 * A bright star catalogue is turned into horizon (or projected) coordinates,
 * constellation figures are resolved against the catalogue names,
 * and the result is handed to a renderer as a chart model.
 */

mod constants;

pub mod catalogue;
pub mod chart;
pub mod coords;
pub mod ephemeris;
pub mod error;
pub mod figure;
pub mod observer;
pub mod projection;
pub mod resolver;
pub mod star;
pub mod stellarium;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod config;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        catalogue::{Catalogue, CatalogueKind, CatalogueStar},
        chart::{
            polar::{PlanetMarker, PolarChart, PolarChartOpts, StarMarker, StarLabel},
            stereo::{CometMarker, StereoChart, StereoChartOpts, StereoStar},
        },
        coords::{Equatorial, Horizontal},
        ephemeris::{comet::CometElements, planet::Planet},
        error::Error,
        figure::{Figure, Label},
        observer::Observer,
        projection::{PolarProjection, StereographicProjection},
        resolver::{Polyline, Resolver},
        star::StarRecord,
        stellarium::Stellarium,
    };

    #[cfg(feature = "serde")]
    pub use crate::config::{ChartConfig, CometConfig, StereoConfig};

    // pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}
