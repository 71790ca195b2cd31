//! Library errors
use thiserror::Error;

use crate::{
    catalogue::Error as CatalogueError, ephemeris::comet::Error as CometError,
    resolver::Error as ResolverError, stellarium::Error as StellariumError,
};

/// Errors that may rise when building a chart
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),
    #[error("stellarium error: {0}")]
    Stellarium(#[from] StellariumError),
    #[error("comet error: {0}")]
    Comet(#[from] CometError),
    #[error("constellation resolution error: {0}")]
    Resolver(#[from] ResolverError),
    #[error("invalid observation time \"{0}\"")]
    EpochParsing(String),
    #[error("projection centre must be a valid position")]
    InvalidProjectionCentre,
}
