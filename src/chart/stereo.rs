//! Stereographic chart of a sky region, with Stellarium constellation
//! lines and an optional comet track.
use hifitime::Epoch;

#[cfg(feature = "log")]
use log::{debug, info};

use crate::{
    catalogue::Catalogue,
    chart::date_label,
    coords::{julian_year, Equatorial},
    ephemeris::comet::CometElements,
    error::Error,
    projection::StereographicProjection,
    resolver::Resolver,
    stellarium::Stellarium,
};

/// [StereoChart] options
#[derive(Debug, Clone, PartialEq)]
pub struct StereoChartOpts {
    /// Projection centre
    pub center: Equatorial,
    /// Field of view, in degrees
    pub field_of_view: f64,
    /// Stars fainter than this are not drawn
    pub limiting_magnitude: f64,
    /// Comet track sampling, in days relative to the chart epoch
    pub track_offsets_days: Vec<f64>,
}

impl Default for StereoChartOpts {
    fn default() -> Self {
        Self {
            center: Equatorial::new(0.0, 90.0),
            field_of_view: 90.0,
            limiting_magnitude: 5.0,
            track_offsets_days: vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0],
        }
    }
}

/// Projected star
#[derive(Debug, Clone, PartialEq)]
pub struct StereoStar {
    pub name: String,
    pub magnitude: f64,
    pub x: f64,
    pub y: f64,
    /// Marker area, in square points
    pub size: f64,
}

/// One sample of a comet track
#[derive(Debug, Clone, PartialEq)]
pub struct CometMarker {
    pub epoch: Epoch,
    pub x: f64,
    pub y: f64,
    /// Date label
    pub label: String,
}

/// [StereoChart] is a region of the sky, in the plot plane of a
/// [StereographicProjection]. Coordinates are unitless.
#[derive(Debug, Clone)]
pub struct StereoChart {
    /// Observation instant (UTC)
    pub epoch: Epoch,
    /// Projection in use
    pub projection: StereographicProjection,
    /// Half extent of the plot, on both axes
    pub limit: f64,
    /// Stars brighter than the limiting magnitude
    pub stars: Vec<StereoStar>,
    /// Constellation line edges
    pub edges: Vec<((f64, f64), (f64, f64))>,
    /// Comet designation, when a comet is drawn
    pub comet: Option<String>,
    /// Comet track samples, in time order
    pub track: Vec<CometMarker>,
}

impl StereoChart {
    /// Offset applied to comet labels, in plot units
    pub const LABEL_OFFSET: f64 = 0.002;

    /// Builds the chart. Constellation edges are resolved against all
    /// catalogue stars (not only the bright ones) so a line never
    /// depends on the limiting magnitude.
    pub fn build(
        catalogue: &Catalogue,
        stellarium: Option<&Stellarium>,
        comet: Option<&CometElements>,
        epoch: Epoch,
        opts: &StereoChartOpts,
    ) -> Result<Self, Error> {
        let center = opts.center;
        if !center.ra.is_finite() || !center.dec.is_finite() || center.dec.abs() > 90.0 {
            return Err(Error::InvalidProjectionCentre);
        }

        let projection = StereographicProjection::new(center);
        let limit = StereographicProjection::limit(opts.field_of_view);
        let catalogue_year = catalogue.epoch();
        let year = julian_year(epoch);

        let mut names = Vec::with_capacity(catalogue.len());
        let mut points = Vec::with_capacity(catalogue.len());
        let mut magnitudes = Vec::with_capacity(catalogue.len());

        for star in catalogue.stars.iter() {
            let position =
                star.position
                    .with_proper_motion(star.pm_ra, star.pm_dec, catalogue_year, year);
            if let Some(xy) = projection.project(&position) {
                names.push(star.name.as_str());
                points.push(xy);
                magnitudes.push(star.magnitude);
            }
        }

        let stars = names
            .iter()
            .zip(points.iter().zip(magnitudes.iter()))
            .filter(|(_, (_, mag))| **mag <= opts.limiting_magnitude)
            .map(|(name, ((x, y), mag))| {
                let size = 0.5 + opts.limiting_magnitude - mag;
                StereoStar {
                    name: name.to_string(),
                    magnitude: *mag,
                    x: *x,
                    y: *y,
                    size: size * size,
                }
            })
            .collect::<Vec<_>>();

        #[cfg(feature = "log")]
        info!(
            "{} stars projected, {} brighter than {}",
            points.len(),
            stars.len(),
            opts.limiting_magnitude
        );

        let mut edges = Vec::new();
        if let Some(stellarium) = stellarium {
            // numeric identifiers: exact lookups only,
            // a partial match would designate another star
            let indices = Resolver::new(&names).first_indices();
            for (_name, start, end) in stellarium.edges() {
                let start = indices.get(start.to_string().as_str());
                let end = indices.get(end.to_string().as_str());
                if let (Some(i), Some(j)) = (start, end) {
                    edges.push((points[*i], points[*j]));
                }
            }
            #[cfg(feature = "log")]
            debug!("{} constellation edges", edges.len());
        }

        let track = match comet {
            Some(comet) => comet
                .track(epoch, &opts.track_offsets_days)
                .into_iter()
                .filter_map(|(t, position)| {
                    projection.project(&position).map(|(x, y)| CometMarker {
                        epoch: t,
                        x,
                        y,
                        label: date_label(t),
                    })
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            epoch,
            projection,
            limit,
            stars,
            edges,
            comet: comet.map(|comet| comet.designation.clone()),
            track,
        })
    }

    /// Returns true if given plot point lies within the plot extent
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x.abs() <= self.limit && y.abs() <= self.limit
    }
}
