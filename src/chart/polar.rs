//! Polar chart of the visible sky, for one site and one instant
use hifitime::Epoch;

#[cfg(feature = "log")]
use log::{debug, info};

use crate::{
    catalogue::Catalogue,
    coords::Horizontal,
    ephemeris::planet::Planet,
    error::Error,
    figure::{builtin_figures, builtin_labels, Figure, Label},
    observer::Observer,
    projection::{scale_to, PolarProjection},
    resolver::{Polyline, Resolver},
    star::StarRecord,
};

/// [PolarChart] options
#[derive(Debug, Clone)]
pub struct PolarChartOpts {
    /// Stars fainter than this are not loaded at all
    pub load_magnitude: f64,
    /// Stars brighter than this are drawn with sized markers
    pub bright_magnitude: f64,
    /// Stars between bright and this magnitude form the faint layer
    pub faint_magnitude: f64,
    /// Marker scale: (brightest, faintest)
    pub marker_bounds: (f64, f64),
    /// Place planets above the horizon
    pub planets: bool,
    /// Constellation figures to draw
    pub figures: Vec<Figure>,
    /// Stars to annotate
    pub labels: Vec<Label>,
}

impl Default for PolarChartOpts {
    fn default() -> Self {
        Self {
            load_magnitude: 7.0,
            bright_magnitude: 4.5,
            faint_magnitude: 6.0,
            marker_bounds: (5.0, 0.5),
            planets: true,
            figures: builtin_figures(),
            labels: builtin_labels(),
        }
    }
}

/// Sized star marker
#[derive(Debug, Clone, PartialEq)]
pub struct StarMarker {
    pub name: String,
    pub magnitude: f64,
    pub theta: f64,
    pub r: f64,
    /// Marker area, in square points
    pub size: f64,
}

/// Text attached to a star
#[derive(Debug, Clone, PartialEq)]
pub struct StarLabel {
    pub text: String,
    pub theta: f64,
    pub r: f64,
}

/// Planet above the horizon
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetMarker {
    pub planet: Planet,
    pub horizontal: Horizontal,
    pub theta: f64,
    pub r: f64,
}

/// [PolarChart] is the visible hemisphere: theta is the azimuth (radians),
/// r the zenith distance (degrees).
#[derive(Debug, Clone)]
pub struct PolarChart {
    /// Observation instant (UTC)
    pub epoch: Epoch,
    /// Observation site
    pub observer: Observer,
    /// Stars above the horizon
    pub stars: Vec<StarRecord>,
    /// theta coordinate of each star, index aligned with stars
    pub theta: Vec<f64>,
    /// r coordinate of each star, index aligned with stars
    pub r: Vec<f64>,
    /// Bright stars
    pub bright: Vec<StarMarker>,
    /// Faint stars
    pub faint: Vec<StarMarker>,
    /// Resolved constellation figures
    pub lines: Vec<(Option<String>, Polyline)>,
    /// Annotated stars
    pub labels: Vec<StarLabel>,
    /// Planets above the horizon
    pub planets: Vec<PlanetMarker>,
}

impl PolarChart {
    /// Builds the chart: horizon coordinates for all stars brighter than the load
    /// magnitude, stars below the horizon are dropped, then figures are resolved
    /// against the remaining names.
    pub fn build(
        catalogue: &Catalogue,
        observer: Observer,
        epoch: Epoch,
        opts: &PolarChartOpts,
    ) -> Result<Self, Error> {
        let projection = PolarProjection;
        let catalogue_year = catalogue.epoch();

        let stars = catalogue
            .stars
            .iter()
            .filter(|star| star.magnitude < opts.load_magnitude)
            .map(|star| {
                let horizontal = observer.horizontal_with_proper_motion(
                    &star.position,
                    (star.pm_ra, star.pm_dec),
                    catalogue_year,
                    epoch,
                );
                StarRecord::new(&star.name, star.magnitude, horizontal)
            })
            .filter(|star| star.is_visible())
            .collect::<Vec<_>>();

        #[cfg(feature = "log")]
        info!("{}: {} stars above the horizon", epoch, stars.len());

        let (theta, r): (Vec<f64>, Vec<f64>) = stars
            .iter()
            .map(|star| projection.project(&star.horizontal()))
            .unzip();

        let marker = |index: usize, size: f64| StarMarker {
            name: stars[index].name.clone(),
            magnitude: stars[index].magnitude,
            theta: theta[index],
            r: r[index],
            size,
        };

        let bright_indices = (0..stars.len())
            .filter(|i| stars[*i].magnitude < opts.bright_magnitude)
            .collect::<Vec<_>>();
        let magnitudes = bright_indices
            .iter()
            .map(|i| stars[*i].magnitude)
            .collect::<Vec<_>>();
        let bright = bright_indices
            .iter()
            .zip(scale_to(&magnitudes, opts.marker_bounds))
            .map(|(i, scale)| marker(*i, 0.5 * scale * scale))
            .collect::<Vec<_>>();

        let faint = (0..stars.len())
            .filter(|i| {
                let mag = stars[*i].magnitude;
                mag >= opts.bright_magnitude && mag < opts.faint_magnitude
            })
            .map(|i| marker(i, 0.0))
            .collect::<Vec<_>>();

        let names = stars.iter().map(|star| star.name.as_str()).collect::<Vec<_>>();
        let resolver = Resolver::new(&names);

        let mut lines = Vec::with_capacity(opts.figures.len());
        for figure in opts.figures.iter() {
            let polyline = figure.resolve(&resolver, &theta, &r)?;
            if polyline.len() < figure.stars.len() {
                #[cfg(feature = "log")]
                debug!(
                    "{}: {}/{} stars resolved",
                    figure.name.as_deref().unwrap_or("figure"),
                    polyline.len(),
                    figure.stars.len()
                );
            }
            lines.push((figure.name.clone(), polyline));
        }

        let labels = opts
            .labels
            .iter()
            .filter(|label| !label.star.trim().is_empty())
            .filter_map(|label| {
                resolver.resolve_token(&label.star).map(|i| StarLabel {
                    text: label.label.clone(),
                    theta: theta[i],
                    r: r[i],
                })
            })
            .collect::<Vec<_>>();

        let planets = if opts.planets {
            Self::planets(&observer, epoch)
        } else {
            Vec::new()
        };

        Ok(Self {
            epoch,
            observer,
            stars,
            theta,
            r,
            bright,
            faint,
            lines,
            labels,
            planets,
        })
    }

    /*
     * Planets above the horizon
     */
    fn planets(observer: &Observer, epoch: Epoch) -> Vec<PlanetMarker> {
        let projection = PolarProjection;
        Planet::ALL
            .iter()
            .filter_map(|planet| {
                let horizontal = observer.horizontal(&planet.position(epoch), epoch);
                if horizontal.altitude > 0.0 {
                    let (theta, r) = projection.project(&horizontal);
                    Some(PlanetMarker {
                        planet: *planet,
                        horizontal,
                        theta,
                        r,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns all star names, index aligned with theta and r
    pub fn names(&self) -> Vec<&str> {
        self.stars.iter().map(|star| star.name.as_str()).collect()
    }

    /// Returns the drawable constellation lines (at least two points)
    pub fn drawable_lines(&self) -> impl Iterator<Item = &Polyline> + '_ {
        self.lines
            .iter()
            .map(|(_, polyline)| polyline)
            .filter(|polyline| !polyline.is_degenerate())
    }
}
