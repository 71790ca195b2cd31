//! Command line tool to draw star charts.
//! Refer to README for command line arguments.

mod cli; // command line interface
mod plot; // rendering

use cli::Cli;
use plot::{plot_polar_chart, plot_stereo_chart, render_html};

use starchart::prelude::{
    Catalogue, CatalogueKind, ChartConfig, CometElements, PolarChart, StereoChart, Stellarium,
};

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("invalid configuration")]
    ConfigError(#[from] serde_json::Error),
    #[error("chart error")]
    ChartError(#[from] starchart::prelude::Error),
    #[error("catalogue error")]
    CatalogueError(#[from] starchart::catalogue::Error),
    #[error("stellarium error")]
    StellariumError(#[from] starchart::stellarium::Error),
    #[error("comet error")]
    CometError(#[from] starchart::ephemeris::comet::Error),
}

/*
 * Polar chart of the visible sky
 */
fn polar(cfg: &ChartConfig) -> Result<(), Error> {
    let epoch = cfg.epoch()?;
    let catalogue = Catalogue::from_path(&cfg.catalogue, cfg.catalogue_kind)?;
    info!(
        "\"{}\": {} stars loaded",
        cfg.catalogue.display(),
        catalogue.len()
    );

    let chart = PolarChart::build(&catalogue, cfg.observer, epoch, &cfg.polar_opts())?;
    for (name, polyline) in chart.lines.iter() {
        if polyline.is_degenerate() {
            warn!(
                "{}: not enough visible stars to draw",
                name.as_deref().unwrap_or("figure")
            );
        }
    }

    let plot = plot_polar_chart(&chart, &cfg.caption(), cfg.size);
    render_html(&cfg.output, &plot)
}

/*
 * Stereographic chart, with optional comet track
 */
fn stereo(cfg: &ChartConfig) -> Result<(), Error> {
    let epoch = cfg.epoch()?;
    let stereo = &cfg.stereo;

    let catalogue = Catalogue::from_path(&stereo.catalogue, CatalogueKind::Hipparcos)?;
    info!(
        "\"{}\": {} stars loaded",
        stereo.catalogue.display(),
        catalogue.len()
    );

    let stellarium = if stereo.fab.exists() {
        let stellarium = Stellarium::from_file(&stereo.fab)?;
        info!(
            "\"{}\": {} constellations",
            stereo.fab.display(),
            stellarium.len()
        );
        Some(stellarium)
    } else {
        warn!(
            "\"{}\" does not exist: no constellation lines",
            stereo.fab.display()
        );
        None
    };

    let comet = match &stereo.comet {
        Some(comet) => {
            let comets = CometElements::from_file(&comet.elements)?;
            Some(CometElements::select(&comets, &comet.designation)?)
        },
        None => None,
    };

    let chart = StereoChart::build(
        &catalogue,
        stellarium.as_ref(),
        comet.as_ref(),
        epoch,
        &stereo.chart_opts(),
    )?;

    let title = match &chart.comet {
        Some(designation) => format!("{} ({})", designation, cfg.time),
        None => cfg.caption(),
    };
    let plot = plot_stereo_chart(&chart, &title, cfg.size);
    render_html(&cfg.output, &plot)
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let cfg = cli.config()?;

    match cli.matches.subcommand() {
        Some(("stereo", _)) => stereo(&cfg)?,
        _ => polar(&cfg)?,
    }

    if !cli.quiet() {
        println!("{}", cfg.output.display());
    }
    Ok(())
}
