use std::fs::read_to_string;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use starchart::prelude::{ChartConfig, CometConfig};

use crate::Error;

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

fn polar_subcommand() -> Command {
    Command::new("polar")
        .arg_required_else_help(false)
        .about("Polar chart of the visible sky, for one site and one instant.
Stars are read from the Yale Bright Star Catalogue (bsc5.dat),
constellation figures and labels are built in, unless redefined
in the configuration file.")
}

fn stereo_subcommand() -> Command {
    Command::new("stereo")
        .arg_required_else_help(false)
        .about("Stereographic chart of a sky region, with Stellarium constellation lines.
Stars are read from the Hipparcos catalogue (hip_main.dat).")
        .arg(Arg::new("fab")
            .long("fab")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Stellarium constellation lines (constellationship.fab)."))
        .arg(Arg::new("comet")
            .long("comet")
            .value_name("DESIGNATION")
            .help("Draw the track of given comet. Partial designations are accepted, for example \"NEOWISE\"."))
        .arg(Arg::new("elements")
            .long("elements")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .requires("comet")
            .help("MPC comet elements (CometEls.txt). Defaults to CometEls.txt."))
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        let cmd = Command::new("starchart")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Star charts for a given site and instant")
            .long_about("starchart draws star charts from bright star catalogues,
with constellation figures, planets and comet tracks.
Charts are rendered as interactive HTML pages.")
            .arg_required_else_help(true)
            .subcommand_required(true)
            .color(ColorChoice::Always)
            .arg(Arg::new("cfg")
                .long("cfg")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Chart configuration file (JSON). See --help for more information.")
                .long_help("Every field of the configuration is optional.
Default values describe Potsdam on 2019-12-01 23:00 (UTC+1).
Example:
{
    \"site\": \"Paris\",
    \"observer\": { \"latitude\": 48.85, \"longitude\": 2.35 },
    \"time\": \"2020-07-15 01:00:00\",
    \"utc_offset\": 2.0
}"))
            .arg(Arg::new("catalogue")
                .short('c')
                .long("catalogue")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Star catalogue. Gzip compressed files (.gz) are supported."))
            .arg(Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Output file."))
            .arg(Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Disable all terminal output."))
            .subcommand(polar_subcommand())
            .subcommand(stereo_subcommand());
        Self {
            matches: cmd.get_matches(),
        }
    }

    /*
     * Global options are available from the subcommand matches
     */
    fn submatches(&self) -> &ArgMatches {
        match self.matches.subcommand() {
            Some((_, submatches)) => submatches,
            None => &self.matches,
        }
    }

    /// True when -q (quiet) option is active
    pub fn quiet(&self) -> bool {
        self.submatches().get_flag("quiet")
    }

    fn path(&self, id: &str) -> Option<PathBuf> {
        self.submatches().get_one::<PathBuf>(id).cloned()
    }

    /// Builds the [ChartConfig]: configuration file (if any),
    /// then command line overrides.
    pub fn config(&self) -> Result<ChartConfig, Error> {
        let mut cfg = match self.path("cfg") {
            Some(path) => {
                let content = read_to_string(&path)?;
                let cfg: ChartConfig = serde_json::from_str(&content)?;
                info!("using configuration \"{}\"", path.display());
                cfg
            },
            None => ChartConfig::default(),
        };

        if let Some(output) = self.path("output") {
            cfg.output = output;
        }

        match self.matches.subcommand() {
            Some(("polar", _)) => {
                if let Some(catalogue) = self.path("catalogue") {
                    cfg.catalogue = catalogue;
                }
            },
            Some(("stereo", submatches)) => {
                if let Some(catalogue) = self.path("catalogue") {
                    cfg.stereo.catalogue = catalogue;
                }
                if let Some(fab) = submatches.get_one::<PathBuf>("fab") {
                    cfg.stereo.fab = fab.clone();
                }
                if let Some(designation) = submatches.get_one::<String>("comet") {
                    let elements = submatches
                        .get_one::<PathBuf>("elements")
                        .cloned()
                        .or_else(|| cfg.stereo.comet.as_ref().map(|comet| comet.elements.clone()))
                        .unwrap_or_else(|| PathBuf::from("CometEls.txt"));
                    let track_offsets_days = match &cfg.stereo.comet {
                        Some(comet) => comet.track_offsets_days.clone(),
                        None => vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0],
                    };
                    cfg.stereo.comet = Some(CometConfig {
                        elements,
                        designation: designation.clone(),
                        track_offsets_days,
                    });
                }
            },
            _ => {},
        }

        debug!("{:#?}", cfg);
        Ok(cfg)
    }
}
