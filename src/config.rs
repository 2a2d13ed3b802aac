// Command line flags layered over `matstat.toml` and `MATSTAT_*` variables.

use std::path::PathBuf;

use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::matrix::{Axis, RowWidth};
use crate::utils::format::OutputFormat;

pub const CONFIG_FILE: &str = "matstat.toml";
pub const ENV_PREFIX: &str = "MATSTAT_";

#[derive(Clone, Debug, Parser)]
#[command(
    name = "matstat",
    version,
    about = "Average and median of each row or column of an integer matrix"
)]
pub struct Cli {
    /// Compute statistics for each row
    #[arg(short, long, conflicts_with = "cols")]
    pub rows: bool,

    /// Compute statistics for each column
    #[arg(short, long)]
    pub cols: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Take the column count from the last line instead of requiring equal rows
    #[arg(long)]
    pub lenient: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Matrix file, standard input if omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

// Only flags that were actually given, so unset flags don't clobber values
// from the config file or environment.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lenient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verbose: Option<u8>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        let axis = if cli.rows {
            Some(Axis::Rows)
        } else if cli.cols {
            Some(Axis::Columns)
        } else {
            None
        };
        Overrides {
            axis,
            file: cli.file.clone(),
            format: cli.format,
            lenient: cli.lenient.then_some(true),
            verbose: (cli.verbose > 0).then_some(cli.verbose),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows or columns; exactly one per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,

    /// Path of the matrix, standard input if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    pub format: OutputFormat,

    pub lenient: bool,

    pub verbose: u8,
}

impl Config {
    pub fn figment(cli: &Cli) -> Figment {
        // Start with built in defaults.
        Figment::from(Serialized::defaults(Config::default()))
            // Override with the toml configuration file.
            .merge(Toml::file(CONFIG_FILE))
            // Override with anything set in environment variables.
            .merge(Env::prefixed(ENV_PREFIX))
            // Override with anything set via flags.
            .merge(Serialized::defaults(Overrides::from(cli)))
    }

    pub fn load(cli: &Cli) -> Result<Config, figment::Error> {
        Config::figment(cli).extract()
    }

    pub fn row_width(&self) -> RowWidth {
        if self.lenient {
            RowWidth::LastLine
        } else {
            RowWidth::Strict
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
