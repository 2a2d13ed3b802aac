#[macro_use]
extern crate log;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use matstat::config::{Cli, Config};
use matstat::utils::format;
use matstat::{stats, Axis, Matrix, MatrixError};

const USAGE: &str = "Usage: matstat {-r|--rows|-c|--cols} [--format text|json] [--lenient] [-v...] [FILE]";

fn main() {
    // Flags override environment variables, which override `matstat.toml`.
    let config = match Config::load(&Cli::parse()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = TermLogger::init(
        config.log_level(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logger: {}", e);
    }
    debug!("{:?}", config);

    // Exactly one axis must be configured (typically with --rows or --cols).
    let axis = match config.axis {
        Some(axis) => axis,
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, axis) {
        eprintln!("matstat: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, axis: Axis) -> Result<()> {
    let (loaded, source) = match &config.file {
        Some(path) => (
            Matrix::open(path, config.row_width()),
            path.display().to_string(),
        ),
        None => (
            Matrix::from_reader(io::stdin().lock(), config.row_width()),
            "standard input".to_string(),
        ),
    };
    let matrix = match loaded {
        Ok(matrix) => matrix,
        // Only I/O failures mean the source couldn't be read.
        Err(MatrixError::Io(e)) => return Err(e).context(format!("cannot read {}", source)),
        Err(e) => return Err(e).context(format!("in {}", source)),
    };
    info!(
        "loaded {} rows x {} columns",
        matrix.num_rows(),
        matrix.num_cols()
    );

    let result = stats::compute(&matrix, axis)?;

    let mut out = BufWriter::new(io::stdout().lock());
    format::display(&mut out, &result, config.format)?;
    out.flush()?;
    Ok(())
}
