//! Command-line entry point for the HepMC to DOT converter.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use hepmc2dot::{convert_files, RenderConfig};

/// Command line arguments for the converter
#[derive(Parser, Debug)]
#[command(name = "hepmc2dot")]
#[command(about = "Convert HepMC::IO_GenEvent ASCII files into DOT files")]
struct Args {
    /// Input HepMC::IO_GenEvent formatted ASCII file
    hepmc_file: PathBuf,

    /// Output DOT file
    dot_file: PathBuf,

    /// Scale factor applied to vertex positions
    #[arg(long)]
    scale: Option<f64>,

    /// TOML file with render settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => match RenderConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("hepmc2dot: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => RenderConfig::default(),
    };
    if let Some(scale) = args.scale {
        config.scale = scale;
    }

    match convert_files(&args.hepmc_file, &args.dot_file, config) {
        Ok(events) => {
            println!("Converted {events} events.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("hepmc2dot: {err}");
            ExitCode::FAILURE
        }
    }
}
