use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod compare;
mod config;
mod export;
mod info;

pub use config::Config;

/// rgadata - Residual Gas Analyzer scan inspection tool
#[derive(Parser)]
#[command(name = "rgadata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Requested verbosity (number of `-v` flags).
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display header, layout and settings of an .rgadata file
    Info {
        /// Input .rgadata file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pretty-print the embedded settings JSON
        #[arg(long)]
        settings: bool,

        /// Skip pressure-vs-time payloads while decoding
        #[arg(long)]
        skip_pvst: bool,
    },

    /// Decode several files and compare their latest spectra
    Compare {
        /// Input .rgadata file paths
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Report the latest-cycle intensity nearest this AMU
        #[arg(long, value_name = "AMU")]
        amu: Option<f64>,

        /// TOML configuration file (decode and display settings)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip pressure-vs-time payloads while decoding
        #[arg(long)]
        skip_pvst: bool,
    },

    /// Export one spectrum row as CSV (amu,intensity)
    Export {
        /// Input .rgadata file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Cycle index to export (default: latest cycle)
        #[arg(long, value_name = "N")]
        cycle: Option<usize>,

        /// Output CSV path (default: stdout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info {
            file,
            settings,
            skip_pvst,
        } => info::run(file, settings, skip_pvst),
        Commands::Compare {
            files,
            amu,
            config,
            skip_pvst,
        } => {
            let config = match config {
                Some(path) => Config::from_file(&path)?,
                None => Config::default(),
            };
            compare::run(&files, amu, &config, skip_pvst)
        }
        Commands::Export {
            file,
            cycle,
            output,
        } => export::run(file, cycle, output),
    }
}
