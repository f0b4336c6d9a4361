//! # rgadata
//!
//! A command-line tool for inspecting residual gas analyzer `.rgadata` scans.
//!
//! ## Usage
//!
//! ```bash
//! # Header, layout and settings of one recording
//! rgadata info chamber_a.rgadata --settings
//!
//! # Compare the latest spectra of several recordings at 28 AMU
//! rgadata compare chamber_a.rgadata chamber_b.rgadata --amu 28
//!
//! # Export the latest spectrum as CSV
//! rgadata export chamber_a.rgadata --output latest.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
