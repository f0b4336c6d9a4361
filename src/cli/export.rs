use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use rgadata::scan::ScanDocument;

/// Write one spectrum row of an .rgadata file as `amu,intensity` CSV
pub fn run(file: PathBuf, cycle: Option<usize>, output: Option<PathBuf>) -> Result<()> {
    let scan = ScanDocument::open(&file)
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    let row = match cycle {
        Some(index) => scan.cycle_at(index)?,
        None => scan.latest_cycle()?,
    };

    let sink: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["amu", "intensity"])?;
    let mut written = 0usize;
    for (amu, intensity) in scan.amu_axis().zip(row) {
        writer.write_record([amu.to_string(), intensity.to_string()])?;
        written += 1;
    }
    writer.flush().context("Failed to write CSV")?;

    if let Some(path) = &output {
        info!("Wrote {} samples to {}", written, path.display());
    }
    Ok(())
}
