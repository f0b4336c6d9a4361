use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use rgadata::collection::ScanCollection;
use rgadata::scan::open_all;

use super::config::Config;

/// Decode several files into a collection and summarize their latest spectra
pub fn run(files: &[PathBuf], amu: Option<f64>, config: &Config, skip_pvst: bool) -> Result<()> {
    let decode_config = config.decode_config(skip_pvst);
    let mut collection = ScanCollection::with_palette(config.palette()?);

    info!("Decoding {} files", files.len());
    for (path, result) in files.iter().zip(open_all(files, &decode_config)) {
        match result {
            Ok(scan) => {
                collection.add(Arc::new(scan));
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                eprintln!("Failed to decode {}: {}", path.display(), e);
            }
        }
    }

    if collection.is_empty() {
        anyhow::bail!("None of the {} input files could be decoded", files.len());
    }

    println!("{:<10} {:<32} {:>8}  {}", "COLOUR", "NAME", "CYCLES", "NEAREST");
    for entry in &collection {
        let scan = &entry.document;
        let nearest = match amu.and_then(|target| scan.nearest_sample(target)) {
            Some((position, intensity)) => format!("{:.3e} @ {:.2} AMU", intensity, position),
            None => "-".to_string(),
        };
        println!(
            "{:<10} {:<32} {:>8}  {}",
            entry.colour,
            scan.name(),
            scan.cycle_count(),
            nearest
        );
    }

    println!();
    match collection.view_bounds() {
        Some(bounds) => {
            println!("View: {:.2} - {:.2} AMU", bounds.x_min, bounds.x_max);
            match bounds.y_min_positive {
                Some(low) => println!("Intensity: {:.3e} - {:.3e}", low, bounds.y_max),
                None => println!("Intensity: up to {:.3e}", bounds.y_max),
            }
        }
        None => println!("View: no decoded cycles"),
    }

    Ok(())
}
