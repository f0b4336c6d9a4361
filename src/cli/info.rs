use anyhow::{Context, Result};
use log::info;
use serde_json::Value;
use std::path::PathBuf;

use rgadata::format::DecodeConfig;
use rgadata::scan::ScanDocument;

#[cfg(feature = "colorized_output")]
fn heading(text: &str) -> String {
    console::style(text).bold().cyan().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn heading(text: &str) -> String {
    text.to_string()
}

#[cfg(feature = "colorized_output")]
fn label(text: &str) -> String {
    console::style(text).bold().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn label(text: &str) -> String {
    text.to_string()
}

fn gas_label(gas: &Value) -> String {
    gas.get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| gas.to_string())
}

/// Display information about an .rgadata file
pub fn run(file: PathBuf, show_settings: bool, skip_pvst: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let config = DecodeConfig::default().with_skip_pvst(skip_pvst);
    info!("Decoding {} (skip_pvst = {})", file.display(), skip_pvst);
    let scan = ScanDocument::open_with_config(&file, &config)
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    let header = scan.header();
    let metadata = scan.metadata();
    let settings = scan.settings();

    println!("{}", heading("RGA Scan Information"));
    println!("{}", heading("===================="));
    println!("{}: {}", label("File"), file.display());
    println!();

    println!("{}", heading("Header:"));
    println!("  Identifier: {}", header.identifier_text());
    println!("  Format version: {}", header.format_version);
    println!(
        "  Precision: {}",
        if header.single_precision { "single" } else { "double" }
    );
    println!();

    println!("{}", heading("Layout:"));
    println!(
        "  Settings: offset {}, {} bytes",
        metadata.settings_offset, metadata.settings_size
    );
    println!(
        "  Data: offset {}, {} bytes",
        metadata.data_offset, metadata.data_size
    );
    println!(
        "  Cycles: {} x {} bytes",
        metadata.cycle_count, metadata.cycle_byte_size
    );
    println!("  Step sizes: {:?}", metadata.step_byte_sizes);
    if !metadata.sizes_consistent() {
        println!("  (data size does not match cycle count x cycle size)");
    }
    println!();

    println!("{}", heading("Settings:"));
    println!(
        "  Mass range: {} - {} AMU",
        settings.start_mass(),
        settings.stop_mass()
    );
    println!("  Points per AMU: {}", settings.points_per_amu());
    println!("  Scan rate: {}", settings.scan_rate());
    println!("  Step configurations: {}", settings.config_count());
    match settings.gases() {
        Some(gases) => {
            let names: Vec<String> = gases.iter().map(gas_label).collect();
            println!("  Gases ({}): {}", gases.len(), names.join(", "));
        }
        None => println!("  Gases: none"),
    }
    println!();

    println!("{}", heading("Data:"));
    println!("  Decoded cycles: {}", scan.cycle_count());
    println!(
        "  Spectra: {} x {}",
        scan.spectra().len(),
        scan.amu_axis().sample_count()
    );
    let pvst_width = scan.pvst().first().map_or(0, Vec::len);
    println!("  Pressure vs time: {} x {}", scan.pvst().len(), pvst_width);
    if skip_pvst {
        println!("  (pressure-vs-time payloads skipped)");
    }
    if scan.auxiliary().is_empty() {
        println!("  Auxiliary samples: not recorded");
    } else {
        println!("  Auxiliary samples: {}", scan.auxiliary().len());
    }
    if let (Some(first), Some(last)) = (
        scan.spectrum_timestamps().first(),
        scan.spectrum_timestamps().last(),
    ) {
        println!("  Time span: {:.1} s", (last - first) as f64 / 1000.0);
    }

    if show_settings {
        println!();
        println!("{}", heading("Settings JSON:"));
        let pretty = serde_json::to_string_pretty(settings.raw())
            .context("Failed to format settings JSON")?;
        println!("{}", pretty);
    }

    Ok(())
}
