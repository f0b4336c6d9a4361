//! TOML configuration file support.
//!
//! Settings shared by several commands can live in a config file instead of
//! being repeated as flags:
//!
//! ```toml
//! # rgadata.toml
//! [decode]
//! skip_pvst = true
//!
//! [display]
//! palette = ["#000000", "#e41a1c", "#377eb8"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use rgadata::collection::Palette;
use rgadata::format::DecodeConfig;

/// Root configuration structure for rgadata.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Decoder settings.
    #[serde(default)]
    pub decode: DecodeSection,

    /// Plot display settings.
    #[serde(default)]
    pub display: DisplaySection,
}

/// `[decode]` table.
#[derive(Debug, Default, Deserialize)]
pub struct DecodeSection {
    /// Seek over pressure-vs-time payloads instead of decoding them.
    pub skip_pvst: Option<bool>,
}

/// `[display]` table.
#[derive(Debug, Default, Deserialize)]
pub struct DisplaySection {
    /// Colour tokens assigned to compared scans, in order.
    pub palette: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Decoder options, with a `--skip-pvst` flag taking precedence.
    pub fn decode_config(&self, skip_pvst_flag: bool) -> DecodeConfig {
        let skip_pvst = skip_pvst_flag || self.decode.skip_pvst.unwrap_or(false);
        DecodeConfig::default().with_skip_pvst(skip_pvst)
    }

    /// Palette from the `[display]` table, or the default palette.
    pub fn palette(&self) -> Result<Palette> {
        match &self.display.palette {
            Some(colours) => Palette::new(colours.iter().cloned())
                .context("Invalid [display] palette in configuration"),
            None => Ok(Palette::default()),
        }
    }
}
