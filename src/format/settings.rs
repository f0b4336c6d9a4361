//! Embedded JSON settings block.
//!
//! The block at `settings_offset` starts with an int32 byte length followed by
//! UTF-8 JSON text. Only the per-step configuration list `cfgs` is interpreted:
//! entry 0 describes the mass sweep, entry 1 (if present) the pressure-vs-time
//! gas list. Everything else is retained verbatim in [`ScanSettings::raw`].

use std::io::{Read, Seek};

use serde::Deserialize;
use serde_json::Value;

use super::error::DecodeError;
use super::metadata::MetadataTable;
use super::reader::PrimitiveReader;

/// Tolerance when checking that the sample count formula yields an integer.
const SAMPLE_COUNT_EPSILON: f64 = 1e-6;

/// Mass sweep configuration (step role 0).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumConfig {
    /// Samples per atomic mass unit
    pub points_per_amu: f64,
    /// Scan rate setting
    pub scan_rate: f64,
    /// First mass of the sweep
    pub start_mass: f64,
    /// Last mass of the sweep
    pub stop_mass: f64,
}

impl SpectrumConfig {
    /// Number of samples in one spectrum row:
    /// `(stop_mass - start_mass) * points_per_amu + 1`.
    pub fn sample_count(&self) -> usize {
        (((self.stop_mass - self.start_mass) * self.points_per_amu).round() as usize).saturating_add(1)
    }

    fn validate(&self) -> Result<(), DecodeError> {
        let fields = [
            self.points_per_amu,
            self.scan_rate,
            self.start_mass,
            self.stop_mass,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(DecodeError::InvalidFormat(format!(
                "non-finite spectrum configuration: {:?}",
                self
            )));
        }
        if self.points_per_amu <= 0.0 {
            return Err(DecodeError::InvalidFormat(format!(
                "pointsPerAmu must be positive, got {}",
                self.points_per_amu
            )));
        }
        if self.stop_mass < self.start_mass {
            return Err(DecodeError::InvalidFormat(format!(
                "stopMass {} is below startMass {}",
                self.stop_mass, self.start_mass
            )));
        }
        let span = (self.stop_mass - self.start_mass) * self.points_per_amu;
        // Rows carry a uint32 sample count.
        if span >= u32::MAX as f64 {
            return Err(DecodeError::InvalidFormat(format!(
                "mass range {}..{} at {} points/amu exceeds the row sample limit",
                self.start_mass, self.stop_mass, self.points_per_amu
            )));
        }
        if (span - span.round()).abs() > SAMPLE_COUNT_EPSILON {
            return Err(DecodeError::InvalidFormat(format!(
                "mass range {}..{} at {} points/amu does not give a whole sample count",
                self.start_mass, self.stop_mass, self.points_per_amu
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SettingsRoot {
    cfgs: Vec<Value>,
}

#[derive(Deserialize)]
struct PvstConfig {
    gases: Vec<Value>,
}

/// Typed view over the settings JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    spectrum: SpectrumConfig,
    gases: Option<Vec<Value>>,
    config_count: usize,
    raw: Value,
}

impl ScanSettings {
    /// Seek to the settings block described by `metadata` and parse it.
    pub fn decode<R: Read + Seek>(
        reader: &mut PrimitiveReader<R>,
        metadata: &MetadataTable,
    ) -> Result<Self, DecodeError> {
        let offset = metadata.settings_offset;
        reader.seek_absolute(offset)?;

        let size = usize::try_from(metadata.settings_size).map_err(|_| {
            DecodeError::InvalidFormat(format!(
                "settings size {} does not fit in memory",
                metadata.settings_size
            ))
        })?;
        if size < 4 {
            return Err(DecodeError::InvalidFormat(format!(
                "settings block at offset {} is {} bytes, too small for its length prefix",
                offset, size
            )));
        }
        let block = reader.read_bytes(size)?;

        let declared = i32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        let text_len = usize::try_from(declared)
            .ok()
            .filter(|len| *len <= size - 4)
            .ok_or_else(|| {
                DecodeError::InvalidFormat(format!(
                    "settings JSON length {} at offset {} does not fit in a {}-byte block",
                    declared, offset, size
                ))
            })?;

        let text = std::str::from_utf8(&block[4..4 + text_len]).map_err(|e| {
            DecodeError::InvalidFormat(format!(
                "settings JSON at offset {} is not UTF-8: {}",
                offset + 4,
                e
            ))
        })?;

        Self::from_json(text)
    }

    /// Parse settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| DecodeError::InvalidFormat(format!("malformed settings JSON: {}", e)))?;
        let root = SettingsRoot::deserialize(&raw)
            .map_err(|e| DecodeError::InvalidFormat(format!("settings JSON: {}", e)))?;

        let first = root.cfgs.first().ok_or_else(|| {
            DecodeError::InvalidFormat("settings JSON has no step configurations".to_string())
        })?;
        let spectrum = SpectrumConfig::deserialize(first)
            .map_err(|e| DecodeError::InvalidFormat(format!("step 0 configuration: {}", e)))?;
        spectrum.validate()?;

        let gases = root
            .cfgs
            .get(1)
            .map(|cfg| {
                PvstConfig::deserialize(cfg)
                    .map(|c| c.gases)
                    .map_err(|e| DecodeError::InvalidFormat(format!("step 1 configuration: {}", e)))
            })
            .transpose()?;

        Ok(Self {
            spectrum,
            gases,
            config_count: root.cfgs.len(),
            raw,
        })
    }

    /// Mass sweep configuration from step 0.
    pub fn spectrum(&self) -> &SpectrumConfig {
        &self.spectrum
    }

    /// Samples per AMU.
    pub fn points_per_amu(&self) -> f64 {
        self.spectrum.points_per_amu
    }

    /// Scan rate.
    pub fn scan_rate(&self) -> f64 {
        self.spectrum.scan_rate
    }

    /// First mass of the sweep.
    pub fn start_mass(&self) -> f64 {
        self.spectrum.start_mass
    }

    /// Last mass of the sweep.
    pub fn stop_mass(&self) -> f64 {
        self.spectrum.stop_mass
    }

    /// Gas list of step 1, if configured.
    pub fn gases(&self) -> Option<&[Value]> {
        self.gases.as_deref()
    }

    /// Number of gases sampled per pressure-vs-time row, if step 1 is configured.
    pub fn gas_count(&self) -> Option<usize> {
        self.gases.as_ref().map(Vec::len)
    }

    /// Number of step configurations present in the JSON.
    pub fn config_count(&self) -> usize {
        self.config_count
    }

    /// The full parsed settings document.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
