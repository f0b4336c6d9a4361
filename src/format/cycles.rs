//! Data region: per-cycle auxiliary samples and step payloads.
//!
//! Cycle layout (version > 17 carries the auxiliary block):
//!
//! ```text
//! [aux: f32 total pressure, f32 RTD temp, f32 flange temp, f32 Vin, f32 Iin, i32 GPIO]
//! step 0: i64 timestamp, u32 n, n x f32        (spectrum row)
//! step 1: i64 timestamp, gas_count x f32       (pressure-vs-time row)
//! ```

use std::io::{Read, Seek};

use log::{debug, warn};

use super::error::DecodeError;
use super::header::FileHeader;
use super::metadata::MetadataTable;
use super::reader::PrimitiveReader;
use super::settings::ScanSettings;
use super::DecodeConfig;

/// Step role of a mass spectrum sweep.
pub const STEP_SPECTRUM: usize = 0;
/// Step role of a pressure-vs-time sampling across the gas list.
pub const STEP_PVST: usize = 1;
/// Highest number of active steps with a known role.
pub const MAX_ACTIVE_STEPS: usize = 2;

/// Auxiliary sensor readings recorded at the start of a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxiliarySample {
    /// Total pressure
    pub total_pressure: f32,
    /// RTD temperature
    pub rtd_temperature: f32,
    /// Flange temperature
    pub flange_temperature: f32,
    /// Analog voltage input
    pub analog_vin: f32,
    /// Analog current input
    pub analog_iin: f32,
    /// GPIO input state
    pub gpio_in: i32,
}

impl AuxiliarySample {
    fn decode<R: Read + Seek>(reader: &mut PrimitiveReader<R>) -> Result<Self, DecodeError> {
        Ok(Self {
            total_pressure: reader.read_f32()?,
            rtd_temperature: reader.read_f32()?,
            flange_temperature: reader.read_f32()?,
            analog_vin: reader.read_f32()?,
            analog_iin: reader.read_f32()?,
            gpio_in: reader.read_i32()?,
        })
    }
}

/// Auxiliary signals stored column-wise, one entry per cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxiliarySignals {
    /// Total pressure per cycle
    pub total_pressures: Vec<f32>,
    /// RTD temperature per cycle
    pub rtd_temperatures: Vec<f32>,
    /// Flange temperature per cycle
    pub flange_temperatures: Vec<f32>,
    /// Analog voltage input per cycle
    pub analog_vin: Vec<f32>,
    /// Analog current input per cycle
    pub analog_iin: Vec<f32>,
    /// GPIO input per cycle
    pub gpio_in: Vec<i32>,
}

impl AuxiliarySignals {
    fn push(&mut self, sample: AuxiliarySample) {
        self.total_pressures.push(sample.total_pressure);
        self.rtd_temperatures.push(sample.rtd_temperature);
        self.flange_temperatures.push(sample.flange_temperature);
        self.analog_vin.push(sample.analog_vin);
        self.analog_iin.push(sample.analog_iin);
        self.gpio_in.push(sample.gpio_in);
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.total_pressures.len()
    }

    /// Returns `true` when no auxiliary samples were recorded.
    pub fn is_empty(&self) -> bool {
        self.total_pressures.is_empty()
    }

    /// Reassemble the sample recorded for `cycle`.
    pub fn sample(&self, cycle: usize) -> Option<AuxiliarySample> {
        Some(AuxiliarySample {
            total_pressure: *self.total_pressures.get(cycle)?,
            rtd_temperature: *self.rtd_temperatures.get(cycle)?,
            flange_temperature: *self.flange_temperatures.get(cycle)?,
            analog_vin: *self.analog_vin.get(cycle)?,
            analog_iin: *self.analog_iin.get(cycle)?,
            gpio_in: *self.gpio_in.get(cycle)?,
        })
    }
}

/// Everything decoded from the data region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleData {
    /// Spectrum rows, one per cycle
    pub spectra: Vec<Vec<f32>>,
    /// Timestamp (ms) of each spectrum row
    pub spectrum_timestamps: Vec<i64>,
    /// Pressure-vs-time rows, one per cycle (empty in fast-skip mode)
    pub pvst: Vec<Vec<f32>>,
    /// Timestamp (ms) of each pressure-vs-time row
    pub pvst_timestamps: Vec<i64>,
    /// Auxiliary signals (empty for format versions <= 17)
    pub auxiliary: AuxiliarySignals,
}

/// Iterates the data region cycle by cycle.
pub struct CycleDecoder<'a> {
    header: &'a FileHeader,
    metadata: &'a MetadataTable,
    settings: &'a ScanSettings,
    config: &'a DecodeConfig,
}

impl<'a> CycleDecoder<'a> {
    /// Validate the step layout against the settings and prepare a decoder.
    pub fn new(
        header: &'a FileHeader,
        metadata: &'a MetadataTable,
        settings: &'a ScanSettings,
        config: &'a DecodeConfig,
    ) -> Result<Self, DecodeError> {
        let steps = metadata.active_step_count();
        if steps > MAX_ACTIVE_STEPS {
            return Err(DecodeError::UnsupportedFormat(format!(
                "{} active scan steps; only spectrum (0) and pressure-vs-time (1) steps are known",
                steps
            )));
        }
        if steps > STEP_PVST {
            // Fast-skip seeks over step 1 by its byte size and never needs the gas list.
            if !config.skip_pvst && settings.gas_count().is_none() {
                return Err(DecodeError::InvalidFormat(format!(
                    "{} active steps but settings carry no gas list for step {}",
                    steps, STEP_PVST
                )));
            }
            if metadata.step_byte_sizes[STEP_PVST] < 0 {
                return Err(DecodeError::InvalidFormat(format!(
                    "negative byte size {} for step {}",
                    metadata.step_byte_sizes[STEP_PVST], STEP_PVST
                )));
            }
        }

        Ok(Self {
            header,
            metadata,
            settings,
            config,
        })
    }

    /// Seek to the data region and decode every cycle.
    pub fn decode<R: Read + Seek>(
        &self,
        reader: &mut PrimitiveReader<R>,
    ) -> Result<CycleData, DecodeError> {
        reader.seek_absolute(self.metadata.data_offset)?;
        debug!(
            "Decoding {} cycles from offset {} ({} active steps, auxiliary: {}, skip pvst: {})",
            self.metadata.cycle_count,
            self.metadata.data_offset,
            self.metadata.active_step_count(),
            self.header.has_auxiliary_samples(),
            self.config.skip_pvst
        );

        let mut data = CycleData::default();
        for cycle in 0..self.metadata.cycle_count as usize {
            let start = reader.position();
            self.decode_cycle(reader, cycle, &mut data)
                .map_err(|e| e.in_cycle(cycle))?;
            if reader.position() == start {
                // Empty cycle layout: the remaining cycles would yield nothing either.
                debug!("Cycle {} consumed no bytes; stopping", cycle);
                break;
            }
        }
        Ok(data)
    }

    fn decode_cycle<R: Read + Seek>(
        &self,
        reader: &mut PrimitiveReader<R>,
        cycle: usize,
        data: &mut CycleData,
    ) -> Result<(), DecodeError> {
        if self.header.has_auxiliary_samples() {
            data.auxiliary.push(AuxiliarySample::decode(reader)?);
        }

        for step in 0..self.metadata.active_step_count() {
            match step {
                STEP_SPECTRUM => {
                    data.spectrum_timestamps.push(reader.read_i64()?);
                    data.spectra.push(self.read_spectrum_row(reader, cycle)?);
                }
                STEP_PVST if self.config.skip_pvst => {
                    reader.seek_relative(self.metadata.step_byte_sizes[STEP_PVST])?;
                }
                STEP_PVST => {
                    data.pvst_timestamps.push(reader.read_i64()?);
                    let gases = self.settings.gas_count().unwrap_or_default();
                    data.pvst.push(reader.read_f32_vec(gases)?);
                }
                _ => {
                    return Err(DecodeError::UnsupportedFormat(format!(
                        "step role {} in cycle {}",
                        step, cycle
                    )))
                }
            }
        }
        Ok(())
    }

    fn read_spectrum_row<R: Read + Seek>(
        &self,
        reader: &mut PrimitiveReader<R>,
        cycle: usize,
    ) -> Result<Vec<f32>, DecodeError> {
        let offset = reader.position();
        let declared = reader.read_u32()? as usize;
        let expected = self.settings.spectrum().sample_count();
        if declared != expected {
            warn!(
                "Spectrum row in cycle {} at offset {} has {} samples, settings give {}",
                cycle, offset, declared, expected
            );
        }
        reader.read_f32_vec(declared)
    }
}
