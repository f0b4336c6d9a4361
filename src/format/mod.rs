//! # `.rgadata` Decoder
//!
//! Binary decoder for residual gas analyzer scan recordings.
//!
//! ## File Structure
//!
//! All integers are little-endian.
//!
//! ```text
//! offset 0            identifier (32 bytes)
//! offset 32           format version (int32)
//! offset 36           single precision flag (1 byte)
//! offset 37           metadata count (uint32)
//! offset 41           metadata table (count x int64)
//! settings_offset     JSON length (int32) + UTF-8 JSON settings
//! data_offset         cycle records x cycle_count
//! ```
//!
//! Decoding is a single sequential pass:
//! header → metadata → settings → cycles → [`ScanDocument`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use rgadata::format::DecodeConfig;
//! use rgadata::scan::ScanDocument;
//!
//! let config = DecodeConfig::default().with_skip_pvst(true);
//! let scan = ScanDocument::open_with_config("scan.rgadata", &config)?;
//! println!("{} cycles", scan.cycle_count());
//! # Ok::<(), rgadata::format::DecodeError>(())
//! ```

use std::io::{Read, Seek};

use log::{debug, info, warn};

use crate::scan::ScanDocument;

mod cycles;
mod error;
mod header;
mod metadata;
mod reader;
mod settings;

#[cfg(test)]
pub(crate) mod fixture;

pub use cycles::{
    AuxiliarySample, AuxiliarySignals, CycleData, CycleDecoder, MAX_ACTIVE_STEPS, STEP_PVST,
    STEP_SPECTRUM,
};
pub use error::DecodeError;
pub use header::{FileHeader, AUXILIARY_MIN_VERSION_EXCLUSIVE, HEADER_SIZE, IDENTIFIER_LEN};
pub use metadata::{MetadataTable, FIXED_FIELD_COUNT};
pub use reader::PrimitiveReader;
pub use settings::{ScanSettings, SpectrumConfig};

/// Decoder options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Seek over pressure-vs-time payloads instead of decoding them.
    ///
    /// Spectrum rows are identical to a full decode; the pvst matrix stays empty.
    pub skip_pvst: bool,
}

impl DecodeConfig {
    /// Set fast-skip mode for pressure-vs-time steps.
    pub fn with_skip_pvst(mut self, skip_pvst: bool) -> Self {
        self.skip_pvst = skip_pvst;
        self
    }
}

/// Decode a complete document from a reader positioned at offset 0.
///
/// On success the reader is left just past the last decoded cycle.
pub fn decode<R: Read + Seek>(
    reader: &mut PrimitiveReader<R>,
    config: &DecodeConfig,
) -> Result<ScanDocument, DecodeError> {
    let header = FileHeader::decode(reader)?;
    debug!(
        "Header: '{}' version {} single precision {}",
        header.identifier_text(),
        header.format_version,
        header.single_precision
    );

    let metadata = MetadataTable::decode(reader)?;
    debug!(
        "Metadata: settings @{} ({} bytes), data @{} ({} bytes), {} cycles of {} bytes, steps {:?}",
        metadata.settings_offset,
        metadata.settings_size,
        metadata.data_offset,
        metadata.data_size,
        metadata.cycle_count,
        metadata.cycle_byte_size,
        metadata.step_byte_sizes
    );
    if !metadata.sizes_consistent() {
        warn!(
            "Data size {} differs from cycle size {} x {} cycles",
            metadata.data_size, metadata.cycle_byte_size, metadata.cycle_count
        );
    }

    let settings = ScanSettings::decode(reader, &metadata)?;
    debug!(
        "Settings: mass {}..{} at {} points/amu, {} step configs, gases: {:?}",
        settings.start_mass(),
        settings.stop_mass(),
        settings.points_per_amu(),
        settings.config_count(),
        settings.gas_count()
    );

    let data = CycleDecoder::new(&header, &metadata, &settings, config)?.decode(reader)?;
    info!(
        "Decoded {} spectrum rows, {} pvst rows, {} auxiliary samples",
        data.spectra.len(),
        data.pvst.len(),
        data.auxiliary.len()
    );

    Ok(ScanDocument::from_parts(header, metadata, settings, data))
}
