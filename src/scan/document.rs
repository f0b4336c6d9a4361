use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use crate::format::{
    self, AuxiliarySignals, CycleData, DecodeConfig, DecodeError, FileHeader, MetadataTable,
    PrimitiveReader, ScanSettings,
};

use super::axis::AmuAxis;
use super::bounds::ViewBounds;
use super::error::ScanError;

/// A fully decoded `.rgadata` recording.
///
/// Immutable after construction. Spectrum rows are indexed
/// `spectra()[cycle][sample]`, pressure-vs-time rows `pvst()[cycle][gas]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanDocument {
    header: FileHeader,
    metadata: MetadataTable,
    settings: ScanSettings,
    data: CycleData,
    source: Option<PathBuf>,
}

impl ScanDocument {
    /// Decode an `.rgadata` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        Self::open_with_config(path, &DecodeConfig::default())
    }

    /// Decode an `.rgadata` file with custom decoder options.
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        config: &DecodeConfig,
    ) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DecodeError::io(0, e))?;
        let mut document = Self::from_reader(BufReader::new(file), config)?;
        document.source = Some(path.to_path_buf());
        Ok(document)
    }

    /// Decode from any seekable byte source.
    pub fn from_reader<R: Read + Seek>(reader: R, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let mut reader = PrimitiveReader::new(reader)?;
        format::decode(&mut reader, config)
    }

    pub(crate) fn from_parts(
        header: FileHeader,
        metadata: MetadataTable,
        settings: ScanSettings,
        data: CycleData,
    ) -> Self {
        Self {
            header,
            metadata,
            settings,
            data,
            source: None,
        }
    }

    /// File header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Offset/size metadata table.
    pub fn metadata(&self) -> &MetadataTable {
        &self.metadata
    }

    /// Scan settings.
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Path the document was decoded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Display name: the source file stem, or the header identifier.
    pub fn name(&self) -> String {
        self.source
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.header.identifier_text())
    }

    /// AMU positions of a spectrum row, recomputed from the settings on each call.
    pub fn amu_axis(&self) -> AmuAxis {
        let spectrum = self.settings.spectrum();
        AmuAxis::new(
            spectrum.start_mass,
            spectrum.stop_mass,
            spectrum.sample_count(),
        )
    }

    /// Number of decoded spectrum rows.
    pub fn cycle_count(&self) -> usize {
        self.data.spectra.len()
    }

    /// Spectrum row of cycle `index`.
    pub fn cycle_at(&self, index: usize) -> Result<&[f32], ScanError> {
        self.data
            .spectra
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ScanError::CycleOutOfRange {
                index,
                count: self.cycle_count(),
            })
    }

    /// Spectrum row of the most recent cycle.
    pub fn latest_cycle(&self) -> Result<&[f32], ScanError> {
        self.data
            .spectra
            .last()
            .map(Vec::as_slice)
            .ok_or(ScanError::NoCycles)
    }

    /// All spectrum rows.
    pub fn spectra(&self) -> &[Vec<f32>] {
        &self.data.spectra
    }

    /// All pressure-vs-time rows (empty when decoded in fast-skip mode).
    pub fn pvst(&self) -> &[Vec<f32>] {
        &self.data.pvst
    }

    /// Timestamps (ms) of the spectrum rows.
    pub fn spectrum_timestamps(&self) -> &[i64] {
        &self.data.spectrum_timestamps
    }

    /// Timestamps (ms) of the pressure-vs-time rows.
    pub fn pvst_timestamps(&self) -> &[i64] {
        &self.data.pvst_timestamps
    }

    /// Auxiliary sensor signals, one entry per cycle for format versions > 17.
    pub fn auxiliary(&self) -> &AuxiliarySignals {
        &self.data.auxiliary
    }

    /// AMU position and latest-cycle intensity of the sample nearest `amu`.
    pub fn nearest_sample(&self, amu: f64) -> Option<(f64, f32)> {
        let row = self.latest_cycle().ok()?;
        let axis = self.amu_axis();
        let index = axis.nearest_index(amu)?;
        Some((axis.value(index)?, *row.get(index)?))
    }

    /// Plot limits of the latest cycle.
    pub fn latest_bounds(&self) -> Option<ViewBounds> {
        let row = self.latest_cycle().ok()?;
        ViewBounds::from_row(self.settings.start_mass(), self.settings.stop_mass(), row)
    }
}
