//! Fixed-size file header at offset 0.

use std::io::{Read, Seek};

use super::error::DecodeError;
use super::reader::PrimitiveReader;

/// Length of the raw identifier field.
pub const IDENTIFIER_LEN: usize = 32;

/// Total header size: identifier, format version (int32), precision flag (1 byte).
pub const HEADER_SIZE: u64 = IDENTIFIER_LEN as u64 + 4 + 1;

/// Format version after which every cycle starts with an auxiliary sample.
pub const AUXILIARY_MIN_VERSION_EXCLUSIVE: i32 = 17;

/// File header of an `.rgadata` recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Raw 32-byte identifier (informational, not validated)
    pub identifier: [u8; IDENTIFIER_LEN],
    /// Format version
    pub format_version: i32,
    /// Single-precision floating point flag
    pub single_precision: bool,
}

impl FileHeader {
    /// Decode the header from a reader positioned at offset 0.
    pub fn decode<R: Read + Seek>(reader: &mut PrimitiveReader<R>) -> Result<Self, DecodeError> {
        let raw = reader.read_bytes(IDENTIFIER_LEN)?;
        let mut identifier = [0u8; IDENTIFIER_LEN];
        identifier.copy_from_slice(&raw);

        let format_version = reader.read_i32()?;
        let single_precision = reader.read_bool()?;

        Ok(Self {
            identifier,
            format_version,
            single_precision,
        })
    }

    /// Identifier as text, with trailing NUL padding and whitespace removed.
    pub fn identifier_text(&self) -> String {
        String::from_utf8_lossy(&self.identifier)
            .trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
            .to_string()
    }

    /// Whether cycles in this version carry an auxiliary sensor sample.
    pub fn has_auxiliary_samples(&self) -> bool {
        self.format_version > AUXILIARY_MIN_VERSION_EXCLUSIVE
    }
}
