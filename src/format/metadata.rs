//! Offset/size metadata table following the header.
//!
//! The table is a length-prefixed vector of int64 values. The first seven
//! positions are fixed; they are followed by one byte size per active step:
//!
//! | Index | Field |
//! |---|---|
//! | 0 | settings offset |
//! | 1 | data offset |
//! | 2 | settings size |
//! | 3 | data size |
//! | 4 | cycle count |
//! | 5 | cycle byte size |
//! | 6 | active step count |
//! | 7.. | step byte sizes |

use std::io::{Read, Seek};

use super::error::DecodeError;
use super::reader::PrimitiveReader;

/// Number of fixed-position fields at the start of the table.
pub const FIXED_FIELD_COUNT: usize = 7;

const SETTINGS_OFFSET: usize = 0;
const DATA_OFFSET: usize = 1;
const SETTINGS_SIZE: usize = 2;
const DATA_SIZE: usize = 3;
const CYCLE_COUNT: usize = 4;
const CYCLE_BYTE_SIZE: usize = 5;
const ACTIVE_STEP_COUNT: usize = 6;

/// Decoded metadata table with its named fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTable {
    /// Absolute offset of the settings block
    pub settings_offset: u64,
    /// Absolute offset of the data block
    pub data_offset: u64,
    /// Size of the settings block in bytes
    pub settings_size: u64,
    /// Size of the data block in bytes
    pub data_size: u64,
    /// Number of recorded cycles
    pub cycle_count: u64,
    /// Size of a single cycle in bytes
    pub cycle_byte_size: u64,
    /// Byte size of each active step's payload (timestamp included)
    pub step_byte_sizes: Vec<i64>,
    entries: Vec<i64>,
}

impl MetadataTable {
    /// Decode the table from a reader positioned immediately after the header.
    pub fn decode<R: Read + Seek>(reader: &mut PrimitiveReader<R>) -> Result<Self, DecodeError> {
        let table_offset = reader.position();
        let count = reader.read_u32()? as usize;
        if count < FIXED_FIELD_COUNT {
            return Err(DecodeError::InvalidFormat(format!(
                "metadata table at offset {} has {} entries, expected at least {}",
                table_offset, count, FIXED_FIELD_COUNT
            )));
        }

        let mut entries = Vec::with_capacity(count.min((reader.remaining() / 8) as usize));
        for _ in 0..count {
            entries.push(reader.read_i64()?);
        }

        Self::from_entries(entries)
    }

    /// Build the named view over raw table entries.
    pub fn from_entries(entries: Vec<i64>) -> Result<Self, DecodeError> {
        if entries.len() < FIXED_FIELD_COUNT {
            return Err(DecodeError::InvalidFormat(format!(
                "metadata table has {} entries, expected at least {}",
                entries.len(),
                FIXED_FIELD_COUNT
            )));
        }

        let field = |index: usize, name: &str| -> Result<u64, DecodeError> {
            u64::try_from(entries[index]).map_err(|_| {
                DecodeError::InvalidFormat(format!(
                    "metadata field {} (index {}) is negative: {}",
                    name, index, entries[index]
                ))
            })
        };

        let settings_offset = field(SETTINGS_OFFSET, "settings offset")?;
        let data_offset = field(DATA_OFFSET, "data offset")?;
        let settings_size = field(SETTINGS_SIZE, "settings size")?;
        let data_size = field(DATA_SIZE, "data size")?;
        let cycle_count = field(CYCLE_COUNT, "cycle count")?;
        let cycle_byte_size = field(CYCLE_BYTE_SIZE, "cycle byte size")?;
        let active_steps = field(ACTIVE_STEP_COUNT, "active step count")?;

        let available = (entries.len() - FIXED_FIELD_COUNT) as u64;
        if active_steps > available {
            return Err(DecodeError::InvalidFormat(format!(
                "metadata declares {} active steps but only {} step sizes follow ({} entries total)",
                active_steps,
                available,
                entries.len()
            )));
        }

        let upper = FIXED_FIELD_COUNT + active_steps as usize;
        let step_byte_sizes = entries[FIXED_FIELD_COUNT..upper].to_vec();

        Ok(Self {
            settings_offset,
            data_offset,
            settings_size,
            data_size,
            cycle_count,
            cycle_byte_size,
            step_byte_sizes,
            entries,
        })
    }

    /// Number of active scan steps per cycle.
    pub fn active_step_count(&self) -> usize {
        self.step_byte_sizes.len()
    }

    /// Raw table entries, including the unused tail.
    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    /// Whether `data_size == cycle_byte_size * cycle_count`.
    ///
    /// Advisory only: the decoder does not rely on it.
    pub fn sizes_consistent(&self) -> bool {
        self.cycle_byte_size
            .checked_mul(self.cycle_count)
            .is_some_and(|total| total == self.data_size)
    }
}
