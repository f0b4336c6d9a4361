//! Error types for `.rgadata` decoding.

use thiserror::Error;

/// Errors that can occur while decoding an `.rgadata` file.
///
/// Every decoder stage fails fast: the first inconsistency is returned and
/// no partial document is produced.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The source is truncated or unreadable at the point of a primitive read or seek.
    #[error("I/O error at byte offset {offset}{}: {source}", cycle_suffix(.cycle))]
    IoError {
        /// Byte offset at which the failing read or seek started
        offset: u64,
        /// Cycle being decoded when the error occurred, if any
        cycle: Option<usize>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Inconsistent metadata, malformed settings JSON, or a size mismatch.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Scan step layout outside the two known step roles.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

fn cycle_suffix(cycle: &Option<usize>) -> String {
    match cycle {
        Some(cycle) => format!(" (cycle {})", cycle),
        None => String::new(),
    }
}

impl DecodeError {
    pub(crate) fn io(offset: u64, source: std::io::Error) -> Self {
        DecodeError::IoError {
            offset,
            cycle: None,
            source,
        }
    }

    /// Attach the cycle index to an I/O error raised inside the data region.
    pub(crate) fn in_cycle(self, index: usize) -> Self {
        match self {
            DecodeError::IoError { offset, source, .. } => DecodeError::IoError {
                offset,
                cycle: Some(index),
                source,
            },
            other => other,
        }
    }

    /// Returns `true` for truncation / unreadable-source errors.
    pub fn is_io(&self) -> bool {
        matches!(self, DecodeError::IoError { .. })
    }

    /// Cycle index recorded on an I/O error, if the failure happened in the data region.
    pub fn cycle(&self) -> Option<usize> {
        match self {
            DecodeError::IoError { cycle, .. } => *cycle,
            _ => None,
        }
    }
}
