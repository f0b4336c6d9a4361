//! # rgadata - Residual Gas Analyzer Scan Decoder
//!
//! `rgadata` decodes `.rgadata` scan recordings produced by residual gas
//! analyzer software into an immutable in-memory document, and manages a
//! set of decoded scans for side-by-side comparison.
//!
//! ## Key Features
//!
//! - **Exact Binary Decoding**: Fixed header, 100-entry offset/size table,
//!   embedded JSON settings and a version-dependent cycle layout, all
//!   little-endian and bounds-checked before allocation.
//!
//! - **Typed Settings**: The step configurations needed to interpret the data
//!   region are extracted into typed structures; the full JSON document is kept
//!   for inspection.
//!
//! - **Fast Skip Mode**: Pressure-vs-time payloads can be seeked over when only
//!   the mass spectra are needed.
//!
//! - **Comparison Collection**: Documents are assigned display colours from a
//!   recycling palette, with synchronous change notifications for GUI layers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rgadata::collection::ScanCollection;
//! use rgadata::scan::ScanDocument;
//!
//! let scan = ScanDocument::open("nitrogen_purge.rgadata")?;
//! println!(
//!     "{}: {} cycles, {} samples per spectrum",
//!     scan.name(),
//!     scan.cycle_count(),
//!     scan.amu_axis().len()
//! );
//!
//! let mut scans = ScanCollection::new();
//! let colour = scans.add(Arc::new(scan));
//! println!("plotted in {}", colour);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Features
//!
//! - `colorized_output` (default): coloured `rgadata info` output
//! - `parallel`: decode multiple files concurrently in [`scan::open_all`]

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod collection;
pub mod format;
pub mod scan;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::collection::{
        ColourToken, CollectionEvent, CollectionObserver, Palette, ScanCollection, ScanEntry,
    };
    pub use crate::format::{DecodeConfig, DecodeError, FileHeader, ScanSettings};
    pub use crate::scan::{open_all, AmuAxis, ScanDocument, ScanError, ViewBounds};
}
