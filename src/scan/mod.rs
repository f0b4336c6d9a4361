//! # Scan Documents
//!
//! [`ScanDocument`] is the immutable in-memory form of one recording: header,
//! settings, the spectrum and pressure-vs-time matrices, step timestamps and
//! auxiliary sensor signals, plus derived accessors used for plotting.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rgadata::scan::ScanDocument;
//!
//! let scan = ScanDocument::open("scan.rgadata")?;
//! let latest = scan.latest_cycle()?;
//! for (amu, intensity) in scan.amu_axis().zip(latest) {
//!     println!("{:.2}\t{:.3e}", amu, intensity);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod axis;
mod batch;
mod bounds;
mod document;
mod error;


pub use axis::AmuAxis;
pub use batch::open_all;
pub use bounds::ViewBounds;
pub use document::ScanDocument;
pub use error::ScanError;
