use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::format::{DecodeConfig, DecodeError};

use super::ScanDocument;

/// Decode every path independently, returning one result per path in input order.
///
/// With the `parallel` feature each file is decoded on its own rayon task.
/// A failure affects only its own entry.
#[cfg(feature = "parallel")]
pub fn open_all<P>(paths: &[P], config: &DecodeConfig) -> Vec<Result<ScanDocument, DecodeError>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| ScanDocument::open_with_config(path, config))
        .collect()
}

/// Decode every path independently, returning one result per path in input order.
///
/// With the `parallel` feature each file is decoded on its own rayon task.
/// A failure affects only its own entry.
#[cfg(not(feature = "parallel"))]
pub fn open_all<P>(paths: &[P], config: &DecodeConfig) -> Vec<Result<ScanDocument, DecodeError>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .iter()
        .map(|path| ScanDocument::open_with_config(path, config))
        .collect()
}
