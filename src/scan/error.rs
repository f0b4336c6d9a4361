/// Errors raised by [`ScanDocument`](super::ScanDocument) accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// Requested cycle does not exist
    #[error("Cycle {index} out of range (document has {count} cycles)")]
    CycleOutOfRange {
        /// Requested cycle index
        index: usize,
        /// Number of decoded cycles
        count: usize,
    },
    /// Document decoded zero cycles, so there is no latest row
    #[error("Document has no decoded cycles")]
    NoCycles,
}
