use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceTreeError {
    #[error("A balance tree needs at least one leaf")]
    Empty,

    #[error("Duplicate leaf index {0}")]
    DuplicateIndex(u64),

    #[error("No leaf with index {index} matches the requested account and amount")]
    LeafNotFound { index: u64 },
}
