use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdIndexError {
    /// A point's dimension count differs from the dimension count already
    /// established for the tree.
    #[error("Dimension mismatch: expected {expected} dimensions, got {actual}")]
    DimensionMismatch {
        /// The dimension count the tree was built with.
        expected: usize,
        /// The dimension count of the offending point.
        actual: usize,
    },

    /// A point reported zero dimensions.
    #[error("Points must have at least one dimension")]
    ZeroDimensions,

    /// Catch-all for conditions that have no dedicated variant.
    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, KdIndexError>;
