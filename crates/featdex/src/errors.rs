//! # Error Types

/// Errors from featdex operations.
#[derive(Debug, thiserror::Error)]
pub enum FeatdexError {
    /// A record names the same feature more than once.
    #[error("duplicate feature \"{name}\" in record")]
    DuplicateFeature {
        /// The feature name that appeared twice.
        name: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for featdex operations.
pub type Result<T> = core::result::Result<T, FeatdexError>;
