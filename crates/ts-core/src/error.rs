//! Unified error type for travelstory.
//!
//! Library crates funnel their failures into [`Error`]; the binary wraps it
//! in `anyhow` for context.

/// Unified error type covering all failure modes in travelstory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration or request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A caller handed in a value the operation cannot work with.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The storage engine rejected an operation.
    #[error("Database error: {source}")]
    Database {
        /// The underlying database error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Image bytes could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(String),

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convenience constructor for [`Error::Database`].
    pub fn database(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::Codec`].
    pub fn codec(message: impl Into<String>) -> Self {
        Error::Codec(message.into())
    }

    /// Whether this error came from the storage engine.
    pub fn is_database(&self) -> bool {
        matches!(self, Error::Database { .. })
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
