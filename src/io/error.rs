//! Error types for tile classification and grid exploration

use std::path::PathBuf;

/// Boxed error raised by a grid cell provider
pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for all tile and exploration operations
#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    /// A tile was built or used without any attributes
    #[error("Invalid tile state: {reason}")]
    InvalidState {
        /// Description of the offending state
        reason: String,
    },

    /// Similarity was requested between tiles of different attribute counts
    #[error("Cannot compare tiles of cardinality {left} and {right}")]
    CardinalityMismatch {
        /// Cardinality of the anchor tile
        left: usize,
        /// Cardinality of the compared tile
        right: usize,
    },

    /// The grid cell provider could not resolve a cell
    #[error("Grid provider failed for cell {cell}: {source}")]
    ProviderFailure {
        /// Debug rendering of the cell identity
        cell: String,
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A record could not be rendered as JSON
    #[error("Failed to serialize report: {source}")]
    Serialization {
        /// Underlying serializer error
        #[from]
        source: serde_json::Error,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for tessera results
pub type Result<T> = std::result::Result<T, TesseraError>;

impl From<std::io::Error> for TesseraError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TesseraError {
    TesseraError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap a provider error together with the cell it was raised for
pub fn provider_failure<C, E>(cell: &C, source: E) -> TesseraError
where
    C: std::fmt::Debug,
    E: Into<ProviderError>,
{
    TesseraError::ProviderFailure {
        cell: format!("{cell:?}"),
        source: source.into(),
    }
}

/// Create an invalid state error
pub fn invalid_state(reason: &impl ToString) -> TesseraError {
    TesseraError::InvalidState {
        reason: reason.to_string(),
    }
}
