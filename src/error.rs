use thiserror::Error;

/// Errors reported by network construction, prediction and training.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Invalid topology: {reason}")]
    InvalidTopology { reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Training dataset is empty")]
    EmptyDataset,
}

impl NetworkError {
    pub(crate) fn invalid_topology(reason: impl Into<String>) -> NetworkError {
        NetworkError::InvalidTopology { reason: reason.into() }
    }

    /// Returns `DimensionMismatch` unless `actual == expected`.
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), NetworkError> {
        if expected == actual {
            Ok(())
        } else {
            Err(NetworkError::DimensionMismatch { expected, actual })
        }
    }
}
