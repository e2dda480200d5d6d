//! Error types for capability contract operations.
//!
//! Every variant here is an *operation decline*: the recoverable "no-result"
//! channel a primitive uses when it cannot complete. Contract violations
//! (caller bugs such as capacity arithmetic overflowing the host integer
//! width) panic immediately and never appear in this enum.

use thiserror::Error;

/// Structured error types for capability contract operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ContractError {
    /// The container is at capacity and cannot take another element
    #[error("container full at capacity {capacity}")]
    Full { capacity: usize },

    /// A positional argument fell outside the container's occupied range
    #[error("position {position} out of bounds for count {count}")]
    OutOfBounds { position: usize, count: usize },

    /// A sequential source or sink was not ready for the operation
    #[error("not ready for '{operation}'")]
    NotReady { operation: String },
}

impl ContractError {
    /// Check if this error indicates the container was at capacity.
    pub fn is_full(&self) -> bool {
        matches!(self, ContractError::Full { .. })
    }

    /// Check if this error indicates an out-of-range position.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ContractError::OutOfBounds { .. })
    }

    /// Check if this error indicates a source or sink was not ready.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, ContractError::NotReady { .. })
    }

    /// Get the declined position if this is a positional error.
    pub fn position(&self) -> Option<usize> {
        match self {
            ContractError::OutOfBounds { position, .. } => Some(*position),
            _ => None,
        }
    }
}

// Conversion from ContractError to the main Error type
impl From<ContractError> for crate::Error {
    fn from(err: ContractError) -> Self {
        crate::Error::Contract(err)
    }
}
