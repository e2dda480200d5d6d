//! Error types for trie operations.
//!
//! The node layer itself never decides that a miss is an error; these
//! variants are produced by the stock [`Filter`](super::Filter) policies and
//! by the string-keyed driver's key validation.

use thiserror::Error;

/// Structured error types for trie operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TrieError {
    /// A key was not present and the trie's filter treats misses as errors
    #[error("key not found in trie: '{key}'")]
    KeyNotFound { key: String },

    /// A string key segmented to zero glyphs
    #[error("trie keys must hold at least one glyph")]
    EmptyKey,
}

impl TrieError {
    /// Check if this error indicates a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrieError::KeyNotFound { .. })
    }

    /// Check if this error indicates an empty key.
    pub fn is_empty_key(&self) -> bool {
        matches!(self, TrieError::EmptyKey)
    }

    /// Get the missing key if this is a lookup failure.
    pub fn key(&self) -> Option<&str> {
        match self {
            TrieError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from TrieError to the main Error type
impl From<TrieError> for crate::Error {
    fn from(err: TrieError) -> Self {
        crate::Error::Trie(err)
    }
}
