//!
//! Trellis: composable capability contracts for in-memory containers.
//! This library defines a small set of orthogonal operation families, each with one
//! required primitive and a tower of derived batch operations, so that concrete
//! containers gain full functionality by implementing only the primitive.
//!
//! ## Core Concepts
//!
//! * **Capability contracts (`contract`)**: Operation families such as [`contract::Insert`],
//!   [`contract::Prepend`] or [`contract::SequentialWrite`]. Each trait requires one or two
//!   primitive methods; every batch-shaped overload (borrowed slice, owned buffer, arbitrary
//!   sequence) is a default method that reduces to repeated primitive calls and short-circuits
//!   on the first failure.
//! * **Resize policy (`contract::Resize`)**: Golden-ratio capacity growth and shrink built on a
//!   single `resize` primitive, reused by every resizable container.
//! * **Containers (`array`)**: Concrete consumers of the contracts: [`array::DynArray`] (grows
//!   through the golden-ratio policy), [`array::BoundedArray`] (declines when full) and
//!   [`array::Stack`] (LIFO adapter).
//! * **Glyphs (`glyph`)**: [`glyph::Glyph`] wraps exactly one Unicode extended grapheme
//!   cluster, the per-level key of the trie.
//! * **Trie (`trie`)**: [`trie::TrieNode`], a multiway tree node holding an optional element
//!   and a growable child buffer, with miss handling delegated to a pluggable
//!   [`trie::Filter`] shared by every node of one trie.
//!
//! Everything is single-threaded and synchronous; callers serialize access themselves.

pub mod array;
pub mod contract;
pub mod glyph;
pub mod trie;

/// Re-export the most commonly used types for easier access.
pub use array::{BoundedArray, DynArray, Stack};
pub use glyph::Glyph;
pub use trie::{Trie, TrieNode};

/// Bulk import of every capability contract.
///
/// The contracts are designed to be used together, so most call sites want them
/// all in scope:
///
/// ```
/// use trellis::prelude::*;
///
/// let mut array = trellis::DynArray::new();
/// array.postpend_slice(&[1, 2, 3])?;
/// assert!(array.contains(&2));
/// # Ok::<(), trellis::Error>(())
/// ```
pub mod prelude {
    pub use crate::contract::{
        Add, Capacity, Insert, Pop, Postpend, Prepend, Push, Replace, Resize, SequentialRead,
        SequentialWrite, Shift, Slice, View,
    };
}

/// Result type used throughout the Trellis library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Trellis library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Structured contract errors from the capability layer
    #[error(transparent)]
    Contract(contract::ContractError),

    /// Structured glyph errors from the glyph module
    #[error(transparent)]
    Glyph(glyph::GlyphError),

    /// Structured trie errors from the trie module
    #[error(transparent)]
    Trie(trie::TrieError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Contract(_) => "contract",
            Error::Glyph(_) => "glyph",
            Error::Trie(_) => "trie",
        }
    }

    /// Check if this error is an operation decline (the recoverable channel).
    ///
    /// A declined operation left the container in a valid, possibly partial,
    /// state; the caller may retry or compensate. Contract violations by
    /// contrast panic immediately and never surface here.
    pub fn is_declined(&self) -> bool {
        matches!(self, Error::Contract(_))
    }

    /// Check if this error indicates a container was at capacity.
    pub fn is_full(&self) -> bool {
        match self {
            Error::Contract(contract_err) => contract_err.is_full(),
            _ => false,
        }
    }

    /// Check if this error indicates an out-of-range position.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::Contract(contract_err) => contract_err.is_out_of_bounds(),
            _ => false,
        }
    }

    /// Check if this error indicates a key was not found in a trie.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Trie(trie_err) => trie_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is glyph-validation related.
    pub fn is_glyph_error(&self) -> bool {
        matches!(self, Error::Glyph(_))
    }
}
