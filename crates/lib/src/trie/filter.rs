//! Miss-handling policies for tries.
//!
//! A trie is constructed with one [`Filter`] instance, threaded unchanged
//! through every descendant node. The node layer delegates every missed
//! lookup and missed keyed write here, so edge-case policy is swappable
//! without touching node code: raise, hand back a default, or materialize the
//! missing child.

use crate::Result;
use crate::glyph::Glyph;
use crate::trie::TrieError;
use crate::trie::node::TrieNode;

/// Policy invoked when a keyed operation misses.
///
/// Implementations should be stateless or near-stateless; the same instance
/// serves every node of one trie.
pub trait Filter<T> {
    /// Decide the outcome of a lookup for a key with no child.
    ///
    /// The returned value is handed to the caller as if the key had been
    /// found; returning an error makes the miss a failure.
    fn on_missing_read(&self, node: &TrieNode<T>, key: &Glyph) -> Result<Option<T>>;

    /// Decide the outcome of a keyed write for a key with no child.
    ///
    /// The policy may insert the child itself (see [`InsertingFilter`]), drop
    /// the value silently, or return an error.
    fn on_missing_write(&self, node: &TrieNode<T>, key: &Glyph, value: T) -> Result<()>;
}

/// Misses are errors, both reading and writing.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictFilter;

impl<T> Filter<T> for StrictFilter {
    fn on_missing_read(&self, _node: &TrieNode<T>, key: &Glyph) -> Result<Option<T>> {
        Err(TrieError::KeyNotFound {
            key: key.to_string(),
        }
        .into())
    }

    fn on_missing_write(&self, _node: &TrieNode<T>, key: &Glyph, _value: T) -> Result<()> {
        Err(TrieError::KeyNotFound {
            key: key.to_string(),
        }
        .into())
    }
}

/// Missed reads yield the element type's default; writes stay strict.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultingFilter;

impl<T: Default> Filter<T> for DefaultingFilter {
    fn on_missing_read(&self, _node: &TrieNode<T>, _key: &Glyph) -> Result<Option<T>> {
        Ok(Some(T::default()))
    }

    fn on_missing_write(&self, _node: &TrieNode<T>, key: &Glyph, _value: T) -> Result<()> {
        Err(TrieError::KeyNotFound {
            key: key.to_string(),
        }
        .into())
    }
}

/// Missed writes materialize the child; reads stay strict.
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertingFilter;

impl<T> Filter<T> for InsertingFilter {
    fn on_missing_read(&self, _node: &TrieNode<T>, key: &Glyph) -> Result<Option<T>> {
        Err(TrieError::KeyNotFound {
            key: key.to_string(),
        }
        .into())
    }

    fn on_missing_write(&self, node: &TrieNode<T>, key: &Glyph, value: T) -> Result<()> {
        node.insert(key.clone(), Some(value))?;
        Ok(())
    }
}
