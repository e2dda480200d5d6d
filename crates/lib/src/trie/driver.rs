//! String-keyed trie driver.
//!
//! [`Trie`] chains per-glyph node operations into full string keys: one glyph
//! per level, a new child level per grapheme cluster of the key. Interior
//! nodes created along the way hold no element until a key ends there, so a
//! key can be both a stored entry and a path segment of a longer key.

use std::rc::Rc;

use crate::Result;
use crate::glyph::Glyph;
use crate::trie::errors::TrieError;
use crate::trie::filter::{DefaultingFilter, Filter, InsertingFilter, StrictFilter};
use crate::trie::node::TrieNode;

/// An associative container keyed by strings, one glyph per trie level.
///
/// # Examples
///
/// ```
/// use trellis::Trie;
///
/// let trie = Trie::strict();
/// trie.set("car", 1)?;
/// trie.set("cart", 2)?;
/// assert_eq!(trie.get("car")?, Some(1));
/// assert_eq!(trie.get("cart")?, Some(2));
/// assert!(trie.get("ca")?.is_none()); // path segment, no element
/// assert!(trie.get("dog").unwrap_err().is_not_found());
/// # Ok::<(), trellis::Error>(())
/// ```
#[derive(Debug)]
pub struct Trie<T> {
    root: TrieNode<T>,
}

impl<T> Trie<T> {
    /// Create an empty trie with a caller-supplied miss policy.
    ///
    /// The same filter instance reaches every node the trie ever grows.
    pub fn new(filter: Rc<dyn Filter<T>>) -> Self {
        Self {
            root: TrieNode::root(filter),
        }
    }

    /// Create an empty trie where misses are errors.
    pub fn strict() -> Self
    where
        T: 'static,
    {
        Self::new(Rc::new(StrictFilter))
    }

    /// Create an empty trie where missed reads yield `T::default()`.
    pub fn defaulting() -> Self
    where
        T: Default + 'static,
    {
        Self::new(Rc::new(DefaultingFilter))
    }

    /// Create an empty trie where missed keyed writes insert the key.
    pub fn inserting() -> Self
    where
        T: 'static,
    {
        Self::new(Rc::new(InsertingFilter))
    }

    /// Handle to the root node, for per-glyph navigation.
    pub fn root(&self) -> TrieNode<T> {
        self.root.clone()
    }

    /// Store `value` under `key`, creating one level per glyph.
    ///
    /// An existing key's element is overwritten in place. Empty keys decline.
    pub fn set(&self, key: &str, value: T) -> Result<()> {
        let glyphs: Vec<Glyph> = Glyph::split(key).collect();
        let Some((last, path)) = glyphs.split_last() else {
            return Err(TrieError::EmptyKey.into());
        };
        let mut node = self.root.clone();
        for glyph in path {
            node = node.ensure_child(glyph.clone())?;
        }
        node.insert(last.clone(), Some(value))?;
        Ok(())
    }

    /// Look up `key` by walking one glyph per level.
    ///
    /// A node missing anywhere along the path is a miss at that node and is
    /// delegated to the trie's filter, exactly like a miss at the final
    /// level. A present node with no element yields `Ok(None)`. When the
    /// filter declines, the error names the full key the caller asked for,
    /// not the single glyph that missed.
    pub fn get(&self, key: &str) -> Result<Option<T>>
    where
        T: Clone,
    {
        let glyphs: Vec<Glyph> = Glyph::split(key).collect();
        let Some((last, path)) = glyphs.split_last() else {
            return Err(TrieError::EmptyKey.into());
        };
        let mut node = self.root.clone();
        for glyph in path {
            match node.find_child(glyph) {
                Some(child) => node = child,
                // node.get on the absent glyph routes through the filter
                None => return Self::named_for_caller(node.get(glyph), key),
            }
        }
        Self::named_for_caller(node.get(last), key)
    }

    /// The filter only ever sees the glyph that missed; re-key its decline to
    /// the string the caller looked up.
    fn named_for_caller(looked_up: Result<Option<T>>, key: &str) -> Result<Option<T>> {
        looked_up.map_err(|err| match err {
            crate::Error::Trie(TrieError::KeyNotFound { .. }) => TrieError::KeyNotFound {
                key: key.to_string(),
            }
            .into(),
            other => other,
        })
    }

    /// Whether `key` is stored with an element (path segments don't count).
    pub fn contains_key(&self, key: &str) -> bool {
        let mut node = self.root.clone();
        for glyph in Glyph::split(key) {
            match node.find_child(&glyph) {
                Some(child) => node = child,
                None => return false,
            }
        }
        !node.is_root() && node.has_element()
    }

    /// Replace every stored element equal to `search` with `replacement`
    /// across the whole trie, returning how many nodes changed.
    ///
    /// The keyless root anchor is not an addressable entry and never
    /// participates, so `replace(None, ...)` cannot plant an element that no
    /// `get` could reach.
    pub fn replace(&self, search: Option<&T>, replacement: Option<T>) -> usize
    where
        T: PartialEq + Clone,
    {
        let mut replaced = 0;
        for at in 0..self.root.child_count() {
            if let Some(child) = self.root.child_at(at) {
                replaced += child.replace(search, replacement.clone());
            }
        }
        replaced
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.root.element_count()
    }

    /// Whether no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
