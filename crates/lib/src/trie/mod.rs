//! Multiway trie keyed by grapheme clusters.
//!
//! # Core Types
//!
//! - [`TrieNode`] - A tree node holding an optional element, an immutable
//!   [`Glyph`](crate::Glyph) key, a growable child buffer and a non-owning
//!   back-reference to its parent
//! - [`Trie`] - The string-keyed driver walking one glyph per level
//! - [`Filter`] - The pluggable policy deciding what a missed lookup or write
//!   means; one instance is shared by every node of a trie
//!
//! Ownership is strictly tree-shaped: a node owns its children outright and
//! holds only a weak handle to its parent, so dropping a subtree drops all of
//! its nodes without cycle collection. Node equality is identity, never
//! structure: two separately built tries with the same contents compare
//! unequal node-for-node.

pub mod driver;
pub mod errors;
pub mod filter;
pub mod node;


pub use driver::Trie;
pub use errors::TrieError;
pub use filter::{DefaultingFilter, Filter, InsertingFilter, StrictFilter};
pub use node::TrieNode;
