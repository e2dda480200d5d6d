//! Grapheme-cluster keys for associative containers.
//!
//! A [`Glyph`] holds exactly one user-perceived text unit: an extended
//! grapheme cluster, which may span several code points (`"é"` composed from
//! `e` + combining accent, flag emoji, Hangul syllable blocks). Segmentation
//! follows UAX #29 via the `unicode-segmentation` crate. The trie uses one
//! glyph per level, so key comparison never splits a user-perceived character.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Error types for glyph construction.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The input contained no grapheme cluster
    #[error("glyph input is empty")]
    Empty,

    /// The input contained more than one grapheme cluster
    #[error("glyph input '{input}' holds {count} grapheme clusters, expected exactly one")]
    MultipleClusters { input: String, count: usize },
}

impl GlyphError {
    /// Check if this error indicates empty input.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, GlyphError::Empty)
    }
}

// Conversion from GlyphError to the main Error type
impl From<GlyphError> for crate::Error {
    fn from(err: GlyphError) -> Self {
        crate::Error::Glyph(err)
    }
}

/// Exactly one Unicode extended grapheme cluster.
///
/// Immutable once constructed; equality and hashing follow the underlying
/// string, so two glyphs are equal only when their code point sequences are.
///
/// # Examples
///
/// ```
/// use trellis::Glyph;
///
/// let plain = Glyph::new("a")?;
/// let composed = Glyph::new("e\u{0301}")?; // é as two code points
/// assert_eq!(composed.as_str().chars().count(), 2);
///
/// assert!(Glyph::new("ab").is_err());
/// assert!(Glyph::new("").is_err());
/// # Ok::<(), trellis::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Glyph(String);

impl Glyph {
    /// Create a glyph from input holding exactly one grapheme cluster.
    pub fn new(input: impl Into<String>) -> crate::Result<Self> {
        let input = input.into();
        let count = input.graphemes(true).count();
        match count {
            0 => Err(GlyphError::Empty.into()),
            1 => Ok(Self(input)),
            _ => Err(GlyphError::MultipleClusters { input, count }.into()),
        }
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Segment a string into its glyphs, in order.
    ///
    /// ```
    /// use trellis::Glyph;
    ///
    /// let glyphs: Vec<Glyph> = Glyph::split("héllo").collect();
    /// assert_eq!(glyphs.len(), 5);
    /// ```
    pub fn split(input: &str) -> impl Iterator<Item = Glyph> + '_ {
        input.graphemes(true).map(|cluster| Glyph(cluster.to_string()))
    }

    /// Number of glyphs in a string.
    pub fn count(input: &str) -> usize {
        input.graphemes(true).count()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for Glyph {
    /// A single `char` is always a complete grapheme cluster on its own.
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl TryFrom<&str> for Glyph {
    type Error = crate::Error;

    fn try_from(input: &str) -> crate::Result<Self> {
        Self::new(input)
    }
}

impl AsRef<str> for Glyph {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Glyph {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Glyph {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Deserialization re-validates the single-cluster invariant rather than
// trusting the wire.
impl<'de> Deserialize<'de> for Glyph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        Glyph::new(input).map_err(de::Error::custom)
    }
}
