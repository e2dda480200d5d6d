//! The Replace contract: overwrite elements matched by value.

/// Replace elements equal to a search value.
///
/// Replacement is by value equality, not position; use
/// [`Shift`](super::Shift) or [`Insert`](super::Insert) for positional edits.
/// The operation reports how many elements changed rather than failing when
/// nothing matched: zero replacements is an ordinary outcome.
pub trait Replace<T> {
    /// Required primitive: overwrite every element equal to `search` with a
    /// clone of `replacement`, returning the number of elements changed.
    fn replace(&mut self, search: &T, replacement: &T) -> usize
    where
        T: PartialEq + Clone;

    /// Apply a batch of `(search, replacement)` pairs in order, returning the
    /// total number of elements changed.
    ///
    /// Pairs are applied sequentially, so a later pair observes the effects of
    /// earlier ones: `[(1, 2), (2, 3)]` turns a `1` into a `3`.
    fn replace_pairs(&mut self, pairs: &[(T, T)]) -> usize
    where
        T: PartialEq + Clone,
    {
        let mut replaced = 0;
        for (search, replacement) in pairs {
            replaced += self.replace(search, replacement);
        }
        replaced
    }
}
