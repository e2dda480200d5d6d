//! The Insert contract: positional insertion with a forward-advancing batch tower.

use crate::Result;

/// Insert elements at a caller-chosen position.
///
/// The batch defaults advance the insertion point after every successful
/// primitive call, so a batch lands contiguously in its original order:
///
/// ```
/// use trellis::DynArray;
/// use trellis::contract::{Insert, Postpend};
///
/// let mut array = DynArray::new();
/// array.postpend_slice(&["a", "d"])?;
/// array.insert_slice(1, &["b", "c"])?;
/// assert_eq!(array.as_slice(), &["a", "b", "c", "d"]);
/// # Ok::<(), trellis::Error>(())
/// ```
///
/// A failed element stops the batch immediately; elements inserted before the
/// failure stay in place.
pub trait Insert<T> {
    /// Required primitive: insert one element at `at`, displacing the elements
    /// from `at` onward by one position.
    ///
    /// `at` equal to the current count appends. Positions beyond the count, or
    /// a container at fixed capacity, decline.
    fn insert(&mut self, at: usize, element: T) -> Result<()>;

    /// Insert every element of a borrowed slice starting at `at`, cloning each.
    fn insert_slice(&mut self, at: usize, elements: &[T]) -> Result<()>
    where
        T: Clone,
    {
        let mut at = at;
        for element in elements {
            self.insert(at, element.clone())?;
            at += 1;
        }
        Ok(())
    }

    /// Insert every element of an owned buffer starting at `at`.
    fn insert_vec(&mut self, at: usize, elements: Vec<T>) -> Result<()> {
        self.insert_iter(at, elements)
    }

    /// Insert every element of an arbitrary sequence starting at `at`.
    fn insert_iter(&mut self, at: usize, elements: impl IntoIterator<Item = T>) -> Result<()> {
        let mut at = at;
        for element in elements {
            self.insert(at, element)?;
            at += 1;
        }
        Ok(())
    }
}
