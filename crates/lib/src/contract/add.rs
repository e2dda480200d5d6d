//! The Add contract: grow the container by one element wherever it keeps new ones.
//!
//! `Add` is the least constrained growth family. Where new elements land is the
//! container's choice (a dynamic array appends, a sorted container would keep
//! order); callers that care about position use [`Insert`](super::Insert),
//! [`Postpend`](super::Postpend) or [`Prepend`](super::Prepend) instead.

use crate::Result;

/// Grow a container by elements in container-chosen positions.
///
/// # Examples
///
/// ```
/// use trellis::DynArray;
/// use trellis::contract::Add;
///
/// let mut array = DynArray::new();
/// array.add(1)?;
/// array.add_slice(&[2, 3])?;
/// assert_eq!(array.as_slice(), &[1, 2, 3]);
/// # Ok::<(), trellis::Error>(())
/// ```
pub trait Add<T> {
    /// Required primitive: take ownership of one element.
    ///
    /// Declines (returns an error) when the container cannot take the element,
    /// e.g. a bounded container at capacity.
    fn add(&mut self, element: T) -> Result<()>;

    /// Add every element of a borrowed slice, cloning each.
    ///
    /// Walks forward and stops at the first declined element, leaving the
    /// successfully added prefix in place.
    fn add_slice(&mut self, elements: &[T]) -> Result<()>
    where
        T: Clone,
    {
        for element in elements {
            self.add(element.clone())?;
        }
        Ok(())
    }

    /// Add every element of an owned buffer.
    fn add_vec(&mut self, elements: Vec<T>) -> Result<()> {
        self.add_iter(elements)
    }

    /// Add every element of an arbitrary sequence.
    fn add_iter(&mut self, elements: impl IntoIterator<Item = T>) -> Result<()> {
        for element in elements {
            self.add(element)?;
        }
        Ok(())
    }
}
