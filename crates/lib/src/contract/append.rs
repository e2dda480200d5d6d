//! The Postpend and Prepend contracts: append at the tail or the head.
//!
//! The two families differ in one load-bearing detail: `Postpend` walks its
//! input forward, while `Prepend` walks it **in reverse**. Prepending `[a, b,
//! c]` one element at a time forward would leave the container beginning
//! `c, b, a`; reversing the walk preserves the input's original order.

use crate::Result;

/// Append elements at the tail of a container.
pub trait Postpend<T> {
    /// Required primitive: append one element after the current last element.
    fn postpend(&mut self, element: T) -> Result<()>;

    /// Append every element of a borrowed slice, cloning each, walking forward.
    ///
    /// Stops at the first declined element, leaving the appended prefix in place.
    fn postpend_slice(&mut self, elements: &[T]) -> Result<()>
    where
        T: Clone,
    {
        for element in elements {
            self.postpend(element.clone())?;
        }
        Ok(())
    }

    /// Append every element of an owned buffer.
    fn postpend_vec(&mut self, elements: Vec<T>) -> Result<()> {
        self.postpend_iter(elements)
    }

    /// Append every element of an arbitrary sequence.
    fn postpend_iter(&mut self, elements: impl IntoIterator<Item = T>) -> Result<()> {
        for element in elements {
            self.postpend(element)?;
        }
        Ok(())
    }
}

/// Append elements at the head of a container.
///
/// ```
/// use trellis::DynArray;
/// use trellis::contract::Prepend;
///
/// let mut array = DynArray::new();
/// array.prepend_slice(&[1, 2])?;
/// array.prepend_slice(&[3, 4, 5])?;
/// assert_eq!(array.as_slice(), &[3, 4, 5, 1, 2]);
/// # Ok::<(), trellis::Error>(())
/// ```
pub trait Prepend<T> {
    /// Required primitive: place one element before the current first element.
    fn prepend(&mut self, element: T) -> Result<()>;

    /// Prepend every element of a borrowed slice, cloning each.
    ///
    /// The slice is walked in reverse so the container ends up beginning with
    /// the slice in its original order. A decline stops the batch; elements
    /// prepended before the failure stay in place.
    fn prepend_slice(&mut self, elements: &[T]) -> Result<()>
    where
        T: Clone,
    {
        for element in elements.iter().rev() {
            self.prepend(element.clone())?;
        }
        Ok(())
    }

    /// Prepend every element of an owned buffer, walked in reverse.
    fn prepend_vec(&mut self, elements: Vec<T>) -> Result<()> {
        for element in elements.into_iter().rev() {
            self.prepend(element)?;
        }
        Ok(())
    }

    /// Prepend every element of an arbitrary sequence.
    ///
    /// Arbitrary sequences cannot be walked backwards, so the input is
    /// buffered first.
    fn prepend_iter(&mut self, elements: impl IntoIterator<Item = T>) -> Result<()> {
        self.prepend_vec(elements.into_iter().collect())
    }
}
