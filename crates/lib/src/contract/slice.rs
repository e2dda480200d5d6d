//! The Slice contract: positional reads, owned copies and borrowed views.
//!
//! Reading never mutates the source. The owned form ([`Slice::slice`]) works
//! for any indexable container; the borrowed form ([`View::view`]) exists only
//! for containers whose elements are contiguous in memory, and its result is
//! lifetime-bound to the container so it can never outlive it.

use crate::Result;
use crate::contract::ContractError;

/// Read elements by position.
pub trait Slice<T> {
    /// Required primitive: borrow the element at `at`, or `None` past the end.
    fn get(&self, at: usize) -> Option<&T>;

    /// Required primitive: number of elements currently in the container.
    fn len(&self) -> usize;

    /// Check whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy `len` elements beginning at `start` into an owned buffer.
    ///
    /// The source is left untouched. Declines if any requested position is out
    /// of range; a zero-length slice of any start position up to the count
    /// succeeds with an empty buffer.
    fn slice(&self, start: usize, len: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        if len == 0 {
            return if start <= self.len() {
                Ok(Vec::new())
            } else {
                Err(ContractError::OutOfBounds {
                    position: start,
                    count: self.len(),
                }
                .into())
            };
        }
        let mut out = Vec::with_capacity(len);
        for offset in 0..len {
            let position = start + offset;
            match self.get(position) {
                Some(element) => out.push(element.clone()),
                None => {
                    return Err(ContractError::OutOfBounds {
                        position,
                        count: self.len(),
                    }
                    .into());
                }
            }
        }
        Ok(out)
    }

    /// Linear scan for an element equal to `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        (0..self.len()).any(|at| self.get(at) == Some(element))
    }

    /// Position of the first element equal to `element`, if any.
    fn position_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&at| self.get(at) == Some(element))
    }
}

/// Borrowed contiguous views over a container's elements.
///
/// A view aliases the container's own storage; the borrow checker keeps it
/// from outliving the container or surviving a structural mutation.
pub trait View<T>: Slice<T> {
    /// Required primitive: borrow every element as one contiguous slice.
    fn as_slice(&self) -> &[T];

    /// Borrow `len` elements beginning at `start`.
    ///
    /// Declines if the range extends past the occupied count.
    fn view(&self, start: usize, len: usize) -> Result<&[T]> {
        let end = start.checked_add(len).ok_or(ContractError::OutOfBounds {
            position: usize::MAX,
            count: self.len(),
        })?;
        if end > self.len() {
            return Err(ContractError::OutOfBounds {
                position: end,
                count: self.len(),
            }
            .into());
        }
        Ok(&self.as_slice()[start..end])
    }
}
