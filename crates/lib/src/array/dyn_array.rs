//! A dynamically growing contiguous container.
//!
//! `DynArray` tracks its own count/capacity pair rather than leaning on the
//! backing `Vec`'s opaque growth: capacity changes only through the
//! [`Resize`] contract, so growth always follows the golden-ratio policy and
//! is observable in tests.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::contract::{
    Add, Capacity, ContractError, Insert, Pop, Postpend, Prepend, Push, Replace, Resize,
    SequentialWrite, Shift, Slice, View,
};

/// An owned contiguous buffer with explicit count/capacity bookkeeping.
///
/// Invariant: `0 <= count <= capacity` after every operation. When an element
/// arrives while `count == capacity`, the buffer grows one golden-ratio step
/// first, so repeated appends from empty allocate 13, 21, 34, 55, ...
///
/// # Examples
///
/// ```
/// use trellis::DynArray;
/// use trellis::prelude::*;
///
/// let mut array = DynArray::new();
/// array.postpend_slice(&[1, 2, 3])?;
/// array.prepend(0)?;
/// assert_eq!(array.as_slice(), &[0, 1, 2, 3]);
/// assert_eq!(array.capacity(), 13);
/// # Ok::<(), trellis::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DynArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create a new empty array with zero capacity.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Create an empty array with `capacity` elements pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Iterator over the elements in positional order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow every element as one contiguous slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the array, returning the elements as an owned buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Grow one golden-ratio step if the next element would not fit.
    fn ensure_room(&mut self) -> Result<()> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        Ok(())
    }

    fn out_of_bounds(&self, position: usize) -> crate::Error {
        ContractError::OutOfBounds {
            position,
            count: self.items.len(),
        }
        .into()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len();
        Self { items, capacity }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Capacity for DynArray<T> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

impl<T> Resize for DynArray<T> {
    fn resize(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.items.len() {
            self.items.truncate(capacity);
        }
        self.items.shrink_to(capacity);
        self.items.reserve_exact(capacity - self.items.len());
        self.capacity = capacity;
        Ok(())
    }
}

impl<T> Add<T> for DynArray<T> {
    fn add(&mut self, element: T) -> Result<()> {
        self.ensure_room()?;
        self.items.push(element);
        Ok(())
    }
}

impl<T> Insert<T> for DynArray<T> {
    fn insert(&mut self, at: usize, element: T) -> Result<()> {
        if at > self.items.len() {
            return Err(self.out_of_bounds(at));
        }
        self.ensure_room()?;
        self.items.insert(at, element);
        Ok(())
    }
}

impl<T> Postpend<T> for DynArray<T> {
    fn postpend(&mut self, element: T) -> Result<()> {
        self.add(element)
    }
}

impl<T> Prepend<T> for DynArray<T> {
    fn prepend(&mut self, element: T) -> Result<()> {
        self.ensure_room()?;
        self.items.insert(0, element);
        Ok(())
    }
}

impl<T> Push<T> for DynArray<T> {
    fn push(&mut self, element: T) -> Result<()> {
        self.add(element)
    }
}

impl<T> Pop<T> for DynArray<T> {
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Replace<T> for DynArray<T> {
    fn replace(&mut self, search: &T, replacement: &T) -> usize
    where
        T: PartialEq + Clone,
    {
        let mut replaced = 0;
        for item in &mut self.items {
            if item == search {
                *item = replacement.clone();
                replaced += 1;
            }
        }
        replaced
    }
}

impl<T> Shift for DynArray<T> {
    fn shift(&mut self, from: usize, to: usize) -> Result<()> {
        let count = self.items.len();
        if from >= count {
            return Err(self.out_of_bounds(from));
        }
        if to >= count {
            return Err(self.out_of_bounds(to));
        }
        if from != to {
            let element = self.items.remove(from);
            self.items.insert(to, element);
        }
        Ok(())
    }
}

impl<T> Slice<T> for DynArray<T> {
    fn get(&self, at: usize) -> Option<&T> {
        self.items.get(at)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> View<T> for DynArray<T> {
    fn as_slice(&self) -> &[T] {
        DynArray::as_slice(self)
    }
}

impl<T> SequentialWrite<T> for DynArray<T> {
    /// A growing array always has room for the next element.
    fn is_ready(&self) -> bool {
        true
    }

    fn write(&mut self, element: T) -> Result<()> {
        self.add(element)
    }
}
