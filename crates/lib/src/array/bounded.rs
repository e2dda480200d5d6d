//! A fixed-capacity contiguous container.
//!
//! `BoundedArray` is the stress case for the contract layer's short-circuit
//! semantics: a full container declines the primitive, and every batch default
//! stops right there with the already-applied prefix in place.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::contract::{
    Add, Capacity, ContractError, Insert, Pop, Postpend, Prepend, Push, Replace, SequentialWrite,
    Shift, Slice, View,
};

/// An owned contiguous buffer whose capacity is fixed at construction.
///
/// The capacity never changes; `BoundedArray` deliberately does not implement
/// [`Resize`](crate::contract::Resize). An element arriving while full is
/// declined with [`ContractError::Full`].
///
/// # Examples
///
/// ```
/// use trellis::BoundedArray;
/// use trellis::prelude::*;
///
/// let mut array = BoundedArray::new(2);
/// let err = array.postpend_slice(&[1, 2, 3]).unwrap_err();
/// assert!(err.is_full());
/// // The batch stopped at the first decline, prefix intact.
/// assert_eq!(array.as_slice(), &[1, 2]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundedArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedArray<T> {
    /// Create an empty array that will never hold more than `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of elements that can still be taken before the array is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
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

    fn ensure_room(&self) -> Result<()> {
        if self.items.len() == self.capacity {
            return Err(ContractError::Full {
                capacity: self.capacity,
            }
            .into());
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

impl<T> Capacity for BoundedArray<T> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

impl<T> Add<T> for BoundedArray<T> {
    fn add(&mut self, element: T) -> Result<()> {
        self.ensure_room()?;
        self.items.push(element);
        Ok(())
    }
}

impl<T> Insert<T> for BoundedArray<T> {
    fn insert(&mut self, at: usize, element: T) -> Result<()> {
        if at > self.items.len() {
            return Err(self.out_of_bounds(at));
        }
        self.ensure_room()?;
        self.items.insert(at, element);
        Ok(())
    }
}

impl<T> Postpend<T> for BoundedArray<T> {
    fn postpend(&mut self, element: T) -> Result<()> {
        self.add(element)
    }
}

impl<T> Prepend<T> for BoundedArray<T> {
    fn prepend(&mut self, element: T) -> Result<()> {
        self.ensure_room()?;
        self.items.insert(0, element);
        Ok(())
    }
}

impl<T> Push<T> for BoundedArray<T> {
    fn push(&mut self, element: T) -> Result<()> {
        self.add(element)
    }
}

impl<T> Pop<T> for BoundedArray<T> {
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Replace<T> for BoundedArray<T> {
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

impl<T> Shift for BoundedArray<T> {
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

impl<T> Slice<T> for BoundedArray<T> {
    fn get(&self, at: usize) -> Option<&T> {
        self.items.get(at)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> View<T> for BoundedArray<T> {
    fn as_slice(&self) -> &[T] {
        BoundedArray::as_slice(self)
    }
}

impl<T> SequentialWrite<T> for BoundedArray<T> {
    /// Ready while there is room for at least one more element.
    fn is_ready(&self) -> bool {
        self.items.len() < self.capacity
    }

    fn write(&mut self, element: T) -> Result<()> {
        self.add(element)
    }
}
