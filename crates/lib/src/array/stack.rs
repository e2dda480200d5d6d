//! A LIFO adapter over [`DynArray`].
//!
//! Besides the stack contracts, `Stack` implements
//! [`SequentialRead`](crate::contract::SequentialRead) with read-as-pop, so
//! one container can be drained into another through
//! [`SequentialWrite::load_from`](crate::contract::SequentialWrite::load_from).

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::array::DynArray;
use crate::contract::{
    Capacity, ContractError, Pop, Push, Resize, SequentialRead, Slice,
};

/// A LIFO container backed by a [`DynArray`].
///
/// # Examples
///
/// ```
/// use trellis::Stack;
/// use trellis::prelude::*;
///
/// let mut stack = Stack::new();
/// stack.push_slice(&[1, 2, 3])?;
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop_many(5), vec![3, 2, 1]); // clamped to what is there
/// # Ok::<(), trellis::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stack<T> {
    items: DynArray<T>,
}

impl<T> Stack<T> {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self {
            items: DynArray::new(),
        }
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the stack, returning the elements bottom first.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Build a stack with the last buffer element on top.
    fn from(items: Vec<T>) -> Self {
        Self {
            items: DynArray::from(items),
        }
    }
}

impl<T> Capacity for Stack<T> {
    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn count(&self) -> usize {
        self.items.count()
    }
}

impl<T> Resize for Stack<T> {
    fn resize(&mut self, capacity: usize) -> Result<()> {
        self.items.resize(capacity)
    }
}

impl<T> Push<T> for Stack<T> {
    fn push(&mut self, element: T) -> Result<()> {
        self.items.push(element)
    }
}

impl<T> Pop<T> for Stack<T> {
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.peek()
    }
}

impl<T> SequentialRead<T> for Stack<T> {
    /// Ready while at least one element remains.
    fn is_ready(&self) -> bool {
        !self.items.is_empty()
    }

    /// Reading pops: the stack drains top first.
    fn read(&mut self) -> Result<T> {
        self.pop().ok_or_else(|| {
            ContractError::NotReady {
                operation: "read".to_string(),
            }
            .into()
        })
    }
}
