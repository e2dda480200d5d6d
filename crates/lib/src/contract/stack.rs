//! The Push, Pop and Peek contracts: stack discipline.
//!
//! Pop is deliberately asymmetric to the growth families: popping an empty
//! container is not a failure, it simply yields nothing. The batch form clamps
//! the requested count to what is actually available instead of declining.

use crate::Result;

/// Push elements onto a LIFO container.
pub trait Push<T> {
    /// Required primitive: push one element onto the top.
    ///
    /// Declines when the container cannot take another element.
    fn push(&mut self, element: T) -> Result<()>;

    /// Push every element of a borrowed slice, cloning each, walking forward.
    ///
    /// The last slice element ends up on top. Stops at the first decline.
    fn push_slice(&mut self, elements: &[T]) -> Result<()>
    where
        T: Clone,
    {
        for element in elements {
            self.push(element.clone())?;
        }
        Ok(())
    }

    /// Push every element of an owned buffer.
    fn push_vec(&mut self, elements: Vec<T>) -> Result<()> {
        self.push_iter(elements)
    }

    /// Push every element of an arbitrary sequence.
    fn push_iter(&mut self, elements: impl IntoIterator<Item = T>) -> Result<()> {
        for element in elements {
            self.push(element)?;
        }
        Ok(())
    }
}

/// Remove or inspect the top element of a LIFO container.
pub trait Pop<T> {
    /// Required primitive: remove and return the top element.
    ///
    /// `None` means the container was empty; this is an ordinary outcome, not
    /// a decline.
    fn pop(&mut self) -> Option<T>;

    /// Inspect the top element without removing it.
    fn peek(&self) -> Option<&T>;

    /// Pop up to `count` elements, top first.
    ///
    /// The requested count is clamped to what is actually available, so the
    /// returned buffer may be shorter than `count` and popping from an empty
    /// container yields an empty buffer.
    fn pop_many(&mut self, count: usize) -> Vec<T> {
        let mut out = Vec::new();
        for _ in 0..count {
            match self.pop() {
                Some(element) => out.push(element),
                None => break,
            }
        }
        out
    }
}
