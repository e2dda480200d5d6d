//! The SequentialRead and SequentialWrite contracts: cursor-style streaming.
//!
//! Both sides expose a readiness flag separate from per-call success. Readiness
//! answers "would the next single-element call stand a chance"; an individual
//! call may still decline. Batch reads clamp to what the source can supply;
//! batch writes short-circuit like every other growth family.

use tracing::trace;

use crate::Result;
use crate::contract::ContractError;

/// Read elements one at a time from a draining source.
pub trait SequentialRead<T> {
    /// Whether the source currently has an element to supply.
    fn is_ready(&self) -> bool;

    /// Required primitive: remove and return the next element.
    ///
    /// Declines when the source is not ready.
    fn read(&mut self) -> Result<T>;

    /// Fill a borrowed mutable view from the source, returning how many
    /// elements were written.
    ///
    /// Stops early, without declining, when the source runs dry; the tail of
    /// `out` is left untouched.
    fn read_into(&mut self, out: &mut [T]) -> Result<usize> {
        let mut moved = 0;
        for slot in out.iter_mut() {
            if !self.is_ready() {
                break;
            }
            *slot = self.read()?;
            moved += 1;
        }
        Ok(moved)
    }

    /// Read up to `count` elements into an owned buffer.
    ///
    /// Like [`read_into`](Self::read_into), a dry source shortens the result
    /// instead of declining.
    fn read_vec(&mut self, count: usize) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            if !self.is_ready() {
                break;
            }
            out.push(self.read()?);
        }
        Ok(out)
    }
}

/// Write elements one at a time into an accepting sink.
pub trait SequentialWrite<T> {
    /// Whether the sink currently has room for an element.
    fn is_ready(&self) -> bool;

    /// Required primitive: accept one element.
    ///
    /// Declines when the sink cannot take it.
    fn write(&mut self, element: T) -> Result<()>;

    /// Write every element of a borrowed slice, cloning each.
    ///
    /// Stops at the first decline, leaving the written prefix in the sink.
    fn write_slice(&mut self, elements: &[T]) -> Result<()>
    where
        T: Clone,
    {
        for element in elements {
            self.write(element.clone())?;
        }
        Ok(())
    }

    /// Write every element of an owned buffer.
    fn write_vec(&mut self, elements: Vec<T>) -> Result<()> {
        self.write_iter(elements)
    }

    /// Write every element of an arbitrary sequence.
    fn write_iter(&mut self, elements: impl IntoIterator<Item = T>) -> Result<()> {
        for element in elements {
            self.write(element)?;
        }
        Ok(())
    }

    /// Drain a typed source into this sink, returning how many elements moved.
    ///
    /// Reads while the source stays ready, writing each element as it comes.
    /// Short-circuits on either side's failure: a read failure propagates
    /// as-is, and a sink that stops being ready mid-transfer declines with the
    /// elements moved so far already written.
    fn load_from<S>(&mut self, source: &mut S) -> Result<usize>
    where
        S: SequentialRead<T> + ?Sized,
    {
        let mut moved = 0;
        while source.is_ready() {
            if !self.is_ready() {
                return Err(ContractError::NotReady {
                    operation: "load_from".to_string(),
                }
                .into());
            }
            let element = source.read()?;
            self.write(element)?;
            moved += 1;
        }
        trace!(moved, "Drained sequential source into sink");
        Ok(moved)
    }
}
