//! The Capacity and Resize contracts: golden-ratio storage growth.
//!
//! A container implements one primitive, [`Resize::resize`], and inherits the
//! growth policy: capacities at or below [`SMALL_CAPACITY`] jump straight to
//! [`FIRST_GROWTH`], and larger ones scale by the golden ratio. Repeated
//! growth from a small start follows the Fibonacci-like progression
//! 13, 21, 34, 55, 89, an irrational factor relative to common allocation
//! alignments, in closed Fibonacci relation.

use tracing::debug;

use crate::Result;

/// The golden ratio φ, the capacity growth/shrink multiplier.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_7;

/// Capacities at or below this skip scaling and jump to [`FIRST_GROWTH`].
const SMALL_CAPACITY: usize = 8;

/// The capacity a small container grows to in one step.
const FIRST_GROWTH: usize = 13;

/// Occupancy and allocation accessors.
///
/// Implementors guarantee `count() <= capacity()` after every operation.
pub trait Capacity {
    /// Number of elements the allocated storage can hold.
    fn capacity(&self) -> usize;

    /// Number of elements currently in use.
    fn count(&self) -> usize;

    /// Whether the occupied count has reached the allocated capacity.
    fn is_full(&self) -> bool {
        self.count() >= self.capacity()
    }
}

/// Reshape a container's backing storage.
pub trait Resize: Capacity {
    /// Required primitive: reshape storage to hold exactly `capacity` elements.
    ///
    /// Existing elements are preserved up to `min(count, capacity)`; shrinking
    /// below the occupied count discards the tail, so `count <= capacity`
    /// holds afterwards.
    fn resize(&mut self, capacity: usize) -> Result<()>;

    /// Grow capacity by one golden-ratio step, returning the new capacity.
    ///
    /// # Panics
    ///
    /// Panics if the scaled capacity cannot be represented on the host's
    /// integer width. That is a contract violation by the caller, not a
    /// runtime-dependent outcome, so it raises instead of declining.
    fn grow(&mut self) -> Result<usize> {
        let current = self.capacity();
        let target = if current <= SMALL_CAPACITY {
            FIRST_GROWTH
        } else {
            scale(current, GOLDEN_RATIO)
        };
        debug!(from = current, to = target, "Growing container capacity");
        self.resize(target)?;
        Ok(target)
    }

    /// Shrink capacity by one golden-ratio step, returning the new capacity.
    ///
    /// Never raises the capacity. Grow and shrink are not exact inverses:
    /// rounding means a grow followed by a shrink need not restore the
    /// original capacity.
    fn shrink(&mut self) -> Result<usize> {
        let current = self.capacity();
        let target = scale(current, 1.0 / GOLDEN_RATIO);
        debug!(from = current, to = target, "Shrinking container capacity");
        self.resize(target)?;
        Ok(target)
    }
}

/// Scale a capacity by `factor`, rounding to the nearest whole element.
fn scale(capacity: usize, factor: f64) -> usize {
    let scaled = (capacity as f64 * factor).round();
    if !(0.0..=usize::MAX as f64).contains(&scaled) {
        panic!("capacity {capacity} scaled by {factor} is unrepresentable on this platform");
    }
    scaled as usize
}
