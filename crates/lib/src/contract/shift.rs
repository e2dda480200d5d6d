//! The Shift contract: relocate elements positionally.

use crate::Result;

/// Move elements from one position to another within a container.
pub trait Shift {
    /// Required primitive: move the element at `from` to `to`, sliding the
    /// elements between them by one position.
    ///
    /// `from == to` is a no-op success. Either position out of the occupied
    /// range declines without touching the container.
    fn shift(&mut self, from: usize, to: usize) -> Result<()>;

    /// Move the contiguous run `[from, from + len)` so it starts at `to`,
    /// preserving the run's internal order.
    ///
    /// Derived from repeated single shifts; a mid-run decline leaves the
    /// already-moved prefix at its new position.
    fn shift_run(&mut self, from: usize, len: usize, to: usize) -> Result<()> {
        if len == 0 || from == to {
            return Ok(());
        }
        if to < from {
            for offset in 0..len {
                self.shift(from + offset, to + offset)?;
            }
        } else {
            // Moving right: each pass takes the run's head, which stays at
            // `from` while the elements behind it slide down.
            for _ in 0..len {
                self.shift(from, to + len - 1)?;
            }
        }
        Ok(())
    }
}
