//! Capability contracts: operation families with one primitive and layered batch defaults.
//!
//! Each contract in this module is a trait with one or two required methods (the
//! *primitive*) and a tower of provided methods deriving the batch-shaped forms
//! from it:
//!
//! 1. single element (the primitive itself)
//! 2. borrowed read-only view (`&[T]`)
//! 3. borrowed mutable view (`&mut [T]`, read family only)
//! 4. owned buffer (`Vec<T>`)
//! 5. arbitrary input sequence (`impl IntoIterator`)
//!
//! Every derived operation is expressible purely through operations earlier in
//! the tower, so a concrete container implements exactly the primitive and
//! inherits uniform semantics for everything else:
//!
//! - Batch defaults stop at the **first** primitive failure and return it,
//!   leaving the container in whatever partial state the already-applied
//!   elements produced. No rollback is provided; callers needing all-or-nothing
//!   must snapshot themselves.
//! - An empty batch is a no-op success, never a failure.
//! - [`Prepend`] walks its input in reverse so prepended batches land in their
//!   original order.
//!
//! # Failure channels
//!
//! A primitive that cannot complete (bounded container full, position out of
//! range, source not ready) returns a [`ContractError`], the recoverable
//! channel every batch default checks and propagates. Caller bugs (capacity
//! arithmetic that cannot be represented on the host) panic immediately
//! instead; see [`Resize::grow`].

mod add;
mod append;
mod errors;
mod insert;
mod replace;
mod resize;
mod sequential;
mod shift;
mod slice;
mod stack;

pub use add::Add;
pub use append::{Postpend, Prepend};
pub use errors::ContractError;
pub use insert::Insert;
pub use replace::Replace;
pub use resize::{Capacity, GOLDEN_RATIO, Resize};
pub use sequential::{SequentialRead, SequentialWrite};
pub use shift::Shift;
pub use slice::{Slice, View};
pub use stack::{Pop, Push};
