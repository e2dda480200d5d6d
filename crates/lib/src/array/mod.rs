//! Concrete contiguous containers consuming the capability contracts.
//!
//! # Core Types
//!
//! - [`DynArray`] - An owned contiguous buffer that grows through the
//!   golden-ratio resize policy when full
//! - [`BoundedArray`] - A fixed-capacity buffer that declines instead of
//!   growing, the stress case for batch short-circuiting
//! - [`Stack`] - A LIFO adapter over [`DynArray`] that doubles as a
//!   [`SequentialRead`](crate::contract::SequentialRead) source
//!
//! Each container implements only the contract primitives; all batch behavior
//! comes from the contract defaults.

pub mod bounded;
pub mod dyn_array;
pub mod stack;

pub use bounded::BoundedArray;
pub use dyn_array::DynArray;
pub use stack::Stack;
