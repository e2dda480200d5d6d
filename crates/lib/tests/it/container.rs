//! Concrete container integration tests
//!
//! Covers the golden-ratio resize policy as observed through `DynArray`, the
//! bounded container's decline behavior, and serde round-trips of the plain
//! container types.

use trellis::prelude::*;
use trellis::{BoundedArray, DynArray, Result, Stack};

// ===== RESIZE POLICY =====

#[test]
fn five_growths_from_empty_reproduce_the_sequence() -> Result<()> {
    let mut array: DynArray<u8> = DynArray::new();
    let mut observed = Vec::new();
    for _ in 0..5 {
        observed.push(array.grow()?);
    }
    assert_eq!(observed, vec![13, 21, 34, 55, 89]);
    Ok(())
}

#[test]
fn organic_growth_matches_explicit_growth() -> Result<()> {
    // Filling element by element must cross the same capacity ladder.
    let mut array = DynArray::new();
    let mut ladder = Vec::new();
    for n in 0..100 {
        let before = array.capacity();
        array.postpend(n)?;
        if array.capacity() != before {
            ladder.push(array.capacity());
        }
    }
    assert_eq!(ladder, vec![13, 21, 34, 55, 89, 144]);
    Ok(())
}

#[test]
fn shrink_keeps_count_within_capacity() -> Result<()> {
    let mut array: DynArray<i32> = (0..30).collect();
    // count == capacity == 30; round(30 / φ) = 19
    array.shrink()?;
    assert_eq!(array.capacity(), 19);
    assert_eq!(array.count(), 19, "discarded tail, kept the prefix");
    assert_eq!(array.get(18), Some(&18));
    Ok(())
}

#[test]
fn resize_preserves_the_prefix_exactly() -> Result<()> {
    let mut array: DynArray<i32> = (0..8).collect();
    array.resize(100)?;
    assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    array.resize(3)?;
    assert_eq!(array.as_slice(), &[0, 1, 2]);
    Ok(())
}

// ===== BOUNDED CONTAINER =====

#[test]
fn bounded_container_never_grows() {
    let mut array = BoundedArray::new(2);
    array.postpend(1).unwrap();
    array.postpend(2).unwrap();
    assert!(array.postpend(3).unwrap_err().is_full());
    assert_eq!(array.capacity(), 2);
    assert_eq!(array.remaining(), 0);
}

#[test]
fn bounded_insert_respects_position_and_capacity() -> Result<()> {
    let mut array = BoundedArray::new(3);
    array.postpend_slice(&['a', 'c'])?;
    array.insert(1, 'b')?;
    assert_eq!(array.as_slice(), &['a', 'b', 'c']);

    let err = array.insert(0, 'z').unwrap_err();
    assert!(err.is_full());
    Ok(())
}

// ===== STACK =====

#[test]
fn stack_drains_in_lifo_order_through_sequential_read() -> Result<()> {
    let mut stack = Stack::new();
    stack.push_iter(["a", "b", "c"])?;

    let mut drained = Vec::new();
    while stack.is_ready() {
        drained.push(stack.read()?);
    }
    assert_eq!(drained, vec!["c", "b", "a"]);
    Ok(())
}

#[test]
fn stack_resizes_like_its_backing_array() -> Result<()> {
    let mut stack: Stack<i32> = Stack::new();
    stack.push_iter(0..20)?;
    stack.resize(5)?;
    assert_eq!(stack.count(), 5);
    assert_eq!(stack.pop(), Some(4), "resize keeps the bottom of the stack");
    Ok(())
}

// ===== SERIALIZATION =====

#[test]
fn containers_round_trip_through_json() {
    let array: DynArray<i32> = (0..5).collect();
    let json = serde_json::to_string(&array).unwrap();
    let back: DynArray<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, array);

    let mut bounded = BoundedArray::new(3);
    bounded.postpend_slice(&["x", "y"]).unwrap();
    let json = serde_json::to_string(&bounded).unwrap();
    let back: BoundedArray<&str> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bounded);

    let stack = Stack::from(vec![1, 2, 3]);
    let json = serde_json::to_string(&stack).unwrap();
    let back: Stack<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stack);
}
