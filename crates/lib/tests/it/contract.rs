//! Capability contract integration tests
//!
//! The contract defaults are shared code paths; these tests pin down the
//! semantics every implementor inherits: forward/reverse walk order,
//! first-failure short-circuiting, empty-batch no-ops and clamping.

use trellis::prelude::*;
use trellis::{BoundedArray, DynArray, Result, Stack};

// ===== ORDERING RULES =====

#[test]
fn postpend_batch_lands_in_input_order() -> Result<()> {
    let mut array = DynArray::new();
    array.postpend_slice(&[1, 2])?;
    array.postpend_vec(vec![3, 4])?;
    array.postpend_iter(5..=6)?;
    assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[test]
fn prepend_batches_keep_their_original_order() -> Result<()> {
    let mut array = DynArray::new();
    array.prepend_slice(&[1, 2])?;
    array.prepend_slice(&[3, 4, 5])?;
    assert_eq!(array.as_slice(), &[3, 4, 5, 1, 2]);

    // Owned-buffer and arbitrary-sequence forms agree with the slice form.
    let mut array = DynArray::new();
    array.prepend_vec(vec![1, 2])?;
    array.prepend_iter([3, 4, 5])?;
    assert_eq!(array.as_slice(), &[3, 4, 5, 1, 2]);
    Ok(())
}

#[test]
fn insert_batch_advances_the_insertion_point() -> Result<()> {
    let mut array: DynArray<i32> = vec![1, 5].into();
    array.insert_slice(1, &[2, 3, 4])?;
    assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn push_batch_leaves_last_element_on_top() -> Result<()> {
    let mut stack = Stack::new();
    stack.push_slice(&["bottom", "top"])?;
    assert_eq!(stack.peek(), Some(&"top"));
    Ok(())
}

// ===== SHORT-CIRCUIT SEMANTICS =====

#[test]
fn batch_into_nearly_full_container_applies_exactly_the_prefix() -> Result<()> {
    let mut array = BoundedArray::new(5);
    array.postpend_slice(&[9, 9, 9])?;

    // Room for exactly 2 of the 3: the third declines, first two stay.
    let err = array.postpend_slice(&[1, 2, 3]).unwrap_err();
    assert!(err.is_full());
    assert_eq!(array.as_slice(), &[9, 9, 9, 1, 2]);
    Ok(())
}

#[test]
fn prepend_short_circuit_applies_the_reversed_prefix() -> Result<()> {
    let mut array = BoundedArray::new(3);
    array.postpend(0)?;

    // Reverse walk: 5 then 4 go in, 3 declines.
    let err = array.prepend_slice(&[3, 4, 5]).unwrap_err();
    assert!(err.is_full());
    assert_eq!(array.as_slice(), &[4, 5, 0]);
    Ok(())
}

#[test]
fn empty_batches_never_fail_even_on_full_containers() -> Result<()> {
    let mut array: BoundedArray<i32> = BoundedArray::new(0);
    array.postpend_slice(&[])?;
    array.prepend_vec(vec![])?;
    array.insert_iter(0, std::iter::empty())?;
    array.add_slice(&[])?;
    Ok(())
}

// ===== CLAMPING FAMILIES =====

#[test]
fn pop_many_clamps_instead_of_failing() -> Result<()> {
    let mut stack = Stack::new();
    stack.push_iter(1..=3)?;
    assert_eq!(stack.pop_many(99), vec![3, 2, 1]);
    assert_eq!(stack.pop_many(99), Vec::<i32>::new());
    Ok(())
}

#[test]
fn read_into_fills_only_what_the_source_has() -> Result<()> {
    let mut stack = Stack::from(vec![1, 2]);
    let mut buffer = [0; 4];
    let moved = stack.read_into(&mut buffer)?;
    assert_eq!(moved, 2);
    assert_eq!(buffer, [2, 1, 0, 0], "untouched tail keeps its old values");
    Ok(())
}

#[test]
fn read_vec_shortens_on_a_dry_source() -> Result<()> {
    let mut stack = Stack::from(vec!["only"]);
    let out = stack.read_vec(10)?;
    assert_eq!(out, vec!["only"]);
    Ok(())
}

// ===== SLICING =====

#[test]
fn slice_round_trips_without_mutating_the_source() -> Result<()> {
    let array: DynArray<i32> = (0..10).collect();
    let copied = array.slice(3, 4)?;
    assert_eq!(copied, vec![3, 4, 5, 6]);
    assert_eq!(array.count(), 10, "slicing must not disturb the source");
    assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let viewed = array.view(3, 4)?;
    assert_eq!(viewed, copied.as_slice());
    Ok(())
}

#[test]
fn slice_past_the_end_declines() {
    let array: DynArray<i32> = (0..3).collect();
    assert!(array.slice(2, 5).unwrap_err().is_out_of_bounds());
    assert!(array.view(0, 4).unwrap_err().is_out_of_bounds());
}

#[test]
fn zero_length_slices_succeed_anywhere_in_range() -> Result<()> {
    let array: DynArray<i32> = (0..3).collect();
    assert!(array.slice(0, 0)?.is_empty());
    assert!(array.slice(3, 0)?.is_empty());
    assert!(array.view(3, 0)?.is_empty());
    Ok(())
}

#[test]
fn contains_and_position_scan_linearly() {
    let array: DynArray<char> = "trellis".chars().collect();
    assert!(array.contains(&'l'));
    assert!(!array.contains(&'z'));
    assert_eq!(array.position_of(&'l'), Some(3));
}

// ===== SEQUENTIAL TRANSFER =====

#[test]
fn load_from_short_circuits_on_either_side() -> Result<()> {
    // Happy path: everything moves.
    let mut source = Stack::from(vec![1, 2, 3]);
    let mut sink = DynArray::new();
    assert_eq!(sink.load_from(&mut source)?, 3);

    // Sink side fails: moved prefix stays written, remainder stays queued.
    let mut source = Stack::from(vec![1, 2, 3]);
    let mut sink = BoundedArray::new(1);
    let err = sink.load_from(&mut source).unwrap_err();
    assert!(err.is_declined());
    assert_eq!(sink.as_slice(), &[3]);
    assert_eq!(source.len(), 2);
    Ok(())
}

// ===== REPLACE AND SHIFT =====

#[test]
fn replace_pairs_apply_in_order() {
    let mut array: DynArray<i32> = vec![1, 2, 1].into();
    // The second pair observes the first pair's effects.
    // (1, 2) changes two elements, then (2, 3) changes all three.
    let replaced = array.replace_pairs(&[(1, 2), (2, 3)]);
    assert_eq!(array.as_slice(), &[3, 3, 3]);
    assert_eq!(replaced, 5);
}

#[test]
fn shift_run_preserves_run_order_in_both_directions() -> Result<()> {
    let mut array: DynArray<char> = "abcde".chars().collect();
    array.shift_run(0, 2, 2)?;
    assert_eq!(array.as_slice(), &['c', 'd', 'a', 'b', 'e']);

    let mut array: DynArray<char> = "abcde".chars().collect();
    array.shift_run(2, 2, 0)?;
    assert_eq!(array.as_slice(), &['c', 'd', 'a', 'b', 'e']);
    Ok(())
}

#[test]
fn shift_out_of_range_declines_without_touching_the_container() {
    let mut array: DynArray<i32> = vec![1, 2, 3].into();
    assert!(array.shift(0, 9).unwrap_err().is_out_of_bounds());
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}
