// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::BufferError;
use crate::raw_buffer::RawBuffer;

use super::utils::CountingAlloc;

// =============================================================================
// new() / default()
// =============================================================================

#[test]
fn test_new_is_empty_without_allocation() {
    let buf: RawBuffer<u64> = RawBuffer::new();

    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
    assert_eq!(buf.spare_capacity(), 0);
    assert!(buf.is_empty());
    assert!(!buf.as_ptr().is_null());
    assert!(buf.as_slice().is_empty());
}

#[test]
fn test_default_matches_new() {
    let buf: RawBuffer<u8> = RawBuffer::default();

    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
}

// =============================================================================
// allocate() / with_capacity_in()
// =============================================================================

#[test]
fn test_allocate_reserves_exact_capacity() {
    let buf = RawBuffer::<u32>::allocate(16).expect("Failed to allocate(16)");

    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 16);
    assert_eq!(buf.spare_capacity(), 16);
    assert_eq!(buf.as_ptr() as usize % align_of::<u32>(), 0);
}

#[test]
fn test_zero_capacity_does_not_reach_allocator() {
    let alloc = CountingAlloc::default();
    let buf = RawBuffer::<u32, _>::with_capacity_in(0, alloc.clone())
        .expect("Failed to with_capacity_in(0)");

    assert_eq!(buf.capacity(), 0);
    assert_eq!(alloc.allocations.get(), 0);

    drop(buf);
    assert_eq!(alloc.deallocations.get(), 0);
}

#[test]
fn test_zero_sized_type_does_not_reach_allocator() {
    let alloc = CountingAlloc::default();
    let buf = RawBuffer::<(), _>::with_capacity_in(1_000, alloc.clone())
        .expect("Failed to with_capacity_in(1_000)");

    assert_eq!(buf.capacity(), 1_000);
    assert_eq!(alloc.allocations.get(), 0);

    drop(buf);
    assert_eq!(alloc.deallocations.get(), 0);
}

#[test]
fn test_capacity_overflow_is_reported() {
    let result = RawBuffer::<u64>::allocate(usize::MAX / 2);

    assert!(matches!(result, Err(BufferError::CapacityOverflow)));
}

#[test]
fn test_allocator_refusal_is_reported() {
    let alloc = CountingAlloc::default();
    alloc.refuse.set(true);

    let result = RawBuffer::<u32, _>::with_capacity_in(8, alloc.clone());

    assert!(matches!(result, Err(BufferError::AllocFailed { .. })));
    assert_eq!(alloc.live(), 0);
}

// =============================================================================
// drop()
// =============================================================================

#[test]
fn test_drop_releases_allocation_once() {
    let alloc = CountingAlloc::default();

    {
        let _buf = RawBuffer::<u16, _>::with_capacity_in(5, alloc.clone())
            .expect("Failed to with_capacity_in(5)");
        assert_eq!(alloc.live(), 1);
    }

    assert_eq!(alloc.allocations.get(), 1);
    assert_eq!(alloc.deallocations.get(), 1);
}

// =============================================================================
// set_len() / as_slice() / as_mut_slice()
// =============================================================================

#[test]
fn test_set_len_exposes_initialized_prefix() {
    let mut buf = RawBuffer::<u8>::allocate(4).expect("Failed to allocate(4)");

    unsafe {
        buf.as_mut_ptr().write(1);
        buf.as_mut_ptr().add(1).write(2);
        buf.set_len(2);
    }

    assert_eq!(buf.as_slice(), &[1, 2]);
    assert_eq!(buf.spare_capacity(), 2);

    buf.as_mut_slice()[0] = 42;
    assert_eq!(buf.as_slice(), &[42, 2]);
}

// =============================================================================
// swap() / take()
// =============================================================================

#[test]
fn test_swap_exchanges_boundaries() {
    let mut a = RawBuffer::<u8>::allocate(3).expect("Failed to allocate(3)");
    let mut b = RawBuffer::<u8>::allocate(7).expect("Failed to allocate(7)");

    unsafe {
        a.as_mut_ptr().write(9);
        a.set_len(1);
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    a.swap(&mut b);

    assert_eq!(a.as_ptr(), b_ptr);
    assert_eq!(a.capacity(), 7);
    assert_eq!(a.len(), 0);

    assert_eq!(b.as_ptr(), a_ptr);
    assert_eq!(b.capacity(), 3);
    assert_eq!(b.as_slice(), &[9]);
}

#[test]
fn test_take_leaves_empty_and_keeps_allocation_alive() {
    let alloc = CountingAlloc::default();
    let mut buf = RawBuffer::<u32, _>::with_capacity_in(4, alloc.clone())
        .expect("Failed to with_capacity_in(4)");
    let ptr = buf.as_ptr();

    let taken = buf.take();

    assert_eq!(buf.capacity(), 0);
    assert_eq!(buf.len(), 0);
    assert_eq!(taken.as_ptr(), ptr);
    assert_eq!(taken.capacity(), 4);

    // The emptied buffer releases nothing
    drop(buf);
    assert_eq!(alloc.live(), 1);

    drop(taken);
    assert_eq!(alloc.live(), 0);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_does_not_print_contents() {
    let buf = RawBuffer::<u8>::allocate(2).expect("Failed to allocate(2)");

    assert_eq!(format!("{:?}", buf), "RawBuffer { len: 0, capacity: 2, .. }");
}
