// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Batch construction into uninitialized storage with rollback.
//!
//! Both routines behave as a local transaction: either every slot of the
//! target range ends up constructed, or every slot built by the call is
//! destroyed again and the range is left uninitialized. Rollback runs on an
//! early error return as well as during unwinding from a panicking `Clone`.
//!
//! Callers own the raw storage and decide what to do with it on failure.

use core::ptr;

use crate::error::LimitedVecError;
use crate::try_clone::TryClone;

/// Tracks slots constructed so far, destroying them unless disarmed.
struct InitGuard<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> InitGuard<T> {
    fn new(start: *mut T) -> Self {
        Self {
            start,
            initialized: 0,
        }
    }

    /// # Safety
    ///
    /// The slot at `start + initialized` must be valid for writes and uninitialized.
    #[inline(always)]
    unsafe fn push(&mut self, value: T) {
        unsafe { self.start.add(self.initialized).write(value) };
        // Counted only once the write has happened
        self.initialized += 1;
    }

    /// Commits the batch, returning the number of constructed slots.
    fn disarm(self) -> usize {
        let initialized = self.initialized;
        core::mem::forget(self);
        initialized
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // SAFETY: exactly [start, start + initialized) was written by push()
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}

/// Constructs `count` copies of `value` at `dst`, left to right.
///
/// # Safety
///
/// `[dst, dst + count)` must be valid for writes, uninitialized, and must not
/// overlap `value`.
pub(crate) unsafe fn fill<T: TryClone>(
    dst: *mut T,
    count: usize,
    value: &T,
) -> Result<(), LimitedVecError> {
    let mut guard = InitGuard::new(dst);

    for _ in 0..count {
        let item = value.try_clone().map_err(LimitedVecError::element)?;
        unsafe { guard.push(item) };
    }

    let built = guard.disarm();
    debug_assert_eq!(built, count);

    Ok(())
}

/// Copy-constructs every element of `src` into the raw storage at `dst`.
///
/// # Safety
///
/// `[dst, dst + src.len())` must be valid for writes, uninitialized, and must
/// not overlap `src`.
pub(crate) unsafe fn clone_into<T: TryClone>(
    src: &[T],
    dst: *mut T,
) -> Result<(), LimitedVecError> {
    let mut guard = InitGuard::new(dst);

    for item in src {
        let copy = item.try_clone().map_err(LimitedVecError::element)?;
        unsafe { guard.push(copy) };
    }

    let built = guard.disarm();
    debug_assert_eq!(built, src.len());

    Ok(())
}
