// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::BufferError;

/// Strategy for acquiring and releasing raw storage.
///
/// Handles are cloned into copies of a container and swapped along with the
/// storage they produced, so cloning must be cheap.
///
/// `RawBuffer` never calls `allocate` with a zero-sized layout.
pub trait RawAlloc: Clone {
    /// Acquires a block of memory fitting `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocFailed`] if the request cannot be satisfied.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, BufferError>;

    /// Releases a block previously returned by [`RawAlloc::allocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate` on this strategy (or a clone of it)
    /// with the same `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The process global allocator.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Global;

impl RawAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, BufferError> {
        debug_assert!(layout.size() != 0, "Global::allocate: zero-sized layout");

        // SAFETY: layout has non-zero size (RawBuffer never requests zero-sized blocks)
        let ptr = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(ptr).ok_or(BufferError::AllocFailed { layout })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: caller guarantees ptr was allocated here with the same layout
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) };
    }
}
