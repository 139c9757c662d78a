// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::BufferError;
use crate::raw_alloc::{Global, RawAlloc};

/// Owner of a single fixed-size allocation of `T` slots.
///
/// The buffer tracks three boundaries: the start of the allocation
/// (`as_ptr()`), the end of the initialized prefix (`len()`) and the end of
/// the allocation (`capacity()`). It releases the allocation on drop and
/// never runs element destructors.
pub struct RawBuffer<T, A: RawAlloc = Global> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// Safety: RawBuffer owns its allocation exclusively, like Box<[T]>
unsafe impl<T: Send, A: RawAlloc + Send> Send for RawBuffer<T, A> {}
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for RawBuffer<T, A> {}

impl<T> RawBuffer<T, Global> {
    /// Creates an empty buffer with no allocation.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Allocates uninitialized storage for exactly `capacity` slots using the
    /// global allocator.
    ///
    /// # Errors
    ///
    /// See [`RawBuffer::with_capacity_in`].
    pub fn allocate(capacity: usize) -> Result<Self, BufferError> {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: RawAlloc> RawBuffer<T, A> {
    /// Creates an empty buffer bound to `alloc`, with no allocation.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Allocates uninitialized storage for exactly `capacity` slots from `alloc`.
    ///
    /// Zero capacities and zero-sized `T` never reach the allocator.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `capacity` slots of `T` exceed
    ///   `isize::MAX` bytes.
    /// - [`BufferError::AllocFailed`] if the allocator rejects the request.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Ok(Self::new_in(alloc));
        }

        if size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
                cap: capacity,
                alloc,
                _marker: PhantomData,
            });
        }

        let layout = Self::layout_for(capacity)?;
        let ptr = alloc.allocate(layout)?.cast::<T>();

        Ok(Self {
            ptr,
            len: 0,
            cap: capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    fn layout_for(capacity: usize) -> Result<Layout, BufferError> {
        Layout::array::<T>(capacity).map_err(|_| BufferError::CapacityOverflow)
    }

    #[inline(always)]
    fn owns_allocation(&self) -> bool {
        self.cap != 0 && size_of::<T>() != 0
    }

    /// Number of initialized slots at the front of the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is initialized.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Number of uninitialized slots after the initialized prefix.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.cap - self.len
    }

    /// Pointer to the first slot. Dangling (never null) when capacity is 0.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot. Dangling (never null) when capacity is 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the initialized prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized (set_len contract), ptr is aligned and non-null
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the initialized prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is initialized (set_len contract), ptr is aligned and non-null
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the allocation strategy handle.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Moves the used-end boundary.
    ///
    /// # Safety
    ///
    /// - `len <= capacity()`.
    /// - Slots `[0, len)` must be initialized.
    /// - Slots dropped out of the prefix must already be destroyed or moved out.
    #[inline]
    pub unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.cap, "RawBuffer::set_len: len exceeds capacity");
        self.len = len;
    }

    /// Exchanges storage, boundaries and allocator handle with `other`.
    ///
    /// Constant time, no element is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Moves the allocation out, leaving `self` empty (capacity 0).
    ///
    /// Nothing is released: ownership of the memory and of the initialized
    /// prefix passes to the returned buffer.
    pub fn take(&mut self) -> Self {
        let empty = Self::new_in(self.alloc.clone());
        core::mem::replace(self, empty)
    }
}

impl<T> Default for RawBuffer<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: RawAlloc> Drop for RawBuffer<T, A> {
    fn drop(&mut self) {
        if !self.owns_allocation() {
            return;
        }

        if let Ok(layout) = Self::layout_for(self.cap) {
            // SAFETY: ptr was allocated by self.alloc with exactly this layout
            unsafe { self.alloc.deallocate(self.ptr.cast::<u8>(), layout) };
        }
    }
}

impl<T, A: RawAlloc> core::fmt::Debug for RawBuffer<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .finish_non_exhaustive()
    }
}
