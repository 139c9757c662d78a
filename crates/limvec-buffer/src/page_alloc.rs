// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PageAlloc - anonymous page mappings as raw storage.
//!
//! Every request gets its own private `mmap` mapping, rounded up to whole
//! pages. Alignments above the page size are rejected.

use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate::error::BufferError;
use crate::raw_alloc::RawAlloc;

/// Allocation strategy backed by `mmap`/`munmap`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PageAlloc;

impl PageAlloc {
    /// Returns the system page size, or `None` if it cannot be queried.
    pub fn page_size() -> Option<usize> {
        // SAFETY: sysconf has no preconditions
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

        if page_size <= 0 {
            return None;
        }

        Some(page_size as usize)
    }

    fn mapping_len(layout: Layout, page_size: usize) -> Result<usize, BufferError> {
        layout
            .size()
            .checked_next_multiple_of(page_size)
            .ok_or(BufferError::AllocFailed { layout })
    }
}

impl RawAlloc for PageAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, BufferError> {
        let Some(page_size) = Self::page_size() else {
            return Err(BufferError::AllocFailed { layout });
        };

        // mmap only guarantees page alignment
        if layout.align() > page_size {
            return Err(BufferError::AllocFailed { layout });
        }

        let len = Self::mapping_len(layout, page_size)?;

        // SAFETY: anonymous private mapping at a kernel-chosen address, no existing memory is touched
        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(BufferError::AllocFailed { layout });
        }

        NonNull::new(ptr as *mut u8).ok_or(BufferError::AllocFailed { layout })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        let Some(page_size) = Self::page_size() else {
            return;
        };

        if let Ok(len) = Self::mapping_len(layout, page_size) {
            // SAFETY: caller guarantees ptr is a live mapping of this length
            unsafe { libc::munmap(ptr.as_ptr() as *mut libc::c_void, len) };
        }
    }
}
