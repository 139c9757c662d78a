// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for limvec-buffer.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::error::BufferError;
use crate::raw_alloc::{Global, RawAlloc};

/// Global allocator wrapper that records allocate/deallocate calls and can
/// be told to refuse requests.
#[derive(Debug, Clone, Default)]
pub struct CountingAlloc {
    pub allocations: Rc<Cell<usize>>,
    pub deallocations: Rc<Cell<usize>>,
    pub refuse: Rc<Cell<bool>>,
}

impl CountingAlloc {
    pub fn live(&self) -> usize {
        self.allocations.get() - self.deallocations.get()
    }
}

impl RawAlloc for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, BufferError> {
        if self.refuse.get() {
            return Err(BufferError::AllocFailed { layout });
        }

        let ptr = Global.allocate(layout)?;
        self.allocations.set(self.allocations.get() + 1);

        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.deallocations.set(self.deallocations.get() + 1);
        unsafe { Global.deallocate(ptr, layout) };
    }
}
