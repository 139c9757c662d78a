// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use limvec_buffer::{BufferError, Global, RawAlloc};

#[derive(Debug, Default)]
struct State {
    budget: Cell<Option<usize>>,
    live: Cell<usize>,
    refused: Cell<usize>,
}

/// Global-allocator wrapper with an allocation budget.
///
/// Clones share the same budget and counters, so a container and the copies
/// it makes draw from one pool. Once the budget reaches zero every request
/// fails with [`BufferError::AllocFailed`].
///
/// # Example
///
/// ```rust
/// use limvec::{LimitedVec, LimitedVecError};
/// use limvec_test_utils::FailingAlloc;
///
/// let alloc = FailingAlloc::with_budget(1);
///
/// let vec = LimitedVec::<u8, _>::try_with_capacity_in(4, alloc.clone());
/// assert!(vec.is_ok());
///
/// let second = LimitedVec::<u8, _>::try_with_capacity_in(4, alloc.clone());
/// assert!(matches!(second, Err(LimitedVecError::Alloc(_))));
/// assert_eq!(alloc.refused(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FailingAlloc {
    state: Rc<State>,
}

impl FailingAlloc {
    /// Allocator that never refuses.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Allocator that satisfies `budget` more requests, then refuses.
    pub fn with_budget(budget: usize) -> Self {
        let alloc = Self::default();
        alloc.set_budget(Some(budget));
        alloc
    }

    /// Replaces the remaining budget. `None` means unlimited.
    pub fn set_budget(&self, budget: Option<usize>) {
        self.state.budget.set(budget);
    }

    /// Allocations handed out and not yet released.
    pub fn live_allocations(&self) -> usize {
        self.state.live.get()
    }

    /// Requests refused so far.
    pub fn refused(&self) -> usize {
        self.state.refused.get()
    }
}

impl RawAlloc for FailingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, BufferError> {
        match self.state.budget.get() {
            Some(0) => {
                self.state.refused.set(self.state.refused.get() + 1);
                return Err(BufferError::AllocFailed { layout });
            }
            Some(remaining) => self.state.budget.set(Some(remaining - 1)),
            None => {}
        }

        let ptr = Global.allocate(layout)?;
        self.state.live.set(self.state.live.get() + 1);

        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.state.live.set(self.state.live.get() - 1);
        unsafe { Global.deallocate(ptr, layout) };
    }
}
