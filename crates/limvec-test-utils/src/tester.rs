// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;

use limvec::TryClone;
use thiserror::Error;

const ALIVE: u64 = 0x5EA1_ED0B_1EC7_A11E;
const DEAD: u64 = 0xDEAD_DEAD_DEAD_DEAD;

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
    static LIMIT: Cell<usize> = const { Cell::new(usize::MAX) };
}

/// A `Tester` construction was refused because the live count hit the limit.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("construction refused: {live} live instances reached the limit of {limit}")]
pub struct ConstructionRefused {
    /// Live instances at the time of the attempt.
    pub live: usize,
    /// Configured limit.
    pub limit: usize,
}

/// Instrumented element type.
///
/// Every successful construction (including copies) increments a
/// thread-local live counter and every drop decrements it. Construction is
/// refused once the live count reaches the configured limit, which lets a
/// test make the k-th copy of a batch fail.
///
/// Drop asserts that the instance was really constructed and not already
/// dropped.
///
/// # Example
///
/// ```rust
/// use limvec::TryClone;
/// use limvec_test_utils::Tester;
///
/// let a = Tester::new(1);
/// assert_eq!(Tester::live(), 1);
///
/// Tester::set_limit(1);
/// assert!(a.try_clone().is_err());
/// assert_eq!(Tester::live(), 1);
///
/// Tester::reset_limit();
/// let b = a.try_clone().expect("Failed to try_clone()");
/// assert_eq!(Tester::live(), 2);
/// # drop(b);
/// ```
#[derive(Debug)]
pub struct Tester {
    value: u32,
    canary: u64,
}

impl Tester {
    /// Constructs a tester unless the live count has reached the limit.
    pub fn try_new(value: u32) -> Result<Self, ConstructionRefused> {
        let live = Self::live();
        let limit = Self::limit();

        if live >= limit {
            return Err(ConstructionRefused { live, limit });
        }

        LIVE.with(|c| c.set(live + 1));

        Ok(Self {
            value,
            canary: ALIVE,
        })
    }

    /// Constructs a tester.
    ///
    /// # Panics
    ///
    /// Panics if the live count has reached the limit.
    #[track_caller]
    pub fn new(value: u32) -> Self {
        Self::try_new(value).unwrap_or_else(|e| panic!("Tester::new: {e}"))
    }

    /// Returns the payload.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of testers constructed and not yet dropped on this thread.
    pub fn live() -> usize {
        LIVE.with(Cell::get)
    }

    /// Current construction limit on this thread.
    pub fn limit() -> usize {
        LIMIT.with(Cell::get)
    }

    /// Refuses constructions once `limit` instances are live.
    pub fn set_limit(limit: usize) {
        LIMIT.with(|c| c.set(limit));
    }

    /// Removes the construction limit.
    pub fn reset_limit() {
        Self::set_limit(usize::MAX);
    }
}

impl TryClone for Tester {
    type Error = ConstructionRefused;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        Self::try_new(self.value)
    }

    /// Assignment reuses the existing instance; nothing is constructed.
    fn try_clone_from(&mut self, source: &Self) -> Result<(), Self::Error> {
        assert_eq!(self.canary, ALIVE, "Tester: assignment to a dead instance");
        self.value = source.value;
        Ok(())
    }
}

impl PartialEq for Tester {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tester {}

impl Drop for Tester {
    fn drop(&mut self) {
        assert_eq!(self.canary, ALIVE, "Tester: dropping an instance that is not alive");
        self.canary = DEAD;

        LIVE.with(|c| {
            let live = c.get();
            assert!(live > 0, "Tester: more drops than constructions");
            c.set(live - 1);
        });
    }
}
