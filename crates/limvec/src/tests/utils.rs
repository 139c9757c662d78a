// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for limvec unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::try_clone::TryClone;

/// Shared counters for [`Flaky`] instances.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Remaining copies before `try_clone` starts failing. `None`: unlimited.
    pub copies_left: Cell<Option<usize>>,
    pub constructed: Cell<usize>,
    pub dropped: Cell<usize>,
}

impl Ledger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn live(&self) -> usize {
        self.constructed.get() - self.dropped.get()
    }

    pub fn allow_copies(&self, copies: usize) {
        self.copies_left.set(Some(copies));
    }
}

/// Element whose copies fail once its ledger runs out of copies.
#[derive(Debug)]
pub struct Flaky {
    pub id: u32,
    ledger: Rc<Ledger>,
}

impl Flaky {
    pub fn new(id: u32, ledger: &Rc<Ledger>) -> Self {
        ledger.constructed.set(ledger.constructed.get() + 1);
        Self {
            id,
            ledger: Rc::clone(ledger),
        }
    }
}

impl TryClone for Flaky {
    type Error = &'static str;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        match self.ledger.copies_left.get() {
            Some(0) => return Err("out of copies"),
            Some(n) => self.ledger.copies_left.set(Some(n - 1)),
            None => {}
        }

        Ok(Flaky::new(self.id, &self.ledger))
    }
}

impl PartialEq for Flaky {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Flaky {
    fn drop(&mut self) {
        self.ledger.dropped.set(self.ledger.dropped.get() + 1);
    }
}
