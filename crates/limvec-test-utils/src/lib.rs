// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for limvec crates.
//!
//! - [`Tester`]: element type with a live-instance counter and a
//!   configurable construction limit, used as a correctness oracle for
//!   rollback paths.
//! - [`FailingAlloc`]: allocation strategy with a budget, used to make
//!   storage acquisition fail on demand.
//!
//! Counters are thread-local. The test harness runs every test on its own
//! thread, so each test observes its own counts.
//!
//! ## License
//!
//! GPL-3.0-only

mod failing_alloc;
mod tester;

pub use failing_alloc::FailingAlloc;
pub use tester::{ConstructionRefused, Tester};
