// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for limvec.

use alloc::boxed::Box;

use limvec_buffer::BufferError;
use thiserror::Error;

/// Error type for `LimitedVec` operations.
#[derive(Debug, Error)]
pub enum LimitedVecError {
    /// Raw storage could not be acquired.
    #[error("allocation error: {0}")]
    Alloc(#[from] BufferError),

    /// Attempted to grow beyond the fixed capacity. Nothing was constructed.
    #[error("capacity exceeded: the vector is limited to {capacity} elements")]
    CapacityExceeded {
        /// The capacity that would have been exceeded.
        capacity: usize,
    },

    /// Checked access past the live range. Nothing was modified.
    #[error("index out of range: the index is {index} but the length is {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length at the time of the request.
        len: usize,
    },

    /// Copying an element failed. Every element built by the failing call
    /// has been destroyed before this error was returned.
    #[error("element construction failed: {0:?}")]
    Element(Box<dyn core::fmt::Debug + Send + Sync + 'static>),
}

/// A `push` was rejected because the vector is full.
///
/// Carries the rejected value back to the caller untouched.
#[derive(Error)]
#[error("capacity exceeded: the vector is limited to {capacity} elements")]
pub struct CapacityError<T> {
    capacity: usize,
    value: T,
}

impl<T> CapacityError<T> {
    pub(crate) fn new(capacity: usize, value: T) -> Self {
        Self { capacity, value }
    }

    /// The capacity that would have been exceeded.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrows the rejected value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the rejected value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> core::fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> From<CapacityError<T>> for LimitedVecError {
    /// Drops the rejected value.
    fn from(err: CapacityError<T>) -> Self {
        Self::CapacityExceeded {
            capacity: err.capacity,
        }
    }
}

impl LimitedVecError {
    /// Creates an `Element` error from any Debug + Send + Sync error.
    pub fn element<E: core::fmt::Debug + Send + Sync + 'static>(e: E) -> Self {
        Self::Element(Box::new(e))
    }
}
