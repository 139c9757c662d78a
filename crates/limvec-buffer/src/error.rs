// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for limvec-buffer.

use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when acquiring raw storage.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The requested slot count does not fit in a valid `Layout`
    /// (total size would exceed `isize::MAX`).
    #[error("capacity overflow: requested slot count exceeds the addressable size")]
    CapacityOverflow,

    /// The allocator could not satisfy the request.
    #[error("allocation failed for {layout:?}")]
    AllocFailed {
        /// Layout of the rejected request.
        layout: Layout,
    },
}
