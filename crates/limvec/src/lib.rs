// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity Vec that reports growth instead of reallocating.
//!
//! `LimitedVec<T>` behaves like `Vec<T>` except that its capacity is fixed at
//! construction. Running out of room is an error, never a hidden reallocation.
//! Capacity changes only through explicit, fallible calls.
//!
//! # Core Guarantees
//!
//! - **No implicit growth**: `push()` on a full vector returns a
//!   [`CapacityError`] holding the rejected value, without touching any
//!   element.
//! - **Strong guarantee on batch construction**: filling, copying and
//!   capacity changes either complete or leave every element (and its
//!   address) exactly as before. Partially built copies are destroyed before
//!   the error is returned.
//! - **Fallible copies**: element copies go through [`TryClone`], implemented
//!   for every `Clone` type and directly by types whose copies can fail.
//!
//! # Example
//!
//! ```rust
//! use limvec::{limited_vec, LimitedVec, LimitedVecError};
//!
//! fn example() -> Result<(), LimitedVecError> {
//!     let mut vec = LimitedVec::with_capacity(3);
//!     vec.push(1u8)?;
//!     vec.push(2u8)?;
//!     vec.push(3u8)?;
//!
//!     // Full: push is refused, nothing changes
//!     assert!(vec.push(4u8).is_err());
//!     assert_eq!(vec, [1, 2, 3]);
//!
//!     // Growth is explicit
//!     vec.set_capacity(4)?;
//!     vec.push(4u8)?;
//!
//!     assert_eq!(vec, limited_vec![1u8, 2, 3, 4]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Allocation Strategies
//!
//! Storage comes from a [`RawAlloc`] (re-exported from `limvec-buffer`). The
//! `*_in` constructors take an explicit strategy:
//!
//! ```rust
//! # #[cfg(unix)]
//! # fn example() -> Result<(), limvec::LimitedVecError> {
//! use limvec::{LimitedVec, PageAlloc};
//!
//! let mut vec = LimitedVec::try_with_capacity_in(512, PageAlloc)?;
//! vec.push(42u64)?;
//! # Ok(())
//! # }
//! # #[cfg(unix)]
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject failures for testing error handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! limvec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`LimitedVecBehaviour`] to test error scenarios.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod limited_vec;
mod macros;
mod try_clone;
mod uninit;

#[cfg(test)]
mod tests;

pub use error::{CapacityError, LimitedVecError};
pub use limited_vec::LimitedVec;
pub use try_clone::TryClone;

#[cfg(all(unix, feature = "page_alloc"))]
pub use limvec_buffer::PageAlloc;
pub use limvec_buffer::{BufferError, Global, RawAlloc};

#[cfg(any(test, feature = "test_utils"))]
pub use limited_vec::LimitedVecBehaviour;
