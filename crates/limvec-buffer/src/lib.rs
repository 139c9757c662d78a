// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage owner for fixed-capacity containers.
//!
//! [`RawBuffer<T, A>`] owns exactly one contiguous allocation of `capacity`
//! slots of `T`. It tracks how many leading slots are initialized, but it never
//! constructs or destroys elements itself: that is the job of its owner.
//!
//! # Allocation Strategies
//!
//! Raw memory comes from a [`RawAlloc`] implementation:
//!
//! - [`Global`]: the process global allocator (default).
//! - `PageAlloc` (Unix, `page_alloc` feature): anonymous `mmap` mappings
//!   rounded up to the system page size.
//!
//! # Invariants
//!
//! - `len() <= capacity()` at all times.
//! - An empty buffer (capacity 0) holds no allocation; dropping it is a no-op.
//! - Dropping a buffer releases the allocation only. Slots in `[0, len())`
//!   must have been destroyed by the owner beforehand, otherwise they leak.
//!
//! # Example
//!
//! ```rust
//! use limvec_buffer::{BufferError, RawBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buf = RawBuffer::<u32>::allocate(4)?;
//!     assert_eq!(buf.capacity(), 4);
//!     assert_eq!(buf.len(), 0);
//!
//!     unsafe {
//!         buf.as_mut_ptr().write(7);
//!         buf.set_len(1);
//!     }
//!     assert_eq!(buf.as_slice(), &[7]);
//!
//!     // Moves the allocation out, leaving `buf` empty.
//!     let taken = buf.take();
//!     assert_eq!(buf.capacity(), 0);
//!     assert_eq!(taken.as_slice(), &[7]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(all(unix, feature = "page_alloc"))]
mod page_alloc;

mod error;
mod raw_alloc;
mod raw_buffer;

#[cfg(all(unix, feature = "page_alloc"))]
pub use page_alloc::PageAlloc;

pub use error::BufferError;
pub use raw_alloc::{Global, RawAlloc};
pub use raw_buffer::RawBuffer;
