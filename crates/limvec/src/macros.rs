// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`LimitedVec`](crate::LimitedVec) from a list of elements.
///
/// The capacity is exactly the number of elements; there is no spare room.
///
/// # Example
///
/// ```rust
/// use limvec::limited_vec;
///
/// let mut vec = limited_vec![1, 2, 3];
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 3);
/// assert!(vec.push(4).is_err());
/// ```
#[macro_export]
macro_rules! limited_vec {
    () => {
        $crate::LimitedVec::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::LimitedVec::from([$($value),+])
    };
}
