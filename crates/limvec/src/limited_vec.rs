// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::hash::{Hash, Hasher};
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr;

use limvec_buffer::{BufferError, Global, RawAlloc, RawBuffer};

use crate::error::{CapacityError, LimitedVecError};
use crate::try_clone::TryClone;
use crate::uninit;

/// Test behaviour for injecting failures in `LimitedVec` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LimitedVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// `push()`, `push_clone()` and `try_extend_from_slice()` fail as if
    /// the vector were full, regardless of spare capacity.
    FailAtPush,
}

/// Fixed-capacity vector that never reallocates on its own.
///
/// Capacity is set at construction and only changes through
/// [`set_capacity`](Self::set_capacity),
/// [`set_capacity_cloned`](Self::set_capacity_cloned),
/// [`shrink_to_fit`](Self::shrink_to_fit) or the reallocating path of
/// [`assign_from`](Self::assign_from). Growing past it is reported as an
/// error: [`CapacityError`] from `push`, which hands the value back, and
/// [`LimitedVecError::CapacityExceeded`] elsewhere.
///
/// Every operation that builds several elements either builds all of them or
/// leaves the vector exactly as it was.
///
/// # Example
///
/// ```rust
/// use limvec::{LimitedVec, LimitedVecError};
///
/// fn example() -> Result<(), LimitedVecError> {
///     let mut vec = LimitedVec::with_capacity(2);
///     vec.push(1u8)?;
///     vec.push(2u8)?;
///
///     let rejected = vec.push(3u8).unwrap_err();
///     assert_eq!(rejected.capacity(), 2);
///     assert_eq!(rejected.into_inner(), 3);
///     assert_eq!(vec.len(), 2);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct LimitedVec<T, A: RawAlloc = Global> {
    buf: RawBuffer<T, A>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: LimitedVecBehaviour,
}

#[cold]
#[inline(never)]
fn abort_on(error: LimitedVecError) -> ! {
    match error {
        LimitedVecError::Alloc(BufferError::AllocFailed { layout }) => {
            alloc::alloc::handle_alloc_error(layout)
        }
        other => panic!("{other}"),
    }
}

impl<T> LimitedVec<T, Global> {
    /// Creates an empty vector with capacity 0. Does not allocate.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts on allocation failure, like
    /// `Vec::with_capacity`. Use [`try_with_capacity`](Self::try_with_capacity)
    /// to handle both.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limvec::LimitedVec;
    ///
    /// let vec: LimitedVec<u8> = LimitedVec::with_capacity(10);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns [`LimitedVecError::Alloc`] if storage cannot be acquired.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, LimitedVecError> {
        Self::try_with_capacity_in(capacity, Global)
    }

    /// Creates a full vector of `capacity` copies of `value`.
    ///
    /// # Errors
    ///
    /// - [`LimitedVecError::Alloc`] if storage cannot be acquired.
    /// - [`LimitedVecError::Element`] if a copy fails. Every copy made so
    ///   far is destroyed and the storage released before returning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limvec::{LimitedVec, LimitedVecError};
    ///
    /// fn example() -> Result<(), LimitedVecError> {
    ///     let vec = LimitedVec::try_filled(3, &7u32)?;
    ///     assert_eq!(vec, [7, 7, 7]);
    ///     assert_eq!(vec.capacity(), 3);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_filled(capacity: usize, value: &T) -> Result<Self, LimitedVecError>
    where
        T: TryClone,
    {
        Self::try_filled_in(capacity, value, Global)
    }

    /// Creates a vector holding copies of `items`, with capacity exactly
    /// `items.len()`.
    ///
    /// # Errors
    ///
    /// Same as [`try_filled`](Self::try_filled).
    pub fn try_from_slice(items: &[T]) -> Result<Self, LimitedVecError>
    where
        T: TryClone,
    {
        Self::try_from_slice_in(items, Global)
    }
}

impl<T, A: RawAlloc> LimitedVec<T, A> {
    #[inline(always)]
    fn from_buf(buf: RawBuffer<T, A>) -> Self {
        Self {
            buf,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: LimitedVecBehaviour::None,
        }
    }

    /// Creates an empty vector with capacity 0 bound to `alloc`.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuffer::new_in(alloc),
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: LimitedVecBehaviour::None,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements,
    /// allocated from `alloc`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts on allocation failure.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self::try_with_capacity_in(capacity, alloc).unwrap_or_else(|e| abort_on(e))
    }

    /// Fallible form of [`with_capacity_in`](Self::with_capacity_in).
    ///
    /// # Errors
    ///
    /// Returns [`LimitedVecError::Alloc`] if storage cannot be acquired.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, LimitedVecError> {
        let buf = RawBuffer::with_capacity_in(capacity, alloc)?;
        Ok(Self::from_buf(buf))
    }

    /// Allocator-aware form of [`try_filled`](LimitedVec::try_filled).
    pub fn try_filled_in(capacity: usize, value: &T, alloc: A) -> Result<Self, LimitedVecError>
    where
        T: TryClone,
    {
        let mut buf = RawBuffer::with_capacity_in(capacity, alloc)?;

        // On error `buf` is dropped with len 0, releasing the storage
        unsafe {
            uninit::fill(buf.as_mut_ptr(), capacity, value)?;
            buf.set_len(capacity);
        }

        Ok(Self::from_buf(buf))
    }

    /// Allocator-aware form of [`try_from_slice`](LimitedVec::try_from_slice).
    pub fn try_from_slice_in(items: &[T], alloc: A) -> Result<Self, LimitedVecError>
    where
        T: TryClone,
    {
        let mut buf = RawBuffer::with_capacity_in(items.len(), alloc)?;

        unsafe {
            uninit::clone_into(items, buf.as_mut_ptr())?;
            buf.set_len(items.len());
        }

        Ok(Self::from_buf(buf))
    }

    /// Returns an independent copy with the same length and capacity.
    ///
    /// The copy gets its own storage from a clone of this vector's allocator.
    ///
    /// # Errors
    ///
    /// - [`LimitedVecError::Alloc`] if storage cannot be acquired.
    /// - [`LimitedVecError::Element`] if an element copy fails; partial
    ///   copies are destroyed and `self` is untouched.
    pub fn try_clone(&self) -> Result<Self, LimitedVecError>
    where
        T: TryClone,
    {
        let mut buf = RawBuffer::with_capacity_in(self.capacity(), self.buf.allocator().clone())?;

        unsafe {
            uninit::clone_into(self.as_slice(), buf.as_mut_ptr())?;
            buf.set_len(self.len());
        }

        Ok(Self::from_buf(buf))
    }

    /// Moves the contents out, leaving `self` empty with capacity 0.
    ///
    /// Constant time. The returned vector owns the original storage, so
    /// element addresses are preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limvec::limited_vec;
    ///
    /// let mut a = limited_vec![1, 2, 3];
    /// let before = a.as_ptr();
    ///
    /// let b = a.take();
    ///
    /// assert_eq!(b.as_ptr(), before);
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        Self::from_buf(self.buf.take())
    }

    /// Exchanges storage with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` if `len() == capacity()`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.spare_capacity() == 0
    }

    /// Returns how many more elements fit.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.buf.spare_capacity()
    }

    /// Returns the allocation strategy handle.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    #[inline(always)]
    fn ensure_room(&self, additional: usize) -> Result<(), LimitedVecError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, LimitedVecBehaviour::FailAtPush) {
            return Err(LimitedVecError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        if additional > self.remaining_capacity() {
            return Err(LimitedVecError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        Ok(())
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Returns a pointer to the first slot.
    ///
    /// Invalidated by any operation that replaces the storage: the
    /// reallocating path of `assign_from`, `set_capacity*`, `shrink_to_fit`,
    /// `take` and `swap`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`LimitedVecError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limvec::{limited_vec, LimitedVecError};
    ///
    /// let vec = limited_vec![10, 20];
    /// assert_eq!(vec.at(1).ok(), Some(&20));
    /// assert!(matches!(vec.at(2), Err(LimitedVecError::OutOfRange { index: 2, len: 2 })));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, LimitedVecError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(LimitedVecError::OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`LimitedVecError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, LimitedVecError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(LimitedVecError::OutOfRange { index, len })
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index < len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "LimitedVec::get_unchecked: index out of range");
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index < len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "LimitedVec::get_unchecked_mut: index out of range");
        unsafe { &mut *self.buf.as_mut_ptr().add(index) }
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the first element mutably, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the last element mutably, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // =========================================================================
    // Modifiers
    // =========================================================================

    /// Appends `value` in the first free slot.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] holding `value` if the vector is full.
    /// The vector and its element addresses are unchanged. The error
    /// converts into [`LimitedVecError::CapacityExceeded`] through `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limvec::limited_vec;
    ///
    /// let mut vec = limited_vec![String::from("a")];
    /// let rejected = vec.push(String::from("b")).unwrap_err();
    ///
    /// assert_eq!(rejected.capacity(), 1);
    /// assert_eq!(rejected.into_inner(), "b");
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.ensure_room(1).is_err() {
            return Err(CapacityError::new(self.capacity(), value));
        }

        let len = self.len();
        unsafe {
            self.buf.as_mut_ptr().add(len).write(value);
            self.buf.set_len(len + 1);
        }

        Ok(())
    }

    /// Appends a copy of `value`.
    ///
    /// The capacity check happens before any copy is attempted. The length
    /// only advances once the copy is in place.
    ///
    /// # Errors
    ///
    /// - [`LimitedVecError::CapacityExceeded`] if the vector is full.
    /// - [`LimitedVecError::Element`] if the copy fails.
    ///
    /// In both cases the vector and its element addresses are unchanged.
    pub fn push_clone(&mut self, value: &T) -> Result<(), LimitedVecError>
    where
        T: TryClone,
    {
        self.ensure_room(1)?;

        let copy = value.try_clone().map_err(LimitedVecError::element)?;

        let len = self.len();
        unsafe {
            self.buf.as_mut_ptr().add(len).write(copy);
            self.buf.set_len(len + 1);
        }

        Ok(())
    }

    /// Appends copies of every element of `items`.
    ///
    /// # Errors
    ///
    /// - [`LimitedVecError::CapacityExceeded`] if `items` does not fit
    ///   entirely; nothing is copied.
    /// - [`LimitedVecError::Element`] if a copy fails; copies made by this
    ///   call are destroyed and the length is unchanged.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), LimitedVecError>
    where
        T: TryClone,
    {
        self.ensure_room(items.len())?;

        let len = self.len();
        unsafe {
            uninit::clone_into(items, self.buf.as_mut_ptr().add(len))?;
            self.buf.set_len(len + items.len());
        }

        Ok(())
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }

        unsafe {
            self.buf.set_len(len - 1);
            Some(self.buf.as_ptr().add(len - 1).read())
        }
    }

    /// Destroys elements from the back until `len() == len`.
    ///
    /// No-op if `len >= self.len()`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            let last = self.len() - 1;

            // Shrink first: a panicking destructor leaks instead of double-dropping
            unsafe {
                self.buf.set_len(last);
                ptr::drop_in_place(self.buf.as_mut_ptr().add(last));
            }
        }
    }

    /// Destroys all elements, back to front. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Reallocates to exactly `capacity` slots, relocating live elements.
    ///
    /// The first `min(len(), capacity)` elements are moved bitwise into the
    /// new storage; the rest are destroyed. Storage is acquired before
    /// anything else happens, so a failure leaves the vector untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LimitedVecError::Alloc`] if storage cannot be acquired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limvec::{limited_vec, LimitedVecError};
    ///
    /// fn example() -> Result<(), LimitedVecError> {
    ///     let mut vec = limited_vec![1, 2, 3, 4];
    ///     vec.set_capacity(6)?;
    ///     vec.push(5)?;
    ///     assert_eq!(vec.capacity(), 6);
    ///
    ///     vec.set_capacity(2)?;
    ///     assert_eq!(vec, [1, 2]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), LimitedVecError> {
        let mut fresh = RawBuffer::with_capacity_in(capacity, self.buf.allocator().clone())?;

        let kept = self.len().min(capacity);
        self.truncate(kept);

        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), kept);
            self.buf.set_len(0);
            fresh.set_len(kept);
        }

        self.buf.swap(&mut fresh);

        Ok(())
    }

    /// Reallocates to exactly `capacity` slots, copying live elements.
    ///
    /// Copies `min(len(), capacity)` elements into fresh storage. Only once
    /// every copy succeeded are the old elements destroyed and the old
    /// storage released; elements beyond `capacity` are dropped silently.
    ///
    /// # Errors
    ///
    /// - [`LimitedVecError::Alloc`] if storage cannot be acquired.
    /// - [`LimitedVecError::Element`] if a copy fails.
    ///
    /// On error the length, capacity and element addresses are unchanged and
    /// every partial copy has been destroyed.
    pub fn set_capacity_cloned(&mut self, capacity: usize) -> Result<(), LimitedVecError>
    where
        T: TryClone,
    {
        let mut fresh = RawBuffer::with_capacity_in(capacity, self.buf.allocator().clone())?;

        let kept = self.len().min(capacity);
        unsafe {
            uninit::clone_into(&self.as_slice()[..kept], fresh.as_mut_ptr())?;
            fresh.set_len(kept);
        }

        self.clear();
        self.buf.swap(&mut fresh);

        Ok(())
    }

    /// Reallocates so that `capacity() == len()`.
    ///
    /// # Errors
    ///
    /// See [`set_capacity`](Self::set_capacity).
    pub fn shrink_to_fit(&mut self) -> Result<(), LimitedVecError> {
        self.set_capacity(self.len())
    }

    /// Makes `self` a copy of `source`.
    ///
    /// If `source.len()` fits in the current capacity, the storage is reused:
    /// surplus elements are destroyed, the common prefix is overwritten
    /// element by element, and the remainder is copied into spare capacity.
    /// Capacity and `as_ptr()` are unchanged on this path.
    ///
    /// Otherwise a complete copy of `source` is built first and then moved
    /// in. That path adopts `source.capacity()` and invalidates every
    /// pointer into the previous storage.
    ///
    /// # Errors
    ///
    /// - [`LimitedVecError::Alloc`] on the reallocating path, with `self`
    ///   untouched.
    /// - [`LimitedVecError::Element`] if a copy fails. The reallocating path
    ///   leaves `self` untouched. On the in-place path, copies made into spare
    ///   capacity are rolled back; prefix elements already overwritten stay
    ///   overwritten, and the length is `source.len().min(previous len)`.
    pub fn assign_from<B: RawAlloc>(&mut self, source: &LimitedVec<T, B>) -> Result<(), LimitedVecError>
    where
        T: TryClone,
    {
        if self.capacity() < source.len() {
            let mut buf =
                RawBuffer::with_capacity_in(source.capacity(), self.buf.allocator().clone())?;

            unsafe {
                uninit::clone_into(source.as_slice(), buf.as_mut_ptr())?;
                buf.set_len(source.len());
            }

            self.clear();
            self.buf.swap(&mut buf);

            return Ok(());
        }

        self.truncate(source.len());

        let prefix = self.len();
        for (dst, src) in self.as_mut_slice().iter_mut().zip(source.as_slice()) {
            dst.try_clone_from(src).map_err(LimitedVecError::element)?;
        }

        unsafe {
            uninit::clone_into(&source.as_slice()[prefix..], self.buf.as_mut_ptr().add(prefix))?;
            self.buf.set_len(source.len());
        }

        Ok(())
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    ///
    /// # Example
    ///
    /// ```rust
    /// // test_utils feature required in dev-dependencies
    /// #[cfg(test)]
    /// mod tests {
    ///     use limvec::{LimitedVec, LimitedVecBehaviour};
    ///
    ///     #[test]
    ///     fn test_error_handling() {
    ///         let mut vec = LimitedVec::with_capacity(10);
    ///         vec.change_behaviour(LimitedVecBehaviour::FailAtPush);
    ///
    ///         // Next push will fail
    ///         assert!(vec.push(1u8).is_err());
    ///     }
    /// }
    /// ```
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: LimitedVecBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T, A: RawAlloc> Drop for LimitedVec<T, A> {
    fn drop(&mut self) {
        // RawBuffer releases the storage afterwards
        self.clear();
    }
}

impl<T, A: RawAlloc + Default> Default for LimitedVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: RawAlloc> Clone for LimitedVec<T, A> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| abort_on(e))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_from(source) {
            abort_on(e);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LimitedVec<T, Global> {
    /// Moves the array in; capacity is exactly `N`.
    fn from(array: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        let array = ManuallyDrop::new(array);

        unsafe {
            ptr::copy_nonoverlapping(array.as_ptr(), vec.buf.as_mut_ptr(), N);
            vec.buf.set_len(N);
        }

        vec
    }
}

impl<T, A: RawAlloc> Deref for LimitedVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> DerefMut for LimitedVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for LimitedVec<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> AsMut<[T]> for LimitedVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a LimitedVec<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut LimitedVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, A, B> PartialEq<LimitedVec<T, B>> for LimitedVec<T, A>
where
    T: PartialEq,
    A: RawAlloc,
    B: RawAlloc,
{
    /// Equal iff the lengths match and elements compare equal in index
    /// order. Capacity is ignored.
    fn eq(&self, other: &LimitedVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: RawAlloc> Eq for LimitedVec<T, A> {}

impl<T: PartialEq, A: RawAlloc> PartialEq<[T]> for LimitedVec<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A: RawAlloc, const N: usize> PartialEq<[T; N]> for LimitedVec<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash, A: RawAlloc> Hash for LimitedVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: core::fmt::Debug, A: RawAlloc> core::fmt::Debug for LimitedVec<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LimitedVec")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
