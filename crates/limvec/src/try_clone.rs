// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::convert::Infallible;

/// Fallible element copy.
///
/// Every operation of `LimitedVec` that copies elements goes through this
/// trait. All `Clone` types implement it with `Error = Infallible`; types
/// whose copies can fail (bounded pools, instrumented test types, handles
/// that must be re-acquired) implement it directly.
///
/// # Example
///
/// ```rust
/// use limvec::TryClone;
///
/// #[derive(Debug)]
/// struct Ticket(u32);
///
/// impl TryClone for Ticket {
///     type Error = &'static str;
///
///     fn try_clone(&self) -> Result<Self, Self::Error> {
///         if self.0 == 0 {
///             return Err("ticket 0 is unique");
///         }
///         Ok(Ticket(self.0))
///     }
/// }
///
/// assert!(Ticket(1).try_clone().is_ok());
/// assert!(Ticket(0).try_clone().is_err());
/// ```
pub trait TryClone: Sized {
    /// Reason a copy failed.
    type Error: core::fmt::Debug + Send + Sync + 'static;

    /// Returns a copy of `self`.
    fn try_clone(&self) -> Result<Self, Self::Error>;

    /// Overwrites `self` with a copy of `source`.
    ///
    /// The default builds a fresh copy and assigns it. On failure `self` is
    /// left untouched.
    fn try_clone_from(&mut self, source: &Self) -> Result<(), Self::Error> {
        *self = source.try_clone()?;
        Ok(())
    }
}

impl<T: Clone> TryClone for T {
    type Error = Infallible;

    #[inline(always)]
    fn try_clone(&self) -> Result<Self, Self::Error> {
        Ok(self.clone())
    }

    #[inline(always)]
    fn try_clone_from(&mut self, source: &Self) -> Result<(), Self::Error> {
        self.clone_from(source);
        Ok(())
    }
}
