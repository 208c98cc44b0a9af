//! Accessors for the held value.
//!
//! Methods that hand out the held value require the container to be full.
//! The safe ones always check and panic on an empty container; the `unsafe`
//! `*_unchecked` ones only check in debug builds.

use core::ops::{Deref, DerefMut};

use super::OptionalValue;
use crate::contract;
use crate::error::EmptyValueError;
use crate::raw::slot;

impl<T> OptionalValue<T> {
    /// Returns `true` if a value is held.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.has_value
    }

    /// Returns `true` if no value is held.
    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        !self.has_value
    }

    /// Returns a shared reference to the held value.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        contract::expect_full(self.has_value, "value");
        // SAFETY: checked above.
        unsafe { slot::assume_init_ref(&self.value) }
    }

    /// Returns an exclusive reference to the held value.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        contract::expect_full(self.has_value, "value_mut");
        // SAFETY: checked above.
        unsafe { slot::assume_init_mut(&mut self.value) }
    }

    /// Returns a raw pointer to the held value.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn as_ptr(&self) -> *const T {
        contract::expect_full(self.has_value, "as_ptr");
        self.value.as_ptr()
    }

    /// Returns a raw mutable pointer to the held value.
    ///
    /// The pointer is invalidated by any operation that resets or replaces
    /// the held value.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        contract::expect_full(self.has_value, "as_mut_ptr");
        self.value.as_mut_ptr()
    }

    /// Returns a shared reference to the held value without checking.
    ///
    /// # Safety
    /// The container must be full. Debug builds assert this.
    #[inline]
    #[track_caller]
    pub unsafe fn value_unchecked(&self) -> &T {
        contract::debug_expect_full(self.has_value, "value_unchecked");
        // SAFETY: caller guarantees the container is full.
        unsafe { slot::assume_init_ref(&self.value) }
    }

    /// Returns an exclusive reference to the held value without checking.
    ///
    /// # Safety
    /// The container must be full. Debug builds assert this.
    #[inline]
    #[track_caller]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        contract::debug_expect_full(self.has_value, "value_unchecked_mut");
        // SAFETY: caller guarantees the container is full.
        unsafe { slot::assume_init_mut(&mut self.value) }
    }

    /// Returns the held value, if any.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.has_value {
            // SAFETY: `has_value` is true.
            Some(unsafe { slot::assume_init_ref(&self.value) })
        } else {
            None
        }
    }

    /// Returns the held value mutably, if any.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.has_value {
            // SAFETY: `has_value` is true.
            Some(unsafe { slot::assume_init_mut(&mut self.value) })
        } else {
            None
        }
    }

    /// Returns the held value or [`EmptyValueError`].
    ///
    /// # Errors
    /// Fails when the container is empty.
    #[inline]
    pub fn try_value(&self) -> Result<&T, EmptyValueError> {
        self.get().ok_or(EmptyValueError)
    }

    /// Mutable form of [`try_value`](Self::try_value).
    ///
    /// # Errors
    /// Fails when the container is empty.
    #[inline]
    pub fn try_value_mut(&mut self) -> Result<&mut T, EmptyValueError> {
        self.get_mut().ok_or(EmptyValueError)
    }

    /// Consumes the container and returns the held value.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[track_caller]
    pub fn into_value(mut self) -> T {
        match self.take() {
            Some(value) => value,
            None => contract::empty_access("into_value"),
        }
    }

    /// Returns a clone of the held value, or `fallback` when empty.
    ///
    /// ```rust
    /// use optval::OptionalValue;
    ///
    /// let full = OptionalValue::from_value(3);
    /// let empty = OptionalValue::<i32>::new();
    /// assert_eq!(full.value_or(7), 3);
    /// assert_eq!(empty.value_or(7), 7);
    /// ```
    #[inline]
    pub fn value_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => fallback,
        }
    }

    /// Consumes the container, moving out the held value, or `fallback`.
    ///
    /// No clone of the held value is made.
    #[inline]
    pub fn into_value_or(mut self, fallback: T) -> T {
        self.take().unwrap_or(fallback)
    }

    /// Returns a clone of the held value, or the result of `fallback`.
    #[inline]
    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => fallback(),
        }
    }

    /// Consuming form of [`value_or_else`](Self::value_or_else).
    #[inline]
    pub fn into_value_or_else<F>(mut self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.take().unwrap_or_else(fallback)
    }
}

/// Pointer-like access; panics on an empty container.
///
/// Inherent methods of `OptionalValue` take precedence over methods of `T`
/// with the same name. `as_ptr`, `as_mut_ptr`, `get`, `get_mut`, `take`,
/// `set` and `replace` always act on the container: on an
/// `OptionalValue<Vec<u8>>`, `as_ptr()` yields `*const Vec<u8>`, not the
/// buffer pointer. Reach `T`'s method through `value()` or `(*container)`,
/// e.g. `container.value().as_ptr()`.
impl<T> Deref for OptionalValue<T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T> DerefMut for OptionalValue<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}
