//! Unsafe, centralized operations on a single `MaybeUninit<T>` slot.
//!
//! ## Core invariant
//! For every `OptionalValue<T>`, the slot holds a live `T` *exactly when* the
//! discriminator is `true`:
//! - the discriminator is set only after a write into the slot completed, and
//! - it is cleared before the slot is read out or dropped in place.
//!
//! Clearing first means an unwind out of `T::drop` observes an empty
//! container, so the value can never be dropped a second time.

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` guarantees exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Constructs `value` into the slot and returns a reference to it.
///
/// The prior contents are overwritten without being dropped.
///
/// # Safety
/// - The slot must not hold a live value (it was never written, or its last
///   value was already read out or dropped); otherwise that value leaks.
#[inline(always)]
pub(crate) unsafe fn construct<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Bitwise-moves the live value out of the slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The caller must treat the slot as uninitialized afterwards; reading or
///   dropping it again would duplicate the value.
#[inline(always)]
pub(crate) unsafe fn move_out<T>(slot: &mut MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and gives up the slot's copy.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Runs the destructor of the live value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same constructed value.
#[inline(always)]
pub(crate) unsafe fn destroy<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
