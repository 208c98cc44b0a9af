//! `OptionalValue` — zero or one `T`, stored inline, no sentinel.
//!
//! ## Lifecycle
//! The container has two states, *empty* and *full*:
//! - empty → full: [`set`](OptionalValue::set), [`emplace`](OptionalValue::emplace),
//!   construction from a value;
//! - full → full: assignment or emplace; the old value is dropped exactly once;
//! - full → empty: [`reset`](OptionalValue::reset), [`take`](OptionalValue::take),
//!   being the source of [`take_from`](OptionalValue::take_from) /
//!   [`move_from`](OptionalValue::move_from), or drop;
//! - empty → empty: `reset` and being the source of a move are no-ops.
//!
//! ## Panic safety
//! The discriminator is cleared before a destructor runs and set only after a
//! constructor returned. Two orderings follow from that rule:
//! - *assignment* (`set`, `set_cloned`, `clone_from`, `move_from`) builds the
//!   new value first; if cloning panics the old value is untouched;
//! - *emplace* drops the old value first; if the constructor closure panics
//!   (or returns `Err`), the container is left empty.

mod access;
mod cmp;
mod convert;

use core::mem::MaybeUninit;

use crate::raw::slot;
use crate::trace::lifecycle;

/// A container holding either nothing or exactly one `T`, inline.
///
/// `T` is never default-constructed: a value only exists after an explicit
/// construction request, and it is dropped exactly once.
///
/// Comparisons between two containers are deliberately not provided; compare
/// against [`NONE`](crate::NONE) or unwrap both sides explicitly.
///
/// An empty container needs its held type stated (`OptionalValue::<u32>::new()`
/// or a typed binding): method calls go through `Deref<Target = T>`, so the
/// compiler cannot defer inferring `T` to a later `set`.
///
/// ```rust
/// use optval::{OptionalValue, NONE};
///
/// let mut slot: OptionalValue<String> = OptionalValue::new();
/// assert!(slot == NONE);
///
/// slot.set(String::from("ready"));
/// assert_eq!(slot.value(), "ready");
///
/// slot.reset();
/// assert!(!slot.has_value());
/// ```
pub struct OptionalValue<T> {
    /// Layout note: store `value` first; keep `has_value` in tail padding.
    value: MaybeUninit<T>,
    has_value: bool,
}

impl<T> OptionalValue<T> {
    /// Creates an empty container. `T` need not implement `Default`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            has_value: false,
        }
    }

    /// Creates a full container holding `value`.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            has_value: true,
        }
    }

    /// Move-constructs from `source`, leaving `source` empty.
    ///
    /// If `source` is empty, so is the result.
    ///
    /// ```rust
    /// use optval::OptionalValue;
    ///
    /// let mut a = OptionalValue::from_value(5);
    /// let b = OptionalValue::take_from(&mut a);
    /// assert!(!a.has_value());
    /// assert_eq!(*b.value(), 5);
    /// ```
    pub fn take_from(source: &mut Self) -> Self {
        match source.take() {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }

    /// Assigns `value`, returning a reference to the held value.
    ///
    /// If full, the held value is overwritten through `T`'s own assignment
    /// (the old value is dropped); otherwise `value` is constructed into the
    /// empty slot.
    pub fn set(&mut self, value: T) -> &mut T {
        if self.has_value {
            // SAFETY: `has_value` is true.
            let held = unsafe { slot::assume_init_mut(&mut self.value) };
            *held = value;
            held
        } else {
            self.construct(value)
        }
    }

    /// Assigns a clone of `value`.
    ///
    /// The clone is made before the held value is touched.
    pub fn set_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        let fresh = value.clone();
        self.set(fresh)
    }

    /// Move-assigns from `source`.
    ///
    /// An empty `source` resets `self`. A full `source` is assigned into
    /// `self` like [`set`](Self::set) and is left empty afterwards.
    pub fn move_from(&mut self, source: &mut Self) {
        match source.take() {
            Some(value) => {
                self.set(value);
            }
            None => self.reset(),
        }
    }

    /// Drops any held value, then installs `value`.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Drops any held value, then constructs a new one from `init`.
    ///
    /// If `init` panics, the container is left empty.
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        lifecycle!(T, "emplace");
        self.construct(init())
    }

    /// Fallible form of [`emplace_with`](Self::emplace_with).
    ///
    /// The old value is dropped before `init` runs.
    ///
    /// # Errors
    /// Returns the error produced by `init`; the container is then empty.
    pub fn try_emplace_with<E, F>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        lifecycle!(T, "emplace");
        let value = init()?;
        Ok(self.construct(value))
    }

    /// Drops the held value, if any. Idempotent.
    pub fn reset(&mut self) {
        if self.has_value {
            self.has_value = false;
            lifecycle!(T, "reset");
            // SAFETY: the slot was live; the flag is already cleared so an
            // unwinding destructor cannot cause a second drop.
            unsafe { slot::destroy(&mut self.value) }
        }
    }

    /// Moves the held value out, leaving the container empty.
    pub fn take(&mut self) -> Option<T> {
        if !self.has_value {
            return None;
        }
        self.has_value = false;
        lifecycle!(T, "take");
        // SAFETY: the slot was live and is now logically vacated.
        Some(unsafe { slot::move_out(&mut self.value) })
    }

    /// Installs `value` and returns the previously held value.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take();
        self.construct(value);
        old
    }

    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.has_value, "constructing over a live value");
        lifecycle!(T, "construct");
        // SAFETY: the slot is empty, nothing is overwritten.
        let held = unsafe { slot::construct(&mut self.value, value) };
        self.has_value = true;
        held
    }
}

impl<T> Drop for OptionalValue<T> {
    fn drop(&mut self) {
        self.reset();
    }
}
