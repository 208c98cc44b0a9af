//! Centralized unsafe operations on the container's storage slot.
//!
//! `OptionalValue` keeps its held value in a `MaybeUninit<T>` next to a
//! discriminator. Every read, write, drop and reference reinterpretation of
//! that slot goes through the small, audited surface in [`slot`].
//!
//! ## Design rule
//! - `optional::*` decides *when* a transition happens (and flips the
//!   discriminator).
//! - `raw::slot` performs the transition and documents what the caller must
//!   guarantee.

pub(crate) mod slot;
