//! # `optval` - Allocation-Free Optional Values
//!
//! A single low-level building block: [`OptionalValue<T>`], a container that
//! holds either nothing or exactly one `T` inline, so that "this value may be
//! missing" is part of a type signature rather than a null pointer, a magic
//! value, or an out-of-band flag.
//!
//! ## Guarantees
//!
//! - **No allocation**: the value lives in `MaybeUninit<T>` storage inside the
//!   container, next to a `bool` discriminator.
//! - **No implicit construction**: `T` is never default-constructed; it exists
//!   only after an explicit `set`/`emplace`/construction request.
//! - **Exactly-once drop**: every constructed value is dropped exactly once,
//!   including on panic paths (see [`optional`] for the ordering rules).
//! - **No ambiguous comparisons**: two containers cannot be compared with
//!   `==` or `<`; only comparisons against [`NONE`] exist.
//!
//! ## Architecture
//!
//! - `raw::slot` is the only place performing unsafe slot operations.
//! - [`optional`] layers the safe lifecycle and accessors on top.
//! - `contract` precondition checks make empty access a loud logic error
//!   instead of a silent garbage read.
//!
//! ## Feature flags
//!
//! - `tracing`: emits `trace`-level lifecycle events (target `optval`).
//! - `proptest`: exports `strategy` for property tests.
//!
//! ## Example
//!
//! ```rust
//! use optval::{OptionalValue, NONE};
//!
//! let mut a = OptionalValue::from_value(5);
//! let b = a.clone();
//! assert_eq!(*a.value(), 5);
//! assert_eq!(*b.value(), 5);
//!
//! let c = OptionalValue::take_from(&mut a);
//! assert!(a == NONE);
//! assert_eq!(c.into_value_or(0), 5);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod contract;
pub mod error;
pub mod none;
pub mod optional;
mod raw;
#[cfg(feature = "proptest")]
pub mod strategy;
mod trace;

pub use error::EmptyValueError;
pub use none::{NoValue, NONE};
pub use optional::OptionalValue;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The marker is a ZST.
    assert!(mem::size_of::<NoValue>() == 0);

    // The discriminator adds at most one alignment unit, and the container
    // never changes the held type's alignment.
    assert!(mem::size_of::<OptionalValue<u64>>() <= mem::size_of::<u64>() * 2);
    assert!(mem::align_of::<OptionalValue<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<OptionalValue<u8>>() == 2);
    assert!(mem::size_of::<OptionalValue<()>>() == 1);

    // No hidden pointer indirection: same footprint as `Option` for
    // types without a niche.
    assert!(mem::size_of::<OptionalValue<u32>>() == mem::size_of::<Option<u32>>());
};
