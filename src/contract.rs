//! Accessor precondition checks.
//!
//! Reading the held value of an empty container is a logic error. Safe
//! accessors route through [`expect_full`], which always checks; the
//! `unsafe` unchecked accessors use [`debug_expect_full`], which only checks
//! in debug builds.

/// Terminates with a contract violation for `operation`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn empty_access(operation: &str) -> ! {
    panic!("contract violation: `OptionalValue::{operation}` called on an empty container")
}

/// Checks that the container is full before `operation` proceeds.
#[inline(always)]
#[track_caller]
pub(crate) fn expect_full(has_value: bool, operation: &str) {
    if !has_value {
        empty_access(operation);
    }
}

/// Debug-only form of [`expect_full`].
#[inline(always)]
#[track_caller]
pub(crate) fn debug_expect_full(has_value: bool, operation: &str) {
    debug_assert!(
        has_value,
        "contract violation: `OptionalValue::{operation}` called on an empty container"
    );
}
