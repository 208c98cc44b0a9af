//! Comparisons against the [`NoValue`] marker.
//!
//! Only `container == NONE` / `NONE == container` (and `!=`) exist. Two
//! containers cannot be compared with each other: whether "empty vs empty"
//! or "empty vs full" is equal or ordered depends on the call site, so the
//! call site has to spell it out.
//!
//! ```compile_fail
//! use optval::OptionalValue;
//!
//! let a = OptionalValue::from_value(1);
//! let b = OptionalValue::from_value(1);
//! let _ = a == b;
//! ```
//!
//! ```compile_fail
//! use optval::OptionalValue;
//!
//! let a = OptionalValue::from_value(1);
//! let b = OptionalValue::<i32>::new();
//! let _ = a != b;
//! ```
//!
//! ```compile_fail
//! use optval::OptionalValue;
//!
//! let a = OptionalValue::from_value(1);
//! let b = OptionalValue::from_value(2);
//! let _ = a < b;
//! ```
//!
//! ```compile_fail
//! use optval::OptionalValue;
//!
//! let a = OptionalValue::from_value(1);
//! let b = OptionalValue::from_value(2);
//! let _ = a <= b;
//! ```
//!
//! ```compile_fail
//! use optval::OptionalValue;
//!
//! let a = OptionalValue::from_value(1);
//! let b = OptionalValue::from_value(2);
//! let _ = a > b;
//! ```
//!
//! ```compile_fail
//! use optval::OptionalValue;
//!
//! let a = OptionalValue::from_value(1);
//! let b = OptionalValue::from_value(2);
//! let _ = a >= b;
//! ```
//!
//! The explicit form compiles:
//!
//! ```rust
//! use optval::OptionalValue;
//!
//! let a = OptionalValue::from_value(1);
//! let b = OptionalValue::from_value(1);
//! let same = match (a.get(), b.get()) {
//!     (Some(x), Some(y)) => x == y,
//!     (None, None) => true,
//!     _ => false,
//! };
//! assert!(same);
//! ```

use super::OptionalValue;
use crate::none::NoValue;

impl<T> PartialEq<NoValue> for OptionalValue<T> {
    #[inline]
    fn eq(&self, _other: &NoValue) -> bool {
        self.is_none()
    }
}

impl<T> PartialEq<OptionalValue<T>> for NoValue {
    #[inline]
    fn eq(&self, other: &OptionalValue<T>) -> bool {
        other.is_none()
    }
}
