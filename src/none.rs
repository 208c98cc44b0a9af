//! The type-independent "no value" marker.

/// Marker meaning "no value", independent of any held type.
///
/// Converts into an empty [`OptionalValue`](crate::OptionalValue) of any `T`
/// and compares equal to a container exactly when that container is empty,
/// in either operand order.
///
/// ```rust
/// use optval::{OptionalValue, NONE};
///
/// let empty: OptionalValue<String> = NONE.into();
/// assert!(empty == NONE);
/// assert!(NONE == empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NoValue;

/// The [`NoValue`] marker.
pub const NONE: NoValue = NoValue;
