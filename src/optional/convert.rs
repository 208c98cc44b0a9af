//! Conversions, `Clone`, `Default` and `Debug`.

use core::fmt;

use super::OptionalValue;
use crate::none::NoValue;

impl<T> OptionalValue<T> {
    /// Copy-constructs from an optional reference.
    ///
    /// ```rust
    /// use optval::OptionalValue;
    ///
    /// let name = String::from("slot");
    /// assert!(OptionalValue::from_ref(Some(&name)).has_value());
    /// assert!(OptionalValue::<String>::from_ref(None).is_none());
    /// ```
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(value) => Self::from_value(value.clone()),
            None => Self::new(),
        }
    }

    /// Converts into a standard `Option`, moving the held value.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy construction and copy assignment.
impl<T: Clone> Clone for OptionalValue<T> {
    fn clone(&self) -> Self {
        Self::from_ref(self.get())
    }

    fn clone_from(&mut self, source: &Self) {
        match source.get() {
            Some(value) => {
                self.set_cloned(value);
            }
            None => self.reset(),
        }
    }
}

impl<T> From<NoValue> for OptionalValue<T> {
    #[inline]
    fn from(_: NoValue) -> Self {
        Self::new()
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Full").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}
