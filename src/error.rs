//! Error types.

/// Returned by fallible accessors when the container holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyValueError;

impl core::fmt::Display for EmptyValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("optional value is empty")
    }
}

impl std::error::Error for EmptyValueError {}
