//! Lifecycle trace events, compiled in with the `tracing` feature.

/// Emits a `trace`-level lifecycle event for the held type `$ty`.
///
/// Expands to nothing unless the `tracing` feature is enabled.
macro_rules! lifecycle {
    ($ty:ty, $event:literal) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(
                target: "optval",
                held = ::core::any::type_name::<$ty>(),
                $event
            );
        }
    }};
}

pub(crate) use lifecycle;
