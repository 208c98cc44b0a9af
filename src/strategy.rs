//! Proptest strategies for [`OptionalValue`] (feature `proptest`).

use core::fmt::Debug;

use proptest::prelude::*;

use crate::OptionalValue;

/// Generates containers that are full with a value from `inner` or empty,
/// with equal probability.
pub fn optional_value<S>(inner: S) -> impl Strategy<Value = OptionalValue<S::Value>>
where
    S: Strategy,
    S::Value: Debug,
{
    proptest::option::of(inner).prop_map(OptionalValue::from)
}

/// Like [`optional_value`], but full with probability `probability_of_full`.
///
/// `0.0` always yields empty containers and `1.0` always yields full ones.
///
/// # Panics
/// Panics if `probability_of_full` is outside `0.0..=1.0` (or NaN).
pub fn weighted<S>(probability_of_full: f64, inner: S) -> BoxedStrategy<OptionalValue<S::Value>>
where
    S: Strategy + 'static,
    S::Value: Debug,
{
    assert!(
        (0.0..=1.0).contains(&probability_of_full),
        "probability of a full container must be within 0.0..=1.0, got {probability_of_full}"
    );

    if probability_of_full <= 0.0 {
        Just(()).prop_map(|()| OptionalValue::new()).boxed()
    } else if probability_of_full >= 1.0 {
        inner.prop_map(OptionalValue::from_value).boxed()
    } else {
        proptest::option::weighted(probability_of_full, inner)
            .prop_map(OptionalValue::from)
            .boxed()
    }
}

impl<T> Arbitrary for OptionalValue<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        optional_value(any_with::<T>(args)).boxed()
    }
}
