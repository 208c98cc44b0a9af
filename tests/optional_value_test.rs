//! Lifecycle tests for `OptionalValue` using instance-counting held types.

use optval::{EmptyValueError, NoValue, OptionalValue, NONE};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct Counters {
    constructed: Cell<usize>,
    dropped: Cell<usize>,
}

impl Counters {
    fn live(&self) -> usize {
        self.constructed.get() - self.dropped.get()
    }
}

/// Held type that records every construction (including clones) and drop.
struct Tracked {
    value: i32,
    counters: Rc<Counters>,
}

impl Tracked {
    fn new(value: i32, counters: &Rc<Counters>) -> Self {
        counters.constructed.set(counters.constructed.get() + 1);
        Self {
            value,
            counters: Rc::clone(counters),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(self.value, &self.counters)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.dropped.set(self.counters.dropped.get() + 1);
    }
}

#[test]
fn test_copy_then_move_counts_instances() {
    let counters = Rc::new(Counters::default());

    let a = OptionalValue::from_value(Tracked::new(5, &counters));
    let mut b = a.clone();
    assert!(a.has_value() && b.has_value());
    assert_eq!(a.value().value, 5);
    assert_eq!(b.value().value, 5);
    assert_eq!(counters.live(), 2);

    let c = OptionalValue::take_from(&mut b);
    assert!(b.is_none());
    assert_eq!(c.value().value, 5);
    // Moving transfers the instance; nothing is constructed or dropped.
    assert_eq!(counters.live(), 2);
    assert_eq!(counters.constructed.get(), 2);
    assert_eq!(counters.dropped.get(), 0);

    drop((a, b, c));
    assert_eq!(counters.live(), 0);
    assert_eq!(counters.dropped.get(), 2);
}

#[test]
fn test_construct_from_value_reports_full() {
    for v in [-3, 0, 42] {
        let container = OptionalValue::from_value(v);
        assert!(container.has_value());
        assert_eq!(*container.value(), v);
        assert!(container != NONE);
        assert!(NONE != container);
    }
}

#[test]
fn test_empty_equals_marker_in_both_orders() {
    let empty: OptionalValue<String> = OptionalValue::new();
    assert!(empty == NONE);
    assert!(NONE == empty);

    let from_marker: OptionalValue<String> = NoValue.into();
    assert!(from_marker == NONE);

    let defaulted = OptionalValue::<String>::default();
    assert!(!defaulted.has_value());
}

#[test]
fn test_move_from_empty_source_is_noop() {
    let mut source = OptionalValue::<Vec<u8>>::new();
    let target = OptionalValue::take_from(&mut source);
    assert!(target.is_none());
    assert!(source.is_none());
}

#[test]
fn test_move_assign_full_source() {
    let counters = Rc::new(Counters::default());
    let mut target = OptionalValue::from_value(Tracked::new(1, &counters));
    let mut source = OptionalValue::from_value(Tracked::new(2, &counters));

    target.move_from(&mut source);

    assert!(source.is_none());
    assert_eq!(target.value().value, 2);
    // Only the overwritten value was dropped.
    assert_eq!(counters.dropped.get(), 1);
    assert_eq!(counters.live(), 1);
}

#[test]
fn test_copy_assign_from_empty_resets_target() {
    let counters = Rc::new(Counters::default());
    let mut target = OptionalValue::from_value(Tracked::new(1, &counters));
    let source = OptionalValue::<Tracked>::new();

    target.clone_from(&source);

    assert!(target.is_none());
    assert_eq!(counters.live(), 0);
}

#[test]
fn test_copy_assign_from_full_into_empty() {
    let counters = Rc::new(Counters::default());
    let mut target = OptionalValue::<Tracked>::new();
    let source = OptionalValue::from_value(Tracked::new(9, &counters));

    target.clone_from(&source);

    assert_eq!(target.value().value, 9);
    assert_eq!(source.value().value, 9);
    assert_eq!(counters.live(), 2);
}

#[test]
fn test_reset_twice_drops_once() {
    let counters = Rc::new(Counters::default());
    let mut container = OptionalValue::from_value(Tracked::new(3, &counters));

    container.reset();
    container.reset();

    assert!(container.is_none());
    assert_eq!(counters.dropped.get(), 1);
    drop(container);
    assert_eq!(counters.dropped.get(), 1);
}

#[test]
fn test_emplace_on_full_swaps_exactly_one_instance() {
    let counters = Rc::new(Counters::default());
    let mut container = OptionalValue::from_value(Tracked::new(1, &counters));

    container.emplace_with(|| Tracked::new(2, &counters));

    assert_eq!(counters.constructed.get(), 2);
    assert_eq!(counters.dropped.get(), 1);
    assert_eq!(container.value().value, 2);
}

#[test]
fn test_emplace_on_empty_constructs_once() {
    let counters = Rc::new(Counters::default());
    let mut container = OptionalValue::<Tracked>::new();

    container.emplace(Tracked::new(4, &counters));

    assert_eq!(counters.constructed.get(), 1);
    assert_eq!(counters.dropped.get(), 0);
    assert_eq!(container.value().value, 4);
}

#[test]
fn test_value_or_read_and_consuming_forms() {
    let full = OptionalValue::from_value(String::from("held"));
    let empty = OptionalValue::<String>::new();

    assert_eq!(full.value_or(String::from("fallback")), "held");
    assert_eq!(empty.value_or(String::from("fallback")), "fallback");
    assert_eq!(empty.value_or_else(|| String::from("lazy")), "lazy");
    assert!(full.has_value());

    assert_eq!(full.into_value_or(String::from("fallback")), "held");
    assert_eq!(empty.into_value_or(String::from("fallback")), "fallback");
}

#[test]
fn test_into_value_or_moves_without_clone() {
    let counters = Rc::new(Counters::default());
    let container = OptionalValue::from_value(Tracked::new(8, &counters));

    let value = container.into_value_or(Tracked::new(0, &counters));
    assert_eq!(value.value, 8);
    // The fallback was built and dropped; the held value was never cloned.
    assert_eq!(counters.constructed.get(), 2);
    assert_eq!(counters.live(), 1);
}

#[test]
fn test_pointer_like_access() {
    let mut container = OptionalValue::from_value(vec![1, 2, 3]);

    assert_eq!(container.len(), 3);
    container.push(4);
    assert_eq!(*container, vec![1, 2, 3, 4]);

    let ptr = container.as_ptr();
    // SAFETY: the container is full and not mutated while `ptr` is read.
    assert_eq!(unsafe { (*ptr).len() }, 4);

    let ptr = container.as_mut_ptr();
    // SAFETY: exclusive access through `container` for the duration.
    unsafe { (*ptr).clear() };
    assert!(container.value().is_empty());
}

#[test]
fn test_inherent_methods_shadow_held_type() {
    let mut container = OptionalValue::from_value(vec![7u8, 8]);

    // `as_ptr` addresses the held `Vec`, not its buffer.
    let held: *const Vec<u8> = container.as_ptr();
    assert!(std::ptr::eq(held, container.value()));
    let buffer: *const u8 = container.value().as_ptr();
    assert_eq!(unsafe { *buffer }, 7);

    // `get` is the container's accessor; the slice `get` needs a deref.
    assert_eq!(container.get().map(Vec::len), Some(2));
    assert_eq!((*container).get(1), Some(&8));

    // `take` empties the container rather than acting on the `Vec`.
    assert_eq!(container.take(), Some(vec![7, 8]));
    assert!(container == NONE);
}

#[test]
fn test_fallible_accessors() {
    let mut container = OptionalValue::<u16>::new();
    assert_eq!(container.try_value(), Err(EmptyValueError));
    assert_eq!(container.get(), None);
    assert_eq!(EmptyValueError.to_string(), "optional value is empty");

    container.set(2);
    *container.try_value_mut().unwrap() *= 10;
    assert_eq!(container.try_value(), Ok(&20));
    assert_eq!(unsafe { *container.value_unchecked() }, 20);
}

#[test]
fn test_option_round_trip() {
    let container: OptionalValue<u8> = Some(7).into();
    let back: Option<u8> = container.into();
    assert_eq!(back, Some(7));

    let empty: OptionalValue<u8> = None.into();
    assert_eq!(empty.into_option(), None);

    let borrowed = String::from("copy");
    let copied = OptionalValue::from_ref(Some(&borrowed));
    assert_eq!(copied.value(), &borrowed);
}

#[test]
fn test_explicit_comparison_of_unwrapped_values() {
    let a = OptionalValue::from_value(3);
    let b = OptionalValue::from_value(3);
    let c = OptionalValue::<i32>::new();

    assert_eq!(a.get(), b.get());
    assert_ne!(a.get(), c.get());
    assert_eq!(*a, *b);
}
