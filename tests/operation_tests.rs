//! Tests for property-enforcing operation wrappers.
//!
//! Covers the per-call (eager) checks of each decorator, error payloads,
//! history bookkeeping, and the lazy `holds_over` path.

use std::num::NonZeroUsize;

use magmars::error::PropertyError;
use magmars::operation::{
    Associative, BinaryOperation, Checked, Commutative, History, Operation,
    Property, Unital,
};
use rstest::rstest;

// =============================================================================
// Commutativity
// =============================================================================

#[rstest]
fn commutative_addition_passes() {
    let mut add = Commutative::new(Operation::new(|a: i32, b| a + b));
    assert_eq!(add.apply(2, 3).unwrap(), 5);
    assert_eq!(add.apply(-4, 4).unwrap(), 0);
}

#[rstest]
fn commutativity_error_carries_inputs_and_both_results() {
    // Subtraction wrongly claimed commutative: the value would be 2, but
    // the swapped evaluation disagrees.
    let mut sub = Commutative::new(Operation::new(|a: i32, b| a - b));
    match sub.apply(4, 2).unwrap_err() {
        PropertyError::Commutativity(error) => {
            assert_eq!(error.left, 4);
            assert_eq!(error.right, 2);
            assert_eq!(error.forward, 2);
            assert_eq!(error.reversed, -2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn commutativity_is_checked_on_every_call() {
    let mut sub = Commutative::new(Operation::new(|a: i32, b| a - b));
    assert!(sub.apply(1, 1).is_ok());
    assert!(sub.apply(2, 1).is_err());
    assert!(sub.apply(3, 3).is_ok());
    assert!(sub.apply(5, 1).is_err());
}

// =============================================================================
// Associativity
// =============================================================================

#[rstest]
fn associative_addition_passes_over_many_calls() {
    let mut add = Associative::new(Operation::new(|a: i64, b| a + b));
    for call in 0..50 {
        assert!(add.apply(call, call * 2).is_ok());
    }
}

#[rstest]
fn division_eventually_trips_the_associativity_check() {
    let mut div = Associative::new(Operation::new(|a: f64, b| a / b));
    assert!(div.apply(1.0, 2.0).is_ok());
    assert!(div.apply(4.0, 2.0).is_ok());
    let violation = div.apply(3.0, 6.0).unwrap_err();
    match violation {
        PropertyError::Associativity(error) => {
            assert_eq!((error.first, error.second, error.third), (3.0, 6.0, 4.0));
            assert_ne!(error.left_grouped, error.right_grouped);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// Identity
// =============================================================================

#[rstest]
fn additive_identity_is_zero() {
    let mut add = Unital::new(Operation::new(|a: i32, b| a + b), 0);
    assert_eq!(add.apply(7, 0).unwrap(), 7);
    assert_eq!(add.apply(0, 7).unwrap(), 7);
}

#[rstest]
fn identity_error_carries_element_and_candidate() {
    let mut add = Unital::new(Operation::new(|a: i32, b| a + b), 3);
    match add.apply(2, 3).unwrap_err() {
        PropertyError::Identity(error) => {
            assert_eq!(error.element, 2);
            assert_eq!(error.identity, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn string_concatenation_has_the_empty_identity() {
    let mut concat =
        Unital::new(Operation::new(|a: String, b: String| a + &b), String::new());
    let merged = concat.apply("foo".to_string(), "bar".to_string()).unwrap();
    assert_eq!(merged, "foobar");
}

// =============================================================================
// Layering
// =============================================================================

#[rstest]
fn fully_checked_addition_reports_all_markers() {
    let add = Unital::new(
        Commutative::new(Associative::new(Operation::new(|a: i32, b| a + b))),
        0,
    );
    assert!(add.is(&Property::Associative));
    assert!(add.is(&Property::Commutative));
    assert!(add.is(&Property::WithIdentity(0)));
    assert_eq!(add.properties().len(), 3);
}

#[rstest]
fn layered_chain_applies_like_the_raw_function() {
    let mut add = Unital::new(
        Commutative::new(Associative::new(Operation::new(|a: i32, b| a + b))),
        0,
    );
    assert_eq!(add.apply(2, 3).unwrap(), 5);
}

// =============================================================================
// History
// =============================================================================

#[rstest]
fn history_length_equals_the_number_of_applies() {
    let mut add = Operation::new(|a: i32, b| a + b);
    for call in 0..10 {
        add.apply(call, call + 1).unwrap();
    }
    assert_eq!(add.history().len(), 10);
}

#[rstest]
fn history_entries_match_call_arguments_in_order() {
    let mut add = Operation::new(|a: i32, b| a + b);
    let calls = [(1, 2), (3, 4), (5, 6), (7, 8)];
    for (left, right) in calls {
        add.apply(left, right).unwrap();
    }
    for (index, pair) in calls.iter().enumerate() {
        assert_eq!(add.history().get(index), Some(pair));
    }
}

#[rstest]
fn failed_applies_still_count_toward_history() {
    let mut sub = Commutative::new(Operation::new(|a: i32, b| a - b));
    let _ = sub.apply(1, 1);
    let _ = sub.apply(4, 2);
    let _ = sub.apply(2, 2);
    assert_eq!(sub.history().len(), 3);
    assert_eq!(sub.history().get(1), Some(&(4, 2)));
}

#[rstest]
fn probes_do_not_pollute_history() {
    // Commutative evaluates the swapped pair internally; only the caller's
    // pair may appear in the log.
    let mut add = Commutative::new(Operation::new(|a: i32, b| a + b));
    add.apply(1, 2).unwrap();
    assert_eq!(add.history().len(), 1);
    assert_eq!(add.history().get(0), Some(&(1, 2)));
}

#[rstest]
fn bounded_history_keeps_only_recent_calls() {
    let ring = History::bounded(NonZeroUsize::new(4).unwrap());
    let mut add = Operation::with_history(|a: i32, b| a + b, ring);
    for call in 0..10 {
        add.apply(call, call).unwrap();
    }
    assert_eq!(add.history().len(), 4);
    assert_eq!(add.history().get(0), Some(&(6, 6)));
    assert_eq!(add.history().latest(), Some(&(9, 9)));
}

// =============================================================================
// Lazy validation (holds_over)
// =============================================================================

#[rstest]
fn holds_over_validates_without_recording() {
    let add = Operation::new(|a: i32, b| a + b);
    assert!(add.holds_over(&Property::Commutative, &[-3, 0, 7]));
    assert!(add.holds_over(&Property::Associative, &[-3, 0, 7]));
    assert!(add.holds_over(&Property::WithIdentity(0), &[-3, 0, 7]));
    assert!(add.history().is_empty());
}

#[rstest]
fn holds_over_detects_broken_laws() {
    let sub = Operation::new(|a: i32, b| a - b);
    assert!(!sub.holds_over(&Property::Commutative, &[4, 2]));
    assert!(!sub.holds_over(&Property::Associative, &[1, 2, 3]));
    assert!(!sub.holds_over(&Property::WithIdentity(0), &[5]));
}

#[rstest]
fn holds_over_works_on_wrapped_chains_too() {
    let add = Commutative::new(Operation::new(|a: i32, b| a + b));
    assert!(add.holds_over(&Property::Associative, &[1, 2, 3]));
}

// =============================================================================
// Custom properties
// =============================================================================

#[rstest]
fn named_property_enforced_per_call() {
    let mut max = Checked::new(
        Operation::new(|a: i32, b| a.max(b)),
        "upper-bound",
        |left: &i32, right: &i32, result: &i32| result >= left && result >= right,
    );
    assert_eq!(max.apply(3, 9).unwrap(), 9);
    assert!(max.holds_over(&Property::Other("upper-bound"), &[1, 5, 9]));
}

#[rstest]
fn named_property_violation_uses_the_other_variant() {
    let mut add = Checked::new(
        Operation::new(|a: i32, b| a + b),
        "upper-bound",
        |left: &i32, right: &i32, result: &i32| result >= left && result >= right,
    );
    assert_eq!(
        add.apply(3, -5).unwrap_err(),
        PropertyError::Other { property: "upper-bound", left: 3, right: -5 }
    );
}
