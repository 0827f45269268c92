//! Tests for the carrier set abstraction.
//!
//! Membership must be total, pure, and stable; combinators must be
//! value-returning and leave their operands untouched.

use magmars::carrier::Carrier;
use rstest::rstest;

// =============================================================================
// Membership
// =============================================================================

#[rstest]
fn universal_carrier_accepts_every_value() {
    let integers = Carrier::<i64>::universal();
    assert!(integers.contains(&0));
    assert!(integers.contains(&i64::MIN));
    assert!(integers.contains(&i64::MAX));
}

#[rstest]
#[case(0, true)]
#[case(4, true)]
#[case(-2, true)]
#[case(1, false)]
#[case(-7, false)]
fn even_predicate_classifies(#[case] element: i32, #[case] member: bool) {
    let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
    assert_eq!(evens.contains(&element), member);
}

#[rstest]
fn membership_is_pure() {
    let positives = Carrier::predicate(|x: &i32| *x > 0);
    let first = positives.contains(&5);
    let second = positives.contains(&5);
    assert_eq!(first, second);
    // The carrier is unchanged by querying; a negative still fails.
    assert!(!positives.contains(&-5));
}

#[rstest]
fn carriers_work_over_non_numeric_elements() {
    let short_words = Carrier::predicate(|word: &String| word.len() <= 3);
    assert!(short_words.contains(&"abc".to_string()));
    assert!(!short_words.contains(&"abcd".to_string()));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn union_with_universal_is_universal() {
    let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
    let all = evens.union(&Carrier::universal());
    assert!(all.contains(&1));
    assert!(all.contains(&2));
}

#[rstest]
fn union_of_residue_classes() {
    let twos = Carrier::predicate(|x: &i32| x % 2 == *x);
    let threes = Carrier::predicate(|x: &i32| x % 3 == *x);
    let merged = twos.union(&threes);
    assert!(merged.contains(&0));
    assert!(merged.contains(&1));
    assert!(merged.contains(&2));
    assert!(!merged.contains(&3));
}

#[rstest]
fn intersection_narrows_membership() {
    let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
    let small = Carrier::predicate(|x: &i32| x.abs() < 10);
    let small_evens = evens.intersection(&small);
    assert!(small_evens.contains(&4));
    assert!(!small_evens.contains(&14));
    assert!(!small_evens.contains(&3));
}

#[rstest]
fn inserting_and_without_compose() {
    let base = Carrier::predicate(|x: &i32| x % 2 == 0);
    let adjusted = base.inserting(7).without(2);
    assert!(adjusted.contains(&7));
    assert!(!adjusted.contains(&2));
    assert!(adjusted.contains(&4));
}

#[rstest]
fn combinators_do_not_mutate_operands() {
    let evens = Carrier::predicate(|x: &i32| x % 2 == 0);
    let _ = evens.inserting(3);
    let _ = evens.without(2);
    let _ = evens.union(&Carrier::singleton(5));
    assert!(!evens.contains(&3));
    assert!(evens.contains(&2));
    assert!(!evens.contains(&5));
}
