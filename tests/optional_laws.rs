//! Property-based tests for the Optional<T> laws.
//!
//! - **Functor identity / composition** for `map`
//! - **Monad left identity / right identity / associativity** for `then`
//! - **Fold totality**: exactly one branch runs
//! - **Alternative**: `None` is the identity of `or`

use proptest::prelude::*;
use railway::container::Optional;
use std::cell::Cell;

fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn halve(n: i32) -> Optional<i32> {
    if n % 2 == 0 { Optional::Some(n / 2) } else { Optional::None }
}

fn positive(n: i32) -> Optional<i32> {
    if n > 0 { Optional::Some(n) } else { Optional::None }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping identity returns the original
    #[test]
    fn prop_optional_identity_law(value in optional_strategy()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_optional_composition_law(value in optional_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: Some(x).then(f) == f(x)
    #[test]
    fn prop_optional_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Optional::Some(x).then(halve), halve(x));
    }

    /// Right Identity: m.then(Some) == m
    #[test]
    fn prop_optional_right_identity(value in optional_strategy()) {
        prop_assert_eq!(value.then(Optional::Some), value);
    }

    /// Associativity: m.then(f).then(g) == m.then(|x| f(x).then(g))
    #[test]
    fn prop_optional_associativity(value in optional_strategy()) {
        let left = value.then(halve).then(positive);
        let right = value.then(|x| halve(x).then(positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Fold, Fallback and Combine
// =============================================================================

proptest! {
    /// Totality: fold runs exactly one of its branches
    #[test]
    fn prop_optional_fold_totality(value in optional_strategy()) {
        let runs = Cell::new(0);
        value.fold(|_| runs.set(runs.get() + 1), || runs.set(runs.get() + 1));
        prop_assert_eq!(runs.get(), 1);
    }

    /// None is the identity of or on both sides
    #[test]
    fn prop_optional_or_identity(value in optional_strategy()) {
        prop_assert_eq!(value.or(Optional::None), value);
        prop_assert_eq!(Optional::None.or(value), value);
    }

    /// and agrees with the standard Option zip
    #[test]
    fn prop_optional_and_matches_zip(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        let combined = Optional::from(left).and(Optional::from(right), i32::wrapping_add);
        let expected = left.zip(right).map(|(a, b)| a.wrapping_add(b));
        prop_assert_eq!(combined.into_option(), expected);
    }

    /// filter agrees with the standard Option filter
    #[test]
    fn prop_optional_filter_matches_option(value in any::<Option<i32>>()) {
        let is_even = |x: &i32| x % 2 == 0;
        prop_assert_eq!(Optional::from(value).filter(is_even).into_option(), value.filter(is_even));
    }
}
