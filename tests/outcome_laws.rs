//! Property-based tests for the Outcome<T, F> laws.
//!
//! - **Functor identity / composition** for `map` and `map_failure`
//! - **Monad left identity / right identity / associativity** for `then`
//! - **Failure forwarding**: every operator on the success side leaves a
//!   failure untouched
//! - **Left failure wins** in `and`

use proptest::prelude::*;
use railway::container::Outcome;

type Checked = Outcome<i32, String>;

fn outcome_strategy() -> impl Strategy<Value = Checked> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Checked::from)
}

fn non_negative(n: i32) -> Checked {
    if n >= 0 { Outcome::Success(n) } else { Outcome::Failure(format!("{n} is negative")) }
}

fn small(n: i32) -> Checked {
    if n < 1000 { Outcome::Success(n) } else { Outcome::Failure(format!("{n} is too large")) }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law for map
    #[test]
    fn prop_outcome_identity_law(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    /// Composition Law for map
    #[test]
    fn prop_outcome_composition_law(value in outcome_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for map_failure
    #[test]
    fn prop_outcome_failure_identity_law(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().map_failure(|f| f), value);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: Success(x).then(f) == f(x)
    #[test]
    fn prop_outcome_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Checked::Success(x).then(non_negative), non_negative(x));
    }

    /// Right Identity: m.then(Success) == m
    #[test]
    fn prop_outcome_right_identity(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().then(Outcome::Success), value);
    }

    /// Associativity: m.then(f).then(g) == m.then(|x| f(x).then(g))
    #[test]
    fn prop_outcome_associativity(value in outcome_strategy()) {
        let left = value.clone().then(non_negative).then(small);
        let right = value.then(|x| non_negative(x).then(small));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Failure Forwarding and Combine
// =============================================================================

proptest! {
    /// A failure passes through every success-side operator unchanged
    #[test]
    fn prop_outcome_failure_is_forwarded(failure in any::<String>()) {
        let outcome = Checked::Failure(failure.clone());
        let chained = outcome
            .map(|x| x + 1)
            .then(non_negative)
            .tap(|_| panic!("tap must not run on failure"))
            .filter(|_| true, "unused".to_string())
            .and_value(1, |a, b| a + b);
        prop_assert_eq!(chained, Outcome::Failure(failure));
    }

    /// and: the receiver's failure wins, otherwise the argument's
    #[test]
    fn prop_outcome_and_left_failure_wins(left in outcome_strategy(), right in outcome_strategy()) {
        let combined = left.clone().and(right.clone(), i32::wrapping_add);
        let expected = match (left, right) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(a.wrapping_add(b)),
            (Outcome::Failure(f), _) | (Outcome::Success(_), Outcome::Failure(f)) => Outcome::Failure(f),
        };
        prop_assert_eq!(combined, expected);
    }

    /// Conversions to and from Result agree
    #[test]
    fn prop_outcome_result_roundtrip(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(Outcome::from(value.clone()).into_result(), value);
    }
}
