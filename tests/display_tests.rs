//! Integration tests for Display and Debug implementations.
//!
//! Every container prints its state name followed by the payload.

use railway::Error;
use railway::container::{Either, Optional, Outcome};

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_optional_display() {
    assert_eq!(format!("{}", Optional::Some(42)), "Some(42)");
    assert_eq!(format!("{}", Optional::<i32>::None), "None");
}

#[test]
fn test_outcome_display() {
    let success: Outcome<i32> = Outcome::Success(1);
    let failure: Outcome<i32> = Outcome::fail("bad");
    assert_eq!(format!("{success}"), "Success(1)");
    assert_eq!(format!("{failure}"), "Failure(bad)");
}

#[test]
fn test_either_display() {
    let value: Either<i32, String> = Either::Value(42);
    let other: Either<i32, String> = Either::Other("hello".to_string());
    assert_eq!(format!("{value}"), "Value(42)");
    assert_eq!(format!("{other}"), "Other(hello)");
}

#[test]
fn test_error_display_is_message() {
    let error = Error::with_fault("could not save", std::fmt::Error);
    assert_eq!(format!("{error}"), "could not save");
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_container_debug() {
    assert_eq!(format!("{:?}", Optional::Some("a")), "Some(\"a\")");
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::Failure("x")), "Failure(\"x\")");
    assert_eq!(format!("{:?}", Either::<i32, &str>::Value(1)), "Value(1)");
}

#[test]
fn test_nested_outcome_debug() {
    let outcome: Outcome<i32> = Outcome::fail("oops");
    assert_eq!(format!("{outcome:?}"), "Failure(Error { message: \"oops\" })");
}
