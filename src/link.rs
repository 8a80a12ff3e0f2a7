//! Free constructor functions.
//!
//! Importing `railway::link::*` gives short, prefix-free names for building
//! containers inside a chain, which keeps closures readable:
//!
//! ```rust
//! use railway::container::Outcome;
//! use railway::link::{failure, success};
//!
//! fn non_empty(text: &str) -> Outcome<&str, String> {
//!     if text.is_empty() { failure("empty".to_string()).into() } else { success(text).into() }
//! }
//!
//! assert_eq!(non_empty("a"), Outcome::Success("a"));
//! ```
//!
//! `success`, `failure`, `value` and `other` return tags, so the container's
//! other type parameter is inferred from the `.into()` target.

use crate::container::{Failure, Optional, Other, Outcome, Success, Value};

/// Wraps a present value.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// The absent value.
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

/// Lifts a standard `Option` into an [`Optional`].
///
/// # Examples
///
/// ```rust
/// use railway::container::Optional;
/// use railway::link::maybe;
///
/// let env: Option<&str> = None;
/// assert_eq!(maybe(env), Optional::None);
/// ```
#[inline]
pub fn maybe<T>(value: Option<T>) -> Optional<T> {
    Optional::maybe(value)
}

/// Tags a success value.
#[inline]
pub const fn success<T>(value: T) -> Success<T> {
    Success(value)
}

/// Tags a failure value.
#[inline]
pub const fn failure<F>(failure: F) -> Failure<F> {
    Failure(failure)
}

/// Tags the value side of an `Either`.
#[inline]
pub const fn value<V>(value: V) -> Value<V> {
    Value(value)
}

/// Tags the other side of an `Either`.
#[inline]
pub const fn other<O>(other: O) -> Other<O> {
    Other(other)
}

/// A success with nothing to return.
#[inline]
pub const fn done<F>() -> Outcome<(), F> {
    Outcome::Success(())
}

/// Returns its argument.
///
/// Handy as the "keep it" branch of `fold`.
///
/// ```rust
/// use railway::container::Outcome;
/// use railway::link::identity;
///
/// let outcome: Outcome<String, String> = Outcome::Failure("offline".to_string());
/// assert_eq!(outcome.fold(identity, identity), "offline");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Either;
    use crate::Error;
    use rstest::rstest;

    #[rstest]
    fn test_tags_convert_into_containers() {
        let succeeded: Outcome<i32> = success(1).into();
        let failed: Outcome<i32> = failure("bad").into();
        let either: Either<i32, &str> = other("side").into();

        assert_eq!(succeeded, Outcome::Success(1));
        assert_eq!(failed, Outcome::Failure(Error::new("bad")));
        assert_eq!(either, Either::Other("side"));
        assert_eq!(Either::<i32, &str>::from(value(2)), Either::Value(2));
    }

    #[rstest]
    fn test_optional_constructors() {
        assert_eq!(some(3), Optional::Some(3));
        assert_eq!(none::<i32>(), Optional::None);
        assert_eq!(maybe(Some(4)), Optional::Some(4));
    }

    #[rstest]
    fn test_done_is_success() {
        assert!(done::<Error>().is_success());
    }
}
