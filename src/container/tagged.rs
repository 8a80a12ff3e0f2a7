//! Single-state tags that convert into a container.
//!
//! A tag names one state without naming the container's other type
//! parameter, so call sites only spell out what they know:
//!
//! ```rust
//! use railway::container::{Failure, Nothing, Optional, Outcome, Success};
//!
//! fn parse_age(text: &str) -> Outcome<u8> {
//!     match text.parse::<u8>() {
//!         Ok(age) => Success(age).into(),
//!         Err(_) => Failure("age must be a number").into(),
//!     }
//! }
//!
//! assert_eq!(parse_age("42").value_or(0), 42);
//! assert!(parse_age("forty").is_failure());
//!
//! let missing: Optional<u8> = Nothing.into();
//! assert!(missing.is_none());
//! ```
//!
//! Conversion is always an explicit `.into()`; a tag never silently
//! becomes a container.

use super::{Either, Optional, Outcome};

/// Tags a success value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Success<T>(pub T);

/// Tags a failure value.
///
/// Converts into any `Outcome<T, F>` whose failure type the tagged value
/// converts into, so `Failure("message")` builds an `Outcome<T, Error>` as well
/// as an `Outcome<T, String>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Failure<F>(pub F);

/// Tags the value side of an [`Either`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Value<V>(pub V);

/// Tags the other side of an [`Either`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Other<O>(pub O);

/// Tags the absent state of an [`Optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nothing;

impl<T, F> From<Success<T>> for Outcome<T, F> {
    #[inline]
    fn from(Success(value): Success<T>) -> Self {
        Self::Success(value)
    }
}

impl<T, F, G> From<Failure<G>> for Outcome<T, F>
where
    G: Into<F>,
{
    #[inline]
    fn from(Failure(failure): Failure<G>) -> Self {
        Self::Failure(failure.into())
    }
}

impl<V, O> From<Value<V>> for Either<V, O> {
    #[inline]
    fn from(Value(value): Value<V>) -> Self {
        Self::Value(value)
    }
}

impl<V, O> From<Other<O>> for Either<V, O> {
    #[inline]
    fn from(Other(other): Other<O>) -> Self {
        Self::Other(other)
    }
}

impl<T> From<Nothing> for Optional<T> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Self::None
    }
}
