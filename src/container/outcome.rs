//! Outcome container - a success value or a failure.
//!
//! `Outcome<T, F>` is either `Success(T)` or `Failure(F)`. It carries expected
//! failures as values, so a chain of fallible steps reads top to bottom and
//! stops at the first failure without any step throwing.
//!
//! The failure type defaults to [`Error`]. Two aliases cover the other common
//! shapes:
//!
//! - [`TextOutcome<T>`] fixes the failure to `String`.
//! - [`Completion<F>`] fixes the success to `()` for steps with nothing to return.
//!
//! # Examples
//!
//! ```rust
//! use railway::container::Outcome;
//!
//! fn validate_username(name: &str) -> Outcome<String> {
//!     if name.is_empty() {
//!         Outcome::fail("username is required")
//!     } else {
//!         Outcome::Success(name.to_string())
//!     }
//! }
//!
//! let greeting = validate_username("ada")
//!     .map(|name| format!("welcome, {name}"))
//!     .fold(|text| text, |error| error.to_string());
//! assert_eq!(greeting, "welcome, ada");
//!
//! let rejected = validate_username("")
//!     .map(|name| format!("welcome, {name}"))
//!     .fold(|text| text, |error| error.to_string());
//! assert_eq!(rejected, "username is required");
//! ```

use std::fmt;

use crate::error::Error;

/// A success value or a failure value.
///
/// Every operator consumes the receiver and returns a new container. Failure
/// propagation always forwards the original failure value unchanged.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `F` - The type of the failure value (defaults to [`Error`])
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, F = Error> {
    /// The step succeeded with a value.
    Success(T),
    /// The step failed.
    Failure(F),
}

/// An [`Outcome`] whose failure is plain text.
pub type TextOutcome<T> = Outcome<T, String>;

/// An [`Outcome`] that carries no success value.
pub type Completion<F = Error> = Outcome<(), F>;

impl<T, F> Outcome<T, F> {
    // =========================================================================
    // Inspect
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Decompose
    // =========================================================================

    /// Converts into the success value, discarding a failure.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the failure value, discarding a success.
    #[inline]
    pub fn failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Borrows both slots at once. Exactly one of the two is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Failure("test");
    /// let (value, failure) = outcome.parts();
    /// assert_eq!(value, None);
    /// assert_eq!(failure, Some(&"test"));
    /// ```
    #[inline]
    pub const fn parts(&self) -> (Option<&T>, Option<&F>) {
        (self.success_ref(), self.failure_ref())
    }

    /// Splits into both slots. Exactly one of the two is `Some`.
    #[inline]
    pub fn into_parts(self) -> (Option<T>, Option<F>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(failure) => (None, Some(failure)),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Eliminates the container by running exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Failure("bad");
    /// assert_eq!(outcome.fold(|_| "ok", |failure| failure), "bad");
    /// ```
    #[inline]
    pub fn fold<U, S, R>(self, on_success: S, on_failure: R) -> U
    where
        S: FnOnce(T) -> U,
        R: FnOnce(F) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Returns the success value, or `alternate` on failure.
    #[inline]
    pub fn value_or(self, alternate: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => alternate,
        }
    }

    /// Returns the success value, or the result of `alternate` on failure.
    ///
    /// `alternate` is never called on success.
    #[inline]
    pub fn value_or_with<A>(self, alternate: A) -> T
    where
        A: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => alternate(),
        }
    }

    // =========================================================================
    // Compose Left (then)
    // =========================================================================

    /// Transforms the success value.
    #[inline]
    pub fn map<U, Op>(self, operation: Op) -> Outcome<U, F>
    where
        Op: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(operation(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chains a fallible step. The first failure short-circuits the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// let positive = |x: i32| if x > 0 { Outcome::Success(x) } else { Outcome::Failure("not positive") };
    /// assert_eq!(Outcome::Success(1).then(positive), Outcome::Success(1));
    /// assert_eq!(Outcome::Success(-1).then(positive), Outcome::Failure("not positive"));
    /// ```
    #[inline]
    pub fn then<U, Op>(self, operation: Op) -> Outcome<U, F>
    where
        Op: FnOnce(T) -> Outcome<U, F>,
    {
        match self {
            Self::Success(value) => operation(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Runs a side effect on the success value and returns the receiver.
    #[inline]
    pub fn tap<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            operation(value);
        }
        self
    }

    // =========================================================================
    // Compose Right (else)
    // =========================================================================

    /// Recovers from a failure with a substitute success value.
    #[inline]
    pub fn else_map<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(F) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(failure) => Self::Success(operation(failure)),
        }
    }

    /// Recovers from a failure with a substitute container.
    #[inline]
    pub fn else_then<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(F) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(failure) => operation(failure),
        }
    }

    /// Runs a side effect on the failure and returns the receiver.
    #[inline]
    pub fn else_tap<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(&F),
    {
        if let Self::Failure(failure) = &self {
            operation(failure);
        }
        self
    }

    /// Transforms the failure value.
    #[inline]
    pub fn map_failure<G, Op>(self, operation: Op) -> Outcome<T, G>
    where
        Op: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(operation(failure)),
        }
    }

    // =========================================================================
    // Adapt
    // =========================================================================

    /// Turns a success that fails `predicate` into `Failure(failure)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// let is_even = |x: &i32| x % 2 == 0;
    /// assert_eq!(Outcome::Success(3).filter(is_even, "not even"), Outcome::Failure("not even"));
    /// assert_eq!(Outcome::Success(4).filter(is_even, "not even"), Outcome::Success(4));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter_with(predicate, |_| failure)
    }

    /// Turns a success that fails `predicate` into a failure built from the
    /// rejected value.
    #[inline]
    pub fn filter_with<P, Op>(self, predicate: P, failure: Op) -> Self
    where
        P: FnOnce(&T) -> bool,
        Op: FnOnce(T) -> F,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(failure(value))
                }
            }
            Self::Failure(failure) => Self::Failure(failure),
        }
    }

    // =========================================================================
    // Combine
    // =========================================================================

    /// Returns the receiver on success, otherwise `alternate`.
    #[inline]
    pub fn or(self, alternate: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternate,
        }
    }

    /// Returns the receiver on success, otherwise the container produced by
    /// `alternate`. The producer is only called on failure.
    #[inline]
    pub fn or_with<A>(self, alternate: A) -> Self
    where
        A: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternate(),
        }
    }

    /// Combines two successes.
    ///
    /// When both sides fail, the receiver's failure is returned and the other
    /// failure is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// let left: Outcome<i32, &str> = Outcome::Failure("a");
    /// let right: Outcome<i32, &str> = Outcome::Failure("b");
    /// assert_eq!(left.and(right, |a, b| a + b), Outcome::Failure("a"));
    /// ```
    #[inline]
    pub fn and<O, U, C>(self, other: Outcome<O, F>, combine: C) -> Outcome<U, F>
    where
        C: FnOnce(T, O) -> U,
    {
        match (self, other) {
            (Self::Success(left), Outcome::Success(right)) => Outcome::Success(combine(left, right)),
            (Self::Failure(failure), _) | (Self::Success(_), Outcome::Failure(failure)) => {
                Outcome::Failure(failure)
            }
        }
    }

    /// Like [`and`](Self::and), but produces the other container lazily.
    ///
    /// The producer is only called when the receiver succeeded.
    #[inline]
    pub fn and_with<O, U, P, C>(self, other: P, combine: C) -> Outcome<U, F>
    where
        P: FnOnce() -> Outcome<O, F>,
        C: FnOnce(T, O) -> U,
    {
        match self {
            Self::Success(left) => other().map(|right| combine(left, right)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Combines the success value with a plain value.
    #[inline]
    pub fn and_value<O, U, C>(self, other: O, combine: C) -> Outcome<U, F>
    where
        C: FnOnce(T, O) -> U,
    {
        self.map(|value| combine(value, other))
    }

    /// Like [`and_value`](Self::and_value), but produces the plain value
    /// lazily. The producer is only called on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// let price: Outcome<u32, &str> = Outcome::Success(40);
    /// assert_eq!(price.and_value_with(|| 2, |unit, count| unit * count), Outcome::Success(80));
    ///
    /// let missing: Outcome<u32, &str> = Outcome::Failure("no price");
    /// let total = missing.and_value_with(|| -> u32 { unreachable!() }, |unit, count| unit * count);
    /// assert_eq!(total, Outcome::Failure("no price"));
    /// ```
    #[inline]
    pub fn and_value_with<O, U, P, C>(self, other: P, combine: C) -> Outcome<U, F>
    where
        P: FnOnce() -> O,
        C: FnOnce(T, O) -> U,
    {
        self.map(|value| combine(value, other()))
    }

    // =========================================================================
    // Interop
    // =========================================================================

    /// Chains a step whose failure type converts from this one.
    ///
    /// Nothing is lost: the receiver's failure is converted with `Into`.
    #[inline]
    pub fn then_into<U, G, Op>(self, operation: Op) -> Outcome<U, G>
    where
        F: Into<G>,
        Op: FnOnce(T) -> Outcome<U, G>,
    {
        match self {
            Self::Success(value) => operation(value),
            Self::Failure(failure) => Outcome::Failure(failure.into()),
        }
    }

    /// Converts into the standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl<T, F: fmt::Display> Outcome<T, F> {
    /// Narrows the failure to text.
    ///
    /// This is lossy: anything the failure carries beyond its `Display` output
    /// (such as an [`Error`]'s fault) is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::{Outcome, TextOutcome};
    /// use railway::Error;
    ///
    /// let outcome: Outcome<i32> = Outcome::Failure(Error::new("timeout"));
    /// let text: TextOutcome<i32> = outcome.into_text();
    /// assert_eq!(text, Outcome::Failure("timeout".to_string()));
    /// ```
    #[inline]
    pub fn into_text(self) -> TextOutcome<T> {
        self.map_failure(|failure| failure.to_string())
    }

    /// Chains a step with a different failure type, narrowing both failure
    /// types to text instead of nesting one container inside another.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::{Outcome, TextOutcome};
    /// use railway::Error;
    ///
    /// #[derive(Debug)]
    /// enum Lookup { Missing }
    ///
    /// impl std::fmt::Display for Lookup {
    ///     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         formatter.write_str("missing")
    ///     }
    /// }
    ///
    /// let found: Outcome<u32, Lookup> = Outcome::Success(7);
    /// let doubled: TextOutcome<u32> = found.then_text(|id| Outcome::<u32, Error>::Success(id * 2));
    /// assert_eq!(doubled, Outcome::Success(14));
    ///
    /// let missing: Outcome<u32, Lookup> = Outcome::Failure(Lookup::Missing);
    /// let text = missing.then_text(|id| Outcome::<u32, Error>::Success(id * 2));
    /// assert_eq!(text, Outcome::Failure("missing".to_string()));
    /// ```
    #[inline]
    pub fn then_text<U, G, Op>(self, operation: Op) -> TextOutcome<U>
    where
        G: fmt::Display,
        Op: FnOnce(T) -> Outcome<U, G>,
    {
        match self {
            Self::Success(value) => operation(value).into_text(),
            Self::Failure(failure) => Outcome::Failure(failure.to_string()),
        }
    }
}

impl<T> Outcome<T, Error> {
    /// Creates a failure from a message.
    #[inline]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Failure(Error::new(message))
    }

    /// Creates a failure from a fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::from_fault("x".parse::<i32>().unwrap_err());
    /// assert!(outcome.failure_ref().is_some_and(|error| error.has_fault()));
    /// ```
    #[inline]
    pub fn from_fault<E>(fault: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Failure(Error::from_fault(fault))
    }
}

impl<F> Outcome<(), F> {
    /// A success with nothing to return.
    #[inline]
    pub const fn done() -> Self {
        Self::Success(())
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug, F: fmt::Debug> fmt::Debug for Outcome<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(failure) => formatter.debug_tuple("Failure").field(failure).finish(),
        }
    }
}

impl<T: fmt::Display, F: fmt::Display> fmt::Display for Outcome<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(failure) => write!(formatter, "Failure({failure})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Error> for Outcome<T, Error> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T, F> From<Result<T, F>> for Outcome<T, F> {
    /// `Ok(t)` becomes `Success(t)`, and `Err(f)` becomes `Failure(f)`.
    #[inline]
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<T, F> From<Outcome<T, F>> for Result<T, F> {
    #[inline]
    fn from(outcome: Outcome<T, F>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Outcome<String>: Send, Sync);
static_assertions::assert_impl_all!(Completion: Send, Sync);
