//! Optional container - a value that may be absent.
//!
//! `Optional<T>` is either `Some(T)` or `None`. It replaces nullable
//! references: absence is a state you compose over, not a value you test for
//! before every use.
//!
//! # Examples
//!
//! ```rust
//! use railway::container::Optional;
//!
//! fn divide(dividend: i32, divisor: i32) -> Optional<i32> {
//!     if divisor == 0 {
//!         Optional::None
//!     } else {
//!         Optional::Some(dividend / divisor)
//!     }
//! }
//!
//! let halved = divide(12, 2).map(|x| x * 2).value_or(-1);
//! assert_eq!(halved, 12);
//!
//! let nothing = divide(12, 0).map(|x| x * 2).value_or(-1);
//! assert_eq!(nothing, -1);
//! ```
//!
//! The payload can only be reached through an operator or a `match`; a
//! refutable `let Optional::Some(value) = ...` does not compile.

use std::fmt;

use super::outcome::Outcome;

/// A value that is either present (`Some`) or absent (`None`).
///
/// Every operator consumes the receiver and returns a new container; the
/// state of an `Optional` never changes after construction.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a nullable value: `Some(x)` becomes `Some(x)`, `None` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// let lookup = [("a", 1)].into_iter().find(|(key, _)| *key == "b");
    /// assert!(Optional::maybe(lookup).is_none());
    /// ```
    #[inline]
    pub fn maybe(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Inspect
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Decompose
    // =========================================================================

    /// Returns a reference to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// assert_eq!(Optional::Some(3).some_ref(), Some(&3));
    /// assert_eq!(Optional::<i32>::None.some_ref(), None);
    /// ```
    #[inline]
    pub const fn some_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Mutably borrows the contained value.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Eliminates the container by running exactly one of two functions.
    ///
    /// This is the sanctioned exit back into imperative code. With closures
    /// returning `()` it is the side-effecting form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// let greeting = Optional::Some("Ada").fold(|name| format!("hello {name}"), || "hello".to_string());
    /// assert_eq!(greeting, "hello Ada");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Returns the value, or `alternate` when absent.
    ///
    /// `alternate` may itself be an "empty" value of `T`:
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// let name: Optional<Option<&str>> = Optional::None;
    /// assert_eq!(name.value_or(None), None);
    /// ```
    #[inline]
    pub fn value_or(self, alternate: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => alternate,
        }
    }

    /// Returns the value, or the result of `alternate` when absent.
    ///
    /// `alternate` is never called when a value is present.
    #[inline]
    pub fn value_or_with<A>(self, alternate: A) -> T
    where
        A: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => alternate(),
        }
    }

    // =========================================================================
    // Compose Left (then)
    // =========================================================================

    /// Transforms the value if present.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::Some(x / 2) } else { Optional::None };
    /// assert_eq!(Optional::Some(8).then(half).then(half), Optional::Some(2));
    /// assert_eq!(Optional::Some(6).then(half).then(half), Optional::None);
    /// ```
    #[inline]
    pub fn then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Runs a side effect on the value if present and returns the receiver.
    #[inline]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Compose Right (else)
    // =========================================================================

    /// Substitutes a value when absent.
    #[inline]
    pub fn else_map<F>(self, function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => Self::Some(function()),
        }
    }

    /// Substitutes another container when absent.
    #[inline]
    pub fn else_then<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function(),
        }
    }

    /// Runs a side effect when absent and returns the receiver.
    #[inline]
    pub fn else_tap<F>(self, function: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            function();
        }
        self
    }

    // =========================================================================
    // Adapt
    // =========================================================================

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// assert_eq!(Optional::Some(4).filter(|x| x % 2 == 0), Optional::Some(4));
    /// assert_eq!(Optional::Some(3).filter(|x| x % 2 == 0), Optional::None);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    // =========================================================================
    // Combine
    // =========================================================================

    /// Returns the receiver if present, otherwise `alternate`.
    #[inline]
    pub fn or(self, alternate: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternate,
        }
    }

    /// Returns the receiver if present, otherwise the container produced by
    /// `alternate`. The producer is only called when absent.
    #[inline]
    pub fn or_with<A>(self, alternate: A) -> Self
    where
        A: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternate(),
        }
    }

    /// Combines two present values; absent if either side is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// let sum = Optional::Some(1).and(Optional::Some(2), |a, b| a + b);
    /// assert_eq!(sum, Optional::Some(3));
    ///
    /// let missing = Optional::Some(1).and(Optional::<i32>::None, |a, b| a + b);
    /// assert_eq!(missing, Optional::None);
    /// ```
    #[inline]
    pub fn and<O, U, C>(self, other: Optional<O>, combine: C) -> Optional<U>
    where
        C: FnOnce(T, O) -> U,
    {
        match (self, other) {
            (Self::Some(left), Optional::Some(right)) => Optional::Some(combine(left, right)),
            _ => Optional::None,
        }
    }

    /// Like [`and`](Self::and), but produces the other container lazily.
    ///
    /// The producer is only called when the receiver is present.
    #[inline]
    pub fn and_with<O, U, P, C>(self, other: P, combine: C) -> Optional<U>
    where
        P: FnOnce() -> Optional<O>,
        C: FnOnce(T, O) -> U,
    {
        match self {
            Self::Some(left) => match other() {
                Optional::Some(right) => Optional::Some(combine(left, right)),
                Optional::None => Optional::None,
            },
            Self::None => Optional::None,
        }
    }

    // =========================================================================
    // Convert
    // =========================================================================

    /// Converts into an [`Outcome`], using `failure` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::{Optional, Outcome};
    ///
    /// let found: Outcome<i32, &str> = Optional::Some(1).success_or("missing");
    /// assert_eq!(found, Outcome::Success(1));
    /// ```
    #[inline]
    pub fn success_or<F>(self, failure: F) -> Outcome<T, F> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(failure),
        }
    }

    /// Converts into an [`Outcome`], producing the failure lazily when absent.
    #[inline]
    pub fn success_or_with<F, P>(self, failure: P) -> Outcome<T, F>
    where
        P: FnOnce() -> F,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(failure()),
        }
    }

    /// Returns an iterator over the zero or one contained values.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.some_ref().into_iter()
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::maybe(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

static_assertions::assert_impl_all!(Optional<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
