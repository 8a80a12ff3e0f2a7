//! Either type - a value that is one of two types.
//!
//! `Either<V, O>` is either `Value(V)` or `Other(O)`. Both sides carry data and
//! neither side is an error by definition, which makes it the general union
//! behind the other two containers:
//!
//! - Branching computations that produce one of two shapes
//! - Carrying a failure type that is not an error at all
//! - Bridging to [`Outcome`] and `std::result::Result`
//!
//! The `Value` side is the one the operator algebra works on; `else_*`
//! operators work on `Other`.
//!
//! # Examples
//!
//! ```rust
//! use railway::container::Either;
//!
//! let value: Either<i32, String> = Either::Value(42);
//! let other: Either<i32, String> = Either::Other("hello".to_string());
//!
//! let described = other.fold(
//!     |n| format!("Number: {n}"),
//!     |s| format!("String: {s}"),
//! );
//! assert_eq!(described, "String: hello");
//!
//! assert_eq!(value.map(|n| n * 2).value_or(0), 84);
//! ```

use std::fmt;

use super::outcome::Outcome;

/// A value that is one of two types.
///
/// # Type Parameters
///
/// * `V` - The type of the value side
/// * `O` - The type of the other side
///
/// # Examples
///
/// ```rust
/// use railway::container::Either;
///
/// let parsed: Either<u16, String> = Either::Value(8080);
/// let named: Either<u16, String> = Either::Other("http".to_string());
///
/// let port = |either: Either<u16, String>| {
///     either.else_map(|name| if name == "http" { 80 } else { 0 })
/// };
/// assert_eq!(port(parsed), Either::Value(8080));
/// assert_eq!(port(named), Either::Value(80));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<V, O> {
    /// The value side, which the operator algebra transforms.
    Value(V),
    /// The other side, reachable through the `else_*` operators.
    Other(O),
}

impl<V, O> Either<V, O> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert!(value.is_value());
    ///
    /// let other: Either<i32, String> = Either::Other("hello".to_string());
    /// assert!(!other.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this is an `Other`.
    #[inline]
    pub const fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<V>`, discarding the other side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert_eq!(value.value(), Some(42));
    ///
    /// let other: Either<i32, String> = Either::Other("hello".to_string());
    /// assert_eq!(other.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Other(_) => None,
        }
    }

    /// Converts into an `Option<O>`, discarding the value side.
    #[inline]
    pub fn other(self) -> Option<O> {
        match self {
            Self::Value(_) => None,
            Self::Other(other) => Some(other),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn value_ref(&self) -> Option<&V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Other(_) => None,
        }
    }

    /// Returns a reference to the other side if present.
    #[inline]
    pub const fn other_ref(&self) -> Option<&O> {
        match self {
            Self::Value(_) => None,
            Self::Other(other) => Some(other),
        }
    }

    /// Borrows both sides at once. Exactly one of the two is `Some`.
    #[inline]
    pub const fn parts(&self) -> (Option<&V>, Option<&O>) {
        (self.value_ref(), self.other_ref())
    }

    /// Splits into both sides. Exactly one of the two is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let other: Either<i32, &str> = Either::Other("left over");
    /// assert_eq!(other.into_parts(), (None, Some("left over")));
    /// ```
    #[inline]
    pub fn into_parts(self) -> (Option<V>, Option<O>) {
        match self {
            Self::Value(value) => (Some(value), None),
            Self::Other(other) => (None, Some(other)),
        }
    }

    /// Converts into a pair of `Option`s.
    ///
    /// Same pair as [`into_parts`](Self::into_parts), named for callers that
    /// think of the union as two optional slots.
    #[inline]
    pub fn into_options(self) -> (Option<V>, Option<O>) {
        self.into_parts()
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&V, &O> {
        match self {
            Self::Value(value) => Either::Value(value),
            Self::Other(other) => Either::Other(other),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert_eq!(value.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let other: Either<i32, String> = Either::Other("hello".to_string());
    /// assert_eq!(other.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<U, S, R>(self, on_value: S, on_other: R) -> U
    where
        S: FnOnce(V) -> U,
        R: FnOnce(O) -> U,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Other(other) => on_other(other),
        }
    }

    /// Returns the value, or `alternate` when this is `Other`.
    #[inline]
    pub fn value_or(self, alternate: V) -> V {
        match self {
            Self::Value(value) => value,
            Self::Other(_) => alternate,
        }
    }

    /// Returns the value, or the result of `alternate` when this is `Other`.
    #[inline]
    pub fn value_or_with<A>(self, alternate: A) -> V
    where
        A: FnOnce() -> V,
    {
        match self {
            Self::Value(value) => value,
            Self::Other(_) => alternate(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let value: Either<String, i32> = Either::Value("hello".to_string());
    /// assert_eq!(value.map(|s| s.len()), Either::Value(5));
    ///
    /// let other: Either<String, i32> = Either::Other(42);
    /// assert_eq!(other.map(|s: String| s.len()), Either::Other(42));
    /// ```
    #[inline]
    pub fn map<U, Op>(self, operation: Op) -> Either<U, O>
    where
        Op: FnOnce(V) -> U,
    {
        match self {
            Self::Value(value) => Either::Value(operation(value)),
            Self::Other(other) => Either::Other(other),
        }
    }

    /// Applies a function to the other side if present.
    #[inline]
    pub fn map_other<U, Op>(self, operation: Op) -> Either<V, U>
    where
        Op: FnOnce(O) -> U,
    {
        match self {
            Self::Value(value) => Either::Value(value),
            Self::Other(other) => Either::Other(operation(other)),
        }
    }

    /// Applies one of two functions depending on the side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert_eq!(value.bimap(|x| x * 2, |s: String| s.len()), Either::Value(84));
    /// ```
    #[inline]
    pub fn bimap<U, W, S, R>(self, on_value: S, on_other: R) -> Either<U, W>
    where
        S: FnOnce(V) -> U,
        R: FnOnce(O) -> W,
    {
        match self {
            Self::Value(value) => Either::Value(on_value(value)),
            Self::Other(other) => Either::Other(on_other(other)),
        }
    }

    /// Chains a step that may itself produce the other side.
    #[inline]
    pub fn then<U, Op>(self, operation: Op) -> Either<U, O>
    where
        Op: FnOnce(V) -> Either<U, O>,
    {
        match self {
            Self::Value(value) => operation(value),
            Self::Other(other) => Either::Other(other),
        }
    }

    /// Runs a side effect on the value and returns the receiver.
    #[inline]
    pub fn tap<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(&V),
    {
        if let Self::Value(value) = &self {
            operation(value);
        }
        self
    }

    // =========================================================================
    // Else Operations
    // =========================================================================

    /// Replaces the other side with a value.
    #[inline]
    pub fn else_map<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(O) -> V,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Other(other) => Self::Value(operation(other)),
        }
    }

    /// Replaces the other side with a container.
    #[inline]
    pub fn else_then<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(O) -> Self,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Other(other) => operation(other),
        }
    }

    /// Runs a side effect on the other side and returns the receiver.
    #[inline]
    pub fn else_tap<Op>(self, operation: Op) -> Self
    where
        Op: FnOnce(&O),
    {
        if let Self::Other(other) = &self {
            operation(other);
        }
        self
    }

    // =========================================================================
    // Filter Operations
    // =========================================================================

    /// Turns a value that fails `predicate` into `Other(other)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let small: Either<i32, &str> = Either::Value(3);
    /// assert_eq!(small.filter(|x| *x > 5, "too small"), Either::Other("too small"));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, other: O) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.filter_with(predicate, |_| other)
    }

    /// Turns a value that fails `predicate` into `Other`, built from the
    /// rejected value.
    #[inline]
    pub fn filter_with<P, Op>(self, predicate: P, other: Op) -> Self
    where
        P: FnOnce(&V) -> bool,
        Op: FnOnce(V) -> O,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value) {
                    Self::Value(value)
                } else {
                    Self::Other(other(value))
                }
            }
            Self::Other(other) => Self::Other(other),
        }
    }

    // =========================================================================
    // Combine Operations
    // =========================================================================

    /// Returns the receiver when it holds a value, otherwise `alternate`.
    #[inline]
    pub fn or(self, alternate: Self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Other(_) => alternate,
        }
    }

    /// Returns the receiver when it holds a value, otherwise the result of
    /// `alternate`.
    #[inline]
    pub fn or_with<A>(self, alternate: A) -> Self
    where
        A: FnOnce() -> Self,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Other(_) => alternate(),
        }
    }

    /// Combines two values. When both sides are `Other`, the receiver's wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let left: Either<i32, &str> = Either::Other("first");
    /// let right: Either<i32, &str> = Either::Other("second");
    /// assert_eq!(left.and(right, |a, b| a + b), Either::Other("first"));
    /// ```
    #[inline]
    pub fn and<W, U, C>(self, other: Either<W, O>, combine: C) -> Either<U, O>
    where
        C: FnOnce(V, W) -> U,
    {
        match (self, other) {
            (Self::Value(left), Either::Value(right)) => Either::Value(combine(left, right)),
            (Self::Other(other), _) | (Self::Value(_), Either::Other(other)) => Either::Other(other),
        }
    }

    /// Like [`and`](Self::and), but produces the other container lazily.
    #[inline]
    pub fn and_with<W, U, P, C>(self, other: P, combine: C) -> Either<U, O>
    where
        P: FnOnce() -> Either<W, O>,
        C: FnOnce(V, W) -> U,
    {
        match self {
            Self::Value(left) => other().map(|right| combine(left, right)),
            Self::Other(other) => Either::Other(other),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert_eq!(value.swap(), Either::Other(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<O, V> {
        match self {
            Self::Value(value) => Either::Other(value),
            Self::Other(other) => Either::Value(other),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert_eq!(value.unwrap_value(), 42);
    /// ```
    #[inline]
    pub fn unwrap_value(self) -> V {
        match self {
            Self::Value(value) => value,
            Self::Other(_) => panic!("called `Either::unwrap_value()` on an `Other` value"),
        }
    }

    /// Returns the other side, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Value`.
    #[inline]
    pub fn unwrap_other(self) -> O {
        match self {
            Self::Value(_) => panic!("called `Either::unwrap_other()` on a `Value` value"),
            Self::Other(other) => other,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Reads the value side as success and the other side as failure.
    #[inline]
    pub fn into_outcome(self) -> Outcome<V, O> {
        match self {
            Self::Value(value) => Outcome::Success(value),
            Self::Other(other) => Outcome::Failure(other),
        }
    }

    /// Converts into the standard `Result`, with `Other` as the error.
    #[inline]
    pub fn into_result(self) -> Result<V, O> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Other(other) => Err(other),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<V: Default, O> Either<V, O> {
    /// Returns the value, or `V::default()` when this is `Other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let other: Either<i32, String> = Either::Other("hello".to_string());
    /// assert_eq!(other.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> V {
        match self {
            Self::Value(value) => value,
            Self::Other(_) => V::default(),
        }
    }
}

impl<V, O: Default> Either<V, O> {
    /// Returns the other side, or `O::default()` when this is `Value`.
    #[inline]
    pub fn other_or_default(self) -> O {
        match self {
            Self::Value(_) => O::default(),
            Self::Other(other) => other,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<V: fmt::Debug, O: fmt::Debug> fmt::Debug for Either<V, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Other(other) => formatter.debug_tuple("Other").field(other).finish(),
        }
    }
}

impl<V: fmt::Display, O: fmt::Display> fmt::Display for Either<V, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "Value({value})"),
            Self::Other(other) => write!(formatter, "Other({other})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<V, O> From<Result<V, O>> for Either<V, O> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(v)` becomes `Value(v)`, and `Err(o)` becomes `Other(o)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<i32, String> = ok.into();
    /// assert_eq!(either, Either::Value(42));
    /// ```
    #[inline]
    fn from(result: Result<V, O>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(other) => Self::Other(other),
        }
    }
}

impl<V, O> From<Either<V, O>> for Result<V, O> {
    #[inline]
    fn from(either: Either<V, O>) -> Self {
        either.into_result()
    }
}

impl<V, O> From<Outcome<V, O>> for Either<V, O> {
    /// `Success(v)` becomes `Value(v)`, and `Failure(o)` becomes `Other(o)`.
    #[inline]
    fn from(outcome: Outcome<V, O>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Value(value),
            Outcome::Failure(other) => Self::Other(other),
        }
    }
}

impl<V, O> From<Either<V, O>> for Outcome<V, O> {
    #[inline]
    fn from(either: Either<V, O>) -> Self {
        either.into_outcome()
    }
}

static_assertions::assert_impl_all!(Either<String, u32>: Send, Sync);
static_assertions::assert_not_impl_any!(Either<std::rc::Rc<u8>, u8>: Send, Sync);
