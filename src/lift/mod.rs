//! Async lifting for the three containers.
//!
//! Every container operator exists in three more shapes, depending on which
//! side is asynchronous:
//!
//! | Receiver | Function | Call |
//! |---|---|---|
//! | `Optional<T>` | async | `optional.map_async(f)` |
//! | `AsyncOptional<Fut>` | sync | `pending.map(f)` |
//! | `AsyncOptional<Fut>` | async | `pending.map_async(f)` |
//!
//! The wrappers ([`AsyncOptional`], [`AsyncOutcome`], [`AsyncEither`]) are
//! futures that yield the container, so any chain can be awaited at any
//! point. Chainable operators return another wrapper; `fold`, `value_or*` and
//! the `is_*` predicates return a plain future.
//!
//! Each lifted operator resolves the receiver and then applies the
//! synchronous operator, so a lifted chain produces the same container as the
//! synchronous chain on the resolved input. A function's future is only
//! created once the receiver's state is known: the branch that is not taken is
//! never evaluated.
//!
//! Nothing runs until the outermost future is polled. Dropping it cancels the
//! whole chain.
//!
//! # Examples
//!
//! ```rust
//! use railway::container::Outcome;
//! use railway::lift::ContainerFutureExt;
//!
//! async fn load_user(id: u32) -> Outcome<String> {
//!     if id == 1 { Outcome::Success("ada".to_string()) } else { Outcome::fail("no such user") }
//! }
//!
//! async fn load_quota(name: String) -> usize {
//!     name.len() * 10
//! }
//!
//! # futures::executor::block_on(async {
//! let quota = load_user(1)
//!     .lift_outcome()
//!     .map_async(load_quota)
//!     .value_or(0)
//!     .await;
//! assert_eq!(quota, 30);
//!
//! let missing = load_user(2)
//!     .lift_outcome()
//!     .map_async(load_quota)
//!     .value_or(0)
//!     .await;
//! assert_eq!(missing, 0);
//! # });
//! ```

use std::future::Future;

use crate::container::{Either, Optional, Outcome};

mod either;
mod optional;
mod outcome;

pub use either::AsyncEither;
pub use optional::AsyncOptional;
pub use outcome::AsyncOutcome;

/// Emits a trace event for an operator about to suspend.
macro_rules! trace_suspend {
    ($operator:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(operator = $operator, "awaiting pending container");
        #[cfg(not(feature = "tracing"))]
        let _ = $operator;
    };
}

/// Awaits `future` on behalf of `operator`.
///
/// Every suspension point of the lifting layer goes through here, which keeps
/// the trace output to one event per await.
pub(crate) async fn resolve<Fut>(future: Fut, operator: &'static str) -> Fut::Output
where
    Fut: Future,
{
    trace_suspend!(operator);
    future.await
}

/// Lifts any future that yields a container into the matching wrapper.
///
/// # Examples
///
/// ```rust
/// use railway::container::Optional;
/// use railway::lift::ContainerFutureExt;
///
/// async fn find(id: u32) -> Optional<&'static str> {
///     if id == 7 { Optional::Some("seven") } else { Optional::None }
/// }
///
/// # futures::executor::block_on(async {
/// let length = find(7).lift_optional().map(str::len).value_or(0).await;
/// assert_eq!(length, 5);
/// # });
/// ```
pub trait ContainerFutureExt: Future + Sized {
    /// Wraps a future yielding an [`Optional`].
    fn lift_optional<T>(self) -> AsyncOptional<Self>
    where
        Self: Future<Output = Optional<T>>,
    {
        AsyncOptional::new(self)
    }

    /// Wraps a future yielding an [`Outcome`].
    fn lift_outcome<T, F>(self) -> AsyncOutcome<Self>
    where
        Self: Future<Output = Outcome<T, F>>,
    {
        AsyncOutcome::new(self)
    }

    /// Wraps a future yielding an [`Either`].
    fn lift_either<V, O>(self) -> AsyncEither<Self>
    where
        Self: Future<Output = Either<V, O>>,
    {
        AsyncEither::new(self)
    }
}

impl<Fut: Future> ContainerFutureExt for Fut {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use rstest::rstest;

    #[rstest]
    fn test_resolve_returns_output() {
        assert_eq!(block_on(resolve(async { 5 }, "test")), 5);
    }

    #[rstest]
    fn test_lift_either_awaits_to_container() {
        let either = block_on(async { Either::<i32, String>::Value(1) }.lift_either());
        assert_eq!(either, Either::Value(1));
    }
}
