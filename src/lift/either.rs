//! Async operators for [`Either`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{Ready, ready};
use pin_project_lite::pin_project;

use super::outcome::AsyncOutcome;
use super::resolve;
use crate::container::{Either, Outcome};

pin_project! {
    /// A pending [`Either`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Either;
    /// use railway::lift::ContainerFutureExt;
    ///
    /// # futures::executor::block_on(async {
    /// let cached = async { Either::<u32, &str>::Other("cache miss") };
    /// let value = cached
    ///     .lift_either()
    ///     .else_then_async(|_| async { Either::Value(7) })
    ///     .value_or(0)
    ///     .await;
    /// assert_eq!(value, 7);
    /// # });
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct AsyncEither<Fut> {
        #[pin]
        inner: Fut,
    }
}

impl<Fut> AsyncEither<Fut> {
    /// Wraps a future that yields an [`Either`].
    #[inline]
    pub const fn new(inner: Fut) -> Self {
        Self { inner }
    }

    /// Returns the wrapped future.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.inner
    }
}

impl<Fut: Future> Future for AsyncEither<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

// =============================================================================
// Synchronous receiver, asynchronous function
// =============================================================================

impl<V, O> Either<V, O> {
    /// Wraps the container in an already-resolved [`AsyncEither`].
    #[inline]
    pub fn into_async(self) -> AsyncEither<Ready<Self>> {
        AsyncEither::new(ready(self))
    }

    /// Async form of [`fold`](Self::fold).
    pub async fn fold_async<U, S, SFut, R, RFut>(self, on_value: S, on_other: R) -> U
    where
        S: FnOnce(V) -> SFut,
        SFut: Future<Output = U>,
        R: FnOnce(O) -> RFut,
        RFut: Future<Output = U>,
    {
        match self {
            Self::Value(value) => resolve(on_value(value), "fold_async").await,
            Self::Other(other) => resolve(on_other(other), "fold_async").await,
        }
    }

    /// Async form of [`value_or_with`](Self::value_or_with).
    pub async fn value_or_with_async<A, AFut>(self, alternate: A) -> V
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = V>,
    {
        match self {
            Self::Value(value) => value,
            Self::Other(_) => resolve(alternate(), "value_or_with_async").await,
        }
    }

    /// Async form of [`map`](Self::map).
    pub fn map_async<U, Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        Op: FnOnce(V) -> UFut,
        UFut: Future<Output = U>,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(value) => Either::Value(resolve(operation(value), "map_async").await),
                Self::Other(other) => Either::Other(other),
            }
        })
    }

    /// Async form of [`then`](Self::then).
    pub fn then_async<U, Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        Op: FnOnce(V) -> UFut,
        UFut: Future<Output = Either<U, O>>,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(value) => resolve(operation(value), "then_async").await,
                Self::Other(other) => Either::Other(other),
            }
        })
    }

    /// Async form of [`tap`](Self::tap).
    pub fn tap_async<Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Self>>
    where
        Op: FnOnce(&V) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncEither::new(async move {
            if let Self::Value(value) = &self {
                resolve(operation(value), "tap_async").await;
            }
            self
        })
    }

    /// Async form of [`else_map`](Self::else_map).
    pub fn else_map_async<Op, VFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Self>>
    where
        Op: FnOnce(O) -> VFut,
        VFut: Future<Output = V>,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(value) => Self::Value(value),
                Self::Other(other) => Self::Value(resolve(operation(other), "else_map_async").await),
            }
        })
    }

    /// Async form of [`else_then`](Self::else_then).
    pub fn else_then_async<Op, SFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Self>>
    where
        Op: FnOnce(O) -> SFut,
        SFut: Future<Output = Self>,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(value) => Self::Value(value),
                Self::Other(other) => resolve(operation(other), "else_then_async").await,
            }
        })
    }

    /// Async form of [`else_tap`](Self::else_tap).
    pub fn else_tap_async<Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Self>>
    where
        Op: FnOnce(&O) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncEither::new(async move {
            if let Self::Other(other) = &self {
                resolve(operation(other), "else_tap_async").await;
            }
            self
        })
    }

    /// Async form of [`filter`](Self::filter).
    pub fn filter_async<P, PFut>(self, predicate: P, other: O) -> AsyncEither<impl Future<Output = Self>>
    where
        P: FnOnce(&V) -> PFut,
        PFut: Future<Output = bool>,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(value) => {
                    if resolve(predicate(&value), "filter_async").await {
                        Self::Value(value)
                    } else {
                        Self::Other(other)
                    }
                }
                Self::Other(earlier) => Self::Other(earlier),
            }
        })
    }

    /// Async form of [`filter_with`](Self::filter_with).
    pub fn filter_with_async<P, PFut, Op>(self, predicate: P, other: Op) -> AsyncEither<impl Future<Output = Self>>
    where
        P: FnOnce(&V) -> PFut,
        PFut: Future<Output = bool>,
        Op: FnOnce(V) -> O,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(value) => {
                    if resolve(predicate(&value), "filter_with_async").await {
                        Self::Value(value)
                    } else {
                        Self::Other(other(value))
                    }
                }
                Self::Other(earlier) => Self::Other(earlier),
            }
        })
    }

    /// Async form of [`or_with`](Self::or_with).
    pub fn or_async<A, AFut>(self, alternate: A) -> AsyncEither<impl Future<Output = Self>>
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = Self>,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(value) => Self::Value(value),
                Self::Other(_) => resolve(alternate(), "or_async").await,
            }
        })
    }

    /// Async form of [`and_with`](Self::and_with).
    pub fn and_async<W, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = Either<W, O>>,
        C: FnOnce(V, W) -> U,
    {
        AsyncEither::new(async move {
            match self {
                Self::Value(left) => resolve(other(), "and_async").await.map(|right| combine(left, right)),
                Self::Other(other) => Either::Other(other),
            }
        })
    }
}

// =============================================================================
// Asynchronous receiver
// =============================================================================

impl<V, O, Fut> AsyncEither<Fut>
where
    Fut: Future<Output = Either<V, O>>,
{
    /// Resolves to [`Either::is_value`].
    pub async fn is_value(self) -> bool {
        resolve(self.inner, "is_value").await.is_value()
    }

    /// Resolves to [`Either::is_other`].
    pub async fn is_other(self) -> bool {
        resolve(self.inner, "is_other").await.is_other()
    }

    /// Resolves to [`Either::fold`].
    pub async fn fold<U, S, R>(self, on_value: S, on_other: R) -> U
    where
        S: FnOnce(V) -> U,
        R: FnOnce(O) -> U,
    {
        resolve(self.inner, "fold").await.fold(on_value, on_other)
    }

    /// Resolves to [`Either::fold_async`].
    pub async fn fold_async<U, S, SFut, R, RFut>(self, on_value: S, on_other: R) -> U
    where
        S: FnOnce(V) -> SFut,
        SFut: Future<Output = U>,
        R: FnOnce(O) -> RFut,
        RFut: Future<Output = U>,
    {
        resolve(self.inner, "fold_async").await.fold_async(on_value, on_other).await
    }

    /// Resolves to [`Either::value_or`].
    pub async fn value_or(self, alternate: V) -> V {
        resolve(self.inner, "value_or").await.value_or(alternate)
    }

    /// Resolves to [`Either::value_or_with`].
    pub async fn value_or_with<A>(self, alternate: A) -> V
    where
        A: FnOnce() -> V,
    {
        resolve(self.inner, "value_or_with").await.value_or_with(alternate)
    }

    /// Resolves to [`Either::value_or_with_async`].
    pub async fn value_or_with_async<A, AFut>(self, alternate: A) -> V
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = V>,
    {
        resolve(self.inner, "value_or_with_async")
            .await
            .value_or_with_async(alternate)
            .await
    }

    /// Lifted [`Either::map`].
    pub fn map<U, Op>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        Op: FnOnce(V) -> U,
    {
        AsyncEither::new(async move { resolve(self.inner, "map").await.map(operation) })
    }

    /// Lifted [`Either::map_async`].
    pub fn map_async<U, Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        Op: FnOnce(V) -> UFut,
        UFut: Future<Output = U>,
    {
        AsyncEither::new(async move { resolve(self.inner, "map_async").await.map_async(operation).await })
    }

    /// Lifted [`Either::map_other`].
    pub fn map_other<U, Op>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, U>>>
    where
        Op: FnOnce(O) -> U,
    {
        AsyncEither::new(async move { resolve(self.inner, "map_other").await.map_other(operation) })
    }

    /// Lifted [`Either::then`].
    pub fn then<U, Op>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        Op: FnOnce(V) -> Either<U, O>,
    {
        AsyncEither::new(async move { resolve(self.inner, "then").await.then(operation) })
    }

    /// Lifted [`Either::then_async`].
    pub fn then_async<U, Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        Op: FnOnce(V) -> UFut,
        UFut: Future<Output = Either<U, O>>,
    {
        AsyncEither::new(async move { resolve(self.inner, "then_async").await.then_async(operation).await })
    }

    /// Lifted [`Either::tap`].
    pub fn tap<Op>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(&V),
    {
        AsyncEither::new(async move { resolve(self.inner, "tap").await.tap(operation) })
    }

    /// Lifted [`Either::tap_async`].
    pub fn tap_async<Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(&V) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncEither::new(async move { resolve(self.inner, "tap_async").await.tap_async(operation).await })
    }

    /// Lifted [`Either::else_map`].
    pub fn else_map<Op>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(O) -> V,
    {
        AsyncEither::new(async move { resolve(self.inner, "else_map").await.else_map(operation) })
    }

    /// Lifted [`Either::else_map_async`].
    pub fn else_map_async<Op, VFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(O) -> VFut,
        VFut: Future<Output = V>,
    {
        AsyncEither::new(async move {
            resolve(self.inner, "else_map_async")
                .await
                .else_map_async(operation)
                .await
        })
    }

    /// Lifted [`Either::else_then`].
    pub fn else_then<Op>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(O) -> Either<V, O>,
    {
        AsyncEither::new(async move { resolve(self.inner, "else_then").await.else_then(operation) })
    }

    /// Lifted [`Either::else_then_async`].
    pub fn else_then_async<Op, SFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(O) -> SFut,
        SFut: Future<Output = Either<V, O>>,
    {
        AsyncEither::new(async move {
            resolve(self.inner, "else_then_async")
                .await
                .else_then_async(operation)
                .await
        })
    }

    /// Lifted [`Either::else_tap`].
    pub fn else_tap<Op>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(&O),
    {
        AsyncEither::new(async move { resolve(self.inner, "else_tap").await.else_tap(operation) })
    }

    /// Lifted [`Either::else_tap_async`].
    pub fn else_tap_async<Op, UFut>(self, operation: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        Op: FnOnce(&O) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncEither::new(async move {
            resolve(self.inner, "else_tap_async")
                .await
                .else_tap_async(operation)
                .await
        })
    }

    /// Lifted [`Either::filter`].
    pub fn filter<P>(self, predicate: P, other: O) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        P: FnOnce(&V) -> bool,
    {
        AsyncEither::new(async move { resolve(self.inner, "filter").await.filter(predicate, other) })
    }

    /// Lifted [`Either::filter_with`].
    pub fn filter_with<P, Op>(self, predicate: P, other: Op) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        P: FnOnce(&V) -> bool,
        Op: FnOnce(V) -> O,
    {
        AsyncEither::new(async move { resolve(self.inner, "filter_with").await.filter_with(predicate, other) })
    }

    /// Lifted [`Either::filter_async`].
    pub fn filter_async<P, PFut>(self, predicate: P, other: O) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        P: FnOnce(&V) -> PFut,
        PFut: Future<Output = bool>,
    {
        AsyncEither::new(async move {
            resolve(self.inner, "filter_async")
                .await
                .filter_async(predicate, other)
                .await
        })
    }

    /// Lifted [`Either::filter_with_async`].
    pub fn filter_with_async<P, PFut, Op>(
        self,
        predicate: P,
        other: Op,
    ) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        P: FnOnce(&V) -> PFut,
        PFut: Future<Output = bool>,
        Op: FnOnce(V) -> O,
    {
        AsyncEither::new(async move {
            resolve(self.inner, "filter_with_async")
                .await
                .filter_with_async(predicate, other)
                .await
        })
    }

    /// Lifted [`Either::or`].
    pub fn or(self, alternate: Either<V, O>) -> AsyncEither<impl Future<Output = Either<V, O>>> {
        AsyncEither::new(async move { resolve(self.inner, "or").await.or(alternate) })
    }

    /// Lifted [`Either::or_with`].
    pub fn or_with<A>(self, alternate: A) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        A: FnOnce() -> Either<V, O>,
    {
        AsyncEither::new(async move { resolve(self.inner, "or_with").await.or_with(alternate) })
    }

    /// Lifted [`Either::or_async`].
    pub fn or_async<A, AFut>(self, alternate: A) -> AsyncEither<impl Future<Output = Either<V, O>>>
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = Either<V, O>>,
    {
        AsyncEither::new(async move { resolve(self.inner, "or_async").await.or_async(alternate).await })
    }

    /// Lifted [`Either::and`].
    pub fn and<W, U, C>(self, other: Either<W, O>, combine: C) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        C: FnOnce(V, W) -> U,
    {
        AsyncEither::new(async move { resolve(self.inner, "and").await.and(other, combine) })
    }

    /// Lifted [`Either::and_with`].
    pub fn and_with<W, U, P, C>(self, other: P, combine: C) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        P: FnOnce() -> Either<W, O>,
        C: FnOnce(V, W) -> U,
    {
        AsyncEither::new(async move { resolve(self.inner, "and_with").await.and_with(other, combine) })
    }

    /// Lifted [`Either::and_async`].
    pub fn and_async<W, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncEither<impl Future<Output = Either<U, O>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = Either<W, O>>,
        C: FnOnce(V, W) -> U,
    {
        AsyncEither::new(async move {
            resolve(self.inner, "and_async")
                .await
                .and_async(other, combine)
                .await
        })
    }

    /// Lifted [`Either::into_outcome`].
    pub fn into_outcome(self) -> AsyncOutcome<impl Future<Output = Outcome<V, O>>> {
        AsyncOutcome::new(async move { resolve(self.inner, "into_outcome").await.into_outcome() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[tokio::test]
    async fn test_else_tap_async_returns_receiver() {
        let seen = Cell::new(0);
        let result = Either::<&str, i32>::Other(9)
            .else_tap_async(|other| {
                seen.set(*other);
                async {}
            })
            .await;
        assert_eq!(result, Either::Other(9));
        assert_eq!(seen.get(), 9);
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_async_leaves_other_untouched() {
        let called = Cell::new(false);
        let result = Either::<i32, &str>::Other("kept")
            .into_async()
            .map_async(|x| {
                called.set(true);
                async move { x * 2 }
            })
            .await;
        assert_eq!(result, Either::Other("kept"));
        assert!(!called.get());
    }

    #[rstest]
    #[tokio::test]
    async fn test_into_outcome_on_pending_either() {
        let outcome = Either::<i32, &str>::Value(3).into_async().into_outcome().await;
        assert_eq!(outcome, Outcome::Success(3));
    }
}
