//! Async operators for [`Optional`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{Ready, ready};
use pin_project_lite::pin_project;

use super::outcome::AsyncOutcome;
use super::resolve;
use crate::container::{Optional, Outcome};

pin_project! {
    /// A pending [`Optional`].
    ///
    /// Awaiting it yields the `Optional`. The operators mirror the synchronous
    /// ones: plain names take synchronous functions, `*_async` names take
    /// functions returning futures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    /// use railway::lift::AsyncOptional;
    ///
    /// # futures::executor::block_on(async {
    /// let pending = AsyncOptional::new(async { Optional::Some(20) });
    /// let result = pending
    ///     .map(|x| x + 1)
    ///     .then_async(|x| async move { Optional::Some(x * 2) })
    ///     .await;
    /// assert_eq!(result, Optional::Some(42));
    /// # });
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct AsyncOptional<Fut> {
        #[pin]
        inner: Fut,
    }
}

impl<Fut> AsyncOptional<Fut> {
    /// Wraps a future that yields an [`Optional`].
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

impl<Fut: Future> Future for AsyncOptional<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

// =============================================================================
// Synchronous receiver, asynchronous function
// =============================================================================

impl<T> Optional<T> {
    /// Wraps the container in an already-resolved [`AsyncOptional`].
    #[inline]
    pub fn into_async(self) -> AsyncOptional<Ready<Self>> {
        AsyncOptional::new(ready(self))
    }

    /// Async form of [`fold`](Self::fold). Only the taken branch's future is
    /// created.
    pub async fn fold_async<U, S, SFut, N, NFut>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => resolve(on_some(value), "fold_async").await,
            Self::None => resolve(on_none(), "fold_async").await,
        }
    }

    /// Async form of [`value_or_with`](Self::value_or_with).
    pub async fn value_or_with_async<A, AFut>(self, alternate: A) -> T
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = T>,
    {
        match self {
            Self::Some(value) => value,
            Self::None => resolve(alternate(), "value_or_with_async").await,
        }
    }

    /// Async form of [`map`](Self::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Optional;
    ///
    /// # futures::executor::block_on(async {
    /// let doubled = Optional::Some(21).map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(doubled, Optional::Some(42));
    /// # });
    /// ```
    pub fn map_async<U, F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        F: FnOnce(T) -> UFut,
        UFut: Future<Output = U>,
    {
        AsyncOptional::new(async move {
            match self {
                Self::Some(value) => Optional::Some(resolve(function(value), "map_async").await),
                Self::None => Optional::None,
            }
        })
    }

    /// Async form of [`then`](Self::then).
    pub fn then_async<U, F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        F: FnOnce(T) -> UFut,
        UFut: Future<Output = Optional<U>>,
    {
        AsyncOptional::new(async move {
            match self {
                Self::Some(value) => resolve(function(value), "then_async").await,
                Self::None => Optional::None,
            }
        })
    }

    /// Async form of [`tap`](Self::tap).
    ///
    /// The returned future must not borrow the value; copy out what it needs.
    pub fn tap_async<F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Self>>
    where
        F: FnOnce(&T) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOptional::new(async move {
            if let Self::Some(value) = &self {
                resolve(function(value), "tap_async").await;
            }
            self
        })
    }

    /// Async form of [`else_map`](Self::else_map).
    pub fn else_map_async<F, TFut>(self, function: F) -> AsyncOptional<impl Future<Output = Self>>
    where
        F: FnOnce() -> TFut,
        TFut: Future<Output = T>,
    {
        AsyncOptional::new(async move {
            match self {
                Self::Some(value) => Self::Some(value),
                Self::None => Self::Some(resolve(function(), "else_map_async").await),
            }
        })
    }

    /// Async form of [`else_then`](Self::else_then).
    pub fn else_then_async<F, SFut>(self, function: F) -> AsyncOptional<impl Future<Output = Self>>
    where
        F: FnOnce() -> SFut,
        SFut: Future<Output = Self>,
    {
        AsyncOptional::new(async move {
            match self {
                Self::Some(value) => Self::Some(value),
                Self::None => resolve(function(), "else_then_async").await,
            }
        })
    }

    /// Async form of [`else_tap`](Self::else_tap).
    pub fn else_tap_async<F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Self>>
    where
        F: FnOnce() -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOptional::new(async move {
            if self.is_none() {
                resolve(function(), "else_tap_async").await;
            }
            self
        })
    }

    /// Async form of [`filter`](Self::filter).
    pub fn filter_async<P, PFut>(self, predicate: P) -> AsyncOptional<impl Future<Output = Self>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        AsyncOptional::new(async move {
            match self {
                Self::Some(value) => {
                    if resolve(predicate(&value), "filter_async").await {
                        Self::Some(value)
                    } else {
                        Self::None
                    }
                }
                Self::None => Self::None,
            }
        })
    }

    /// Async form of [`or_with`](Self::or_with).
    pub fn or_async<A, AFut>(self, alternate: A) -> AsyncOptional<impl Future<Output = Self>>
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = Self>,
    {
        AsyncOptional::new(async move {
            match self {
                Self::Some(value) => Self::Some(value),
                Self::None => resolve(alternate(), "or_async").await,
            }
        })
    }

    /// Async form of [`and_with`](Self::and_with). The producer's future is
    /// only created when the receiver is `Some`.
    pub fn and_async<O, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = Optional<O>>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOptional::new(async move {
            match self {
                Self::Some(left) => resolve(other(), "and_async").await.map(|right| combine(left, right)),
                Self::None => Optional::None,
            }
        })
    }
}

// =============================================================================
// Asynchronous receiver
// =============================================================================

impl<T, Fut> AsyncOptional<Fut>
where
    Fut: Future<Output = Optional<T>>,
{
    /// Resolves to [`Optional::is_some`].
    pub async fn is_some(self) -> bool {
        resolve(self.inner, "is_some").await.is_some()
    }

    /// Resolves to [`Optional::is_none`].
    pub async fn is_none(self) -> bool {
        resolve(self.inner, "is_none").await.is_none()
    }

    /// Resolves to [`Optional::fold`].
    pub async fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        resolve(self.inner, "fold").await.fold(on_some, on_none)
    }

    /// Resolves to [`Optional::fold_async`].
    pub async fn fold_async<U, S, SFut, N, NFut>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
    {
        resolve(self.inner, "fold_async").await.fold_async(on_some, on_none).await
    }

    /// Resolves to [`Optional::value_or`].
    pub async fn value_or(self, alternate: T) -> T {
        resolve(self.inner, "value_or").await.value_or(alternate)
    }

    /// Resolves to [`Optional::value_or_with`].
    pub async fn value_or_with<A>(self, alternate: A) -> T
    where
        A: FnOnce() -> T,
    {
        resolve(self.inner, "value_or_with").await.value_or_with(alternate)
    }

    /// Resolves to [`Optional::value_or_with_async`].
    pub async fn value_or_with_async<A, AFut>(self, alternate: A) -> T
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = T>,
    {
        resolve(self.inner, "value_or_with_async")
            .await
            .value_or_with_async(alternate)
            .await
    }

    /// Lifted [`Optional::map`].
    pub fn map<U, F>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        F: FnOnce(T) -> U,
    {
        AsyncOptional::new(async move { resolve(self.inner, "map").await.map(function) })
    }

    /// Lifted [`Optional::map_async`].
    pub fn map_async<U, F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        F: FnOnce(T) -> UFut,
        UFut: Future<Output = U>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "map_async").await.map_async(function).await })
    }

    /// Lifted [`Optional::then`].
    pub fn then<U, F>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "then").await.then(function) })
    }

    /// Lifted [`Optional::then_async`].
    pub fn then_async<U, F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        F: FnOnce(T) -> UFut,
        UFut: Future<Output = Optional<U>>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "then_async").await.then_async(function).await })
    }

    /// Lifted [`Optional::tap`].
    pub fn tap<F>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce(&T),
    {
        AsyncOptional::new(async move { resolve(self.inner, "tap").await.tap(function) })
    }

    /// Lifted [`Optional::tap_async`].
    pub fn tap_async<F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce(&T) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "tap_async").await.tap_async(function).await })
    }

    /// Lifted [`Optional::else_map`].
    pub fn else_map<F>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce() -> T,
    {
        AsyncOptional::new(async move { resolve(self.inner, "else_map").await.else_map(function) })
    }

    /// Lifted [`Optional::else_map_async`].
    pub fn else_map_async<F, TFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce() -> TFut,
        TFut: Future<Output = T>,
    {
        AsyncOptional::new(async move {
            resolve(self.inner, "else_map_async")
                .await
                .else_map_async(function)
                .await
        })
    }

    /// Lifted [`Optional::else_then`].
    pub fn else_then<F>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce() -> Optional<T>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "else_then").await.else_then(function) })
    }

    /// Lifted [`Optional::else_then_async`].
    pub fn else_then_async<F, SFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce() -> SFut,
        SFut: Future<Output = Optional<T>>,
    {
        AsyncOptional::new(async move {
            resolve(self.inner, "else_then_async")
                .await
                .else_then_async(function)
                .await
        })
    }

    /// Lifted [`Optional::else_tap`].
    pub fn else_tap<F>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce(),
    {
        AsyncOptional::new(async move { resolve(self.inner, "else_tap").await.else_tap(function) })
    }

    /// Lifted [`Optional::else_tap_async`].
    pub fn else_tap_async<F, UFut>(self, function: F) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        F: FnOnce() -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOptional::new(async move {
            resolve(self.inner, "else_tap_async")
                .await
                .else_tap_async(function)
                .await
        })
    }

    /// Lifted [`Optional::filter`].
    pub fn filter<P>(self, predicate: P) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        P: FnOnce(&T) -> bool,
    {
        AsyncOptional::new(async move { resolve(self.inner, "filter").await.filter(predicate) })
    }

    /// Lifted [`Optional::filter_async`].
    pub fn filter_async<P, PFut>(self, predicate: P) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "filter_async").await.filter_async(predicate).await })
    }

    /// Lifted [`Optional::or`].
    pub fn or(self, alternate: Optional<T>) -> AsyncOptional<impl Future<Output = Optional<T>>> {
        AsyncOptional::new(async move { resolve(self.inner, "or").await.or(alternate) })
    }

    /// Lifted [`Optional::or_with`].
    pub fn or_with<A>(self, alternate: A) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        A: FnOnce() -> Optional<T>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "or_with").await.or_with(alternate) })
    }

    /// Lifted [`Optional::or_async`].
    pub fn or_async<A, AFut>(self, alternate: A) -> AsyncOptional<impl Future<Output = Optional<T>>>
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = Optional<T>>,
    {
        AsyncOptional::new(async move { resolve(self.inner, "or_async").await.or_async(alternate).await })
    }

    /// Lifted [`Optional::and`].
    pub fn and<O, U, C>(self, other: Optional<O>, combine: C) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        C: FnOnce(T, O) -> U,
    {
        AsyncOptional::new(async move { resolve(self.inner, "and").await.and(other, combine) })
    }

    /// Lifted [`Optional::and_with`].
    pub fn and_with<O, U, P, C>(self, other: P, combine: C) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        P: FnOnce() -> Optional<O>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOptional::new(async move { resolve(self.inner, "and_with").await.and_with(other, combine) })
    }

    /// Lifted [`Optional::and_async`].
    pub fn and_async<O, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncOptional<impl Future<Output = Optional<U>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = Optional<O>>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOptional::new(async move {
            resolve(self.inner, "and_async")
                .await
                .and_async(other, combine)
                .await
        })
    }

    /// Lifted [`Optional::success_or`].
    pub fn success_or<F>(self, failure: F) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>> {
        AsyncOutcome::new(async move { resolve(self.inner, "success_or").await.success_or(failure) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[tokio::test]
    async fn test_map_async_skips_function_on_none() {
        let called = Cell::new(false);
        let result = Optional::<i32>::None
            .map_async(|x| {
                called.set(true);
                async move { x + 1 }
            })
            .await;
        assert_eq!(result, Optional::None);
        assert!(!called.get());
    }

    #[rstest]
    #[tokio::test]
    async fn test_lifted_chain_matches_sync_chain() {
        let lifted = Optional::Some(3)
            .into_async()
            .map(|x| x + 1)
            .filter(|x| x % 2 == 0)
            .then_async(|x| async move { Optional::Some(x * 10) })
            .await;
        let direct = Optional::Some(3)
            .map(|x| x + 1)
            .filter(|x| x % 2 == 0)
            .then(|x| Optional::Some(x * 10));
        assert_eq!(lifted, direct);
    }

    #[rstest]
    #[tokio::test]
    async fn test_fold_async_runs_only_taken_branch() {
        let none_called = Cell::new(false);
        let result = Optional::Some(2)
            .fold_async(
                |x| async move { x * 2 },
                || {
                    none_called.set(true);
                    async { 0 }
                },
            )
            .await;
        assert_eq!(result, 4);
        assert!(!none_called.get());
    }

    #[rstest]
    #[tokio::test]
    async fn test_success_or_lifts_into_outcome() {
        let outcome = Optional::<i32>::None.into_async().success_or("missing").await;
        assert_eq!(outcome, Outcome::Failure("missing"));
    }
}
