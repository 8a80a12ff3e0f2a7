//! Async operators for [`Outcome`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{Ready, ready};
use pin_project_lite::pin_project;

use super::resolve;
use crate::container::{Outcome, TextOutcome};

pin_project! {
    /// A pending [`Outcome`].
    ///
    /// Awaiting it yields the `Outcome`. Plain operator names take synchronous
    /// functions, `*_async` names take functions returning futures. A failure
    /// short-circuits every later step exactly as in the synchronous chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    /// use railway::lift::AsyncOutcome;
    ///
    /// # futures::executor::block_on(async {
    /// let pending = AsyncOutcome::new(async { Outcome::<i32, &str>::Success(5) });
    /// let result = pending
    ///     .then(|x| if x > 3 { Outcome::Success(x) } else { Outcome::Failure("too small") })
    ///     .map_async(|x| async move { x * 2 })
    ///     .await;
    /// assert_eq!(result, Outcome::Success(10));
    /// # });
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct AsyncOutcome<Fut> {
        #[pin]
        inner: Fut,
    }
}

impl<Fut> AsyncOutcome<Fut> {
    /// Wraps a future that yields an [`Outcome`].
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

impl<Fut: Future> Future for AsyncOutcome<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

// =============================================================================
// Synchronous receiver, asynchronous function
// =============================================================================

impl<T, F> Outcome<T, F> {
    /// Wraps the container in an already-resolved [`AsyncOutcome`].
    #[inline]
    pub fn into_async(self) -> AsyncOutcome<Ready<Self>> {
        AsyncOutcome::new(ready(self))
    }

    /// Async form of [`fold`](Self::fold). Only the taken branch's future is
    /// created.
    pub async fn fold_async<U, S, SFut, R, RFut>(self, on_success: S, on_failure: R) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        R: FnOnce(F) -> RFut,
        RFut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => resolve(on_success(value), "fold_async").await,
            Self::Failure(failure) => resolve(on_failure(failure), "fold_async").await,
        }
    }

    /// Async form of [`value_or_with`](Self::value_or_with).
    pub async fn value_or_with_async<A, AFut>(self, alternate: A) -> T
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = T>,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => resolve(alternate(), "value_or_with_async").await,
        }
    }

    /// Async form of [`map`](Self::map).
    pub fn map_async<U, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = U>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => Outcome::Success(resolve(operation(value), "map_async").await),
                Self::Failure(failure) => Outcome::Failure(failure),
            }
        })
    }

    /// Async form of [`then`](Self::then).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    ///
    /// async fn charge(amount: u32) -> Outcome<u32, String> {
    ///     if amount <= 100 { Outcome::Success(100 - amount) } else { Outcome::Failure("declined".into()) }
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(Outcome::Success(30).then_async(charge).await, Outcome::Success(70));
    /// assert_eq!(Outcome::Success(300).then_async(charge).await, Outcome::Failure("declined".to_string()));
    /// # });
    /// ```
    pub fn then_async<U, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = Outcome<U, F>>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => resolve(operation(value), "then_async").await,
                Self::Failure(failure) => Outcome::Failure(failure),
            }
        })
    }

    /// Async form of [`tap`](Self::tap).
    ///
    /// The returned future must not borrow the value; copy out what it needs.
    pub fn tap_async<Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Self>>
    where
        Op: FnOnce(&T) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOutcome::new(async move {
            if let Self::Success(value) = &self {
                resolve(operation(value), "tap_async").await;
            }
            self
        })
    }

    /// Async form of [`else_map`](Self::else_map).
    pub fn else_map_async<Op, TFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Self>>
    where
        Op: FnOnce(F) -> TFut,
        TFut: Future<Output = T>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => Self::Success(value),
                Self::Failure(failure) => Self::Success(resolve(operation(failure), "else_map_async").await),
            }
        })
    }

    /// Async form of [`else_then`](Self::else_then).
    pub fn else_then_async<Op, SFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Self>>
    where
        Op: FnOnce(F) -> SFut,
        SFut: Future<Output = Self>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => Self::Success(value),
                Self::Failure(failure) => resolve(operation(failure), "else_then_async").await,
            }
        })
    }

    /// Async form of [`else_tap`](Self::else_tap).
    pub fn else_tap_async<Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Self>>
    where
        Op: FnOnce(&F) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOutcome::new(async move {
            if let Self::Failure(failure) = &self {
                resolve(operation(failure), "else_tap_async").await;
            }
            self
        })
    }

    /// Async form of [`filter`](Self::filter).
    pub fn filter_async<P, PFut>(self, predicate: P, failure: F) -> AsyncOutcome<impl Future<Output = Self>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => {
                    if resolve(predicate(&value), "filter_async").await {
                        Self::Success(value)
                    } else {
                        Self::Failure(failure)
                    }
                }
                Self::Failure(earlier) => Self::Failure(earlier),
            }
        })
    }

    /// Async form of [`filter_with`](Self::filter_with). The failure is only
    /// built when the predicate rejects the value.
    pub fn filter_with_async<P, PFut, Op>(self, predicate: P, failure: Op) -> AsyncOutcome<impl Future<Output = Self>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        Op: FnOnce(T) -> F,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => {
                    if resolve(predicate(&value), "filter_with_async").await {
                        Self::Success(value)
                    } else {
                        Self::Failure(failure(value))
                    }
                }
                Self::Failure(earlier) => Self::Failure(earlier),
            }
        })
    }

    /// Async form of [`then_into`](Self::then_into).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::container::Outcome;
    /// use railway::Error;
    ///
    /// async fn reserve(seats: u32) -> Outcome<u32> {
    ///     if seats <= 4 { Outcome::Success(seats) } else { Outcome::fail("sold out") }
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// let parsed: Outcome<u32, &str> = Outcome::Success(2);
    /// assert_eq!(parsed.then_into_async(reserve).await, Outcome::Success(2));
    ///
    /// let invalid: Outcome<u32, &str> = Outcome::Failure("not a number");
    /// let reserved = invalid.then_into_async(reserve).await;
    /// assert_eq!(reserved, Outcome::Failure(Error::new("not a number")));
    /// # });
    /// ```
    pub fn then_into_async<U, G, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, G>>>
    where
        F: Into<G>,
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = Outcome<U, G>>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => resolve(operation(value), "then_into_async").await,
                Self::Failure(failure) => Outcome::Failure(failure.into()),
            }
        })
    }

    /// Async form of [`and_value_with`](Self::and_value_with). The producer's
    /// future is never created for a failure.
    pub fn and_value_with_async<O, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = O>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(left) => Outcome::Success(combine(left, resolve(other(), "and_value_with_async").await)),
                Self::Failure(failure) => Outcome::Failure(failure),
            }
        })
    }

    /// Async form of [`or_with`](Self::or_with).
    pub fn or_async<A, AFut>(self, alternate: A) -> AsyncOutcome<impl Future<Output = Self>>
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = Self>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => Self::Success(value),
                Self::Failure(_) => resolve(alternate(), "or_async").await,
            }
        })
    }

    /// Async form of [`and_with`](Self::and_with). The receiver's failure wins
    /// and the producer's future is never created for it.
    pub fn and_async<O, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = Outcome<O, F>>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(left) => resolve(other(), "and_async").await.map(|right| combine(left, right)),
                Self::Failure(failure) => Outcome::Failure(failure),
            }
        })
    }
}

impl<T, F: fmt::Display> Outcome<T, F> {
    /// Async form of [`then_text`](Self::then_text). Both failure types are
    /// narrowed to text.
    pub fn then_text_async<U, G, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = TextOutcome<U>>>
    where
        G: fmt::Display,
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = Outcome<U, G>>,
    {
        AsyncOutcome::new(async move {
            match self {
                Self::Success(value) => resolve(operation(value), "then_text_async").await.into_text(),
                Self::Failure(failure) => Outcome::Failure(failure.to_string()),
            }
        })
    }
}

// =============================================================================
// Asynchronous receiver
// =============================================================================

impl<T, F, Fut> AsyncOutcome<Fut>
where
    Fut: Future<Output = Outcome<T, F>>,
{
    /// Resolves to [`Outcome::is_success`].
    pub async fn is_success(self) -> bool {
        resolve(self.inner, "is_success").await.is_success()
    }

    /// Resolves to [`Outcome::is_failure`].
    pub async fn is_failure(self) -> bool {
        resolve(self.inner, "is_failure").await.is_failure()
    }

    /// Resolves to [`Outcome::fold`].
    pub async fn fold<U, S, R>(self, on_success: S, on_failure: R) -> U
    where
        S: FnOnce(T) -> U,
        R: FnOnce(F) -> U,
    {
        resolve(self.inner, "fold").await.fold(on_success, on_failure)
    }

    /// Resolves to [`Outcome::fold_async`].
    pub async fn fold_async<U, S, SFut, R, RFut>(self, on_success: S, on_failure: R) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        R: FnOnce(F) -> RFut,
        RFut: Future<Output = U>,
    {
        resolve(self.inner, "fold_async")
            .await
            .fold_async(on_success, on_failure)
            .await
    }

    /// Resolves to [`Outcome::value_or`].
    pub async fn value_or(self, alternate: T) -> T {
        resolve(self.inner, "value_or").await.value_or(alternate)
    }

    /// Resolves to [`Outcome::value_or_with`].
    pub async fn value_or_with<A>(self, alternate: A) -> T
    where
        A: FnOnce() -> T,
    {
        resolve(self.inner, "value_or_with").await.value_or_with(alternate)
    }

    /// Resolves to [`Outcome::value_or_with_async`].
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

    /// Resolves to [`Outcome::into_result`].
    pub async fn into_result(self) -> Result<T, F> {
        resolve(self.inner, "into_result").await.into_result()
    }

    /// Lifted [`Outcome::map`].
    pub fn map<U, Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        Op: FnOnce(T) -> U,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "map").await.map(operation) })
    }

    /// Lifted [`Outcome::map_async`].
    pub fn map_async<U, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = U>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "map_async").await.map_async(operation).await })
    }

    /// Lifted [`Outcome::then`].
    pub fn then<U, Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        Op: FnOnce(T) -> Outcome<U, F>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "then").await.then(operation) })
    }

    /// Lifted [`Outcome::then_async`].
    pub fn then_async<U, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = Outcome<U, F>>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "then_async").await.then_async(operation).await })
    }

    /// Lifted [`Outcome::then_into`].
    pub fn then_into<U, G, Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, G>>>
    where
        F: Into<G>,
        Op: FnOnce(T) -> Outcome<U, G>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "then_into").await.then_into(operation) })
    }

    /// Lifted [`Outcome::then_into_async`].
    pub fn then_into_async<U, G, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<U, G>>>
    where
        F: Into<G>,
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = Outcome<U, G>>,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "then_into_async")
                .await
                .then_into_async(operation)
                .await
        })
    }

    /// Lifted [`Outcome::tap`].
    pub fn tap<Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(&T),
    {
        AsyncOutcome::new(async move { resolve(self.inner, "tap").await.tap(operation) })
    }

    /// Lifted [`Outcome::tap_async`].
    pub fn tap_async<Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(&T) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "tap_async").await.tap_async(operation).await })
    }

    /// Lifted [`Outcome::else_map`].
    pub fn else_map<Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(F) -> T,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "else_map").await.else_map(operation) })
    }

    /// Lifted [`Outcome::else_map_async`].
    pub fn else_map_async<Op, TFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(F) -> TFut,
        TFut: Future<Output = T>,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "else_map_async")
                .await
                .else_map_async(operation)
                .await
        })
    }

    /// Lifted [`Outcome::else_then`].
    pub fn else_then<Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(F) -> Outcome<T, F>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "else_then").await.else_then(operation) })
    }

    /// Lifted [`Outcome::else_then_async`].
    pub fn else_then_async<Op, SFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(F) -> SFut,
        SFut: Future<Output = Outcome<T, F>>,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "else_then_async")
                .await
                .else_then_async(operation)
                .await
        })
    }

    /// Lifted [`Outcome::else_tap`].
    pub fn else_tap<Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(&F),
    {
        AsyncOutcome::new(async move { resolve(self.inner, "else_tap").await.else_tap(operation) })
    }

    /// Lifted [`Outcome::else_tap_async`].
    pub fn else_tap_async<Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Op: FnOnce(&F) -> UFut,
        UFut: Future<Output = ()>,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "else_tap_async")
                .await
                .else_tap_async(operation)
                .await
        })
    }

    /// Lifted [`Outcome::map_failure`].
    pub fn map_failure<G, Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, G>>>
    where
        Op: FnOnce(F) -> G,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "map_failure").await.map_failure(operation) })
    }

    /// Lifted [`Outcome::filter`].
    pub fn filter<P>(self, predicate: P, failure: F) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        P: FnOnce(&T) -> bool,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "filter").await.filter(predicate, failure) })
    }

    /// Lifted [`Outcome::filter_with`].
    pub fn filter_with<P, Op>(self, predicate: P, failure: Op) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        P: FnOnce(&T) -> bool,
        Op: FnOnce(T) -> F,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "filter_with").await.filter_with(predicate, failure) })
    }

    /// Lifted [`Outcome::filter_async`].
    pub fn filter_async<P, PFut>(self, predicate: P, failure: F) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "filter_async")
                .await
                .filter_async(predicate, failure)
                .await
        })
    }

    /// Lifted [`Outcome::filter_with_async`].
    pub fn filter_with_async<P, PFut, Op>(
        self,
        predicate: P,
        failure: Op,
    ) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        Op: FnOnce(T) -> F,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "filter_with_async")
                .await
                .filter_with_async(predicate, failure)
                .await
        })
    }

    /// Lifted [`Outcome::or`].
    pub fn or(self, alternate: Outcome<T, F>) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>> {
        AsyncOutcome::new(async move { resolve(self.inner, "or").await.or(alternate) })
    }

    /// Lifted [`Outcome::or_with`].
    pub fn or_with<A>(self, alternate: A) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        A: FnOnce() -> Outcome<T, F>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "or_with").await.or_with(alternate) })
    }

    /// Lifted [`Outcome::or_async`].
    pub fn or_async<A, AFut>(self, alternate: A) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = Outcome<T, F>>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "or_async").await.or_async(alternate).await })
    }

    /// Lifted [`Outcome::and`].
    pub fn and<O, U, C>(self, other: Outcome<O, F>, combine: C) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "and").await.and(other, combine) })
    }

    /// Lifted [`Outcome::and_with`].
    pub fn and_with<O, U, P, C>(self, other: P, combine: C) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        P: FnOnce() -> Outcome<O, F>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "and_with").await.and_with(other, combine) })
    }

    /// Lifted [`Outcome::and_async`].
    pub fn and_async<O, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = Outcome<O, F>>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "and_async")
                .await
                .and_async(other, combine)
                .await
        })
    }

    /// Lifted [`Outcome::and_value`].
    pub fn and_value<O, U, C>(self, other: O, combine: C) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "and_value").await.and_value(other, combine) })
    }

    /// Lifted [`Outcome::and_value_with`].
    pub fn and_value_with<O, U, P, C>(self, other: P, combine: C) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        P: FnOnce() -> O,
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "and_value_with").await.and_value_with(other, combine) })
    }

    /// Lifted [`Outcome::and_value_with_async`].
    pub fn and_value_with_async<O, U, P, PFut, C>(
        self,
        other: P,
        combine: C,
    ) -> AsyncOutcome<impl Future<Output = Outcome<U, F>>>
    where
        P: FnOnce() -> PFut,
        PFut: Future<Output = O>,
        C: FnOnce(T, O) -> U,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "and_value_with_async")
                .await
                .and_value_with_async(other, combine)
                .await
        })
    }
}

impl<T, F, Fut> AsyncOutcome<Fut>
where
    F: fmt::Display,
    Fut: Future<Output = Outcome<T, F>>,
{
    /// Lifted [`Outcome::into_text`].
    pub fn into_text(self) -> AsyncOutcome<impl Future<Output = TextOutcome<T>>> {
        AsyncOutcome::new(async move { resolve(self.inner, "into_text").await.into_text() })
    }

    /// Lifted [`Outcome::then_text`].
    pub fn then_text<U, G, Op>(self, operation: Op) -> AsyncOutcome<impl Future<Output = TextOutcome<U>>>
    where
        G: fmt::Display,
        Op: FnOnce(T) -> Outcome<U, G>,
    {
        AsyncOutcome::new(async move { resolve(self.inner, "then_text").await.then_text(operation) })
    }

    /// Lifted [`Outcome::then_text_async`].
    pub fn then_text_async<U, G, Op, UFut>(self, operation: Op) -> AsyncOutcome<impl Future<Output = TextOutcome<U>>>
    where
        G: fmt::Display,
        Op: FnOnce(T) -> UFut,
        UFut: Future<Output = Outcome<U, G>>,
    {
        AsyncOutcome::new(async move {
            resolve(self.inner, "then_text_async")
                .await
                .then_text_async(operation)
                .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[tokio::test]
    async fn test_then_async_short_circuits_on_failure() {
        let called = Cell::new(false);
        let result = Outcome::<i32, &str>::Failure("early")
            .then_async(|x| {
                called.set(true);
                async move { Outcome::Success(x) }
            })
            .await;
        assert_eq!(result, Outcome::Failure("early"));
        assert!(!called.get());
    }

    #[rstest]
    #[tokio::test]
    async fn test_and_async_left_failure_wins() {
        let called = Cell::new(false);
        let result = Outcome::<i32, &str>::Failure("left")
            .and_async(
                || {
                    called.set(true);
                    async { Outcome::<i32, &str>::Failure("right") }
                },
                |a, b| a + b,
            )
            .await;
        assert_eq!(result, Outcome::Failure("left"));
        assert!(!called.get());
    }

    #[rstest]
    #[tokio::test]
    async fn test_and_value_with_async_skips_producer_on_failure() {
        let called = Cell::new(false);
        let result = Outcome::<i32, &str>::Failure("no price")
            .into_async()
            .and_value_with_async(
                || {
                    called.set(true);
                    async { 2 }
                },
                |a, b| a * b,
            )
            .await;
        assert_eq!(result, Outcome::Failure("no price"));
        assert!(!called.get());

        let total = Outcome::<i32, &str>::Success(40)
            .and_value_with_async(|| async { 2 }, |a, b| a * b)
            .await;
        assert_eq!(total, Outcome::Success(80));
    }

    #[rstest]
    #[tokio::test]
    async fn test_filter_with_async_builds_failure_from_rejected_value() {
        let result = Outcome::<i32, String>::Success(7)
            .filter_with_async(
                |x| {
                    let even = x % 2 == 0;
                    async move { even }
                },
                |x| format!("{x} is odd"),
            )
            .await;
        assert_eq!(result, Outcome::Failure("7 is odd".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn test_then_text_async_narrows_both_failures() {
        let step = |x: i32| async move {
            if x > 0 { Outcome::Success(x) } else { Outcome::<i32, Error>::fail("not positive") }
        };
        let early = Outcome::<i32, i32>::Failure(404).then_text_async(step).await;
        let late = Outcome::<i32, i32>::Success(-1).into_async().then_text_async(step).await;
        assert_eq!(early, Outcome::Failure("404".to_string()));
        assert_eq!(late, Outcome::Failure("not positive".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn test_else_map_async_recovers() {
        let result = Outcome::<usize, &str>::Failure("four")
            .into_async()
            .else_map_async(|failure| async move { failure.len() })
            .await;
        assert_eq!(result, Outcome::Success(4));
    }

    #[rstest]
    #[tokio::test]
    async fn test_into_text_on_pending_outcome() {
        let text = Outcome::<i32>::Failure(Error::new("timeout")).into_async().into_text().await;
        assert_eq!(text, Outcome::Failure("timeout".to_string()));
    }
}
