//! Small iterator helpers.
//!
//! These sit beside the containers for composing side effects over lazy
//! sequences. Nothing in the container algebra depends on them.
//!
//! # Examples
//!
//! ```rust
//! use railway::sequence::{SequenceExt, enumerate};
//!
//! let mut seen = Vec::new();
//! enumerate("test")
//!     .iterate(|item| seen.push(item.len()))
//!     .evaluate_and_ignore();
//! assert_eq!(seen, vec![4]);
//! ```

use std::iter::{Inspect, Once, once};

/// Wraps a single value as a one-element sequence.
#[inline]
pub fn enumerate<T>(value: T) -> Once<T> {
    once(value)
}

/// Side effects and materialisation for any iterator.
pub trait SequenceExt: Iterator + Sized {
    /// Runs `action` on each item as it passes, yielding the item unchanged.
    ///
    /// Lazy: nothing runs until the sequence is consumed.
    fn iterate<A>(self, action: A) -> Inspect<Self, A>
    where
        A: FnMut(&Self::Item),
    {
        self.inspect(action)
    }

    /// Forces the sequence into a collection that is never re-evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::sequence::{SequenceExt, enumerate};
    ///
    /// let mut runs = 0;
    /// let items = enumerate(7).iterate(|_| runs += 1).evaluate();
    /// assert_eq!(items.iter().min(), Some(&7));
    /// assert_eq!(items.iter().max(), Some(&7));
    /// assert_eq!(runs, 1);
    /// ```
    fn evaluate(self) -> Vec<Self::Item> {
        self.collect()
    }

    /// Forces the sequence and drops the items.
    fn evaluate_and_ignore(self) {
        self.for_each(drop);
    }
}

impl<I: Iterator> SequenceExt for I {}
