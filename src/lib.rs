//! # railway
//!
//! Composable substitutes for nullable values and thrown errors: an
//! [`Optional`], an [`Outcome`] and an [`Either`], all carrying the same
//! operator algebra in synchronous and asynchronous form.
//!
//! ## Overview
//!
//! - **Containers**: `Optional<T>`, `Outcome<T, F = Error>`, `Either<V, O>`
//! - **Operators**: `map`, `then`, `tap`, `else_*`, `or*`, `and*`, `filter`, `fold`, `value_or*`
//! - **Async lifting**: `*_async` twins and `Async*` wrappers for pending containers
//! - **Constructors**: tags (`Success(v).into()`) and free functions in [`link`]
//!
//! ## Feature Flags
//!
//! - `async` (default): the [`lift`] module
//! - `serde`: `Serialize`/`Deserialize` for every container and [`Error`]
//! - `tracing`: trace events when a lifted operator awaits
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! fn parse_port(text: &str) -> Outcome<u16> {
//!     text.parse::<u16>().map_err(Error::from_fault).into()
//! }
//!
//! let port = parse_port("8080")
//!     .filter(|port| *port >= 1024, Error::new("privileged port"))
//!     .value_or(3000);
//! assert_eq!(port, 8080);
//!
//! let fallback = parse_port("eighty")
//!     .or_with(|| parse_port("3000"))
//!     .fold(|port| port.to_string(), |error| error.to_string());
//! assert_eq!(fallback, "3000");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their tags, the error type and the extension
/// traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::error::Error;
    pub use crate::sequence::SequenceExt;

    #[cfg(feature = "async")]
    pub use crate::lift::{AsyncEither, AsyncOptional, AsyncOutcome, ContainerFutureExt};
}

pub mod container;
pub mod error;
pub mod link;
pub mod sequence;

#[cfg(feature = "async")]
pub mod lift;

pub use container::{Either, Optional, Outcome};
pub use error::Error;
