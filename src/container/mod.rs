//! The three containers and their tags.
//!
//! - [`Optional`]: a value that may be absent
//! - [`Outcome`]: a success value or a failure
//! - [`Either`]: a value that is one of two types
//!
//! All three share one operator vocabulary, so moving a chain from one
//! container to another only changes the constructors:
//!
//! | Operation | `Optional` | `Outcome` | `Either` |
//! |---|---|---|---|
//! | transform | `map` | `map` | `map` |
//! | chain | `then` | `then` | `then` |
//! | observe | `tap` | `tap` | `tap` |
//! | recover | `else_map` / `else_then` | `else_map` / `else_then` | `else_map` / `else_then` |
//! | fallback | `or` / `or_with` | `or` / `or_with` | `or` / `or_with` |
//! | combine | `and` / `and_with` | `and` / `and_with` | `and` / `and_with` |
//! | leave | `fold` / `value_or` | `fold` / `value_or` | `fold` / `value_or` |
//!
//! # Examples
//!
//! ```rust
//! use railway::container::{Optional, Outcome};
//!
//! let port: Outcome<u16, String> = Optional::maybe(std::env::var("PORT_THAT_IS_NOT_SET").ok())
//!     .success_or("PORT is not set".to_string())
//!     .then(|text| text.parse::<u16>().map_err(|error| error.to_string()).into())
//!     .else_map(|_| 8080);
//!
//! assert_eq!(port, Outcome::Success(8080));
//! ```

mod either;
mod optional;
mod outcome;
mod tagged;

pub use either::Either;
pub use optional::Optional;
pub use outcome::{Completion, Outcome, TextOutcome};
pub use tagged::{Failure, Nothing, Other, Success, Value};
