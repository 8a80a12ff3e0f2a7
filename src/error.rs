//! The failure descriptor carried by [`Outcome`](crate::container::Outcome).
//!
//! An [`Error`] always has a message. It may additionally hold the fault it
//! was built from (any `std::error::Error + Send + Sync`), which stays
//! reachable through [`Error::fault`] and `std::error::Error::source`.
//!
//! # Examples
//!
//! ```rust
//! use railway::Error;
//!
//! let from_text = Error::from("user not found");
//! assert_eq!(from_text.message(), "user not found");
//! assert!(!from_text.has_fault());
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
//! let from_fault = Error::from_fault(io);
//! assert_eq!(from_fault.message(), "config.toml missing");
//! assert!(from_fault.has_fault());
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A shared, thread-safe fault.
type Fault = Arc<dyn StdError + Send + Sync + 'static>;

/// An immutable failure descriptor: a message and an optional originating fault.
///
/// The message is always resolvable. When an `Error` is built from a fault
/// alone, the fault's `Display` output becomes the message.
///
/// Two errors are equal when their messages are equal and either both or
/// neither carry a fault.
#[derive(Clone)]
pub struct Error {
    message: String,
    fault: Option<Fault>,
}

impl Error {
    /// Creates an error from a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Error;
    ///
    /// let error = Error::new("invalid email");
    /// assert_eq!(error.to_string(), "invalid email");
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fault: None,
        }
    }

    /// Creates an error from a fault, taking the fault's text as the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Error;
    ///
    /// let parse = "abc".parse::<i32>().unwrap_err();
    /// let error = Error::from_fault(parse);
    /// assert_eq!(error.message(), "invalid digit found in string");
    /// ```
    pub fn from_fault<E>(fault: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: fault.to_string(),
            fault: Some(Arc::new(fault)),
        }
    }

    /// Creates an error carrying both an explicit message and a fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Error;
    ///
    /// let parse = "abc".parse::<i32>().unwrap_err();
    /// let error = Error::with_fault("age must be a number", parse);
    /// assert_eq!(error.message(), "age must be a number");
    /// assert!(error.has_fault());
    /// ```
    pub fn with_fault<E>(message: impl Into<String>, fault: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            fault: Some(Arc::new(fault)),
        }
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the error carries an originating fault.
    #[inline]
    pub const fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Returns the originating fault, if any.
    #[inline]
    pub fn fault(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.fault.as_deref()
    }

    /// Returns the originating fault downcast to `E`, if it is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Error;
    /// use std::num::ParseIntError;
    ///
    /// let error = Error::from_fault("x".parse::<u8>().unwrap_err());
    /// assert!(error.downcast_fault::<ParseIntError>().is_some());
    /// assert!(error.downcast_fault::<std::io::Error>().is_none());
    /// ```
    pub fn downcast_fault<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.fault().and_then(|fault| fault.downcast_ref::<E>())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Error");
        debug.field("message", &self.message);
        if let Some(fault) = &self.fault {
            debug.field("fault", fault);
        }
        debug.finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.fault
            .as_deref()
            .map(|fault| fault as &(dyn StdError + 'static))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.has_fault() == other.has_fault()
    }
}

impl Eq for Error {}

// =============================================================================
// From Implementations
// =============================================================================

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Error {
    fn from(fault: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            message: fault.to_string(),
            fault: Some(Arc::from(fault)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(fault: std::io::Error) -> Self {
        Self::from_fault(fault)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

// Only the message crosses a serialization boundary; faults are process-local.
#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.message)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Error {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

static_assertions::assert_impl_all!(Error: Send, Sync, Clone);
