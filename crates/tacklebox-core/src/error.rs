//! Error types for tacklebox-core operations.
//!
//! Most helpers in this crate cannot fail. The few that can fall into one of
//! three policies, and each function keeps the policy it documents:
//!
//! - **Hard fail**: the helper returns [`Error`], e.g. [`array_median`] on an
//!   empty slice.
//! - **Sentinel**: numeric reducers return `f64::NAN` instead of an error,
//!   e.g. [`gcd`] with no arguments.
//! - **Best effort**: the helper returns `None`, e.g. [`parse_date`].
//!
//! ```rust
//! use tacklebox_core::{Error, arrays::array_median};
//!
//! match array_median(&[]) {
//!     Err(Error::EmptyInput(what)) => println!("nothing to do: {what}"),
//!     Err(e) => eprintln!("unexpected: {e} ({})", e.category()),
//!     Ok(median) => println!("median = {median}"),
//! }
//! ```
//!
//! [`array_median`]: crate::arrays::array_median
//! [`gcd`]: crate::numbers::gcd
//! [`parse_date`]: crate::dates::parse_date

use thiserror::Error;

/// The main error type for tacklebox-core operations.
///
/// Variants carry a human-readable message describing the offending input.
/// `Display` is suitable for end users; `Debug` keeps the variant name.
#[derive(Error, Debug)]
pub enum Error {
    /// A required sequence was empty.
    ///
    /// Raised by aggregate helpers that have no meaningful answer for an
    /// empty slice ([`array_median`](crate::arrays::array_median),
    /// [`find_min`](crate::arrays::find_min),
    /// [`find_max`](crate::arrays::find_max)).
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// An argument was outside the range a helper accepts.
    ///
    /// ## Common Causes
    ///
    /// - A chunk size of zero
    /// - A digit count outside `0..=100` for fixed/precision formatting
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration is invalid.
    ///
    /// Produced by [`DateConfig::validate`](crate::config::DateConfig::validate)
    /// when a loaded configuration contains unusable values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    ///
    /// Wraps TOML and JSON errors raised while converting configuration or
    /// values.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An operation required an async runtime that was not available.
    ///
    /// [`debounce`](crate::functions::debounce) must be created from within
    /// a tokio runtime.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check whether the error was caused by the arguments the caller passed.
    ///
    /// Returns `true` for [`Error::EmptyInput`] and [`Error::InvalidArgument`].
    /// Retrying such a call with the same input always fails the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacklebox_core::Error;
    ///
    /// assert!(Error::EmptyInput("values".to_string()).is_caller_error());
    /// assert!(!Error::Runtime("no reactor".to_string()).is_caller_error());
    /// ```
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::EmptyInput(_) | Self::InvalidArgument(_))
    }

    /// Get the error category as a string identifier.
    ///
    /// Returns one of `"empty_input"`, `"invalid_argument"`, `"config"`,
    /// `"serialization"`, `"runtime"` or `"other"`. Useful as a stable field
    /// in structured logs.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::EmptyInput(_) => "empty_input",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Runtime(_) => "runtime",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_error_display_formatting() {
        // Given: Different error variants
        let errors = vec![
            (Error::EmptyInput("array".to_string()), "Empty input"),
            (Error::InvalidArgument("size".to_string()), "Invalid argument"),
            (Error::Config("zone".to_string()), "Configuration error"),
            (Error::Serialization("toml".to_string()), "Serialization error"),
            (Error::Runtime("reactor".to_string()), "Runtime error"),
        ];

        for (error, prefix) in errors {
            // When: Converting to string
            let error_string = error.to_string();

            // Then: Should carry the category prefix
            assert!(
                error_string.starts_with(prefix),
                "{error_string} should start with {prefix}"
            );
        }

        assert_eq!(Error::Other("plain".to_string()).to_string(), "plain");
    }

    #[test]
    fn test_error_categories() {
        let error_categories = vec![
            (Error::EmptyInput(String::new()), "empty_input"),
            (Error::InvalidArgument(String::new()), "invalid_argument"),
            (Error::Config(String::new()), "config"),
            (Error::Serialization(String::new()), "serialization"),
            (Error::Runtime(String::new()), "runtime"),
            (Error::Other(String::new()), "other"),
        ];

        for (error, expected_category) in error_categories {
            assert_eq!(error.category(), expected_category);
        }
    }

    #[test]
    fn test_caller_errors() {
        assert!(Error::EmptyInput("x".into()).is_caller_error());
        assert!(Error::InvalidArgument("x".into()).is_caller_error());
        assert!(!Error::Config("x".into()).is_caller_error());
        assert!(!Error::Serialization("x".into()).is_caller_error());
        assert!(!Error::Other("x".into()).is_caller_error());
    }

    #[test]
    fn test_error_from_toml_error() {
        let err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let error: Error = err.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = err.into();
        match error {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn test_empty_input_with_arbitrary_messages(msg in r".{0,200}") {
            let error = Error::EmptyInput(msg.clone());
            let error_string = error.to_string();

            prop_assert!(error_string.contains("Empty input"));
            prop_assert!(error_string.contains(&msg));
            prop_assert_eq!(error.category(), "empty_input");
            prop_assert!(error.is_caller_error());
        }

        #[test]
        fn test_other_error_with_arbitrary_messages(msg in r".{0,200}") {
            let error = Error::Other(msg.clone());

            prop_assert_eq!(error.to_string(), msg);
            prop_assert_eq!(error.category(), "other");
            prop_assert!(!error.is_caller_error());
        }
    }
}
