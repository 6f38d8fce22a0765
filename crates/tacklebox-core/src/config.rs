//! Caller-supplied settings for date formatting and parsing.
//!
//! The crate keeps no global state; a [`DateConfig`] is a plain value the
//! caller builds (or loads from TOML) and passes to the `*_with` variants of
//! the date helpers. Every field has a default, so partial documents work.
//!
//! ## Example Configuration
//!
//! ```toml
//! time_zone_label = "CET"
//! hour12 = false
//! extra_formats = ["%d.%m.%Y", "%Y%m%dT%H%M%S"]
//! ```
//!
//! ```rust
//! use tacklebox_core::DateConfig;
//!
//! let config = DateConfig::from_toml_str(r#"
//!     time_zone_label = "CET"
//!     hour12 = false
//! "#)?;
//! assert_eq!(config.time_zone_label, "CET");
//! assert!(config.extra_formats.is_empty());
//! # Ok::<(), tacklebox_core::Error>(())
//! ```

use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for [`format_date_with`](crate::dates::format_date_with) and
/// [`parse_date_with`](crate::dates::parse_date_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Label appended to formatted timestamps, e.g. `"UTC"` or `"PST"`.
    ///
    /// Timestamps are wall-clock values, so this is text only; no offset is
    /// applied.
    pub time_zone_label: String,

    /// Use a 12-hour clock with an AM/PM marker instead of a 24-hour clock.
    pub hour12: bool,

    /// Additional `strftime` layouts tried by `parse_date_with` before the
    /// built-in ones. A layout without time fields parses as midnight.
    pub extra_formats: Vec<String>,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            time_zone_label: "UTC".to_string(),
            hour12: true,
            extra_formats: Vec::new(),
        }
    }
}

impl DateConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] for malformed TOML and
    /// [`Error::Config`] when [`validate`](Self::validate) rejects a value.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        debug!(
            zone = %config.time_zone_label,
            hour12 = config.hour12,
            extra_formats = config.extra_formats.len(),
            "loaded date configuration"
        );
        Ok(config)
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the zone label is blank or contains
    /// control characters, or if an extra format is empty or is not a valid
    /// `strftime` layout.
    pub fn validate(&self) -> Result<()> {
        if self.time_zone_label.trim().is_empty() {
            return Err(Error::Config("time_zone_label must not be empty".to_string()));
        }
        if self.time_zone_label.chars().any(char::is_control) {
            return Err(Error::Config(
                "time_zone_label must not contain control characters".to_string(),
            ));
        }
        for format in &self.extra_formats {
            if format.trim().is_empty() {
                return Err(Error::Config("extra_formats entries must not be empty".to_string()));
            }
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(Error::Config(format!("invalid strftime layout '{format}'")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = DateConfig::default();
        assert_eq!(config.time_zone_label, "UTC");
        assert!(config.hour12);
        assert!(config.extra_formats.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DateConfig::from_toml_str("hour12 = false").unwrap();
        assert!(!config.hour12);
        assert_eq!(config.time_zone_label, "UTC");

        let empty = DateConfig::from_toml_str("").unwrap();
        assert_eq!(empty, DateConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = DateConfig::from_toml_str(
            r#"
            time_zone_label = "CET"
            hour12 = false
            extra_formats = ["%d.%m.%Y"]
            "#,
        )
        .unwrap();
        assert_eq!(config.time_zone_label, "CET");
        assert_eq!(config.extra_formats, vec!["%d.%m.%Y".to_string()]);
    }

    #[test]
    fn test_malformed_toml_is_serialization_error() {
        let err = DateConfig::from_toml_str("hour12 = \"yes\"").unwrap_err();
        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            r#"time_zone_label = "   ""#,
            r#"time_zone_label = "U\u0007TC""#,
            r#"extra_formats = [""]"#,
            r#"extra_formats = ["%Q-%Y"]"#,
        ];
        for text in cases {
            match DateConfig::from_toml_str(text) {
                Err(Error::Config(_)) => {},
                other => panic!("expected config error for {text}, got {other:?}"),
            }
        }
    }

    proptest! {
        #[test]
        fn test_alphanumeric_labels_validate(label in "[A-Za-z][A-Za-z0-9+-]{0,8}") {
            let config = DateConfig { time_zone_label: label, ..DateConfig::default() };
            prop_assert!(config.validate().is_ok());
        }
    }
}
