#![forbid(unsafe_code)]

//! Construction-time settings for a dark-mode resource view.
//!
//! # Loading
//!
//! ```toml
//! # dusk.toml
//! dark_mode = true
//! amount = 0.25
//! threshold = 0.75
//! ```
//!
//! ```rust,ignore
//! let config = DarkModeConfig::from_toml_file("dusk.toml")?;
//! let config = DarkModeConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! Missing fields take the built-in defaults: dark mode off, amount
//! [`DEFAULT_DESATURATION_AMOUNT`], threshold
//! [`DEFAULT_DESATURATION_THRESHOLD`].

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use dusk_color::{DEFAULT_DESATURATION_AMOUNT, DEFAULT_DESATURATION_THRESHOLD, Desaturation};

#[cfg(feature = "config")]
use crate::error::ConfigError;

/// Settings for [`crate::DesaturatedResources`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct DarkModeConfig {
    /// Whether colors are desaturated at all.
    pub dark_mode: bool,

    /// Saturation removed from colors above the threshold, `[0, 1]`.
    pub amount: f32,

    /// Saturation threshold and floor, `[0, 1]`.
    pub threshold: f32,
}

impl Default for DarkModeConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            amount: DEFAULT_DESATURATION_AMOUNT,
            threshold: DEFAULT_DESATURATION_THRESHOLD,
        }
    }
}

impl DarkModeConfig {
    /// Default parameters with dark mode set as given.
    pub fn dark(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// The desaturation parameters, clamped into range.
    pub fn desaturation(&self) -> Desaturation {
        Desaturation::new(self.amount, self.threshold)
    }

    /// Collect every field that is out of range.
    ///
    /// An empty vector means the config is valid. Out-of-range values would
    /// otherwise be clamped silently by [`DarkModeConfig::desaturation`].
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.amount) {
            errors.push(format!("amount must be in [0, 1], got {}", self.amount));
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(format!(
                "threshold must be in [0, 1], got {}",
                self.threshold
            ));
        }

        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = DarkModeConfig::default();
        assert!(!config.dark_mode);
        assert_eq!(config.amount, 0.25);
        assert_eq!(config.threshold, 0.75);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn dark_keeps_default_params() {
        let config = DarkModeConfig::dark(true);
        assert!(config.dark_mode);
        assert_eq!(config.desaturation(), Desaturation::default());
    }

    #[test]
    fn validate_catches_out_of_range_amount() {
        let config = DarkModeConfig {
            amount: 1.5,
            ..DarkModeConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("amount"));
    }

    #[test]
    fn validate_catches_nan_threshold() {
        let config = DarkModeConfig {
            threshold: f32::NAN,
            ..DarkModeConfig::default()
        };
        assert!(config.validate().iter().any(|e| e.contains("threshold")));
    }

    #[test]
    fn desaturation_clamps_invalid_values() {
        let config = DarkModeConfig {
            dark_mode: true,
            amount: -3.0,
            threshold: 9.0,
        };
        let d = config.desaturation();
        assert_eq!(d.amount(), 0.0);
        assert_eq!(d.threshold(), 1.0);
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_partial_uses_defaults() {
        let config = DarkModeConfig::from_toml_str("dark_mode = true\namount = 0.5\n").unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.amount, 0.5);
        assert_eq!(config.threshold, 0.75);
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_rejects_out_of_range() {
        let err = DarkModeConfig::from_toml_str("threshold = 2.0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_rejects_garbage() {
        let err = DarkModeConfig::from_toml_str("dark_mode = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_round_trip() {
        let config = DarkModeConfig::from_json_str(
            r#"{"dark_mode": true, "amount": 0.5, "threshold": 0.5}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            DarkModeConfig {
                dark_mode: true,
                amount: 0.5,
                threshold: 0.5,
            }
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_string_reloads() {
        let config = DarkModeConfig::dark(true);
        let text = config.to_toml_string().unwrap();
        assert_eq!(DarkModeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = DarkModeConfig::from_toml_file("/nonexistent/dusk.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
