use thiserror::Error;

use crate::resolver::ResourceId;

/// Lookup failure reported by a [`crate::ResourceResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("resource not found: {id}")]
    NotFound { id: ResourceId },
}

/// A color state list could not be taken apart or put back together.
///
/// Never escapes [`crate::DesaturatedResources`]; it is logged and the raw
/// list is returned instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("unsupported color state list shape: {shape}")]
    Unsupported { shape: String },

    #[error("state/color length mismatch: {states} states, {colors} colors")]
    LengthMismatch { states: usize, colors: usize },
}

impl ExtractError {
    #[must_use]
    pub fn unsupported(shape: impl Into<String>) -> Self {
        Self::Unsupported {
            shape: shape.into(),
        }
    }
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}
