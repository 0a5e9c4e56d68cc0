//! Configuration error types.

use thiserror::Error;

/// Errors found while loading or validating a [`super::FilterConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for this schema
    #[error("Failed to parse filter configuration: {0}")]
    Parse(String),

    #[error("Brightness scale must be finite and positive (got {0})")]
    InvalidScale(f32),

    #[error("Brightness offset must be finite (got {0})")]
    InvalidOffset(f32),

    #[error("Gray saturation must be within 0..=1 (got {0})")]
    InvalidSaturation(f32),

    /// The "on" matrix of an effect equals the identity, so toggling it does nothing
    #[error("The {effect} effect is configured as a no-op")]
    NoOpEffect { effect: &'static str },
}
