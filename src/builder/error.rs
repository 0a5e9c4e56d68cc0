//! Build errors for the filter machine builder.

use crate::config::ConfigError;
use crate::core::FilterMode;
use thiserror::Error;

/// Errors that can occur when building a filter state machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Invalid filter configuration ({} violation(s))", .0.len())]
    InvalidConfig(Vec<ConfigError>),

    #[error("Initial state violates the {mode} mode invariants")]
    InconsistentInitialState { mode: FilterMode },

    /// The initial state has an effect on with a matrix other than the configured one
    #[error("Initial {effect} matrix does not match the configured adjustment")]
    MismatchedAdjustment { effect: &'static str },
}

impl BuildError {
    /// Configuration violations carried by this error, if any.
    pub fn violations(&self) -> &[ConfigError] {
        match self {
            Self::InvalidConfig(errors) => errors,
            Self::InconsistentInitialState { .. } | Self::MismatchedAdjustment { .. } => &[],
        }
    }
}
