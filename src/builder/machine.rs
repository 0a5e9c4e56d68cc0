//! Builder for constructing filter state machines.

use crate::builder::error::BuildError;
use crate::config::{BrightnessFormula, FilterConfig};
use crate::core::FilterState;
use crate::machine::FilterStateMachine;

/// Builder for constructing a [`FilterStateMachine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use filterstate::builder::FilterMachineBuilder;
/// use filterstate::config::BrightnessFormula;
///
/// let mut machine = FilterMachineBuilder::new()
///     .brightness(BrightnessFormula::offset_only())
///     .build()
///     .unwrap();
///
/// let state = machine.toggle_bright();
/// assert_eq!(state.bright_matrix().as_array()[4], 50.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterMachineBuilder {
    config: FilterConfig,
    initial: Option<FilterState>,
}

impl FilterMachineBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FilterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn brightness(mut self, formula: BrightnessFormula) -> Self {
        self.config.brightness = formula;
        self
    }

    pub fn gray_saturation(mut self, saturation: f32) -> Self {
        self.config.gray_saturation = saturation;
        self
    }

    /// Start from `state` instead of [`FilterState::empty`].
    pub fn initial(mut self, state: FilterState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the state machine.
    /// Returns every configuration violation at once.
    pub fn build(self) -> Result<FilterStateMachine, BuildError> {
        if let Err(errors) = self.config.validate() {
            for error in &errors {
                tracing::warn!(%error, "rejected filter configuration");
            }
            return Err(BuildError::InvalidConfig(errors));
        }

        let initial = self.initial.unwrap_or_default();
        if !initial.is_consistent() {
            return Err(BuildError::InconsistentInitialState {
                mode: initial.mode(),
            });
        }

        let adjustments = self.config.adjustments();
        if initial.gray_active() && initial.gray_matrix() != &adjustments.gray_on {
            return Err(BuildError::MismatchedAdjustment { effect: "gray" });
        }
        if initial.bright_active() && initial.bright_matrix() != &adjustments.bright_on {
            return Err(BuildError::MismatchedAdjustment { effect: "brightness" });
        }

        Ok(FilterStateMachine::with_adjustments(initial, adjustments))
    }
}
