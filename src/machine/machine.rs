//! State machine that runs filter commands.

use crate::core::{Adjustments, FilterState, State};
use crate::machine::transition::{Command, Transition, TransitionError};

/// Result of executing a single command
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The command ran and produced this state
    Transitioned(FilterState),

    /// The guard blocked the command; the state is unchanged
    Rejected { command: Command, reason: String },
}

/// State machine owning the filter state of one editing session.
///
/// # Example
///
/// ```rust
/// use filterstate::machine::{Command, FilterStateMachine, StepResult};
///
/// let mut machine = FilterStateMachine::new();
/// machine.toggle_gray();
/// machine.reset();
///
/// let result = machine.apply(Command::ToggleBright);
/// assert!(matches!(result, StepResult::Rejected { .. }));
/// assert!(machine.current_state().is_reverted());
/// ```
#[derive(Clone, Debug)]
pub struct FilterStateMachine {
    current: FilterState,
    transitions: [Transition; 3],
    adjustments: Adjustments,
    steps: usize,
}

impl Default for FilterStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStateMachine {
    /// Create a machine at [`FilterState::empty`] with default adjustments.
    pub fn new() -> Self {
        Self::with_adjustments(FilterState::empty(), Adjustments::default())
    }

    /// Create a machine from an initial state and explicit adjustments.
    pub fn with_adjustments(initial: FilterState, adjustments: Adjustments) -> Self {
        Self {
            current: initial,
            transitions: Transition::standard(),
            adjustments,
            steps: 0,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &FilterState {
        &self.current
    }

    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Number of commands applied so far, rejected ones included.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn transition_for(&self, command: Command) -> &Transition {
        &self.transitions[command.index()]
    }

    /// Whether `command` would change state right now (pure).
    pub fn can_execute(&self, command: Command) -> bool {
        self.transition_for(command).can_execute(&self.current)
    }

    /// Compute the result of `command` without committing it (pure).
    pub fn step(&self, command: Command) -> StepResult {
        let transition = self.transition_for(command);

        if !transition.can_execute(&self.current) {
            let reason = TransitionError::Rejected {
                command,
                mode: self.current.mode(),
            }
            .to_string();
            return StepResult::Rejected { command, reason };
        }

        StepResult::Transitioned(transition.run(&self.current, &self.adjustments))
    }

    /// Apply the result from [`step`](Self::step) to the machine.
    pub fn apply_result(&mut self, result: &StepResult) {
        self.steps += 1;
        match result {
            StepResult::Transitioned(next) => {
                tracing::debug!(
                    from = self.current.name(),
                    to = next.name(),
                    gray = next.is_gray_applied(),
                    bright = next.is_bright_applied(),
                    "filter state transitioned"
                );
                self.current = next.clone();
            }
            StepResult::Rejected { command, reason } => {
                tracing::debug!(%command, reason = reason.as_str(), "filter command ignored");
            }
        }
    }

    /// Run `command`, silently ignoring it if its guard blocks.
    pub fn apply(&mut self, command: Command) -> StepResult {
        let result = self.step(command);
        self.apply_result(&result);
        result
    }

    /// Run `command`, returning an error instead of ignoring it.
    pub fn try_apply(&mut self, command: Command) -> Result<&FilterState, TransitionError> {
        match self.step(command) {
            result @ StepResult::Transitioned(_) => {
                self.apply_result(&result);
                Ok(&self.current)
            }
            StepResult::Rejected { .. } => Err(TransitionError::Rejected {
                command,
                mode: self.current.mode(),
            }),
        }
    }

    pub fn toggle_gray(&mut self) -> &FilterState {
        self.apply(Command::ToggleGray);
        &self.current
    }

    pub fn toggle_bright(&mut self) -> &FilterState {
        self.apply(Command::ToggleBright);
        &self.current
    }

    pub fn reset(&mut self) -> &FilterState {
        self.apply(Command::Reset);
        &self.current
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn revert_restore_cycle() {
        let mut machine = FilterStateMachine::new();

        machine.toggle_gray();
        let edited = machine.toggle_bright().clone();

        let reverted = machine.reset().clone();
        assert!(reverted.is_reverted());
        assert!(reverted.composed_filter().is_identity());
        assert_eq!(reverted.saved_composed_filter(), edited.composed_filter());

        // Rejected while reverted
        machine.toggle_gray();
        machine.toggle_bright();
        assert_eq!(machine.current_state(), &reverted);

        let restored = machine.reset();
        assert_eq!(restored, &edited);
    }
}
