//! Commands and the transitions they run.

use crate::core::{filter, Adjustments, FilterMode, FilterState, Guard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The three zero-argument commands a UI can issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    ToggleGray,
    ToggleBright,
    Reset,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::ToggleGray, Command::ToggleBright, Command::Reset];

    /// Position of this command in [`Command::ALL`] and in the transition table.
    pub const fn index(&self) -> usize {
        match self {
            Self::ToggleGray => 0,
            Self::ToggleBright => 1,
            Self::Reset => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleGray => "ToggleGray",
            Self::ToggleBright => "ToggleBright",
            Self::Reset => "Reset",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by the strict command API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("Command '{command}' is not available in {mode} mode")]
    Rejected { command: Command, mode: FilterMode },
}

/// Pure function computing the next state.
pub type TransitionAction = Arc<dyn Fn(&FilterState, &Adjustments) -> FilterState + Send + Sync>;

/// A command bound to its guard and pure action.
pub struct Transition {
    pub command: Command,
    pub guard: Option<Guard<FilterState>>,
    pub action: TransitionAction,
}

impl Transition {
    /// Check if this transition can run from the current state (pure)
    pub fn can_execute(&self, current: &FilterState) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    /// Run the action without consulting the guard.
    pub fn run(&self, current: &FilterState, adjustments: &Adjustments) -> FilterState {
        (self.action)(current, adjustments)
    }

    /// The standard table, ordered like [`Command::ALL`]: toggles are
    /// editable-only, reset is always allowed.
    pub fn standard() -> [Transition; 3] {
        [
            Transition {
                command: Command::ToggleGray,
                guard: Some(Guard::editable()),
                action: Arc::new(filter::toggle_gray),
            },
            Transition {
                command: Command::ToggleBright,
                guard: Some(Guard::editable()),
                action: Arc::new(filter::toggle_bright),
            },
            Transition {
                command: Command::Reset,
                guard: None,
                action: Arc::new(|state: &FilterState, _: &Adjustments| filter::reset(state)),
            },
        ]
    }
}

impl Clone for Transition {
    fn clone(&self) -> Self {
        Self {
            command: self.command,
            guard: self.guard.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("command", &self.command)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
