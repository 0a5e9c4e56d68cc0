//! Command execution around the pure core.
//!
//! # Key Concepts
//!
//! - **Commands**: `ToggleGray`, `ToggleBright` and `Reset`
//! - **Transitions**: bind each command to a guard and a pure action
//! - **State Machine**: owns the current state and commits results
//!
//! A command whose guard fails is a silent no-op through [`FilterStateMachine::apply`]
//! and an error through [`FilterStateMachine::try_apply`].

#[allow(clippy::module_inception)]
mod machine;
mod transition;

pub use machine::{FilterStateMachine, StepResult};
pub use transition::{Command, Transition, TransitionAction, TransitionError};
