//! Filterstate: a pure functional state machine for image filter toggles
//!
//! Filterstate keeps the presentation state of a simple photo editor: a
//! grayscale effect, a brightness effect, and a revert/restore action. The
//! core is a set of pure transitions over an immutable [`FilterState`]; the
//! [`session`] module wraps them in a single owner that publishes one snapshot
//! per command.
//!
//! # Core Concepts
//!
//! - **ColorMatrix**: 4×5 affine RGBA transform, composed by matrix product
//! - **FilterState**: immutable value replaced wholesale on every transition
//! - **Guards**: pure predicates that turn toggles into no-ops while reverted
//! - **Session**: snapshot publication over a `tokio::sync::watch` channel
//!
//! The composed filter always applies brightness first and grayscale second.
//!
//! # Example
//!
//! ```rust
//! use filterstate::core::ColorMatrix;
//! use filterstate::machine::FilterStateMachine;
//!
//! let mut machine = FilterStateMachine::new();
//! machine.toggle_bright();
//! let state = machine.toggle_gray().clone();
//!
//! let expected = ColorMatrix::compose(
//!     &ColorMatrix::saturation(0.0),
//!     &ColorMatrix::lighting(1.2, 10.0),
//! );
//! assert_eq!(state.composed_filter(), &expected);
//!
//! // Revert shows the original image, restore brings the filters back.
//! assert!(machine.reset().composed_filter().is_identity());
//! assert_eq!(machine.reset(), &state);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use builder::{BuildError, FilterMachineBuilder};
pub use config::{BrightnessFormula, ConfigError, FilterConfig};
pub use crate::core::{ColorMatrix, FilterMode, FilterState, Guard, State};
pub use machine::{Command, FilterStateMachine, StepResult, TransitionError};
pub use session::FilterSession;
pub use view::ControlsView;
