//! Control presentation for the UI collaborator.
//!
//! While reverted the effect controls are disabled and their labels show what
//! a restore would bring back. Otherwise they follow the live flags.

use crate::core::FilterState;
use serde::{Deserialize, Serialize};

/// What pressing the grayscale control would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrayAction {
    Apply,
    Remove,
}

/// What pressing the brightness control would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrightAction {
    Increase,
    Decrease,
}

/// What pressing the reset control would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetAction {
    Revert,
    Restore,
}

impl ResetAction {
    pub fn is_restore(&self) -> bool {
        matches!(self, Self::Restore)
    }
}

/// One effect control: whether it is pressable and what it would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control<A> {
    pub enabled: bool,
    pub action: A,
}

/// Presentation of all three controls for one snapshot.
///
/// # Example
///
/// ```rust
/// use filterstate::core::FilterState;
/// use filterstate::view::{ControlsView, GrayAction, ResetAction};
///
/// let reverted = FilterState::empty().toggle_gray().reset();
/// let view = ControlsView::from_state(&reverted);
///
/// assert!(!view.gray.enabled);
/// assert_eq!(view.gray.action, GrayAction::Remove);
/// assert_eq!(view.reset, ResetAction::Restore);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsView {
    pub gray: Control<GrayAction>,
    pub bright: Control<BrightAction>,
    pub reset: ResetAction,
}

impl ControlsView {
    pub fn from_state(state: &FilterState) -> Self {
        let (gray_on, bright_on) = if state.is_reverted() {
            (state.saved_is_gray(), state.saved_is_bright())
        } else {
            (state.is_gray_applied(), state.is_bright_applied())
        };
        let enabled = !state.is_reverted();

        Self {
            gray: Control {
                enabled,
                action: if gray_on {
                    GrayAction::Remove
                } else {
                    GrayAction::Apply
                },
            },
            bright: Control {
                enabled,
                action: if bright_on {
                    BrightAction::Decrease
                } else {
                    BrightAction::Increase
                },
            },
            reset: if state.is_reverted() {
                ResetAction::Restore
            } else {
                ResetAction::Revert
            },
        }
    }
}
