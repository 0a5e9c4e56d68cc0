//! Filter state values.
//!
//! [`FilterState`] is the single immutable value a session publishes. Every
//! transition builds a whole new value; nothing mutates a published state.

use super::matrix::ColorMatrix;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are immutable values that can be cloned into
/// snapshots, compared by observers, and serialized for diagnostics.
///
/// # Required Traits
///
/// - `Clone`: snapshots are handed out by value
/// - `PartialEq`: observers compare consecutive snapshots
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: hosts can export snapshots
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the state for display and logging.
    fn name(&self) -> &str;

    /// Whether edit commands are currently accepted.
    ///
    /// Default implementation returns `true`.
    fn accepts_edits(&self) -> bool {
        true
    }
}

/// The two exclusive modes of a filter session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FilterMode {
    /// Filters are live and can be toggled.
    Editing,
    /// The unfiltered image is shown; the previous filters are saved.
    Reverted,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Reverted => "Reverted",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation state of one editing session.
///
/// Created with [`FilterState::empty`] and replaced wholesale by each
/// transition in [`crate::core::filter`].
///
/// # Example
///
/// ```rust
/// use filterstate::core::{FilterMode, FilterState};
///
/// let state = FilterState::empty();
/// assert_eq!(state.mode(), FilterMode::Editing);
/// assert!(state.composed_filter().is_identity());
///
/// let state = state.toggle_gray().toggle_bright().reset();
/// assert_eq!(state.mode(), FilterMode::Reverted);
/// assert!(state.saved_is_gray());
/// assert!(!state.is_gray_applied());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FilterState {
    pub(crate) is_gray_applied: bool,
    pub(crate) is_bright_applied: bool,
    pub(crate) is_reverted: bool,
    pub(crate) gray_matrix: ColorMatrix,
    pub(crate) bright_matrix: ColorMatrix,
    pub(crate) composed_filter: ColorMatrix,
    pub(crate) saved_is_gray: bool,
    pub(crate) saved_is_bright: bool,
    pub(crate) saved_composed_filter: ColorMatrix,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::empty()
    }
}

impl FilterState {
    /// Initial state: every matrix is the identity and every flag is false.
    pub fn empty() -> Self {
        Self {
            is_gray_applied: false,
            is_bright_applied: false,
            is_reverted: false,
            gray_matrix: ColorMatrix::identity(),
            bright_matrix: ColorMatrix::identity(),
            composed_filter: ColorMatrix::identity(),
            saved_is_gray: false,
            saved_is_bright: false,
            saved_composed_filter: ColorMatrix::identity(),
        }
    }

    pub fn is_gray_applied(&self) -> bool {
        self.is_gray_applied
    }

    pub fn is_bright_applied(&self) -> bool {
        self.is_bright_applied
    }

    pub fn is_reverted(&self) -> bool {
        self.is_reverted
    }

    pub fn gray_matrix(&self) -> &ColorMatrix {
        &self.gray_matrix
    }

    pub fn bright_matrix(&self) -> &ColorMatrix {
        &self.bright_matrix
    }

    /// The transform the renderer should apply to the source image.
    pub fn composed_filter(&self) -> &ColorMatrix {
        &self.composed_filter
    }

    pub fn saved_is_gray(&self) -> bool {
        self.saved_is_gray
    }

    pub fn saved_is_bright(&self) -> bool {
        self.saved_is_bright
    }

    pub fn saved_composed_filter(&self) -> &ColorMatrix {
        &self.saved_composed_filter
    }

    /// Whether grayscale is on, counting the saved flag while reverted.
    pub fn gray_active(&self) -> bool {
        if self.is_reverted {
            self.saved_is_gray
        } else {
            self.is_gray_applied
        }
    }

    /// Whether brightness is on, counting the saved flag while reverted.
    pub fn bright_active(&self) -> bool {
        if self.is_reverted {
            self.saved_is_bright
        } else {
            self.is_bright_applied
        }
    }

    pub fn mode(&self) -> FilterMode {
        if self.is_reverted {
            FilterMode::Reverted
        } else {
            FilterMode::Editing
        }
    }

    /// Check the structural invariants of a state.
    ///
    /// States produced by transitions from [`FilterState::empty`] always pass.
    /// Deserialized or hand-assembled values may not.
    pub fn is_consistent(&self) -> bool {
        // Matrices of an effect that is off are identity; reset leaves them as they were.
        if !self.gray_active() && !self.gray_matrix.is_identity() {
            return false;
        }
        if !self.bright_active() && !self.bright_matrix.is_identity() {
            return false;
        }

        if self.is_reverted {
            !self.is_gray_applied
                && !self.is_bright_applied
                && self.composed_filter.is_identity()
                && self.saved_composed_filter
                    == ColorMatrix::compose(&self.gray_matrix, &self.bright_matrix)
        } else {
            !self.saved_is_gray
                && !self.saved_is_bright
                && self.saved_composed_filter.is_identity()
                && self.composed_filter
                    == ColorMatrix::compose(&self.gray_matrix, &self.bright_matrix)
        }
    }
}

impl State for FilterState {
    fn name(&self) -> &str {
        self.mode().as_str()
    }

    fn accepts_edits(&self) -> bool {
        !self.is_reverted
    }
}
