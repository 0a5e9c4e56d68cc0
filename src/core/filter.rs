//! Pure filter transitions.
//!
//! Each function takes the current [`FilterState`] and returns the next one.
//! Nothing here logs, allocates or fails: a toggle issued while reverted
//! returns the state unchanged.

use super::matrix::ColorMatrix;
use super::state::FilterState;
use serde::{Deserialize, Serialize};

/// The matrices a toggle switches to when it turns an effect on.
///
/// Turning an effect off always yields the identity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    pub gray_on: ColorMatrix,
    pub bright_on: ColorMatrix,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            gray_on: ColorMatrix::saturation(0.0),
            bright_on: ColorMatrix::lighting(1.2, 10.0),
        }
    }
}

/// The composed filter: brightness first, then grayscale.
pub fn compose_filter(gray: &ColorMatrix, bright: &ColorMatrix) -> ColorMatrix {
    ColorMatrix::compose(gray, bright)
}

/// Flip the grayscale effect.
pub fn toggle_gray(state: &FilterState, adjustments: &Adjustments) -> FilterState {
    if state.is_reverted {
        return state.clone();
    }

    let gray_matrix = if state.is_gray_applied {
        ColorMatrix::saturation(1.0)
    } else {
        adjustments.gray_on
    };

    FilterState {
        is_gray_applied: !state.is_gray_applied,
        gray_matrix,
        composed_filter: compose_filter(&gray_matrix, &state.bright_matrix),
        ..state.clone()
    }
}

/// Flip the brightness effect.
pub fn toggle_bright(state: &FilterState, adjustments: &Adjustments) -> FilterState {
    if state.is_reverted {
        return state.clone();
    }

    let bright_matrix = if state.is_bright_applied {
        ColorMatrix::identity()
    } else {
        adjustments.bright_on
    };

    FilterState {
        is_bright_applied: !state.is_bright_applied,
        bright_matrix,
        composed_filter: compose_filter(&state.gray_matrix, &bright_matrix),
        ..state.clone()
    }
}

/// Revert to the unfiltered image, or restore the saved filters.
///
/// The per-effect matrices are kept while reverted so a restore brings the
/// session back to exactly where it was.
pub fn reset(state: &FilterState) -> FilterState {
    if state.is_reverted {
        FilterState {
            is_reverted: false,
            is_gray_applied: state.saved_is_gray,
            is_bright_applied: state.saved_is_bright,
            composed_filter: state.saved_composed_filter,
            saved_is_gray: false,
            saved_is_bright: false,
            saved_composed_filter: ColorMatrix::identity(),
            ..state.clone()
        }
    } else {
        FilterState {
            is_reverted: true,
            is_gray_applied: false,
            is_bright_applied: false,
            composed_filter: ColorMatrix::identity(),
            saved_is_gray: state.is_gray_applied,
            saved_is_bright: state.is_bright_applied,
            saved_composed_filter: state.composed_filter,
            ..state.clone()
        }
    }
}

impl FilterState {
    /// [`toggle_gray`] with the default adjustments.
    pub fn toggle_gray(&self) -> FilterState {
        toggle_gray(self, &Adjustments::default())
    }

    /// [`toggle_bright`] with the default adjustments.
    pub fn toggle_bright(&self) -> FilterState {
        toggle_bright(self, &Adjustments::default())
    }

    /// See [`reset`].
    pub fn reset(&self) -> FilterState {
        reset(self)
    }
}
