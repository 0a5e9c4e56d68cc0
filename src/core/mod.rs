//! Core filter state types and logic.
//!
//! This module contains the pure functional core:
//! - Color matrices and their composition
//! - The `FilterState` value and the `State` trait
//! - Guard predicates for command control
//! - The three filter transitions
//!
//! Nothing in this module logs or performs I/O.

pub mod filter;
mod guard;
mod matrix;
mod state;

pub use filter::Adjustments;
pub use guard::Guard;
pub use matrix::{ColorMatrix, CHANNEL_MAX, COEFFICIENTS, LUMA_B, LUMA_G, LUMA_R};
pub use state::{FilterMode, FilterState, State};
