//! Filter configuration.
//!
//! Two brightness formulas have shipped in the field: a scaled one
//! (scale 1.2, offset +10) and an offset-only one (offset +50). They are not
//! equivalent, so the formula is explicit configuration. The scaled variant is
//! the default.
//!
//! # Example
//!
//! ```rust
//! use filterstate::config::{BrightnessFormula, FilterConfig};
//!
//! let config = FilterConfig::from_json(r#"{ "brightness": { "scale": 1.0, "offset": 50.0 } }"#)
//!     .unwrap();
//! assert_eq!(config.brightness, BrightnessFormula::offset_only());
//! assert_eq!(config.gray_saturation, 0.0);
//! ```

pub mod error;
pub mod rules;

pub use error::ConfigError;

use crate::core::{Adjustments, ColorMatrix};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Scale and offset applied to R, G and B when brightness is on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessFormula {
    pub scale: f32,
    pub offset: f32,
}

impl Default for BrightnessFormula {
    fn default() -> Self {
        Self::scaled()
    }
}

impl BrightnessFormula {
    /// Scale 1.2, offset +10.
    pub const fn scaled() -> Self {
        Self {
            scale: 1.2,
            offset: 10.0,
        }
    }

    /// Scale 1.0, offset +50.
    pub const fn offset_only() -> Self {
        Self {
            scale: 1.0,
            offset: 50.0,
        }
    }

    pub fn matrix(&self) -> ColorMatrix {
        ColorMatrix::lighting(self.scale, self.offset)
    }
}

/// Parameters of the two effects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub brightness: BrightnessFormula,
    /// Saturation used when grayscale is on. `0.0` is full desaturation.
    pub gray_saturation: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            brightness: BrightnessFormula::default(),
            gray_saturation: 0.0,
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every rule, returning all violations at once.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        match rules::validate(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    /// The "on" matrices this configuration produces.
    pub fn adjustments(&self) -> Adjustments {
        Adjustments {
            gray_on: ColorMatrix::saturation(self.gray_saturation),
            bright_on: self.brightness.matrix(),
        }
    }
}
