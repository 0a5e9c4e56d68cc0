//! Builder API for constructing filter state machines.
//!
//! The builder validates configuration up front so a machine, once built,
//! can never fail a transition.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::FilterMachineBuilder;

use crate::config::FilterConfig;
use crate::machine::FilterStateMachine;

/// Build a machine from a JSON configuration.
///
/// # Example
///
/// ```
/// use filterstate::builder::machine_from_json;
///
/// let machine = machine_from_json(r#"{ "gray_saturation": 0.2 }"#).unwrap();
/// assert!(machine.current_state().composed_filter().is_identity());
///
/// assert!(machine_from_json(r#"{ "gray_saturation": 4.0 }"#).is_err());
/// ```
pub fn machine_from_json(json: &str) -> Result<FilterStateMachine, BuildError> {
    let config = FilterConfig::from_json(json).map_err(|e| BuildError::InvalidConfig(vec![e]))?;
    FilterMachineBuilder::new().config(config).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn parse_errors_surface_as_invalid_config() {
        let err = machine_from_json("not json").unwrap_err();
        assert!(matches!(err.violations(), [ConfigError::Parse(_)]));
    }

    #[test]
    fn valid_json_builds() {
        let mut machine =
            machine_from_json(r#"{ "brightness": { "scale": 1.0, "offset": 50.0 } }"#).unwrap();
        assert!(machine.toggle_bright().is_bright_applied());
    }
}
