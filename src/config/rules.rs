//! Validation rules for filter configuration.
//!
//! Every rule runs, and all violations are collected into one report rather
//! than stopping at the first.

use super::error::ConfigError;
use super::FilterConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single rule.
pub type RuleResult = Validation<(), NonEmptyVec<ConfigError>>;

fn check(ok: bool, error: ConfigError) -> RuleResult {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error)
    }
}

fn scale_is_positive(config: &FilterConfig) -> RuleResult {
    let scale = config.brightness.scale;
    check(
        scale.is_finite() && scale > 0.0,
        ConfigError::InvalidScale(scale),
    )
}

fn offset_is_finite(config: &FilterConfig) -> RuleResult {
    let offset = config.brightness.offset;
    check(offset.is_finite(), ConfigError::InvalidOffset(offset))
}

fn saturation_in_range(config: &FilterConfig) -> RuleResult {
    let sat = config.gray_saturation;
    check(
        sat.is_finite() && (0.0..=1.0).contains(&sat),
        ConfigError::InvalidSaturation(sat),
    )
}

fn brightness_is_visible(config: &FilterConfig) -> RuleResult {
    check(
        !config.brightness.matrix().is_identity(),
        ConfigError::NoOpEffect {
            effect: "brightness",
        },
    )
}

fn gray_is_visible(config: &FilterConfig) -> RuleResult {
    check(
        config.gray_saturation != 1.0,
        ConfigError::NoOpEffect { effect: "gray" },
    )
}

/// Run every rule against `config`, accumulating all violations.
pub fn validate(config: &FilterConfig) -> RuleResult {
    let checks = vec![
        scale_is_positive(config),
        offset_is_finite(config),
        saturation_in_range(config),
        brightness_is_visible(config),
        gray_is_visible(config),
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrightnessFormula;

    #[test]
    fn default_config_passes_every_rule() {
        assert!(validate(&FilterConfig::default()).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = FilterConfig {
            brightness: BrightnessFormula {
                scale: -1.0,
                offset: f32::NAN,
            },
            gray_saturation: 3.0,
        };

        match validate(&config) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::InvalidScale(_))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::InvalidOffset(_))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::InvalidSaturation(_))));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn identity_effects_are_flagged() {
        let config = FilterConfig {
            brightness: BrightnessFormula {
                scale: 1.0,
                offset: 0.0,
            },
            gray_saturation: 1.0,
        };

        match validate(&config) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().all(|e| matches!(e, ConfigError::NoOpEffect { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn offset_only_preset_is_valid() {
        let config = FilterConfig {
            brightness: BrightnessFormula::offset_only(),
            ..FilterConfig::default()
        };
        assert!(validate(&config).is_success());
    }
}
