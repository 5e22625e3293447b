//! Configuration checks, accumulated with `Validation`.

use crate::builder::BuildError;
use crate::policy::config::GameConfig;
use crate::policy::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn require(ok: bool, violation: ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

impl GameConfig {
    /// Run every rule and report all violations at once.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let scoring = &self.scoring;
        let timings = &self.timings;

        let mut checks: Vec<Check> = vec![
            require(scoring.bonus_threshold > 0, ConfigViolation::ZeroThreshold),
            require(scoring.round_increment > 0, ConfigViolation::ZeroIncrement),
            require(
                timings.flash_ms > 0,
                ConfigViolation::ZeroDuration { name: "flash_ms" },
            ),
            require(
                timings.game_over_ms > 0,
                ConfigViolation::ZeroDuration {
                    name: "game_over_ms",
                },
            ),
        ];

        // Only meaningful once both numbers are usable.
        if scoring.bonus_threshold > 0 && scoring.round_increment > 0 {
            checks.push(require(
                scoring.bonus_threshold % scoring.round_increment == 0,
                ConfigViolation::UnreachableThreshold {
                    threshold: scoring.bonus_threshold,
                    increment: scoring.round_increment,
                },
            ));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// `validate` folded into a `Result` for construction paths.
    pub fn check(&self) -> Result<(), BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(BuildError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::config::{ScorePolicy, Timings};

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_success());
        assert!(GameConfig::default().check().is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = GameConfig {
            timings: Timings {
                flash_ms: 0,
                game_over_ms: 0,
                ..Timings::default()
            },
            scoring: ScorePolicy {
                bonus_threshold: 0,
                ..ScorePolicy::default()
            },
            seed: None,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroThreshold)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroDuration { name: "flash_ms" })));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigViolation::ZeroDuration {
                        name: "game_over_ms"
                    }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn unreachable_threshold_is_reported() {
        let config = GameConfig {
            scoring: ScorePolicy {
                bonus_threshold: 35,
                ..ScorePolicy::default()
            },
            ..GameConfig::default()
        };

        let result = config.validate();
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors.iter().any(|e| matches!(
                e,
                ConfigViolation::UnreachableThreshold {
                    threshold: 35,
                    increment: 10
                }
            )));
        }
    }

    #[test]
    fn check_lists_violations_in_build_error() {
        let config = GameConfig {
            scoring: ScorePolicy {
                round_increment: 0,
                ..ScorePolicy::default()
            },
            ..GameConfig::default()
        };

        match config.check() {
            Err(BuildError::InvalidConfig(violations)) => {
                assert_eq!(violations, vec![ConfigViolation::ZeroIncrement]);
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }
}
