//! Estimator configuration

use crate::EstimatorError;
use serde::{Deserialize, Serialize};

/// Session thresholds, fixed when monitoring begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Consecutive no-eye frames a run must exceed before `Drowsy`.
    pub alarm_threshold: u32,

    /// Consecutive yawn frames a run must exceed before `Yawning`.
    pub yawn_threshold: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            alarm_threshold: 20,
            yawn_threshold: 5,
        }
    }
}

impl EstimatorConfig {
    /// Lower thresholds for faster alerting.
    pub fn strict() -> Self {
        Self {
            alarm_threshold: 12,
            yawn_threshold: 3,
        }
    }

    /// Higher thresholds for noisier detectors.
    pub fn lenient() -> Self {
        Self {
            alarm_threshold: 30,
            yawn_threshold: 8,
        }
    }

    /// Both thresholds must be positive.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.alarm_threshold == 0 {
            return Err(EstimatorError::Config(
                "alarm_threshold must be positive".into(),
            ));
        }
        if self.yawn_threshold == 0 {
            return Err(EstimatorError::Config(
                "yawn_threshold must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_session_thresholds() {
        let config = EstimatorConfig::default();
        assert_eq!(config.alarm_threshold, 20);
        assert_eq!(config.yawn_threshold, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn strict_is_tighter_than_lenient() {
        assert!(EstimatorConfig::strict().alarm_threshold < EstimatorConfig::lenient().alarm_threshold);
        assert!(EstimatorConfig::strict().yawn_threshold < EstimatorConfig::lenient().yawn_threshold);
    }

    #[test]
    fn zero_threshold_is_invalid() {
        let config = EstimatorConfig {
            alarm_threshold: 20,
            yawn_threshold: 0,
        };
        assert!(config.validate().is_err());
    }
}
