//! Session configuration

use crate::MonitorError;
use estimator::EstimatorConfig;
use serde::{Deserialize, Serialize};

/// Configuration for one monitoring session, fixed before the loop starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Display identifier for the vehicle, carried opaquely into snapshots
    /// and logs. Collected by whatever identity capture runs before us.
    pub plate_number: String,

    /// Consecutive no-eye frames before the drowsiness alarm.
    pub alarm_threshold: u32,

    /// Consecutive yawn frames before the yawn alarm.
    pub yawn_threshold: u32,

    /// Target delay between frames (milliseconds).
    pub frame_interval_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            plate_number: "UNREGISTERED".to_string(),
            alarm_threshold: 20,
            yawn_threshold: 5,
            frame_interval_ms: 33, // ~30fps
        }
    }
}

impl MonitorConfig {
    /// Load from `monitor.toml` (optional) with `MONITOR_*` env overrides.
    pub fn load() -> Result<Self, MonitorError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name("monitor").required(false))
            .add_source(::config::Environment::with_prefix("MONITOR"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Thresholds for the estimator core.
    pub fn estimator(&self) -> EstimatorConfig {
        EstimatorConfig {
            alarm_threshold: self.alarm_threshold,
            yawn_threshold: self.yawn_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_thresholds() {
        let config = MonitorConfig::default();
        assert_eq!(config.alarm_threshold, 20);
        assert_eq!(config.yawn_threshold, 5);
        assert_eq!(config.estimator(), EstimatorConfig::default());
    }

    #[test]
    fn deserializes_partial_config() {
        let config: MonitorConfig =
            serde_json::from_str(r#"{"plate_number": "ABC-1234", "yawn_threshold": 3}"#).unwrap();
        assert_eq!(config.plate_number, "ABC-1234");
        assert_eq!(config.yawn_threshold, 3);
        // Unspecified fields keep their defaults
        assert_eq!(config.alarm_threshold, 20);
    }
}
