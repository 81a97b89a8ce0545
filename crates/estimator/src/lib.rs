//! Temporal Alertness Estimator
//!
//! Converts noisy per-frame detection signals into a debounced driver
//! alertness state and an alarm on/off decision:
//! - Run-length counters for eye closure and yawning
//! - Threshold-based state classification (Yawning > Drowsy > Awake)
//! - Edge-triggered alarm actuation
//!
//! The estimator owns no devices and performs no I/O beyond calling the
//! [`AlarmActuator`] it is handed. Frame capture, face detection, and
//! presentation live in the surrounding crates.

pub mod alarm;
pub mod classifier;
pub mod config;
pub mod observation;
pub mod state;

pub use alarm::{ActuatorError, AlarmActuator, AlarmController, CountingActuator};
pub use classifier::classify;
pub use config::EstimatorConfig;
pub use observation::Observation;
pub use state::{AlertStatus, EstimatorState, Snapshot};

use thiserror::Error;
use tracing::debug;

/// Estimator error types
#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("invalid eye count from detector: {0}")]
    InvalidEyeCount(i64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Alertness estimator for a single monitoring session.
///
/// Holds the run-length counters and the alarm controller for one driver.
/// Observations must be fed in arrival order, one at a time; the counters
/// depend on the immediately preceding state, so there is no meaningful way
/// to process frames in parallel against a single instance.
pub struct Estimator {
    config: EstimatorConfig,
    state: EstimatorState,
    controller: AlarmController,
}

impl Estimator {
    /// Create an estimator with validated thresholds.
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self {
            config,
            state: EstimatorState::default(),
            controller: AlarmController::new(),
        })
    }

    /// Process one observation: advance the counters, reclassify, and drive
    /// the alarm actuator on any state transition.
    ///
    /// Actuator failures are logged by the controller and never propagate;
    /// a failed alert must not stop frame processing.
    pub fn update<A: AlarmActuator>(
        &mut self,
        observation: Observation,
        actuator: &mut A,
    ) -> Snapshot {
        self.state.advance(&observation);

        let status = classify(
            self.state.eye_closed_frames,
            self.state.yawn_frames,
            &self.config,
        );
        self.state.status = status;

        self.controller.apply(status, actuator);

        debug!(
            ?status,
            eye_closed_frames = self.state.eye_closed_frames,
            yawn_frames = self.state.yawn_frames,
            alarm_active = self.controller.is_active(),
            "observation processed"
        );

        self.snapshot()
    }

    /// Read-only view of the current state for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.state.status,
            eye_closed_frames: self.state.eye_closed_frames,
            yawn_frames: self.state.yawn_frames,
            alarm_active: self.controller.is_active(),
            alarm_threshold: self.config.alarm_threshold,
            yawn_threshold: self.config.yawn_threshold,
        }
    }

    /// Session thresholds, fixed at construction.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Release the alarm if it is still engaged. Called once when the
    /// monitoring session ends so the alert never outlives the session.
    pub fn shutdown<A: AlarmActuator>(&mut self, actuator: &mut A) {
        self.controller.release(actuator);
        self.state.status = AlertStatus::Awake;
    }

    /// Reset counters and status (on driver change).
    pub fn reset(&mut self) {
        self.state = EstimatorState::default();
    }
}
