//! Edge-triggered alarm control

use crate::AlertStatus;
use thiserror::Error;
use tracing::{info, warn};

/// Actuator failure, surfaced for logging only. Never fatal to the loop.
#[derive(Error, Debug, Clone)]
#[error("alarm actuator failed: {0}")]
pub struct ActuatorError(pub String);

/// External alert device: an audio player, a haptic buzzer, anything with
/// fire-and-forget start/stop. Both calls are best-effort; the controller
/// does not retry.
pub trait AlarmActuator {
    fn start(&mut self) -> Result<(), ActuatorError>;
    fn stop(&mut self) -> Result<(), ActuatorError>;
}

/// Two-state machine layered on the classified status.
///
/// Issues `start()` exactly on Inactive→Active transitions and `stop()`
/// exactly on Active→Inactive; while the logical state holds, no actuator
/// call is made. Redundant calls every cycle would restart a looping alert
/// sound or thrash a hardware buzzer.
#[derive(Debug, Default)]
pub struct AlarmController {
    active: bool,
}

impl AlarmController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `start()` was the most recent call issued.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Drive the actuator for the newly classified status.
    ///
    /// Bookkeeping updates even when the actuator errors, so the next
    /// transition gets a fresh attempt.
    pub fn apply<A: AlarmActuator>(&mut self, status: AlertStatus, actuator: &mut A) {
        if status.is_alerting() && !self.active {
            info!(?status, "alarm engaged");
            if let Err(e) = actuator.start() {
                warn!(error = %e, "alarm start failed");
            }
            self.active = true;
        } else if !status.is_alerting() && self.active {
            info!("alarm released");
            if let Err(e) = actuator.stop() {
                warn!(error = %e, "alarm stop failed");
            }
            self.active = false;
        }
    }

    /// Force the alarm off, used at session shutdown.
    pub fn release<A: AlarmActuator>(&mut self, actuator: &mut A) {
        self.apply(AlertStatus::Awake, actuator);
    }
}

/// Call-counting actuator for tests and wiring checks.
#[derive(Debug, Default)]
pub struct CountingActuator {
    pub starts: u32,
    pub stops: u32,
    /// When set, every call reports failure.
    pub failing: bool,
}

impl AlarmActuator for CountingActuator {
    fn start(&mut self) -> Result<(), ActuatorError> {
        self.starts += 1;
        if self.failing {
            return Err(ActuatorError("device unavailable".into()));
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), ActuatorError> {
        self.stops += 1;
        if self.failing {
            return Err(ActuatorError("device unavailable".into()));
        }
        Ok(())
    }
}
