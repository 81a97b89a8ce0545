//! Log-backed alarm actuator
//!
//! Stands in for the audio or haptic device the deployment wires up. The
//! estimator treats every actuator as best-effort fire-and-forget.

use estimator::{ActuatorError, AlarmActuator};
use tracing::{info, warn};

/// Actuator that reports alarm edges on the log stream.
#[derive(Debug, Default)]
pub struct ConsoleAlarm;

impl AlarmActuator for ConsoleAlarm {
    fn start(&mut self) -> Result<(), ActuatorError> {
        warn!("DROWSINESS ALARM ON");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), ActuatorError> {
        info!("drowsiness alarm off");
        Ok(())
    }
}
