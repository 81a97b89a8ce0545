//! Threshold classification

use crate::{AlertStatus, EstimatorConfig};

/// Map the run-length counters to an alertness status.
///
/// Precedence is fixed: yawning dominates drowsiness dominates wakefulness.
/// Thresholds are strict; a run exactly equal to the threshold does not yet
/// trigger. The counters reset to 0 on a single clean frame, so recovery to
/// `Awake` happens on the next clean observation.
pub fn classify(eye_closed_frames: u32, yawn_frames: u32, config: &EstimatorConfig) -> AlertStatus {
    if yawn_frames > config.yawn_threshold {
        AlertStatus::Yawning
    } else if eye_closed_frames > config.alarm_threshold {
        AlertStatus::Drowsy
    } else {
        AlertStatus::Awake
    }
}
