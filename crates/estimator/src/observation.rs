//! Per-frame observation contract

use crate::EstimatorError;
use serde::{Deserialize, Serialize};

/// Summary signal for one video frame, produced by whatever detector is in
/// front of the estimator. Carries no history; the run-length bookkeeping
/// lives entirely in [`crate::EstimatorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Total eyes found across all detected faces in the frame.
    pub eyes_detected: u32,

    /// Whether any face's mouth region matched the yawn pattern this frame.
    /// Single flag per frame: the detector reports the first matching mouth
    /// and ignores the rest.
    pub yawn_detected: bool,
}

impl Observation {
    pub fn new(eyes_detected: u32, yawn_detected: bool) -> Self {
        Self {
            eyes_detected,
            yawn_detected,
        }
    }

    /// Build an observation from a detector that counts with signed
    /// integers. A negative eye count is a contract violation and fails
    /// fast rather than being clamped into the counters.
    pub fn from_raw(eyes_detected: i64, yawn_detected: bool) -> Result<Self, EstimatorError> {
        let eyes = u32::try_from(eyes_detected)
            .map_err(|_| EstimatorError::InvalidEyeCount(eyes_detected))?;
        Ok(Self::new(eyes, yawn_detected))
    }

    /// True when no eyes were found anywhere in the frame.
    pub fn eyes_closed(&self) -> bool {
        self.eyes_detected == 0
    }
}
