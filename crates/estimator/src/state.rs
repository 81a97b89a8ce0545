//! Run-length state tracking

use crate::Observation;
use serde::{Deserialize, Serialize};

/// Debounced alertness classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlertStatus {
    #[default]
    Awake,
    Drowsy,
    Yawning,
}

impl AlertStatus {
    /// Whether this status should have the alarm engaged.
    pub fn is_alerting(&self) -> bool {
        matches!(self, AlertStatus::Drowsy | AlertStatus::Yawning)
    }
}

/// Counters tracked across the lifetime of a monitoring session.
///
/// Each counter either increments by exactly 1 or resets to 0 on every
/// observation; no other delta is valid. Runs long enough to hit the `u32`
/// ceiling hold there instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct EstimatorState {
    /// Consecutive frames with no detected eyes.
    pub eye_closed_frames: u32,

    /// Consecutive frames with a detected yawn.
    pub yawn_frames: u32,

    /// Last computed classification.
    pub status: AlertStatus,
}

impl EstimatorState {
    /// Advance both run-length counters for one observation.
    pub fn advance(&mut self, observation: &Observation) {
        if observation.eyes_closed() {
            self.eye_closed_frames = self.eye_closed_frames.saturating_add(1);
        } else {
            self.eye_closed_frames = 0;
        }

        if observation.yawn_detected {
            self.yawn_frames = self.yawn_frames.saturating_add(1);
        } else {
            self.yawn_frames = 0;
        }
    }
}

/// Read-only view of the estimator handed to the presentation layer each
/// cycle. The presentation layer renders it and feeds nothing back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: AlertStatus,
    pub eye_closed_frames: u32,
    pub yawn_frames: u32,
    pub alarm_active: bool,
    pub alarm_threshold: u32,
    pub yawn_threshold: u32,
}

impl Snapshot {
    /// Eye-closure progress toward the alarm threshold, clamped to 1.0.
    /// Used for the drowsiness progress bar.
    pub fn eye_progress(&self) -> f32 {
        (self.eye_closed_frames as f32 / self.alarm_threshold as f32).min(1.0)
    }

    /// Yawn progress toward the yawn threshold, clamped to 1.0.
    pub fn yawn_progress(&self) -> f32 {
        (self.yawn_frames as f32 / self.yawn_threshold as f32).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counters_track_trailing_runs() {
        let mut state = EstimatorState::default();

        state.advance(&Observation::new(0, true));
        state.advance(&Observation::new(0, true));
        assert_eq!(state.eye_closed_frames, 2);
        assert_eq!(state.yawn_frames, 2);

        state.advance(&Observation::new(2, false));
        assert_eq!(state.eye_closed_frames, 0);
        assert_eq!(state.yawn_frames, 0);
    }

    #[test]
    fn counters_reset_independently() {
        let mut state = EstimatorState::default();

        state.advance(&Observation::new(0, true));
        state.advance(&Observation::new(2, true));
        assert_eq!(state.eye_closed_frames, 0);
        assert_eq!(state.yawn_frames, 2);

        state.advance(&Observation::new(0, false));
        assert_eq!(state.eye_closed_frames, 1);
        assert_eq!(state.yawn_frames, 0);
    }

    #[test]
    fn counters_hold_at_ceiling() {
        let mut state = EstimatorState {
            eye_closed_frames: u32::MAX,
            yawn_frames: u32::MAX,
            ..Default::default()
        };
        state.advance(&Observation::new(0, true));
        assert_eq!(state.eye_closed_frames, u32::MAX);
        assert_eq!(state.yawn_frames, u32::MAX);

        state.advance(&Observation::new(1, false));
        assert_eq!(state.eye_closed_frames, 0);
        assert_eq!(state.yawn_frames, 0);
    }

    #[test]
    fn progress_clamps_at_one() {
        let snap = Snapshot {
            status: AlertStatus::Drowsy,
            eye_closed_frames: 50,
            yawn_frames: 2,
            alarm_active: true,
            alarm_threshold: 20,
            yawn_threshold: 5,
        };
        assert_eq!(snap.eye_progress(), 1.0);
        assert!((snap.yawn_progress() - 0.4).abs() < f32::EPSILON);
    }

    proptest! {
        /// After any observation sequence, each counter equals the length of
        /// the trailing run of its condition.
        #[test]
        fn counter_equals_trailing_run(seq in prop::collection::vec((0u32..3, any::<bool>()), 0..200)) {
            let mut state = EstimatorState::default();
            for (eyes, yawn) in &seq {
                state.advance(&Observation::new(*eyes, *yawn));
            }

            let trailing_closed = seq.iter().rev().take_while(|(eyes, _)| *eyes == 0).count();
            let trailing_yawn = seq.iter().rev().take_while(|(_, yawn)| *yawn).count();

            prop_assert_eq!(state.eye_closed_frames as usize, trailing_closed);
            prop_assert_eq!(state.yawn_frames as usize, trailing_yawn);
        }

        /// A single good frame resets the eye counter regardless of history.
        #[test]
        fn open_eyes_always_reset(prior in 0u32..10_000, eyes in 1u32..6) {
            let mut state = EstimatorState {
                eye_closed_frames: prior,
                ..Default::default()
            };
            state.advance(&Observation::new(eyes, false));
            prop_assert_eq!(state.eye_closed_frames, 0);
        }
    }
}
