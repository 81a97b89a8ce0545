//! Per-frame analysis results

use estimator::Observation;
use serde::{Deserialize, Serialize};

/// Face bounding box in frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Eyes found inside this face region.
    pub eyes: u32,
    /// Whether this face's mouth region matched the yawn pattern.
    pub yawning: bool,
}

/// Everything a detector reports for one frame. Faces are kept for overlays;
/// the estimator sees only the reduced [`Observation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameAnalysis {
    pub faces: Vec<FaceRegion>,
}

impl FrameAnalysis {
    pub fn new(faces: Vec<FaceRegion>) -> Self {
        Self { faces }
    }

    /// Whether any face was found this frame.
    pub fn face_detected(&self) -> bool {
        !self.faces.is_empty()
    }

    /// Total eyes across all faces.
    pub fn eyes_detected(&self) -> u32 {
        self.faces.iter().map(|f| f.eyes).sum()
    }

    /// Single-occupant yawn flag: the first yawning face wins, the rest are
    /// ignored. Per-driver tracking of multiple occupants is a non-goal.
    pub fn yawn_detected(&self) -> bool {
        self.faces.iter().any(|f| f.yawning)
    }

    /// Reduce to the signal shape the estimator consumes.
    pub fn observation(&self) -> Observation {
        Observation::new(self.eyes_detected(), self.yawn_detected())
    }
}
