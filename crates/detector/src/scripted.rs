//! Scripted stub detector
//!
//! Stands in for a real cascade or landmark model when none is wired up,
//! mirroring how the capture and detection collaborators are exercised in
//! tests and demos without camera hardware.

use crate::{DetectorError, FaceDetector, FaceRegion, FrameAnalysis, FrameSource, VideoFrame};
use tracing::debug;

/// Frame source yielding a fixed number of synthetic frames.
pub struct ScriptedFrames {
    width: u32,
    height: u32,
    remaining: u32,
    sequence: u32,
}

impl ScriptedFrames {
    pub fn new(count: u32) -> Self {
        Self {
            width: 640,
            height: 480,
            remaining: count,
            sequence: 0,
        }
    }
}

impl FrameSource for ScriptedFrames {
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, DetectorError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        let frame = VideoFrame::blank(self.width, self.height, self.sequence);
        self.sequence += 1;
        Ok(Some(frame))
    }
}

/// Detector that replays a scripted `(eyes, yawning)` sequence, one entry
/// per analyzed frame. Frames past the end of the script report a single
/// alert face with both eyes open.
pub struct ScriptedDetector {
    script: Vec<(u32, bool)>,
    cursor: usize,
}

impl ScriptedDetector {
    pub fn new(script: Vec<(u32, bool)>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Script shaped like a short drive: alert, a sustained eye-closure
    /// episode, recovery, then a yawn burst.
    pub fn demo() -> Self {
        let mut script = Vec::new();
        script.extend(std::iter::repeat((2, false)).take(10));
        script.extend(std::iter::repeat((0, false)).take(25));
        script.extend(std::iter::repeat((2, false)).take(5));
        script.extend(std::iter::repeat((2, true)).take(8));
        script.extend(std::iter::repeat((2, false)).take(5));
        Self::new(script)
    }
}

impl FaceDetector for ScriptedDetector {
    fn analyze(&mut self, frame: &VideoFrame) -> Result<FrameAnalysis, DetectorError> {
        let (eyes, yawning) = self
            .script
            .get(self.cursor)
            .copied()
            .unwrap_or((2, false));
        self.cursor += 1;

        debug!(sequence = frame.sequence, eyes, yawning, "scripted analysis");

        Ok(FrameAnalysis::new(vec![FaceRegion {
            x: frame.width / 4,
            y: frame.height / 4,
            width: frame.width / 2,
            height: frame.height / 2,
            eyes,
            yawning,
        }]))
    }
}
