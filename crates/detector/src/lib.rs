//! Detection boundary for the drowsiness monitor.
//!
//! The estimator consumes only the [`estimator::Observation`] signal shape;
//! this crate defines the traits that produce it:
//! - [`FrameSource`] supplies successive video frames
//! - [`FaceDetector`] turns a frame into a [`FrameAnalysis`]
//!
//! Any detector implementation satisfies the contract: classical cascades,
//! landmark models, or the scripted stub shipped here for tests and demos.

pub mod analysis;
pub mod frame;
pub mod scripted;

pub use analysis::{FaceRegion, FrameAnalysis};
pub use frame::VideoFrame;
pub use scripted::{ScriptedDetector, ScriptedFrames};

use thiserror::Error;

/// Detection boundary error types
#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("frame source failed: {0}")]
    FrameSource(String),

    #[error("frame analysis failed: {0}")]
    Analysis(String),

    #[error("frame dimensions do not match pixel data: {width}x{height} with {len} bytes")]
    MalformedFrame { width: u32, height: u32, len: usize },
}

/// Supplies successive video frames. `Ok(None)` means the stream has ended;
/// an error is an I/O condition for the caller, not an estimator concern.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, DetectorError>;
}

/// Turns one frame into face regions and the per-frame summary signal.
pub trait FaceDetector {
    fn analyze(&mut self, frame: &VideoFrame) -> Result<FrameAnalysis, DetectorError>;
}
