//! Monitoring session plumbing
//!
//! Wires the external collaborators together around one estimator:
//! frame source → face detector → estimator → alarm actuator, with a
//! read-only snapshot stream for whatever presentation layer is attached.

pub mod alarm;
pub mod config;
pub mod session;

pub use alarm::ConsoleAlarm;
pub use config::MonitorConfig;
pub use session::{MonitorSession, SessionInfo, SessionSummary};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Monitor error types
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("estimator error: {0}")]
    Estimator(#[from] estimator::EstimatorError),

    #[error("frame source error: {0}")]
    FrameSource(#[from] detector::DetectorError),
}

/// Initialize global logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
