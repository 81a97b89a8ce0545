//! Monitoring session loop

use crate::{MonitorConfig, MonitorError};
use chrono::{DateTime, Utc};
use detector::{FaceDetector, FrameSource};
use estimator::{AlarmActuator, Estimator, Snapshot};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Identity of one monitoring session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    /// Opaque display identifier (e.g. a plate number).
    pub plate_number: String,
    pub started_at: DateTime<Utc>,
}

impl SessionInfo {
    pub fn new(plate_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            plate_number: plate_number.into(),
            started_at: Utc::now(),
        }
    }
}

/// Result of a completed session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub frames_processed: u64,
    /// Estimator state at loop exit, after the shutdown alarm release.
    pub last: Snapshot,
}

/// One drive's monitoring loop.
///
/// Owns the estimator and the three collaborators for the lifetime of the
/// session. Frames are processed strictly in arrival order, one at a time;
/// the estimator's run-length counters depend on it.
pub struct MonitorSession<S, D, A> {
    info: SessionInfo,
    source: S,
    detector: D,
    actuator: A,
    estimator: Estimator,
    frame_interval: Duration,
    snapshots: Option<mpsc::Sender<Snapshot>>,
}

impl<S, D, A> MonitorSession<S, D, A>
where
    S: FrameSource,
    D: FaceDetector,
    A: AlarmActuator,
{
    pub fn new(
        config: &MonitorConfig,
        source: S,
        detector: D,
        actuator: A,
    ) -> Result<Self, MonitorError> {
        Ok(Self {
            info: SessionInfo::new(config.plate_number.clone()),
            source,
            detector,
            actuator,
            estimator: Estimator::new(config.estimator())?,
            frame_interval: Duration::from_millis(config.frame_interval_ms.max(1)),
            snapshots: None,
        })
    }

    /// Attach a snapshot stream for the presentation layer. Snapshots are
    /// dropped, not awaited, when the receiver lags; display must never
    /// stall frame processing.
    pub fn with_snapshots(mut self, tx: mpsc::Sender<Snapshot>) -> Self {
        self.snapshots = Some(tx);
        self
    }

    pub fn info(&self) -> &SessionInfo {
        &self.info
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Run until the frame source ends, a source error occurs, or shutdown
    /// is signalled. Always releases the alarm before returning.
    pub async fn run(
        &mut self,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<SessionSummary, MonitorError> {
        info!(
            session = %self.info.id,
            plate = %self.info.plate_number,
            "monitoring started"
        );

        let mut ticker = tokio::time::interval(self.frame_interval);
        let mut frames_processed = 0u64;

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("shutdown requested");
                    break;
                }
                _ = ticker.tick() => {
                    match self.source.next_frame() {
                        Ok(Some(frame)) => {
                            self.process_frame(&frame);
                            frames_processed += 1;
                        }
                        Ok(None) => {
                            info!("frame source ended");
                            break;
                        }
                        Err(e) => {
                            warn!(error = %e, "failed to grab frame");
                            break;
                        }
                    }
                }
            }
        }

        // The alert must never outlive the session.
        self.estimator.shutdown(&mut self.actuator);

        let summary = SessionSummary {
            frames_processed,
            last: self.estimator.snapshot(),
        };
        info!(
            session = %self.info.id,
            frames = summary.frames_processed,
            "monitoring ended"
        );
        Ok(summary)
    }

    fn process_frame(&mut self, frame: &detector::VideoFrame) {
        let analysis = match self.detector.analyze(frame) {
            Ok(analysis) => analysis,
            Err(e) => {
                // Starved cycle: the estimator state stays unchanged.
                warn!(error = %e, sequence = frame.sequence, "frame analysis failed");
                return;
            }
        };

        let snapshot = self
            .estimator
            .update(analysis.observation(), &mut self.actuator);

        debug!(
            sequence = frame.sequence,
            faces = analysis.faces.len(),
            status = ?snapshot.status,
            "frame processed"
        );

        if let Some(tx) = &self.snapshots {
            if tx.try_send(snapshot).is_err() {
                debug!("snapshot receiver lagging, dropped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detector::{ScriptedDetector, ScriptedFrames};
    use estimator::{AlertStatus, CountingActuator};

    fn config() -> MonitorConfig {
        MonitorConfig {
            frame_interval_ms: 1,
            ..Default::default()
        }
    }

    fn idle_shutdown() -> (watch::Sender<bool>, watch::Receiver<bool>) {
        watch::channel(false)
    }

    #[tokio::test]
    async fn drowsy_stream_engages_alarm_once() {
        // 25 closed-eye frames against a threshold of 20
        let script = vec![(0, false); 25];
        let mut session = MonitorSession::new(
            &config(),
            ScriptedFrames::new(25),
            ScriptedDetector::new(script),
            CountingActuator::default(),
        )
        .unwrap();

        let (_shutdown_tx, shutdown_rx) = idle_shutdown();
        let summary = session.run(shutdown_rx).await.unwrap();

        assert_eq!(summary.frames_processed, 25);
        assert_eq!(summary.last.status, AlertStatus::Awake); // reset at shutdown
        assert!(!summary.last.alarm_active);
        assert_eq!(session.actuator().starts, 1);
        // Released on session end, not per cycle
        assert_eq!(session.actuator().stops, 1);
    }

    #[tokio::test]
    async fn clean_stream_never_touches_actuator() {
        let script = vec![(2, false); 10];
        let mut session = MonitorSession::new(
            &config(),
            ScriptedFrames::new(10),
            ScriptedDetector::new(script),
            CountingActuator::default(),
        )
        .unwrap();

        let (_shutdown_tx, shutdown_rx) = idle_shutdown();
        let summary = session.run(shutdown_rx).await.unwrap();

        assert_eq!(summary.frames_processed, 10);
        assert_eq!(session.actuator().starts, 0);
        assert_eq!(session.actuator().stops, 0);
    }

    #[tokio::test]
    async fn shutdown_signal_stops_endless_source() {
        let (tx, rx) = watch::channel(false);
        let mut session = MonitorSession::new(
            &config(),
            ScriptedFrames::new(u32::MAX),
            ScriptedDetector::new(vec![]),
            CountingActuator::default(),
        )
        .unwrap();

        tx.send(true).unwrap();
        let summary = session.run(rx).await.unwrap();
        assert!(!summary.last.alarm_active);
    }

    #[tokio::test]
    async fn yawn_recovery_within_stream_releases_alarm() {
        let mut script = vec![(2, true); 6];
        script.extend(vec![(1, false); 3]);
        let mut session = MonitorSession::new(
            &config(),
            ScriptedFrames::new(9),
            ScriptedDetector::new(script),
            CountingActuator::default(),
        )
        .unwrap();

        let (_shutdown_tx, shutdown_rx) = idle_shutdown();
        session.run(shutdown_rx).await.unwrap();

        assert_eq!(session.actuator().starts, 1);
        // One stop on recovery; shutdown finds the alarm already released
        assert_eq!(session.actuator().stops, 1);
    }
}
