//! Driver Drowsiness Monitor - Main Entry Point

use detector::{ScriptedDetector, ScriptedFrames};
use monitor::{init_logging, ConsoleAlarm, MonitorConfig, MonitorSession};
use tokio::sync::{mpsc, watch};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Driver Drowsiness Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let config = MonitorConfig::load()?;
    info!(
        plate = %config.plate_number,
        alarm_threshold = config.alarm_threshold,
        yawn_threshold = config.yawn_threshold,
        "session configured"
    );

    // Ctrl-C ends the session; the loop releases the alarm on the way out.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    // Presentation stand-in: log status transitions from the snapshot stream.
    let (snapshot_tx, mut snapshot_rx) = mpsc::channel::<estimator::Snapshot>(64);
    let display = tokio::spawn(async move {
        let mut last_status = None;
        while let Some(snap) = snapshot_rx.recv().await {
            if last_status != Some(snap.status) {
                info!(
                    status = ?snap.status,
                    eye_closed_frames = snap.eye_closed_frames,
                    yawn_frames = snap.yawn_frames,
                    eye_progress = snap.eye_progress(),
                    "status changed"
                );
                last_status = Some(snap.status);
            }
        }
    });

    // No capture hardware is wired into this workspace; run the scripted
    // drive so the pipeline can be exercised end to end.
    let source = ScriptedFrames::new(60);
    let face_detector = ScriptedDetector::demo();

    let mut session = MonitorSession::new(&config, source, face_detector, ConsoleAlarm)?
        .with_snapshots(snapshot_tx);
    let summary = session.run(shutdown_rx).await?;

    drop(session);
    let _ = display.await;

    info!(
        frames = summary.frames_processed,
        "session complete: {}",
        serde_json::to_string(&summary.last)?
    );

    Ok(())
}
