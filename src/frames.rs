//! Frame ticks at a target rate, standing in for the host renderer's frame callback.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

pub const MAX_TARGET_FPS: u32 = 240;

pub fn frame_period(target_fps: u32) -> Duration {
    let fps = target_fps.clamp(1, MAX_TARGET_FPS);
    Duration::from_secs_f64(1.0 / fps as f64)
}

/// Receiving end of a running frame task. Dropping it stops the task.
pub struct FrameSource {
    pub target_fps: u32,
    pub ticks: mpsc::UnboundedReceiver<std::time::Instant>,
}

/// Spawn a tokio task emitting one tick per frame period.
pub fn spawn_frame_source(target_fps: u32) -> FrameSource {
    let (tx, rx) = mpsc::unbounded_channel();
    let period = frame_period(target_fps);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            let at = interval.tick().await;
            if tx.send(at.into_std()).is_err() {
                log::debug!("frame source ({} fps) stopped: receiver dropped", target_fps);
                break;
            }
        }
    });
    FrameSource {
        target_fps,
        ticks: rx,
    }
}
