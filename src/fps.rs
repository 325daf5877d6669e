//! Frame-rate measurement over a sliding window of frame timestamps.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_WINDOW: usize = 30;

/// Keeps the last `window + 1` frame timestamps, i.e. `window` intervals.
#[derive(Clone, Debug)]
pub struct FpsTracker {
    frames: VecDeque<Instant>,
    window: usize,
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl FpsTracker {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            frames: VecDeque::with_capacity(window + 1),
            window,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn record_frame(&mut self) {
        self.record_frame_at(Instant::now());
    }

    /// Timestamps older than the newest recorded one are dropped.
    pub fn record_frame_at(&mut self, at: Instant) {
        if let Some(&last) = self.frames.back() {
            if at < last {
                return;
            }
        }
        self.frames.push_back(at);
        while self.frames.len() > self.window + 1 {
            self.frames.pop_front();
        }
    }

    fn span(&self) -> Option<Duration> {
        let first = *self.frames.front()?;
        let last = *self.frames.back()?;
        let span = last.duration_since(first);
        (self.frames.len() >= 2 && !span.is_zero()).then_some(span)
    }

    /// Frames per second over the window; 0 until two distinct frames exist.
    pub fn fps(&self) -> f64 {
        match self.span() {
            Some(span) => (self.frames.len() - 1) as f64 / span.as_secs_f64(),
            None => 0.0,
        }
    }

    /// Mean interval between recorded frames.
    pub fn frame_time(&self) -> Option<Duration> {
        let span = self.span()?;
        Some(span / (self.frames.len() - 1) as u32)
    }

    pub fn reset(&mut self) {
        self.frames.clear();
    }
}
