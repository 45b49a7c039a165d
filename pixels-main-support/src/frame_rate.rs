use log::warn;
use std::time::{Duration, Instant};

pub const MIN_FPS: u32 = 10;
pub const MAX_FPS: u32 = 60;

const SAMPLE_PERIOD: Duration = Duration::from_secs(1);

/// Cap on how many generations are stepped per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRate {
    fps: u32,
}

impl FrameRate {
    pub fn new(fps: u32) -> Self {
        let clamped = fps.clamp(MIN_FPS, MAX_FPS);
        if clamped != fps {
            warn!("Frame rate {fps} is outside {MIN_FPS}..={MAX_FPS}, using {clamped}");
        }
        Self { fps: clamped }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

/// Measures the achieved tick rate over roughly one-second windows.
#[derive(Debug, Default)]
pub struct FpsMeter {
    window_start: Option<Instant>,
    ticks: u32,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tick at `now`. Returns a fresh measurement once a full
    /// sample period has passed.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };
        self.ticks += 1;
        let elapsed = now.duration_since(start);
        if elapsed < SAMPLE_PERIOD {
            return None;
        }
        let rate = self.ticks as f64 / elapsed.as_secs_f64();
        self.window_start = Some(now);
        self.ticks = 0;
        Some(rate)
    }

    /// Forgets the current window, e.g. after a pause.
    pub fn reset(&mut self) {
        self.window_start = None;
        self.ticks = 0;
    }
}
