//! Frame timing utilities

use std::time::{Duration, Instant};

/// Tracks frame timing: per-frame delta, total elapsed time, and FPS.
///
/// Elapsed time is monotonic from construction and drives the planet's
/// rotation; delta drives camera damping.
pub struct FrameTimer {
    start: Instant,
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
    fps_timer: Instant,
    fps: f32,
    fps_frame_count: u32,
}

impl FrameTimer {
    /// Create a new frame timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fps_timer: now,
            fps: 0.0,
            fps_frame_count: 0,
        }
    }

    /// Call once per frame to update timing
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
        self.fps_frame_count += 1;

        // Update FPS every second
        let fps_elapsed = now - self.fps_timer;
        if fps_elapsed >= Duration::from_secs(1) {
            self.fps = self.fps_frame_count as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = 0;
            self.fps_timer = now;
        }
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds elapsed since the timer was created
    pub fn elapsed_secs(&self) -> f32 {
        self.last_frame.duration_since(self.start).as_secs_f32()
    }

    /// Get current FPS (updated every second)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_monotonic() {
        let mut timer = FrameTimer::new();
        let mut prev = timer.elapsed_secs();
        for _ in 0..3 {
            std::thread::sleep(Duration::from_millis(2));
            timer.tick();
            let now = timer.elapsed_secs();
            assert!(now >= prev, "elapsed went backwards: {now} < {prev}");
            prev = now;
        }
        assert_eq!(timer.frame_count(), 3);
    }

    #[test]
    fn test_delta_positive_after_tick() {
        let mut timer = FrameTimer::new();
        std::thread::sleep(Duration::from_millis(2));
        timer.tick();
        assert!(timer.delta_secs() > 0.0);
    }
}
