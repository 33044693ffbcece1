//! Timing helpers for movers and the render loop.

use std::time::Duration;

use crate::types::{MAX_FPS, MIN_FPS};

/// Delay between two row increments: `1_000_000 / velocity` microseconds.
pub fn step_interval(velocity: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(velocity.max(1)))
}

/// Delay between two frames, with `fps` clamped to the supported range.
pub fn frame_interval(fps: u8) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(fps.clamp(MIN_FPS, MAX_FPS)))
}
