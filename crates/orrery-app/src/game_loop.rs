//! Fixed-timestep simulation clock.
//!
//! Simulation ticks run at a fixed 60 Hz regardless of render rate, driven
//! by a wall-clock accumulator. Scene positions are pure functions of the
//! accumulated simulation time, so rendering between ticks simply evaluates
//! them at `sim_time + alpha * FIXED_DT`.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Frame time clamp. Frames slower than this accept simulation slowdown
/// instead of running an unbounded number of catch-up ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator-based fixed-timestep clock.
///
/// Call [`advance`](Self::advance) once per rendered frame; it runs zero or
/// more fixed ticks and returns the interpolation alpha in `[0, 1)`.
pub struct FrameClock {
    previous: Instant,
    accumulator: f64,
    sim_time: f64,
    tick_count: u64,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
            accumulator: 0.0,
            sim_time: 0.0,
            tick_count: 0,
            frame_count: 0,
        }
    }

    /// Measure elapsed wall time and run fixed ticks.
    ///
    /// `tick_fn(dt)` is called once per fixed step with `dt = FIXED_DT`.
    pub fn advance(&mut self, tick_fn: impl FnMut(f32)) -> f64 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;
        self.advance_by(frame_time, tick_fn)
    }

    /// Advance by an explicit frame time in seconds.
    pub fn advance_by(&mut self, frame_time: f64, mut tick_fn: impl FnMut(f32)) -> f64 {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                "frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time
        };

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            tick_fn(FIXED_DT as f32);
            self.sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.tick_count += 1;
        }

        self.frame_count += 1;
        self.accumulator / FIXED_DT
    }

    /// Simulation time the scene should be evaluated at for the given alpha.
    pub fn render_time(&self, alpha: f64) -> f32 {
        (self.sim_time + alpha * FIXED_DT) as f32
    }

    /// Accumulated simulation time in seconds.
    pub fn sim_time(&self) -> f32 {
        self.sim_time as f32
    }

    /// Total fixed ticks executed.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total frames advanced.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
