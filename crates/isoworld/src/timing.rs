//! # Loop Timing
//!
//! ```text
//! measured delta ──cap──▶ accumulator ──while ≥ step──▶ logic tick
//! ```
//!
//! Logic always advances in whole fixed steps. A long stall (debugger,
//! window drag) is capped so the loop does not try to catch up for seconds.

use isoworld_shared::constants::MAX_FRAME_DELTA;

/// Fixed-timestep accumulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    max_delta: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// `step` and `max_delta` in seconds. A `max_delta` that is not a
    /// positive number falls back to [`MAX_FRAME_DELTA`].
    #[must_use]
    pub fn new(step: f32, max_delta: f32) -> Self {
        let max_delta = if max_delta.is_finite() && max_delta > 0.0 {
            max_delta
        } else {
            MAX_FRAME_DELTA
        };
        Self {
            step,
            max_delta,
            accumulator: 0.0,
        }
    }

    /// Logic step in seconds.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Adds a frame's elapsed time and returns how many logic steps are due.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if self.step.is_nan() || self.step <= 0.0 {
            return 0;
        }
        if delta.is_nan() {
            return 0;
        }
        self.accumulator += delta.clamp(0.0, self.max_delta);

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, in `[0, 1)`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        if self.step > 0.0 {
            self.accumulator / self.step
        } else {
            0.0
        }
    }
}

/// Timing of one displayed frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number, starting at 0.
    pub frame: u64,
    /// Wall time from `begin_frame` to the end of `end_frame`, microseconds.
    pub total_us: u64,
    /// Logic steps run this frame.
    pub logic_steps: u32,
    /// Objects drawn this frame.
    pub objects_drawn: u32,
}

/// Aggregates [`FrameStats`] over a run.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Frames recorded.
    pub frames_recorded: u64,
    /// Sum of frame times.
    pub total_us_sum: u64,
    /// Sum of logic steps.
    pub logic_steps_sum: u64,
    /// Shortest frame.
    pub min_frame_us: u64,
    /// Longest frame.
    pub max_frame_us: u64,
    /// Frames slower than the budget.
    pub frames_over_budget: u64,
    budget_us: u64,
}

impl FrameStatsAccumulator {
    /// Creates an accumulator with a per-frame budget in microseconds.
    #[must_use]
    pub const fn new(budget_us: u64) -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            logic_steps_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
            budget_us,
        }
    }

    /// Budget derived from a target frame rate.
    #[must_use]
    pub fn for_fps(target_fps: u32) -> Self {
        Self::new(1_000_000 / u64::from(target_fps.max(1)))
    }

    /// Records one frame.
    pub fn record(&mut self, stats: FrameStats) {
        self.frames_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.logic_steps_sum += u64::from(stats.logic_steps);
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);

        if stats.total_us > self.budget_us {
            self.frames_over_budget += 1;
        }
    }

    /// Average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Average FPS.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Share of frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Emits a one-event summary at `info` level.
    pub fn log_summary(&self) {
        let min_ms = if self.frames_recorded == 0 {
            0.0
        } else {
            self.min_frame_us as f64 / 1000.0
        };
        tracing::info!(
            frames = self.frames_recorded,
            avg_ms = self.avg_frame_ms(),
            avg_fps = self.avg_fps(),
            min_ms,
            max_ms = self.max_frame_us as f64 / 1000.0,
            over_budget = self.frames_over_budget,
            logic_steps = self.logic_steps_sum,
            "frame statistics"
        );
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::for_fps(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_accumulate() {
        let mut t = FixedTimestep::new(0.01, 0.25);
        assert_eq!(t.advance(0.025), 2);
        assert!((t.alpha() - 0.5).abs() < 1e-3);
        assert_eq!(t.advance(0.006), 1);
        assert_eq!(t.advance(0.0), 0);
    }

    #[test]
    fn test_delta_is_capped() {
        let mut t = FixedTimestep::new(0.01, 0.25);
        let steps = t.advance(10.0);
        assert!((24..=25).contains(&steps), "got {steps}");
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut t = FixedTimestep::new(0.01, 0.25);
        assert_eq!(t.advance(-1.0), 0);
        assert!(t.alpha().abs() < f32::EPSILON);
    }

    #[test]
    fn test_bad_cap_falls_back_to_default() {
        for cap in [-1.0, 0.0, f32::NAN, f32::INFINITY] {
            let mut t = FixedTimestep::new(0.01, cap);
            let steps = t.advance(10.0);
            assert!((24..=25).contains(&steps), "cap {cap}: got {steps}");
        }
        let mut t = FixedTimestep::new(0.01, 0.25);
        assert_eq!(t.advance(f32::NAN), 0);
        assert_eq!(t.advance(0.025), 2);
    }

    #[test]
    fn test_accumulator_stats() {
        let mut acc = FrameStatsAccumulator::new(10_000);
        for (i, us) in [5_000u64, 15_000, 10_000].into_iter().enumerate() {
            acc.record(FrameStats {
                frame: i as u64,
                total_us: us,
                logic_steps: 1,
                objects_drawn: 0,
            });
        }
        assert_eq!(acc.frames_recorded, 3);
        assert_eq!(acc.min_frame_us, 5_000);
        assert_eq!(acc.max_frame_us, 15_000);
        assert_eq!(acc.frames_over_budget, 1);
        assert!((acc.avg_frame_ms() - 10.0).abs() < 1e-9);
        assert!((acc.avg_fps() - 100.0).abs() < 1e-9);
        assert!((acc.over_budget_ratio() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_accumulator() {
        let acc = FrameStatsAccumulator::default();
        assert!(acc.avg_fps().abs() < f64::EPSILON);
        acc.log_summary();
    }
}
