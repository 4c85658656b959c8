//! # Display
//!
//! Where finished frames go, and the clock the loop is timed with.

use std::time::Instant;

use isoworld_rendering::FrameBuffer;

/// A presentation target.
pub trait Display {
    /// Shows a finished frame.
    fn present(&mut self, frame: &FrameBuffer);

    /// Milliseconds since the display was created.
    fn ticks_ms(&self) -> u64;
}

#[derive(Clone, Copy, Debug)]
enum Clock {
    Real(Instant),
    Simulated { now_ms: u64, step_ms: u64 },
}

/// Keeps the last presented frame in memory instead of showing it.
///
/// With a simulated clock every `present` advances time by a fixed amount,
/// which makes whole runs reproducible.
#[derive(Clone, Debug)]
pub struct HeadlessDisplay {
    clock: Clock,
    frames_presented: u64,
    last_frame: Vec<u32>,
}

impl HeadlessDisplay {
    /// Display driven by the wall clock.
    #[must_use]
    pub fn real_time() -> Self {
        Self {
            clock: Clock::Real(Instant::now()),
            frames_presented: 0,
            last_frame: Vec::new(),
        }
    }

    /// Display whose clock advances `step_ms` per presented frame.
    #[must_use]
    pub fn simulated(step_ms: u64) -> Self {
        Self {
            clock: Clock::Simulated { now_ms: 0, step_ms },
            frames_presented: 0,
            last_frame: Vec::new(),
        }
    }

    /// Frames presented so far.
    #[must_use]
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Pixels of the last presented frame, empty before the first.
    #[must_use]
    pub fn last_frame(&self) -> &[u32] {
        &self.last_frame
    }
}

impl Display for HeadlessDisplay {
    fn present(&mut self, frame: &FrameBuffer) {
        // Same size every frame, so this only allocates once.
        self.last_frame.clear();
        self.last_frame.extend_from_slice(frame.pixels());
        self.frames_presented += 1;

        if let Clock::Simulated { now_ms, step_ms } = &mut self.clock {
            *now_ms += *step_ms;
        }
    }

    fn ticks_ms(&self) -> u64 {
        match self.clock {
            Clock::Real(start) => start.elapsed().as_millis() as u64,
            Clock::Simulated { now_ms, .. } => now_ms,
        }
    }
}
