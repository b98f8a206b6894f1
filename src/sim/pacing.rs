//! Frame pacing: how many ticks to run per host frame callback
//!
//! `PerFrame` runs exactly one tick per callback and matches the classic
//! behaviour, where simulation speed follows the display refresh rate.
//! `FixedStep` decouples the two with an accumulator; this changes tick
//! timing relative to `PerFrame` and is opt-in.

/// Pacing policy for the host loop
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pacing {
    /// One tick per frame callback, regardless of elapsed time
    #[default]
    PerFrame,
    /// Accumulate real time and run one tick per `step` seconds
    FixedStep {
        /// Seconds per tick
        step: f32,
        /// Maximum ticks per frame to prevent spiral of death
        max_substeps: u32,
    },
}

/// Tick rate the fixed-step mode defaults to (one tick per 60 Hz frame)
pub const DEFAULT_STEP: f32 = 1.0 / 60.0;
pub const DEFAULT_MAX_SUBSTEPS: u32 = 8;

impl Pacing {
    pub fn fixed_60hz() -> Self {
        Pacing::FixedStep {
            step: DEFAULT_STEP,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

/// Converts frame deltas into tick counts
#[derive(Debug, Clone)]
pub struct FramePacer {
    pub pacing: Pacing,
    accumulator: f32,
}

impl FramePacer {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            accumulator: 0.0,
        }
    }

    /// Number of ticks to run for a frame that took `frame_dt` seconds
    ///
    /// Negative or non-finite deltas count as zero elapsed time.
    pub fn ticks_for_frame(&mut self, frame_dt: f32) -> u32 {
        match self.pacing {
            Pacing::PerFrame => 1,
            Pacing::FixedStep { step, max_substeps } => {
                if step.is_nan() || step <= 0.0 {
                    return 0;
                }
                let dt = if frame_dt.is_finite() { frame_dt.clamp(0.0, 0.1) } else { 0.0 };
                self.accumulator += dt;

                let mut substeps = 0;
                while self.accumulator >= step && substeps < max_substeps {
                    self.accumulator -= step;
                    substeps += 1;
                }
                // Drop backlog the substep cap could not absorb
                if substeps == max_substeps && self.accumulator >= step {
                    log::warn!("Frame pacer dropping {:.3}s of backlog", self.accumulator);
                    self.accumulator %= step;
                }
                substeps
            }
        }
    }

    /// Forget banked time, e.g. after the host was suspended
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Pacing::default())
    }
}
