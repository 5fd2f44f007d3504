//! Driver configuration

use std::time::Duration;

/// CPU steps run before each PPU line
pub const DEFAULT_CPU_STEPS_PER_TICK: usize = 1000;
/// Host frame pacing period (~60 Hz)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// CPU instructions executed per tick. Not cycle-exact: the whole burst
    /// runs before the PPU advances one line.
    pub cpu_steps_per_tick: usize,
    /// Wall-clock period between frames for a paced driver. The core itself
    /// never sleeps.
    pub frame_interval: Duration,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            cpu_steps_per_tick: DEFAULT_CPU_STEPS_PER_TICK,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl EmulatorConfig {
    #[must_use]
    pub const fn with_cpu_steps_per_tick(mut self, steps: usize) -> Self {
        self.cpu_steps_per_tick = steps;
        self
    }

    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}
