//! System context: owns every component and drives them in lock step.
//!
//! One [`Emulator::tick`] runs a burst of CPU instructions and then a single
//! PPU line. There is no cycle-exact interleaving; the burst size comes from
//! [`EmulatorConfig::cpu_steps_per_tick`].

use tracing::{debug, instrument};

use crate::cartridge::CartridgeError;
use crate::config::EmulatorConfig;
use crate::cpu::CPU;
use crate::input::{Button, Controller};
use crate::mmu::Memory;
use crate::ppu::{Ppu, LINES_PER_FRAME};

#[derive(Debug, Clone, Default)]
pub struct Emulator {
    pub memory: Memory,
    pub cpu: CPU,
    pub ppu: Ppu,
    pub controller: Controller,
    config: EmulatorConfig,
    paused: bool,
}

impl Emulator {
    pub fn new(config: EmulatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub const fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Load a ROM image and reset the CPU through its vector.
    ///
    /// # Errors
    /// Propagates [`CartridgeError`] from the memory; on error nothing changes.
    #[instrument(level = "debug", skip(self, data), fields(len = data.len()))]
    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), CartridgeError> {
        self.memory.load_rom(data)?;
        self.cpu.reset(&self.memory);
        Ok(())
    }

    /// Reset CPU and PPU. Memory contents and the loaded ROM are kept.
    pub fn reset(&mut self) {
        self.cpu.reset(&self.memory);
        self.ppu.reset();
        debug!("system reset");
    }

    /// Run one CPU burst then one PPU line.
    ///
    /// Returns `true` if that line completed a frame. A paused emulator does
    /// nothing and returns `false`.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        for _ in 0..self.config.cpu_steps_per_tick {
            self.cpu.step(&mut self.memory);
        }
        self.ppu.step(&self.memory)
    }

    /// Tick until the PPU reports a completed frame.
    ///
    /// Returns `false` without running if paused.
    pub fn run_frame(&mut self) -> bool {
        for _ in 0..LINES_PER_FRAME {
            if self.tick() {
                return true;
            }
            if self.paused {
                break;
            }
        }
        false
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        self.paused
    }

    pub fn press(&mut self, button: Button) {
        self.controller.press(button);
    }

    pub fn release(&mut self, button: Button) {
        self.controller.release(button);
    }

    /// Press by name; unknown names are ignored
    pub fn press_named(&mut self, name: &str) {
        self.controller.press_named(name);
    }

    /// Release by name; unknown names are ignored
    pub fn release_named(&mut self, name: &str) {
        self.controller.release_named(name);
    }

    /// The RGB framebuffer. Complete only right after a frame edge.
    pub fn frame_buffer(&self) -> &[u8] {
        self.ppu.frame_buffer()
    }
}
