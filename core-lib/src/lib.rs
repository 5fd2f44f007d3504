pub mod bus;
pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod emulator;
pub mod helpers;
pub mod input;
pub mod mmu;
pub mod ppu;

// Re-export common types
pub use bus::MemoryBus;
pub use cartridge::{CartridgeError, RomHeader, RomImage};
pub use config::EmulatorConfig;
pub use cpu::CPU;
pub use emulator::Emulator;
pub use input::{Button, Controller, ParseButtonError};
pub use mmu::Memory;
pub use ppu::Ppu;
