use crate::bus::MemoryBus;
use crate::cartridge::{CartridgeError, RomImage};
use tracing::{debug, instrument, trace, warn};

pub mod region;
pub use region::{decode, MemoryRegion};

pub const WRAM_SIZE: usize = 128 * 1024;
pub const SRAM_SIZE: usize = 32 * 1024;
pub const VRAM_SIZE: usize = 64 * 1024;
pub const CGRAM_SIZE: usize = 512;
pub const OAM_SIZE: usize = 544;

/// Value returned for reads that hit no device
pub const OPEN_BUS: u8 = 0;

/// Owner of every addressable byte in the system
#[derive(Debug, Clone)]
pub struct Memory {
    pub(crate) wram: Box<[u8]>,  // 128KB Work RAM
    pub(crate) sram: Box<[u8]>,  // 32KB Save RAM
    pub(crate) vram: Box<[u8]>,  // 64KB Video RAM
    pub(crate) cgram: Box<[u8]>, // 512B Palette RAM
    pub(crate) oam: Box<[u8]>,   // 544B Object Attribute Memory
    rom: RomImage,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            wram: vec![0; WRAM_SIZE].into_boxed_slice(),
            sram: vec![0; SRAM_SIZE].into_boxed_slice(),
            vram: vec![0; VRAM_SIZE].into_boxed_slice(),
            cgram: vec![0; CGRAM_SIZE].into_boxed_slice(),
            oam: vec![0; OAM_SIZE].into_boxed_slice(),
            rom: RomImage::default(),
        }
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cartridge ROM wholesale. Other regions keep their contents.
    ///
    /// # Errors
    /// Returns an error, leaving memory untouched, if no ROM bytes remain
    /// after copier-header stripping.
    #[instrument(level = "debug", skip(self, data), fields(len = data.len()))]
    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), CartridgeError> {
        match RomImage::from_bytes(data) {
            Ok(rom) => {
                debug!(banks = rom.bank_count(), "ROM loaded");
                self.rom = rom;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "ROM load rejected; keeping previous image");
                Err(err)
            }
        }
    }

    /// Read a byte from memory
    pub fn read(&self, addr: u32) -> u8 {
        match decode(addr) {
            MemoryRegion::Wram(index) | MemoryRegion::WramMirror(index) => self.wram[index],
            MemoryRegion::Rom { bank, offset } => self
                .rom
                .bank(bank)
                .and_then(|data| data.get(offset))
                .copied()
                .unwrap_or(OPEN_BUS),
            MemoryRegion::Unmapped => OPEN_BUS,
        }
    }

    /// Write a byte to memory. Read-only and unmapped targets drop the write.
    pub fn write(&mut self, addr: u32, value: u8) {
        match decode(addr) {
            MemoryRegion::Wram(index) | MemoryRegion::WramMirror(index) => {
                self.wram[index] = value;
            }
            region => {
                trace!(?region, "write to {addr:#08X} dropped");
            }
        }
    }

    pub const fn rom(&self) -> &RomImage {
        &self.rom
    }

    pub fn rom_bank_count(&self) -> usize {
        self.rom.bank_count()
    }

    pub fn wram(&self) -> &[u8] {
        &self.wram
    }

    pub fn sram(&self) -> &[u8] {
        &self.sram
    }

    pub fn vram(&self) -> &[u8] {
        &self.vram
    }

    pub fn cgram(&self) -> &[u8] {
        &self.cgram
    }

    pub fn oam(&self) -> &[u8] {
        &self.oam
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u32) -> u8 {
        self.read(addr)
    }

    fn write(&mut self, addr: u32, value: u8) {
        self.write(addr, value);
    }

    fn rom_loaded(&self) -> bool {
        !self.rom.is_empty()
    }
}
