//! Address decoding for the 24-bit bus.
//!
//! Precedence is fixed and the first matching rule wins:
//!
//! 1. Banks 0x7E-0x7F: full 128 KiB work RAM
//! 2. Offsets 0x0000-0x1FFF of any bank: low work RAM mirror
//! 3. Banks 0x80-0xFF, offsets 0x8000-0xFFFF: ROM bank `bank - 0x80`
//! 4. Banks 0x00-0x3F, offsets 0x8000-0xFFFF: ROM bank `bank` (`LoROM`)
//! 5. Anything else is unmapped

use crate::helpers::split_address;

pub const WRAM_BANK_FIRST: u8 = 0x7E;
pub const WRAM_BANK_LAST: u8 = 0x7F;
pub const LOW_RAM_MIRROR_END: u16 = 0x2000;
pub const ROM_WINDOW_START: u16 = 0x8000;
pub const HIGH_ROM_BANK_BASE: u8 = 0x80;
pub const LOW_ROM_BANK_END: u8 = 0x40;

/// Where an address lands after decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    /// Linear index into work RAM via banks 0x7E/0x7F
    Wram(usize),
    /// Linear index into the first 8 KiB of work RAM, visible from any bank
    WramMirror(usize),
    /// Cartridge ROM; read-only, and only mapped if the bank exists
    Rom { bank: usize, offset: usize },
    Unmapped,
}

impl MemoryRegion {
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Wram(_) | Self::WramMirror(_))
    }
}

/// Decode a 24-bit address. Bits above 23 are ignored.
pub const fn decode(addr: u32) -> MemoryRegion {
    let (bank, offset) = split_address(addr);

    if bank == WRAM_BANK_FIRST || bank == WRAM_BANK_LAST {
        let index = (((bank - WRAM_BANK_FIRST) as usize) << 16) | offset as usize;
        return MemoryRegion::Wram(index);
    }
    if offset < LOW_RAM_MIRROR_END {
        return MemoryRegion::WramMirror(offset as usize);
    }
    if offset >= ROM_WINDOW_START {
        let rom_offset = (offset - ROM_WINDOW_START) as usize;
        if bank >= HIGH_ROM_BANK_BASE {
            return MemoryRegion::Rom {
                bank: (bank - HIGH_ROM_BANK_BASE) as usize,
                offset: rom_offset,
            };
        }
        if bank < LOW_ROM_BANK_END {
            return MemoryRegion::Rom {
                bank: bank as usize,
                offset: rom_offset,
            };
        }
    }
    MemoryRegion::Unmapped
}
