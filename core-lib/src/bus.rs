/// core-lib/src/bus.rs
use crate::helpers::ADDRESS_MASK;

/// Trait for memory access abstraction across the system
///
/// Addresses are 24-bit (`bank:offset`); bits above 23 are ignored.
pub trait MemoryBus {
    fn read(&self, addr: u32) -> u8;

    /// Write a byte. Writes that hit read-only or unmapped space are dropped.
    fn write(&mut self, addr: u32, value: u8);

    /// True once a cartridge image has been loaded
    fn rom_loaded(&self) -> bool;

    /// Read a 16-bit value from memory in little-endian format
    fn read_word(&self, addr: u32) -> u16 {
        let lo = u16::from(self.read(addr));
        let hi = u16::from(self.read(addr.wrapping_add(1) & ADDRESS_MASK));
        (hi << 8) | lo
    }

    /// Write a 16-bit value to memory in little-endian format
    fn write_word(&mut self, addr: u32, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1) & ADDRESS_MASK, hi);
    }
}
