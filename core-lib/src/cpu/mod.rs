use crate::bus::MemoryBus;
use crate::helpers::join_address;
use bitflags::bitflags;
use tracing::{debug, instrument, trace};

mod opcodes;
pub use opcodes::{Opcode, OPCODES, UNIMPLEMENTED_CYCLES, UNIMPLEMENTED_MNEMONIC};

/// Little-endian reset vector, bank 0
pub const RESET_VECTOR: u32 = 0x00_FFFC;
pub const RESET_STACK_POINTER: u16 = 0x01FF;
pub const RESET_STATUS: StatusFlags = StatusFlags::from_bits_truncate(0x34);

bitflags! {
    /// Processor status register (P)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY        = 0b0000_0001;
        const ZERO         = 0b0000_0010;
        const IRQ_DISABLE  = 0b0000_0100;
        const DECIMAL      = 0b0000_1000;
        const INDEX_WIDTH  = 0b0001_0000; // X: 1 = 8-bit index registers
        const MEMORY_WIDTH = 0b0010_0000; // M: 1 = 8-bit accumulator
        const OVERFLOW     = 0b0100_0000;
        const NEGATIVE     = 0b1000_0000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    pub a: u16,
    pub x: u16,
    pub y: u16,
    pub sp: u16,
    pub pc: u16,
    /// Program bank
    pub pb: u8,
    /// Data bank
    pub db: u8,
    pub p: StatusFlags,
    /// Emulation mode flag
    pub e: bool,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_STACK_POINTER,
            pc: 0,
            pb: 0,
            db: 0,
            p: RESET_STATUS,
            e: true,
        }
    }
}

impl Registers {
    /// Full 24-bit address of the next instruction byte
    pub const fn program_address(&self) -> u32 {
        join_address(self.pb, self.pc)
    }

    pub const fn carry(&self) -> bool {
        self.p.contains(StatusFlags::CARRY)
    }

    pub const fn zero(&self) -> bool {
        self.p.contains(StatusFlags::ZERO)
    }

    pub const fn negative(&self) -> bool {
        self.p.contains(StatusFlags::NEGATIVE)
    }
}

#[derive(Debug, Default, Clone)]
pub struct CPU {
    pub regs: Registers,
    cycles: u64, // Total cycles since power-on
}

impl CPU {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load PC from the reset vector and restore power-on control state.
    ///
    /// A, X, Y, DB and the cycle counter are left untouched.
    #[instrument(level = "debug", skip_all)]
    pub fn reset(&mut self, bus: &dyn MemoryBus) {
        self.regs.pc = bus.read_word(RESET_VECTOR);
        self.regs.pb = 0;
        self.regs.sp = RESET_STACK_POINTER;
        self.regs.p = RESET_STATUS;
        self.regs.e = true;
        debug!("CPU reset, PC={:#06X}", self.regs.pc);
    }

    /// Execute one instruction and return the cycles it cost.
    ///
    /// Does nothing (and costs nothing) until a ROM is loaded.
    pub fn step(&mut self, bus: &mut dyn MemoryBus) -> u32 {
        if !bus.rom_loaded() {
            return 0;
        }
        let opcode = self.fetch_byte(bus);
        let op = &OPCODES[opcode as usize];
        if !op.is_implemented() {
            trace!(
                "Unimplemented opcode {opcode:02X} at {:02X}:{:04X}; skipped",
                self.regs.pb,
                self.regs.pc.wrapping_sub(1)
            );
        }
        #[cfg(feature = "debug")]
        trace!(
            "{:02X}:{:04X} {opcode:02X} {} A={:04X} X={:04X} Y={:04X} P={:02X}",
            self.regs.pb,
            self.regs.pc.wrapping_sub(1),
            op.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.p.bits()
        );
        (op.exec)(self, bus);
        self.cycles += u64::from(op.base_cycles);
        op.base_cycles
    }

    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Table entry for an opcode, for tracing and disassembly
    pub fn opcode_info(opcode: u8) -> &'static Opcode {
        &OPCODES[opcode as usize]
    }

    /// Fetch the byte at `PB:PC` and advance PC.
    ///
    /// PC wraps within its bank; PB is never incremented.
    pub(crate) fn fetch_byte(&mut self, bus: &dyn MemoryBus) -> u8 {
        let value = bus.read(self.regs.program_address());
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    pub(crate) fn fetch_word(&mut self, bus: &dyn MemoryBus) -> u16 {
        let lo = self.fetch_byte(bus);
        let hi = self.fetch_byte(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Update N and Z from an 8-bit result, preserving the other flags
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.regs.p.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
        self.regs.p.set(StatusFlags::ZERO, value == 0);
    }
}
