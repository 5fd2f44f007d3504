//! Types for CPU opcode definitions.
//!
//! This module defines the `Opcode` table entry and the fallback used for
//! every opcode without a registered handler.

use super::CPU;
use crate::bus::MemoryBus;

/// Handler signature: may fetch operands through the bus and mutate the CPU.
pub type ExecFn = fn(&mut CPU, &mut dyn MemoryBus);

/// Mnemonic carried by unregistered table entries
pub const UNIMPLEMENTED_MNEMONIC: &str = "???";
/// Cycles charged for an unregistered opcode
pub const UNIMPLEMENTED_CYCLES: u32 = 2;

/// Represents a single CPU opcode and its execution logic.
#[derive(Debug, Clone, Copy)]
pub struct Opcode {
    /// Human-readable mnemonic for debugging and disassembly.
    pub mnemonic: &'static str,
    /// Cycles added to the CPU counter after execution.
    pub base_cycles: u32,
    /// The function that executes the opcode.
    pub exec: ExecFn,
}

impl Opcode {
    pub const UNIMPLEMENTED: Self = Self {
        mnemonic: UNIMPLEMENTED_MNEMONIC,
        base_cycles: UNIMPLEMENTED_CYCLES,
        exec: skip,
    };

    pub fn is_implemented(&self) -> bool {
        self.mnemonic != UNIMPLEMENTED_MNEMONIC
    }
}

/// Fallback handler: the opcode byte has already been consumed, nothing else happens.
fn skip(_: &mut CPU, _: &mut dyn MemoryBus) {}
