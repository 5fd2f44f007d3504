//! Main entry point for the CPU opcodes module.
//!
//! The dispatch table maps every opcode byte to a handler and its base cycle
//! cost. Opcodes without a registered handler keep the fallback entry, which
//! charges a fixed cost and has no other effect.
use once_cell::sync::Lazy;

mod flags;
mod jump;
mod load_store;
mod types;

pub use types::{Opcode, UNIMPLEMENTED_CYCLES, UNIMPLEMENTED_MNEMONIC};

use crate::bus::MemoryBus;
use crate::cpu::{StatusFlags, CPU};
use flags::flag_op;
use load_store::load_immediate;

/// The main opcode table for the CPU (0x00..=0xFF).
pub static OPCODES: Lazy<[Opcode; 256]> = Lazy::new(|| {
    let mut table = [Opcode::UNIMPLEMENTED; 256];

    table[0xEA] = Opcode {
        mnemonic: "NOP",
        base_cycles: 2,
        exec: |_, _| {},
    };

    // --- Status flags ---
    flag_op!(table, 0x18, CLC, CARRY, false);
    flag_op!(table, 0x38, SEC, CARRY, true);
    flag_op!(table, 0x58, CLI, IRQ_DISABLE, false);
    flag_op!(table, 0x78, SEI, IRQ_DISABLE, true);
    flag_op!(table, 0xB8, CLV, OVERFLOW, false);
    flag_op!(table, 0xD8, CLD, DECIMAL, false);
    flag_op!(table, 0xF8, SED, DECIMAL, true);

    // --- Immediate loads ---
    load_immediate!(table, 0xA9, LDA, a);
    load_immediate!(table, 0xA2, LDX, x);
    load_immediate!(table, 0xA0, LDY, y);

    // --- Jumps ---
    table[0x4C] = Opcode {
        mnemonic: "JMP abs",
        base_cycles: 3,
        exec: jump::jmp_absolute,
    };

    table
});
