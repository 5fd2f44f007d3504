//! Jump opcode implementations.

use crate::bus::MemoryBus;
use crate::cpu::CPU;

/// JMP abs: PC takes the little-endian operand, PB is unchanged
pub(crate) fn jmp_absolute(cpu: &mut CPU, bus: &mut dyn MemoryBus) {
    cpu.regs.pc = cpu.fetch_word(bus);
}
