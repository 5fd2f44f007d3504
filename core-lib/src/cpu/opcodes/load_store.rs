//! Load opcode macros.
//!
//! Operands are always one byte wide; see `DESIGN.md` for the M/X width decision.

/// Registers an immediate load: fetch one operand byte into `$reg`, then update N/Z.
macro_rules! load_immediate {
    ($table:ident, $code:expr, $mnemonic:ident, $reg:ident) => {
        ::pastey::paste! {
            fn [<exec_ $mnemonic:lower _immediate>](cpu: &mut CPU, bus: &mut dyn MemoryBus) {
                let value = cpu.fetch_byte(bus);
                cpu.regs.$reg = u16::from(value);
                cpu.set_nz(value);
            }
            $table[$code] = Opcode {
                mnemonic: concat!(stringify!($mnemonic), " #"),
                base_cycles: 2,
                exec: [<exec_ $mnemonic:lower _immediate>],
            };
        }
    };
}

pub(crate) use load_immediate;
