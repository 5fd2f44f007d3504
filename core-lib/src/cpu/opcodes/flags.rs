//! Implied-mode status flag instructions (CLC, SEC, CLI, SEI, CLV, CLD, SED).

/// Registers an implied instruction that sets or clears a single status flag.
macro_rules! flag_op {
    ($table:ident, $code:expr, $mnemonic:ident, $flag:ident, $value:expr) => {
        ::pastey::paste! {
            fn [<exec_ $mnemonic:lower>](cpu: &mut CPU, _: &mut dyn MemoryBus) {
                cpu.regs.p.set(StatusFlags::$flag, $value);
            }
            $table[$code] = Opcode {
                mnemonic: stringify!($mnemonic),
                base_cycles: 2,
                exec: [<exec_ $mnemonic:lower>],
            };
        }
    };
}

pub(crate) use flag_op;
