//! # Status Register
//!
//! The 6502 processor status word (`P`), bit layout NV-BDIZC:
//!
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, reads back as 1
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

use crate::instructions::alu::AluOutput;

bitflags! {
    /// Processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Status word after power-on or reset ($34).
    pub const POWER_ON: Status = Status::INTERRUPT_DISABLE
        .union(Status::BREAK)
        .union(Status::UNUSED);

    /// Commits the ALU signals for every flag named in `updates`.
    ///
    /// Flags outside `updates` are left as they were.
    pub fn apply(&mut self, updates: Status, out: &AluOutput) {
        if updates.contains(Status::ZERO) {
            self.set(Status::ZERO, out.zero);
        }
        if updates.contains(Status::NEGATIVE) {
            self.set(Status::NEGATIVE, out.negative);
        }
        if updates.contains(Status::CARRY) {
            self.set(Status::CARRY, out.carry);
        }
        if updates.contains(Status::OVERFLOW) {
            self.set(Status::OVERFLOW, out.overflow);
        }
    }

    /// The byte written to the stack by PHP: B and the unused bit read as 1.
    pub fn pushed_by_instruction(self) -> u8 {
        (self | Status::BREAK | Status::UNUSED).bits()
    }

    /// The byte written to the stack when an interrupt is serviced.
    pub fn pushed_by_interrupt(self) -> u8 {
        ((self - Status::BREAK) | Status::UNUSED).bits()
    }

    /// Rebuilds the register from a byte pulled off the stack.
    pub fn pulled(value: u8) -> Status {
        Status::from_bits_retain(value) | Status::UNUSED
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_ON
    }
}
