//! # ALU (Arithmetic Logic Unit)
//!
//! Pure operand transforms. Nothing here touches processor state: the step
//! pipeline feeds in the source operand, the auxiliary register and the
//! current carry, then commits the returned [`AluOutput`] itself.
//!
//! Decimal mode is not implemented; ADC and SBC are always binary, as on the
//! NES CPU.

/// Operation selector stored in each opcode descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Result is the source operand (loads, stores, transfers, stack moves).
    Pass,
    Add,
    Subtract,
    And,
    Or,
    Xor,
    /// AND used only for flags: Z from `A & M`, N and V from bits 7 and 6 of M.
    BitTest,
    ShiftLeft,
    ShiftRight,
    RotateLeft,
    RotateRight,
    Increment,
    Decrement,
    Compare,
}

/// Result byte plus the flag signals an operation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluOutput {
    pub result: u8,
    pub carry: bool,
    pub overflow: bool,
    pub zero: bool,
    pub negative: bool,
}

impl AluOutput {
    /// Builds an output whose Z and N come straight from `result`.
    pub fn from_result(result: u8, carry: bool, overflow: bool) -> Self {
        Self {
            result,
            carry,
            overflow,
            zero: result == 0,
            negative: result & 0x80 != 0,
        }
    }
}

/// Runs `op` on `src` (the operand) and `aux` (the auxiliary register).
///
/// `carry_in` and `overflow_in` are returned unchanged by operations that
/// do not produce those signals; the descriptor decides which flags are
/// actually committed.
pub fn execute(op: AluOp, src: u8, aux: u8, carry_in: bool, overflow_in: bool) -> AluOutput {
    match op {
        AluOp::Pass => AluOutput::from_result(src, carry_in, overflow_in),
        AluOp::Add => add_with_carry(aux, src, carry_in),
        // A - M - (1 - C) == A + !M + C
        AluOp::Subtract => add_with_carry(aux, !src, carry_in),
        AluOp::And => AluOutput::from_result(aux & src, carry_in, overflow_in),
        AluOp::Or => AluOutput::from_result(aux | src, carry_in, overflow_in),
        AluOp::Xor => AluOutput::from_result(aux ^ src, carry_in, overflow_in),
        AluOp::BitTest => {
            let result = aux & src;
            AluOutput {
                result,
                carry: carry_in,
                overflow: src & 0x40 != 0,
                zero: result == 0,
                negative: src & 0x80 != 0,
            }
        }
        AluOp::ShiftLeft => AluOutput::from_result(src << 1, src & 0x80 != 0, overflow_in),
        AluOp::RotateLeft => AluOutput::from_result(
            (src << 1) | carry_in as u8,
            src & 0x80 != 0,
            overflow_in,
        ),
        AluOp::ShiftRight => AluOutput::from_result(src >> 1, src & 0x01 != 0, overflow_in),
        AluOp::RotateRight => AluOutput::from_result(
            (src >> 1) | ((carry_in as u8) << 7),
            src & 0x01 != 0,
            overflow_in,
        ),
        AluOp::Increment => AluOutput::from_result(src.wrapping_add(1), carry_in, overflow_in),
        AluOp::Decrement => AluOutput::from_result(src.wrapping_sub(1), carry_in, overflow_in),
        AluOp::Compare => AluOutput::from_result(aux.wrapping_sub(src), aux >= src, overflow_in),
    }
}

fn add_with_carry(a: u8, value: u8, carry_in: bool) -> AluOutput {
    let sum = a as u16 + value as u16 + carry_in as u16;
    let result = sum as u8;

    // Both inputs share a sign and the result's sign differs
    let overflow = (a ^ result) & (value ^ result) & 0x80 != 0;

    AluOutput::from_result(result, sum > 0xFF, overflow)
}
