//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for both execution and display of 6502 instructions.
//!
//! The table covers the **151 documented** NMOS 6502 opcodes. Every other
//! byte maps to [`OpcodeMetadata::ILLEGAL`], a one-byte instruction with no
//! effect whose mnemonic displays as `???`.
//!
//! Each entry describes an instruction as data flow: where the operand comes
//! from, which register feeds the ALU alongside it, which ALU operation runs,
//! where the result goes, which flags it updates and how control flow
//! continues. The step pipeline in [`crate::cpu`] interprets these fields; no
//! instruction has its own execute function.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::instructions::alu::AluOp;
use crate::status::Status;

/// Instruction mnemonics of the documented NMOS 6502 set.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    /// Placeholder for opcodes with no documented instruction.
    Illegal,
}

impl Mnemonic {
    /// False only for [`Mnemonic::Illegal`].
    pub const fn is_defined(self) -> bool {
        !matches!(self, Illegal)
    }

    /// Three-letter assembler name, `???` for undefined opcodes.
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC", Bcs => "BCS",
            Beq => "BEQ", Bit => "BIT", Bmi => "BMI", Bne => "BNE", Bpl => "BPL",
            Brk => "BRK", Bvc => "BVC", Bvs => "BVS", Clc => "CLC", Cld => "CLD",
            Cli => "CLI", Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR", Inc => "INC",
            Inx => "INX", Iny => "INY", Jmp => "JMP", Jsr => "JSR", Lda => "LDA",
            Ldx => "LDX", Ldy => "LDY", Lsr => "LSR", Nop => "NOP", Ora => "ORA",
            Pha => "PHA", Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC", Sec => "SEC",
            Sed => "SED", Sei => "SEI", Sta => "STA", Stx => "STX", Sty => "STY",
            Tax => "TAX", Tay => "TAY", Tsx => "TSX", Txa => "TXA", Txs => "TXS",
            Tya => "TYA", Illegal => "???",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place an instruction reads its operand from or writes its result to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    None,
    Accumulator,
    X,
    Y,
    StackPointer,
    /// Not an 8-bit operand; reads as zero and ignores writes. Transfers of
    /// control go through [`Flow`].
    ProgramCounter,
    Status,
    /// The resolved operand: memory, or A for accumulator-mode shifts.
    Memory,
    /// Pull (as a source) or push (as a destination).
    Stack,
}

/// How the program counter moves after an instruction executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// PC += instruction size.
    Next,
    Jump,
    /// Conditional on [`OpcodeMetadata::condition`].
    Branch,
    Call,
    Return,
    ReturnFromInterrupt,
}

/// A single status flag paired with a required or forced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagCondition {
    pub flag: Status,
    pub set: bool,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nes6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction identity, also used for display.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), always
    /// `addressing_mode.size()`.
    pub size_bytes: u8,

    /// Operand source.
    pub src: Location,

    /// Second ALU input (the accumulator for ADC, X for CPX, ...).
    pub aux: Location,

    /// Where the ALU result is committed.
    pub dst: Location,

    pub alu: AluOp,

    /// Flags committed from the ALU output.
    pub updates: Status,

    /// Branch condition, only for [`Flow::Branch`].
    pub condition: Option<FlagCondition>,

    /// Flag forced to a literal value (CLC, SEI, BRK, ...).
    pub forced: Option<FlagCondition>,

    pub flow: Flow,
}

const ZN: Status = Status::ZERO.union(Status::NEGATIVE);
const ZNC: Status = ZN.union(Status::CARRY);
const ZNCV: Status = ZNC.union(Status::OVERFLOW);
const ZNV: Status = ZN.union(Status::OVERFLOW);

impl OpcodeMetadata {
    /// The zero descriptor used for every undefined opcode.
    pub const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
        mnemonic: Mnemonic::Illegal,
        addressing_mode: AddressingMode::Implicit,
        size_bytes: 1,
        src: Location::None,
        aux: Location::None,
        dst: Location::None,
        alu: AluOp::Pass,
        updates: Status::empty(),
        condition: None,
        forced: None,
        flow: Flow::Next,
    };

    /// Returns false for opcodes without a documented instruction.
    pub const fn is_defined(&self) -> bool {
        self.mnemonic.is_defined()
    }

    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Self {
        use Location::{Accumulator, Memory, Stack, StackPointer, X, Y};

        let base = OpcodeMetadata {
            mnemonic,
            addressing_mode,
            size_bytes: addressing_mode.size(),
            ..Self::ILLEGAL
        };

        match mnemonic {
            Adc => base.alu(Memory, Accumulator, Accumulator, AluOp::Add, ZNCV),
            Sbc => base.alu(Memory, Accumulator, Accumulator, AluOp::Subtract, ZNCV),
            And => base.alu(Memory, Accumulator, Accumulator, AluOp::And, ZN),
            Ora => base.alu(Memory, Accumulator, Accumulator, AluOp::Or, ZN),
            Eor => base.alu(Memory, Accumulator, Accumulator, AluOp::Xor, ZN),
            Bit => base.alu(Memory, Accumulator, Location::None, AluOp::BitTest, ZNV),
            Cmp => base.alu(Memory, Accumulator, Location::None, AluOp::Compare, ZNC),
            Cpx => base.alu(Memory, X, Location::None, AluOp::Compare, ZNC),
            Cpy => base.alu(Memory, Y, Location::None, AluOp::Compare, ZNC),

            Asl => base.alu(Memory, Location::None, Memory, AluOp::ShiftLeft, ZNC),
            Lsr => base.alu(Memory, Location::None, Memory, AluOp::ShiftRight, ZNC),
            Rol => base.alu(Memory, Location::None, Memory, AluOp::RotateLeft, ZNC),
            Ror => base.alu(Memory, Location::None, Memory, AluOp::RotateRight, ZNC),

            Inc => base.alu(Memory, Location::None, Memory, AluOp::Increment, ZN),
            Dec => base.alu(Memory, Location::None, Memory, AluOp::Decrement, ZN),
            Inx => base.alu(X, Location::None, X, AluOp::Increment, ZN),
            Iny => base.alu(Y, Location::None, Y, AluOp::Increment, ZN),
            Dex => base.alu(X, Location::None, X, AluOp::Decrement, ZN),
            Dey => base.alu(Y, Location::None, Y, AluOp::Decrement, ZN),

            Lda => base.alu(Memory, Location::None, Accumulator, AluOp::Pass, ZN),
            Ldx => base.alu(Memory, Location::None, X, AluOp::Pass, ZN),
            Ldy => base.alu(Memory, Location::None, Y, AluOp::Pass, ZN),
            Sta => base.alu(Accumulator, Location::None, Memory, AluOp::Pass, Status::empty()),
            Stx => base.alu(X, Location::None, Memory, AluOp::Pass, Status::empty()),
            Sty => base.alu(Y, Location::None, Memory, AluOp::Pass, Status::empty()),

            Tax => base.alu(Accumulator, Location::None, X, AluOp::Pass, ZN),
            Tay => base.alu(Accumulator, Location::None, Y, AluOp::Pass, ZN),
            Txa => base.alu(X, Location::None, Accumulator, AluOp::Pass, ZN),
            Tya => base.alu(Y, Location::None, Accumulator, AluOp::Pass, ZN),
            Tsx => base.alu(StackPointer, Location::None, X, AluOp::Pass, ZN),
            Txs => base.alu(X, Location::None, StackPointer, AluOp::Pass, Status::empty()),

            Pha => base.alu(Accumulator, Location::None, Stack, AluOp::Pass, Status::empty()),
            Php => base.alu(Location::Status, Location::None, Stack, AluOp::Pass, Status::empty()),
            Pla => base.alu(Stack, Location::None, Accumulator, AluOp::Pass, ZN),
            Plp => base.alu(Stack, Location::None, Location::Status, AluOp::Pass, Status::empty()),

            Bcc => base.branch(Status::CARRY, false),
            Bcs => base.branch(Status::CARRY, true),
            Bne => base.branch(Status::ZERO, false),
            Beq => base.branch(Status::ZERO, true),
            Bpl => base.branch(Status::NEGATIVE, false),
            Bmi => base.branch(Status::NEGATIVE, true),
            Bvc => base.branch(Status::OVERFLOW, false),
            Bvs => base.branch(Status::OVERFLOW, true),

            Clc => base.force(Status::CARRY, false),
            Sec => base.force(Status::CARRY, true),
            Cld => base.force(Status::DECIMAL, false),
            Sed => base.force(Status::DECIMAL, true),
            Cli => base.force(Status::INTERRUPT_DISABLE, false),
            Sei => base.force(Status::INTERRUPT_DISABLE, true),
            Clv => base.force(Status::OVERFLOW, false),
            Brk => base.force(Status::BREAK, true),

            Jmp => base.flow(Flow::Jump),
            Jsr => base.flow(Flow::Call),
            Rts => base.flow(Flow::Return),
            Rti => base.flow(Flow::ReturnFromInterrupt),

            Nop | Illegal => base,
        }
    }

    const fn alu(
        self,
        src: Location,
        aux: Location,
        dst: Location,
        alu: AluOp,
        updates: Status,
    ) -> Self {
        OpcodeMetadata {
            src,
            aux,
            dst,
            alu,
            updates,
            ..self
        }
    }

    const fn branch(self, flag: Status, set: bool) -> Self {
        OpcodeMetadata {
            condition: Some(FlagCondition { flag, set }),
            flow: Flow::Branch,
            ..self
        }
    }

    const fn force(self, flag: Status, set: bool) -> Self {
        OpcodeMetadata {
            forced: Some(FlagCondition { flag, set }),
            ..self
        }
    }

    const fn flow(self, flow: Flow) -> Self {
        OpcodeMetadata { flow, ..self }
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use nes6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
/// assert_eq!(brk.size_bytes, 1);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert!(!illegal.is_defined());
/// assert_eq!(illegal.mnemonic.as_str(), "???");
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [OpcodeMetadata::ILLEGAL; 256];
    let mut i = 0;
    while i < DOCUMENTED.len() {
        let (opcode, mnemonic, mode) = DOCUMENTED[i];
        table[opcode as usize] = OpcodeMetadata::new(mnemonic, mode);
        i += 1;
    }
    table
}

use AddressingMode::{
    Absolute as Abs, AbsoluteX as AbsX, AbsoluteY as AbsY, Accumulator as Acc,
    Immediate as Imm, Implicit as Imp, Indirect as Ind, IndirectX as IndX,
    IndirectY as IndY, Relative as Rel, ZeroPage as Zp, ZeroPageX as ZpX,
    ZeroPageY as ZpY,
};
use Mnemonic::*;

#[rustfmt::skip]
const DOCUMENTED: [(u8, Mnemonic, AddressingMode); 151] = [
    (0x69, Adc, Imm), (0x65, Adc, Zp), (0x75, Adc, ZpX), (0x6D, Adc, Abs),
    (0x7D, Adc, AbsX), (0x79, Adc, AbsY), (0x61, Adc, IndX), (0x71, Adc, IndY),

    (0x29, And, Imm), (0x25, And, Zp), (0x35, And, ZpX), (0x2D, And, Abs),
    (0x3D, And, AbsX), (0x39, And, AbsY), (0x21, And, IndX), (0x31, And, IndY),

    (0x0A, Asl, Acc), (0x06, Asl, Zp), (0x16, Asl, ZpX), (0x0E, Asl, Abs),
    (0x1E, Asl, AbsX),

    (0x90, Bcc, Rel), (0xB0, Bcs, Rel), (0xF0, Beq, Rel), (0x30, Bmi, Rel),
    (0xD0, Bne, Rel), (0x10, Bpl, Rel), (0x50, Bvc, Rel), (0x70, Bvs, Rel),

    (0x24, Bit, Zp), (0x2C, Bit, Abs),

    (0x00, Brk, Imp),

    (0x18, Clc, Imp), (0xD8, Cld, Imp), (0x58, Cli, Imp), (0xB8, Clv, Imp),

    (0xC9, Cmp, Imm), (0xC5, Cmp, Zp), (0xD5, Cmp, ZpX), (0xCD, Cmp, Abs),
    (0xDD, Cmp, AbsX), (0xD9, Cmp, AbsY), (0xC1, Cmp, IndX), (0xD1, Cmp, IndY),

    (0xE0, Cpx, Imm), (0xE4, Cpx, Zp), (0xEC, Cpx, Abs),
    (0xC0, Cpy, Imm), (0xC4, Cpy, Zp), (0xCC, Cpy, Abs),

    (0xC6, Dec, Zp), (0xD6, Dec, ZpX), (0xCE, Dec, Abs), (0xDE, Dec, AbsX),
    (0xCA, Dex, Imp), (0x88, Dey, Imp),

    (0x49, Eor, Imm), (0x45, Eor, Zp), (0x55, Eor, ZpX), (0x4D, Eor, Abs),
    (0x5D, Eor, AbsX), (0x59, Eor, AbsY), (0x41, Eor, IndX), (0x51, Eor, IndY),

    (0xE6, Inc, Zp), (0xF6, Inc, ZpX), (0xEE, Inc, Abs), (0xFE, Inc, AbsX),
    (0xE8, Inx, Imp), (0xC8, Iny, Imp),

    (0x4C, Jmp, Abs), (0x6C, Jmp, Ind), (0x20, Jsr, Abs),

    (0xA9, Lda, Imm), (0xA5, Lda, Zp), (0xB5, Lda, ZpX), (0xAD, Lda, Abs),
    (0xBD, Lda, AbsX), (0xB9, Lda, AbsY), (0xA1, Lda, IndX), (0xB1, Lda, IndY),

    (0xA2, Ldx, Imm), (0xA6, Ldx, Zp), (0xB6, Ldx, ZpY), (0xAE, Ldx, Abs),
    (0xBE, Ldx, AbsY),

    (0xA0, Ldy, Imm), (0xA4, Ldy, Zp), (0xB4, Ldy, ZpX), (0xAC, Ldy, Abs),
    (0xBC, Ldy, AbsX),

    (0x4A, Lsr, Acc), (0x46, Lsr, Zp), (0x56, Lsr, ZpX), (0x4E, Lsr, Abs),
    (0x5E, Lsr, AbsX),

    (0xEA, Nop, Imp),

    (0x09, Ora, Imm), (0x05, Ora, Zp), (0x15, Ora, ZpX), (0x0D, Ora, Abs),
    (0x1D, Ora, AbsX), (0x19, Ora, AbsY), (0x01, Ora, IndX), (0x11, Ora, IndY),

    (0x48, Pha, Imp), (0x08, Php, Imp), (0x68, Pla, Imp), (0x28, Plp, Imp),

    (0x2A, Rol, Acc), (0x26, Rol, Zp), (0x36, Rol, ZpX), (0x2E, Rol, Abs),
    (0x3E, Rol, AbsX),

    (0x6A, Ror, Acc), (0x66, Ror, Zp), (0x76, Ror, ZpX), (0x6E, Ror, Abs),
    (0x7E, Ror, AbsX),

    (0x40, Rti, Imp), (0x60, Rts, Imp),

    (0xE9, Sbc, Imm), (0xE5, Sbc, Zp), (0xF5, Sbc, ZpX), (0xED, Sbc, Abs),
    (0xFD, Sbc, AbsX), (0xF9, Sbc, AbsY), (0xE1, Sbc, IndX), (0xF1, Sbc, IndY),

    (0x38, Sec, Imp), (0xF8, Sed, Imp), (0x78, Sei, Imp),

    (0x85, Sta, Zp), (0x95, Sta, ZpX), (0x8D, Sta, Abs), (0x9D, Sta, AbsX),
    (0x99, Sta, AbsY), (0x81, Sta, IndX), (0x91, Sta, IndY),

    (0x86, Stx, Zp), (0x96, Stx, ZpY), (0x8E, Stx, Abs),
    (0x84, Sty, Zp), (0x94, Sty, ZpX), (0x8C, Sty, Abs),

    (0xAA, Tax, Imp), (0xA8, Tay, Imp), (0xBA, Tsx, Imp), (0x8A, Txa, Imp),
    (0x9A, Txs, Imp), (0x98, Tya, Imp),
];
