//! 6502 Disassembler Module
//!
//! Converts machine code into assembly text using the display metadata of
//! [`OPCODE_TABLE`](crate::OPCODE_TABLE), the same table the CPU executes
//! from. Also backs the per-instruction trace log and
//! [`CPU::last_instruction`](crate::CPU::last_instruction).

pub mod decoder;
pub mod formatter;

use std::fmt;

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;

pub use formatter::format_instruction;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic; [`Mnemonic::Illegal`] marks a raw data byte
    pub mnemonic: Mnemonic,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,
}

impl Instruction {
    /// A one-byte `.byte` entry for an undefined opcode or a truncated tail.
    pub fn data_byte(address: u16, byte: u8) -> Self {
        Self {
            address,
            opcode: byte,
            mnemonic: Mnemonic::Illegal,
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            size_bytes: 1,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_instruction(self))
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// `start` is the address of `bytes[0]`; it only affects the reported
/// addresses and relative branch targets. Undefined opcodes, and a final
/// instruction whose operands run past the end of the slice, come out as
/// `.byte` entries.
///
/// ```
/// use nes6502::disassemble;
///
/// let listing: Vec<String> = disassemble(&[0xA9, 0x01, 0xD0, 0xFC], 0xC000)
///     .iter()
///     .map(|i| i.to_string())
///     .collect();
///
/// assert_eq!(listing, ["LDA #$01", "BNE $C000"]);
/// ```
pub fn disassemble(bytes: &[u8], start: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| Instruction::data_byte(address, bytes[offset]));
        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}
