//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// Undefined opcodes format as `.byte $XX`. Relative operands are shown as
/// their absolute branch target.
pub fn format_instruction(instr: &Instruction) -> String {
    if !instr.mnemonic.is_defined() {
        return format!(".byte ${:02X}", instr.opcode);
    }

    let operand = format_operand(instr);
    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = u16::from_le_bytes([byte, instr.operand_bytes.get(1).copied().unwrap_or(0)]);

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X},X", byte),
        ZeroPageY => format!("${:02X},Y", byte),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add_signed(byte as i8 as i16);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X},X", word),
        AbsoluteY => format!("${:04X},Y", word),
        Indirect => format!("(${:04X})", word),
        IndirectX => format!("(${:02X},X)", byte),
        IndirectY => format!("(${:02X}),Y", byte),
    }
}
