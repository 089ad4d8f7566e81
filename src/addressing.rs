//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns an instruction's operand bytes into an effective address.
//!
//! Zero-page forms wrap within page zero. Absolute indexed forms and the
//! final `+ Y` of `(zp),Y` are full 16-bit additions and may cross pages.

use crate::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// The effective address is the operand byte itself (PC + 1).
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next instruction.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    IndirectY,
}

impl AddressingMode {
    /// Total instruction size in bytes (opcode plus operands) for this mode.
    pub const fn size(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }
}

/// Where an instruction's memory operand lives once the mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implied instructions).
    Implied,
    /// Operate on the accumulator directly, no memory access.
    Accumulator,
    /// Effective 16-bit address.
    Address(u16),
}

/// Resolves the effective operand location for an instruction at `pc`.
///
/// `operands` are the raw bytes following the opcode (low byte first for
/// 16-bit operands). Only the pointer bytes of the indirect modes are read
/// from `bus`; the operand value itself is left to the caller.
pub fn resolve<M: MemoryBus>(
    mode: AddressingMode,
    pc: u16,
    operands: [u8; 2],
    x: u8,
    y: u8,
    bus: &M,
) -> Operand {
    let [lo, hi] = operands;
    let absolute = u16::from_le_bytes([lo, hi]);

    let address = match mode {
        AddressingMode::Implicit => return Operand::Implied,
        AddressingMode::Accumulator => return Operand::Accumulator,
        AddressingMode::Immediate => pc.wrapping_add(1),
        AddressingMode::ZeroPage => lo as u16,
        AddressingMode::ZeroPageX => lo.wrapping_add(x) as u16,
        AddressingMode::ZeroPageY => lo.wrapping_add(y) as u16,
        AddressingMode::Relative => pc
            .wrapping_add(mode.size() as u16)
            .wrapping_add_signed(lo as i8 as i16),
        AddressingMode::Absolute => absolute,
        AddressingMode::AbsoluteX => absolute.wrapping_add(x as u16),
        AddressingMode::AbsoluteY => absolute.wrapping_add(y as u16),
        AddressingMode::Indirect => {
            // NMOS bug: the high byte never carries into the next page
            let hi_addr = (absolute & 0xFF00) | (absolute.wrapping_add(1) & 0x00FF);
            u16::from_le_bytes([bus.read(absolute), bus.read(hi_addr)])
        }
        AddressingMode::IndirectX => read_zero_page_pointer(bus, lo.wrapping_add(x)),
        AddressingMode::IndirectY => read_zero_page_pointer(bus, lo).wrapping_add(y as u16),
    };

    Operand::Address(address)
}

/// Reads a little-endian pointer from page zero, wrapping $FF to $00.
fn read_zero_page_pointer<M: MemoryBus>(bus: &M, zp: u8) -> u16 {
    let lo = bus.read(zp as u16);
    let hi = bus.read(zp.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}
