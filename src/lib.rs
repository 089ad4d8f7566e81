//! # NES 6502 CPU Core
//!
//! An instruction-level emulator of the NMOS 6502 core found in the NES 2A03,
//! designed for modularity, clarity, and WebAssembly portability.
//!
//! Each call to [`CPU::step`] fetches, decodes and executes one instruction
//! against a caller-owned [`MemoryBus`], then services at most one pending
//! interrupt line. Timing is not modeled: the CPU counts executed
//! instructions, not clock cycles.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{FlatMemory, MemoryBus, Signals, CPU};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector points to the program at 0xC000
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0xC0);
//! memory.load(0xC000, &[0xA9, 0x7F, 0x69, 0x01]); // LDA #$7F; ADC #$01
//!
//! let mut cpu = CPU::power_on(&memory);
//! assert_eq!(cpu.pc(), 0xC000);
//!
//! cpu.step(&mut memory, Signals::empty()).unwrap();
//! cpu.step(&mut memory, Signals::empty()).unwrap();
//!
//! assert_eq!(cpu.a(), 0x80);
//! assert!(cpu.flag_v());
//! assert!(cpu.flag_n());
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven**: every opcode is a row of [`OPCODE_TABLE`] describing
//!   its data flow; one pipeline executes all of them
//! - **Borrowed memory**: the CPU never owns the bus, so a console can share
//!   it with other subsystems between steps
//! - **Explicit interrupts**: RESET, NMI and IRQ arrive as a [`Signals`] mask
//!   on each step
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the step pipeline
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and effective-address resolution
//! - `status` - Processor status flags
//! - `interrupts` - Signal lines and interrupt servicing
//! - `disassembler` - Instruction decoding and formatting for traces
//! - `config` - CPU construction options

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod instructions;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod status;

// WebAssembly bindings (only available with wasm feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{CpuConfig, IllegalOpcodePolicy};
pub use cpu::CPU;
pub use disassembler::{disassemble, format_instruction, Instruction};
pub use instructions::alu::{AluOp, AluOutput};
pub use interrupts::{Signals, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{FlagCondition, Flow, Location, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode has no documented instruction and the CPU was
    /// configured with [`IllegalOpcodePolicy::Reject`].
    IllegalOpcode {
        /// The opcode byte.
        opcode: u8,
        /// Address it was fetched from.
        pc: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, pc } => {
                write!(f, "Illegal opcode 0x{:02X} at ${:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
