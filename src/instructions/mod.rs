//! # Instruction Execution
//!
//! The pieces of the step pipeline that act on an already-decoded
//! instruction. Instructions are not implemented one function per mnemonic:
//! each opcode's [`crate::OpcodeMetadata`] describes its data flow, and the
//! pipeline in [`crate::cpu`] runs it through these stages.
//!
//! ## Stages
//!
//! - **alu**: pure operand transforms (ADC, SBC, AND, ORA, EOR, BIT, shifts,
//!   rotates, INC/DEC, compares)
//! - **stack**: push/pull on page one
//! - **control**: next program counter (jumps, branches, JSR/RTS/RTI)

pub mod alu;
pub(crate) mod control;
pub(crate) mod stack;
