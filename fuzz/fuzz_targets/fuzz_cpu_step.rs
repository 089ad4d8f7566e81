//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states, memory contents and signal
//! lines, then executes one instruction to find edge cases and panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::{CpuConfig, FlatMemory, IllegalOpcodePolicy, Signals, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
    reject_illegal: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Interrupt vectors at $FFFA-$FFFF
    vectors: [u8; 6],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    signals: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0xFFFA, &input.memory.vectors);
    memory.load(input.cpu_state.pc, &input.memory.instruction_bytes);

    let policy = if input.cpu_state.reject_illegal {
        IllegalOpcodePolicy::Reject
    } else {
        IllegalOpcodePolicy::Nop
    };
    let mut cpu = CPU::with_config(CpuConfig {
        illegal_opcodes: policy,
    });
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_status(input.cpu_state.status);

    let before = cpu.clone();
    let signals = Signals::from_bits_truncate(input.signals);

    match cpu.step(&mut memory, signals) {
        Ok(()) => {
            assert_eq!(cpu.steps(), 1);
            assert_eq!(cpu.last_instruction().address, before.pc());
        }
        Err(_) => {
            // A rejected opcode leaves the processor untouched
            assert_eq!(cpu, before);
        }
    }

    // Bit 5 of the status register always reads back as 1
    assert_ne!(cpu.status() & 0x20, 0);
});
