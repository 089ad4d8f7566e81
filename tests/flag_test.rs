//! Tests for the flag instructions: CLC, SEC, CLI, SEI, CLD, SED, CLV.

use nes6502::{FlatMemory, Signals, CPU};

/// Runs one single-byte flag instruction and returns the CPU
fn run_one(opcode: u8, status: u8) -> CPU {
    let mut mem = FlatMemory::new();
    mem.load(0x8000, &[opcode]);
    let mut cpu = CPU::new();
    cpu.set_status(status);
    cpu.step(&mut mem, Signals::empty()).unwrap();
    cpu
}

#[test]
fn test_clc_sec() {
    assert!(!run_one(0x18, 0xFF).flag_c());
    assert!(run_one(0x38, 0x00).flag_c());
}

#[test]
fn test_cli_sei() {
    assert!(!run_one(0x58, 0xFF).flag_i());
    assert!(run_one(0x78, 0x00).flag_i());
}

#[test]
fn test_cld_sed() {
    assert!(!run_one(0xD8, 0xFF).flag_d());
    assert!(run_one(0xF8, 0x00).flag_d());
}

#[test]
fn test_clv() {
    assert!(!run_one(0xB8, 0xFF).flag_v());
}

#[test]
fn test_flag_instructions_touch_one_bit() {
    assert_eq!(run_one(0x18, 0xFF).status(), 0xFE);
    assert_eq!(run_one(0x38, 0x20).status(), 0x21);
    assert_eq!(run_one(0xB8, 0xFF).status(), 0xBF);
    assert_eq!(run_one(0x78, 0x20).status(), 0x24);
}

#[test]
fn test_flag_instructions_advance_one_byte() {
    for opcode in [0x18, 0x38, 0x58, 0x78, 0xD8, 0xF8, 0xB8] {
        assert_eq!(run_one(opcode, 0x20).pc(), 0x8001, "opcode {:02X}", opcode);
    }
}
