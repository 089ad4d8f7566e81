//! Tests for CMP, CPX and CPY.
//!
//! Compares set C when the register is >= the operand, Z when equal and N
//! from bit 7 of the difference. The register itself is never changed.

use nes6502::{FlatMemory, MemoryBus, Signals, CPU};

fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    (CPU::new(), memory)
}

fn step(cpu: &mut CPU, memory: &mut FlatMemory) {
    cpu.step(memory, Signals::empty()).unwrap();
}

#[test]
fn test_cmp_equal() {
    let (mut cpu, mut mem) = setup(&[0xC9, 0x42]);
    cpu.set_a(0x42);

    step(&mut cpu, &mut mem);

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_greater() {
    let (mut cpu, mut mem) = setup(&[0xC9, 0x10]);
    cpu.set_a(0x20);

    step(&mut cpu, &mut mem);

    assert!(!cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    let (mut cpu, mut mem) = setup(&[0xC9, 0x20]);
    cpu.set_a(0x10);

    step(&mut cpu, &mut mem);

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_leaves_overflow() {
    let (mut cpu, mut mem) = setup(&[0xC9, 0x01]);
    cpu.set_a(0x80);
    cpu.set_flag_v(true);

    step(&mut cpu, &mut mem);

    assert!(cpu.flag_v());
}

#[test]
fn test_cpx_zero_page() {
    let (mut cpu, mut mem) = setup(&[0xE4, 0x30]);
    mem.write(0x0030, 0x05);
    cpu.set_x(0x05);

    step(&mut cpu, &mut mem);

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.x(), 0x05);
}

#[test]
fn test_cpy_absolute() {
    let (mut cpu, mut mem) = setup(&[0xCC, 0x00, 0x06]);
    mem.write(0x0600, 0xFF);
    cpu.set_y(0x00);

    step(&mut cpu, &mut mem);

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}
