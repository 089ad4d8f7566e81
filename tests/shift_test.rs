//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use nes6502::{FlatMemory, MemoryBus, Signals, CPU};

fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    (CPU::new(), memory)
}

fn step(cpu: &mut CPU, memory: &mut FlatMemory) {
    cpu.step(memory, Signals::empty()).unwrap();
}

// ========== ASL Tests ==========

#[test]
fn test_asl_accumulator() {
    let (mut cpu, mut mem) = setup(&[0x0A]);
    cpu.set_a(0x81);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_asl_zero_page_writes_memory() {
    let (mut cpu, mut mem) = setup(&[0x06, 0x10]);
    mem.write(0x0010, 0x40);
    cpu.set_a(0x11);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0010), 0x80);
    assert_eq!(cpu.a(), 0x11);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

// ========== LSR Tests ==========

#[test]
fn test_lsr_accumulator() {
    let (mut cpu, mut mem) = setup(&[0x4A]);
    cpu.set_a(0x01);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_absolute_x() {
    let (mut cpu, mut mem) = setup(&[0x5E, 0x00, 0x03]);
    cpu.set_x(0x01);
    mem.write(0x0301, 0xFE);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0301), 0x7F);
    assert!(!cpu.flag_c());
}

// ========== ROL / ROR Tests ==========

#[test]
fn test_rol_shifts_in_carry() {
    let (mut cpu, mut mem) = setup(&[0x2A]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn test_rol_zero_page_x() {
    let (mut cpu, mut mem) = setup(&[0x36, 0x10]);
    cpu.set_x(0x01);
    cpu.set_flag_c(false);
    mem.write(0x0011, 0x40);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0011), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_ror_shifts_carry_into_bit_7() {
    let (mut cpu, mut mem) = setup(&[0x6A]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_absolute() {
    let (mut cpu, mut mem) = setup(&[0x6E, 0x00, 0x02]);
    cpu.set_flag_c(false);
    mem.write(0x0200, 0x02);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0200), 0x01);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}
