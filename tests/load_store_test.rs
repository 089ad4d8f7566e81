//! Tests for the load and store instructions.
//!
//! Tests cover:
//! - LDA/LDX/LDY across their addressing modes
//! - Z and N updates on loads
//! - STA/STX/STY writing memory without touching flags
//! - Zero page wrap-around for indexed modes

use nes6502::{FlatMemory, MemoryBus, Signals, CPU};

/// Loads `program` at 0x8000 and returns a fresh CPU pointing at it
fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    (CPU::new(), memory)
}

fn step(cpu: &mut CPU, memory: &mut FlatMemory) {
    cpu.step(memory, Signals::empty()).unwrap();
}

// ========== LDA Tests ==========

#[test]
fn test_lda_immediate() {
    let (mut cpu, mut mem) = setup(&[0xA9, 0x42]);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_zero_sets_z() {
    let (mut cpu, mut mem) = setup(&[0xA9, 0x00]);
    cpu.set_a(0x55);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_negative_sets_n() {
    let (mut cpu, mut mem) = setup(&[0xA9, 0x80]);

    step(&mut cpu, &mut mem);

    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_zero_page() {
    let (mut cpu, mut mem) = setup(&[0xA5, 0x10]);
    mem.write(0x0010, 0x99);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let (mut cpu, mut mem) = setup(&[0xB5, 0xFF]);
    cpu.set_x(0x02);
    mem.write(0x0001, 0x37);
    mem.write(0x0101, 0xEE);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x37);
}

#[test]
fn test_lda_absolute() {
    let (mut cpu, mut mem) = setup(&[0xAD, 0x34, 0x12]);
    mem.write(0x1234, 0x5A);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_lda_absolute_x_crosses_page() {
    let (mut cpu, mut mem) = setup(&[0xBD, 0xF0, 0x12]);
    cpu.set_x(0x20);
    mem.write(0x1310, 0x77);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_lda_absolute_y() {
    let (mut cpu, mut mem) = setup(&[0xB9, 0x00, 0x20]);
    cpu.set_y(0x05);
    mem.write(0x2005, 0x11);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x11);
}

#[test]
fn test_lda_indexed_indirect() {
    let (mut cpu, mut mem) = setup(&[0xA1, 0x20]);
    cpu.set_x(0x04);
    mem.write(0x0024, 0x00);
    mem.write(0x0025, 0x30);
    mem.write(0x3000, 0xAB);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn test_lda_indirect_indexed() {
    let (mut cpu, mut mem) = setup(&[0xB1, 0x40]);
    cpu.set_y(0x10);
    mem.write(0x0040, 0xF8);
    mem.write(0x0041, 0x30);
    mem.write(0x3108, 0xCD);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0xCD);
}

#[test]
fn test_lda_indirect_indexed_pointer_wraps_zero_page() {
    let (mut cpu, mut mem) = setup(&[0xB1, 0xFF]);
    cpu.set_y(0x01);
    mem.write(0x00FF, 0x00);
    mem.write(0x0000, 0x40);
    mem.write(0x4001, 0x66);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x66);
}

// ========== LDX / LDY Tests ==========

#[test]
fn test_ldx_immediate() {
    let (mut cpu, mut mem) = setup(&[0xA2, 0xFF]);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_ldx_zero_page_y_uses_y() {
    let (mut cpu, mut mem) = setup(&[0xB6, 0x10]);
    cpu.set_x(0x01);
    cpu.set_y(0x03);
    mem.write(0x0011, 0xAA);
    mem.write(0x0013, 0x33);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.x(), 0x33);
}

#[test]
fn test_ldy_absolute_x() {
    let (mut cpu, mut mem) = setup(&[0xBC, 0x00, 0x02]);
    cpu.set_x(0x01);
    mem.write(0x0201, 0x00);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

// ========== Store Tests ==========

#[test]
fn test_sta_absolute() {
    let (mut cpu, mut mem) = setup(&[0x8D, 0x00, 0x02]);
    cpu.set_a(0x42);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0200), 0x42);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_sta_indirect_indexed() {
    let (mut cpu, mut mem) = setup(&[0x91, 0x10]);
    cpu.set_a(0x5E);
    cpu.set_y(0x02);
    mem.write(0x0010, 0x00);
    mem.write(0x0011, 0x03);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0302), 0x5E);
}

#[test]
fn test_stores_leave_flags_alone() {
    let (mut cpu, mut mem) = setup(&[0x85, 0x10, 0x86, 0x11, 0x84, 0x12]);
    cpu.set_a(0x00);
    cpu.set_x(0x80);
    cpu.set_y(0x00);
    let status = cpu.status();

    step(&mut cpu, &mut mem);
    step(&mut cpu, &mut mem);
    step(&mut cpu, &mut mem);

    assert_eq!(cpu.status(), status);
    assert_eq!(mem.read(0x0011), 0x80);
}

#[test]
fn test_stx_zero_page_y() {
    let (mut cpu, mut mem) = setup(&[0x96, 0xFE]);
    cpu.set_x(0x99);
    cpu.set_y(0x03);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0001), 0x99);
}

#[test]
fn test_sty_zero_page_x() {
    let (mut cpu, mut mem) = setup(&[0x94, 0x10]);
    cpu.set_y(0x21);
    cpu.set_x(0x05);

    step(&mut cpu, &mut mem);

    assert_eq!(mem.read(0x0015), 0x21);
}

#[test]
fn test_indexed_indirect_pointer_wraps_zero_page() {
    let (mut cpu, mut mem) = setup(&[0xA1, 0xFF]);
    cpu.set_x(0x02);
    mem.write(0x0001, 0x00);
    mem.write(0x0002, 0x04);
    mem.write(0x0101, 0x05);
    mem.write(0x0400, 0x9C);

    step(&mut cpu, &mut mem);

    assert_eq!(cpu.a(), 0x9C);
}
