//! Property-based tests for addressing mode calculations.
//!
//! These tests verify effective addresses through real loads and stores,
//! including zero-page wrap-around and page crossing.

use nes6502::{addressing, AddressingMode, FlatMemory, MemoryBus, Operand, Signals, CPU};
use proptest::prelude::*;

fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    (CPU::new(), memory)
}

proptest! {
    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let (mut cpu, mut mem) = setup(&[0xB5, base]);
        cpu.set_x(x);
        mem.write(base.wrapping_add(x) as u16, value);

        cpu.step(&mut mem, Signals::empty()).unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: Zero page,Y addressing (LDX) indexes by Y, not X
    #[test]
    fn prop_zero_page_y_uses_y(base in any::<u8>(), y in any::<u8>(), value in any::<u8>()) {
        let (mut cpu, mut mem) = setup(&[0xB6, base]);
        cpu.set_y(y);
        cpu.set_x(y.wrapping_add(1));
        mem.write(base.wrapping_add(y) as u16, value);

        cpu.step(&mut mem, Signals::empty()).unwrap();

        prop_assert_eq!(cpu.x(), value);
    }

    /// Property: Absolute,X adds X to the full 16-bit base
    #[test]
    fn prop_absolute_x(base in 0x0200u16..0x7F00, x in any::<u8>(), value in any::<u8>()) {
        let [lo, hi] = base.to_le_bytes();
        let (mut cpu, mut mem) = setup(&[0x9D, lo, hi]);
        cpu.set_a(value);
        cpu.set_x(x);

        cpu.step(&mut mem, Signals::empty()).unwrap();

        prop_assert_eq!(mem.read(base + x as u16), value);
    }

    /// Property: (zp,X) reads its pointer from zero page with wrap-around
    #[test]
    fn prop_indexed_indirect(zp in any::<u8>(), x in any::<u8>(), target in 0x0200u16..0x8000, value in any::<u8>()) {
        let (mut cpu, mut mem) = setup(&[0xA1, zp]);
        cpu.set_x(x);
        let ptr = zp.wrapping_add(x);
        let [lo, hi] = target.to_le_bytes();
        mem.write(ptr as u16, lo);
        mem.write(ptr.wrapping_add(1) as u16, hi);
        mem.write(target, value);

        cpu.step(&mut mem, Signals::empty()).unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (zp),Y adds Y to the 16-bit pointer
    #[test]
    fn prop_indirect_indexed(zp in any::<u8>(), y in any::<u8>(), base in 0x0200u16..0x7F00, value in any::<u8>()) {
        let (mut cpu, mut mem) = setup(&[0xB1, zp]);
        cpu.set_y(y);
        let [lo, hi] = base.to_le_bytes();
        mem.write(zp as u16, lo);
        mem.write(zp.wrapping_add(1) as u16, hi);
        mem.write(base + y as u16, value);

        cpu.step(&mut mem, Signals::empty()).unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: relative targets are PC + 2 + signed offset
    #[test]
    fn prop_relative_target(pc in 0x0200u16..0xFF00, offset in any::<u8>()) {
        let mem = FlatMemory::new();
        let operand = addressing::resolve(AddressingMode::Relative, pc, [offset, 0], 0, 0, &mem);
        let expected = (pc as i32 + 2 + offset as i8 as i32) as u16;
        prop_assert_eq!(operand, Operand::Address(expected));
    }

    /// Property: JMP indirect never carries into the pointer's high byte
    #[test]
    fn prop_jmp_indirect_stays_in_page(ptr in 0x0200u16..0x7F00) {
        let [lo, hi] = ptr.to_le_bytes();
        let (mut cpu, mut mem) = setup(&[0x6C, lo, hi]);
        mem.write(ptr, 0x34);
        let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
        mem.write(hi_addr, 0x12);

        cpu.step(&mut mem, Signals::empty()).unwrap();

        prop_assert_eq!(cpu.pc(), 0x1234);
    }
}
