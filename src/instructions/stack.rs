//! # Stack Operations
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward. The stack
//! pointer is an 8-bit offset into that page: a push writes to `0x0100 | SP`
//! then decrements SP, a pull increments SP then reads. SP wraps modulo 256
//! in both directions; there is no overflow detection.

use crate::{MemoryBus, CPU};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

pub(crate) fn push<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, value: u8) {
    bus.write(STACK_BASE | cpu.sp as u16, value);
    cpu.sp = cpu.sp.wrapping_sub(1);
}

pub(crate) fn pull<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) -> u8 {
    cpu.sp = cpu.sp.wrapping_add(1);
    bus.read(STACK_BASE | cpu.sp as u16)
}

/// Pushes a 16-bit value high byte first, leaving the low byte on top.
pub(crate) fn push_word<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, value: u16) {
    let [lo, hi] = value.to_le_bytes();
    push(cpu, bus, hi);
    push(cpu, bus, lo);
}

/// Pulls a 16-bit value low byte first.
pub(crate) fn pull_word<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) -> u16 {
    let lo = pull(cpu, bus);
    let hi = pull(cpu, bus);
    u16::from_le_bytes([lo, hi])
}
