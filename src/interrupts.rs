//! Interrupt signal lines and servicing.
//!
//! The caller passes a [`Signals`] mask into every [`CPU::step`]. After the
//! instruction's own control flow has been resolved, at most one asserted
//! line is serviced, in priority order RESET > NMI > IRQ.
//!
//! ## Interrupt Service Sequence
//!
//! For NMI, and for IRQ when the I flag is clear, the CPU:
//!
//! 1. Pushes PC (high byte, then low byte) to the stack
//! 2. Pushes the status register with B clear and bit 5 set
//! 3. Sets the I flag
//! 4. Loads PC from the line's vector (little-endian)
//!
//! RESET reinitializes the register file and loads PC from the reset vector
//! without touching the stack.

use bitflags::bitflags;

use crate::instructions::stack;
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// NMI vector ($FFFA/$FFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector ($FFFC/$FFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector ($FFFE/$FFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

bitflags! {
    /// External signal lines sampled once per step.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Signals: u8 {
        const RESET = 1 << 0;
        const NMI = 1 << 1;
        const IRQ = 1 << 2;
    }
}

/// Which line was serviced by [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Serviced {
    Reset,
    Nmi,
    Irq,
}

/// Services the highest-priority asserted line, if any can be taken.
pub(crate) fn dispatch<M: MemoryBus>(
    cpu: &mut CPU,
    bus: &mut M,
    signals: Signals,
) -> Option<Serviced> {
    if signals.contains(Signals::RESET) {
        reset(cpu, bus);
        Some(Serviced::Reset)
    } else if signals.contains(Signals::NMI) {
        enter(cpu, bus, NMI_VECTOR);
        Some(Serviced::Nmi)
    } else if signals.contains(Signals::IRQ) && !cpu.status.contains(Status::INTERRUPT_DISABLE) {
        enter(cpu, bus, IRQ_VECTOR);
        Some(Serviced::Irq)
    } else {
        None
    }
}

pub(crate) fn reset<M: MemoryBus>(cpu: &mut CPU, bus: &M) {
    cpu.a = 0x00;
    cpu.x = 0x00;
    cpu.y = 0x00;
    cpu.sp = CPU::POWER_ON_SP;
    cpu.status = Status::POWER_ON;
    cpu.pc = read_vector(bus, RESET_VECTOR);
    log::debug!("reset: PC=${:04X}", cpu.pc);
}

fn enter<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, vector: u16) {
    let return_address = cpu.pc;
    let status = cpu.status.pushed_by_interrupt();
    stack::push_word(cpu, bus, return_address);
    stack::push(cpu, bus, status);
    cpu.status.insert(Status::INTERRUPT_DISABLE);
    cpu.pc = read_vector(bus, vector);
    log::debug!(
        "interrupt via ${:04X}: return ${:04X}, handler ${:04X}",
        vector,
        return_address,
        cpu.pc
    );
}

/// Reads a little-endian 16-bit vector.
pub fn read_vector<M: MemoryBus>(bus: &M, vector: u16) -> u16 {
    u16::from_le_bytes([bus.read(vector), bus.read(vector.wrapping_add(1))])
}
