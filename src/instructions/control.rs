//! # Control Flow
//!
//! Decides the next program counter once an instruction's data effects
//! have been committed:
//!
//! - JMP: PC = effective address
//! - Bxx: PC = target when the named flag equals the required polarity
//! - JSR: push PC + 2 (the last byte of the JSR), PC = target
//! - RTS: pull the return address and add one
//! - RTI: pull the status register, then the return address as-is
//! - anything else: PC += instruction size

use crate::addressing::Operand;
use crate::instructions::stack;
use crate::opcodes::{Flow, OpcodeMetadata};
use crate::status::Status;
use crate::{MemoryBus, CPU};

pub(crate) fn resolve<M: MemoryBus>(
    cpu: &mut CPU,
    bus: &mut M,
    metadata: &OpcodeMetadata,
    operand: Operand,
) {
    let next = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    let target = match operand {
        Operand::Address(addr) => addr,
        Operand::Implied | Operand::Accumulator => next,
    };

    cpu.pc = match metadata.flow {
        Flow::Next => next,
        Flow::Jump => target,
        Flow::Branch => match metadata.condition {
            Some(cond) if cpu.status.contains(cond.flag) == cond.set => target,
            _ => next,
        },
        Flow::Call => {
            stack::push_word(cpu, bus, next.wrapping_sub(1));
            target
        }
        Flow::Return => stack::pull_word(cpu, bus).wrapping_add(1),
        Flow::ReturnFromInterrupt => {
            cpu.status = Status::pulled(stack::pull(cpu, bus));
            stack::pull_word(cpu, bus)
        }
    };
}
