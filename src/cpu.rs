//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): [`Status`] flags
//! - **Step counter**: u64 count of executed instructions (not a cycle clock)
//! - **Fetch latch**: opcode and operand bytes of the most recent instruction
//!
//! The CPU does not own its memory. Every step borrows a [`MemoryBus`].
//!
//! ## Execution Model
//!
//! One [`CPU::step`] runs one instruction through these stages, each fully
//! committed before the next begins:
//!
//! 1. Fetch the opcode and look up its [`OpcodeMetadata`]
//! 2. Latch operand bytes and resolve the addressing mode
//! 3. Read the source (and auxiliary) operand
//! 4. Run the ALU and commit the flags the descriptor names
//! 5. Write the result to its destination, then apply any forced flag
//! 6. Resolve the next program counter
//! 7. Service at most one interrupt line from the signal mask

use std::fmt;

use crate::addressing::{self, Operand};
use crate::config::{CpuConfig, IllegalOpcodePolicy};
use crate::disassembler::{formatter, Instruction};
use crate::instructions::{alu, control, stack};
use crate::interrupts::{self, Serviced, Signals};
use crate::opcodes::{Location, OpcodeMetadata};
use crate::status::Status;
use crate::{ExecutionError, MemoryBus, OPCODE_TABLE};

/// 6502 CPU state and execution context.
///
/// # Examples
///
/// ```
/// use nes6502::{FlatMemory, MemoryBus, Signals, CPU};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x8000, &[0xA9, 0x00]); // LDA #$00
///
/// let mut cpu = CPU::new();
/// cpu.step(&mut mem, Signals::empty()).unwrap();
///
/// assert_eq!(cpu.a(), 0x00);
/// assert!(cpu.flag_z());
/// assert_eq!(cpu.pc(), 0x8002);
/// assert_eq!(cpu.steps(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status register
    pub(crate) status: Status,

    /// Instructions executed since construction
    pub(crate) steps: u64,

    /// Address the latched instruction was fetched from
    pub(crate) fetch_pc: u16,

    /// Latched opcode byte
    pub(crate) opcode: u8,

    /// Latched operand bytes; absent bytes latch as zero
    pub(crate) operands: [u8; 2],

    pub(crate) config: CpuConfig,
}

impl CPU {
    /// Program counter after [`CPU::new`], where cartridge PRG ROM starts.
    pub const POWER_ON_PC: u16 = 0x8000;

    /// Stack pointer after power-on and reset.
    pub const POWER_ON_SP: u8 = 0xFD;

    /// Creates a CPU in the power-on state with the default configuration.
    ///
    /// - A, X, Y are zeroed
    /// - SP is 0xFD
    /// - P is 0x34 (I, B and bit 5 set)
    /// - PC is 0x8000
    ///
    /// Use [`CPU::power_on`] to start from the reset vector instead.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    /// Creates a CPU in the power-on state with the given configuration.
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: Self::POWER_ON_PC,
            sp: Self::POWER_ON_SP,
            status: Status::POWER_ON,
            steps: 0,
            fetch_pc: Self::POWER_ON_PC,
            opcode: 0x00,
            operands: [0x00; 2],
            config,
        }
    }

    /// Creates a CPU in the power-on state with PC loaded from the reset vector.
    ///
    /// ```
    /// use nes6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x34);
    /// mem.write(0xFFFD, 0xC2);
    ///
    /// let cpu = CPU::power_on(&mem);
    /// assert_eq!(cpu.pc(), 0xC234);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn power_on<M: MemoryBus>(bus: &M) -> Self {
        let mut cpu = Self::new();
        interrupts::reset(&mut cpu, bus);
        cpu
    }

    /// Executes one instruction, then services at most one line of `signals`.
    ///
    /// With the default [`IllegalOpcodePolicy::Nop`] this never fails: an
    /// undefined opcode runs as a one-byte no-op. Under
    /// [`IllegalOpcodePolicy::Reject`] it returns
    /// [`ExecutionError::IllegalOpcode`] and changes nothing.
    pub fn step<M: MemoryBus>(
        &mut self,
        bus: &mut M,
        signals: Signals,
    ) -> Result<(), ExecutionError> {
        let opcode = bus.read(self.pc);
        let metadata: &OpcodeMetadata = &OPCODE_TABLE[opcode as usize];

        if !metadata.is_defined() {
            match self.config.illegal_opcodes {
                IllegalOpcodePolicy::Reject => {
                    return Err(ExecutionError::IllegalOpcode {
                        opcode,
                        pc: self.pc,
                    });
                }
                IllegalOpcodePolicy::Nop => {
                    log::warn!(
                        "illegal opcode ${:02X} at ${:04X} executed as a one-byte NOP",
                        opcode,
                        self.pc
                    );
                }
            }
        }

        self.steps += 1;
        self.latch(bus, opcode, metadata.size_bytes);

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "{:04X}  {:<14}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
                self.pc,
                formatter::format_instruction(&self.last_instruction()),
                self.a,
                self.x,
                self.y,
                self.status.bits(),
                self.sp
            );
        }

        let operand = addressing::resolve(
            metadata.addressing_mode,
            self.pc,
            self.operands,
            self.x,
            self.y,
            bus,
        );

        let src = self.read_location(bus, metadata.src, operand);
        let aux = self.read_location(bus, metadata.aux, operand);

        let out = alu::execute(
            metadata.alu,
            src,
            aux,
            self.status.contains(Status::CARRY),
            self.status.contains(Status::OVERFLOW),
        );
        self.status.apply(metadata.updates, &out);

        self.write_location(bus, metadata.dst, operand, out.result);

        if let Some(forced) = metadata.forced {
            self.status.set(forced.flag, forced.set);
        }

        control::resolve(self, bus, metadata, operand);
        interrupts::dispatch(self, bus, signals);

        Ok(())
    }

    /// Executes `count` instructions with no signal lines asserted.
    ///
    /// Returns the number of instructions executed, stopping at the first
    /// error.
    ///
    /// ```
    /// use nes6502::{FlatMemory, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0xE8, 0xE8, 0xE8]); // INX x3
    ///
    /// let mut cpu = CPU::new();
    /// assert_eq!(cpu.run(&mut mem, 3), Ok(3));
    /// assert_eq!(cpu.x(), 3);
    /// ```
    pub fn run<M: MemoryBus>(&mut self, bus: &mut M, count: u64) -> Result<u64, ExecutionError> {
        for _ in 0..count {
            self.step(bus, Signals::empty())?;
        }
        Ok(count)
    }

    /// Reinitializes the register file and loads PC from the reset vector.
    pub fn reset<M: MemoryBus>(&mut self, bus: &M) {
        interrupts::reset(self, bus);
    }

    /// Services a non-maskable interrupt immediately.
    pub fn nmi<M: MemoryBus>(&mut self, bus: &mut M) {
        interrupts::dispatch(self, bus, Signals::NMI);
    }

    /// Services an interrupt request if the I flag allows it.
    ///
    /// Returns true if the request was taken.
    pub fn irq<M: MemoryBus>(&mut self, bus: &mut M) -> bool {
        interrupts::dispatch(self, bus, Signals::IRQ) == Some(Serviced::Irq)
    }

    fn latch<M: MemoryBus>(&mut self, bus: &M, opcode: u8, size: u8) {
        self.fetch_pc = self.pc;
        self.opcode = opcode;
        self.operands = [0x00; 2];
        for i in 1..size {
            self.operands[(i - 1) as usize] = bus.read(self.pc.wrapping_add(i as u16));
        }
    }

    fn read_location<M: MemoryBus>(&mut self, bus: &mut M, location: Location, operand: Operand) -> u8 {
        match location {
            Location::None | Location::ProgramCounter => 0x00,
            Location::Accumulator => self.a,
            Location::X => self.x,
            Location::Y => self.y,
            Location::StackPointer => self.sp,
            Location::Status => self.status.pushed_by_instruction(),
            Location::Memory => match operand {
                Operand::Accumulator => self.a,
                Operand::Address(addr) => bus.read(addr),
                Operand::Implied => 0x00,
            },
            Location::Stack => stack::pull(self, bus),
        }
    }

    fn write_location<M: MemoryBus>(
        &mut self,
        bus: &mut M,
        location: Location,
        operand: Operand,
        value: u8,
    ) {
        match location {
            Location::None | Location::ProgramCounter => {}
            Location::Accumulator => self.a = value,
            Location::X => self.x = value,
            Location::Y => self.y = value,
            Location::StackPointer => self.sp = value,
            Location::Status => self.status = Status::pulled(value),
            Location::Memory => match operand {
                Operand::Accumulator => self.a = value,
                Operand::Address(addr) => bus.write(addr, value),
                Operand::Implied => {}
            },
            Location::Stack => stack::push(self, bus, value),
        }
    }

    // ========== Tracing ==========

    /// The most recently fetched instruction, decoded from the latch.
    ///
    /// ```
    /// use nes6502::{FlatMemory, Signals, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0x8D, 0x00, 0x20]); // STA $2000
    ///
    /// let mut cpu = CPU::new();
    /// cpu.step(&mut mem, Signals::empty()).unwrap();
    ///
    /// assert_eq!(cpu.last_instruction().to_string(), "STA $2000");
    /// ```
    pub fn last_instruction(&self) -> Instruction {
        let metadata = &OPCODE_TABLE[self.opcode as usize];
        let operand_len = (metadata.size_bytes - 1) as usize;
        Instruction {
            address: self.fetch_pc,
            opcode: self.opcode,
            mnemonic: metadata.mnemonic,
            addressing_mode: metadata.addressing_mode,
            operand_bytes: self.operands[..operand_len].to_vec(),
            size_bytes: metadata.size_bytes,
        }
    }

    /// Occupied stack bytes from the top of page one down to SP + 1.
    pub fn stack_contents<M: MemoryBus>(&self, bus: &M) -> Vec<(u16, u8)> {
        let top = stack::STACK_BASE | 0xFF;
        let bottom = stack::STACK_BASE | self.sp as u16;
        (bottom + 1..=top)
            .rev()
            .map(|addr| (addr, bus.read(addr)))
            .collect()
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.status
    }

    /// Returns the number of instructions executed since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the latched opcode of the most recent instruction.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Returns the latched operand bytes of the most recent instruction.
    pub fn operands(&self) -> [u8; 2] {
        self.operands
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register; bit 5 is kept set.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::pulled(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set(Status::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set(Status::OVERFLOW, value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.status.set(Status::BREAK, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set(Status::DECIMAL, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.status.set(Status::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set(Status::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set(Status::CARRY, value);
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-line register dump.
///
/// ```text
/// <12>
/// $A9 $00 $00
/// A: $00 X: $00 Y: $00 SP: $FD P: $36
/// |N|V|?|B|D|I|Z|C|
/// |0|0|1|1|0|1|1|0|
/// PC: $8002
/// ```
impl fmt::Display for CPU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<{}>", self.steps)?;
        writeln!(
            f,
            "${:02X} ${:02X} ${:02X}",
            self.opcode, self.operands[0], self.operands[1]
        )?;
        writeln!(
            f,
            "A: ${:02X} X: ${:02X} Y: ${:02X} SP: ${:02X} P: ${:02X}",
            self.a,
            self.x,
            self.y,
            self.sp,
            self.status.bits()
        )?;
        writeln!(f, "|N|V|?|B|D|I|Z|C|")?;
        for bit in (0..8).rev() {
            write!(f, "|{}", (self.status.bits() >> bit) & 1)?;
        }
        writeln!(f, "|")?;
        write!(f, "PC: ${:04X}", self.pc)
    }
}
