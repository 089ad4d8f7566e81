//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. The CPU never owns its memory: every
//! [`CPU::step`](crate::CPU::step) borrows the bus for the duration of one
//! instruction, so the same bus can be shared with other subsystems between
//! steps.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Mirroring, ROM and memory-mapped registers are the implementation's business
//! - Simple signatures for WASM compatibility

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nes6502::MemoryBus;
///
/// /// 2KB of internal RAM mirrored through $0000-$1FFF, PRG ROM above $8000.
/// struct ConsoleBus {
///     ram: [u8; 0x0800],
///     prg: Vec<u8>,
/// }
///
/// impl MemoryBus for ConsoleBus {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             0x8000..=0xFFFF => self.prg[(addr as usize - 0x8000) % self.prg.len()],
///             _ => 0,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
///
/// let mut bus = ConsoleBus { ram: [0; 0x0800], prg: vec![0xEA; 0x4000] };
/// bus.write(0x0801, 0x42);
/// assert_eq!(bus.read(0x0001), 0x42);
/// assert_eq!(bus.read(0xC000), 0xEA);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped,
    /// implementations may return garbage data (matching 6502 hardware behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or unmapped,
    /// implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are writable RAM initialized to 0x00. Useful for
/// tests and hosts that do not need a console memory map.
///
/// # Examples
///
/// ```
/// use nes6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0xC0); // Reset vector high byte (PC = 0xC000)
///
/// let cpu = CPU::power_on(&memory);
/// assert_eq!(cpu.pc(), 0xC000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past $FFFF.
    ///
    /// ```
    /// use nes6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0xA9, 0x42]);
    /// assert_eq!(mem.read(0x8001), 0x42);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Borrows one 256-byte page.
    pub fn page(&self, page: u8) -> &[u8] {
        let start = (page as usize) << 8;
        &self.data[start..start + 0x100]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
