//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupt lines,
//! state inspection and disassembly. The emulator owns a [`FlatMemory`] and
//! hands it to the CPU on every step.

use crate::{disassemble, FlatMemory, MemoryBus, Signals, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::ExecutionError> for JsError {
    fn from(err: crate::ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
    memory: FlatMemory,
    /// Lines raised from JavaScript, delivered with the next step
    pending: Signals,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator over zeroed 64KB memory, PC at $8000
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(),
            memory: FlatMemory::new(),
            pending: Signals::empty(),
        }
    }

    /// Execute a single instruction, delivering any raised interrupt lines
    pub fn step(&mut self) -> Result<(), JsError> {
        let signals = std::mem::take(&mut self.pending);
        self.cpu.step(&mut self.memory, signals)?;
        Ok(())
    }

    /// Execute up to `count` instructions and return how many ran
    pub fn run(&mut self, count: u32) -> Result<u32, JsError> {
        for executed in 0..count {
            if let Err(err) = self.step() {
                log::warn!("run stopped after {} instructions", executed);
                return Err(err);
            }
        }
        Ok(count)
    }

    /// Reinitialize registers and load PC from the reset vector; memory is kept
    pub fn reset(&mut self) {
        self.pending = Signals::empty();
        self.cpu.reset(&self.memory);
    }

    /// Raise the NMI line for the next step
    pub fn raise_nmi(&mut self) {
        self.pending.insert(Signals::NMI);
    }

    /// Raise the IRQ line for the next step
    pub fn raise_irq(&mut self) {
        self.pending.insert(Signals::IRQ);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> f64 {
        self.cpu.steps() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Multi-line register dump
    pub fn dump(&self) -> String {
        self.cpu.to_string()
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.memory.page(page))
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.memory.load(start_addr, program);
        self.cpu.set_pc(start_addr);
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        // Three bytes per instruction at most
        let len = (num_instructions as usize * 3).min(0x10000);
        let window: Vec<u8> = (0..len)
            .map(|i| self.memory.read(start_addr.wrapping_add(i as u16)))
            .collect();

        disassemble(&window, start_addr)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                bytes.extend_from_slice(&instr.operand_bytes);

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: instr.to_string(),
                })
            })
            .collect()
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
