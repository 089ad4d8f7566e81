//! WebAssembly bindings for the nes6502 core.
//!
//! This module provides JavaScript-callable interfaces to the CPU, so a
//! browser front end can single-step programs and inspect registers.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
