//! CPU configuration.

/// What to do when the fetched opcode has no documented instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalOpcodePolicy {
    /// Execute it as a one-byte instruction with no effect.
    #[default]
    Nop,
    /// Refuse to execute it: `step` returns
    /// [`ExecutionError::IllegalOpcode`](crate::ExecutionError::IllegalOpcode)
    /// and leaves the processor state untouched.
    Reject,
}

/// Construction-time options for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use nes6502::{CpuConfig, IllegalOpcodePolicy, CPU};
///
/// let cpu = CPU::with_config(CpuConfig {
///     illegal_opcodes: IllegalOpcodePolicy::Reject,
/// });
/// assert_eq!(cpu.config().illegal_opcodes, IllegalOpcodePolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    pub illegal_opcodes: IllegalOpcodePolicy,
}
