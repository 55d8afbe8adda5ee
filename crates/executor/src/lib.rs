//! mipsim-executor: Instruction-level simulator for a small MIPS subset.
//!
//! This crate provides:
//! - A minimal MIPS CPU emulator (registers only, no data memory)
//! - Per-instruction trace output
//! - Hex program file loader
//! - Print/exit syscall handling

pub mod cpu;
pub mod decode;
pub mod error;
pub mod program;
pub mod syscall;

pub use cpu::{Cpu, Halt};
pub use decode::{DecodedInstr, Op};
pub use error::{ExecError, LoadError};
pub use program::read_program;
pub use syscall::SyscallCode;
