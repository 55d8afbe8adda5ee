//! Engine and loader errors.

use thiserror::Error;

/// Faults that stop a run.
///
/// The `Display` form of each variant is the diagnostic the simulator
/// reports on the error stream; a fault is terminal for the run and the
/// engine never retries past one.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The word at the program counter matches no recognized bit pattern.
    #[error("invalid instruction code")]
    InvalidInstruction { word: u32 },

    /// A taken branch computed a target outside the instruction sequence.
    #[error("Illegal branch to address before instructions: PC = {target}")]
    IllegalBranch { target: i64 },

    /// Register $2 held an unrecognized code at a syscall instruction.
    #[error("Unknown system call: {code}")]
    UnknownSyscall { code: i32 },

    /// The output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures reading an instruction file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A line did not parse as a 32-bit hexadecimal word.
    #[error("{path}:line {line}: invalid hexadecimal number: {text}")]
    BadWord {
        path: String,
        line: usize,
        text: String,
    },
}
