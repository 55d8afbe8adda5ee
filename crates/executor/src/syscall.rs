//! Syscall codes and calling convention.
//!
//! A `syscall` instruction carries no operands of its own: the engine reads
//! the syscall number from register $2 and the argument, if the call takes
//! one, from register $4 (the `$v0`/`$a0` convention).

/// Register holding the syscall number at a `syscall` instruction.
pub const REG_V0: usize = 2;
/// Register holding the syscall argument.
pub const REG_A0: usize = 4;

/// Syscall codes recognized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SyscallCode {
    /// Print the argument as a signed decimal integer.
    PrintInt = 1,
    /// Stop execution normally.
    Exit = 10,
    /// Print the low byte of the argument as a single character.
    PrintChar = 11,
}

impl SyscallCode {
    /// Map a raw register value to a recognized code.
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::PrintInt),
            10 => Some(Self::Exit),
            11 => Some(Self::PrintChar),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(SyscallCode::from_i32(1), Some(SyscallCode::PrintInt));
        assert_eq!(SyscallCode::from_i32(10), Some(SyscallCode::Exit));
        assert_eq!(SyscallCode::from_i32(11), Some(SyscallCode::PrintChar));
    }

    #[test]
    fn test_unknown_codes() {
        for code in [0, 2, 9, 12, 93, -1, i32::MIN] {
            assert_eq!(SyscallCode::from_i32(code), None, "code {}", code);
        }
    }
}
