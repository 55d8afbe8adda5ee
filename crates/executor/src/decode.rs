//! Instruction decoder for the simulated MIPS subset.
//!
//! # Word Layout
//!
//! All instructions are one 32-bit word:
//!
//! ```text
//! 31      26 25   21 20   16 15   11 10                0
//! +---------+-------+-------+-------+------------------+
//! | opcode  |  rs   |  rt   |  rd   |  function field  |   register format
//! +---------+-------+-------+-------+------------------+
//! | opcode  |  rs   |  rt   |     immediate (16)       |   immediate format
//! +---------+-------+-------+--------------------------+
//! ```
//!
//! A zero opcode selects the register format and the 11-bit function field
//! picks the operation; any other opcode picks the operation directly. The
//! two tables are never cross-matched: a zero-opcode word with an unknown
//! function field is invalid even when that field numerically equals an
//! immediate-format opcode.

use std::fmt;

/// Operations of the simulated subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Slt,
    Mul,
    Beq,
    Bne,
    Addi,
    Ori,
    Lui,
    Syscall,
}

/// Decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInstr {
    /// Raw 32-bit instruction word.
    pub word: u32,
    /// Operation, or `None` for an unrecognized bit pattern.
    pub op: Option<Op>,
    /// First source register (bits [25:21]).
    pub rs: u8,
    /// Second source register (bits [20:16]).
    pub rt: u8,
    /// Destination register (bits [15:11], register format only).
    pub rd: u8,
    /// Immediate operand (bits [15:0]), sign-extended when used as a value.
    pub imm: i16,
}

/// Primary opcode constants (bits [31:26]).
pub mod opcode {
    pub const RTYPE: u32 = 0b000000;
    pub const MUL: u32 = 0b011100;
    pub const BEQ: u32 = 0b000100;
    pub const BNE: u32 = 0b000101;
    pub const ADDI: u32 = 0b001000;
    pub const ORI: u32 = 0b001101;
    pub const LUI: u32 = 0b001111;
}

/// Function-field constants (bits [10:0], register format).
pub mod funct {
    pub const ADD: u32 = 0b00000100000;
    pub const SUB: u32 = 0b00000100010;
    pub const SLT: u32 = 0b00000101010;
    pub const SYSCALL: u32 = 0b00000001100;
}

impl DecodedInstr {
    /// Decode a 32-bit instruction word.
    ///
    /// Total function: every word yields a result, with `op: None` for
    /// unrecognized patterns. Operand fields are extracted regardless of
    /// which format applies; the executor ignores the ones an operation
    /// does not use.
    pub fn decode(word: u32) -> Self {
        let op = match (word >> 26) & 0x3F {
            opcode::RTYPE => match word & 0x7FF {
                funct::ADD => Some(Op::Add),
                funct::SUB => Some(Op::Sub),
                funct::SLT => Some(Op::Slt),
                funct::SYSCALL => Some(Op::Syscall),
                _ => None,
            },
            opcode::MUL => Some(Op::Mul),
            opcode::BEQ => Some(Op::Beq),
            opcode::BNE => Some(Op::Bne),
            opcode::ADDI => Some(Op::Addi),
            opcode::ORI => Some(Op::Ori),
            opcode::LUI => Some(Op::Lui),
            _ => None,
        };

        Self {
            word,
            op,
            rs: ((word >> 21) & 0x1F) as u8,
            rt: ((word >> 16) & 0x1F) as u8,
            rd: ((word >> 11) & 0x1F) as u8,
            imm: word as u16 as i16,
        }
    }
}

impl Op {
    /// Assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Slt => "slt",
            Op::Mul => "mul",
            Op::Beq => "beq",
            Op::Bne => "bne",
            Op::Addi => "addi",
            Op::Ori => "ori",
            Op::Lui => "lui",
            Op::Syscall => "syscall",
        }
    }
}

impl fmt::Display for DecodedInstr {
    /// Render the mnemonic and operands the way the trace prints them.
    ///
    /// Mnemonics are left-aligned in a four-character field so operands
    /// line up; operand order depends on the instruction class. Words with
    /// no recognized operation render as `invalid` (the engine halts
    /// before ever printing one).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            Some(op) => op,
            None => return write!(f, "invalid"),
        };
        match op {
            Op::Add | Op::Sub | Op::Slt | Op::Mul => {
                write!(f, "{:<4} ${}, ${}, ${}", op.mnemonic(), self.rd, self.rs, self.rt)
            }
            Op::Beq | Op::Bne => {
                write!(f, "{:<4} ${}, ${}, {}", op.mnemonic(), self.rs, self.rt, self.imm)
            }
            Op::Addi | Op::Ori => {
                write!(f, "{:<4} ${}, ${}, {}", op.mnemonic(), self.rt, self.rs, self.imm)
            }
            Op::Lui => write!(f, "{:<4} ${}, {}", op.mnemonic(), self.rt, self.imm),
            Op::Syscall => write!(f, "syscall"),
        }
    }
}
