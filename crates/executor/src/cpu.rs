//! Execution engine for the simulated MIPS subset.
//!
//! # Execution Model
//!
//! One `Cpu` value holds the machine state for a single run: 32 signed
//! registers and a program counter indexing into a caller-owned slice of
//! instruction words. [`Cpu::step`] performs one decode/execute cycle and
//! [`Cpu::run`] loops until the first halt or fault.
//!
//! ## Halting
//!
//! - Program counter outside the sequence: silent normal stop.
//! - Exit syscall (code 10): silent normal stop.
//! - Invalid decode, illegal branch target, unknown syscall: fault carrying
//!   a diagnostic ([`ExecError`]).
//!
//! All program output and trace output goes through the `Write` sink the
//! caller passes in; the engine never touches stdout itself.

use std::io::Write;

use crate::decode::{DecodedInstr, Op};
use crate::error::ExecError;
use crate::syscall::{SyscallCode, REG_A0, REG_V0};

/// Why a run stopped without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// The program counter left the instruction sequence.
    OffEnd,
    /// The program executed an exit syscall.
    Exit,
}

/// Machine state for one run.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers $0..$31.
    pub regs: [i32; 32],
    /// Index of the next instruction to execute.
    pub pc: i64,
    /// Tracing enabled flag.
    tracing: bool,
}

impl Cpu {
    /// Create a CPU with zeroed registers and the program counter at 0.
    pub fn new() -> Self {
        Self {
            regs: [0; 32],
            pc: 0,
            tracing: false,
        }
    }

    /// Enable per-instruction tracing.
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
    }

    /// Set a register value ($0 writes are ignored).
    #[inline]
    pub fn set_reg(&mut self, r: u8, val: i32) {
        if r != 0 {
            self.regs[r as usize] = val;
        }
    }

    /// Get a register value.
    #[inline]
    pub fn get_reg(&self, r: u8) -> i32 {
        self.regs[r as usize]
    }

    /// Execute the instruction at the program counter.
    ///
    /// Returns `Ok(None)` when execution continues, `Ok(Some(halt))` on a
    /// normal stop, and `Err` on a fault; the fault's `Display` form is the
    /// diagnostic to report. Program and trace output is written to `out`.
    pub fn step<W: Write>(
        &mut self,
        program: &[u32],
        out: &mut W,
    ) -> Result<Option<Halt>, ExecError> {
        if self.pc < 0 || self.pc >= program.len() as i64 {
            return Ok(Some(Halt::OffEnd));
        }
        let word = program[self.pc as usize];
        let instr = DecodedInstr::decode(word);

        let op = match instr.op {
            Some(op) => {
                if self.tracing {
                    writeln!(out, "{}: 0x{:08X} {}", self.pc, word, instr)?;
                }
                op
            }
            None => {
                if self.tracing {
                    writeln!(out, "{}: 0x{:08X}", self.pc, word)?;
                }
                return Err(ExecError::InvalidInstruction { word });
            }
        };

        let mut next_pc = self.pc + 1;

        match op {
            Op::Add => {
                let val = self.get_reg(instr.rs).wrapping_add(self.get_reg(instr.rt));
                self.write_back(out, instr.rd, val)?;
            }
            Op::Sub => {
                let val = self.get_reg(instr.rs).wrapping_sub(self.get_reg(instr.rt));
                self.write_back(out, instr.rd, val)?;
            }
            Op::Slt => {
                let val = (self.get_reg(instr.rs) < self.get_reg(instr.rt)) as i32;
                self.write_back(out, instr.rd, val)?;
            }
            Op::Mul => {
                let val = self.get_reg(instr.rs).wrapping_mul(self.get_reg(instr.rt));
                self.write_back(out, instr.rd, val)?;
            }
            Op::Beq | Op::Bne => {
                let lhs = self.get_reg(instr.rs);
                let rhs = self.get_reg(instr.rt);
                let taken = if op == Op::Beq { lhs == rhs } else { lhs != rhs };
                if taken {
                    // Offsets are relative to the branch itself; the trace
                    // names the target before the bounds check can reject it.
                    let target = self.pc + i64::from(instr.imm);
                    if self.tracing {
                        writeln!(out, ">>> branch taken to PC = {}", target)?;
                    }
                    if target < 0 || target >= program.len() as i64 {
                        return Err(ExecError::IllegalBranch { target });
                    }
                    next_pc = target;
                } else if self.tracing {
                    writeln!(out, ">>> branch not taken")?;
                }
            }
            Op::Addi => {
                // A $0 destination is dropped with no trace line, unlike
                // every other writing operation.
                if instr.rt != 0 {
                    let val = self.get_reg(instr.rs).wrapping_add(i32::from(instr.imm));
                    self.write_back(out, instr.rt, val)?;
                }
            }
            Op::Ori => {
                // The immediate is a bit pattern here: zero-extended.
                let val = self.get_reg(instr.rs) | i32::from(instr.imm as u16);
                self.write_back(out, instr.rt, val)?;
            }
            Op::Lui => {
                let val = i32::from(instr.imm) << 16;
                self.write_back(out, instr.rt, val)?;
            }
            Op::Syscall => {
                let code = self.regs[REG_V0];
                if self.tracing {
                    writeln!(out, ">>> syscall {}", code)?;
                }
                match SyscallCode::from_i32(code) {
                    Some(SyscallCode::PrintInt) => {
                        let val = self.regs[REG_A0];
                        if self.tracing {
                            writeln!(out, "<<< {}", val)?;
                        } else {
                            write!(out, "{}", val)?;
                        }
                    }
                    Some(SyscallCode::Exit) => return Ok(Some(Halt::Exit)),
                    Some(SyscallCode::PrintChar) => {
                        let byte = self.regs[REG_A0] as u8;
                        if self.tracing {
                            write!(out, "<<< ")?;
                            out.write_all(&[byte])?;
                            writeln!(out)?;
                        } else {
                            out.write_all(&[byte])?;
                        }
                    }
                    None => return Err(ExecError::UnknownSyscall { code }),
                }
            }
        }

        self.pc = next_pc;
        Ok(None)
    }

    /// Run until the first halt or fault.
    pub fn run<W: Write>(&mut self, program: &[u32], out: &mut W) -> Result<Halt, ExecError> {
        loop {
            if let Some(halt) = self.step(program, out)? {
                return Ok(halt);
            }
        }
    }

    /// Store a result and emit its trace line.
    ///
    /// The trace shows the computed value even when a $0 destination
    /// discards it.
    fn write_back<W: Write>(&mut self, out: &mut W, r: u8, val: i32) -> Result<(), ExecError> {
        if self.tracing {
            writeln!(out, ">>> ${} = {}", r, val)?;
        }
        self.set_reg(r, val);
        Ok(())
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
