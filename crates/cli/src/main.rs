//! mipsim CLI: run MIPS-subset hex programs with optional tracing.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use mipsim_executor::{read_program, Cpu};

/// mipsim: MIPS-subset instruction simulator
#[derive(Parser)]
#[command(name = "mipsim")]
#[command(version = "0.1.0")]
#[command(about = "Simulate a small MIPS instruction subset from a hex listing", long_about = None)]
struct Cli {
    /// Raw output only: suppress the per-instruction trace
    #[arg(short = 'r')]
    raw: bool,

    /// Path to the instruction file (one hex word per line)
    file: PathBuf,
}

fn main() {
    // clap exits with 2 on usage errors; the contract here is 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            process::exit(code);
        }
    };

    let program = match read_program(&cli.file) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut cpu = Cpu::new();
    if !cli.raw {
        cpu.enable_tracing();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = cpu.run(&program, &mut out);
    let _ = out.flush();

    // A fault inside the simulated program is a program result, not a
    // tool failure: report it and still exit 0.
    if let Err(e) = result {
        eprintln!("{}", e);
    }
}
