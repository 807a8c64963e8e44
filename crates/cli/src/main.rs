//! VLIW-470 cycle-accurate simulator CLI.
//!
//! This binary is a single entry point: load a program (and optional data-memory
//! initialization file), run it to completion, and write the cycle-by-cycle trace to a
//! JSON file. It performs:
//! 1. **Load:** parse the program and optional `--memory` JSON.
//! 2. **Run:** tick the engine until the program counter drains past the end of the
//!    program, plus two cycles to flush the pipeline.
//! 3. **Report:** write the trace JSON, then print a run-statistics summary to stdout.

use std::fs;
use std::io::Write;
use std::process;

use clap::Parser;

use vliw470_core::engine::Cpu;
use vliw470_core::memory::DataMemory;
use vliw470_core::program::{self, Program};

#[derive(Parser, Debug)]
#[command(
    name = "vliw470-sim",
    author,
    version,
    about = "VLIW-470 cycle-accurate simulator",
    long_about = "Run a VLIW-470 program to completion and dump its cycle-accurate trace.\n\nExamples:\n  vliw470-sim program.json result.json\n  vliw470-sim program.json result.json --memory init.json"
)]
struct Cli {
    /// JSON program file: a flat array of 5-element bundles
    /// `[ALU0, ALU1, Multiplier, Memory, Branch]`.
    program: String,

    /// Path to write the cycle-accurate trace JSON to.
    result: String,

    /// Optional data-memory initialization file: a JSON object mapping address
    /// (decimal or `0x`-prefixed hex) to initial word value.
    #[arg(long)]
    memory: Option<String>,

    /// Suppress the run-statistics summary normally printed to stdout.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let program_text = fs::read_to_string(&cli.program).unwrap_or_else(|err| {
        eprintln!("Error reading program file {}: {err}", cli.program);
        process::exit(1);
    });
    let program = Program::parse(&program_text).unwrap_or_else(|err| {
        eprintln!("Error parsing program file {}: {err}", cli.program);
        process::exit(1);
    });

    let memory = match &cli.memory {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|err| {
                eprintln!("Error reading memory file {path}: {err}");
                process::exit(1);
            });
            let entries = program::parse_memory_init(&text).unwrap_or_else(|err| {
                eprintln!("Error parsing memory file {path}: {err}");
                process::exit(1);
            });
            DataMemory::from_entries(entries)
        }
        None => DataMemory::new(),
    };

    println!("[*] Loaded {} bundle(s) from {}", program.len(), cli.program);
    if let Some(path) = &cli.memory {
        println!("[*] Initialized data memory from {path}");
    }

    let mut cpu = Cpu::new(program, memory);
    let trace = cpu.run_to_completion().unwrap_or_else(|err| {
        eprintln!("\n[!] Simulation error: {err}");
        process::exit(1);
    });

    let json = serde_json::to_string_pretty(&trace).unwrap_or_else(|err| {
        eprintln!("Error serializing trace: {err}");
        process::exit(1);
    });
    fs::write(&cli.result, json).unwrap_or_else(|err| {
        eprintln!("Error writing result file {}: {err}", cli.result);
        process::exit(1);
    });

    println!("[*] Ran {} cycle(s), wrote trace to {}", trace.len(), cli.result);

    if !cli.quiet {
        cpu.stats().print();
    }
    std::io::stdout().flush().ok();
}
