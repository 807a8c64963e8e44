//! Shared test infrastructure for running a bundle program end-to-end.

use vliw470_core::engine::Cpu;
use vliw470_core::memory::DataMemory;
use vliw470_core::program::Program;
use vliw470_core::trace::Snapshot;

/// Parses `program_json`, runs it to completion against an empty initial memory, and
/// returns its full cycle trace.
pub fn run(program_json: &str) -> Vec<Snapshot> {
    run_with_memory(program_json, &[])
}

/// Parses `program_json`, runs it to completion against an initial memory built from
/// `memory_entries`, and returns its full cycle trace.
pub fn run_with_memory(program_json: &str, memory_entries: &[(u64, u64)]) -> Vec<Snapshot> {
    let program = Program::parse(program_json).expect("well-formed test program");
    let memory = DataMemory::from_entries(memory_entries.iter().copied());
    let mut cpu = Cpu::new(program, memory);
    cpu.run_to_completion().expect("decodable test program")
}

/// Reads the general register value at physical index `idx` from `snapshot`.
pub fn register(snapshot: &Snapshot, idx: usize) -> u64 {
    snapshot_to_value(snapshot)["PhysicalRegisterFile"][idx]
        .as_u64()
        .expect("register field is an integer")
}

/// Reads `PC` from `snapshot`.
pub fn pc(snapshot: &Snapshot) -> u64 {
    snapshot_to_value(snapshot)["PC"].as_u64().expect("PC is an integer")
}

/// Reads `LC` from `snapshot`.
pub fn lc(snapshot: &Snapshot) -> u64 {
    snapshot_to_value(snapshot)["LC"].as_u64().expect("LC is an integer")
}

/// Reads `MemoryData` from `snapshot` as a plain JSON value, for address-keyed lookups.
pub fn memory_data(snapshot: &Snapshot) -> serde_json::Value {
    snapshot_to_value(snapshot)["MemoryData"].clone()
}

fn snapshot_to_value(snapshot: &Snapshot) -> serde_json::Value {
    serde_json::to_value(snapshot).expect("snapshot serializes")
}
