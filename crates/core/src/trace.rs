//! Cycle-accurate trace snapshots and their wire (JSON) representation.
//!
//! A [`Snapshot`] is taken once per [`crate::engine::Cpu::tick`], after that cycle's
//! branch decode but before any writeback — see the crate-level ordering note. Its
//! `Serialize` impl reproduces the reference implementation's JSON field names and
//! value encodings exactly, including the two wire-level quirks that don't follow from
//! the Rust types alone: a `loop.pip` and an inert branch both serialize their opcode
//! tag as `"hw"`, and an `updatePredicate` ALU op serializes its boolean value as `1`/`0`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::latches::{AluLatch, AluOp, BranchLatch, BranchOp, MemoryLatch, MemoryOp, MultiplierStage};
use crate::state::ArchitecturalState;

#[derive(Serialize)]
struct AluWire {
    predicate: bool,
    opcode: &'static str,
    #[serde(rename = "targetReg")]
    target_reg: usize,
    value: u64,
}

impl From<&AluLatch> for AluWire {
    fn from(latch: &AluLatch) -> Self {
        let (opcode, target_reg, value) = match latch.op {
            AluOp::Alu { target, value } => ("alu", target, value),
            AluOp::UpdateLc { value } => ("updateLC", 0, value),
            AluOp::UpdateEc { value } => ("updateEC", 0, value),
            AluOp::UpdateRbb { value } => ("updateRBB", 0, value),
            AluOp::UpdatePredicate { target, value } => ("updatePredicate", target, u64::from(value)),
        };
        Self {
            predicate: latch.predicate,
            opcode,
            target_reg,
            value,
        }
    }
}

#[derive(Serialize)]
struct BranchWire {
    predicate: bool,
    opcode: &'static str,
    #[serde(rename = "targetPC")]
    target_pc: u64,
}

impl From<&BranchLatch> for BranchWire {
    fn from(latch: &BranchLatch) -> Self {
        let opcode = match latch.op {
            BranchOp::Loop => "loop",
            BranchOp::PipelinedLoop | BranchOp::Inert => "hw",
        };
        Self {
            predicate: latch.predicate,
            opcode,
            target_pc: latch.target_pc,
        }
    }
}

#[derive(Serialize)]
struct MemoryWire {
    predicate: bool,
    opcode: &'static str,
    address: u64,
    data: u64,
    #[serde(rename = "loadDestReg")]
    load_dest_reg: usize,
}

impl From<&MemoryLatch> for MemoryWire {
    fn from(latch: &MemoryLatch) -> Self {
        let (opcode, address, data, load_dest_reg) = match latch.op {
            MemoryOp::Load { address, dest } => ("load", address, 0, dest),
            MemoryOp::Store { address, data } => ("store", address, data, 0),
        };
        Self {
            predicate: latch.predicate,
            opcode,
            address,
            data,
            load_dest_reg,
        }
    }
}

#[derive(Serialize)]
struct MultiplierWire {
    predicate: bool,
    #[serde(rename = "targetReg")]
    target_reg: usize,
    result: u64,
}

impl From<&MultiplierStage> for MultiplierWire {
    fn from(stage: &MultiplierStage) -> Self {
        Self {
            predicate: stage.predicate,
            target_reg: stage.target,
            result: stage.result,
        }
    }
}

/// One cycle's worth of visible state plus its in-flight pipeline latches, in the exact
/// wire shape the reference implementation's `serialize` method produces.
#[derive(Serialize)]
pub struct Snapshot {
    #[serde(rename = "PC")]
    pub pc: u64,
    #[serde(rename = "RBB")]
    pub rbb: u64,
    #[serde(rename = "LC")]
    pub lc: u64,
    #[serde(rename = "EC")]
    pub ec: u64,
    #[serde(rename = "PhysicalRegisterFile")]
    pub registers: Vec<u64>,
    #[serde(rename = "PredicateRegisters")]
    pub predicates: Vec<bool>,
    #[serde(rename = "ALU0")]
    alu0: AluWire,
    #[serde(rename = "ALU1")]
    alu1: AluWire,
    #[serde(rename = "Branch")]
    branch: BranchWire,
    #[serde(rename = "Memory")]
    memory: MemoryWire,
    #[serde(rename = "Multiply")]
    multiply: [MultiplierWire; 3],
    #[serde(rename = "MemoryData")]
    memory_data: BTreeMap<u64, u64>,
}

impl Snapshot {
    /// Captures one cycle's state. `multiplier` is ordered stage-0 (just issued) to
    /// stage-2 (about to drain), matching `MultiplierPipe`'s index order.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn capture(
        state: &ArchitecturalState,
        alu0: &AluLatch,
        alu1: &AluLatch,
        branch: &BranchLatch,
        memory: &MemoryLatch,
        multiplier: &[MultiplierStage; 3],
        memory_data: BTreeMap<u64, u64>,
    ) -> Self {
        Self {
            pc: state.pc,
            rbb: state.rbb,
            lc: state.lc,
            ec: state.ec,
            registers: state.registers.as_array().to_vec(),
            predicates: state.predicates.as_array().to_vec(),
            alu0: alu0.into(),
            alu1: alu1.into(),
            branch: branch.into(),
            memory: memory.into(),
            multiply: [
                MultiplierWire::from(&multiplier[0]),
                MultiplierWire::from(&multiplier[1]),
                MultiplierWire::from(&multiplier[2]),
            ],
            memory_data,
        }
    }
}
