//! Branch slot decoding: `loop`, `loop.pip`, `nop`.
//!
//! Zero-latency: unlike the other three units, the branch latch this produces is
//! consumed in the very same cycle, after the snapshot is taken. Matches
//! `decodeBrancInstruction`, including its wire-level quirk that `loop.pip` and an
//! inert (`nop`) decode share the same `"hw"` opcode tag on the wire — [`crate::trace`]
//! reproduces that tag from the [`BranchOp`] variant, not the other way around.

use super::{parse_decimal, parse_line};
use crate::common::error::{SimError, SimResult};
use crate::latches::{BranchLatch, BranchOp};
use crate::state::ArchitecturalState;

/// Decodes one branch-slot instruction line into a [`BranchLatch`].
pub fn decode(line: &str, state: &ArchitecturalState) -> SimResult<BranchLatch> {
    let parsed = parse_line(line, state)?;

    match parsed.opcode {
        "loop" => Ok(BranchLatch {
            predicate: parsed.predicate,
            op: BranchOp::Loop,
            target_pc: parse_decimal(parsed.operands[0])? as u64,
        }),
        "loop.pip" => Ok(BranchLatch {
            predicate: parsed.predicate,
            op: BranchOp::PipelinedLoop,
            target_pc: parse_decimal(parsed.operands[0])? as u64,
        }),
        "nop" => Ok(BranchLatch::inert()),
        other => Err(SimError::decode(format!(
            "undefined branch instruction opcode '{other}'"
        ))),
    }
}
