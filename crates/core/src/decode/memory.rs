//! Memory slot decoding: `ld`, `st`, `nop`.
//!
//! The effective address (and, for `st`, the stored datum) are computed here at decode
//! time; the latch writeback produces is a plain memory access. Matches
//! `decodeLoadStoreInstruction`, including its unusual `st` operand convention: the first
//! operand is renamed like a destination, but its *value* is read, not written.

use super::{parse_decimal, parse_gpr_operand, parse_line, rename_checked};
use crate::common::error::{SimError, SimResult};
use crate::latches::{MemoryLatch, MemoryOp};
use crate::state::ArchitecturalState;

/// Decodes one memory-slot instruction line into a [`MemoryLatch`].
pub fn decode(line: &str, state: &ArchitecturalState) -> SimResult<MemoryLatch> {
    let parsed = parse_line(line, state)?;

    if parsed.opcode == "nop" {
        return Ok(MemoryLatch::inert());
    }
    if parsed.opcode != "ld" && parsed.opcode != "st" {
        return Err(SimError::decode(format!(
            "undefined memory instruction opcode '{}'",
            parsed.opcode
        )));
    }

    let reg = rename_checked(state, parse_gpr_operand(parsed.operands[0])?)?;
    let (imm, base_tok) = split_displacement(parsed.operands[1])?;
    let base = rename_checked(state, parse_gpr_operand(base_tok)?)?;
    let address = state.registers.read(base).wrapping_add(imm as u64);

    let op = if parsed.opcode == "ld" {
        MemoryOp::Load {
            address,
            dest: reg,
        }
    } else {
        MemoryOp::Store {
            address,
            data: state.registers.read(reg),
        }
    };

    Ok(MemoryLatch {
        predicate: parsed.predicate,
        op,
    })
}

/// Splits an `imm(xNN)` displacement operand into its signed offset (0 when omitted,
/// e.g. `(x3)`) and the base-register token.
fn split_displacement(tok: &str) -> SimResult<(i64, &str)> {
    let open = tok
        .find('(')
        .ok_or_else(|| SimError::decode(format!("malformed memory operand '{tok}'")))?;
    let close = tok
        .rfind(')')
        .ok_or_else(|| SimError::decode(format!("malformed memory operand '{tok}'")))?;

    let imm_text = tok[..open].trim();
    let imm = if imm_text.is_empty() {
        0
    } else {
        parse_decimal(imm_text)?
    };

    let base_tok = &tok[open + 1..close];
    Ok((imm, base_tok))
}
