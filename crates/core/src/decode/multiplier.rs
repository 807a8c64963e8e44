//! Multiplier slot decoding: `mulu`, `nop`.
//!
//! The product is computed here at decode time, as a freshly-inserted stage 0 of the
//! three-deep shift register; [`crate::engine`] is responsible for shifting it along
//! and draining stage 2 at writeback. Matches `decodeMultiplierInstruction`.

use super::{parse_gpr_operand, parse_line, rename_checked};
use crate::common::error::{SimError, SimResult};
use crate::latches::MultiplierStage;
use crate::state::ArchitecturalState;

/// Decodes one multiplier-slot instruction line into a fresh [`MultiplierStage`].
pub fn decode(line: &str, state: &ArchitecturalState) -> SimResult<MultiplierStage> {
    let parsed = parse_line(line, state)?;

    if parsed.opcode == "nop" {
        return Ok(MultiplierStage::inert());
    }
    if parsed.opcode != "mulu" {
        return Err(SimError::decode(format!(
            "undefined multiplier instruction opcode '{}'",
            parsed.opcode
        )));
    }

    let target = rename_checked(state, parse_gpr_operand(parsed.operands[0])?)?;
    let src1 = rename_checked(state, parse_gpr_operand(parsed.operands[1])?)?;
    let src2 = rename_checked(state, parse_gpr_operand(parsed.operands[2])?)?;

    let result = state
        .registers
        .read(src1)
        .wrapping_mul(state.registers.read(src2));

    Ok(MultiplierStage {
        predicate: parsed.predicate,
        target,
        result,
    })
}
