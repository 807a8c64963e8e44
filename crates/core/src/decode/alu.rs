//! ALU slot decoding: `add`, `addi`, `sub`, `mov` (four destination flavors), `nop`.
//!
//! Every arithmetic result is computed here, at decode time, against the current
//! register file — the latch it produces carries a finished value and writeback is a
//! plain commit. Matches the reference implementation's `decodeALUInstruction`.

use super::{parse_decimal, parse_gpr_operand, parse_immediate, parse_line, parse_predicate_operand, rename_checked};
use crate::common::constants::MAX_RBB_IMMEDIATE;
use crate::common::error::{SimError, SimResult};
use crate::latches::{AluLatch, AluOp};
use crate::state::ArchitecturalState;

/// Decodes one ALU-slot instruction line into an [`AluLatch`].
pub fn decode(line: &str, state: &ArchitecturalState) -> SimResult<AluLatch> {
    let parsed = parse_line(line, state)?;

    if parsed.opcode == "nop" {
        return Ok(AluLatch::inert());
    }

    let op = match parsed.opcode {
        "add" | "addi" | "sub" => decode_arithmetic(parsed.opcode, &parsed.operands, state)?,
        "mov" => decode_mov(&parsed.operands, state)?,
        other => {
            return Err(SimError::decode(format!(
                "undefined ALU instruction opcode '{other}'"
            )))
        }
    };

    Ok(AluLatch {
        predicate: parsed.predicate,
        op,
    })
}

fn decode_arithmetic(opcode: &str, ops: &[&str], state: &ArchitecturalState) -> SimResult<AluOp> {
    let dest = rename_checked(state, parse_gpr_operand(ops[0])?)?;
    let src1 = rename_checked(state, parse_gpr_operand(ops[1])?)?;
    let lhs = state.registers.read(src1);

    let value = if opcode == "addi" {
        let imm = parse_decimal(ops[2])?;
        lhs.wrapping_add(imm as u64)
    } else {
        let src2 = rename_checked(state, parse_gpr_operand(ops[2])?)?;
        let rhs = state.registers.read(src2);
        if opcode == "add" {
            lhs.wrapping_add(rhs)
        } else {
            lhs.wrapping_sub(rhs)
        }
    };

    Ok(AluOp::Alu {
        target: dest,
        value,
    })
}

fn decode_mov(ops: &[&str], state: &ArchitecturalState) -> SimResult<AluOp> {
    let dst_tok = ops[0];

    if dst_tok.starts_with('p') {
        let idx = parse_predicate_operand(dst_tok)?;
        let target = rename_checked(state, idx)?;
        let value = match ops[1] {
            "true" => true,
            "false" => false,
            other => {
                return Err(SimError::decode(format!(
                    "mov to a predicate register expects 'true' or 'false', got '{other}'"
                )))
            }
        };
        return Ok(AluOp::UpdatePredicate { target, value });
    }

    match dst_tok.to_ascii_uppercase().as_str() {
        "LC" => return Ok(AluOp::UpdateLc {
            value: parse_decimal(ops[1])? as u64,
        }),
        "EC" => return Ok(AluOp::UpdateEc {
            value: parse_decimal(ops[1])? as u64,
        }),
        "RBB" => {
            let value = parse_decimal(ops[1])?;
            if value >= MAX_RBB_IMMEDIATE as i64 {
                return Err(SimError::decode(format!(
                    "RBB may not exceed {}, got {value}",
                    MAX_RBB_IMMEDIATE - 1
                )));
            }
            return Ok(AluOp::UpdateRbb {
                value: value as u64,
            });
        }
        _ => {}
    }

    if dst_tok.starts_with('x') {
        let target = rename_checked(state, parse_gpr_operand(dst_tok)?)?;
        let value = if let Ok(src) = parse_gpr_operand(ops[1]) {
            let src = rename_checked(state, src)?;
            state.registers.read(src)
        } else {
            parse_immediate(ops[1])? as u64
        };
        return Ok(AluOp::Alu { target, value });
    }

    Err(SimError::decode(format!(
        "unrecognized mov destination '{dst_tok}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addi_adds_decoded_immediate() {
        let mut state = ArchitecturalState::new();
        state.registers.write(1, 10);
        let latch = decode("addi x2, x1, 5", &state).unwrap();
        assert_eq!(
            latch.op,
            AluOp::Alu {
                target: 2,
                value: 15
            }
        );
        assert!(latch.predicate);
    }

    #[test]
    fn sub_wraps_on_underflow() {
        let mut state = ArchitecturalState::new();
        state.registers.write(1, 0);
        state.registers.write(2, 1);
        let latch = decode("sub x3, x1, x2", &state).unwrap();
        assert_eq!(
            latch.op,
            AluOp::Alu {
                target: 3,
                value: u64::MAX
            }
        );
    }

    #[test]
    fn mov_immediate_accepts_hex() {
        let state = ArchitecturalState::new();
        let latch = decode("mov x4, 0x10", &state).unwrap();
        assert_eq!(
            latch.op,
            AluOp::Alu {
                target: 4,
                value: 16
            }
        );
    }

    #[test]
    fn mov_rbb_rejects_overflow() {
        let state = ArchitecturalState::new();
        assert!(decode("mov RBB, 64", &state).is_err());
    }

    #[test]
    fn mov_predicate_true_produces_update_predicate() {
        let state = ArchitecturalState::new();
        let latch = decode("mov p1, true", &state).unwrap();
        assert_eq!(
            latch.op,
            AluOp::UpdatePredicate {
                target: 1,
                value: true
            }
        );
    }

    #[test]
    fn nop_is_always_inert_even_if_gated() {
        let mut state = ArchitecturalState::new();
        state.predicates.write(2, true);
        let latch = decode("(p2) nop", &state).unwrap();
        assert_eq!(latch, AluLatch::inert());
    }

    #[test]
    fn predicate_operand_helper_parses_index() {
        assert_eq!(parse_predicate_operand("p7").unwrap(), 7);
    }
}
