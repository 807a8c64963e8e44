//! Instruction decoding: turning one slot's text into a pipeline latch.
//!
//! One submodule per functional unit ([`alu`], [`multiplier`], [`memory`], [`branch`]),
//! sharing the tokenizer and immediate parsers defined here. Every decoder renames its
//! register/predicate operands and, where the unit computes combinationally (ALU,
//! multiplier, memory address), performs that computation at decode time — the latch
//! then carries an already-finished value and writeback is a plain commit.

pub mod alu;
pub mod branch;
pub mod memory;
pub mod multiplier;

use crate::common::error::{SimError, SimResult};
use crate::state::ArchitecturalState;

/// One slot instruction, split into its predicate gate, opcode, and operand tokens.
#[derive(Debug, Clone)]
pub struct ParsedLine<'a> {
    /// Whether the (already renamed and read) leading predicate register is set; `true`
    /// when no predicate prefix was present at all.
    pub predicate: bool,
    /// The opcode token, e.g. `"addi"` or `"loop.pip"`.
    pub opcode: &'a str,
    /// The operand tokens, with any trailing comma already stripped.
    pub operands: Vec<&'a str>,
}

/// Splits `line` into predicate/opcode/operands, evaluating an optional leading
/// `(pNN)` predicate gate against the *current* (pre-writeback) predicate register file.
///
/// Tokenization matches the reference implementation: split on whitespace, treat a
/// leading token as the predicate gate only if it both starts with `(` and ends with
/// `)`, and strip one trailing comma from every operand token.
pub fn parse_line<'a>(line: &'a str, state: &ArchitecturalState) -> SimResult<ParsedLine<'a>> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(SimError::decode("empty instruction text"));
    }

    let mut predicate = true;
    if tokens[0].starts_with('(') && tokens[0].ends_with(')') {
        let inner = &tokens[0][1..tokens[0].len() - 1];
        let idx_text = inner
            .strip_prefix('p')
            .ok_or_else(|| SimError::decode(format!("malformed predicate gate: {}", tokens[0])))?;
        let idx: usize = idx_text
            .trim()
            .parse()
            .map_err(|_| SimError::decode(format!("malformed predicate gate: {}", tokens[0])))?;
        let physical = rename_checked(state, idx)?;
        predicate = state.predicates.read(physical);
        tokens.remove(0);
    }

    let opcode = tokens[0];
    let operands = tokens[1..]
        .iter()
        .map(|tok| tok.strip_suffix(',').unwrap_or(tok))
        .collect();

    Ok(ParsedLine {
        predicate,
        opcode,
        operands,
    })
}

/// Renames `arch`, rejecting indices outside `[0, 96)` as a decode error.
///
/// Applies uniformly to general-register and predicate-register operands: the
/// reference implementation's `renameRegister` asserts the same bound for both.
pub fn rename_checked(state: &ArchitecturalState, arch: usize) -> SimResult<usize> {
    if arch >= crate::common::constants::NUM_REGISTERS {
        return Err(SimError::decode(format!(
            "register index {arch} out of range [0, 96)"
        )));
    }
    Ok(state.rename(arch))
}

/// Parses a `xNN` token into its architectural register index.
pub fn parse_gpr_operand(tok: &str) -> SimResult<usize> {
    tok.strip_prefix('x')
        .ok_or_else(|| SimError::decode(format!("expected a register operand, got '{tok}'")))?
        .parse()
        .map_err(|_| SimError::decode(format!("malformed register operand '{tok}'")))
}

/// Parses a `pNN` token into its architectural predicate index.
pub fn parse_predicate_operand(tok: &str) -> SimResult<usize> {
    tok.strip_prefix('p')
        .ok_or_else(|| SimError::decode(format!("expected a predicate operand, got '{tok}'")))?
        .parse()
        .map_err(|_| SimError::decode(format!("malformed predicate operand '{tok}'")))
}

/// Parses a plain signed-decimal immediate (no `0x` support). Used everywhere an
/// immediate is expected except the `mov xD, imm` register-immediate form.
pub fn parse_decimal(tok: &str) -> SimResult<i64> {
    tok.trim()
        .parse()
        .map_err(|_| SimError::decode(format!("malformed decimal immediate '{tok}'")))
}

/// Parses a hex-or-decimal immediate: `0x`-prefixed hex, otherwise signed decimal.
///
/// This dual form is accepted **only** by the `mov xD, imm` decoder — every other
/// immediate site uses [`parse_decimal`], matching the reference implementation's
/// single dedicated call site for its hex-aware parser.
pub fn parse_immediate(tok: &str) -> SimResult<i64> {
    if let Some(hex) = tok.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
            .map_err(|_| SimError::decode(format!("malformed hex immediate '{tok}'")))
    } else {
        parse_decimal(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpredicated_line_splits_opcode_and_operands() {
        let state = ArchitecturalState::new();
        let parsed = parse_line("addi x1, x0, 7", &state).unwrap();
        assert!(parsed.predicate);
        assert_eq!(parsed.opcode, "addi");
        assert_eq!(parsed.operands, vec!["x1", "x0", "7"]);
    }

    #[test]
    fn predicated_line_strips_gate_and_reads_it() {
        let mut state = ArchitecturalState::new();
        state.predicates.write(5, false);
        let parsed = parse_line("(p5) st x1, 0(x2)", &state).unwrap();
        assert!(!parsed.predicate);
        assert_eq!(parsed.opcode, "st");
        assert_eq!(parsed.operands, vec!["x1", "0(x2)"]);
    }

    #[test]
    fn immediate_accepts_hex_and_decimal() {
        assert_eq!(parse_immediate("0x10").unwrap(), 16);
        assert_eq!(parse_immediate("16").unwrap(), 16);
        assert_eq!(parse_immediate("-3").unwrap(), -3);
    }

    #[test]
    fn decimal_rejects_hex() {
        assert!(parse_decimal("0x10").is_err());
    }
}
