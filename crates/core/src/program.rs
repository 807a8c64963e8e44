//! Program and data-memory-initialization JSON loading.
//!
//! The program format is a flat JSON array of 5-element string arrays, one per bundle,
//! slot order `[ALU0, ALU1, Multiplier, Memory, Branch]`. The optional memory-init file
//! is a JSON object mapping an address (plain decimal or `0x`-prefixed hex, as a string
//! key) to its initial word value.

use crate::common::constants::BUNDLE_WIDTH;
use crate::common::error::{SimError, SimResult};
use std::collections::BTreeMap;

/// One VLIW bundle: one instruction text per functional-unit slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Slot 0 text.
    pub alu0: String,
    /// Slot 1 text.
    pub alu1: String,
    /// Slot 2 text.
    pub multiplier: String,
    /// Slot 3 text.
    pub memory: String,
    /// Slot 4 text.
    pub branch: String,
}

/// A parsed, validated instruction-memory image.
#[derive(Debug, Clone, Default)]
pub struct Program {
    bundles: Vec<Bundle>,
}

impl Program {
    /// Parses and structurally validates a program JSON document.
    ///
    /// Every element of the top-level array must itself be an array of exactly
    /// [`BUNDLE_WIDTH`] strings; anything else is a structural error.
    pub fn parse(text: &str) -> SimResult<Self> {
        let raw: Vec<Vec<String>> = serde_json::from_str(text)
            .map_err(|err| SimError::structural(format!("malformed program JSON: {err}")))?;

        let bundles = raw
            .into_iter()
            .enumerate()
            .map(|(index, slots)| {
                let width = slots.len();
                let [alu0, alu1, multiplier, memory, branch]: [String; BUNDLE_WIDTH] =
                    slots.try_into().map_err(|_| {
                        SimError::structural(format!(
                            "bundle {index} has {width} instruction(s), expected {BUNDLE_WIDTH}"
                        ))
                    })?;
                Ok(Bundle {
                    alu0,
                    alu1,
                    multiplier,
                    memory,
                    branch,
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self { bundles })
    }

    /// Number of bundles in the program.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Whether the program has no bundles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// The bundle at `pc`, or `None` once the program counter has run off the end (which
    /// the engine treats as an implicit all-`nop` bundle).
    #[must_use]
    pub fn get(&self, pc: u64) -> Option<&Bundle> {
        usize::try_from(pc).ok().and_then(|pc| self.bundles.get(pc))
    }
}

/// Parses a `--memory` initialization file into `(address, word)` pairs.
pub fn parse_memory_init(text: &str) -> SimResult<Vec<(u64, u64)>> {
    let raw: BTreeMap<String, i64> = serde_json::from_str(text)
        .map_err(|err| SimError::structural(format!("malformed memory-init JSON: {err}")))?;

    raw.into_iter()
        .map(|(addr, data)| {
            let address = if let Some(hex) = addr.strip_prefix("0x") {
                u64::from_str_radix(hex, 16)
                    .map_err(|_| SimError::structural(format!("malformed memory address '{addr}'")))?
            } else {
                addr.parse()
                    .map_err(|_| SimError::structural(format!("malformed memory address '{addr}'")))?
            };
            Ok((address, data as u64))
        })
        .collect()
}
