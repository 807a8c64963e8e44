//! Visible architectural state.
//!
//! Everything a VLIW-470 program can observe without going through a pipeline latch:
//! the program counter, the loop/epilogue counters, the rotating-register base, and the
//! two physical register files. Reads and writes here always take a *physical* index —
//! callers rename architectural indices via [`crate::rename::rename`] first.

use crate::common::reg::{PhysicalRegisterFile, PredicateRegisterFile};

/// The processor's visible architectural state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchitecturalState {
    /// Bundle index of the next instruction to fetch.
    pub pc: u64,
    /// Loop counter consumed by `loop` and `loop.pip`.
    pub lc: u64,
    /// Epilogue counter consumed by `loop.pip`'s drain phase.
    pub ec: u64,
    /// Rotating-register base; shifts the architectural-to-physical map for `32..96`.
    pub rbb: u64,
    /// The 96-entry general-purpose physical register file.
    pub registers: PhysicalRegisterFile,
    /// The 96-entry predicate physical register file.
    pub predicates: PredicateRegisterFile,
}

impl ArchitecturalState {
    /// Builds the reset state: PC/LC/EC/RBB at zero, all registers and predicates clear.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames `arch` (a register or predicate index) against the current `rbb`.
    #[must_use]
    pub fn rename(&self, arch: usize) -> usize {
        crate::rename::rename(arch, self.rbb)
    }
}
