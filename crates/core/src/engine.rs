//! The cycle-accurate engine: fetch, decode, writeback, and the snapshot trace.
//!
//! [`Cpu::tick`] advances the machine by exactly one cycle, in the order the reference
//! implementation's `tick` method follows:
//!
//! 1. Fetch the bundle at the current PC (an implicit all-`nop` bundle once PC runs past
//!    the end of the program).
//! 2. Decode the branch slot immediately — it is zero-latency combinational logic, and
//!    must be decoded before the snapshot below so the snapshot sees *this* cycle's
//!    branch latch rather than last cycle's.
//! 3. Snapshot the architectural state and every latch (the new branch latch, but the
//!    other four latches as they stood *before* this cycle's writeback).
//! 4. Writeback, in order: ALU0, ALU1, Memory, then the multiplier's oldest stage drains.
//! 5. Decode slots 0-3 (ALU0, ALU1, Multiplier, Memory) against the now-updated register
//!    file, replacing last cycle's latches; shift the multiplier's stage register.
//! 6. Advance the PC, then resolve the branch latch captured in step 2 against the
//!    now-updated state.
//!
//! A single [`WriteTracker`] spans steps 4 and 6 (the reference implementation clears its
//! duplicate-write diagnostic once per cycle, before ALU writeback, and never again until
//! the next cycle) so a bundle that writes the same architectural target twice from two
//! different slots is diagnosed rather than silently resolved by write order.

use std::collections::{BTreeMap, HashSet};

use crate::common::error::SimResult;
use crate::decode::{alu, branch, memory, multiplier};
use crate::latches::{AluLatch, AluOp, BranchLatch, BranchOp, MemoryLatch, MemoryOp, MultiplierStage};
use crate::memory::DataMemory;
use crate::program::{Bundle, Program};
use crate::stats::SimStats;
use crate::state::ArchitecturalState;
use crate::trace::Snapshot;

/// The bundle synthesized once the program counter runs past the end of the program:
/// five live `nop`s, not empty strings, so every slot decoder sees well-formed text to
/// tokenize.
fn nop_bundle() -> Bundle {
    Bundle {
        alu0: "nop".to_string(),
        alu1: "nop".to_string(),
        multiplier: "nop".to_string(),
        memory: "nop".to_string(),
        branch: "nop".to_string(),
    }
}

/// Diagnoses a bundle writing the same architectural register/counter from more than
/// one slot in a single cycle. The reference implementation still lets the later write
/// win; this just warns, matching its `print`-based diagnostic.
#[derive(Default)]
struct WriteTracker {
    seen: HashSet<String>,
    duplicates: u64,
}

impl WriteTracker {
    fn record(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.seen.insert(name.clone()) {
            eprintln!("Warning: Multiple instructions are updating the register {name}.");
            self.duplicates += 1;
        }
    }
}

/// The VLIW-470 engine: architectural state, data memory, program image, and the five
/// in-flight pipeline latches.
pub struct Cpu {
    state: ArchitecturalState,
    memory: DataMemory,
    program: Program,
    alu0: AluLatch,
    alu1: AluLatch,
    branch: BranchLatch,
    mem_latch: MemoryLatch,
    multiplier: [MultiplierStage; 3],
    stats: SimStats,
}

impl Cpu {
    /// Builds a freshly-reset machine for `program`, with `memory` as its initial data
    /// memory image.
    #[must_use]
    pub fn new(program: Program, memory: DataMemory) -> Self {
        Self {
            state: ArchitecturalState::new(),
            memory,
            program,
            alu0: AluLatch::inert(),
            alu1: AluLatch::inert(),
            branch: BranchLatch::inert(),
            mem_latch: MemoryLatch::inert(),
            multiplier: [MultiplierStage::inert(); 3],
            stats: SimStats::default(),
        }
    }

    /// The current program counter (bundle index of the next fetch).
    #[must_use]
    pub fn pc(&self) -> u64 {
        self.state.pc
    }

    /// Whether the program counter has run past the end of the program.
    #[must_use]
    pub fn is_past_end(&self) -> bool {
        usize::try_from(self.state.pc).map_or(true, |pc| pc >= self.program.len())
    }

    fn fetch(&self) -> Bundle {
        self.program.get(self.state.pc).cloned().unwrap_or_else(nop_bundle)
    }

    /// Advances the machine by one cycle, returning the snapshot taken partway through
    /// it (see the module-level ordering note).
    pub fn tick(&mut self) -> SimResult<Snapshot> {
        let bundle = self.fetch();

        self.branch = branch::decode(&bundle.branch, &self.state)?;

        let snapshot = Snapshot::capture(
            &self.state,
            &self.alu0,
            &self.alu1,
            &self.branch,
            &self.mem_latch,
            &self.multiplier,
            self.memory.snapshot(),
        );

        let mut tracker = WriteTracker::default();
        self.writeback(&mut tracker);

        self.alu0 = alu::decode(&bundle.alu0, &self.state)?;
        self.alu1 = alu::decode(&bundle.alu1, &self.state)?;
        let new_stage = multiplier::decode(&bundle.multiplier, &self.state)?;
        self.mem_latch = memory::decode(&bundle.memory, &self.state)?;
        self.multiplier = [new_stage, self.multiplier[0], self.multiplier[1]];

        self.advance_pc();
        self.resolve_branch(&mut tracker);

        self.stats.cycles += 1;
        self.stats.duplicate_writes += tracker.duplicates;

        Ok(snapshot)
    }

    fn writeback(&mut self, tracker: &mut WriteTracker) {
        for latch in [self.alu0, self.alu1] {
            if !latch.predicate {
                continue;
            }
            match latch.op {
                AluOp::Alu { target, value } => {
                    tracker.record(format!("x{target}"));
                    self.state.registers.write(target, value);
                    self.stats.inst_alu += 1;
                }
                AluOp::UpdateLc { value } => {
                    tracker.record("LC");
                    self.state.lc = value;
                    self.stats.inst_update_lc += 1;
                }
                AluOp::UpdateEc { value } => {
                    tracker.record("EC");
                    self.state.ec = value;
                    self.stats.inst_update_ec += 1;
                }
                AluOp::UpdateRbb { value } => {
                    tracker.record("RBB");
                    self.state.rbb = value;
                    self.stats.inst_update_rbb += 1;
                }
                AluOp::UpdatePredicate { target, value } => {
                    tracker.record(format!("p{target}"));
                    self.state.predicates.write(target, value);
                    self.stats.inst_update_predicate += 1;
                }
            }
        }

        if self.mem_latch.predicate {
            match self.mem_latch.op {
                MemoryOp::Load { address, dest } => {
                    tracker.record(format!("x{dest}"));
                    let value = self.memory.read(address);
                    self.state.registers.write(dest, value);
                    self.stats.inst_load += 1;
                }
                MemoryOp::Store { address, data } => {
                    self.memory.write(address, data);
                    self.stats.inst_store += 1;
                }
            }
        }

        let drained = self.multiplier[2];
        if drained.predicate {
            tracker.record(format!("x{}", drained.target));
            self.state.registers.write(drained.target, drained.result);
            self.stats.inst_mulu += 1;
        }
    }

    fn advance_pc(&mut self) {
        if !self.is_past_end() {
            self.state.pc += 1;
        }
    }

    fn resolve_branch(&mut self, tracker: &mut WriteTracker) {
        if !self.branch.predicate {
            return;
        }

        match self.branch.op {
            BranchOp::Loop => {
                if self.state.lc > 0 {
                    tracker.record("LC");
                    self.state.lc -= 1;
                    self.state.pc = self.branch.target_pc;
                    self.stats.branch_loop_taken += 1;
                } else {
                    self.stats.branch_loop_fallthrough += 1;
                }
            }
            BranchOp::PipelinedLoop => {
                if self.state.lc > 0 {
                    tracker.record("LC");
                    self.state.lc -= 1;
                    tracker.record("RBB");
                    self.state.rbb += 1;
                    let p32 = self.state.rename(crate::common::constants::PIPELINED_LOOP_PREDICATE);
                    tracker.record(format!("p{p32}"));
                    self.state.predicates.write(p32, true);
                    self.state.pc = self.branch.target_pc;
                    self.stats.branch_pip_kernel += 1;
                } else if self.state.ec > 0 {
                    tracker.record("EC");
                    self.state.ec -= 1;
                    tracker.record("RBB");
                    self.state.rbb += 1;
                    let p32 = self.state.rename(crate::common::constants::PIPELINED_LOOP_PREDICATE);
                    tracker.record(format!("p{p32}"));
                    self.state.predicates.write(p32, false);
                    self.state.pc = self.branch.target_pc;
                    self.stats.branch_pip_epilogue += 1;
                } else {
                    let p32 = self.state.rename(crate::common::constants::PIPELINED_LOOP_PREDICATE);
                    tracker.record(format!("p{p32}"));
                    self.state.predicates.write(p32, false);
                    self.stats.branch_pip_exhausted += 1;
                }
            }
            BranchOp::Inert => {}
        }
    }

    /// Runs the machine to completion: ticks until the PC runs off the end of the
    /// program, then two more cycles to drain the pipeline, matching the reference
    /// implementation's `main` loop.
    pub fn run_to_completion(&mut self) -> SimResult<Vec<Snapshot>> {
        let mut trace = Vec::new();
        loop {
            trace.push(self.tick()?);
            if self.is_past_end() {
                trace.push(self.tick()?);
                trace.push(self.tick()?);
                break;
            }
        }
        Ok(trace)
    }

    /// The final data memory image, for the stats/diagnostic surface.
    #[must_use]
    pub fn memory_snapshot(&self) -> BTreeMap<u64, u64> {
        self.memory.snapshot()
    }

    /// Accumulated run statistics, for the stats/diagnostic surface.
    #[must_use]
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The final architectural state, for the stats/diagnostic surface.
    #[must_use]
    pub fn state(&self) -> &ArchitecturalState {
        &self.state
    }
}
