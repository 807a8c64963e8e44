//! Simulation statistics collection and reporting.
//!
//! A lightweight, non-contractual diagnostic surface alongside the cycle trace: how many
//! cycles ran, what each slot actually retired, how the two branch forms resolved, and
//! how many times a bundle wrote the same architectural target from two slots at once.
//! None of this is part of the trace JSON contract — it exists for a human watching the
//! simulator run, the way the reference implementation's own `print` diagnostics do.

use std::time::Instant;

/// Simulation statistics, accumulated live as [`crate::engine::Cpu::tick`] runs.
#[derive(Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles ticked so far.
    pub cycles: u64,

    /// Retired `add`/`addi`/`sub`/`mov x*,*` commits (the `alu` wire opcode).
    pub inst_alu: u64,
    /// Retired `mov LC,*` commits.
    pub inst_update_lc: u64,
    /// Retired `mov EC,*` commits.
    pub inst_update_ec: u64,
    /// Retired `mov RBB,*` commits.
    pub inst_update_rbb: u64,
    /// Retired `mov p*,true|false` commits.
    pub inst_update_predicate: u64,
    /// Retired `ld` commits.
    pub inst_load: u64,
    /// Retired `st` commits.
    pub inst_store: u64,
    /// Retired `mulu` commits (drained from the multiplier's third stage).
    pub inst_mulu: u64,

    /// `loop` branches that were live and found `LC > 0`, so were taken.
    pub branch_loop_taken: u64,
    /// `loop` branches that were live but found `LC == 0`, so fell through.
    pub branch_loop_fallthrough: u64,
    /// `loop.pip` branches that found `LC > 0` (kernel iteration, taken).
    pub branch_pip_kernel: u64,
    /// `loop.pip` branches that found `LC == 0` but `EC > 0` (epilogue iteration, taken).
    pub branch_pip_epilogue: u64,
    /// `loop.pip` branches that found both counters exhausted, so fell through.
    pub branch_pip_exhausted: u64,

    /// Number of times a single cycle's writeback targeted the same architectural
    /// register/counter from more than one slot.
    pub duplicate_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_alu: 0,
            inst_update_lc: 0,
            inst_update_ec: 0,
            inst_update_rbb: 0,
            inst_update_predicate: 0,
            inst_load: 0,
            inst_store: 0,
            inst_mulu: 0,
            branch_loop_taken: 0,
            branch_loop_fallthrough: 0,
            branch_pip_kernel: 0,
            branch_pip_epilogue: 0,
            branch_pip_exhausted: 0,
            duplicate_writes: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"mix"`, `"branch"`, `"diagnostics"`. Pass an
/// empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "mix", "branch", "diagnostics"];

impl SimStats {
    fn instructions_retired(&self) -> u64 {
        self.inst_alu
            + self.inst_update_lc
            + self.inst_update_ec
            + self.inst_update_rbb
            + self.inst_update_predicate
            + self.inst_load
            + self.inst_store
            + self.inst_mulu
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Pass an empty slice to print all sections (same as [`SimStats::print`]).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let retired = self.instructions_retired();
        let instr = if retired == 0 { 1 } else { retired };

        if want("summary") {
            let ipc = retired as f64 / cyc as f64;
            println!("\n==========================================================");
            println!("VLIW-470 SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts_retired        {retired}");
            println!("sim_ipc                  {ipc:.4}");
            println!("----------------------------------------------------------");
        }
        if want("mix") {
            let pct = |n: u64| (n as f64 / instr as f64) * 100.0;
            println!("INSTRUCTION MIX");
            println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            println!(
                "  op.update_lc           {} ({:.2}%)",
                self.inst_update_lc,
                pct(self.inst_update_lc)
            );
            println!(
                "  op.update_ec           {} ({:.2}%)",
                self.inst_update_ec,
                pct(self.inst_update_ec)
            );
            println!(
                "  op.update_rbb          {} ({:.2}%)",
                self.inst_update_rbb,
                pct(self.inst_update_rbb)
            );
            println!(
                "  op.update_predicate    {} ({:.2}%)",
                self.inst_update_predicate,
                pct(self.inst_update_predicate)
            );
            println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
            println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
            println!("  op.mulu                {} ({:.2}%)", self.inst_mulu, pct(self.inst_mulu));
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            println!("BRANCH RESOLUTION");
            println!("  loop.taken             {}", self.branch_loop_taken);
            println!("  loop.fallthrough       {}", self.branch_loop_fallthrough);
            println!("  loop_pip.kernel        {}", self.branch_pip_kernel);
            println!("  loop_pip.epilogue      {}", self.branch_pip_epilogue);
            println!("  loop_pip.exhausted     {}", self.branch_pip_exhausted);
            println!("----------------------------------------------------------");
        }
        if want("diagnostics") {
            println!("DIAGNOSTICS");
            println!("  duplicate_writes       {}", self.duplicate_writes);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
