//! S4: `loop` branches back while `LC > 0`, decrementing `LC` each time it fires, and
//! falls through once `LC` reaches 0.
//!
//! `LC` is seeded to 2 by a `mov LC, 2` in a setup bundle rather than assumed as initial
//! state, so the trace carries that instruction's own one-cycle commit lag ahead of the
//! three loop passes. The expected per-cycle `PC`/`LC` sequence below was derived by
//! hand-tracing the engine's tick ordering (branch resolution reads state as of the end
//! of writeback, using the already-advanced `PC` only when the loop does not fire).

use crate::common;

const PROGRAM: &str = r#"[
    ["mov LC, 2", "nop", "nop", "nop", "nop"],
    ["nop", "nop", "nop", "nop", "nop"],
    ["nop", "nop", "nop", "nop", "nop"],
    ["nop", "nop", "nop", "nop", "loop 1"]
]"#;

#[test]
fn loop_rewinds_pc_while_lc_positive_then_falls_through() {
    let trace = common::run(PROGRAM);

    let expected_pc = [0, 1, 2, 3, 1, 2, 3, 1, 2, 3, 4, 4];
    let expected_lc = [0, 0, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0];

    assert_eq!(trace.len(), expected_pc.len());
    for (i, snapshot) in trace.iter().enumerate() {
        assert_eq!(common::pc(snapshot), expected_pc[i], "pc mismatch at cycle {i}");
        assert_eq!(common::lc(snapshot), expected_lc[i], "lc mismatch at cycle {i}");
    }

    let loop_entries = trace.iter().filter(|s| common::pc(s) == 1).count();
    assert_eq!(loop_entries, 3, "loop body is entered exactly three times");
}
