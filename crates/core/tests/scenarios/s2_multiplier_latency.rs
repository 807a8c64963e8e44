//! S2: `mulu` carries a 3-cycle latency through its own pipeline stages, on top of the
//! one-cycle snapshot lag common to every functional unit (see `s1_add_latency`).
//!
//! `x1`/`x2` are seeded by `addi`s in the first bundle; `mulu x5, x1, x2` issues in the
//! second bundle once both operands have committed. Its product commits three cycles
//! later, during that cycle's writeback, so it is visible starting the following
//! snapshot.

use crate::common;

const PROGRAM: &str = r#"[
    ["addi x1, x0, 3", "addi x2, x0, 4", "nop", "nop", "nop"],
    ["nop", "nop", "mulu x5, x1, x2", "nop", "nop"],
    ["nop", "nop", "nop", "nop", "nop"],
    ["nop", "nop", "nop", "nop", "nop"],
    ["nop", "nop", "nop", "nop", "nop"]
]"#;

#[test]
fn mulu_product_commits_three_cycles_after_issue() {
    let trace = common::run(PROGRAM);

    assert_eq!(trace.len(), 7, "5 bundles drain to a 7-cycle trace");
    assert_eq!(common::register(&trace[4], 5), 0, "product not yet committed");
    assert_eq!(common::register(&trace[5], 5), 12, "3 * 4 committed");
    assert_eq!(common::register(&trace[6], 5), 12);
}
