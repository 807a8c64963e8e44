//! S1: an `addi` result is visible in the register file one cycle after it writes back.
//!
//! The trace snapshot at cycle *t* observes the pre-writeback state of cycle *t* (it is
//! captured before that cycle's writeback step runs), so a value that commits during
//! cycle *t*'s writeback only shows up starting at snapshot *t + 1*. `addi x1, x0, 7`
//! issued at cycle 0 commits during cycle 1's writeback, so `x1` reads 0 through
//! snapshot 1 and 7 from snapshot 2 onward.

use crate::common;

const PROGRAM: &str = r#"[
    ["addi x1, x0, 7", "nop", "nop", "nop", "nop"],
    ["nop", "nop", "nop", "nop", "nop"]
]"#;

#[test]
fn addi_result_visible_one_cycle_after_writeback() {
    let trace = common::run(PROGRAM);

    assert_eq!(trace.len(), 4, "2 bundles drain to a 4-cycle trace");
    assert_eq!(common::register(&trace[0], 1), 0);
    assert_eq!(common::register(&trace[1], 1), 0);
    assert_eq!(common::register(&trace[2], 1), 7);
    assert_eq!(common::register(&trace[3], 1), 7);
}
