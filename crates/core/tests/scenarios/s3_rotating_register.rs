//! S3: rotating registers alias through the physical file once the rotating base moves.
//!
//! `mov x32, 100` writes architectural `x32` while `RBB = 0`, renaming to physical slot
//! 32. Once `RBB` becomes 1, architectural `x33` renames to the same physical slot
//! (`rename(33, 1) == 32 == rename(32, 0)`), so reading `x33` observes the value written
//! through `x32`.

use crate::common;

const PROGRAM: &str = r#"[
    ["mov x32, 100", "nop", "nop", "nop", "nop"],
    ["mov RBB, 1", "nop", "nop", "nop", "nop"],
    ["mov x1, x33", "nop", "nop", "nop", "nop"]
]"#;

#[test]
fn rotated_register_aliases_prior_physical_slot() {
    let trace = common::run(PROGRAM);

    assert_eq!(trace.len(), 5, "3 bundles drain to a 5-cycle trace");
    assert_eq!(common::register(&trace[3], 1), 0, "copy not yet committed");
    assert_eq!(common::register(&trace[4], 1), 100, "x33 aliased x32's slot after RBB += 1");
}
