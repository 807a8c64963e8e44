//! S6: reading an address with no initial value returns 0, not an error.
//!
//! `x1` is first poisoned with a sentinel value so the later `ld` is provably
//! responsible for the 0 it ends up holding, rather than `x1`'s own untouched default.

use crate::common;

const PROGRAM: &str = r#"[
    ["mov x1, 0xdead", "mov x0, 0x1000", "nop", "nop", "nop"],
    ["nop", "nop", "nop", "ld x1, 0(x0)", "nop"]
]"#;

#[test]
fn load_from_uninitialized_address_reads_zero() {
    let trace = common::run(PROGRAM);

    assert_eq!(trace.len(), 4, "2 bundles drain to a 4-cycle trace");
    assert_eq!(common::register(&trace[2], 1), 0xdead, "sentinel still in place");
    assert_eq!(common::register(&trace[3], 1), 0, "default-zero read committed");
}
