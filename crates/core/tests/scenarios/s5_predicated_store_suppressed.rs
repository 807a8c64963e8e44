//! S5: a store gated by a false predicate never reaches memory.
//!
//! Predicate registers default to `false`, so `(p5) st x1, 0(x2)` is suppressed at
//! decode without needing to set `p5` explicitly: `parse_line` evaluates the gate before
//! a memory-unit decode ever runs.

use crate::common;

const PROGRAM: &str = r#"[
    ["nop", "nop", "nop", "(p5) st x1, 0(x2)", "nop"]
]"#;

#[test]
fn false_predicate_suppresses_store() {
    let trace = common::run(PROGRAM);

    assert_eq!(trace.len(), 3, "1 bundle drains to a 3-cycle trace");
    for snapshot in &trace {
        let memory_data = common::memory_data(snapshot);
        let entries = memory_data.as_object().expect("MemoryData is a JSON object");
        assert!(entries.is_empty(), "gated store must never write memory");
    }
}
