//! Randomized property checks complementing `rename`'s own unit tests
//! (`crates/core/src/rename.rs`) with an integration-level proptest run, per the
//! documented bijection invariant: for a fixed `RBB` in `[0, 64)`, `rename(_, RBB)` is a
//! bijection over `[0, 96)`.

use std::collections::HashSet;

use proptest::prelude::*;
use vliw470_core::rename::rename;

proptest! {
    #[test]
    fn rename_is_injective_over_full_register_space(rbb in 0u64..64) {
        let mut seen = HashSet::new();
        for arch in 0..96usize {
            let physical = rename(arch, rbb);
            prop_assert!(physical < 96, "rename({arch}, {rbb}) = {physical} out of range");
            prop_assert!(
                seen.insert(physical),
                "rename({arch}, {rbb}) = {physical} collided with an earlier architectural index"
            );
        }
    }

    #[test]
    fn static_registers_are_unaffected_by_rbb(rbb in 0u64..64, arch in 0usize..32) {
        prop_assert_eq!(rename(arch, rbb), arch);
    }

    #[test]
    fn rotating_registers_stay_in_window(rbb in 0u64..64, arch in 32usize..96) {
        let physical = rename(arch, rbb);
        prop_assert!((32..96).contains(&physical));
    }
}
