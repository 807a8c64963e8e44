//! Global system constants.
//!
//! This module defines the fixed dimensions of the VLIW-470 architectural state that the
//! rest of the crate treats as given: register file widths, the rotating-window split,
//! the bundle shape, and the multiplier's pipeline depth.

/// Total number of general and predicate registers (static + rotating).
pub const NUM_REGISTERS: usize = 96;

/// Number of statically-indexed registers (`0..32`), unaffected by RBB.
pub const NUM_STATIC_REGISTERS: usize = 32;

/// Size of the rotating register window (architectural `32..96`).
pub const ROTATING_WINDOW_SIZE: usize = 64;

/// Number of slots in a bundle (ALU0, ALU1, Multiplier, Memory, Branch).
pub const BUNDLE_WIDTH: usize = 5;

/// Number of pipeline stages in the multiplier's shift register.
pub const MULTIPLIER_STAGES: usize = 3;

/// The architectural predicate register `loop.pip` manages automatically.
pub const PIPELINED_LOOP_PREDICATE: usize = 32;

/// Upper bound (exclusive) on a direct `mov RBB, imm` write.
pub const MAX_RBB_IMMEDIATE: u64 = 64;

/// Number of drain cycles run after PC first reaches or exceeds the bundle count.
pub const DRAIN_CYCLES: usize = 2;
