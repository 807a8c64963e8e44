//! VLIW-470 cycle-accurate simulator library.
//!
//! This crate implements a 5-slot VLIW research processor with software-pipelining
//! support:
//! 1. **State:** PC/LC/EC/RBB and the 96-entry physical register/predicate files
//!    ([`state`], [`common::reg`]), with architectural indices `32..96` renamed against
//!    a rotating base ([`rename`]).
//! 2. **Decode:** one decoder per functional unit ([`decode`]), each computing its result
//!    combinationally at decode time against the current register file.
//! 3. **Latches:** the sole channel between decode and writeback, modeled as tagged
//!    enums rather than a bag of optional fields ([`latches`]).
//! 4. **Engine:** [`engine::Cpu`] ties state, memory, and latches together into the
//!    cycle-accurate `tick` loop and its snapshot trace ([`trace`]).
//! 5. **I/O:** program and memory-init JSON loading ([`program`]), statistics collection
//!    ([`stats`]).

/// Common types shared across the crate: error taxonomy, sizing constants, register
/// file storage.
pub mod common;
/// Instruction decoding, one submodule per functional unit.
pub mod decode;
/// The cycle-accurate engine and its `tick` loop.
pub mod engine;
/// Tagged pipeline latch types, the sole channel between decode and writeback.
pub mod latches;
/// Sparse 64-bit data memory.
pub mod memory;
/// Program and memory-initialization JSON loading.
pub mod program;
/// Register renaming against the rotating-register base.
pub mod rename;
/// Visible architectural state (PC/LC/EC/RBB, register and predicate files).
pub mod state;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Cycle-accurate trace snapshots and their wire (JSON) representation.
pub mod trace;

/// The VLIW-470 engine; construct with [`engine::Cpu::new`].
pub use crate::engine::Cpu;
/// The crate's error type and result alias.
pub use crate::common::error::{SimError, SimResult};
/// Visible architectural state.
pub use crate::state::ArchitecturalState;
