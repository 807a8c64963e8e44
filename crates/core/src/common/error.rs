//! Error taxonomy for the VLIW-470 simulator.
//!
//! This module defines the two fatal error classes the simulator can raise. It provides:
//! 1. **Structural errors:** malformed program/memory JSON that never reaches the engine.
//! 2. **Decode errors:** instruction text the engine cannot turn into a pipeline latch.
//!
//! Both are surfaced through `Result` rather than `panic!`/`assert!`, so embedding the
//! crate in something other than the CLI never aborts the host process.

use thiserror::Error;

/// Errors the simulator can raise while loading a program or executing a cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The program or memory-init JSON did not have the required shape.
    #[error("structural error: {0}")]
    Structural(String),

    /// An instruction's text could not be decoded into a latch.
    #[error("decode error: {0}")]
    Decode(String),
}

impl SimError {
    /// Builds a [`SimError::Structural`] from a formatted message.
    pub fn structural(msg: impl Into<String>) -> Self {
        Self::Structural(msg.into())
    }

    /// Builds a [`SimError::Decode`] from a formatted message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Convenience alias for results produced by this crate.
pub type SimResult<T> = Result<T, SimError>;
