//! Pipeline latch structures for inter-stage communication.
//!
//! Each functional unit's latch is expressed as a discriminated enum over its opcode
//! space rather than a bag of optional fields, so an "inert" decode (a `nop`, or a
//! predicate-false instruction) is a value of the same type as a live one, not a
//! collection of zeroed/`None` fields a caller has to remember to check together.

/// What an ALU latch does at writeback, already computed at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Commit `value` to physical general register `target`.
    Alu {
        /// Physical destination register index.
        target: usize,
        /// Already-computed result.
        value: u64,
    },
    /// Commit `value` to the Loop Counter.
    UpdateLc {
        /// New LC value.
        value: u64,
    },
    /// Commit `value` to the Epilogue Counter.
    UpdateEc {
        /// New EC value.
        value: u64,
    },
    /// Commit `value` to the Rotating-Register Base.
    UpdateRbb {
        /// New RBB value.
        value: u64,
    },
    /// Commit `value` to physical predicate register `target`.
    UpdatePredicate {
        /// Physical destination predicate index.
        target: usize,
        /// New predicate value.
        value: bool,
    },
}

/// The ALU0/ALU1 pipeline latch: a predicate gate plus the already-decoded operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluLatch {
    /// Whether the instruction that produced this latch was live this cycle.
    pub predicate: bool,
    /// What to commit at writeback, if `predicate` is true.
    pub op: AluOp,
}

impl AluLatch {
    /// The latch produced by decoding `nop`: never commits anything.
    #[must_use]
    pub fn inert() -> Self {
        Self {
            predicate: false,
            op: AluOp::Alu { target: 0, value: 0 },
        }
    }
}

impl Default for AluLatch {
    fn default() -> Self {
        Self::inert()
    }
}

/// What the zero-latency branch unit does this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchOp {
    /// Plain software-pipelined-unaware loop branch.
    Loop,
    /// Software-pipelined loop branch (kernel/epilogue with RBB and `p32` management).
    PipelinedLoop,
    /// No branch decoded this cycle (a `nop` in the branch slot).
    Inert,
}

/// The Branch pipeline latch. Has zero latency: decoded and consumed in the same cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchLatch {
    /// Whether the branch instruction that produced this latch was live this cycle.
    pub predicate: bool,
    /// Which branch transition to apply, if `predicate` is true.
    pub op: BranchOp,
    /// Bundle index to redirect the PC to, if taken.
    pub target_pc: u64,
}

impl BranchLatch {
    /// The latch produced by decoding `nop` in the branch slot.
    #[must_use]
    pub fn inert() -> Self {
        Self {
            predicate: false,
            op: BranchOp::Inert,
            target_pc: 0,
        }
    }
}

impl Default for BranchLatch {
    fn default() -> Self {
        Self::inert()
    }
}

/// What the memory unit does at writeback, already address-computed at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    /// Load the word at `address` into physical register `dest`.
    Load {
        /// Computed effective address.
        address: u64,
        /// Physical destination register index.
        dest: usize,
    },
    /// Store `data` to `address`.
    Store {
        /// Computed effective address.
        address: u64,
        /// Already-read source datum (see the crate-level note on `st`'s unusual
        /// source convention).
        data: u64,
    },
}

/// The Memory pipeline latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryLatch {
    /// Whether the instruction that produced this latch was live this cycle.
    pub predicate: bool,
    /// What to do at writeback, if `predicate` is true.
    pub op: MemoryOp,
}

impl MemoryLatch {
    /// The latch produced by decoding `nop` in the memory slot.
    #[must_use]
    pub fn inert() -> Self {
        Self {
            predicate: false,
            op: MemoryOp::Load {
                address: 0,
                dest: 0,
            },
        }
    }
}

impl Default for MemoryLatch {
    fn default() -> Self {
        Self::inert()
    }
}

/// One stage of the multiplier's 3-deep shift register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiplierStage {
    /// Whether the `mulu` that produced this stage was live when issued.
    pub predicate: bool,
    /// Physical destination register index.
    pub target: usize,
    /// Already-computed product, shifted along until it drains at writeback.
    pub result: u64,
}

impl MultiplierStage {
    /// The stage produced by decoding `nop` in the multiplier slot.
    #[must_use]
    pub fn inert() -> Self {
        Self {
            predicate: false,
            target: 0,
            result: 0,
        }
    }
}

impl Default for MultiplierStage {
    fn default() -> Self {
        Self::inert()
    }
}
