//! Instruction records carried through the pipeline.
//!
//! This module defines the unit of work flowing between stages. It provides:
//! 1. **Functional-unit classes:** The trace's op codes 0/1/2 with their
//!    execute latencies of 1, 2, and 5 cycles.
//! 2. **Source operand state:** The renamed reference, current readiness, and
//!    the latched flag set by out-of-band wake-ups.
//! 3. **Stage timing:** The entry cycle of every stage an instruction visits.

use crate::pipeline::rob::RobTag;
use crate::sim::trace::TraceRecord;

/// Functional-unit class selected by the trace's op field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FuType {
    /// Single-cycle operations (op code 0).
    Alu,
    /// Two-cycle operations (op code 1).
    Mul,
    /// Five-cycle operations (op code 2).
    Div,
}

impl FuType {
    /// Decodes a trace op code. Returns `None` for codes outside 0..=2.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(FuType::Alu),
            1 => Some(FuType::Mul),
            2 => Some(FuType::Div),
            _ => None,
        }
    }

    /// The raw op code, preserved for diagnostic output.
    #[inline]
    pub fn code(self) -> u32 {
        match self {
            FuType::Alu => 0,
            FuType::Mul => 1,
            FuType::Div => 2,
        }
    }

    /// Execute latency in cycles.
    #[inline]
    pub fn latency(self) -> u64 {
        match self {
            FuType::Alu => 1,
            FuType::Mul => 2,
            FuType::Div => 5,
        }
    }
}

/// Renamed reference of one source operand.
///
/// Replaces the usual negative-integer encoding: `Absent` for a missing
/// operand, `RegFile` for a value that lives in the architectural register
/// file, `Producer` for a value still being computed in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SrcRef {
    /// The instruction has no such source operand.
    #[default]
    Absent,
    /// No in-flight producer at rename time; the value is architectural and
    /// always ready.
    RegFile,
    /// The in-flight instruction holding this ROB tag produces the value.
    Producer(RobTag),
}

/// One source operand: architectural index, renamed reference, readiness.
#[derive(Clone, Copy, Debug, Default)]
pub struct Source {
    /// Original architectural register index, kept for diagnostic output.
    pub arch: Option<usize>,
    /// Renamed reference, assigned at rename.
    pub renamed: SrcRef,
    /// Whether the operand value is available.
    pub ready: bool,
    /// Readiness was captured by an execute wake-up while the instruction was
    /// still in register-read; the register-read pass must not recompute it.
    pub latched: bool,
}

/// Entry cycle of each stage an instruction passes through.
///
/// A stage's duration is the next stage's entry cycle minus its own; `commit`
/// is the cycle the instruction leaves retire, closing the final interval.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageTiming {
    pub fetch: u64,
    pub decode: u64,
    pub rename: u64,
    pub regread: u64,
    pub dispatch: u64,
    pub issue: u64,
    pub execute: u64,
    pub writeback: u64,
    pub retire: u64,
    pub commit: u64,
}

/// An instruction in flight: operands, renamed state, and timing.
#[derive(Clone, Debug)]
pub struct InstrRecord {
    /// Program-order sequence number, assigned at fetch.
    pub seq: u64,
    /// Source address from the trace, carried for diagnostics.
    pub pc: u64,
    /// Functional-unit class.
    pub fu: FuType,
    /// Architectural destination register, if any.
    pub dest_arch: Option<usize>,
    /// ROB tag allocated for this instruction at rename.
    pub dest_tag: Option<RobTag>,
    /// First source operand.
    pub src1: Source,
    /// Second source operand.
    pub src2: Source,
    /// Per-stage entry cycles.
    pub timing: StageTiming,
    /// Cycles spent executing so far.
    pub execute_duration: u64,
}

impl InstrRecord {
    /// Builds a fresh record from a trace record and its sequence number.
    pub fn from_trace(record: TraceRecord, seq: u64) -> Self {
        Self {
            seq,
            pc: record.pc,
            fu: record.fu,
            dest_arch: record.dest,
            dest_tag: None,
            src1: Source {
                arch: record.src1,
                ..Default::default()
            },
            src2: Source {
                arch: record.src2,
                ..Default::default()
            },
            timing: StageTiming::default(),
            execute_duration: 0,
        }
    }
}
