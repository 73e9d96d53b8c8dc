//! Run report emitters.
//!
//! This module renders the two fixed-format output sections. It provides:
//! 1. **Timing lines:** One line per retired instruction in program order,
//!    each stage as `{entry_cycle, duration}` with the original architectural
//!    operand indices.
//! 2. **Summary:** The echoed command, machine configuration, retired count,
//!    cycle count, and IPC to two decimals.
//!
//! The layout is consumed by downstream grading and diffing tools, so every
//! byte matters; both emitters write to any [`io::Write`] for testability.

use std::io;
use std::io::Write;

use crate::config::SimConfig;
use crate::pipeline::instruction::InstrRecord;
use crate::stats::SimStats;

/// Renders an optional register index the way the trace spells it.
fn reg(index: Option<usize>) -> i64 {
    index.map_or(-1, |value| value as i64)
}

/// Writes one timing line per retired instruction.
pub fn write_timing<W: Write>(out: &mut W, completed: &[InstrRecord]) -> io::Result<()> {
    for instr in completed {
        let t = &instr.timing;
        writeln!(
            out,
            "{} fu{{{}}} src{{{},{}}} dst{{{}}} \
             FE{{{},{}}} DE{{{},{}}} RN{{{},{}}} RR{{{},{}}} DI{{{},{}}} \
             IS{{{},{}}} EX{{{},{}}} WB{{{},{}}} RT{{{},{}}}",
            instr.seq,
            instr.fu.code(),
            reg(instr.src1.arch),
            reg(instr.src2.arch),
            reg(instr.dest_arch),
            t.fetch,
            t.decode - t.fetch,
            t.decode,
            t.rename - t.decode,
            t.rename,
            t.regread - t.rename,
            t.regread,
            t.dispatch - t.regread,
            t.dispatch,
            t.issue - t.dispatch,
            t.issue,
            t.execute - t.issue,
            t.execute,
            t.writeback - t.execute,
            t.writeback,
            t.retire - t.writeback,
            t.retire,
            t.commit - t.retire,
        )?;
    }
    Ok(())
}

/// Writes the run summary block.
pub fn write_summary<W: Write>(
    out: &mut W,
    config: &SimConfig,
    trace_path: &str,
    stats: &SimStats,
) -> io::Result<()> {
    writeln!(out, "# === Simulator Command =========")?;
    writeln!(
        out,
        "# ./sim {} {} {} {}",
        config.rob_size, config.iq_size, config.width, trace_path
    )?;
    writeln!(out, "# === Processor Configuration ===")?;
    writeln!(out, "# ROB_SIZE = {}", config.rob_size)?;
    writeln!(out, "# IQ_SIZE  = {}", config.iq_size)?;
    writeln!(out, "# WIDTH    = {}", config.width)?;
    writeln!(out, "# === Simulation Results ========")?;
    writeln!(
        out,
        "# Dynamic Instruction Count    = {}",
        stats.instructions_retired
    )?;
    writeln!(out, "# Cycles                       = {}", stats.cycles)?;
    writeln!(
        out,
        "# Instructions Per Cycle (IPC) = {:.2}",
        stats.ipc()
    )?;
    Ok(())
}
