//! Fetch stage: pull records from the trace into the decode buffer.
//!
//! Fetch only runs while the decode buffer is empty (a non-empty buffer
//! models a front-end stall) and reads at most `width` records per cycle.
//! End-of-trace is silent: the stage simply stops producing.

use std::collections::VecDeque;

use crate::pipeline::instruction::InstrRecord;
use crate::sim::trace::RecordSource;

/// Executes the fetch stage.
///
/// Assigns sequence numbers in program order and stamps entry into fetch this
/// cycle and into decode the next.
pub fn fetch_stage(
    source: &mut dyn RecordSource,
    decode_queue: &mut VecDeque<InstrRecord>,
    width: usize,
    next_seq: &mut u64,
    cycle: u64,
    trace: bool,
) {
    if !decode_queue.is_empty() {
        return;
    }

    for _ in 0..width {
        let Some(record) = source.next_record() else {
            break;
        };

        let mut instr = InstrRecord::from_trace(record, *next_seq);
        *next_seq += 1;
        instr.timing.fetch = cycle;
        instr.timing.decode = cycle + 1;

        if trace {
            eprintln!("FE  seq={} pc={:#x}", instr.seq, instr.pc);
        }
        decode_queue.push_back(instr);
    }
}
