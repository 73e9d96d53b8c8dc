//! Decode stage: drain the decode buffer into the rename buffer.
//!
//! All-or-nothing on the downstream guard: if the rename buffer still holds
//! last cycle's batch the stage stalls, otherwise the whole decode buffer
//! moves, preserving program order.

use std::collections::VecDeque;

use crate::pipeline::instruction::InstrRecord;

/// Executes the decode stage.
pub fn decode_stage(
    decode_queue: &mut VecDeque<InstrRecord>,
    rename_queue: &mut VecDeque<InstrRecord>,
    cycle: u64,
) {
    if !rename_queue.is_empty() {
        return;
    }

    while let Some(mut instr) = decode_queue.pop_front() {
        instr.timing.rename = cycle + 1;
        rename_queue.push_back(instr);
    }
}
