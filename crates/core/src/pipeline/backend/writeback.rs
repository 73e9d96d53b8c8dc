//! Writeback stage: mark ROB slots ready for retirement.
//!
//! Drains the writeback buffer, setting each instruction's ROB ready bit and
//! parking the fully-timed record in the retire map so the retire stage can
//! emit it in program order.

use std::collections::{HashMap, VecDeque};

use crate::pipeline::instruction::InstrRecord;
use crate::pipeline::rob::{Rob, RobTag};

/// Executes the writeback stage.
pub fn writeback_stage(
    writeback_queue: &mut VecDeque<InstrRecord>,
    rob: &mut Rob,
    retire_map: &mut HashMap<RobTag, InstrRecord>,
    cycle: u64,
) {
    while let Some(mut instr) = writeback_queue.pop_front() {
        instr.timing.writeback = cycle;
        instr.timing.retire = cycle + 1;

        let tag = instr
            .dest_tag
            .expect("written-back instruction was renamed and holds a tag");
        rob.set_ready(tag);
        retire_map.insert(tag, instr);
    }
}
