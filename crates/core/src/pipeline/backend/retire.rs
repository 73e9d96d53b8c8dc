//! Retire stage: in-order commit from the ROB head.
//!
//! Retires up to `width` instructions per cycle while the head slot is
//! ready, stopping early at the first incomplete one. The retiring
//! instruction's RMT mapping is removed only when it still points at the
//! retiring tag; a mapping overwritten by a younger writer stays.

use std::collections::HashMap;

use crate::pipeline::instruction::{FuType, InstrRecord};
use crate::pipeline::rmt::RegisterMap;
use crate::pipeline::rob::{Rob, RobTag};
use crate::stats::SimStats;

/// Executes the retire stage. Completed records emerge in sequence order.
pub fn retire_stage(
    rob: &mut Rob,
    rmt: &mut RegisterMap,
    retire_map: &mut HashMap<RobTag, InstrRecord>,
    completed: &mut Vec<InstrRecord>,
    width: usize,
    cycle: u64,
    stats: &mut SimStats,
    trace: bool,
) {
    for _ in 0..width {
        let Some(head) = rob.peek_head() else {
            break;
        };
        if !head.ready {
            break;
        }

        let tag = head.tag;
        let dest = head.dest;

        let mut instr = retire_map
            .remove(&tag)
            .expect("ready ROB head always has a written-back record");
        instr.timing.commit = cycle + 1;

        if let Some(reg) = dest {
            rmt.clear_if_match(reg, tag);
        }
        rob.retire_head();

        stats.instructions_retired += 1;
        match instr.fu {
            FuType::Alu => stats.inst_alu += 1,
            FuType::Mul => stats.inst_mul += 1,
            FuType::Div => stats.inst_div += 1,
        }

        if trace {
            eprintln!("RT  seq={} tag={}", instr.seq, tag.0);
        }
        completed.push(instr);
    }
}
