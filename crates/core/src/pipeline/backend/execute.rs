//! Execute stage: latency countdown and wake-up broadcast.
//!
//! Every in-flight execution advances one cycle; an instruction completes
//! when its duration reaches the functional-unit latency. On completion it
//! moves to the writeback buffer and broadcasts its destination tag to every
//! waiting instruction in the issue queue, the dispatch buffer, and the
//! register-read buffer. The broadcast must reach all three: a dependent that
//! has not yet passed register-read would otherwise read stale ROB state.
//! In the register-read buffer the matching source is additionally latched so
//! the upcoming register-read pass preserves the delivered readiness.

use std::collections::VecDeque;

use crate::pipeline::instruction::{InstrRecord, Source, SrcRef};
use crate::pipeline::rob::RobTag;

/// Executes the execute stage.
pub fn execute_stage(
    execute_list: &mut Vec<InstrRecord>,
    writeback_queue: &mut VecDeque<InstrRecord>,
    issue_queue: &mut VecDeque<InstrRecord>,
    dispatch_list: &mut VecDeque<InstrRecord>,
    regread_list: &mut VecDeque<InstrRecord>,
    cycle: u64,
    trace: bool,
) {
    let mut index = 0;
    while index < execute_list.len() {
        {
            let instr = &mut execute_list[index];
            if instr.execute_duration == 0 {
                instr.timing.execute = cycle;
            }
            instr.execute_duration += 1;
        }

        let instr = &execute_list[index];
        if instr.execute_duration < instr.fu.latency() {
            index += 1;
            continue;
        }

        let instr = execute_list.remove(index);
        let tag = instr
            .dest_tag
            .expect("executing instruction was renamed and holds a tag");

        if trace {
            eprintln!("EX  seq={} tag={} done", instr.seq, tag.0);
        }

        for waiter in issue_queue.iter_mut() {
            wake_source(&mut waiter.src1, tag, false);
            wake_source(&mut waiter.src2, tag, false);
        }
        for waiter in dispatch_list.iter_mut() {
            wake_source(&mut waiter.src1, tag, false);
            wake_source(&mut waiter.src2, tag, false);
        }
        for waiter in regread_list.iter_mut() {
            wake_source(&mut waiter.src1, tag, true);
            wake_source(&mut waiter.src2, tag, true);
        }

        writeback_queue.push_back(instr);
    }
}

/// Marks one source ready if it waits on the completing tag; `latch` records
/// that the readiness was delivered out of band.
fn wake_source(src: &mut Source, tag: RobTag, latch: bool) {
    if src.renamed == SrcRef::Producer(tag) {
        src.ready = true;
        if latch {
            src.latched = true;
        }
    }
}
