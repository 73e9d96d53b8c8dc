//! Register-Read stage: capture source operand readiness.
//!
//! The whole register-read buffer moves into the dispatch buffer in bulk,
//! computing each source's readiness from the ROB on the way. A source whose
//! readiness was latched by an execute wake-up is left untouched: its
//! producer may have retired since, and recomputing from the ROB could
//! observe an unrelated instruction occupying the recycled slot.

use std::collections::VecDeque;

use crate::pipeline::instruction::{InstrRecord, Source, SrcRef};
use crate::pipeline::rob::Rob;

/// Executes the register-read stage. Guard: the dispatch buffer is empty.
pub fn regread_stage(
    regread_list: &mut VecDeque<InstrRecord>,
    dispatch_list: &mut VecDeque<InstrRecord>,
    rob: &Rob,
    cycle: u64,
) {
    if !dispatch_list.is_empty() {
        return;
    }

    while let Some(mut instr) = regread_list.pop_front() {
        resolve_source(&mut instr.src1, rob);
        resolve_source(&mut instr.src2, rob);
        instr.timing.dispatch = cycle + 1;
        dispatch_list.push_back(instr);
    }
}

/// Computes readiness for one source unless a wake-up already latched it.
///
/// An absent or architectural source is always ready. A renamed source reads
/// its producer's ROB ready bit; a producer that has left the ROB entirely
/// has retired, so the value is architectural and ready.
fn resolve_source(src: &mut Source, rob: &Rob) {
    if src.latched {
        return;
    }
    src.ready = match src.renamed {
        SrcRef::Absent | SrcRef::RegFile => true,
        SrcRef::Producer(tag) => match rob.get(tag) {
            Some(entry) => entry.ready,
            None => true,
        },
    };
}
