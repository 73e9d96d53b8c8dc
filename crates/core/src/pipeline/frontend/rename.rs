//! Rename stage: ROB allocation and register renaming.
//!
//! This stage converts architectural operands into ROB-tag references. It
//! allocates a ROB slot per instruction and rewrites each source through the
//! RMT. Source registers are renamed BEFORE the destination mapping is
//! updated, so an instruction reading its own destination register gets the
//! previous producer's tag, not its own. The batch is all-or-nothing: either
//! the whole rename buffer advances or none of it does.

use std::collections::VecDeque;

use crate::pipeline::instruction::{InstrRecord, Source, SrcRef};
use crate::pipeline::rmt::RegisterMap;
use crate::pipeline::rob::Rob;

/// Executes the rename stage.
///
/// Guard: the register-read buffer must be empty and the ROB must have room
/// for the entire batch. Intra-batch dependencies resolve naturally because
/// renaming proceeds in program order, so mappings written by earlier
/// instructions in the batch are visible to later ones.
pub fn rename_stage(
    rename_queue: &mut VecDeque<InstrRecord>,
    regread_list: &mut VecDeque<InstrRecord>,
    rob: &mut Rob,
    rmt: &mut RegisterMap,
    cycle: u64,
    trace: bool,
) {
    if !regread_list.is_empty() || rob.free_slots() < rename_queue.len() {
        return;
    }

    while let Some(mut instr) = rename_queue.pop_front() {
        let tag = rob.allocate(instr.dest_arch);

        rename_source(&mut instr.src1, rmt);
        rename_source(&mut instr.src2, rmt);
        instr.src1.latched = false;
        instr.src2.latched = false;

        if let Some(dest) = instr.dest_arch {
            rmt.set_producer(dest, tag);
        }
        instr.dest_tag = Some(tag);

        instr.timing.regread = cycle + 1;
        if trace {
            eprintln!("RN  seq={} tag={}", instr.seq, tag.0);
        }
        regread_list.push_back(instr);
    }
}

/// Rewrites one source operand through the RMT.
fn rename_source(src: &mut Source, rmt: &RegisterMap) {
    src.renamed = match src.arch {
        None => SrcRef::Absent,
        Some(reg) => match rmt.get_producer(reg) {
            Some(tag) => SrcRef::Producer(tag),
            None => SrcRef::RegFile,
        },
    };
}
