//! Renaming behavior observable through timing: mapping supersedes, reads of
//! an instruction's own destination, and table drain at the end of a run.

use crate::common::harness::{TestContext, chain};

/// Two back-to-back writers of the same register: a reader renamed after the
/// second writer depends on the second, so it need not wait out the first
/// writer's long latency.
#[test]
fn superseded_mapping_tracks_youngest_writer() {
    let sim = TestContext::new(8, 8, 1)
        .with_instr(0x0, 2, 1, -1, -1)
        .with_instr(0x4, 0, 1, -1, -1)
        .with_instr(0x8, 0, 2, 1, -1)
        .run();

    assert_eq!(sim.stats.instructions_retired, 3);

    let slow_writer = &sim.completed[0];
    let reader = &sim.completed[2];

    // The reader issued off the fast second writer, well before the divide
    // even finished executing.
    assert!(reader.timing.execute < slow_writer.timing.writeback);
    assert_eq!(chain(slow_writer), [0, 1, 2, 3, 4, 5, 6, 11, 12, 13]);
    assert_eq!(chain(&sim.completed[1]), [1, 2, 3, 4, 5, 6, 7, 8, 9, 14]);
    assert_eq!(chain(reader), [2, 3, 4, 5, 6, 7, 8, 9, 10, 15]);
}

/// An instruction reading the register it also writes is renamed against the
/// previous producer, not against its own fresh tag.
#[test]
fn self_reference_reads_previous_producer() {
    let sim = TestContext::new(8, 8, 1)
        .with_instr(0x0, 2, 1, -1, -1)
        .with_instr(0x4, 0, 1, 1, -1)
        .run();

    assert_eq!(sim.stats.instructions_retired, 2);

    // The reader waits for the divide: woken at cycle 10 when it completes.
    let producer = &sim.completed[0];
    let reader = &sim.completed[1];
    assert_eq!(chain(producer), [0, 1, 2, 3, 4, 5, 6, 11, 12, 13]);
    assert_eq!(chain(reader), [1, 2, 3, 4, 5, 6, 11, 12, 13, 14]);
    assert!(reader.timing.execute > producer.timing.execute + 4);
}

/// After a run drains, every mapping has been cleared by retirement and the
/// ROB is empty.
#[test]
fn tables_drain_with_the_machine() {
    let sim = TestContext::new(8, 8, 2)
        .with_instr(0x0, 2, 1, -1, -1)
        .with_instr(0x4, 0, 1, -1, -1)
        .with_instr(0x8, 1, 2, 1, -1)
        .with_instr(0xc, 0, 3, 2, 1)
        .run();

    assert_eq!(sim.stats.instructions_retired, 4);
    assert!(sim.pipeline.rmt.is_empty());
    assert!(sim.pipeline.rob.is_empty());
    assert!(sim.done());
}
