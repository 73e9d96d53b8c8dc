//! Single-instruction minimum-latency paths.
//!
//! One instruction with no dependencies walks the pipeline at one stage per
//! cycle: fetched at 0, it enters retire at 8 and leaves at 9. Only the
//! execute stage stretches with the functional-unit latency.

use crate::common::harness::{TestContext, chain};

#[test]
fn single_cycle_op_minimum_latency() {
    let sim = TestContext::new(8, 8, 1).with_instr(0x0, 0, 1, 2, 3).run();

    assert_eq!(sim.completed.len(), 1);
    assert_eq!(chain(&sim.completed[0]), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(sim.stats.cycles, 9);
    assert_eq!(sim.stats.instructions_retired, 1);
    assert_eq!(sim.stats.inst_alu, 1);
}

#[test]
fn two_cycle_op_stretches_execute() {
    let sim = TestContext::new(8, 8, 1).with_instr(0x0, 1, 1, -1, -1).run();

    assert_eq!(chain(&sim.completed[0]), [0, 1, 2, 3, 4, 5, 6, 8, 9, 10]);
    assert_eq!(sim.stats.cycles, 10);
    assert_eq!(sim.stats.inst_mul, 1);
}

#[test]
fn five_cycle_op_stretches_execute() {
    let sim = TestContext::new(8, 8, 1).with_instr(0x0, 2, 1, -1, -1).run();

    let timing = &sim.completed[0].timing;
    assert_eq!(timing.writeback - timing.execute, 5);
    assert_eq!(chain(&sim.completed[0]), [0, 1, 2, 3, 4, 5, 6, 11, 12, 13]);
    assert_eq!(sim.stats.cycles, 13);
    assert_eq!(sim.stats.inst_div, 1);
}

#[test]
fn instruction_without_destination_retires() {
    let sim = TestContext::new(8, 8, 1).with_instr(0x0, 0, -1, 4, 5).run();

    assert_eq!(sim.completed.len(), 1);
    assert_eq!(sim.completed[0].dest_arch, None);
    assert_eq!(chain(&sim.completed[0]), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}
