//! Full-run report formatting against golden output.

use crate::common::harness::TestContext;
use oosim_core::config::SimConfig;
use oosim_core::report;
use oosim_core::sim::Simulator;
use oosim_core::sim::trace::TraceReader;
use std::io::Write;

#[test]
fn single_instruction_report_is_golden() {
    let sim = TestContext::new(8, 8, 1).with_instr(0x0, 0, 1, 2, 3).run();

    let config = SimConfig {
        rob_size: 8,
        iq_size: 8,
        width: 1,
        trace_pipeline: false,
    };

    let mut out = Vec::new();
    report::write_timing(&mut out, &sim.completed).unwrap();
    report::write_summary(&mut out, &config, "trace.txt", &sim.stats).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 fu{0} src{2,3} dst{1} FE{0,1} DE{1,1} RN{2,1} RR{3,1} DI{4,1} \
         IS{5,1} EX{6,1} WB{7,1} RT{8,1}\n\
         # === Simulator Command =========\n\
         # ./sim 8 8 1 trace.txt\n\
         # === Processor Configuration ===\n\
         # ROB_SIZE = 8\n\
         # IQ_SIZE  = 8\n\
         # WIDTH    = 1\n\
         # === Simulation Results ========\n\
         # Dynamic Instruction Count    = 1\n\
         # Cycles                       = 9\n\
         # Instructions Per Cycle (IPC) = 0.11\n"
    );
}

#[test]
fn trace_file_run_matches_golden_timing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 1 1 -1 -1").unwrap();
    writeln!(file, "4 0 2 1 -1").unwrap();

    let config = SimConfig {
        rob_size: 8,
        iq_size: 8,
        width: 1,
        trace_pipeline: false,
    };
    let source = TraceReader::open(file.path().to_str().unwrap()).unwrap();
    let mut sim = Simulator::new(&config, source);
    sim.run();

    let mut out = Vec::new();
    report::write_timing(&mut out, &sim.completed).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 fu{1} src{-1,-1} dst{1} FE{0,1} DE{1,1} RN{2,1} RR{3,1} DI{4,1} \
         IS{5,1} EX{6,2} WB{8,1} RT{9,1}\n\
         1 fu{0} src{1,-1} dst{2} FE{1,1} DE{2,1} RN{3,1} RR{4,1} DI{5,1} \
         IS{6,2} EX{8,1} WB{9,1} RT{10,1}\n"
    );

    let mut summary = Vec::new();
    report::write_summary(&mut summary, &config, "gcc_trace.txt", &sim.stats).unwrap();
    let text = String::from_utf8(summary).unwrap();
    assert!(text.contains("# Dynamic Instruction Count    = 2\n"));
    assert!(text.contains("# Cycles                       = 11\n"));
    assert!(text.contains("# Instructions Per Cycle (IPC) = 0.18\n"));
}
