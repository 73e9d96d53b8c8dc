//! Simulation statistics collection.
//!
//! This module tracks throughput metrics for a run. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instruction count, and the
//!    derived instructions-per-cycle figure.
//! 2. **Instruction mix:** Retired counts per functional-unit class.
//!
//! Printing is deliberately not here: the run report has a fixed external
//! format and lives in [`crate::report`].

/// Throughput counters collected over a simulation run.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Total simulated cycles, including the final drain cycle.
    pub cycles: u64,
    /// Number of instructions read from the trace.
    pub instructions_fetched: u64,
    /// Number of instructions retired in program order.
    pub instructions_retired: u64,

    /// Retired single-cycle (ALU-class) instructions.
    pub inst_alu: u64,
    /// Retired two-cycle (multiply-class) instructions.
    pub inst_mul: u64,
    /// Retired five-cycle (divide-class) instructions.
    pub inst_div: u64,
}

impl SimStats {
    /// Instructions per cycle over the whole run.
    ///
    /// Guarded against a zero cycle count so it is safe to call before the
    /// first cycle completes.
    pub fn ipc(&self) -> f64 {
        let cycles = if self.cycles == 0 { 1 } else { self.cycles };
        self.instructions_retired as f64 / cycles as f64
    }
}
