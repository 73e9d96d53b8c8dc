//! Out-of-order superscalar back-end simulator library.
//!
//! This crate implements a cycle-accurate model of an out-of-order processor
//! back end driven by an instruction trace. It provides:
//! 1. **Pipeline:** The nine-stage model (fetch through retire) with a reorder
//!    buffer, register mapping table, issue queue, and wake-up/select logic.
//! 2. **Trace:** The record-source seam and the whitespace-token trace reader.
//! 3. **Simulation:** The per-cycle driver and termination test.
//! 4. **Reporting:** Per-instruction timing lines and the run summary.
//! 5. **Configuration & statistics:** Machine parameters and throughput counters.

/// Common types shared across the crate (errors).
pub mod common;
/// Simulator configuration (defaults, validation, serde structure).
pub mod config;
/// Pipeline model (instruction records, ROB, RMT, stage logic, driver state).
pub mod pipeline;
/// Output emitters for timing lines and the run summary.
pub mod report;
/// Trace front-end and the per-cycle simulation driver.
pub mod sim;
/// Simulation statistics collection.
pub mod stats;

/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Top-level driver; owns the pipeline, the record source, and the statistics.
pub use crate::sim::simulator::Simulator;
/// Throughput counters collected over a run.
pub use crate::stats::SimStats;
