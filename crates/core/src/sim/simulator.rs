//! Simulator: owns the pipeline, the record source, and the run loop.

use crate::config::SimConfig;
use crate::pipeline::Pipeline;
use crate::pipeline::instruction::InstrRecord;
use crate::sim::trace::RecordSource;
use crate::stats::SimStats;

/// Top-level driver: machine state plus the trace it consumes.
///
/// Generic over the record source so the same driver runs from a trace file,
/// an in-memory program, or a mock.
pub struct Simulator<S> {
    /// Micro-architectural state.
    pub pipeline: Pipeline,
    /// Throughput counters.
    pub stats: SimStats,
    /// Retired records in program order.
    pub completed: Vec<InstrRecord>,
    source: S,
}

impl<S: RecordSource> Simulator<S> {
    /// Creates a simulator for the given machine configuration and source.
    pub fn new(config: &SimConfig, source: S) -> Self {
        Self {
            pipeline: Pipeline::new(config),
            stats: SimStats::default(),
            completed: Vec::new(),
            source,
        }
    }

    /// Advances the machine by one clock cycle.
    pub fn tick(&mut self) {
        self.pipeline
            .tick(&mut self.source, &mut self.stats, &mut self.completed);
        self.stats.cycles = self.pipeline.cycle;
        self.stats.instructions_fetched = self.pipeline.next_seq;
    }

    /// Whether the machine has drained every staged buffer.
    pub fn done(&self) -> bool {
        self.pipeline.drained()
    }

    /// Runs until the machine drains. Always executes at least one cycle, so
    /// an empty trace still accounts one cycle of simulated time.
    pub fn run(&mut self) {
        loop {
            self.tick();
            if self.done() {
                break;
            }
        }
    }
}
