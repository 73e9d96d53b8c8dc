//! Pipeline model: staged buffers, ROB, RMT, and the per-cycle sequence.
//!
//! This module bundles the machine state and orders the stage calls. It
//! provides:
//! 1. **State:** One value owning every buffer, the ROB, the RMT, and the
//!    cycle counter; stages receive mutable references to exactly the pieces
//!    they write.
//! 2. **Cycle sequence:** Stages run in reverse pipeline order (retire first,
//!    fetch last) so a value produced by one stage is never consumed by a
//!    downstream stage within the same cycle. That ordering is the only
//!    mechanism modeling the one-cycle latency between adjacent stages.
//! 3. **Termination:** The machine is drained when every staged buffer is
//!    empty; fetch refills the decode buffer in the same cycle whenever
//!    records remain, so an empty machine implies an exhausted trace.

pub mod backend;
pub mod frontend;
pub mod instruction;
pub mod rmt;
pub mod rob;

use std::collections::{HashMap, VecDeque};

use crate::config::SimConfig;
use crate::pipeline::instruction::InstrRecord;
use crate::pipeline::rmt::RegisterMap;
use crate::pipeline::rob::{Rob, RobTag};
use crate::sim::trace::RecordSource;
use crate::stats::SimStats;

/// The complete micro-architectural state of the simulated back end.
pub struct Pipeline {
    /// Reorder buffer.
    pub rob: Rob,
    /// Register mapping table.
    pub rmt: RegisterMap,
    /// Fetch -> Decode buffer (FIFO).
    pub decode_queue: VecDeque<InstrRecord>,
    /// Decode -> Rename buffer (FIFO).
    pub rename_queue: VecDeque<InstrRecord>,
    /// Rename -> Register-Read buffer, ordered by program order.
    pub regread_list: VecDeque<InstrRecord>,
    /// Register-Read -> Dispatch buffer, ordered by program order.
    pub dispatch_list: VecDeque<InstrRecord>,
    /// Issue queue, ordered by program order but scanned for ready entries.
    pub issue_queue: VecDeque<InstrRecord>,
    /// In-flight executions, each with an independent countdown.
    pub execute_list: Vec<InstrRecord>,
    /// Execute -> Writeback buffer (FIFO).
    pub writeback_queue: VecDeque<InstrRecord>,
    /// Written-back records awaiting in-order retirement, keyed by ROB tag.
    pub retire_map: HashMap<RobTag, InstrRecord>,
    /// Superscalar width: per-cycle fetch, issue, and retire limit.
    pub width: usize,
    /// Issue-queue capacity.
    pub iq_capacity: usize,
    /// Current cycle, incremented after each stage sequence.
    pub cycle: u64,
    /// Next program-order sequence number to assign at fetch.
    pub next_seq: u64,
    /// Stage-event logging to stderr.
    pub trace: bool,
}

impl Pipeline {
    /// Creates an empty pipeline from the machine configuration.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            rob: Rob::new(config.rob_size),
            rmt: RegisterMap::new(),
            decode_queue: VecDeque::with_capacity(config.width),
            rename_queue: VecDeque::with_capacity(config.width),
            regread_list: VecDeque::with_capacity(config.width),
            dispatch_list: VecDeque::with_capacity(config.width),
            issue_queue: VecDeque::with_capacity(config.iq_size),
            execute_list: Vec::new(),
            writeback_queue: VecDeque::new(),
            retire_map: HashMap::new(),
            width: config.width,
            iq_capacity: config.iq_size,
            cycle: 0,
            next_seq: 0,
            trace: config.trace_pipeline,
        }
    }

    /// Runs one cycle: all stages in reverse order, then the cycle counter.
    pub fn tick(
        &mut self,
        source: &mut dyn RecordSource,
        stats: &mut SimStats,
        completed: &mut Vec<InstrRecord>,
    ) {
        let cycle = self.cycle;

        backend::retire::retire_stage(
            &mut self.rob,
            &mut self.rmt,
            &mut self.retire_map,
            completed,
            self.width,
            cycle,
            stats,
            self.trace,
        );
        backend::writeback::writeback_stage(
            &mut self.writeback_queue,
            &mut self.rob,
            &mut self.retire_map,
            cycle,
        );
        backend::execute::execute_stage(
            &mut self.execute_list,
            &mut self.writeback_queue,
            &mut self.issue_queue,
            &mut self.dispatch_list,
            &mut self.regread_list,
            cycle,
            self.trace,
        );
        backend::issue::issue_stage(
            &mut self.issue_queue,
            &mut self.execute_list,
            self.width,
            self.trace,
        );
        backend::dispatch::dispatch_stage(
            &mut self.dispatch_list,
            &mut self.issue_queue,
            self.iq_capacity,
            cycle,
        );
        frontend::regread::regread_stage(
            &mut self.regread_list,
            &mut self.dispatch_list,
            &self.rob,
            cycle,
        );
        frontend::rename::rename_stage(
            &mut self.rename_queue,
            &mut self.regread_list,
            &mut self.rob,
            &mut self.rmt,
            cycle,
            self.trace,
        );
        frontend::decode::decode_stage(&mut self.decode_queue, &mut self.rename_queue, cycle);
        frontend::fetch::fetch_stage(
            source,
            &mut self.decode_queue,
            self.width,
            &mut self.next_seq,
            cycle,
            self.trace,
        );

        self.cycle += 1;
    }

    /// Whether every staged buffer is empty.
    ///
    /// The ROB and RMT drain naturally through retire and are not checked.
    pub fn drained(&self) -> bool {
        self.decode_queue.is_empty()
            && self.rename_queue.is_empty()
            && self.regread_list.is_empty()
            && self.dispatch_list.is_empty()
            && self.issue_queue.is_empty()
            && self.execute_list.is_empty()
            && self.writeback_queue.is_empty()
            && self.retire_map.is_empty()
    }
}
