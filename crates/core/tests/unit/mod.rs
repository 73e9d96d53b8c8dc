//! Scenario tests for the pipeline model.



/// Register renaming behavior observable through timing.
pub mod renaming;

/// Full-run report formatting against golden output.
pub mod report_output;

/// Single-instruction minimum-latency paths per functional-unit class.
pub mod single_instruction;

/// Multi-issue behavior at width greater than one.
pub mod superscalar;
