//! Out-of-order back-end simulator CLI.
//!
//! This binary wires the trace file to the pipeline model and prints the run
//! report. It performs:
//! 1. **Argument parsing:** Four positional machine parameters, validated as
//!    positive.
//! 2. **Simulation:** Runs the machine until every buffer drains.
//! 3. **Reporting:** Per-instruction timing lines followed by the summary
//!    block on stdout; optional per-stage event log on stderr.

use clap::Parser;
use std::process;

use oosim_core::config::SimConfig;
use oosim_core::report;
use oosim_core::sim::Simulator;
use oosim_core::sim::trace::TraceReader;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    about = "Cycle-accurate out-of-order superscalar back-end simulator",
    long_about = "Replays a decoded instruction trace through an out-of-order \
                  superscalar back end and reports per-instruction stage timing \
                  and overall throughput.\n\nExample:\n  sim 256 32 4 gcc_trace.txt"
)]
struct Cli {
    /// Reorder-buffer capacity.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    rob_size: u64,

    /// Issue-queue capacity.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    iq_size: u64,

    /// Superscalar width (instructions fetched/issued/retired per cycle).
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    width: u64,

    /// Path to the instruction trace.
    trace_file: String,

    /// Log per-stage pipeline events to stderr.
    #[arg(long)]
    trace_pipeline: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = SimConfig {
        rob_size: cli.rob_size as usize,
        iq_size: cli.iq_size as usize,
        width: cli.width as usize,
        trace_pipeline: cli.trace_pipeline,
    };
    if let Err(err) = config.validate() {
        eprintln!("{}", err);
        process::exit(1);
    }

    let source = match TraceReader::open(&cli.trace_file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let mut sim = Simulator::new(&config, source);
    sim.run();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = report::write_timing(&mut out, &sim.completed)
        .and_then(|_| report::write_summary(&mut out, &config, &cli.trace_file, &sim.stats));
    if let Err(err) = written {
        eprintln!("Error: failed to write report: {}", err);
        process::exit(1);
    }
}
