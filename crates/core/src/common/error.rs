//! Simulator error definitions.
//!
//! This module defines the error type surfaced by the library. It provides:
//! 1. **Fatal setup failures:** An unopenable trace file or an invalid
//!    machine configuration.
//! 2. **Error trait integration:** `Display` and `std::error::Error` impls so
//!    callers can report failures through standard channels.
//!
//! Malformed trace records are not errors: the trace front-end treats the
//! first unparsable token as end-of-trace.

use std::fmt;
use std::io;

/// Errors raised while setting up a simulation.
#[derive(Debug)]
pub enum SimError {
    /// The trace file could not be opened. Carries the path and the
    /// underlying I/O error.
    TraceOpen(String, io::Error),

    /// A machine parameter is out of range (zero-sized ROB, issue queue, or
    /// width). Carries a description of the offending parameter.
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::TraceOpen(path, err) => {
                write!(f, "Error: Unable to open file {} ({})", path, err)
            }
            SimError::InvalidConfig(what) => write!(f, "Error: invalid configuration: {}", what),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::TraceOpen(_, err) => Some(err),
            SimError::InvalidConfig(_) => None,
        }
    }
}
