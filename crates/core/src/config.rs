//! Configuration system for the back-end simulator.
//!
//! This module defines the structures used to parameterize the simulated
//! machine. It provides:
//! 1. **Defaults:** Baseline machine constants (ROB capacity, issue-queue
//!    capacity, superscalar width).
//! 2. **Structure:** The `SimConfig` type consumed by the driver and the CLI.
//! 3. **Validation:** A check that all capacities are positive.
//!
//! Configuration is supplied via JSON from harness scripts or use
//! `SimConfig::default()`; the CLI overrides the three capacities from its
//! positional arguments.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulated machine.
mod defaults {
    /// Reorder-buffer capacity (in-flight instruction limit).
    pub const ROB_SIZE: usize = 64;

    /// Issue-queue capacity (dispatched instructions awaiting operands).
    pub const IQ_SIZE: usize = 16;

    /// Superscalar width: the per-cycle fetch, issue, and retire limit.
    pub const WIDTH: usize = 2;
}

/// Machine parameters for one simulation run.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use oosim_core::config::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.width, 2);
/// assert!(config.validate().is_ok());
/// ```
///
/// Deserializing from JSON (typical harness usage):
///
/// ```
/// use oosim_core::config::SimConfig;
///
/// let json = r#"{
///     "rob_size": 256,
///     "iq_size": 32,
///     "width": 4
/// }"#;
///
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.rob_size, 256);
/// assert_eq!(config.iq_size, 32);
/// assert!(!config.trace_pipeline);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Reorder-buffer capacity.
    #[serde(default = "SimConfig::default_rob_size")]
    pub rob_size: usize,

    /// Issue-queue capacity.
    #[serde(default = "SimConfig::default_iq_size")]
    pub iq_size: usize,

    /// Superscalar width (instructions fetched/issued/retired per cycle).
    #[serde(default = "SimConfig::default_width")]
    pub width: usize,

    /// Enable per-stage event logging to stderr.
    #[serde(default)]
    pub trace_pipeline: bool,
}

impl SimConfig {
    /// Returns the default reorder-buffer capacity.
    fn default_rob_size() -> usize {
        defaults::ROB_SIZE
    }

    /// Returns the default issue-queue capacity.
    fn default_iq_size() -> usize {
        defaults::IQ_SIZE
    }

    /// Returns the default superscalar width.
    fn default_width() -> usize {
        defaults::WIDTH
    }

    /// Checks that every capacity is positive.
    ///
    /// A zero-sized ROB or issue queue can never accept an instruction and a
    /// zero width can never fetch one, so all three are rejected up front.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.rob_size == 0 {
            return Err(SimError::InvalidConfig("rob_size must be positive".into()));
        }
        if self.iq_size == 0 {
            return Err(SimError::InvalidConfig("iq_size must be positive".into()));
        }
        if self.width == 0 {
            return Err(SimError::InvalidConfig("width must be positive".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rob_size: defaults::ROB_SIZE,
            iq_size: defaults::IQ_SIZE,
            width: defaults::WIDTH,
            trace_pipeline: false,
        }
    }
}
