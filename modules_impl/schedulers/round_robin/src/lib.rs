//! # Round-Robin Scheduler Module
//!
//! Preemptive Round-Robin over a batch of processes known in advance.
//!
//! ## Features
//! - Quantum-bounded execution with FIFO requeueing
//! - Idle-time accounting and CPU utilization
//! - Per-tick or next-event clock stepping (identical results)
//! - Execution timeline and plain-text reports
//!
//! ## Usage
//!
//! ```
//! use rrsim_execution::process::ProcessSpec;
//!
//! let specs = [ProcessSpec::new(1, 0, 4, 0), ProcessSpec::new(2, 0, 4, 0)];
//! let sim = rrsim_round_robin::simulate(&specs, 2).unwrap();
//! assert_eq!(sim.system.avg_turnaround_time, 7.0);
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod config;
pub mod report;
mod scheduler;

pub use config::{ConfigError, RoundRobinConfig, Stepping};
pub use report::{render, ReportSections};
pub use scheduler::RoundRobinScheduler;

use rrsim_execution::process::{ProcessRegistry, ProcessSpec};
use rrsim_execution::scheduler::{BatchScheduler, Simulation};
use rrsim_execution::{ExecResult, Tick};

/// Simulate `specs` under Round-Robin with the given quantum
///
/// The input is validated first; no simulation runs on invalid input.
pub fn simulate(specs: &[ProcessSpec], quantum: Tick) -> ExecResult<Simulation> {
    simulate_with(specs, &RoundRobinConfig::with_quantum(quantum))
}

/// Simulate `specs` with a full configuration
pub fn simulate_with(specs: &[ProcessSpec], config: &RoundRobinConfig) -> ExecResult<Simulation> {
    config.validate()?;
    let mut registry = ProcessRegistry::new(specs)?;
    RoundRobinScheduler::new(config.clone()).run(&mut registry)
}
