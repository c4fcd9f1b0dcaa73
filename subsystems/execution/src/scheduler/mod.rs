//! # Scheduler Framework
//!
//! This module defines the scheduler FRAMEWORK, not a specific policy.
//! Policies are provided as modules implementing [`BatchScheduler`].

pub mod metrics;
pub mod queue;
pub mod timeline;
pub mod traits;

pub use metrics::{ProcessMetrics, RunCounters, SystemMetrics};
pub use queue::FifoQueue;
pub use timeline::{Slice, SliceKind, Timeline};
pub use traits::*;

use crate::{ProcessId, Tick};
use alloc::vec::Vec;

/// A process finishing, in the order completions happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Finished process
    pub id: ProcessId,
    /// Tick at which it finished
    pub at: Tick,
}

/// Outcome of one scheduler run
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Per-process metrics, sorted by ID
    pub processes: Vec<ProcessMetrics>,
    /// System-wide metrics
    pub system: SystemMetrics,
    /// Completions in the order they happened
    pub completions: Vec<Completion>,
    /// CPU occupancy over time
    pub timeline: Timeline,
}

impl Simulation {
    /// Assemble a simulation outcome
    pub fn new(
        mut processes: Vec<ProcessMetrics>,
        system: SystemMetrics,
        completions: Vec<Completion>,
        timeline: Timeline,
    ) -> Self {
        processes.sort_unstable_by_key(|m| m.id);
        Self {
            processes,
            system,
            completions,
            timeline,
        }
    }

    /// Get the metrics of one process
    pub fn metrics_for(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.processes
            .binary_search_by_key(&id, |m| m.id)
            .ok()
            .map(|i| &self.processes[i])
    }

    /// Completions in the order they happened
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }
}
