//! # Scheduler Traits
//!
//! Defines the traits that scheduler implementations must implement.

use super::Simulation;
use crate::process::ProcessRegistry;
use crate::ExecResult;

/// The batch scheduler trait
///
/// A batch scheduler takes exclusive ownership of a registry for one run,
/// drives every process to completion, and reports the resulting metrics.
pub trait BatchScheduler {
    /// Get the scheduler name
    fn name(&self) -> &'static str;

    /// Run every process in `registry` to completion
    ///
    /// Runtime state is reset first, so repeated runs over the same
    /// registry produce identical results.
    fn run(&self, registry: &mut ProcessRegistry) -> ExecResult<Simulation>;
}

/// Run queue trait
pub trait RunQueue {
    /// Add a process to the tail
    fn enqueue(&mut self, index: usize);

    /// Remove and return the next process
    fn dequeue(&mut self) -> Option<usize>;

    /// Check if the queue is empty
    fn is_empty(&self) -> bool;

    /// Get the number of processes in the queue
    fn len(&self) -> usize;
}
