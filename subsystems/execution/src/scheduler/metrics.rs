//! # Scheduler Metrics
//!
//! Per-process timing metrics and the system-wide aggregates derived from
//! them once every process has finished.

use crate::process::Process;
use crate::{ProcessId, Tick};

/// Metrics of one finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    /// Process ID
    pub id: ProcessId,
    /// Arrival tick
    pub arrival: Tick,
    /// Total burst
    pub burst: Tick,
    /// Priority as supplied
    pub priority: i32,
    /// Tick of the first dispatch
    pub first_dispatch: Tick,
    /// Tick of completion
    pub completion_time: Tick,
    /// First dispatch minus arrival
    pub response_time: Tick,
    /// Completion minus arrival
    pub turnaround_time: Tick,
    /// Turnaround minus burst
    pub waiting_time: Tick,
}

impl ProcessMetrics {
    /// Capture the metrics of a finished process
    ///
    /// Returns `None` until the process has been dispatched and completed.
    pub fn from_process(process: &Process) -> Option<Self> {
        let first_dispatch = process.first_dispatch()?;
        let completion_time = process.completion_time()?;
        let turnaround_time = completion_time - process.arrival();

        Some(Self {
            id: process.id(),
            arrival: process.arrival(),
            burst: process.burst(),
            priority: process.priority(),
            first_dispatch,
            completion_time,
            response_time: first_dispatch - process.arrival(),
            turnaround_time,
            waiting_time: turnaround_time - process.burst(),
        })
    }
}

/// Counters kept while a simulation runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Total dispatches (context switches)
    dispatches: u64,
    /// Total preemptions
    preemptions: u64,
    /// Ticks with a process on the CPU
    busy_ticks: Tick,
    /// Ticks with nothing to run
    idle_ticks: Tick,
}

impl RunCounters {
    /// Create zeroed counters
    pub const fn new() -> Self {
        Self {
            dispatches: 0,
            preemptions: 0,
            busy_ticks: 0,
            idle_ticks: 0,
        }
    }

    /// Record a dispatch
    pub fn record_dispatch(&mut self) {
        self.dispatches = self.dispatches.saturating_add(1);
    }

    /// Record a preemption
    pub fn record_preemption(&mut self) {
        self.preemptions = self.preemptions.saturating_add(1);
    }

    /// Record ticks spent running a process
    pub fn record_run_time(&mut self, ticks: Tick) {
        self.busy_ticks = self.busy_ticks.saturating_add(ticks);
    }

    /// Record ticks the CPU spent idle
    pub fn record_idle_time(&mut self, ticks: Tick) {
        self.idle_ticks = self.idle_ticks.saturating_add(ticks);
    }

    /// Get total dispatches
    pub fn dispatches(&self) -> u64 {
        self.dispatches
    }

    /// Get total preemptions
    pub fn preemptions(&self) -> u64 {
        self.preemptions
    }

    /// Get busy ticks
    pub fn busy_ticks(&self) -> Tick {
        self.busy_ticks
    }

    /// Get idle ticks
    pub fn idle_ticks(&self) -> Tick {
        self.idle_ticks
    }
}

/// System-wide metrics of a finished simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemMetrics {
    /// Mean turnaround time
    pub avg_turnaround_time: f64,
    /// Mean waiting time
    pub avg_waiting_time: f64,
    /// Mean response time
    pub avg_response_time: f64,
    /// Busy share of elapsed time, in percent
    pub cpu_utilization: f64,
    /// Finished processes per tick
    pub throughput: f64,
    /// Final clock value
    pub total_ticks: Tick,
    /// Ticks with nothing to run
    pub idle_ticks: Tick,
    /// Ticks with a process on the CPU
    pub busy_ticks: Tick,
    /// Total dispatches
    pub dispatches: u64,
    /// Total preemptions
    pub preemptions: u64,
}

impl SystemMetrics {
    /// Aggregate per-process metrics over a run that ended at `total_ticks`
    ///
    /// Sums are taken in `u128`, so the averages hold for any clock that
    /// fits in a `Tick`.
    pub fn aggregate(
        processes: &[ProcessMetrics],
        counters: &RunCounters,
        total_ticks: Tick,
    ) -> Self {
        let (turnaround, waiting, response) =
            processes.iter().fold((0u128, 0u128, 0u128), |(t, w, r), m| {
                (
                    t + u128::from(m.turnaround_time),
                    w + u128::from(m.waiting_time),
                    r + u128::from(m.response_time),
                )
            });

        let busy_ticks = total_ticks.saturating_sub(counters.idle_ticks());

        Self {
            avg_turnaround_time: mean(turnaround, processes.len()),
            avg_waiting_time: mean(waiting, processes.len()),
            avg_response_time: mean(response, processes.len()),
            cpu_utilization: if total_ticks == 0 {
                0.0
            } else {
                busy_ticks as f64 / total_ticks as f64 * 100.0
            },
            throughput: if total_ticks == 0 {
                0.0
            } else {
                processes.len() as f64 / total_ticks as f64
            },
            total_ticks,
            idle_ticks: counters.idle_ticks(),
            busy_ticks,
            dispatches: counters.dispatches(),
            preemptions: counters.preemptions(),
        }
    }
}

fn mean(sum: u128, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
