//! # Round-Robin Scheduler Implementation
//!
//! Single-CPU, preemptive Round-Robin over a fixed batch of processes on a
//! discrete clock. Processes are admitted to a FIFO ready queue at their
//! arrival tick (ties in input order), run for at most one quantum per
//! dispatch, and go back to the tail of the queue if work remains. When
//! the queue is empty the CPU idles until the next arrival.

use crate::config::{RoundRobinConfig, Stepping};
use alloc::vec::Vec;
use rrsim_execution::process::{ProcessRegistry, ProcessState};
use rrsim_execution::scheduler::{
    BatchScheduler, Completion, FifoQueue, ProcessMetrics, RunCounters, RunQueue, Simulation,
    SliceKind, SystemMetrics, Timeline,
};
use rrsim_execution::{ExecError, ExecResult, Tick};

/// Round-Robin Scheduler
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    /// Configuration
    config: RoundRobinConfig,
}

impl RoundRobinScheduler {
    /// Create a new scheduler
    pub fn new(config: RoundRobinConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &RoundRobinConfig {
        &self.config
    }
}

impl BatchScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "Round-Robin"
    }

    fn run(&self, registry: &mut ProcessRegistry) -> ExecResult<Simulation> {
        self.config.validate()?;
        if registry.is_empty() {
            return Err(ExecError::EmptyInput);
        }
        registry.reset();

        log::info!(
            "[round-robin] Simulating {} processes, quantum {}, {} stepping",
            registry.len(),
            self.config.quantum,
            self.config.stepping.as_str()
        );

        let simulation = Run::new(&self.config, registry).execute()?;

        log::info!(
            "[round-robin] Finished at t={}, CPU utilization {:.2}%",
            simulation.system.total_ticks,
            simulation.system.cpu_utilization
        );
        Ok(simulation)
    }
}

/// State of one simulation run
struct Run<'a> {
    config: &'a RoundRobinConfig,
    registry: &'a mut ProcessRegistry,
    /// Registry indices sorted by arrival, ties by input order
    order: Vec<usize>,
    /// Next entry of `order` still waiting to arrive
    arrivals: usize,
    queue: FifoQueue,
    clock: Tick,
    completed: usize,
    counters: RunCounters,
    timeline: Timeline,
    finished: Vec<ProcessMetrics>,
    completions: Vec<Completion>,
}

impl<'a> Run<'a> {
    fn new(config: &'a RoundRobinConfig, registry: &'a mut ProcessRegistry) -> Self {
        let order = registry.arrival_order().to_vec();
        let total = order.len();
        Self {
            config,
            registry,
            order,
            arrivals: 0,
            queue: FifoQueue::with_capacity(total),
            clock: 0,
            completed: 0,
            counters: RunCounters::new(),
            timeline: if config.record_timeline {
                Timeline::new()
            } else {
                Timeline::disabled()
            },
            finished: Vec::with_capacity(total),
            completions: Vec::with_capacity(total),
        }
    }

    fn execute(mut self) -> ExecResult<Simulation> {
        let total = self.order.len();

        self.admit_arrivals()?;
        while self.completed < total {
            match self.queue.dequeue() {
                Some(index) => self.run_slice(index)?,
                None => self.idle()?,
            }
        }

        debug_assert!(self.queue.is_empty());
        let system = SystemMetrics::aggregate(&self.finished, &self.counters, self.clock);
        debug_assert_eq!(self.counters.busy_ticks(), system.busy_ticks);

        Ok(Simulation::new(self.finished, system, self.completions, self.timeline))
    }

    /// Move every process arriving at or before the current tick to the
    /// ready queue
    fn admit_arrivals(&mut self) -> ExecResult<()> {
        match self.config.stepping {
            Stepping::PerTick => {
                for &index in &self.order {
                    let process = &mut self.registry[index];
                    if process.state() == ProcessState::New
                        && process.arrival() == self.clock
                    {
                        process.admit()?;
                        self.queue.enqueue(index);
                        log::trace!("[round-robin] t={}: {} arrived", self.clock, process.id());
                    }
                }
            }
            Stepping::NextEvent => {
                while let Some(&index) = self.order.get(self.arrivals) {
                    let process = &mut self.registry[index];
                    if process.arrival() > self.clock {
                        break;
                    }
                    process.admit()?;
                    self.queue.enqueue(index);
                    self.arrivals += 1;
                    log::trace!("[round-robin] t={}: {} arrived", self.clock, process.id());
                }
            }
        }
        Ok(())
    }

    /// Dispatch `index` for at most one quantum
    fn run_slice(&mut self, index: usize) -> ExecResult<()> {
        let start = self.clock;
        let process = &mut self.registry[index];
        let id = process.id();

        if process.dispatch(start)? {
            log::debug!(
                "[round-robin] t={}: {} first dispatch, {} waiting",
                start,
                id,
                self.queue.len()
            );
        }
        self.counters.record_dispatch();

        let slice = self.config.quantum.min(process.remaining());
        match self.config.stepping {
            Stepping::PerTick => {
                for _ in 0..slice {
                    self.registry[index].execute(1)?;
                    self.advance(1)?;
                    self.admit_arrivals()?;
                }
            }
            Stepping::NextEvent => {
                self.registry[index].execute(slice)?;
                self.advance(slice)?;
                self.admit_arrivals()?;
            }
        }
        self.counters.record_run_time(slice);
        self.timeline.record(start, self.clock, SliceKind::Run(id));

        let process = &mut self.registry[index];
        if process.remaining() == 0 {
            process.complete(self.clock)?;
            self.completed += 1;
            if let Some(metrics) = ProcessMetrics::from_process(process) {
                self.finished.push(metrics);
            }
            self.completions.push(Completion { id, at: self.clock });
            log::debug!("[round-robin] t={}: {} completed", self.clock, id);
        } else {
            process.preempt()?;
            self.counters.record_preemption();
            self.queue.enqueue(index);
            log::debug!(
                "[round-robin] t={}: {} preempted, {} ticks left",
                self.clock,
                id,
                process.remaining()
            );
        }
        Ok(())
    }

    /// Nothing is ready: let the CPU idle
    fn idle(&mut self) -> ExecResult<()> {
        let start = self.clock;
        let ticks = match self.config.stepping {
            Stepping::PerTick => 1,
            Stepping::NextEvent => self
                .order
                .get(self.arrivals)
                .map(|&index| self.registry[index].arrival().saturating_sub(start))
                .unwrap_or(0)
                .max(1),
        };

        self.advance(ticks)?;
        self.counters.record_idle_time(ticks);
        self.timeline.record(start, self.clock, SliceKind::Idle);
        log::trace!("[round-robin] t={}: idle for {} ticks", start, ticks);

        self.admit_arrivals()
    }

    /// Move the clock forward, enforcing the tick limit
    fn advance(&mut self, ticks: Tick) -> ExecResult<()> {
        let Some(next) = self.clock.checked_add(ticks) else {
            log::warn!(
                "[round-robin] Clock overflow advancing {} ticks at t={}",
                ticks,
                self.clock
            );
            return Err(ExecError::ClockOverflow { at: self.clock });
        };
        if let Some(limit) = self.config.tick_limit {
            if next > limit {
                log::warn!("[round-robin] Tick limit {} reached at t={}", limit, self.clock);
                return Err(ExecError::TickLimitExceeded { limit });
            }
        }
        self.clock = next;
        Ok(())
    }
}
