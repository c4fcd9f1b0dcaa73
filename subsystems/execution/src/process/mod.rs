//! # Process Management
//!
//! Process records: the immutable input tuple plus the runtime state the
//! scheduler mutates while a simulation runs.

pub mod registry;
pub mod states;

pub use registry::*;
pub use states::*;

use crate::{ExecError, ExecResult, InputError, ProcessId, Tick};

/// A process as supplied by a process source, before validation
///
/// Fields are signed so that malformed values survive parsing and are
/// rejected by the registry with a precise error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Process ID (must be positive and unique)
    pub id: i64,
    /// Arrival tick (must not be negative)
    pub arrival: i64,
    /// Total CPU ticks required (must be positive)
    pub burst: i64,
    /// Priority, carried through but not consulted by Round-Robin
    pub priority: i32,
}

impl ProcessSpec {
    /// Create a new process spec
    pub const fn new(id: i64, arrival: i64, burst: i64, priority: i32) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
        }
    }
}

/// Process record
#[derive(Debug, Clone)]
pub struct Process {
    /// Process ID
    id: ProcessId,
    /// Arrival tick
    arrival: Tick,
    /// Total burst
    burst: Tick,
    /// Priority (unused by Round-Robin)
    priority: i32,
    /// Current state
    state: ProcessState,
    /// Ticks left to run
    remaining: Tick,
    /// Tick of the first dispatch, set once
    first_dispatch: Option<Tick>,
    /// Tick of completion, set once
    completion_time: Option<Tick>,
}

impl Process {
    /// Validate a spec and build a fresh `New` process
    ///
    /// `index` is the spec's position in the input and only feeds errors.
    pub fn from_spec(index: usize, spec: &ProcessSpec) -> Result<Self, InputError> {
        if spec.id <= 0 {
            return Err(InputError::NonPositiveId { index, id: spec.id });
        }
        let raw = u32::try_from(spec.id)
            .map_err(|_| InputError::ValueOutOfRange { id: spec.id, field: "id" })?;
        let id = ProcessId::new(raw)
            .ok_or(InputError::NonPositiveId { index, id: spec.id })?;

        if spec.arrival < 0 {
            return Err(InputError::NegativeArrival { id, arrival: spec.arrival });
        }
        if spec.burst <= 0 {
            return Err(InputError::NonPositiveBurst { id, burst: spec.burst });
        }

        // Non-negative i64 always fits in u64
        let arrival = spec.arrival.unsigned_abs();
        let burst = spec.burst.unsigned_abs();

        Ok(Self {
            id,
            arrival,
            burst,
            priority: spec.priority,
            state: ProcessState::New,
            remaining: burst,
            first_dispatch: None,
            completion_time: None,
        })
    }

    /// Get process ID
    pub fn id(&self) -> ProcessId {
        self.id
    }

    /// Get arrival tick
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    /// Get total burst
    pub fn burst(&self) -> Tick {
        self.burst
    }

    /// Get priority
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Get state
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Get ticks left to run
    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    /// Whether the process has ever been dispatched
    pub fn is_first_dispatched(&self) -> bool {
        self.first_dispatch.is_some()
    }

    /// Tick of the first dispatch
    pub fn first_dispatch(&self) -> Option<Tick> {
        self.first_dispatch
    }

    /// Tick of completion
    pub fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    /// Delay between arrival and first dispatch
    pub fn response_time(&self) -> Option<Tick> {
        self.first_dispatch.map(|t| t - self.arrival)
    }

    /// Completion minus arrival
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.completion_time.map(|t| t - self.arrival)
    }

    /// Turnaround minus burst
    pub fn waiting_time(&self) -> Option<Tick> {
        self.turnaround_time().map(|t| t - self.burst)
    }

    /// Move to `to`, enforcing the lifecycle state machine
    pub fn transition(&mut self, to: ProcessState) -> ExecResult<()> {
        if !self.state.can_transition_to(to) {
            return Err(ExecError::InvalidTransition {
                id: self.id,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// `New -> Ready` on arrival
    pub fn admit(&mut self) -> ExecResult<()> {
        self.transition(ProcessState::Ready)
    }

    /// `Ready -> Running` at tick `now`
    ///
    /// Returns `true` if this was the first dispatch.
    pub fn dispatch(&mut self, now: Tick) -> ExecResult<bool> {
        self.transition(ProcessState::Running)?;
        if self.first_dispatch.is_some() {
            return Ok(false);
        }
        self.first_dispatch = Some(now);
        Ok(true)
    }

    /// Run for up to `ticks`, returning the ticks actually consumed
    ///
    /// Only a `Running` process consumes its burst.
    pub fn execute(&mut self, ticks: Tick) -> ExecResult<Tick> {
        if self.state != ProcessState::Running {
            return Err(ExecError::NotRunning {
                id: self.id,
                state: self.state,
            });
        }
        let ran = ticks.min(self.remaining);
        self.remaining -= ran;
        Ok(ran)
    }

    /// `Running -> Ready` after the quantum ran out; work must remain
    pub fn preempt(&mut self) -> ExecResult<()> {
        if self.remaining == 0 {
            return Err(ExecError::InvalidTransition {
                id: self.id,
                from: self.state,
                to: ProcessState::Ready,
            });
        }
        self.transition(ProcessState::Ready)
    }

    /// `Running -> Done` at tick `now`; the burst must be exhausted
    pub fn complete(&mut self, now: Tick) -> ExecResult<()> {
        if self.remaining != 0 {
            return Err(ExecError::InvalidTransition {
                id: self.id,
                from: self.state,
                to: ProcessState::Done,
            });
        }
        self.transition(ProcessState::Done)?;
        self.completion_time = Some(now);
        Ok(())
    }

    /// Drop all runtime state, back to `New`
    pub fn reset(&mut self) {
        self.state = ProcessState::New;
        self.remaining = self.burst;
        self.first_dispatch = None;
        self.completion_time = None;
    }
}
