//! # Error Types
//!
//! Errors raised while validating input and running a simulation.

use crate::process::ProcessState;
use crate::{ProcessId, Tick};
use core::fmt;

/// Execution result type
pub type ExecResult<T> = Result<T, ExecError>;

/// Main error type for simulation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// A precondition on the input was violated
    InvalidInput(InputError),
    /// No processes were supplied
    EmptyInput,
    /// A lifecycle transition outside the state machine was attempted
    InvalidTransition {
        /// Process that was being moved
        id: ProcessId,
        /// State it was in
        from: ProcessState,
        /// State that was requested
        to: ProcessState,
    },
    /// CPU time was charged to a process that does not hold the CPU
    NotRunning {
        /// Process that was charged
        id: ProcessId,
        /// State it was in
        state: ProcessState,
    },
    /// The simulated clock passed the configured ceiling
    TickLimitExceeded {
        /// Configured ceiling
        limit: Tick,
    },
    /// The simulated clock no longer fits in a `Tick`
    ClockOverflow {
        /// Clock value before the failed advance
        at: Tick,
    },
    /// No process with this ID is registered
    ProcessNotFound(ProcessId),
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            Self::EmptyInput => write!(f, "Empty input: at least one process is required"),
            Self::InvalidTransition { id, from, to } => {
                write!(f, "Invalid transition for {}: {:?} -> {:?}", id, from, to)
            }
            Self::NotRunning { id, state } => {
                write!(f, "{} cannot execute while {:?}", id, state)
            }
            Self::TickLimitExceeded { limit } => {
                write!(f, "Simulation exceeded the tick limit of {}", limit)
            }
            Self::ClockOverflow { at } => {
                write!(f, "Simulated clock overflowed after t={}", at)
            }
            Self::ProcessNotFound(id) => write!(f, "Process {} not found", id),
        }
    }
}

impl From<InputError> for ExecError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}

/// Violated input preconditions
///
/// Raw values are kept as supplied so the message names what was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Quantum must be at least one tick
    NonPositiveQuantum,
    /// Process IDs must be positive
    NonPositiveId {
        /// Position in the input
        index: usize,
        /// Supplied ID
        id: i64,
    },
    /// The same ID was supplied twice
    DuplicateId {
        /// Repeated ID
        id: ProcessId,
    },
    /// Arrival times must not be negative
    NegativeArrival {
        /// Offending process
        id: ProcessId,
        /// Supplied arrival
        arrival: i64,
    },
    /// Bursts must be at least one tick
    NonPositiveBurst {
        /// Offending process
        id: ProcessId,
        /// Supplied burst
        burst: i64,
    },
    /// A value does not fit the simulator's representation
    ValueOutOfRange {
        /// Raw ID of the offending record
        id: i64,
        /// Field name
        field: &'static str,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveQuantum => write!(f, "quantum must be a positive number of ticks"),
            Self::NonPositiveId { index, id } => {
                write!(f, "process #{} has non-positive id {}", index, id)
            }
            Self::DuplicateId { id } => write!(f, "duplicate process id {}", id.as_u32()),
            Self::NegativeArrival { id, arrival } => {
                write!(f, "{} has negative arrival {}", id, arrival)
            }
            Self::NonPositiveBurst { id, burst } => {
                write!(f, "{} has non-positive burst {}", id, burst)
            }
            Self::ValueOutOfRange { id, field } => {
                write!(f, "process {} has out-of-range {}", id, field)
            }
        }
    }
}
