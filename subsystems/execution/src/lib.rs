//! # RR-Sim Execution Subsystem
//!
//! The execution subsystem manages:
//! - Process records and their lifecycle state machine
//! - The process registry (validated, index-addressed storage)
//! - Run queues and the batch scheduler framework
//! - Per-process and system-wide metrics
//! - Parsing process lists from their text source
//!
//! ## Key Principle
//!
//! This subsystem provides FRAMEWORKS, not policies.
//! The actual scheduling policy is a module that drives the registry.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod process;
pub mod scheduler;
pub mod source;

pub use error::{ExecError, ExecResult, InputError};

use core::fmt;

/// Simulated time, in ticks
pub type Tick = u64;

/// Unique identifier for simulated processes
///
/// Always positive; zero is rejected by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessId(u32);

impl ProcessId {
    /// Create a process ID, rejecting zero
    pub const fn new(raw: u32) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Get the raw ID value
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

static_assertions::assert_eq_size!(ProcessId, u32);
static_assertions::assert_impl_all!(ProcessId: Send, Sync, Copy, Ord, core::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_id_rejects_zero() {
        assert!(ProcessId::new(0).is_none());
        assert_eq!(ProcessId::new(7).map(ProcessId::as_u32), Some(7));
    }

    #[test]
    fn test_process_id_display() {
        let id = ProcessId::new(3).unwrap();
        assert_eq!(alloc::format!("{}", id), "P3");
    }
}
