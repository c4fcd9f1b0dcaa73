//! # Execution Timeline
//!
//! Records what occupied the CPU over time, for Gantt-style rendering.

use crate::{ProcessId, Tick};
use alloc::vec::Vec;

/// What the CPU did during a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    /// A process was running
    Run(ProcessId),
    /// Nothing was ready
    Idle,
}

/// A half-open interval `[start, end)` of simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    /// First tick of the slice
    pub start: Tick,
    /// First tick after the slice
    pub end: Tick,
    /// What ran
    pub kind: SliceKind,
}

impl Slice {
    /// Slice length in ticks
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    /// Check for a zero-length slice
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered, gap-free list of slices
///
/// Contiguous slices of the same kind are merged, so the timeline does not
/// depend on how finely the scheduler stepped the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    slices: Vec<Slice>,
    enabled: bool,
}

impl Timeline {
    /// Create a recording timeline
    pub fn new() -> Self {
        Self {
            slices: Vec::new(),
            enabled: true,
        }
    }

    /// Create a timeline that drops everything recorded
    pub fn disabled() -> Self {
        Self {
            slices: Vec::new(),
            enabled: false,
        }
    }

    /// Record `[start, end)` as `kind`
    pub fn record(&mut self, start: Tick, end: Tick, kind: SliceKind) {
        if !self.enabled || start >= end {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.kind == kind && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice { start, end, kind });
    }

    /// Recorded slices, in time order
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Slices in which `id` ran
    pub fn runs_of(&self, id: ProcessId) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(move |s| s.kind == SliceKind::Run(id))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
