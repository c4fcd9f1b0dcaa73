//! # Process States
//!
//! Process lifecycle state machine.

/// Process lifecycle state
///
/// A process moves `New -> Ready -> (Running <-> Ready)* -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ProcessState {
    /// Process has not arrived yet
    #[default]
    New = 0,
    /// Process is waiting in the ready queue
    Ready = 1,
    /// Process holds the CPU
    Running = 2,
    /// Process has finished its burst
    Done = 3,
}

impl ProcessState {
    /// Check if the process has finished
    pub fn is_terminated(&self) -> bool {
        matches!(self, ProcessState::Done)
    }

    /// Valid transitions from this state
    pub fn valid_transitions(&self) -> &'static [ProcessState] {
        match self {
            ProcessState::New => &[ProcessState::Ready],
            ProcessState::Ready => &[ProcessState::Running],
            ProcessState::Running => &[ProcessState::Ready, ProcessState::Done],
            ProcessState::Done => &[],
        }
    }

    /// Check whether `to` is reachable in one step
    pub fn can_transition_to(&self, to: ProcessState) -> bool {
        self.valid_transitions().contains(&to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_order() {
        assert!(ProcessState::New.can_transition_to(ProcessState::Ready));
        assert!(ProcessState::Ready.can_transition_to(ProcessState::Running));
        assert!(ProcessState::Running.can_transition_to(ProcessState::Ready));
        assert!(ProcessState::Running.can_transition_to(ProcessState::Done));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!ProcessState::New.can_transition_to(ProcessState::Running));
        assert!(!ProcessState::Ready.can_transition_to(ProcessState::Done));
        assert!(!ProcessState::Ready.can_transition_to(ProcessState::New));
        assert!(ProcessState::Done.valid_transitions().is_empty());
    }

    #[test]
    fn test_state_queries() {
        assert!(ProcessState::Done.is_terminated());
        assert_eq!(ProcessState::default(), ProcessState::New);
    }
}
