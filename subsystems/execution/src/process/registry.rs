//! # Process Registry
//!
//! Owns every process of a simulation run. Records are addressed by their
//! index in input order; run queues hold these indices, never references.

use super::{Process, ProcessSpec, ProcessState};
use crate::{ExecError, ExecResult, InputError, ProcessId};
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use hashbrown::HashMap;

/// Process registry
#[derive(Debug, Clone)]
pub struct ProcessRegistry {
    /// All processes, in input order
    processes: Vec<Process>,
    /// Index lookup by ID
    by_id: HashMap<ProcessId, usize>,
    /// Indices sorted by arrival, ties by input order
    arrival_order: Vec<usize>,
}

impl ProcessRegistry {
    /// Validate `specs` and build a registry
    ///
    /// Fails with `EmptyInput` for an empty slice and `InvalidInput` for the
    /// first record that violates a precondition.
    pub fn new(specs: &[ProcessSpec]) -> ExecResult<Self> {
        if specs.is_empty() {
            return Err(ExecError::EmptyInput);
        }

        let mut processes = Vec::with_capacity(specs.len());
        let mut by_id = HashMap::with_capacity(specs.len());

        for (index, spec) in specs.iter().enumerate() {
            let process = Process::from_spec(index, spec)?;
            let id = process.id();
            if by_id.insert(id, index).is_some() {
                return Err(InputError::DuplicateId { id }.into());
            }
            processes.push(process);
        }

        // FIFO by input order among equal arrivals, independent of sort stability
        let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
        arrival_order.sort_unstable_by_key(|&i| (processes[i].arrival(), i));

        log::debug!("Registered {} processes", processes.len());

        Ok(Self {
            processes,
            by_id,
            arrival_order,
        })
    }

    /// Get process count
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Check if the registry holds no processes
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Get a process by index
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Get a process by index (mutable)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Process> {
        self.processes.get_mut(index)
    }

    /// Find the index of a process
    pub fn index_of(&self, id: ProcessId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Get a process by ID
    pub fn by_id(&self, id: ProcessId) -> ExecResult<&Process> {
        self.index_of(id)
            .and_then(|i| self.processes.get(i))
            .ok_or(ExecError::ProcessNotFound(id))
    }

    /// Iterate in input order
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Indices sorted by arrival, ties broken by input order
    pub fn arrival_order(&self) -> &[usize] {
        &self.arrival_order
    }

    /// Iterate sorted by arrival
    pub fn iter_by_arrival(&self) -> impl Iterator<Item = (usize, &Process)> {
        self.arrival_order.iter().map(move |&i| (i, &self.processes[i]))
    }

    /// Count processes in a state
    pub fn count_in(&self, state: ProcessState) -> usize {
        self.processes.iter().filter(|p| p.state() == state).count()
    }

    /// Check if every process has finished
    pub fn all_done(&self) -> bool {
        self.processes.iter().all(|p| p.state().is_terminated())
    }

    /// Put every process back to `New`
    pub fn reset(&mut self) {
        for process in &mut self.processes {
            process.reset();
        }
    }
}

impl Index<usize> for ProcessRegistry {
    type Output = Process;

    fn index(&self, index: usize) -> &Process {
        &self.processes[index]
    }
}

impl IndexMut<usize> for ProcessRegistry {
    fn index_mut(&mut self, index: usize) -> &mut Process {
        &mut self.processes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(ProcessRegistry::new(&[]).unwrap_err(), ExecError::EmptyInput);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let specs = [ProcessSpec::new(1, 0, 3, 0), ProcessSpec::new(1, 2, 3, 0)];
        let err = ProcessRegistry::new(&specs).unwrap_err();
        assert!(matches!(
            err,
            ExecError::InvalidInput(InputError::DuplicateId { id }) if id.as_u32() == 1
        ));
    }

    #[test]
    fn test_first_invalid_record_reported() {
        let specs = [
            ProcessSpec::new(1, 0, 3, 0),
            ProcessSpec::new(-4, 0, 3, 0),
            ProcessSpec::new(2, 0, 0, 0),
        ];
        assert_eq!(
            ProcessRegistry::new(&specs).unwrap_err(),
            ExecError::InvalidInput(InputError::NonPositiveId { index: 1, id: -4 })
        );
    }

    #[test]
    fn test_arrival_order_ties_follow_input_order() {
        let specs = [
            ProcessSpec::new(3, 4, 1, 0),
            ProcessSpec::new(1, 0, 1, 0),
            ProcessSpec::new(7, 4, 1, 0),
            ProcessSpec::new(2, 0, 1, 0),
        ];
        let registry = ProcessRegistry::new(&specs).unwrap();
        assert_eq!(registry.arrival_order(), &[1, 3, 0, 2]);

        let ids: Vec<u32> = registry.iter_by_arrival().map(|(_, p)| p.id().as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 7]);
    }

    #[test]
    fn test_lookup_by_id() {
        let specs = [ProcessSpec::new(5, 0, 2, 9), ProcessSpec::new(8, 1, 2, 0)];
        let registry = ProcessRegistry::new(&specs).unwrap();
        let id = ProcessId::new(8).unwrap();

        assert_eq!(registry.index_of(id), Some(1));
        assert_eq!(registry.by_id(id).unwrap().arrival(), 1);

        let missing = ProcessId::new(6).unwrap();
        assert_eq!(registry.by_id(missing).unwrap_err(), ExecError::ProcessNotFound(missing));
    }

    #[test]
    fn test_count_and_reset() {
        let specs = [ProcessSpec::new(1, 0, 1, 0), ProcessSpec::new(2, 0, 1, 0)];
        let mut registry = ProcessRegistry::new(&specs).unwrap();
        assert_eq!(registry.count_in(ProcessState::New), 2);

        let p = registry.get_mut(0).unwrap();
        p.admit().unwrap();
        assert_eq!(registry.count_in(ProcessState::Ready), 1);
        assert!(!registry.all_done());

        registry.reset();
        assert_eq!(registry.count_in(ProcessState::New), 2);
    }
}
