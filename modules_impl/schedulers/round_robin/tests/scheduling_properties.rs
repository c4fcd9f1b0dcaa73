//! Scheduling invariants checked over a spread of deterministic workloads.

use rrsim_execution::process::{ProcessRegistry, ProcessSpec, ProcessState};
use rrsim_execution::scheduler::{BatchScheduler, SliceKind};
use rrsim_execution::{ExecError, InputError, ProcessId};
use rrsim_round_robin::{simulate, simulate_with, RoundRobinConfig, RoundRobinScheduler};

/// Small linear congruential generator so workloads are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn workloads() -> Vec<Vec<ProcessSpec>> {
    let mut rng = Lcg(0x5eed);
    (0..40)
        .map(|_| {
            let count = 1 + rng.next(9) as i64;
            (1..=count)
                .map(|id| {
                    let arrival = rng.next(30) as i64;
                    let burst = 1 + rng.next(12) as i64;
                    ProcessSpec::new(id, arrival, burst, rng.next(5) as i32)
                })
                .collect()
        })
        .collect()
}

#[test]
fn every_process_completes_exactly_once() {
    for specs in workloads() {
        for quantum in [1, 2, 3, 5, 8] {
            let mut registry = ProcessRegistry::new(&specs).unwrap();
            let sim = RoundRobinScheduler::new(RoundRobinConfig::with_quantum(quantum))
                .run(&mut registry)
                .unwrap();

            assert_eq!(registry.count_in(ProcessState::Done), specs.len());
            assert_eq!(sim.processes.len(), specs.len());
            assert_eq!(sim.completions().len(), specs.len());

            let mut ids: Vec<ProcessId> = sim.completions().iter().map(|c| c.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), specs.len());
        }
    }
}

#[test]
fn per_process_identities_hold() {
    for specs in workloads() {
        let sim = simulate(&specs, 3).unwrap();
        for m in &sim.processes {
            assert_eq!(m.waiting_time, m.turnaround_time - m.burst);
            assert_eq!(m.turnaround_time, m.completion_time - m.arrival);
            assert!(m.response_time <= m.waiting_time, "{:?}", m);
            assert!(m.first_dispatch >= m.arrival);

            let ran: u64 = sim.timeline.runs_of(m.id).map(|s| s.len()).sum();
            assert_eq!(ran, m.burst);
        }
    }
}

#[test]
fn busy_time_equals_total_burst() {
    for specs in workloads() {
        let sim = simulate(&specs, 2).unwrap();
        let total_burst: u64 = specs.iter().map(|s| s.burst as u64).sum();

        assert_eq!(sim.system.total_ticks - sim.system.idle_ticks, total_burst);
        assert_eq!(sim.system.busy_ticks, total_burst);
        assert!(sim.system.cpu_utilization > 0.0);
        assert!(sim.system.cpu_utilization <= 100.0);

        let idle: u64 = sim
            .timeline
            .slices()
            .iter()
            .filter(|s| s.kind == SliceKind::Idle)
            .map(|s| s.len())
            .sum();
        assert_eq!(idle, sim.system.idle_ticks);
    }
}

#[test]
fn full_utilization_when_everything_arrives_at_zero() {
    let specs: Vec<ProcessSpec> = (1..=5).map(|id| ProcessSpec::new(id, 0, id * 2, 0)).collect();
    let sim = simulate(&specs, 3).unwrap();
    assert_eq!(sim.system.idle_ticks, 0);
    assert_eq!(sim.system.cpu_utilization, 100.0);
}

#[test]
fn repeated_runs_are_identical() {
    for specs in workloads() {
        assert_eq!(simulate(&specs, 4).unwrap(), simulate(&specs, 4).unwrap());
    }
}

#[test]
fn event_stepping_is_observably_identical() {
    for specs in workloads() {
        for quantum in [1, 2, 4, 7] {
            let per_tick = simulate_with(&specs, &RoundRobinConfig::with_quantum(quantum)).unwrap();
            let event = simulate_with(&specs, &RoundRobinConfig::event_driven(quantum)).unwrap();
            assert_eq!(per_tick, event);
        }
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(simulate(&[], 2).unwrap_err(), ExecError::EmptyInput);
}

#[test]
fn invalid_input_is_rejected_before_simulation() {
    let ok = ProcessSpec::new(1, 0, 3, 0);
    assert_eq!(
        simulate(&[ok], 0).unwrap_err(),
        ExecError::InvalidInput(InputError::NonPositiveQuantum)
    );
    assert!(matches!(
        simulate(&[ok, ProcessSpec::new(2, 0, -1, 0)], 2),
        Err(ExecError::InvalidInput(InputError::NonPositiveBurst { burst: -1, .. }))
    ));
    assert!(matches!(
        simulate(&[ok, ProcessSpec::new(2, -5, 1, 0)], 2),
        Err(ExecError::InvalidInput(InputError::NegativeArrival { arrival: -5, .. }))
    ));
    assert!(matches!(
        simulate(&[ok, ProcessSpec::new(1, 2, 1, 0)], 2),
        Err(ExecError::InvalidInput(InputError::DuplicateId { .. }))
    ));
    assert!(matches!(
        simulate(&[ProcessSpec::new(0, 0, 1, 0)], 2),
        Err(ExecError::InvalidInput(InputError::NonPositiveId { index: 0, id: 0 }))
    ));
}

#[test]
fn priority_does_not_affect_order() {
    let low_first = [ProcessSpec::new(1, 0, 3, 0), ProcessSpec::new(2, 0, 3, 99)];
    let high_first = [ProcessSpec::new(1, 0, 3, 99), ProcessSpec::new(2, 0, 3, 0)];

    let a = simulate(&low_first, 2).unwrap();
    let b = simulate(&high_first, 2).unwrap();
    assert_eq!(a.completions(), b.completions());
    assert_eq!(a.system, b.system);
}

#[test]
fn clock_overflow_is_reported_not_wrapped() {
    let huge = |id| ProcessSpec::new(id, 0, i64::MAX, 0);
    let config = RoundRobinConfig::event_driven(u64::MAX);

    let sim = simulate_with(&[huge(1), huge(2)], &config).unwrap();
    assert_eq!(sim.system.total_ticks, u64::MAX - 1);
    assert!(sim.system.avg_turnaround_time > sim.system.avg_waiting_time);

    assert_eq!(
        simulate_with(&[huge(1), huge(2), huge(3)], &config).unwrap_err(),
        ExecError::ClockOverflow { at: u64::MAX - 1 }
    );
}
