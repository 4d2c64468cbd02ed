//! Dispatch policies, schedule metrics and the simulation facade.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `Fcfs` | no | earliest arrival |
//! | `Sjn` | no | shortest burst among ready |
//! | `Priority` | no | lowest priority value among ready |
//! | `RoundRobin` | yes | FIFO, fixed quantum |
//! | `Srtf` | no | least remaining work among ready, run to completion |
//!
//! Every policy is a pure function of its input: no state survives a
//! dispatch call, so one policy value can serve concurrent callers.
//!
//! # Metrics
//!
//! `ScheduleMetrics` derives waiting, turnaround and response time per
//! process plus aggregate averages, makespan and utilization.

mod fcfs;
mod kpi;
mod policy;
mod ready_queue;
mod round_robin;
mod simulator;

pub use fcfs::Fcfs;
pub use kpi::{ProcessMetrics, ScheduleMetrics};
pub use policy::PolicyKind;
pub use ready_queue::{Priority, Sjn, Srtf};
pub use round_robin::RoundRobin;
pub use simulator::{compare_all, simulate, simulate_with, SimulationOutcome, SimulationRequest};

use std::fmt::Debug;

use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, Schedule};

/// A single-CPU dispatch policy.
///
/// # Contract
/// Input must be a non-empty set of processes with unique positive IDs,
/// non-negative arrivals and positive bursts; otherwise dispatch fails with
/// `InvalidInput`. The returned schedule is non-overlapping, sorted by start
/// time, and delivers exactly `burst_time` of service to every process.
pub trait DispatchPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RoundRobin").
    fn name(&self) -> &'static str;

    /// Computes the schedule for `processes`.
    fn dispatch(&self, processes: &[ProcessDescriptor]) -> Result<Schedule, ScheduleError>;

    /// Whether a process can be split across several intervals.
    fn is_preemptive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn all_policies(quantum: i64) -> Vec<Box<dyn DispatchPolicy>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sjn),
            Box::new(Priority),
            Box::new(RoundRobin::new(quantum)),
            Box::new(Srtf),
        ]
    }

    fn random_workloads() -> Vec<Vec<ProcessDescriptor>> {
        let mut rng = SmallRng::seed_from_u64(2024);
        (1..=40)
            .map(|n| {
                WorkloadGenerator::new(n % 12 + 1)
                    .with_arrival_range(0, 25)
                    .with_burst_range(1, 9)
                    .with_priority_range(0, 3)
                    .generate(&mut rng)
            })
            .collect()
    }

    #[test]
    fn test_every_process_gets_full_service() {
        for processes in random_workloads() {
            for policy in all_policies(3) {
                let schedule = policy.dispatch(&processes).unwrap();
                for p in &processes {
                    assert_eq!(schedule.service_time(p.id), p.burst_time, "{}", policy.name());
                    if !policy.is_preemptive() {
                        assert_eq!(schedule.intervals_for(p.id).len(), 1, "{}", policy.name());
                    }
                }
            }
        }
    }

    #[test]
    fn test_schedules_respect_timeline_invariants() {
        for processes in random_workloads() {
            for policy in all_policies(2) {
                let schedule = policy.dispatch(&processes).unwrap();
                assert!(
                    schedule.check_invariants().is_empty(),
                    "{}: {:?}",
                    policy.name(),
                    schedule.check_invariants()
                );
                // Nothing runs before it arrives
                for interval in &schedule {
                    let p = processes
                        .iter()
                        .find(|p| p.id == interval.process_id)
                        .unwrap();
                    assert!(interval.start_time >= p.arrival_time);
                }
            }
        }
    }

    #[test]
    fn test_metrics_bounds() {
        for processes in random_workloads() {
            for policy in all_policies(4) {
                let schedule = policy.dispatch(&processes).unwrap();
                let metrics = ScheduleMetrics::calculate(&schedule, &processes).unwrap();
                assert_eq!(metrics.per_process.len(), processes.len());
                for p in &processes {
                    let m = metrics.for_process(p.id).unwrap();
                    assert!(m.waiting_time >= 0);
                    assert!(m.turnaround_time >= p.burst_time);
                    assert!(m.response_time <= m.waiting_time);
                }
            }
        }
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        for processes in random_workloads() {
            let snapshot = processes.clone();
            for policy in all_policies(2) {
                let first = policy.dispatch(&processes).unwrap();
                let second = policy.dispatch(&processes).unwrap();
                assert_eq!(first, second);
            }
            assert_eq!(processes, snapshot);
        }
    }

    #[test]
    fn test_srtf_equals_sjn_with_distinct_bursts() {
        let processes = vec![
            ProcessDescriptor::new(1, 0, 6),
            ProcessDescriptor::new(2, 2, 2),
            ProcessDescriptor::new(3, 3, 8),
            ProcessDescriptor::new(4, 4, 3),
            ProcessDescriptor::new(5, 30, 1),
        ];
        assert_eq!(
            Srtf.dispatch(&processes).unwrap(),
            Sjn.dispatch(&processes).unwrap()
        );
    }

    #[test]
    fn test_sjn_minimizes_average_wait_against_fcfs() {
        // All arrive together: SJN order is optimal for mean waiting time
        let processes = vec![
            ProcessDescriptor::new(1, 0, 9),
            ProcessDescriptor::new(2, 0, 1),
            ProcessDescriptor::new(3, 0, 4),
        ];
        let fcfs = ScheduleMetrics::calculate(&Fcfs.dispatch(&processes).unwrap(), &processes)
            .unwrap();
        let sjn = ScheduleMetrics::calculate(&Sjn.dispatch(&processes).unwrap(), &processes)
            .unwrap();
        assert!(sjn.avg_waiting_time < fcfs.avg_waiting_time);
        assert!((sjn.avg_waiting_time - 2.0).abs() < 1e-10); // (0 + 1 + 5) / 3
    }
}
