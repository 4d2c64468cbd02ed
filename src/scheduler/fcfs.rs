//! First-Come-First-Served dispatch.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (ties keep input order).
//! 2. Walk the sorted list with a clock; if the next process has not
//!    arrived, jump the clock to its arrival (idle gap).
//! 3. Run each process to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use log::trace;

use super::DispatchPolicy;
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{ExecutionInterval, ProcessDescriptor, Schedule};
use crate::validation::validate_processes;

/// First-Come-First-Served policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl DispatchPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn dispatch(&self, processes: &[ProcessDescriptor]) -> Result<Schedule, ScheduleError> {
        validate_processes(processes)?;

        let mut ordered = processes.to_vec();
        RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .sort(&mut ordered, &DispatchContext::default());

        let mut schedule = Schedule::new();
        let mut time = 0;

        for process in &ordered {
            if time < process.arrival_time {
                trace!("FCFS: CPU idle [{time}, {})", process.arrival_time);
                time = process.arrival_time;
            }
            let end = time + process.burst_time;
            trace!("FCFS: P{} runs [{time}, {end})", process.id);
            schedule.push(ExecutionInterval::new(process.id, time, end));
            time = end;
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(schedule: &Schedule) -> Vec<(u32, i64, i64)> {
        schedule
            .iter()
            .map(|i| (i.process_id, i.start_time, i.end_time))
            .collect()
    }

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![
            ProcessDescriptor::new(1, 0, 5),
            ProcessDescriptor::new(2, 1, 3),
        ];
        let schedule = Fcfs.dispatch(&processes).unwrap();
        assert_eq!(intervals(&schedule), vec![(1, 0, 5), (2, 5, 8)]);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![
            ProcessDescriptor::new(1, 4, 2),
            ProcessDescriptor::new(2, 0, 3),
            ProcessDescriptor::new(3, 1, 1),
        ];
        let schedule = Fcfs.dispatch(&processes).unwrap();
        assert_eq!(intervals(&schedule), vec![(2, 0, 3), (3, 3, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_fcfs_arrival_ties_keep_input_order() {
        let processes = vec![
            ProcessDescriptor::new(5, 0, 2),
            ProcessDescriptor::new(2, 0, 1),
        ];
        let schedule = Fcfs.dispatch(&processes).unwrap();
        assert_eq!(schedule.process_ids(), vec![5, 2]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![
            ProcessDescriptor::new(1, 2, 3),
            ProcessDescriptor::new(2, 10, 1),
        ];
        let schedule = Fcfs.dispatch(&processes).unwrap();
        assert_eq!(intervals(&schedule), vec![(1, 2, 5), (2, 10, 11)]);
        assert_eq!(schedule.idle_gaps(), vec![(0, 2), (5, 10)]);
    }

    #[test]
    fn test_fcfs_rejects_empty() {
        assert!(matches!(
            Fcfs.dispatch(&[]),
            Err(ScheduleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fcfs_rejects_clock_overflow() {
        assert!(matches!(
            Fcfs.dispatch(&[ProcessDescriptor::new(1, i64::MAX - 1, 5)]),
            Err(ScheduleError::InvalidInput(_))
        ));
    }
}
