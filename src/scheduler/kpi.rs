//! Schedule quality metrics.
//!
//! Computes per-process and aggregate performance indicators from a
//! completed schedule and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst (time ready but not running) |
//! | Response | first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//!
//! For a process with a single interval, waiting equals response.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, ProcessId, Schedule, Ticks};
use crate::validation::{validate_processes, ValidationError, ValidationErrorKind};

/// Metrics for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Time spent ready but not executing.
    pub waiting_time: Ticks,
    /// Time from arrival to completion.
    pub turnaround_time: Ticks,
    /// Time from arrival to first dispatch.
    pub response_time: Ticks,
    /// Time the last slice ended.
    pub completion_time: Ticks,
}

/// Per-process and aggregate schedule metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Metrics keyed by process ID.
    pub per_process: BTreeMap<ProcessId, ProcessMetrics>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Idle ticks inside `[0, makespan)`.
    pub idle_time: Ticks,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Dispatches that changed the running process.
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule and the processes it was built from.
    ///
    /// # Errors
    /// * `EmptySchedule` if the schedule has no intervals.
    /// * `InvalidInput` if the processes fail validation or a scheduled
    ///   process has no descriptor.
    pub fn calculate(
        schedule: &Schedule,
        processes: &[ProcessDescriptor],
    ) -> Result<Self, ScheduleError> {
        if schedule.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }
        validate_processes(processes)?;

        let by_id: HashMap<ProcessId, &ProcessDescriptor> =
            processes.iter().map(|p| (p.id, p)).collect();

        let mut per_process = BTreeMap::new();
        let mut unknown = Vec::new();

        for pid in schedule.process_ids() {
            let Some(process) = by_id.get(&pid) else {
                unknown.push(ValidationError::new(
                    ValidationErrorKind::UnknownProcess,
                    format!("Schedule references unknown process {pid}"),
                ));
                continue;
            };

            // Both exist: pid came from the schedule
            let first_start = schedule.first_start(pid).unwrap_or(process.arrival_time);
            let completion = schedule.completion_time(pid).unwrap_or(first_start);

            let turnaround = completion - process.arrival_time;
            per_process.insert(
                pid,
                ProcessMetrics {
                    waiting_time: turnaround - process.burst_time,
                    turnaround_time: turnaround,
                    response_time: first_start - process.arrival_time,
                    completion_time: completion,
                },
            );
        }

        if !unknown.is_empty() {
            return Err(ScheduleError::InvalidInput(unknown));
        }

        let count = per_process.len() as f64;
        let mean = |f: fn(&ProcessMetrics) -> Ticks| -> f64 {
            per_process.values().map(|m| f(m) as f64).sum::<f64>() / count
        };
        let avg_waiting_time = mean(|m| m.waiting_time);
        let avg_turnaround_time = mean(|m| m.turnaround_time);
        let avg_response_time = mean(|m| m.response_time);

        let makespan = schedule.makespan();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                schedule.busy_time() as f64 / makespan as f64,
                count / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_waiting_time,
            avg_turnaround_time,
            avg_response_time,
            makespan,
            idle_time: schedule.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: schedule.context_switches(),
            per_process,
        })
    }

    /// Metrics for one process.
    pub fn for_process(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.per_process.get(&process_id)
    }

    /// `(waiting, turnaround)` per process, as consumed by display layers.
    pub fn waiting_and_turnaround(&self) -> BTreeMap<ProcessId, (Ticks, Ticks)> {
        self.per_process
            .iter()
            .map(|(&pid, m)| (pid, (m.waiting_time, m.turnaround_time)))
            .collect()
    }
}
