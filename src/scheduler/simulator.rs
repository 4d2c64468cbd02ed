//! Scheduling facade.
//!
//! Selects a dispatch policy by name, runs it over a process set and
//! derives metrics from the resulting schedule.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{PolicyKind, ScheduleMetrics};
use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, Schedule, Ticks};

/// Input container for a simulation run.
///
/// Deserializable, so a front-end can submit a JSON document:
///
/// ```
/// use u_cpusched::scheduler::SimulationRequest;
///
/// let request: SimulationRequest = serde_json::from_str(r#"{
///     "policy": "RoundRobin",
///     "quantum": 2,
///     "processes": [
///         {"id": 1, "arrival_time": 0, "burst_time": 5, "priority": 1},
///         {"id": 2, "arrival_time": 0, "burst_time": 3, "priority": 2}
///     ]
/// }"#).unwrap();
///
/// let outcome = request.run().unwrap();
/// assert_eq!(outcome.schedule.len(), 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy selector (`FCFS`, `SJN`, `Priority`, `RoundRobin`, `SRTF`).
    pub policy: String,
    /// Processes to schedule.
    pub processes: Vec<ProcessDescriptor>,
    /// Time quantum; required for Round-Robin only.
    #[serde(default)]
    pub quantum: Option<Ticks>,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(policy: impl Into<String>, processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            policy: policy.into(),
            processes,
            quantum: None,
        }
    }

    /// Sets the Round-Robin time quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationOutcome, ScheduleError> {
        simulate(&self.policy, &self.processes, self.quantum)
    }
}

/// Schedule plus metrics for one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced the schedule.
    pub policy: PolicyKind,
    /// Execution intervals in dispatch order.
    pub schedule: Schedule,
    /// Per-process and aggregate metrics.
    pub metrics: ScheduleMetrics,
}

/// Runs one policy, selected by name, over `processes`.
///
/// # Errors
/// * `UnknownPolicy` if `policy` names no known policy.
/// * `MissingQuantum` if Round-Robin is selected without a positive quantum.
/// * `InvalidInput` if the process set fails validation.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::simulate;
///
/// let processes = vec![
///     ProcessDescriptor::new(1, 0, 5),
///     ProcessDescriptor::new(2, 1, 3),
/// ];
/// let outcome = simulate("FCFS", &processes, None).unwrap();
/// assert_eq!(outcome.schedule.makespan(), 8);
/// assert!((outcome.metrics.avg_waiting_time - 2.0).abs() < 1e-10);
/// ```
pub fn simulate(
    policy: &str,
    processes: &[ProcessDescriptor],
    quantum: Option<Ticks>,
) -> Result<SimulationOutcome, ScheduleError> {
    let kind: PolicyKind = policy.parse()?;
    simulate_with(kind, processes, quantum)
}

/// Runs an already-parsed policy over `processes`.
pub fn simulate_with(
    kind: PolicyKind,
    processes: &[ProcessDescriptor],
    quantum: Option<Ticks>,
) -> Result<SimulationOutcome, ScheduleError> {
    let policy = kind.build(quantum)?;
    debug!("Dispatching {} processes with {}", processes.len(), kind);

    let schedule = policy.dispatch(processes)?;
    debug_assert!(schedule.is_valid(), "{kind} produced {schedule:?}");

    let metrics = ScheduleMetrics::calculate(&schedule, processes)?;
    debug!(
        "{kind}: {} intervals, makespan {}, avg wait {:.2}, avg turnaround {:.2}",
        schedule.len(),
        metrics.makespan,
        metrics.avg_waiting_time,
        metrics.avg_turnaround_time
    );

    Ok(SimulationOutcome {
        policy: kind,
        schedule,
        metrics,
    })
}

/// Runs every policy over the same process set.
///
/// Round-Robin is included only when `quantum` is given; its quantum is
/// still validated.
pub fn compare_all(
    processes: &[ProcessDescriptor],
    quantum: Option<Ticks>,
) -> Result<Vec<SimulationOutcome>, ScheduleError> {
    PolicyKind::ALL
        .iter()
        .filter(|kind| !kind.requires_quantum() || quantum.is_some())
        .map(|&kind| simulate_with(kind, processes, quantum))
        .collect()
}
