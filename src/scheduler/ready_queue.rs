//! Non-preemptive ready-queue dispatch: SJN, Priority and SRTF.
//!
//! # Algorithm
//!
//! 1. Optionally stable-sort the candidates (fixes tie order).
//! 2. Among candidates that have arrived by the clock, pick the best one
//!    with the policy's rule engine.
//! 3. If none has arrived, jump the clock to the earliest pending arrival.
//! 4. Run the selected process to completion, remove it, repeat.
//!
//! # Complexity
//! O(n²): each of the n selections scans the remaining candidates.

use log::trace;

use super::DispatchPolicy;
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{ExecutionInterval, ProcessDescriptor, Schedule};
use crate::validation::validate_processes;

/// Shortest-Job-Next (non-preemptive).
///
/// Candidates are pre-ordered by (arrival, burst); among ready processes the
/// smallest burst wins, ties go to the earlier arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjn;

impl DispatchPolicy for Sjn {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn dispatch(&self, processes: &[ProcessDescriptor]) -> Result<Schedule, ScheduleError> {
        let presort = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .with_tie_breaker(rules::ShortestBurst);
        let selector = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival);
        dispatch_ready_queue(self.name(), processes, Some(&presort), &selector)
    }
}

/// Priority scheduling (non-preemptive, lower value runs first).
///
/// Candidates are pre-ordered by (arrival, priority); among ready processes
/// the smallest priority value wins, ties go to the earlier arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl DispatchPolicy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn dispatch(&self, processes: &[ProcessDescriptor]) -> Result<Schedule, ScheduleError> {
        let presort = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .with_tie_breaker(rules::HighestPriority);
        let selector = RuleEngine::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival);
        dispatch_ready_queue(self.name(), processes, Some(&presort), &selector)
    }
}

/// Shortest-Remaining-Time-First, dispatch-to-completion variant.
///
/// Each selection picks the ready process with the least remaining work and
/// runs it to completion; arrivals never preempt the running process. No
/// partial progress is ever recorded, so remaining work equals the full
/// burst and the resulting order matches SJN except for tie handling:
/// candidates keep input order rather than being pre-sorted by arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl DispatchPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn dispatch(&self, processes: &[ProcessDescriptor]) -> Result<Schedule, ScheduleError> {
        let selector = RuleEngine::new().with_rule(rules::ShortestRemaining);
        dispatch_ready_queue(self.name(), processes, None, &selector)
    }
}

/// Runs the shared select-run-remove loop.
fn dispatch_ready_queue(
    policy: &str,
    processes: &[ProcessDescriptor],
    presort: Option<&RuleEngine>,
    selector: &RuleEngine,
) -> Result<Schedule, ScheduleError> {
    validate_processes(processes)?;

    let mut ctx = DispatchContext::at_time(0);
    let mut remaining = processes.to_vec();
    if let Some(engine) = presort {
        engine.sort(&mut remaining, &ctx);
    }

    let mut schedule = Schedule::new();

    while !remaining.is_empty() {
        let Some(idx) = selector.select_ready(&remaining, &ctx) else {
            // Nothing ready: idle until the next arrival
            let next_arrival = remaining
                .iter()
                .map(|p| p.arrival_time)
                .min()
                .unwrap_or(ctx.current_time);
            trace!("{policy}: CPU idle [{}, {next_arrival})", ctx.current_time);
            ctx.advance_to(next_arrival);
            continue;
        };

        let process = remaining.remove(idx);
        let start = ctx.current_time;
        let end = start + process.burst_time;
        trace!("{policy}: P{} runs [{start}, {end})", process.id);
        schedule.push(ExecutionInterval::new(process.id, start, end));
        ctx.advance_to(end);
    }

    Ok(schedule)
}
