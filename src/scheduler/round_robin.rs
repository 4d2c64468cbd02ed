//! Round-Robin dispatch with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO ready queue with every process in stable arrival order.
//! 2. Pop the head. If it is not ready yet, jump the clock forward.
//! 3. Run it for `min(quantum, remaining)` and emit one interval.
//! 4. If work remains, re-append it at the tail, ready at the slice end.
//! 5. Stop when the queue is empty.
//!
//! The queue is populated once up front; arrivals are not re-merged at slice
//! boundaries, so a later arrival never jumps ahead of processes already
//! queued behind the running one.
//!
//! # Complexity
//! O(n log n + Σ⌈burst / quantum⌉).

use std::collections::VecDeque;

use log::trace;

use super::DispatchPolicy;
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{ExecutionInterval, ProcessDescriptor, RuntimeProcess, Schedule, Ticks};
use crate::validation::validate_round_robin;

/// Round-Robin policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// Creates a Round-Robin policy with the given time quantum.
    ///
    /// The quantum is checked at dispatch time; a non-positive value makes
    /// every dispatch fail with `InvalidInput`.
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl DispatchPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RoundRobin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn dispatch(&self, processes: &[ProcessDescriptor]) -> Result<Schedule, ScheduleError> {
        validate_round_robin(processes, self.quantum)?;

        let mut seeded = processes.to_vec();
        RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .sort(&mut seeded, &DispatchContext::default());

        let mut queue: VecDeque<RuntimeProcess> =
            seeded.iter().map(RuntimeProcess::from_descriptor).collect();
        let mut schedule = Schedule::new();
        let mut time = 0;

        while let Some(mut process) = queue.pop_front() {
            if time < process.ready_time {
                trace!("RoundRobin: CPU idle [{time}, {})", process.ready_time);
                time = process.ready_time;
            }

            let start = time;
            time += process.run_for(start, self.quantum);
            trace!(
                "RoundRobin: P{} runs [{start}, {time}), {} left",
                process.id,
                process.remaining_time
            );
            schedule.push(ExecutionInterval::new(process.id, start, time));

            if !process.is_finished() {
                queue.push_back(process);
            }
        }

        Ok(schedule)
    }
}
