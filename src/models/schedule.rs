//! Schedule (solution) model.
//!
//! A schedule is the chronological sequence of CPU execution intervals
//! produced by a dispatch policy. Under non-preemptive policies each process
//! owns exactly one interval; under Round-Robin a process may be split
//! across several quantum slices.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// A single stretch of CPU time granted to one process.
///
/// Covers `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Dispatch time.
    pub start_time: Ticks,
    /// Time the CPU was released.
    pub end_time: Ticks,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: ProcessId, start_time: Ticks, end_time: Ticks) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end_time - self.start_time
    }

    /// Whether `time` falls inside `[start_time, end_time)`.
    #[inline]
    pub fn contains(&self, time: Ticks) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

impl From<(ProcessId, Ticks, Ticks)> for ExecutionInterval {
    fn from((process_id, start_time, end_time): (ProcessId, Ticks, Ticks)) -> Self {
        Self::new(process_id, start_time, end_time)
    }
}

/// A broken schedule invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Position of the offending interval in the schedule.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Interval with `end_time <= start_time` or a negative timestamp.
    MalformedInterval,
    /// Interval starts before its predecessor.
    OutOfOrder,
    /// Interval starts before its predecessor ended.
    Overlap,
}

impl Violation {
    fn new(violation_type: ViolationType, index: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type,
            index,
            message: message.into(),
        }
    }
}

/// An ordered single-CPU schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Intervals in dispatch order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the schedule has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterates intervals in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Makespan: latest end time (0 for an empty schedule).
    pub fn makespan(&self) -> Ticks {
        self.intervals.iter().map(|i| i.end_time).max().unwrap_or(0)
    }

    /// Total time the CPU was executing some process.
    pub fn busy_time(&self) -> Ticks {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// Total idle time in `[0, makespan)`.
    pub fn idle_time(&self) -> Ticks {
        self.makespan() - self.busy_time()
    }

    /// All intervals for one process, in dispatch order.
    pub fn intervals_for(&self, process_id: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// The interval executing at `time`, if any.
    pub fn interval_at(&self, time: Ticks) -> Option<&ExecutionInterval> {
        self.intervals.iter().find(|i| i.contains(time))
    }

    /// Distinct process ids in order of first dispatch.
    pub fn process_ids(&self) -> Vec<ProcessId> {
        let mut ids: Vec<ProcessId> = Vec::new();
        for interval in &self.intervals {
            if !ids.contains(&interval.process_id) {
                ids.push(interval.process_id);
            }
        }
        ids
    }

    /// First dispatch time of a process.
    pub fn first_start(&self, process_id: ProcessId) -> Option<Ticks> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(|i| i.start_time)
            .min()
    }

    /// Completion time of a process (latest end of its intervals).
    pub fn completion_time(&self, process_id: ProcessId) -> Option<Ticks> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(|i| i.end_time)
            .max()
    }

    /// Total CPU time a process received.
    pub fn service_time(&self, process_id: ProcessId) -> Ticks {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(|i| i.duration())
            .sum()
    }

    /// Gaps where the CPU was idle, starting from t=0.
    pub fn idle_gaps(&self) -> Vec<(Ticks, Ticks)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for interval in &self.intervals {
            if interval.start_time > cursor {
                gaps.push((cursor, interval.start_time));
            }
            cursor = cursor.max(interval.end_time);
        }
        gaps
    }

    /// Number of dispatches that hand the CPU to a different process.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count()
    }

    /// Checks the single-CPU timeline invariants.
    ///
    /// Every interval must be non-empty with non-negative timestamps, and
    /// intervals must be sorted by start time without overlapping.
    pub fn check_invariants(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (idx, interval) in self.intervals.iter().enumerate() {
            if interval.start_time < 0 || interval.end_time <= interval.start_time {
                violations.push(Violation::new(
                    ViolationType::MalformedInterval,
                    idx,
                    format!(
                        "P{} has malformed interval [{}, {})",
                        interval.process_id, interval.start_time, interval.end_time
                    ),
                ));
            }
        }

        for (idx, pair) in self.intervals.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start_time < prev.start_time {
                violations.push(Violation::new(
                    ViolationType::OutOfOrder,
                    idx + 1,
                    format!(
                        "P{} starts at {} before P{} at {}",
                        next.process_id, next.start_time, prev.process_id, prev.start_time
                    ),
                ));
            } else if next.start_time < prev.end_time {
                violations.push(Violation::new(
                    ViolationType::Overlap,
                    idx + 1,
                    format!(
                        "P{} starts at {} while P{} runs until {}",
                        next.process_id, next.start_time, prev.process_id, prev.end_time
                    ),
                ));
            }
        }

        violations
    }

    /// Whether [`check_invariants`](Self::check_invariants) finds nothing.
    pub fn is_valid(&self) -> bool {
        self.check_invariants().is_empty()
    }
}

impl FromIterator<ExecutionInterval> for Schedule {
    fn from_iter<I: IntoIterator<Item = ExecutionInterval>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
