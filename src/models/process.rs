//! Process descriptor model.
//!
//! A process is the unit of work handed to the CPU scheduler. The caller
//! describes each process once; dispatch policies never mutate descriptors
//! and keep any progress bookkeeping in a separate [`RuntimeProcess`].
//!
//! # Time Representation
//! All times are abstract integer ticks relative to the simulation epoch
//! (t=0). The caller decides what one tick means.

use serde::{Deserialize, Serialize};

/// Process identifier (positive, unique within a run).
pub type ProcessId = u32;

/// Simulated clock value in ticks.
pub type Ticks = i64;

/// A process to be scheduled.
///
/// Lower `priority` values mean higher importance. This is the convention
/// used by the Priority policy and is fixed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time the process needs.
    pub burst_time: Ticks,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a process with priority 0.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: Ticks) -> bool {
        self.arrival_time <= time
    }
}

impl From<(ProcessId, Ticks, Ticks, i32)> for ProcessDescriptor {
    fn from((id, arrival_time, burst_time, priority): (ProcessId, Ticks, Ticks, i32)) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Mutable progress of a process inside a single dispatch invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeProcess {
    /// Process identifier.
    pub id: ProcessId,
    /// Service still owed to the process.
    pub remaining_time: Ticks,
    /// Earliest time the process may run again (arrival on first enqueue).
    pub ready_time: Ticks,
}

impl RuntimeProcess {
    /// Starts tracking a process that has received no service yet.
    pub fn from_descriptor(process: &ProcessDescriptor) -> Self {
        Self {
            id: process.id,
            remaining_time: process.burst_time,
            ready_time: process.arrival_time,
        }
    }

    /// Consumes up to `slice` ticks of service starting at `time`.
    ///
    /// Returns the amount actually executed. Afterwards `ready_time` is the
    /// end of the executed slice.
    pub fn run_for(&mut self, time: Ticks, slice: Ticks) -> Ticks {
        let executed = slice.min(self.remaining_time);
        self.remaining_time -= executed;
        self.ready_time = time + executed;
        executed
    }

    /// Whether all service has been delivered.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }
}
