//! Built-in selection rules.
//!
//! All rules return lower scores for processes that should run first.

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::ProcessDescriptor;

/// Earliest arrival first (FCFS order).
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &DispatchContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest total burst first.
///
/// Minimizes mean waiting time among non-preemptive orders on one CPU.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &DispatchContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job Next"
    }
}

/// Shortest remaining service first.
///
/// A selected process always runs to completion, so the work a waiting
/// process still needs is its full burst time.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &DispatchContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Smallest priority value first (lower value = more important).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &DispatchContext) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}
