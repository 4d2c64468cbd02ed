//! Selection rules and rule engine for ready-queue dispatch.
//!
//! Non-preemptive policies repeatedly pick one process from the ready set.
//! Which process wins is decided by a chain of selection rules: the primary
//! rule (e.g. shortest burst) and tie-breakers (e.g. earliest arrival).
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{DispatchContext, RuleEngine};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::ProcessDescriptor;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let processes = vec![
//!     ProcessDescriptor::new(1, 0, 8),
//!     ProcessDescriptor::new(2, 0, 3),
//!     ProcessDescriptor::new(3, 5, 1), // not arrived yet
//! ];
//! let ctx = DispatchContext::at_time(0);
//! assert_eq!(engine.select_ready(&processes, &ctx), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first. Integer scores keep comparisons exact.
pub type RuleScore = i64;

/// A rule that ranks processes competing for the CPU.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJN", "ARRIVAL").
    fn name(&self) -> &'static str;

    /// Ranks a process given the current dispatch context.
    fn evaluate(&self, process: &ProcessDescriptor, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
