//! Rule engine for ready-queue selection.
//!
//! Composes selection rules sequentially: the next rule is consulted only
//! when every earlier rule ties.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::ProcessDescriptor;

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence (primary rule → tie-breakers). Sorting is
/// stable and selection returns the first best candidate, so full ties
/// resolve to input order.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{DispatchContext, RuleEngine};
/// use u_cpusched::dispatching::rules;
/// use u_cpusched::models::ProcessDescriptor;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::EarliestArrival)
///     .with_tie_breaker(rules::HighestPriority);
///
/// let processes = vec![
///     ProcessDescriptor::new(1, 2, 4).with_priority(1),
///     ProcessDescriptor::new(2, 0, 4).with_priority(5),
///     ProcessDescriptor::new(3, 0, 4).with_priority(3),
/// ];
/// let order = engine.sort_indices(&processes, &DispatchContext::at_time(0));
/// assert_eq!(order, vec![2, 1, 0]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Returns indices into `processes`, best first.
    pub fn sort_indices(
        &self,
        processes: &[ProcessDescriptor],
        context: &DispatchContext,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Stable-sorts `processes` in place, best first.
    pub fn sort(&self, processes: &mut [ProcessDescriptor], context: &DispatchContext) {
        processes.sort_by(|a, b| self.compare(a, b, context));
    }

    /// Returns the index of the best process that has arrived by
    /// `context.current_time`, or `None` if nothing is ready.
    pub fn select_ready(
        &self,
        processes: &[ProcessDescriptor],
        context: &DispatchContext,
    ) -> Option<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(context.current_time))
            .min_by(|(_, a), (_, b)| self.compare(a, b, context))
            .map(|(idx, _)| idx)
    }

    fn compare(
        &self,
        a: &ProcessDescriptor,
        b: &ProcessDescriptor,
        context: &DispatchContext,
    ) -> Ordering {
        self.rules
            .iter()
            .map(|rule| {
                let score: RuleScore = rule.evaluate(a, context);
                score.cmp(&rule.evaluate(b, context))
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make_process(id: u32, arrival: i64, burst: i64, priority: i32) -> ProcessDescriptor {
        ProcessDescriptor::new(id, arrival, burst).with_priority(priority)
    }

    #[test]
    fn test_burst_ordering() {
        let processes = vec![
            make_process(1, 0, 5, 0),
            make_process(2, 0, 1, 0),
            make_process(3, 0, 3, 0),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        assert_eq!(engine.sort_indices(&processes, &ctx), vec![1, 2, 0]);
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let processes = vec![
            make_process(1, 3, 4, 0),
            make_process(2, 1, 4, 0), // Same burst, earlier arrival
        ];
        let ctx = DispatchContext::at_time(10);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival);

        assert_eq!(engine.select_ready(&processes, &ctx), Some(1));
    }

    #[test]
    fn test_input_order_is_stable() {
        let processes = vec![
            make_process(9, 0, 2, 0),
            make_process(4, 0, 2, 0),
            make_process(6, 0, 2, 0),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        assert_eq!(engine.sort_indices(&processes, &ctx), vec![0, 1, 2]);
        assert_eq!(engine.select_ready(&processes, &ctx), Some(0));
    }

    #[test]
    fn test_select_ready_gates_on_arrival() {
        let processes = vec![make_process(1, 0, 8, 0), make_process(2, 1, 2, 0)];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        // At t=0 only P1 has arrived, even though P2 is shorter
        assert_eq!(
            engine.select_ready(&processes, &DispatchContext::at_time(0)),
            Some(0)
        );
        assert_eq!(
            engine.select_ready(&processes, &DispatchContext::at_time(1)),
            Some(1)
        );
    }

    #[test]
    fn test_nothing_ready() {
        let processes = vec![make_process(1, 5, 8, 0)];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(engine
            .select_ready(&processes, &DispatchContext::at_time(4))
            .is_none());
        assert!(engine
            .select_ready(&[], &DispatchContext::at_time(0))
            .is_none());
    }

    #[test]
    fn test_sort_in_place() {
        let mut processes = vec![make_process(1, 4, 1, 0), make_process(2, 0, 1, 0)];
        let engine = RuleEngine::new().with_rule(rules::EarliestArrival);
        engine.sort(&mut processes, &DispatchContext::default());
        assert_eq!(processes[0].id, 2);
    }

    #[test]
    fn test_engine_debug_lists_rules() {
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival);
        assert_eq!(format!("{engine:?}"), r#"RuleEngine { rules: ["SJN", "ARRIVAL"] }"#);
    }
}
