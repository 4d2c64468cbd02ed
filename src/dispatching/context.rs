//! Dispatch context for selection rule evaluation.

use crate::models::Ticks;

/// Runtime dispatch state passed to selection rules.
///
/// Holds the simulation clock, which gates the ready set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchContext {
    /// Current simulation time.
    pub current_time: Ticks,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Ticks) -> Self {
        Self { current_time }
    }

    /// Moves the clock.
    pub fn advance_to(&mut self, time: Ticks) {
        self.current_time = time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_clock() {
        let mut ctx = DispatchContext::at_time(5);
        assert_eq!(ctx.current_time, 5);

        ctx.advance_to(9);
        assert_eq!(ctx.current_time, 9);
        assert_eq!(DispatchContext::default().current_time, 0);
    }
}
