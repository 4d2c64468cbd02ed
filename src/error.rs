//! Error type for scheduling operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failures reported by dispatch policies, metrics and the simulator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Process set or policy parameters are malformed.
    #[error("Invalid input: {}", format_errors(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Policy selector does not name a known policy.
    #[error("Unknown scheduling policy: {0}")]
    UnknownPolicy(String),
    /// Round-Robin selected without a positive quantum.
    #[error("Round-Robin requires a positive time quantum")]
    MissingQuantum,
    /// Metrics requested for a schedule with no intervals.
    #[error("Cannot compute metrics for an empty schedule")]
    EmptySchedule,
}

impl ScheduleError {
    /// Validation errors carried by `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_joins_errors() {
        let err = ScheduleError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyProcessSet, "No processes"),
            ValidationError::new(ValidationErrorKind::NonPositiveQuantum, "Quantum 0"),
        ]);
        assert_eq!(err.to_string(), "Invalid input: No processes; Quantum 0");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_other_variants_display() {
        assert_eq!(
            ScheduleError::UnknownPolicy("LIFO".into()).to_string(),
            "Unknown scheduling policy: LIFO"
        );
        assert!(ScheduleError::MissingQuantum.validation_errors().is_empty());
    }
}
