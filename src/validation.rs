//! Input validation for CPU scheduling runs.
//!
//! Checks structural integrity of a process set before dispatch. Detects:
//! - Empty process sets
//! - Duplicate or non-positive process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round-Robin quanta
//!
//! All problems are collected, so a caller can report every bad field at once.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{ProcessDescriptor, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// Process ID is zero.
    NonPositiveId,
    /// Arrival time is before the simulation epoch.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// A schedule references a process that was never described.
    UnknownProcess,
    /// The latest possible completion time does not fit in `Ticks`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate IDs
/// 3. IDs are positive
/// 4. Arrival times are non-negative
/// 5. Burst times are positive
/// 6. The horizon `max(arrival) + sum(burst)` fits in `Ticks`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveId,
                "Process ID must be positive, got 0",
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    // No policy finishes later than the last arrival plus all the work
    if errors.is_empty() && schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time, or `None` if it overflows.
fn schedule_horizon(processes: &[ProcessDescriptor]) -> Option<Ticks> {
    let last_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    let total_burst = processes
        .iter()
        .try_fold(0 as Ticks, |acc, p| acc.checked_add(p.burst_time))?;
    last_arrival.checked_add(total_burst)
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: Ticks) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates a process set together with a Round-Robin quantum.
///
/// Errors from both checks are reported together.
pub fn validate_round_robin(processes: &[ProcessDescriptor], quantum: Ticks) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let Err(mut quantum_errors) = validate_quantum(quantum) {
        errors.append(&mut quantum_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
