//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process set before any
//! scheduling work starts. Detects:
//! - Negative arrival ticks
//! - Non-positive burst times
//! - Duplicate process identities
//! - Process sets whose schedule would run past `i64::MAX` ticks
//!
//! Runs are rejected as a whole; malformed entries are never skipped,
//! so aggregate metrics always cover every supplied process.

use std::collections::HashSet;

use crate::models::ProcessDescriptor;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process identity.
    pub process_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst ≤ 0 or arrival < 0.
    InvalidProcess,
    /// Two processes share the same identity.
    DuplicateIdentity,
    /// Completion ticks or per-run totals would not fit in `i64`.
    TickOverflow,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        process_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id: process_id.into(),
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. Every arrival is ≥ 0
/// 2. Every burst is > 0
/// 3. No two processes share an identity
/// 4. Every tick and total the run can produce fits in `i64`
///    (only checked once 1-3 pass)
///
/// An empty set is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues
/// in input order.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                &p.id,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                &p.id,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }

        if !seen.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateIdentity,
                &p.id,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        if let Err(e) = check_tick_range(processes) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a run over `processes` stays within `i64`.
///
/// No policy finishes later than `max(arrival) + Σ burst`, and no
/// turnaround exceeds that horizon minus the earliest arrival, so the
/// summed totals are bounded by `count * (horizon - earliest)`.
fn check_tick_range(processes: &[ProcessDescriptor]) -> Result<(), ValidationError> {
    let Some(last) = processes.last() else {
        return Ok(());
    };
    let latest = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let earliest = processes.iter().map(|p| p.arrival).min().unwrap_or(0);

    let mut horizon = latest;
    for p in processes {
        horizon = horizon.checked_add(p.burst).ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::TickOverflow,
                &p.id,
                format!("Process '{}' pushes the schedule past i64::MAX ticks", p.id),
            )
        })?;
    }

    let count = i64::try_from(processes.len()).unwrap_or(i64::MAX);
    (horizon - earliest).checked_mul(count).ok_or_else(|| {
        ValidationError::new(
            ValidationErrorKind::TickOverflow,
            &last.id,
            format!(
                "Waiting/turnaround totals over {} processes exceed i64::MAX ticks",
                count
            ),
        )
    })?;
    Ok(())
}

/// Whether a Round Robin quantum is usable (strictly positive).
#[inline]
pub fn validate_quantum(quantum: i64) -> bool {
    quantum > 0
}
