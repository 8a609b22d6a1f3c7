//! Run-level failure type.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Why a simulation run was refused.
///
/// Every variant is produced before the scheduling loop starts, so a
/// failed run never yields a partial timeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// One or more process descriptors are malformed.
    #[error("invalid process set: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Round Robin quantum is not a positive integer.
    #[error("invalid quantum {0}: must be a positive number of ticks")]
    InvalidQuantum(i64),
    /// An algorithm name could not be parsed.
    #[error("unknown scheduling algorithm '{0}'")]
    UnknownAlgorithm(String),
}

impl SimulationError {
    /// Validation kinds carried by this error (empty for non-input errors).
    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        match self {
            SimulationError::InvalidInput(errors) => {
                errors.iter().map(|e| e.kind.clone()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Whether the error carries a validation problem of the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.kinds().contains(&kind)
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
