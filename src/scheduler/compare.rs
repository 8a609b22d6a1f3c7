//! Side-by-side comparison of every policy on one workload.

use serde::{Deserialize, Serialize};

use super::{run_algorithm, Algorithm, SimulationKpi};
use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, SimulationResult};
use crate::validation::{validate_processes, validate_quantum};

/// Outcome of one policy within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub result: SimulationResult,
    pub kpi: SimulationKpi,
}

/// Reports for every policy, in [`Algorithm::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub reports: Vec<AlgorithmReport>,
}

impl Comparison {
    /// Report for a given policy.
    pub fn report(&self, algorithm: Algorithm) -> Option<&AlgorithmReport> {
        self.reports.iter().find(|r| r.algorithm == algorithm)
    }

    /// Report with the lowest average waiting time.
    ///
    /// Ties keep the policy listed first.
    pub fn best_by_waiting(&self) -> Option<&AlgorithmReport> {
        self.best_by(|kpi| kpi.avg_waiting)
    }

    /// Report with the lowest average turnaround time.
    pub fn best_by_turnaround(&self) -> Option<&AlgorithmReport> {
        self.best_by(|kpi| kpi.avg_turnaround)
    }

    /// Report with the lowest average response time.
    pub fn best_by_response(&self) -> Option<&AlgorithmReport> {
        self.best_by(|kpi| kpi.avg_response)
    }

    fn best_by(&self, metric: impl Fn(&SimulationKpi) -> f64) -> Option<&AlgorithmReport> {
        self.reports.iter().fold(None, |best, r| match best {
            Some(b) if metric(&b.kpi) <= metric(&r.kpi) => Some(b),
            _ => Some(r),
        })
    }
}

/// Runs all four policies on the same process set.
///
/// The process set and quantum are validated once up front, so either
/// every policy runs or none does.
pub fn compare_algorithms(
    processes: &[ProcessDescriptor],
    quantum: i64,
) -> Result<Comparison, SimulationError> {
    if !validate_quantum(quantum) {
        return Err(SimulationError::InvalidQuantum(quantum));
    }
    validate_processes(processes)?;

    let reports = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let result = run_algorithm(algorithm, processes, quantum)?;
            let kpi = SimulationKpi::calculate(&result);
            Ok(AlgorithmReport {
                algorithm,
                result,
                kpi,
            })
        })
        .collect::<Result<Vec<_>, SimulationError>>()?;

    Ok(Comparison { reports })
}
