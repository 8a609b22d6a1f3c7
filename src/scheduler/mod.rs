//! Scheduling policies, KPI evaluation and comparison.
//!
//! Four independent, stateless policies share one contract: a process set
//! (plus a quantum for Round Robin) goes in, a [`SimulationResult`] comes out.
//!
//! # Algorithms
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | No | Earliest arrival |
//! | SJF | No | Shortest burst |
//! | SRTF | Yes | Shortest remaining time |
//! | Round Robin | Yes (quantum) | FIFO ready queue |
//!
//! Ties are always broken by arrival, then identity.
//! Every run validates its input first and fails as a whole; an empty
//! process set yields the zero-valued result.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod compare;
mod fcfs;
mod kpi;
mod request;
mod round_robin;
mod sjf;
mod srtf;

#[cfg(test)]
mod properties;

pub use compare::{compare_algorithms, AlgorithmReport, Comparison};
pub use fcfs::run_fcfs;
pub use kpi::SimulationKpi;
pub use request::{Algorithm, SimulationRequest, DEFAULT_QUANTUM};
pub use round_robin::run_round_robin;
pub use sjf::run_sjf;
pub use srtf::run_srtf;

use log::{debug, warn};

use crate::dispatching::ProcessTable;
use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, SimulationResult, Timeline};
use crate::validation::validate_processes;

/// Runs one policy on a process set.
///
/// `quantum` is only read (and validated) for Round Robin.
pub fn run_algorithm(
    algorithm: Algorithm,
    processes: &[ProcessDescriptor],
    quantum: i64,
) -> Result<SimulationResult, SimulationError> {
    match algorithm {
        Algorithm::Fcfs => run_fcfs(processes),
        Algorithm::Sjf => run_sjf(processes),
        Algorithm::Srtf => run_srtf(processes),
        Algorithm::RoundRobin => run_round_robin(processes, quantum),
    }
}

/// Runs the policy described by a request.
pub fn run(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    run_algorithm(request.algorithm, &request.processes, request.quantum)
}

/// Validates the process set for a run, logging the rejection.
fn check_input(
    algorithm: Algorithm,
    processes: &[ProcessDescriptor],
) -> Result<(), SimulationError> {
    validate_processes(processes).map_err(|errors| {
        warn!(
            "{} run rejected: {} invalid process entr{}",
            algorithm,
            errors.len(),
            if errors.len() == 1 { "y" } else { "ies" }
        );
        SimulationError::InvalidInput(errors)
    })?;
    debug!("{} run started with {} processes", algorithm, processes.len());
    Ok(())
}

/// Assembles the result of a completed run.
fn finish(algorithm: Algorithm, timeline: Timeline, table: &ProcessTable<'_>) -> SimulationResult {
    debug_assert!(
        table.all_admitted() && table.all_completed(),
        "run ended with unserved processes"
    );
    debug_assert_eq!(timeline.is_empty(), table.is_empty());
    debug!(
        "{} run finished: {} processes, {} segments, total_time={}, busy_time={}",
        algorithm,
        table.len(),
        timeline.len(),
        timeline.end(),
        timeline.busy_time()
    );
    SimulationResult::new(timeline.into_segments(), table.summary())
}
