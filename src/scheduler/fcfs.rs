//! First Come First Serve.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival, ties by identity.
//! 2. Run each to completion in that order, inserting an idle segment
//!    whenever the CPU is free before the next arrival.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the scan.

use super::{check_input, finish, Algorithm};
use crate::dispatching::ProcessTable;
use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, SimulationResult, Timeline};

/// Simulates non-preemptive First Come First Serve.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessDescriptor;
/// use cpu_sched_sim::scheduler::run_fcfs;
///
/// let procs = vec![
///     ProcessDescriptor::new("P1", 0, 5),
///     ProcessDescriptor::new("P2", 2, 3),
/// ];
/// let result = run_fcfs(&procs).unwrap();
/// assert_eq!(result.total_time, 8);
/// assert_eq!(result.record("P2").unwrap().waiting, 3);
/// ```
pub fn run_fcfs(processes: &[ProcessDescriptor]) -> Result<SimulationResult, SimulationError> {
    check_input(Algorithm::Fcfs, processes)?;

    let mut table = ProcessTable::new(processes);
    let mut timeline = Timeline::new();
    let order = table.arrival_order().to_vec();

    for index in order {
        let process = table.descriptor(index);
        timeline.idle_until(process.arrival);

        let start = timeline.end();
        let end = start + process.burst;
        timeline.push(table.segment(index, start, end));
        table.run(index, start, end);
    }

    Ok(finish(Algorithm::Fcfs, timeline, &table))
}
