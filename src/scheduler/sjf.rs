//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point, admit every process that has arrived, then run
//! the ready process with the smallest burst (ties: arrival, identity) to
//! completion. When nothing is ready, the clock jumps straight to the next
//! arrival behind a single idle segment.
//!
//! # Complexity
//! O(n log n): each process is pushed and popped once.

use log::trace;

use super::{check_input, finish, Algorithm};
use crate::dispatching::{ProcessTable, ReadyQueue, ShortestBurst};
use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, SimulationResult, Timeline};

/// Simulates non-preemptive Shortest Job First.
pub fn run_sjf(processes: &[ProcessDescriptor]) -> Result<SimulationResult, SimulationError> {
    check_input(Algorithm::Sjf, processes)?;

    let mut table = ProcessTable::new(processes);
    let mut ready = ReadyQueue::new(ShortestBurst);
    let mut timeline = Timeline::new();
    let mut clock = 0;

    while !table.all_completed() {
        for index in table.admit_until(clock) {
            ready.push(&table, index);
        }

        let Some(index) = ready.pop() else {
            let Some(next) = table.next_arrival() else {
                break;
            };
            trace!("SJF idle {clock}..{next}");
            timeline.idle_until(next);
            clock = next;
            continue;
        };

        let end = clock + table.descriptor(index).burst;
        timeline.push(table.segment(index, clock, end));
        table.run(index, clock, end);
        clock = end;
    }

    Ok(finish(Algorithm::Sjf, timeline, &table))
}
