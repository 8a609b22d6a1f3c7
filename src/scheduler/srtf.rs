//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! At every tick boundary the ready process with the smallest remaining
//! service runs; ties go to the earlier arrival, then the smaller identity,
//! never to the incumbent as such. A newcomer whose remaining time is
//! strictly smaller than the running process's preempts it on the tick it
//! arrives.
//!
//! Between two events (an arrival or a completion) the choice cannot
//! change: the running process only gets shorter, everyone else stays put.
//! The loop therefore advances event to event instead of tick by tick, and
//! consecutive ticks of the same process land in a single segment.
//!
//! # Complexity
//! O((n + a) log n) where a = number of arrival events.

use log::trace;

use super::{check_input, finish, Algorithm};
use crate::dispatching::{ProcessTable, ReadyQueue, ShortestRemaining};
use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, SimulationResult, Timeline};

/// Simulates preemptive Shortest Remaining Time First.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessDescriptor;
/// use cpu_sched_sim::scheduler::run_srtf;
///
/// let procs = vec![
///     ProcessDescriptor::new("P1", 0, 8),
///     ProcessDescriptor::new("P2", 1, 4),
/// ];
/// let result = run_srtf(&procs).unwrap();
/// // P2 preempts P1 at tick 1
/// assert_eq!(result.timeline[0].end, 1);
/// assert_eq!(result.record("P2").unwrap().waiting, 0);
/// ```
pub fn run_srtf(processes: &[ProcessDescriptor]) -> Result<SimulationResult, SimulationError> {
    check_input(Algorithm::Srtf, processes)?;

    let mut table = ProcessTable::new(processes);
    let mut ready = ReadyQueue::new(ShortestRemaining);
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut incumbent: Option<usize> = None;

    while !table.all_completed() {
        for index in table.admit_until(clock) {
            ready.push(&table, index);
        }

        let Some(index) = ready.pop() else {
            let Some(next) = table.next_arrival() else {
                break;
            };
            trace!("SRTF idle {clock}..{next}");
            timeline.idle_until(next);
            clock = next;
            continue;
        };

        if let Some(prev) = incumbent.filter(|&prev| prev != index) {
            trace!(
                "SRTF preempt {} by {} at {clock}",
                table.descriptor(prev).id,
                table.descriptor(index).id
            );
        }

        // Run until completion or the next arrival, whichever comes first
        let finish_at = clock + table.state(index).remaining;
        let end = match table.next_arrival() {
            Some(next) if next < finish_at => next,
            _ => finish_at,
        };

        timeline.extend_or_push(table.segment(index, clock, end));
        if table.run(index, clock, end) {
            incumbent = None;
        } else {
            ready.push(&table, index);
            incumbent = Some(index);
        }
        clock = end;
    }

    Ok(finish(Algorithm::Srtf, timeline, &table))
}
