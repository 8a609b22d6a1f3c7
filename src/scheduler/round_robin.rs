//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO ready queue with the processes present at tick 0,
//!    ordered by arrival then identity.
//! 2. Dequeue the head and run it for `min(quantum, remaining)` ticks as
//!    one segment.
//! 3. Enqueue every process that arrived during that slice, then, if the
//!    slice did not finish the process, put it back at the tail. A returning
//!    process therefore queues behind processes that arrived while it ran.
//! 4. When the queue drains with work still pending, jump to the next
//!    arrival behind one idle segment.
//!
//! Consecutive slices of the same process are kept as separate segments.

use std::collections::VecDeque;

use log::{trace, warn};

use super::{check_input, finish, Algorithm};
use crate::dispatching::ProcessTable;
use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, SimulationResult, Timeline};
use crate::validation::validate_quantum;

/// Simulates Round Robin with a fixed quantum.
///
/// # Errors
/// `InvalidQuantum` if `quantum <= 0`, checked before anything else;
/// `InvalidInput` for malformed process sets.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessDescriptor;
/// use cpu_sched_sim::scheduler::run_round_robin;
/// use cpu_sched_sim::SimulationError;
///
/// let procs = vec![ProcessDescriptor::new("P1", 0, 3)];
/// assert_eq!(
///     run_round_robin(&procs, 0),
///     Err(SimulationError::InvalidQuantum(0))
/// );
/// assert_eq!(run_round_robin(&procs, 2).unwrap().timeline.len(), 2);
/// ```
pub fn run_round_robin(
    processes: &[ProcessDescriptor],
    quantum: i64,
) -> Result<SimulationResult, SimulationError> {
    if !validate_quantum(quantum) {
        warn!("RR run rejected: quantum {quantum} is not positive");
        return Err(SimulationError::InvalidQuantum(quantum));
    }
    check_input(Algorithm::RoundRobin, processes)?;

    let mut table = ProcessTable::new(processes);
    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = table.admit_until(0).into();
    let mut clock = 0;

    while !table.all_completed() {
        let Some(index) = queue.pop_front() else {
            let Some(next) = table.next_arrival() else {
                break;
            };
            trace!("RR idle {clock}..{next}");
            timeline.idle_until(next);
            clock = clock.max(next);
            queue.extend(table.admit_until(clock));
            continue;
        };

        let start = clock;
        clock += quantum.min(table.state(index).remaining);
        timeline.push(table.segment(index, start, clock));
        let finished = table.run(index, start, clock);

        // Arrivals during the slice go ahead of the process that just ran
        queue.extend(table.admit_until(clock));
        if !finished {
            queue.push_back(index);
        }
    }

    Ok(finish(Algorithm::RoundRobin, timeline, &table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;

    fn spans(res: &SimulationResult) -> Vec<(&str, i64, i64)> {
        res.timeline
            .iter()
            .map(|s| (s.occupant.label(), s.start, s.end))
            .collect()
    }

    #[test]
    fn test_rr_textbook_simultaneous_arrivals() {
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 24),
            ProcessDescriptor::new("P2", 0, 3),
            ProcessDescriptor::new("P3", 0, 3),
        ];
        let res = run_round_robin(&procs, 4).unwrap();

        assert_eq!(
            spans(&res),
            vec![
                ("P1", 0, 4),
                ("P2", 4, 7),
                ("P3", 7, 10),
                ("P1", 10, 14),
                ("P1", 14, 18),
                ("P1", 18, 22),
                ("P1", 22, 26),
                ("P1", 26, 30),
            ]
        );
        assert_eq!(res.record("P1").unwrap().waiting, 6);
        assert_eq!(res.record("P2").unwrap().waiting, 4);
        assert_eq!(res.record("P3").unwrap().waiting, 7);
        assert_eq!(res.total_time, 30);
    }

    #[test]
    fn test_rr_staggered_arrivals() {
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 24),
            ProcessDescriptor::new("P2", 4, 3),
            ProcessDescriptor::new("P3", 7, 3),
        ];
        let res = run_round_robin(&procs, 4).unwrap();

        // P2 arrives exactly when P1's first slice ends and goes ahead of it;
        // P3 arrives as P2 finishes, after P1 was re-queued.
        assert_eq!(
            &spans(&res)[..4],
            &[("P1", 0, 4), ("P2", 4, 7), ("P1", 7, 11), ("P3", 11, 14)]
        );
        assert_eq!(res.record("P2").unwrap().waiting, 0);
        assert_eq!(res.record("P3").unwrap().waiting, 4);
        assert_eq!(res.record("P1").unwrap().completion, 30);
        assert_eq!(res.busy_time, 30);
    }

    #[test]
    fn test_rr_newcomer_queues_ahead_of_returning_process() {
        let procs = vec![
            ProcessDescriptor::new("A", 0, 4),
            ProcessDescriptor::new("B", 1, 2),
        ];
        let res = run_round_robin(&procs, 2).unwrap();
        assert_eq!(spans(&res), vec![("A", 0, 2), ("B", 2, 4), ("A", 4, 6)]);
    }

    #[test]
    fn test_rr_idle_jump() {
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 1),
            ProcessDescriptor::new("P2", 10, 3),
            ProcessDescriptor::new("P3", 10, 1),
        ];
        let res = run_round_robin(&procs, 2).unwrap();
        assert_eq!(
            res.timeline,
            vec![
                TimelineSegment::process("P1", "P1", 0, 1),
                TimelineSegment::idle(1, 10),
                TimelineSegment::process("P2", "P2", 10, 12),
                TimelineSegment::process("P3", "P3", 12, 13),
                TimelineSegment::process("P2", "P2", 13, 14),
            ]
        );
        assert_eq!(res.idle_segment_count(), 1);
    }

    #[test]
    fn test_rr_late_start() {
        let procs = vec![ProcessDescriptor::new("P1", 3, 2)];
        let res = run_round_robin(&procs, 4).unwrap();
        assert_eq!(res.timeline[0], TimelineSegment::idle(0, 3));
        assert_eq!(res.record("P1").unwrap().waiting, 0);
    }

    #[test]
    fn test_rr_invalid_quantum_checked_first() {
        // Quantum is rejected even when the process set is also malformed
        let procs = vec![ProcessDescriptor::new("P1", -1, 0)];
        assert_eq!(
            run_round_robin(&procs, -2),
            Err(SimulationError::InvalidQuantum(-2))
        );
        assert_eq!(
            run_round_robin(&[], 0),
            Err(SimulationError::InvalidQuantum(0))
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 5),
            ProcessDescriptor::new("P2", 2, 3),
            ProcessDescriptor::new("P3", 9, 2),
        ];
        let rr = run_round_robin(&procs, 100).unwrap();
        let fcfs = crate::scheduler::run_fcfs(&procs).unwrap();
        assert_eq!(rr, fcfs);
    }

    #[test]
    fn test_rr_quantum_one_response_times() {
        let procs = vec![
            ProcessDescriptor::new("A", 0, 3),
            ProcessDescriptor::new("B", 0, 3),
        ];
        let res = run_round_robin(&procs, 1).unwrap();
        assert_eq!(res.timeline.len(), 6);
        assert_eq!(res.record("A").unwrap().response, 0);
        assert_eq!(res.record("B").unwrap().response, 1);
        assert_eq!(res.record("B").unwrap().completion, 6);
    }
}
