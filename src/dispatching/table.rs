//! Per-run process state arena.

use crate::models::{ProcessDescriptor, SummaryRecord, TimelineSegment};

/// Mutable scheduling state of one process during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// Service still owed (ticks).
    pub remaining: i64,
    /// Tick of the first dispatch.
    pub first_start: Option<i64>,
    /// Tick at which `remaining` reached zero.
    pub completion: Option<i64>,
}

/// Arena of process states for a single run, indexed by input position.
///
/// Also tracks admission: processes are admitted in `(arrival, id)` order
/// through a cursor, so each process enters the ready set exactly once.
/// A table is created fresh for every run and never shared.
#[derive(Debug, Clone)]
pub struct ProcessTable<'a> {
    processes: &'a [ProcessDescriptor],
    states: Vec<ProcessState>,
    arrival_order: Vec<usize>,
    admitted: usize,
    completed: usize,
}

impl<'a> ProcessTable<'a> {
    /// Creates the arena with every remaining counter set to its burst.
    pub fn new(processes: &'a [ProcessDescriptor]) -> Self {
        let states = processes
            .iter()
            .map(|p| ProcessState {
                remaining: p.burst,
                first_start: None,
                completion: None,
            })
            .collect();

        let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
        arrival_order.sort_by(|&a, &b| {
            processes[a]
                .arrival
                .cmp(&processes[b].arrival)
                .then_with(|| processes[a].id.cmp(&processes[b].id))
        });

        Self {
            processes,
            states,
            arrival_order,
            admitted: 0,
            completed: 0,
        }
    }

    #[inline]
    pub fn descriptor(&self, index: usize) -> &'a ProcessDescriptor {
        &self.processes[index]
    }

    #[inline]
    pub fn state(&self, index: usize) -> &ProcessState {
        &self.states[index]
    }

    /// Number of processes in the run.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Indices sorted by `(arrival, id)`.
    pub fn arrival_order(&self) -> &[usize] {
        &self.arrival_order
    }

    /// Arrival tick of the next process not yet admitted.
    pub fn next_arrival(&self) -> Option<i64> {
        self.arrival_order
            .get(self.admitted)
            .map(|&i| self.processes[i].arrival)
    }

    /// Admits every not-yet-admitted process with `arrival <= clock`,
    /// returning their indices in `(arrival, id)` order.
    pub fn admit_until(&mut self, clock: i64) -> Vec<usize> {
        let start = self.admitted;
        while let Some(&i) = self.arrival_order.get(self.admitted) {
            if self.processes[i].arrival > clock {
                break;
            }
            self.admitted += 1;
        }
        self.arrival_order[start..self.admitted].to_vec()
    }

    /// Whether every process has been admitted.
    pub fn all_admitted(&self) -> bool {
        self.admitted == self.arrival_order.len()
    }

    /// Whether every process has completed.
    pub fn all_completed(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Records that `index` ran over `[start, end)`.
    ///
    /// Returns `true` when the process completed at `end`.
    pub fn run(&mut self, index: usize, start: i64, end: i64) -> bool {
        let state = &mut self.states[index];
        debug_assert!(state.completion.is_none(), "process already completed");
        debug_assert!(end - start <= state.remaining, "ran past remaining service");

        state.first_start.get_or_insert(start);
        state.remaining -= end - start;
        if state.remaining == 0 {
            state.completion = Some(end);
            self.completed += 1;
            true
        } else {
            false
        }
    }

    /// Timeline segment for `index` over `[start, end)`.
    pub fn segment(&self, index: usize, start: i64, end: i64) -> TimelineSegment {
        let p = &self.processes[index];
        TimelineSegment::process(&p.id, p.display_name(), start, end)
    }

    /// One summary record per process, in input order.
    ///
    /// Processes that never completed are omitted; a finished run has none.
    pub fn summary(&self) -> Vec<SummaryRecord> {
        self.processes
            .iter()
            .zip(&self.states)
            .filter_map(|(p, s)| {
                let completion = s.completion?;
                let first_start = s.first_start?;
                Some(SummaryRecord::derive(
                    &p.id,
                    p.display_name(),
                    p.arrival,
                    p.burst,
                    first_start,
                    completion,
                ))
            })
            .collect()
    }
}
