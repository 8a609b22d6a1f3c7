//! Dispatch ordering and per-run process state.
//!
//! Provides the total order used to pick the next process among ready
//! candidates, a ready queue built on it, and the per-run state arena
//! that holds remaining-time counters.
//!
//! # Ordering
//!
//! Candidates are compared by `(metric, arrival, id)`:
//! the rule's metric first, then earlier arrival, then the lexicographically
//! smaller identity. The incumbent is never favoured on a tie, and input
//! order never influences the choice.
//!
//! ```
//! use cpu_sched_sim::dispatching::{ProcessTable, ReadyQueue, ShortestBurst};
//! use cpu_sched_sim::models::ProcessDescriptor;
//!
//! let procs = vec![
//!     ProcessDescriptor::new("B", 0, 3),
//!     ProcessDescriptor::new("A", 0, 3),
//! ];
//! let table = ProcessTable::new(&procs);
//! let mut ready = ReadyQueue::new(ShortestBurst);
//! ready.push(&table, 0);
//! ready.push(&table, 1);
//! assert_eq!(ready.pop(), Some(1)); // equal burst and arrival → "A" first
//! ```

mod queue;
mod table;

pub use queue::{DispatchKey, ReadyQueue};
pub use table::{ProcessState, ProcessTable};

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// A rule producing the primary ordering metric for a ready process.
///
/// **Lower metric = dispatched first.** Ties fall through to arrival and
/// then identity.
pub trait DispatchRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Primary metric for the process in its current state.
    fn metric(&self, process: &ProcessDescriptor, state: &ProcessState) -> i64;
}

/// Shortest total burst first (non-preemptive SJF).
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn metric(&self, process: &ProcessDescriptor, _state: &ProcessState) -> i64 {
        process.burst
    }
}

/// Shortest remaining service first (preemptive SRTF).
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn metric(&self, _process: &ProcessDescriptor, state: &ProcessState) -> i64 {
        state.remaining
    }
}
