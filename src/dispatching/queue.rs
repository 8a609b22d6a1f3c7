//! Ready queue ordered by a dispatch rule.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{DispatchRule, ProcessTable};

/// Sort key of a ready process.
///
/// Field order defines the comparison: metric, then arrival, then id.
/// Identities are unique per run, so `index` never decides.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DispatchKey<'a> {
    pub metric: i64,
    pub arrival: i64,
    pub id: &'a str,
    pub index: usize,
}

/// Min-heap of ready processes keyed by a [`DispatchRule`].
///
/// Keys are computed at push time. A process whose metric changes while
/// queued must be popped and pushed again.
#[derive(Debug)]
pub struct ReadyQueue<'a, R: DispatchRule> {
    rule: R,
    heap: BinaryHeap<Reverse<DispatchKey<'a>>>,
}

impl<'a, R: DispatchRule> ReadyQueue<'a, R> {
    /// Creates an empty queue ordered by `rule`.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
        }
    }

    /// Inserts a process, keyed on its current state in `table`.
    pub fn push(&mut self, table: &ProcessTable<'a>, index: usize) {
        let process = table.descriptor(index);
        let key = DispatchKey {
            metric: self.rule.metric(process, table.state(index)),
            arrival: process.arrival,
            id: process.id.as_str(),
            index,
        };
        self.heap.push(Reverse(key));
    }

    /// Removes and returns the highest-priority process.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(key)| key.index)
    }
}
