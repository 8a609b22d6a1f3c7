//! Simulation result model.
//!
//! A result bundles the timeline, one summary record per process, and
//! the aggregate totals derived from both.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Busy time | Sum of non-idle segment durations |
//! | Utilization | busy_time / total_time |

use serde::{Deserialize, Serialize};

use super::{Occupant, TimelineSegment};

/// Per-process outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Process identity.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Arrival tick.
    pub arrival: i64,
    /// Requested service (ticks).
    pub burst: i64,
    /// Tick at which the process finished.
    pub completion: i64,
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
    /// Time from arrival to first dispatch.
    pub response: i64,
}

impl SummaryRecord {
    /// Derives a record from the completion and first-dispatch ticks.
    pub fn derive(
        id: impl Into<String>,
        name: impl Into<String>,
        arrival: i64,
        burst: i64,
        first_start: i64,
        completion: i64,
    ) -> Self {
        let turnaround = completion - arrival;
        Self {
            id: id.into(),
            name: name.into(),
            arrival,
            burst,
            completion,
            waiting: turnaround - burst,
            turnaround,
            response: first_start - arrival,
        }
    }
}

/// Summed per-process metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub sum_waiting: i64,
    pub sum_turnaround: i64,
}

impl Totals {
    /// Sums waiting and turnaround over a summary.
    pub fn from_summary(summary: &[SummaryRecord]) -> Self {
        summary.iter().fold(Self::default(), |acc, r| Self {
            sum_waiting: acc.sum_waiting + r.waiting,
            sum_turnaround: acc.sum_turnaround + r.turnaround,
        })
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Contiguous segments covering `[0, total_time)`.
    pub timeline: Vec<TimelineSegment>,
    /// One record per input process, in input order.
    pub summary: Vec<SummaryRecord>,
    /// End of the last segment (0 when empty).
    pub total_time: i64,
    /// Summed waiting and turnaround.
    pub totals: Totals,
    /// Sum of non-idle segment durations.
    pub busy_time: i64,
}

impl SimulationResult {
    /// The zero-valued result of an empty run.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assembles a result, deriving totals and time figures.
    pub fn new(timeline: Vec<TimelineSegment>, summary: Vec<SummaryRecord>) -> Self {
        let total_time = timeline.last().map(|s| s.end).unwrap_or(0);
        let busy_time = timeline
            .iter()
            .filter(|s| !s.is_idle())
            .map(TimelineSegment::duration)
            .sum();
        let totals = Totals::from_summary(&summary);
        Self {
            timeline,
            summary,
            total_time,
            totals,
            busy_time,
        }
    }

    /// Number of processes in the summary.
    pub fn process_count(&self) -> usize {
        self.summary.len()
    }

    /// Mean waiting time. Divides by at least one, so an empty run yields 0.
    pub fn average_waiting(&self) -> f64 {
        self.totals.sum_waiting as f64 / self.summary.len().max(1) as f64
    }

    /// Mean turnaround time. Divides by at least one.
    pub fn average_turnaround(&self) -> f64 {
        self.totals.sum_turnaround as f64 / self.summary.len().max(1) as f64
    }

    /// busy_time / total_time. `None` when total_time is zero.
    pub fn utilization(&self) -> Option<f64> {
        if self.total_time <= 0 {
            return None;
        }
        Some(self.busy_time as f64 / self.total_time as f64)
    }

    /// Completed processes per tick. `None` when total_time is zero.
    pub fn throughput(&self) -> Option<f64> {
        if self.total_time <= 0 {
            return None;
        }
        Some(self.summary.len() as f64 / self.total_time as f64)
    }

    /// Summary record for a process.
    pub fn record(&self, id: &str) -> Option<&SummaryRecord> {
        self.summary.iter().find(|r| r.id == id)
    }

    /// All segments in which the given process ran.
    pub fn segments_for(&self, id: &str) -> Vec<&TimelineSegment> {
        self.timeline
            .iter()
            .filter(|s| s.occupant.process_id() == Some(id))
            .collect()
    }

    /// Number of idle segments.
    pub fn idle_segment_count(&self) -> usize {
        self.timeline
            .iter()
            .filter(|s| s.occupant == Occupant::Idle)
            .count()
    }
}
