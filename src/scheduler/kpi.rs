//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Final tick of the timeline |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Response | Mean of first dispatch - arrival |
//! | Max Waiting | Largest single waiting time |
//! | Utilization | busy_time / makespan |
//! | Throughput | Completed processes per tick |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Run performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of simulated processes.
    pub process_count: usize,
    /// Final tick of the run.
    pub makespan: i64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Largest waiting time of any single process.
    pub max_waiting: i64,
    /// CPU utilization (0.0..1.0).
    pub utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a completed run.
    ///
    /// Averages over an empty run are 0.0, as are utilization and
    /// throughput when the makespan is zero.
    pub fn calculate(result: &SimulationResult) -> Self {
        let n = result.summary.len();
        let total_response: i64 = result.summary.iter().map(|r| r.response).sum();
        let max_waiting = result.summary.iter().map(|r| r.waiting).max().unwrap_or(0);

        let avg_response = if n == 0 {
            0.0
        } else {
            total_response as f64 / n as f64
        };

        Self {
            process_count: n,
            makespan: result.total_time,
            avg_waiting: result.average_waiting(),
            avg_turnaround: result.average_turnaround(),
            avg_response,
            max_waiting,
            utilization: result.utilization().unwrap_or(0.0),
            throughput: result.throughput().unwrap_or(0.0),
        }
    }

    /// Utilization as a percentage (0.0..100.0).
    pub fn utilization_percent(&self) -> f64 {
        self.utilization * 100.0
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting <= max_avg_waiting && self.utilization >= min_utilization
    }
}
