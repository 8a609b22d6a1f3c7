//! Deterministic discrete-event CPU scheduling simulator.
//!
//! Given a set of processes (arrival tick, burst, identity), computes the
//! execution timeline, per-process waiting/turnaround/response times and
//! aggregate utilization for four classical single-CPU policies.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `TimelineSegment`,
//!   `SummaryRecord`, `Totals`, `SimulationResult`
//! - **`validation`**: Input integrity checks (arrival, burst, duplicate IDs)
//! - **`dispatching`**: Total-order ready queue and per-run state arena
//! - **`scheduler`**: FCFS, SJF, SRTF, Round Robin, KPIs and comparison
//! - **`workload`**: Demonstration and randomly generated process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::ProcessDescriptor;
//! use cpu_sched_sim::scheduler::{run_sjf, SimulationKpi};
//!
//! let procs = vec![
//!     ProcessDescriptor::new("P1", 0, 7),
//!     ProcessDescriptor::new("P2", 2, 4),
//!     ProcessDescriptor::new("P3", 4, 1),
//!     ProcessDescriptor::new("P4", 5, 4),
//! ];
//! let result = run_sjf(&procs).unwrap();
//! let kpi = SimulationKpi::calculate(&result);
//! assert_eq!(result.total_time, 16);
//! assert!((kpi.avg_waiting - 4.0).abs() < 1e-10);
//! ```
//!
//! Every run is a pure function of its input: no state survives between
//! calls, so runs may execute concurrently on shared input.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
