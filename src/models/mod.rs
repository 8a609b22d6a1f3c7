//! Simulation domain models.
//!
//! Provides the data contract shared by every scheduling policy:
//! the process descriptors that go in, and the timeline, per-process
//! summary and totals that come out.
//!
//! # Lifecycle
//!
//! | Type | Produced by | Consumed by |
//! |------|-------------|-------------|
//! | ProcessDescriptor | Process editor / persistence | Scheduler |
//! | TimelineSegment | Scheduler | Gantt rendering |
//! | SummaryRecord | Scheduler | Result tables |
//! | SimulationResult | Scheduler | KPIs, comparison |

mod process;
mod result;
mod timeline;

pub use process::ProcessDescriptor;
pub use result::{SimulationResult, SummaryRecord, Totals};
pub use timeline::{Occupant, Timeline, TimelineSegment};
