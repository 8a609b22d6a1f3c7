//! Process descriptor model.
//!
//! A process descriptor is the unit of work handed to the simulator:
//! an identity, the tick at which it becomes eligible to run, and the
//! number of ticks of CPU service it needs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A process to be simulated.
///
/// # Time Representation
/// All times are in abstract ticks relative to the start of the run (t=0).
///
/// # Persistence
/// Only `id`, `arrival` and `burst` are required when deserializing;
/// `name` and `attributes` default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: String,
    /// Human-readable name. Empty means "use the id".
    #[serde(default)]
    pub name: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU service the process requires (ticks).
    pub burst: i64,
    /// Opaque display data (e.g. colour). Never read by the engine.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl ProcessDescriptor {
    /// Creates a process with the given identity, arrival and burst.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            arrival,
            burst,
            attributes: HashMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an opaque display attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Name shown for this process; falls back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Whether arrival and burst satisfy the engine's preconditions.
    pub fn is_well_formed(&self) -> bool {
        self.arrival >= 0 && self.burst > 0
    }
}
