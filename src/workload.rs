//! Ready-made and randomly generated process sets.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::workload::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let procs = WorkloadGenerator::new().generate(5, &mut rng);
//! assert_eq!(procs.len(), 5);
//! assert!(procs.iter().all(|p| p.is_well_formed()));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::ProcessDescriptor;

/// Attribute key under which generated processes carry their colour.
pub const COLOR_ATTRIBUTE: &str = "color";

/// The fixed five-process demonstration set.
pub fn sample_workload() -> Vec<ProcessDescriptor> {
    [
        ("P1", 0, 5, "#f97316"),
        ("P2", 2, 3, "#60a5fa"),
        ("P3", 4, 2, "#86efac"),
        ("P4", 6, 4, "#d946ef"),
        ("P5", 8, 1, "#f59e0b"),
    ]
    .into_iter()
    .map(|(id, arrival, burst, color)| {
        ProcessDescriptor::new(id, arrival, burst)
            .with_name(id)
            .with_attribute(COLOR_ATTRIBUTE, color)
    })
    .collect()
}

/// Random process set generator.
///
/// Arrivals are drawn uniformly from `0..max_arrival` and bursts from
/// `1..=max_burst`. Each process gets a distinct `#rrggbb` colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Exclusive upper bound on arrival ticks.
    pub max_arrival: i64,
    /// Inclusive upper bound on burst ticks.
    pub max_burst: i64,
    /// Prefix for generated ids and names.
    pub prefix: String,
}

impl WorkloadGenerator {
    /// Creates a generator with arrivals in `0..10` and bursts in `1..=10`.
    pub fn new() -> Self {
        Self {
            max_arrival: 10,
            max_burst: 10,
            prefix: "P".to_string(),
        }
    }

    /// Sets the exclusive arrival bound (clamped to at least 1).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(1);
        self
    }

    /// Sets the inclusive burst bound (clamped to at least 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the id/name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Generates `count` processes named `{prefix}1..{prefix}count`.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProcessDescriptor> {
        let mut used_colors = HashSet::with_capacity(count);
        (1..=count)
            .map(|i| {
                let id = format!("{}{}", self.prefix, i);
                let (arrival, burst) = self.draw(rng);
                let color = random_color(rng, &mut used_colors);
                ProcessDescriptor::new(id.clone(), arrival, burst)
                    .with_name(id)
                    .with_attribute(COLOR_ATTRIBUTE, color)
            })
            .collect()
    }

    /// Generates one more process that does not collide with `existing` ids
    /// or colours.
    pub fn generate_next<R: Rng>(
        &self,
        existing: &[ProcessDescriptor],
        rng: &mut R,
    ) -> ProcessDescriptor {
        let ids: HashSet<&str> = existing.iter().map(|p| p.id.as_str()).collect();
        let mut used_colors: HashSet<String> = existing
            .iter()
            .filter_map(|p| p.attributes.get(COLOR_ATTRIBUTE).cloned())
            .collect();

        let mut n = existing.len() + 1;
        let id = loop {
            let candidate = format!("{}{}", self.prefix, n);
            if !ids.contains(candidate.as_str()) {
                break candidate;
            }
            n += 1;
        };

        let (arrival, burst) = self.draw(rng);
        let color = random_color(rng, &mut used_colors);
        ProcessDescriptor::new(id.clone(), arrival, burst)
            .with_name(id)
            .with_attribute(COLOR_ATTRIBUTE, color)
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> (i64, i64) {
        let arrival = rng.random_range(0..self.max_arrival.max(1));
        let burst = rng.random_range(1..=self.max_burst.max(1));
        (arrival, burst)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_color<R: Rng>(rng: &mut R, used: &mut HashSet<String>) -> String {
    loop {
        let color = format!("#{:06x}", rng.random_range(0..=0xff_ffffu32));
        if used.insert(color.clone()) {
            return color;
        }
    }
}
