//! Algorithm selection and run configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;
use crate::models::ProcessDescriptor;

/// Round Robin quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 4;

/// A CPU scheduling policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First Come First Serve.
    #[default]
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First, preemptive.
    Srtf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// Every policy, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
    ];

    /// Short code (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Descriptive name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Serve",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }

    /// Whether the policy reads a quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRTF" => Ok(Algorithm::Srtf),
            "RR" | "ROUNDROBIN" | "ROUND_ROBIN" => Ok(Algorithm::RoundRobin),
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<ProcessDescriptor>,
    /// Policy to apply.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Round Robin quantum (ticks). Ignored by other policies.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl SimulationRequest {
    /// Creates an FCFS request with the default quantum.
    pub fn new(processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            processes,
            algorithm: Algorithm::default(),
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!(" Srtf ".parse::<Algorithm>().unwrap(), Algorithm::Srtf);
        assert_eq!("RR".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(
            "round_robin".parse::<Algorithm>().unwrap(),
            Algorithm::RoundRobin
        );
        assert_eq!(
            "LOTTERY".parse::<Algorithm>(),
            Err(SimulationError::UnknownAlgorithm("LOTTERY".into()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_algorithm_traits() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(Algorithm::RoundRobin.uses_quantum());
        assert!(!Algorithm::Srtf.uses_quantum());
        assert_eq!(Algorithm::Sjf.full_name(), "Shortest Job First");
    }

    #[test]
    fn test_request_builder() {
        let request = SimulationRequest::new(Vec::new())
            .with_process(ProcessDescriptor::new("P1", 0, 5))
            .with_algorithm(Algorithm::RoundRobin)
            .with_quantum(2);

        assert_eq!(request.processes.len(), 1);
        assert_eq!(request.algorithm, Algorithm::RoundRobin);
        assert_eq!(request.quantum, 2);
    }

    #[test]
    fn test_request_defaults_from_json() {
        let json = r#"{"processes":[{"id":"P1","arrival":0,"burst":5}]}"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::Fcfs);
        assert_eq!(request.quantum, DEFAULT_QUANTUM);
        assert_eq!(request.processes[0].burst, 5);
    }
}
