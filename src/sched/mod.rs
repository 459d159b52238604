/*!
 * Scheduler Engine
 * Five single-processor scheduling simulators sharing one data contract
 */

use crate::core::types::{SimResult, Tick};
use crate::core::SimulationError;
use crate::metrics::Schedule;
use crate::workload::Workload;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod entry;
mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

/// Direction of the priority ordering
///
/// A mode flag on the priority policy, not a separate algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityOrder {
    /// Numerically higher value is the more urgent priority
    HigherWins,
    /// Numerically lower value is the more urgent priority
    LowerWins,
}

impl PriorityOrder {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "higher_wins" | "higher" | "high" => Ok(Self::HigherWins),
            "lower_wins" | "lower" | "low" => Ok(Self::LowerWins),
            _ => Err(format!(
                "Invalid priority order '{}'. Valid: higher_wins, lower_wins",
                s
            )),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HigherWins => "higher_wins",
            Self::LowerWins => "lower_wins",
        }
    }
}

impl Serialize for PriorityOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PriorityOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Scheduling policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-come-first-served, strict input order
    Fcfs,
    /// Shortest-job-first, non-preemptive
    Sjf,
    /// Shortest-remaining-time-first, preemptive
    Srtf,
    /// Round robin with a fixed time quantum
    RoundRobin { quantum: Tick },
    /// Priority, non-preemptive, with a direction flag
    Priority { order: PriorityOrder },
}

impl Policy {
    /// Policy name for logging and display
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin { .. } => "round_robin",
            Self::Priority { .. } => "priority",
        }
    }

    /// Run this policy over a workload
    pub fn run(&self, workload: &Workload) -> SimResult<Schedule> {
        debug!(
            "simulating {} over {} processes",
            self.name(),
            workload.len()
        );
        let schedule = match *self {
            Self::Fcfs => fcfs::simulate(workload),
            Self::Sjf => sjf::simulate(workload),
            Self::Srtf => srtf::simulate(workload),
            Self::RoundRobin { quantum } => {
                if quantum == 0 {
                    return Err(SimulationError::ZeroQuantum);
                }
                round_robin::simulate(workload, quantum)
            }
            Self::Priority { order } => priority::simulate(workload, order),
        };
        debug!("{} produced {} results", self.name(), schedule.len());
        Ok(schedule)
    }
}

/// Simulate first-come-first-served dispatch in input order
pub fn run_fcfs(arrival: &[Tick], burst: &[Tick]) -> SimResult<Schedule> {
    Policy::Fcfs.run(&Workload::from_arrays(arrival, burst)?)
}

/// Simulate non-preemptive shortest-job-first
pub fn run_sjf(arrival: &[Tick], burst: &[Tick]) -> SimResult<Schedule> {
    Policy::Sjf.run(&Workload::from_arrays(arrival, burst)?)
}

/// Simulate preemptive shortest-remaining-time-first
pub fn run_srtf(arrival: &[Tick], burst: &[Tick]) -> SimResult<Schedule> {
    Policy::Srtf.run(&Workload::from_arrays(arrival, burst)?)
}

/// Simulate round robin with a fixed quantum
pub fn run_round_robin(arrival: &[Tick], burst: &[Tick], quantum: Tick) -> SimResult<Schedule> {
    Policy::RoundRobin { quantum }.run(&Workload::from_arrays(arrival, burst)?)
}

/// Simulate non-preemptive priority scheduling
pub fn run_priority(
    arrival: &[Tick],
    burst: &[Tick],
    priorities: &[i32],
    order: PriorityOrder,
) -> SimResult<Schedule> {
    Policy::Priority { order }.run(&Workload::with_priorities(arrival, burst, priorities)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_parsing() {
        assert_eq!(
            PriorityOrder::from_str("higher_wins").unwrap(),
            PriorityOrder::HigherWins
        );
        assert_eq!(
            PriorityOrder::from_str("LOWER").unwrap(),
            PriorityOrder::LowerWins
        );
        assert!(PriorityOrder::from_str("sideways").is_err());
    }

    #[test]
    fn test_priority_order_serde_round_trip() {
        let json = serde_json::to_string(&PriorityOrder::LowerWins).unwrap();
        assert_eq!(json, "\"lower_wins\"");
        let back: PriorityOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PriorityOrder::LowerWins);
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&Policy::RoundRobin { quantum: 3 }).unwrap();
        let back: Policy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Policy::RoundRobin { quantum: 3 });
    }

    #[test]
    fn test_zero_quantum_rejected_before_simulation() {
        assert_eq!(
            run_round_robin(&[0], &[1], 0).unwrap_err(),
            SimulationError::ZeroQuantum
        );
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Fcfs.name(), "fcfs");
        assert_eq!(Policy::RoundRobin { quantum: 2 }.name(), "round_robin");
        assert_eq!(
            Policy::Priority {
                order: PriorityOrder::HigherWins
            }
            .name(),
            "priority"
        );
    }
}
