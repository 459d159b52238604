/*!
 * Workload Types
 * Validated, immutable process input set for the simulator
 */

use crate::core::types::{Pid, SimResult, Tick};
use crate::core::SimulationError;
use serde::{Deserialize, Serialize};

/// A single process description
///
/// Pids are 1-based and correspond to input order. The priority field is
/// only populated for priority-scheduled workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub priority: Option<i32>,
}

/// A fixed, fully-known set of processes
///
/// Construction validates the whole set up front; a `Workload` that exists
/// is always simulatable. The set never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Build a workload from parallel arrival and burst arrays
    ///
    /// Pids are assigned 1..=N in array order. Fails when the arrays
    /// disagree in length, the set is empty, or any burst is zero.
    pub fn from_arrays(arrival: &[Tick], burst: &[Tick]) -> SimResult<Self> {
        Self::build(arrival, burst, None)
    }

    /// Build a workload with per-process priorities
    pub fn with_priorities(
        arrival: &[Tick],
        burst: &[Tick],
        priorities: &[i32],
    ) -> SimResult<Self> {
        Self::build(arrival, burst, Some(priorities))
    }

    fn build(arrival: &[Tick], burst: &[Tick], priorities: Option<&[i32]>) -> SimResult<Self> {
        let expected = arrival.len();
        if expected == 0 {
            return Err(SimulationError::EmptyWorkload);
        }
        if burst.len() != expected {
            return Err(SimulationError::LengthMismatch {
                input: "burst".into(),
                expected,
                found: burst.len(),
            });
        }
        if let Some(priorities) = priorities {
            if priorities.len() != expected {
                return Err(SimulationError::LengthMismatch {
                    input: "priority".into(),
                    expected,
                    found: priorities.len(),
                });
            }
        }

        let processes = arrival
            .iter()
            .zip(burst)
            .enumerate()
            .map(|(i, (&arrival, &burst))| {
                let pid = (i + 1) as Pid;
                if burst == 0 {
                    return Err(SimulationError::ZeroBurst(pid));
                }
                Ok(ProcessSpec {
                    pid,
                    arrival,
                    burst,
                    priority: priorities.map(|p| p[i]),
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self { processes })
    }

    /// Number of processes in the workload
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Check if the workload is empty (never true for a constructed workload)
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Processes in input order
    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }
}
