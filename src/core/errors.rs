/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors with serialization support
///
/// Every variant is raised before the simulated clock starts; a simulation
/// either produces a full result set or nothing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("{input} array has {found} entries, expected {expected}")]
    #[diagnostic(
        code(workload::length_mismatch),
        help("Arrival, burst, and priority arrays must all have one entry per process.")
    )]
    LengthMismatch {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("workload is empty")]
    #[diagnostic(
        code(workload::empty),
        help("At least one process is required to run a simulation.")
    )]
    EmptyWorkload,

    #[error("process {0} has a zero burst time")]
    #[diagnostic(
        code(workload::zero_burst),
        help("Every process must require a positive amount of CPU time.")
    )]
    ZeroBurst(Pid),

    #[error("round robin quantum must be positive")]
    #[diagnostic(
        code(sched::zero_quantum),
        help("Pick a quantum of at least one time unit.")
    )]
    ZeroQuantum,

    #[error("schedule length is zero, throughput is undefined")]
    #[diagnostic(
        code(metrics::degenerate_schedule),
        help("Aggregates divide by the schedule length; a zero-length schedule has no meaningful throughput.")
    )]
    DegenerateSchedule,
}
