/*!
 * Schedule Metrics
 * Per-process timing results and aggregate statistics
 */

use crate::core::types::{Pid, SimResult, Tick};
use crate::core::SimulationError;
use serde::{Deserialize, Serialize};

/// Timing metrics for one completed process
///
/// Turnaround and waiting are derived from the completion stamp at
/// construction, so the identities `turnaround == completion - arrival` and
/// `waiting == turnaround - burst` hold for every record. Response time is
/// populated for round robin schedules only, stamped at first dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub priority: Option<i32>,
    pub completion: Tick,
    pub turnaround: Tick,
    pub waiting: Tick,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub response: Option<Tick>,
}

impl ProcessMetrics {
    /// Record a completion at the given clock value
    pub(crate) fn record(
        pid: Pid,
        arrival: Tick,
        burst: Tick,
        priority: Option<i32>,
        completion: Tick,
        response: Option<Tick>,
    ) -> Self {
        let turnaround = completion - arrival;
        Self {
            pid,
            arrival,
            burst,
            priority,
            completion,
            turnaround,
            waiting: turnaround - burst,
            response,
        }
    }
}

/// Aggregate statistics over a full schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Aggregates {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub avg_response: Option<f64>,
    pub schedule_length: Tick,
    pub throughput: f64,
}

/// An ordered set of per-process results, one per input process
///
/// Results are ordered by completion, which is not necessarily input order.
/// A schedule is built fresh by each simulation call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    results: Vec<ProcessMetrics>,
}

impl Schedule {
    pub(crate) fn new(results: Vec<ProcessMetrics>) -> Self {
        Self { results }
    }

    /// Number of completed processes
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the schedule is empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in completion order
    pub fn results(&self) -> &[ProcessMetrics] {
        &self.results
    }

    /// Look up the result for a process
    pub fn process(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Compute aggregate statistics over the schedule
    ///
    /// Fails with `DegenerateSchedule` when the span from earliest arrival
    /// to latest completion is zero, since throughput divides by it.
    pub fn aggregates(&self) -> SimResult<Aggregates> {
        let n = self.results.len();
        let span_start = self.results.iter().map(|r| r.arrival).min().unwrap_or(0);
        let span_end = self.results.iter().map(|r| r.completion).max().unwrap_or(0);
        let schedule_length = span_end - span_start;
        if schedule_length == 0 {
            return Err(SimulationError::DegenerateSchedule);
        }

        let waiting_total: Tick = self.results.iter().map(|r| r.waiting).sum();
        let turnaround_total: Tick = self.results.iter().map(|r| r.turnaround).sum();
        let responses: Vec<Tick> = self.results.iter().filter_map(|r| r.response).collect();

        Ok(Aggregates {
            avg_waiting: waiting_total as f64 / n as f64,
            avg_turnaround: turnaround_total as f64 / n as f64,
            avg_response: if responses.is_empty() {
                None
            } else {
                Some(responses.iter().sum::<Tick>() as f64 / responses.len() as f64)
            },
            schedule_length,
            throughput: n as f64 / schedule_length as f64,
        })
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ProcessMetrics;
    type IntoIter = std::slice::Iter<'a, ProcessMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
