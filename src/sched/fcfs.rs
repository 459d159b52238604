/*!
 * First-Come-First-Served
 * Strict input-order dispatch, each process runs to completion
 */

use crate::metrics::{ProcessMetrics, Schedule};
use crate::workload::Workload;
use log::trace;

/// Simulate FCFS over the workload
///
/// Dispatch follows input order, not an arrival-time sort: when the next
/// slot's process has not arrived yet, the clock jumps to its arrival.
pub(super) fn simulate(workload: &Workload) -> Schedule {
    let mut clock = 0;
    let mut results = Vec::with_capacity(workload.len());

    for spec in workload.processes() {
        if clock < spec.arrival {
            clock = spec.arrival;
        }
        let completion = clock + spec.burst;
        trace!(
            "fcfs: pid {} dispatched at {}, completes at {}",
            spec.pid,
            clock,
            completion
        );
        results.push(ProcessMetrics::record(
            spec.pid,
            spec.arrival,
            spec.burst,
            spec.priority,
            completion,
            None,
        ));
        clock = completion;
    }

    Schedule::new(results)
}
