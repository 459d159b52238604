/*!
 * Shortest-Job-First
 * Non-preemptive minimum-burst selection over arrived processes
 */

use super::entry::{ArrivalQueue, ShortestJob};
use crate::metrics::{ProcessMetrics, Schedule};
use crate::workload::Workload;
use log::trace;
use std::collections::BinaryHeap;

/// Simulate non-preemptive SJF over the workload
///
/// At every decision point the arrived process with the minimum burst runs
/// to completion; ties break by arrival, then input index. When nothing has
/// arrived the clock jumps to the next arrival.
pub(super) fn simulate(workload: &Workload) -> Schedule {
    let mut arrivals = ArrivalQueue::new(workload);
    let mut ready: BinaryHeap<ShortestJob> = BinaryHeap::with_capacity(workload.len());
    let mut results = Vec::with_capacity(workload.len());
    let mut clock = 0;

    while !arrivals.is_drained() || !ready.is_empty() {
        arrivals.admit_until(clock, |e| ready.push(ShortestJob(e)));

        let Some(ShortestJob(entry)) = ready.pop() else {
            if let Some(next) = arrivals.next_arrival() {
                clock = next;
            }
            continue;
        };

        let completion = clock + entry.burst;
        trace!(
            "sjf: pid {} (burst {}) dispatched at {}, completes at {}",
            entry.pid,
            entry.burst,
            clock,
            completion
        );
        results.push(ProcessMetrics::record(
            entry.pid,
            entry.arrival,
            entry.burst,
            None,
            completion,
            None,
        ));
        clock = completion;
    }

    Schedule::new(results)
}
