/*!
 * Shortest-Remaining-Time-First
 * Preemptive minimum-remaining selection, re-decided at every arrival
 */

use super::entry::{ArrivalQueue, ShortestRemaining};
use crate::metrics::{ProcessMetrics, Schedule};
use crate::workload::Workload;
use log::trace;
use std::collections::BinaryHeap;

/// Simulate preemptive SRTF over the workload
///
/// The running process is re-decided at unit granularity in the policy's
/// definition; since the ready set only changes at arrivals and completions,
/// and the running process strictly shrinks its own key, the chosen process
/// runs unchallenged until the next arrival or its completion. Ties break by
/// arrival, then input index.
pub(super) fn simulate(workload: &Workload) -> Schedule {
    let mut arrivals = ArrivalQueue::new(workload);
    let mut ready: BinaryHeap<ShortestRemaining> = BinaryHeap::with_capacity(workload.len());
    let mut results = Vec::with_capacity(workload.len());
    let mut clock = 0;

    while !arrivals.is_drained() || !ready.is_empty() {
        arrivals.admit_until(clock, |e| ready.push(ShortestRemaining(e)));

        let Some(ShortestRemaining(mut entry)) = ready.pop() else {
            if let Some(next) = arrivals.next_arrival() {
                clock = next;
            }
            continue;
        };

        match arrivals.next_arrival().filter(|&t| t < clock + entry.remaining) {
            Some(preempt_at) => {
                entry.remaining -= preempt_at - clock;
                trace!(
                    "srtf: pid {} preempted at {}, {} remaining",
                    entry.pid,
                    preempt_at,
                    entry.remaining
                );
                clock = preempt_at;
                ready.push(ShortestRemaining(entry));
            }
            None => {
                clock += entry.remaining;
                trace!("srtf: pid {} completes at {}", entry.pid, clock);
                results.push(ProcessMetrics::record(
                    entry.pid,
                    entry.arrival,
                    entry.burst,
                    None,
                    clock,
                    None,
                ));
            }
        }
    }

    Schedule::new(results)
}
