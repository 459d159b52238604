/*!
 * Round Robin
 * FIFO slicing with a fixed quantum and response time accounting
 */

use super::entry::ArrivalQueue;
use crate::core::types::Tick;
use crate::metrics::{ProcessMetrics, Schedule};
use crate::workload::Workload;
use log::trace;
use std::collections::VecDeque;

/// Simulate round robin over the workload with a fixed quantum
///
/// Each slice runs min(quantum, remaining). When a slice ends, processes
/// that arrived during it are admitted to the queue before the preempted
/// process is re-appended, so fresh arrivals at the same instant keep FIFO
/// fairness. Response time is stamped the first time a process is
/// dispatched.
pub(super) fn simulate(workload: &Workload, quantum: Tick) -> Schedule {
    let mut arrivals = ArrivalQueue::new(workload);
    let mut queue = VecDeque::with_capacity(workload.len());
    let mut results = Vec::with_capacity(workload.len());
    let mut clock = 0;

    while !arrivals.is_drained() || !queue.is_empty() {
        arrivals.admit_until(clock, |e| queue.push_back(e));

        let Some(mut entry) = queue.pop_front() else {
            if let Some(next) = arrivals.next_arrival() {
                clock = next;
            }
            continue;
        };

        if entry.first_dispatch.is_none() {
            entry.first_dispatch = Some(clock);
        }

        let slice = quantum.min(entry.remaining);
        entry.remaining -= slice;
        clock += slice;
        trace!(
            "rr: pid {} ran {} units to {}, {} remaining",
            entry.pid,
            slice,
            clock,
            entry.remaining
        );

        // Arrivals during the slice enter the queue ahead of the preempted
        // process.
        arrivals.admit_until(clock, |e| queue.push_back(e));

        if entry.remaining == 0 {
            let response = entry.first_dispatch.map(|t| t - entry.arrival);
            results.push(ProcessMetrics::record(
                entry.pid,
                entry.arrival,
                entry.burst,
                None,
                clock,
                response,
            ));
        } else {
            queue.push_back(entry);
        }
    }

    Schedule::new(results)
}
