/*!
 * Priority Scheduling
 * Non-preemptive selection by priority with a configurable direction
 */

use super::entry::{ArrivalQueue, Ranked};
use super::PriorityOrder;
use crate::metrics::{ProcessMetrics, Schedule};
use crate::workload::Workload;
use log::trace;
use std::collections::BinaryHeap;

/// Simulate non-preemptive priority scheduling over the workload
///
/// The direction flag decides whether a numerically higher or lower value is
/// the more urgent priority. Ties break by arrival, then burst, then input
/// index. Same structure as SJF with priority as the primary sort key.
pub(super) fn simulate(workload: &Workload, order: PriorityOrder) -> Schedule {
    let mut arrivals = ArrivalQueue::new(workload);
    let mut ready: BinaryHeap<Ranked> = BinaryHeap::with_capacity(workload.len());
    let mut results = Vec::with_capacity(workload.len());
    let mut clock = 0;

    while !arrivals.is_drained() || !ready.is_empty() {
        arrivals.admit_until(clock, |e| ready.push(Ranked(order, e)));

        let Some(Ranked(_, entry)) = ready.pop() else {
            if let Some(next) = arrivals.next_arrival() {
                clock = next;
            }
            continue;
        };

        let completion = clock + entry.burst;
        trace!(
            "priority: pid {} (priority {}) dispatched at {}, completes at {}",
            entry.pid,
            entry.priority,
            clock,
            completion
        );
        results.push(ProcessMetrics::record(
            entry.pid,
            entry.arrival,
            entry.burst,
            Some(entry.priority),
            completion,
            None,
        ));
        clock = completion;
    }

    Schedule::new(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_wins_direction() {
        let workload = Workload::with_priorities(&[0, 0, 0], &[3, 3, 3], &[1, 5, 3]).unwrap();
        let schedule = simulate(&workload, PriorityOrder::HigherWins);
        let order: Vec<u32> = schedule.results().iter().map(|r| r.pid).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_lower_wins_direction() {
        let workload = Workload::with_priorities(&[0, 0, 0], &[3, 3, 3], &[1, 5, 3]).unwrap();
        let schedule = simulate(&workload, PriorityOrder::LowerWins);
        let order: Vec<u32> = schedule.results().iter().map(|r| r.pid).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn test_equal_priority_falls_through_to_arrival_then_index() {
        let workload = Workload::with_priorities(&[1, 0, 1], &[2, 2, 2], &[4, 4, 4]).unwrap();
        let schedule = simulate(&workload, PriorityOrder::HigherWins);
        let order: Vec<u32> = schedule.results().iter().map(|r| r.pid).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_priority_carried_into_results() {
        let workload = Workload::with_priorities(&[0], &[4], &[-2]).unwrap();
        let schedule = simulate(&workload, PriorityOrder::LowerWins);
        assert_eq!(schedule.results()[0].priority, Some(-2));
    }

    #[test]
    fn test_no_preemption_by_later_urgent_arrival() {
        // An urgent process arriving mid-run waits for the current one.
        let workload = Workload::with_priorities(&[0, 1], &[5, 2], &[1, 9]).unwrap();
        let schedule = simulate(&workload, PriorityOrder::HigherWins);
        assert_eq!(schedule.results()[0].pid, 1);
        assert_eq!(schedule.results()[0].completion, 5);
        assert_eq!(schedule.results()[1].completion, 7);
    }
}
