/*!
 * Ready Queue Entries
 * Internal entry types and heap orderings for the simulators
 */

use super::PriorityOrder;
use crate::core::types::{Pid, Tick};
use crate::workload::Workload;
use std::cmp::Ordering;

/// A not-yet-finished process inside a simulation
#[derive(Debug, Clone)]
pub(super) struct ReadyEntry {
    /// Input slot, the final tie-break everywhere
    pub index: usize,
    pub pid: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    pub remaining: Tick,
    pub priority: i32,
    /// Clock value of the first dispatch, for response time accounting
    pub first_dispatch: Option<Tick>,
}

impl ReadyEntry {
    fn new(index: usize, pid: Pid, arrival: Tick, burst: Tick, priority: i32) -> Self {
        Self {
            index,
            pid,
            arrival,
            burst,
            remaining: burst,
            priority,
            first_dispatch: None,
        }
    }
}

/// Pending arrivals, admitted to a ready structure as the clock advances
///
/// Entries are ordered by (arrival, input index) so that simultaneous
/// arrivals are admitted in input order.
#[derive(Debug)]
pub(super) struct ArrivalQueue {
    pending: Vec<ReadyEntry>,
    cursor: usize,
}

impl ArrivalQueue {
    pub fn new(workload: &Workload) -> Self {
        let mut pending: Vec<ReadyEntry> = workload
            .processes()
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                ReadyEntry::new(
                    index,
                    spec.pid,
                    spec.arrival,
                    spec.burst,
                    spec.priority.unwrap_or_default(),
                )
            })
            .collect();
        pending.sort_by_key(|e| (e.arrival, e.index));
        Self { pending, cursor: 0 }
    }

    /// Clock value of the next pending arrival
    pub fn next_arrival(&self) -> Option<Tick> {
        self.pending.get(self.cursor).map(|e| e.arrival)
    }

    /// Admit every process that has arrived by `clock`, in (arrival, index) order
    pub fn admit_until(&mut self, clock: Tick, mut admit: impl FnMut(ReadyEntry)) {
        while let Some(entry) = self.pending.get(self.cursor) {
            if entry.arrival > clock {
                break;
            }
            admit(entry.clone());
            self.cursor += 1;
        }
    }

    /// Check whether every process has been admitted
    pub fn is_drained(&self) -> bool {
        self.cursor == self.pending.len()
    }
}

/// Max-heap wrapper that pops the shortest burst first
///
/// Ties fall through to earliest arrival, then input index.
#[derive(Debug, Clone)]
pub(super) struct ShortestJob(pub ReadyEntry);

impl PartialEq for ShortestJob {
    fn eq(&self, other: &Self) -> bool {
        self.0.pid == other.0.pid
    }
}

impl Eq for ShortestJob {}

impl Ord for ShortestJob {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so every comparison is reversed
        other
            .0
            .burst
            .cmp(&self.0.burst)
            .then_with(|| other.0.arrival.cmp(&self.0.arrival))
            .then_with(|| other.0.index.cmp(&self.0.index))
    }
}

impl PartialOrd for ShortestJob {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap wrapper that pops the shortest remaining time first
#[derive(Debug, Clone)]
pub(super) struct ShortestRemaining(pub ReadyEntry);

impl PartialEq for ShortestRemaining {
    fn eq(&self, other: &Self) -> bool {
        self.0.pid == other.0.pid
    }
}

impl Eq for ShortestRemaining {}

impl Ord for ShortestRemaining {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .remaining
            .cmp(&self.0.remaining)
            .then_with(|| other.0.arrival.cmp(&self.0.arrival))
            .then_with(|| other.0.index.cmp(&self.0.index))
    }
}

impl PartialOrd for ShortestRemaining {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap wrapper that pops the most urgent priority first
///
/// The direction flag decides whether a numerically higher or lower value
/// wins; ties fall through to arrival, burst, then input index.
#[derive(Debug, Clone)]
pub(super) struct Ranked(pub PriorityOrder, pub ReadyEntry);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.1.pid == other.1.pid
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        let primary = match self.0 {
            PriorityOrder::HigherWins => self.1.priority.cmp(&other.1.priority),
            PriorityOrder::LowerWins => other.1.priority.cmp(&self.1.priority),
        };
        primary
            .then_with(|| other.1.arrival.cmp(&self.1.arrival))
            .then_with(|| other.1.burst.cmp(&self.1.burst))
            .then_with(|| other.1.index.cmp(&self.1.index))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(index: usize, arrival: Tick, burst: Tick, priority: i32) -> ReadyEntry {
        ReadyEntry::new(index, (index + 1) as Pid, arrival, burst, priority)
    }

    #[test]
    fn test_shortest_job_pops_minimum_burst() {
        let mut heap = BinaryHeap::new();
        heap.push(ShortestJob(entry(0, 0, 6, 0)));
        heap.push(ShortestJob(entry(1, 0, 2, 0)));
        heap.push(ShortestJob(entry(2, 0, 4, 0)));

        let order: Vec<Tick> = std::iter::from_fn(|| heap.pop().map(|e| e.0.burst)).collect();
        assert_eq!(order, vec![2, 4, 6]);
    }

    #[test]
    fn test_shortest_job_ties_break_by_arrival_then_index() {
        let mut heap = BinaryHeap::new();
        heap.push(ShortestJob(entry(2, 1, 3, 0)));
        heap.push(ShortestJob(entry(1, 0, 3, 0)));
        heap.push(ShortestJob(entry(0, 1, 3, 0)));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.0.index)).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_shortest_remaining_tracks_remaining_not_burst() {
        let mut long_but_almost_done = entry(0, 0, 9, 0);
        long_but_almost_done.remaining = 1;

        let mut heap = BinaryHeap::new();
        heap.push(ShortestRemaining(long_but_almost_done));
        heap.push(ShortestRemaining(entry(1, 0, 2, 0)));

        assert_eq!(heap.pop().map(|e| e.0.index), Some(0));
    }

    #[test]
    fn test_ranked_direction() {
        let mut heap = BinaryHeap::new();
        heap.push(Ranked(PriorityOrder::HigherWins, entry(0, 0, 2, 1)));
        heap.push(Ranked(PriorityOrder::HigherWins, entry(1, 0, 2, 5)));
        assert_eq!(heap.pop().map(|e| e.1.priority), Some(5));

        let mut heap = BinaryHeap::new();
        heap.push(Ranked(PriorityOrder::LowerWins, entry(0, 0, 2, 1)));
        heap.push(Ranked(PriorityOrder::LowerWins, entry(1, 0, 2, 5)));
        assert_eq!(heap.pop().map(|e| e.1.priority), Some(1));
    }

    #[test]
    fn test_ranked_ties_break_by_arrival_burst_index() {
        let mut heap = BinaryHeap::new();
        heap.push(Ranked(PriorityOrder::HigherWins, entry(0, 2, 5, 3)));
        heap.push(Ranked(PriorityOrder::HigherWins, entry(1, 2, 4, 3)));
        heap.push(Ranked(PriorityOrder::HigherWins, entry(2, 1, 9, 3)));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.1.index)).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_arrival_queue_admits_in_order() {
        let workload = Workload::from_arrays(&[4, 0, 0], &[1, 1, 1]).unwrap();
        let mut arrivals = ArrivalQueue::new(&workload);
        assert_eq!(arrivals.next_arrival(), Some(0));

        let mut admitted = Vec::new();
        arrivals.admit_until(0, |e| admitted.push(e.pid));
        assert_eq!(admitted, vec![2, 3]);
        assert_eq!(arrivals.next_arrival(), Some(4));
        assert!(!arrivals.is_drained());

        arrivals.admit_until(10, |e| admitted.push(e.pid));
        assert_eq!(admitted, vec![2, 3, 1]);
        assert!(arrivals.is_drained());
    }
}
