//! Static worker-to-dataset assignment.
//!
//! Slot `i` takes dataset `i`. Slots past the last dataset stay idle, and
//! datasets past the last slot are never processed. The table is plain data so
//! it can be inspected and tested without spawning anything.

/// Mapping from worker slot to an optional dataset index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    table: Vec<Option<usize>>,
    dataset_count: usize,
}

impl Assignment {
    pub fn new(worker_count: usize, dataset_count: usize) -> Self {
        let table = (0..worker_count)
            .map(|slot| (slot < dataset_count).then_some(slot))
            .collect();

        Self {
            table,
            dataset_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.table.len()
    }

    /// Dataset index for `slot`, or `None` if the slot is idle or out of range.
    pub fn dataset_for(&self, slot: usize) -> Option<usize> {
        self.table.get(slot).copied().flatten()
    }

    /// Every slot with its optional dataset index, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.table.iter().copied().enumerate()
    }

    pub fn idle_slots(&self) -> Vec<usize> {
        self.slots()
            .filter_map(|(slot, dataset)| dataset.is_none().then_some(slot))
            .collect()
    }

    /// Dataset indices that no slot covers.
    pub fn unprocessed_datasets(&self) -> Vec<usize> {
        (self.worker_count()..self.dataset_count).collect()
    }

    pub fn is_all_idle(&self) -> bool {
        self.table.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_workers_than_datasets() {
        let assignment = Assignment::new(4, 3);
        assert_eq!(assignment.dataset_for(0), Some(0));
        assert_eq!(assignment.dataset_for(1), Some(1));
        assert_eq!(assignment.dataset_for(2), Some(2));
        assert_eq!(assignment.dataset_for(3), None);
        assert_eq!(assignment.idle_slots(), vec![3]);
        assert!(assignment.unprocessed_datasets().is_empty());
    }

    #[test]
    fn test_fewer_workers_than_datasets() {
        let assignment = Assignment::new(1, 3);
        assert_eq!(assignment.worker_count(), 1);
        assert_eq!(assignment.dataset_for(0), Some(0));
        assert_eq!(assignment.unprocessed_datasets(), vec![1, 2]);
        assert!(assignment.idle_slots().is_empty());
    }

    #[test]
    fn test_exact_fit() {
        let assignment = Assignment::new(3, 3);
        let slots: Vec<_> = assignment.slots().collect();
        assert_eq!(slots, vec![(0, Some(0)), (1, Some(1)), (2, Some(2))]);
    }

    #[test]
    fn test_no_datasets_is_all_idle() {
        let assignment = Assignment::new(3, 0);
        assert!(assignment.is_all_idle());
        assert_eq!(assignment.idle_slots(), vec![0, 1, 2]);
    }

    #[test]
    fn test_out_of_range_slot() {
        assert_eq!(Assignment::new(2, 5).dataset_for(7), None);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(Assignment::new(5, 3), Assignment::new(5, 3));
    }
}
