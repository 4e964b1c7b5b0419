//! First-occurrence record of observed world states

use std::collections::hash_map::Entry;

use ahash::AHashMap;

use crate::core::Generation;

/// Maps world-state hashes to the first generation each state was seen at
///
/// Grows for the length of the run; bounded in practice by the configured
/// iteration limit.
#[derive(Debug, Default)]
pub struct StateHistory {
    first_seen: AHashMap<u64, Generation>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `hash` as first seen at `generation` if it is new
    ///
    /// Returns the earlier generation if the hash was already recorded; the
    /// stored value is never overwritten, so repeats keep reporting the
    /// first occurrence.
    pub fn record(&mut self, hash: u64, generation: Generation) -> Option<Generation> {
        match self.first_seen.entry(hash) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(generation);
                None
            }
        }
    }

    /// Number of distinct states recorded so far
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_reports_first_occurrence() {
        let mut history = StateHistory::new();
        assert_eq!(history.record(42, 0), None);
        assert_eq!(history.record(42, 7), Some(0));
        // still the first occurrence, not the latest
        assert_eq!(history.record(42, 9), Some(0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_distinct_hashes_recorded_separately() {
        let mut history = StateHistory::new();
        assert_eq!(history.record(1, 0), None);
        assert_eq!(history.record(2, 1), None);
        assert_eq!(history.len(), 2);
    }
}
