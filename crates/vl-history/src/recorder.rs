//! Bounded, most-recent-first snapshot log.

use std::collections::VecDeque;

use uuid::Uuid;
use vl_model::Snapshot;

pub const DEFAULT_CAPACITY: usize = 50;

/// Keeps at most `capacity` snapshots; recording past that drops the oldest.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecorder {
    capacity: usize,
    // front is the most recent
    entries: VecDeque<Snapshot>,
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryRecorder {
    /// A zero capacity is raised to one so the latest record is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Rebuild from a most-recent-first list, keeping the newest `capacity`.
    pub fn from_recent(capacity: usize, snapshots: Vec<Snapshot>) -> Self {
        let mut recorder = Self::new(capacity);
        recorder.entries = snapshots.into_iter().take(recorder.capacity).collect();
        recorder
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&mut self, snapshot: Snapshot) {
        self.entries.push_front(snapshot);
        while self.entries.len() > self.capacity {
            if let Some(dropped) = self.entries.pop_back() {
                tracing::debug!(snapshot = %dropped.id, "history full, dropped oldest entry");
            }
        }
    }

    /// Most recent first.
    pub fn list(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.front()
    }

    pub fn get(&self, id: Uuid) -> Option<&Snapshot> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_model::{OutputAssignment, VariableAssignment};

    fn snap(def: &str) -> Snapshot {
        Snapshot::new(def, VariableAssignment::default(), OutputAssignment::new())
    }

    #[test]
    fn newest_first() {
        let mut h = HistoryRecorder::new(5);
        h.record(snap("a"));
        h.record(snap("b"));
        let ids: Vec<&str> = h.list().map(|s| s.definition_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(h.latest().map(|s| s.definition_id.as_str()), Some("b"));
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut h = HistoryRecorder::new(3);
        let first = snap("s0");
        let first_id = first.id;
        h.record(first);
        for i in 1..=3 {
            h.record(snap(&format!("s{i}")));
        }
        assert_eq!(h.len(), 3);
        assert!(h.get(first_id).is_none());
        let ids: Vec<&str> = h.list().map(|s| s.definition_id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s2", "s1"]);
    }

    #[test]
    fn from_recent_truncates_the_tail() {
        let list: Vec<Snapshot> = (0..10).map(|i| snap(&format!("s{i}"))).collect();
        let h = HistoryRecorder::from_recent(4, list);
        let ids: Vec<&str> = h.list().map(|s| s.definition_id.as_str()).collect();
        assert_eq!(ids, vec!["s0", "s1", "s2", "s3"]);
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut h = HistoryRecorder::new(0);
        h.record(snap("a"));
        h.record(snap("b"));
        assert_eq!(h.len(), 1);
        assert_eq!(h.capacity(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut h = HistoryRecorder::default();
        h.record(snap("a"));
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.capacity(), DEFAULT_CAPACITY);
    }
}
