//! Newest-first attempt history with a bounded ring.

use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::types::HistoryEntry;

/// Default ring bound.
pub const DEFAULT_HISTORY_CAP: usize = 300;

/// Append-only log of attempts, newest first, oldest dropped past the cap.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    cap: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

impl HistoryLog {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap,
        }
    }

    /// Rebuild from a persisted snapshot (assumed newest first), trimming
    /// anything past the cap.
    pub fn from_entries(entries: Vec<HistoryEntry>, cap: usize) -> Self {
        let mut log = Self {
            entries: entries.into(),
            cap,
        };
        log.entries.truncate(cap);
        log
    }

    /// Record one attempt; the oldest entry falls off once full.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.cap);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Snapshot for persistence, newest first.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn correct_on(&self, day: NaiveDate) -> usize {
        self.on_day(day).filter(|e| e.was_correct).count()
    }

    pub fn wrong_on(&self, day: NaiveDate) -> usize {
        self.on_day(day).filter(|e| !e.was_correct).count()
    }

    fn on_day(&self, day: NaiveDate) -> impl Iterator<Item = &HistoryEntry> {
        self.entries
            .iter()
            .filter(move |e| e.time.date_naive() == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn entry(item_id: i64, was_correct: bool) -> HistoryEntry {
        HistoryEntry {
            item_id,
            prompt: "I see".into(),
            answer: "eu vejo".into(),
            expected: "eu vejo".into(),
            was_correct,
            was_skipped: false,
            time: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut log = HistoryLog::new(10);
        log.record(entry(1, true));
        log.record(entry(2, false));

        let ids: Vec<i64> = log.iter().map(|e| e.item_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn ring_evicts_oldest_past_cap() {
        let mut log = HistoryLog::new(500);
        for i in 0..501 {
            log.record(entry(i, true));
        }

        assert_eq!(log.len(), 500);
        // Newest first; entry 0 was evicted.
        assert_eq!(log.iter().next().unwrap().item_id, 500);
        assert_eq!(log.iter().last().unwrap().item_id, 1);
    }

    #[test]
    fn from_entries_trims_past_cap() {
        let entries: Vec<HistoryEntry> = (0..400).map(|i| entry(i, true)).collect();
        let log = HistoryLog::from_entries(entries, 300);
        assert_eq!(log.len(), 300);
        assert_eq!(log.iter().next().unwrap().item_id, 0);
    }

    #[test]
    fn day_counters_split_correct_and_wrong() {
        let mut log = HistoryLog::new(10);
        log.record(entry(1, true));
        log.record(entry(2, true));
        log.record(entry(3, false));

        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(log.correct_on(day), 2);
        assert_eq!(log.wrong_on(day), 1);

        let other = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(log.correct_on(other), 0);
    }

    #[test]
    fn snapshot_round_trips() {
        let mut log = HistoryLog::new(10);
        log.record(entry(1, true));
        log.record(entry(2, false));

        let restored = HistoryLog::from_entries(log.snapshot(), 10);
        assert_eq!(restored.snapshot(), log.snapshot());
    }
}
