//! Progress store: scheduling metadata keyed by sentence id.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::types::{HistoryEntry, ScheduleEntry, SentenceItem};

/// One `ScheduleEntry` per known sentence id. Entries are created lazily on
/// first encounter and never deleted except by a full reset.
///
/// Serializes transparently as the plain id → entry map, so a snapshot
/// round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressStore {
    entries: HashMap<i64, ScheduleEntry>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for `id`, created with defaults (due today) if absent.
    pub fn entry_mut(&mut self, id: i64, today: NaiveDate) -> &mut ScheduleEntry {
        self.entries
            .entry(id)
            .or_insert_with(|| ScheduleEntry::new(id, today))
    }

    pub fn get(&self, id: i64) -> Option<&ScheduleEntry> {
        self.entries.get(&id)
    }

    /// Startup pass: make sure every dataset item has an entry.
    pub fn ensure_all(&mut self, items: &[SentenceItem], today: NaiveDate) {
        for item in items {
            self.entry_mut(item.id, today);
        }
    }

    pub fn due_count(&self, today: NaiveDate) -> usize {
        self.entries.values().filter(|e| e.is_due(today)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Persistence seam for the progress store.
///
/// `load` never fails: corrupt or missing data hydrates as an empty store
/// and the session starts over rather than crashing.
pub trait ProgressRepository {
    fn load(&self) -> ProgressStore;
    fn save(&self, store: &ProgressStore) -> Result<(), PersistError>;
}

/// Persistence seam for the attempt history, newest first.
pub trait HistoryRepository {
    fn load(&self) -> Vec<HistoryEntry>;
    fn save(&self, entries: &[HistoryEntry]) -> Result<(), PersistError>;
}
