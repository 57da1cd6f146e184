//! JSON file persistence for progress and history snapshots.
//!
//! Loads never fail: a missing or corrupt snapshot hydrates as empty state
//! (with a warning) and the session starts over. Saves go through a
//! temp-file rename so a crash mid-write cannot corrupt the snapshot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use trainer_core::{HistoryEntry, HistoryRepository, PersistError, ProgressRepository, ProgressStore};

pub const PROGRESS_FILE: &str = "progress.json";
pub const HISTORY_FILE: &str = "history.json";

pub struct JsonProgressRepository {
    path: PathBuf,
}

impl JsonProgressRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PROGRESS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressRepository for JsonProgressRepository {
    fn load(&self) -> ProgressStore {
        match read_snapshot(&self.path) {
            Some(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt progress snapshot, starting empty");
                ProgressStore::new()
            }),
            None => ProgressStore::new(),
        }
    }

    fn save(&self, store: &ProgressStore) -> Result<(), PersistError> {
        write_snapshot(&self.path, &serde_json::to_string_pretty(store)?)
    }
}

pub struct JsonHistoryRepository {
    path: PathBuf,
}

impl JsonHistoryRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(HISTORY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryRepository for JsonHistoryRepository {
    fn load(&self) -> Vec<HistoryEntry> {
        match read_snapshot(&self.path) {
            Some(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt history snapshot, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), PersistError> {
        write_snapshot(&self.path, &serde_json::to_string_pretty(entries)?)
    }
}

fn read_snapshot(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable snapshot, starting empty");
            None
        }
    }
}

fn write_snapshot(path: &Path, contents: &str) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use trainer_core::SentenceItem;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn progress_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonProgressRepository::new(dir.path());

        let mut store = ProgressStore::new();
        let items = vec![SentenceItem {
            id: 1,
            english: "I see".into(),
            reference: "eu vejo".into(),
            level: None,
        }];
        store.ensure_all(&items, today());
        store.entry_mut(1, today()).repetitions = 2;

        repo.save(&store).unwrap();
        assert_eq!(repo.load(), store);
    }

    #[test]
    fn missing_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonProgressRepository::new(dir.path()).load().is_empty());
        assert!(JsonHistoryRepository::new(dir.path()).load().is_empty());
    }

    #[test]
    fn corrupt_progress_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonProgressRepository::new(dir.path());
        fs::write(repo.path(), "{ definitely not json").unwrap();

        assert!(repo.load().is_empty());
    }

    #[test]
    fn history_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonHistoryRepository::new(dir.path());

        let entries = vec![HistoryEntry {
            item_id: 1,
            prompt: "I see".into(),
            answer: "eu veio".into(),
            expected: "eu vejo".into(),
            was_correct: true,
            was_skipped: false,
            time: chrono::Utc::now(),
        }];
        repo.save(&entries).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].item_id, 1);
        assert_eq!(loaded[0].answer, "eu veio");
    }
}
