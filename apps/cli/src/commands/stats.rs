//! Progress totals from the persisted snapshots.

use std::path::Path;

use chrono::Local;
use trainer_core::{HistoryLog, HistoryRepository, ProgressRepository, DEFAULT_HISTORY_CAP};

use crate::storage::{JsonHistoryRepository, JsonProgressRepository};

pub fn run(data_dir: &Path) -> anyhow::Result<()> {
    let store = JsonProgressRepository::new(data_dir).load();
    let history = HistoryLog::from_entries(
        JsonHistoryRepository::new(data_dir).load(),
        DEFAULT_HISTORY_CAP,
    );

    let today = Local::now().date_naive();
    let total_lapses: u32 = store.iter().map(|e| e.lapses).sum();
    let total_corrects: u32 = store.iter().map(|e| e.corrects).sum();

    println!("Tracked sentences: {}", store.len());
    println!("Due today:         {}", store.due_count(today));
    println!("Total correct:     {}", total_corrects);
    println!("Total lapses:      {}", total_lapses);
    println!(
        "Today:             {} correct, {} wrong",
        history.correct_on(today),
        history.wrong_on(today)
    );
    println!("History entries:   {}", history.len());
    Ok(())
}
