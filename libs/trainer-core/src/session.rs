//! A review session: one user drilling one dataset.
//!
//! The session owns the dataset, progress store, history ring, level
//! controller, scheduler, and random source, and threads them through each
//! draw/answer cycle. All state mutation happens here, on the calling
//! thread; the caller persists the store and history after each round.

use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SessionError;
use crate::history::HistoryLog;
use crate::level::{LevelChange, LevelController};
use crate::matching::{is_acceptable_match, MatchConfig};
use crate::queue::select_next;
use crate::scheduler::Scheduler;
use crate::store::ProgressStore;
use crate::types::{HistoryEntry, Level, ReviewOutcome, SentenceItem, TrainerSettings};

/// Aggregate counters for the stats view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionStats {
    pub total_items: usize,
    pub due_today: usize,
    pub correct_today: usize,
    pub wrong_today: usize,
}

pub struct ReviewSession {
    items: Vec<SentenceItem>,
    store: ProgressStore,
    history: HistoryLog,
    levels: LevelController,
    scheduler: Scheduler,
    matching: MatchConfig,
    rng: StdRng,
    /// Index into `items` of the item awaiting an answer.
    current: Option<usize>,
    last_level_change: LevelChange,
}

impl ReviewSession {
    /// Build a session over a loaded dataset and hydrated state. Ensures
    /// every item has a schedule entry, so a fresh store starts with the
    /// whole dataset due.
    pub fn new(
        items: Vec<SentenceItem>,
        store: ProgressStore,
        history: HistoryLog,
        settings: TrainerSettings,
        today: NaiveDate,
    ) -> Self {
        Self::with_rng(items, store, history, settings, today, StdRng::from_entropy())
    }

    /// Like [`ReviewSession::new`] with a fixed selection seed.
    pub fn with_seed(
        items: Vec<SentenceItem>,
        store: ProgressStore,
        history: HistoryLog,
        settings: TrainerSettings,
        today: NaiveDate,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            items,
            store,
            history,
            settings,
            today,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        items: Vec<SentenceItem>,
        mut store: ProgressStore,
        history: HistoryLog,
        settings: TrainerSettings,
        today: NaiveDate,
        rng: StdRng,
    ) -> Self {
        store.ensure_all(&items, today);
        Self {
            items,
            store,
            history,
            levels: LevelController::new(settings.starting_level),
            scheduler: Scheduler::default(),
            matching: settings.matching,
            rng,
            current: None,
            last_level_change: LevelChange::Unchanged,
        }
    }

    /// Pick the next item to present. `None` when the dataset is empty,
    /// which is the caller's "nothing available" signal.
    pub fn draw(&mut self, today: NaiveDate) -> Option<&SentenceItem> {
        if self.items.is_empty() {
            return None;
        }
        let picked_id = select_next(&self.items, &self.store, today, &mut self.rng).id;
        let index = self
            .items
            .iter()
            .position(|item| item.id == picked_id)
            .expect("selected item comes from the item set");
        self.current = Some(index);
        self.items.get(index)
    }

    /// Score the answer against the active item, reschedule it, and record
    /// the attempt. Consumes the active item: a second submit without a
    /// fresh [`draw`](ReviewSession::draw) is an error.
    pub fn submit_answer(
        &mut self,
        answer: &str,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome, SessionError> {
        let index = self.current.ok_or(SessionError::NoActiveItem)?;
        let was_correct = is_acceptable_match(answer, &self.items[index].reference, &self.matching);
        Ok(self.finish_attempt(index, answer, was_correct, false, today, now))
    }

    /// Skip the active item. Always counts as a lapse.
    pub fn skip(
        &mut self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome, SessionError> {
        let index = self.current.ok_or(SessionError::NoActiveItem)?;
        Ok(self.finish_attempt(index, "", false, true, today, now))
    }

    fn finish_attempt(
        &mut self,
        index: usize,
        answer: &str,
        was_correct: bool,
        was_skipped: bool,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> ReviewOutcome {
        self.current = None;
        let item = &self.items[index];

        let entry = self.store.entry_mut(item.id, today);
        self.scheduler.apply_outcome(entry, was_correct, today, now);
        let due = entry.due;
        let interval_days = entry.interval_days;

        self.history.record(HistoryEntry {
            item_id: item.id,
            prompt: item.english.clone(),
            answer: answer.to_string(),
            expected: item.reference.clone(),
            was_correct,
            was_skipped,
            time: now,
        });

        self.last_level_change = self.levels.record_outcome(was_correct);

        ReviewOutcome {
            was_correct,
            was_skipped,
            expected: item.reference.clone(),
            due,
            interval_days,
        }
    }

    /// The item awaiting an answer, if any.
    pub fn current_item(&self) -> Option<&SentenceItem> {
        self.current.map(|i| &self.items[i])
    }

    pub fn items(&self) -> &[SentenceItem] {
        &self.items
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn level(&self) -> Level {
        self.levels.level()
    }

    /// Level shift caused by the most recent attempt.
    pub fn last_level_change(&self) -> LevelChange {
        self.last_level_change
    }

    pub fn stats(&self, today: NaiveDate) -> SessionStats {
        SessionStats {
            total_items: self.items.len(),
            due_today: self.store.due_count(today),
            correct_today: self.history.correct_on(today),
            wrong_today: self.history.wrong_on(today),
        }
    }
}
