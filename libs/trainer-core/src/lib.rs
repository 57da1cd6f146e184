//! Core library for the sentence translation trainer.
//!
//! Provides:
//! - Text normalization and tolerant answer matching (token overlap with a
//!   Levenshtein fallback)
//! - A simplified SM-2 spaced repetition scheduler
//! - Weighted due-item selection with an injectable random source
//! - Adaptive CEFR level tracking over a rolling accuracy window
//! - The progress store, attempt history ring, and dataset schema
//! - A `ReviewSession` tying the pieces into one drill loop

pub mod dataset;
pub mod error;
pub mod history;
pub mod level;
pub mod matching;
pub mod normalize;
pub mod queue;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod types;

pub use dataset::parse_dataset;
pub use error::{DatasetError, PersistError, SessionError};
pub use history::{HistoryLog, DEFAULT_HISTORY_CAP};
pub use level::{LevelChange, LevelController};
pub use matching::{
    compare_answers, is_acceptable_match, levenshtein_distance, token_overlap_ratio, MatchConfig,
    MatchResult, MatchStrategy,
};
pub use normalize::normalize;
pub use queue::select_next;
pub use scheduler::Scheduler;
pub use session::{ReviewSession, SessionStats};
pub use store::{HistoryRepository, ProgressRepository, ProgressStore};
pub use types::{
    HistoryEntry, Level, ReviewOutcome, ScheduleEntry, SentenceItem, TrainerSettings,
};
