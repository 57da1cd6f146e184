//! Core types for the sentence trainer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::MatchConfig;

/// CEFR proficiency level, ordered A1 < A2 < B1 < B2 < C1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
}

impl Default for Level {
    fn default() -> Self {
        Self::A1
    }
}

impl Level {
    /// One step up the scale. Saturates at C1.
    pub fn promote(self) -> Self {
        match self {
            Self::A1 => Self::A2,
            Self::A2 => Self::B1,
            Self::B1 => Self::B2,
            Self::B2 | Self::C1 => Self::C1,
        }
    }

    /// One step down the scale. Saturates at A1.
    pub fn demote(self) -> Self {
        match self {
            Self::A1 | Self::A2 => Self::A1,
            Self::B1 => Self::A2,
            Self::B2 => Self::B1,
            Self::C1 => Self::B2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A1" => Some(Self::A1),
            "A2" => Some(Self::A2),
            "B1" => Some(Self::B1),
            "B2" => Some(Self::B2),
            "C1" => Some(Self::C1),
            _ => None,
        }
    }
}

/// One sentence of the drill dataset. Read-only after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceItem {
    pub id: i64,
    /// Prompt shown to the user.
    pub english: String,
    /// Reference translation the answer is scored against.
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
}

fn default_ease() -> f64 {
    2.5
}

// A snapshot written before the due date could be recorded hydrates as
// immediately due.
fn default_due() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

/// Scheduling state for one sentence. Every field has a serde default so a
/// partial or hand-edited snapshot hydrates field-by-field instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    /// Consecutive correct answers since the last lapse.
    #[serde(default)]
    pub repetitions: u32,
    /// Interval growth multiplier, floored at 1.3.
    #[serde(default = "default_ease")]
    pub ease_factor: f64,
    /// Days until the next review; 0 means due today.
    #[serde(default)]
    pub interval_days: u32,
    /// Cumulative incorrect/skip count.
    #[serde(default)]
    pub lapses: u32,
    #[serde(default)]
    pub corrects: u32,
    #[serde(default)]
    pub wrongs: u32,
    #[serde(default = "default_due")]
    pub due: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_answered: Option<DateTime<Utc>>,
}

impl ScheduleEntry {
    /// Fresh entry for a never-seen sentence, due immediately.
    pub fn new(id: i64, today: NaiveDate) -> Self {
        Self {
            id,
            repetitions: 0,
            ease_factor: default_ease(),
            interval_days: 0,
            lapses: 0,
            corrects: 0,
            wrongs: 0,
            due: today,
            last_answered: None,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.due <= today
    }
}

/// Immutable record of one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub item_id: i64,
    /// The English prompt as presented.
    pub prompt: String,
    /// What the user typed (empty for skips).
    pub answer: String,
    pub expected: String,
    pub was_correct: bool,
    #[serde(default)]
    pub was_skipped: bool,
    pub time: DateTime<Utc>,
}

/// What the caller gets back after an answer or skip, for rendering feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewOutcome {
    pub was_correct: bool,
    pub was_skipped: bool,
    pub expected: String,
    /// Next review date after rescheduling.
    pub due: NaiveDate,
    pub interval_days: u32,
}

/// Session-level configuration.
#[derive(Debug, Clone)]
pub struct TrainerSettings {
    pub matching: MatchConfig,
    /// Bound on the history ring.
    pub history_cap: usize,
    pub starting_level: Level,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            matching: MatchConfig::default(),
            history_cap: crate::history::DEFAULT_HISTORY_CAP,
            starting_level: Level::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_promote_saturates_at_c1() {
        assert_eq!(Level::B2.promote(), Level::C1);
        assert_eq!(Level::C1.promote(), Level::C1);
    }

    #[test]
    fn level_demote_saturates_at_a1() {
        assert_eq!(Level::A2.demote(), Level::A1);
        assert_eq!(Level::A1.demote(), Level::A1);
    }

    #[test]
    fn level_round_trips_through_str() {
        for level in [Level::A1, Level::A2, Level::B1, Level::B2, Level::C1] {
            assert_eq!(Level::from_str(level.as_str()), Some(level));
        }
        assert_eq!(Level::from_str("b1"), Some(Level::B1));
        assert_eq!(Level::from_str("D1"), None);
    }

    #[test]
    fn schedule_entry_hydrates_missing_fields() {
        // Only the id survives from a partial snapshot; everything else
        // takes its documented default.
        let entry: ScheduleEntry = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(entry.repetitions, 0);
        assert_eq!(entry.ease_factor, 2.5);
        assert_eq!(entry.interval_days, 0);
        assert_eq!(entry.lapses, 0);
        assert_eq!(entry.due, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert!(entry.last_answered.is_none());
    }

    #[test]
    fn missing_due_date_means_due_immediately() {
        let entry: ScheduleEntry = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(entry.is_due(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
    }
}
