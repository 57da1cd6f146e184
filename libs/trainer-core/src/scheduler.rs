//! Simplified SM-2 scheduler.
//!
//! Correct answers walk the interval through 1 day, 3 days, then compound
//! growth on the previous interval; any lapse resets repetitions and
//! interval to zero with no partial credit.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::types::ScheduleEntry;

/// Scheduling policy with configurable parameters.
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Ease gained per correct answer.
    pub ease_reward: f64,
    /// Ease lost per lapse.
    pub ease_penalty: f64,
    /// Interval after the first correct answer.
    pub first_interval: u32,
    /// Interval after the second consecutive correct answer.
    pub second_interval: u32,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            ease_reward: 0.03,
            ease_penalty: 0.15,
            first_interval: 1,
            second_interval: 3,
        }
    }
}

impl Scheduler {
    /// Update an entry in place after an answer or skip. Skips are passed
    /// as incorrect. Infallible; call once per attempt. The caller persists
    /// the store afterward.
    pub fn apply_outcome(
        &self,
        entry: &mut ScheduleEntry,
        was_correct: bool,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) {
        if was_correct {
            entry.repetitions += 1;
            entry.corrects += 1;
            entry.interval_days = match entry.repetitions {
                1 => self.first_interval,
                2 => self.second_interval,
                // Growth compounds on the interval from before this review.
                _ => (entry.interval_days as f64 * entry.ease_factor).round() as u32,
            };
            entry.ease_factor = (entry.ease_factor + self.ease_reward).max(self.minimum_ease);
        } else {
            entry.lapses += 1;
            entry.wrongs += 1;
            entry.repetitions = 0;
            entry.interval_days = 0;
            entry.ease_factor = (entry.ease_factor - self.ease_penalty).max(self.minimum_ease);
        }

        entry.due = today + Duration::days(entry.interval_days as i64);
        entry.last_answered = Some(now);
    }
}
