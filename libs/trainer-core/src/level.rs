//! Adaptive proficiency tracking over a rolling accuracy window.
//!
//! The controller only moves the level at window boundaries: every 12
//! attempts it compares window accuracy against the promote/demote
//! thresholds, shifts at most one step, and zeroes the window. Window state
//! is ephemeral and never persisted.

use crate::types::Level;

/// What a recorded outcome did to the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    Promoted(Level),
    Demoted(Level),
    Unchanged,
}

/// Discrete hysteresis controller over the CEFR scale.
#[derive(Debug, Clone)]
pub struct LevelController {
    pub window_size: u32,
    pub promote_threshold: f64,
    pub demote_threshold: f64,
    level: Level,
    attempts: u32,
    correct: u32,
}

impl LevelController {
    pub fn new(start: Level) -> Self {
        Self {
            window_size: 12,
            promote_threshold: 0.75,
            demote_threshold: 0.35,
            level: start,
            attempts: 0,
            correct: 0,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Attempts recorded in the current (unfinished) window.
    pub fn window_attempts(&self) -> u32 {
        self.attempts
    }

    /// Record one attempt. Returns the level shift, if the window closed
    /// with accuracy past a threshold.
    pub fn record_outcome(&mut self, was_correct: bool) -> LevelChange {
        self.attempts += 1;
        if was_correct {
            self.correct += 1;
        }

        if self.attempts < self.window_size {
            return LevelChange::Unchanged;
        }

        let accuracy = f64::from(self.correct) / f64::from(self.attempts);
        self.attempts = 0;
        self.correct = 0;

        if accuracy >= self.promote_threshold {
            let next = self.level.promote();
            if next != self.level {
                self.level = next;
                return LevelChange::Promoted(next);
            }
        } else if accuracy <= self.demote_threshold {
            let next = self.level.demote();
            if next != self.level {
                self.level = next;
                return LevelChange::Demoted(next);
            }
        }

        LevelChange::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn twelve_correct_promote_one_level() {
        let mut controller = LevelController::new(Level::A1);

        for i in 0..11 {
            assert_eq!(controller.record_outcome(true), LevelChange::Unchanged, "attempt {i}");
        }
        assert_eq!(controller.record_outcome(true), LevelChange::Promoted(Level::A2));
        assert_eq!(controller.level(), Level::A2);
        assert_eq!(controller.window_attempts(), 0);
    }

    #[test]
    fn one_wrong_after_promotion_changes_nothing_until_window_refills() {
        let mut controller = LevelController::new(Level::A1);
        for _ in 0..12 {
            controller.record_outcome(true);
        }
        assert_eq!(controller.record_outcome(false), LevelChange::Unchanged);
        assert_eq!(controller.level(), Level::A2);
    }

    #[test]
    fn low_accuracy_demotes() {
        let mut controller = LevelController::new(Level::B1);
        // 4 of 12 correct: accuracy 1/3, below 0.35.
        for i in 0..12 {
            controller.record_outcome(i < 4);
        }
        assert_eq!(controller.level(), Level::A2);
    }

    #[test]
    fn middling_accuracy_holds_level() {
        let mut controller = LevelController::new(Level::B1);
        // 6 of 12: between both thresholds.
        for i in 0..12 {
            controller.record_outcome(i % 2 == 0);
        }
        assert_eq!(controller.level(), Level::B1);
        assert_eq!(controller.window_attempts(), 0);
    }

    #[test]
    fn promotion_saturates_at_c1() {
        let mut controller = LevelController::new(Level::C1);
        for _ in 0..11 {
            controller.record_outcome(true);
        }
        assert_eq!(controller.record_outcome(true), LevelChange::Unchanged);
        assert_eq!(controller.level(), Level::C1);
    }

    #[test]
    fn demotion_saturates_at_a1() {
        let mut controller = LevelController::new(Level::A1);
        for _ in 0..11 {
            controller.record_outcome(false);
        }
        assert_eq!(controller.record_outcome(false), LevelChange::Unchanged);
        assert_eq!(controller.level(), Level::A1);
    }

    #[test]
    fn window_resets_regardless_of_outcome() {
        let mut controller = LevelController::new(Level::B2);
        for _ in 0..12 {
            controller.record_outcome(true);
        }
        assert_eq!(controller.window_attempts(), 0);
        for i in 0..12 {
            controller.record_outcome(i % 2 == 0);
        }
        assert_eq!(controller.window_attempts(), 0);
    }
}
