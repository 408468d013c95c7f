use crate::{ReviewState, EF_DEFAULT, EF_MIN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tuning knobs for the SM-2 scheduler. Callers that want the stock
/// behaviour use `SchedulerConfig::default()`; the constants are explicit
/// here so the initial ease can be tuned without touching the algorithm.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SchedulerConfig {
    /// Ease factor assigned to an item that has never been reviewed.
    pub initial_ease: f32,
    /// Floor below which the ease factor is never allowed to fall.
    pub min_ease: f32,
    /// Interval after the first successful review, and after any lapse.
    pub first_interval_days: i32,
    /// Interval after the second consecutive successful review.
    pub second_interval_days: i32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_ease: EF_DEFAULT,
            min_ease: EF_MIN,
            first_interval_days: 1,
            second_interval_days: 6,
        }
    }
}

impl SchedulerConfig {
    /// State for a brand-new item: never reviewed, due immediately.
    pub fn new_state(&self, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            interval_days: 0,
            ease_factor: self.initial_ease,
            repetitions: 0,
            due_at: now,
            last_reviewed_at: None,
        }
    }
}
