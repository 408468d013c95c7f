use crate::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ItemId = Uuid;
pub type RecordId = Uuid;

pub const EF_MIN: f32 = 1.3;
pub const EF_DEFAULT: f32 = 2.5;

/// Grade a reviewer assigns to one recall attempt.
///
/// Hard is a partial failure that still counts as a lapse; Good is an
/// adequate recall; Easy is an effortless one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Hard,
    Good,
    Easy,
}

impl ReviewOutcome {
    /// Canonical mapping onto the SM-2 quality scale.
    pub fn quality(&self) -> Quality {
        match self {
            ReviewOutcome::Hard => Quality(2),
            ReviewOutcome::Good => Quality(3),
            ReviewOutcome::Easy => Quality(5),
        }
    }
}

/// Validated SM-2 quality score, 0 (blackout) through 5 (perfect).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl TryFrom<u8> for Quality {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Quality::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> Self {
        q.0
    }
}

impl Quality {
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > 5 {
            return Err(CoreError::InvalidState("quality score above 5"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Quality >= 3 keeps the repetition streak alive.
    pub fn is_success(&self) -> bool {
        self.0 >= 3
    }
}

impl From<ReviewOutcome> for Quality {
    fn from(outcome: ReviewOutcome) -> Self {
        outcome.quality()
    }
}

/// How a state relates to the clock at a given instant.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    New,
    Due,
    Lapsed,
    Future,
}

/// Spaced-repetition memory of one item for one learner.
///
/// Counters are signed because states round-trip through external stores
/// whose integer columns are signed; the scheduler validates them on entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReviewState {
    pub interval_days: i32,
    pub ease_factor: f32,
    pub repetitions: i32,
    pub due_at: DateTime<Utc>,
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// Never-reviewed state with the stock initial ease, due immediately.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            interval_days: 0,
            ease_factor: EF_DEFAULT,
            repetitions: 0,
            due_at: now,
            last_reviewed_at: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.last_reviewed_at.is_none()
    }

    pub fn due_status(&self, now: DateTime<Utc>) -> DueStatus {
        if self.is_new() {
            DueStatus::New
        } else if self.due_at > now {
            DueStatus::Future
        } else if (now - self.due_at).num_hours() >= 24 {
            DueStatus::Lapsed
        } else {
            DueStatus::Due
        }
    }
}

/// Immutable log entry for one grading event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: RecordId,
    pub item_id: ItemId,
    pub outcome: ReviewOutcome,
    pub reviewed_at: DateTime<Utc>,
    pub interval_applied: i32,
    pub ease_after: f32,
}

impl ReviewRecord {
    pub fn new(
        item_id: ItemId,
        outcome: ReviewOutcome,
        reviewed_at: DateTime<Utc>,
        interval_applied: i32,
        ease_after: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            outcome,
            reviewed_at,
            interval_applied,
            ease_after,
        }
    }
}
