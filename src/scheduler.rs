//! SM-2 review interval calculator.
//!
//! Pure functions only: `(prior state, outcome, now) -> new state`. No
//! clock reads, no I/O. Persistence and due-item querying belong to the
//! caller and its [`ReviewStore`](crate::store::ReviewStore).

use crate::{
    CoreError, ItemId, Quality, ReviewOutcome, ReviewRecord, ReviewState, SchedulerConfig,
};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// New state plus the log entry describing the grading event, ready for the
/// caller to persist as one atomic write.
pub struct ScheduleOutcome {
    pub state: ReviewState,
    pub record: ReviewRecord,
}

/// Computes the next review state from a graded outcome.
///
/// Hard counts as a lapse: repetitions reset to 0 and the interval drops
/// back to one day. Good and Easy extend the streak, with intervals of 1
/// and 6 days for the first two repetitions and ease-scaled geometric
/// growth afterwards.
pub fn compute_next_review(
    prior: &ReviewState,
    outcome: ReviewOutcome,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<ReviewState, CoreError> {
    compute_next_review_q(prior, outcome.quality(), now, config)
}

/// Full-scale SM-2 entry point for callers with finer-grained feedback than
/// the three-bucket [`ReviewOutcome`].
pub fn compute_next_review_q(
    prior: &ReviewState,
    quality: Quality,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<ReviewState, CoreError> {
    validate(prior)?;

    let new_ef = {
        let miss = (5 - quality.value()) as f32;
        let delta = 0.1 - miss * (0.08 + miss * 0.02);
        // re-clamp even if the caller passed an ease below the floor
        (prior.ease_factor + delta).max(config.min_ease)
    };

    let (new_reps, new_interval) = if quality.is_success() {
        let reps = prior.repetitions + 1;
        let interval = match reps {
            1 => config.first_interval_days,
            2 => config.second_interval_days,
            _ => {
                let base = prior.interval_days.max(1) as f32;
                ((base * new_ef).round() as i32).max(1)
            }
        };
        (reps, interval)
    } else {
        (0, config.first_interval_days)
    };

    debug!(
        q = quality.value(),
        ease = new_ef,
        interval = new_interval,
        reps = new_reps,
        "computed next review"
    );

    Ok(ReviewState {
        interval_days: new_interval,
        ease_factor: new_ef,
        repetitions: new_reps,
        due_at: now + Duration::days(new_interval as i64),
        last_reviewed_at: Some(now),
    })
}

/// Grades one item: the new state plus the review record the caller should
/// persist alongside it.
pub fn apply_outcome(
    item_id: ItemId,
    prior: &ReviewState,
    outcome: ReviewOutcome,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<ScheduleOutcome, CoreError> {
    let state = compute_next_review(prior, outcome, now, config)?;
    let record = ReviewRecord::new(item_id, outcome, now, state.interval_days, state.ease_factor);
    Ok(ScheduleOutcome { state, record })
}

/// `true` iff the item is eligible for review at `now`.
pub fn is_due(due_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now >= due_at
}

fn validate(prior: &ReviewState) -> Result<(), CoreError> {
    if prior.interval_days < 0 {
        return Err(CoreError::InvalidState("negative interval"));
    }
    if prior.repetitions < 0 {
        return Err(CoreError::InvalidState("negative repetition count"));
    }
    if !prior.ease_factor.is_finite() {
        return Err(CoreError::InvalidState("non-finite ease factor"));
    }
    Ok(())
}
