use chrono::{Duration, TimeZone, Utc};
use parlo_srs::{DueStatus, Quality, ReviewOutcome, ReviewState, SchedulerConfig};

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

#[test]
fn outcome_quality_mapping() {
    assert_eq!(ReviewOutcome::Hard.quality().value(), 2);
    assert_eq!(ReviewOutcome::Good.quality().value(), 3);
    assert_eq!(ReviewOutcome::Easy.quality().value(), 5);

    assert!(!ReviewOutcome::Hard.quality().is_success());
    assert!(ReviewOutcome::Good.quality().is_success());
    assert!(ReviewOutcome::Easy.quality().is_success());
}

#[test]
fn quality_range_is_enforced() {
    assert!(Quality::new(0).is_ok());
    assert!(Quality::new(5).is_ok());
    assert!(Quality::new(6).is_err());
}

#[test]
fn due_status_classification() {
    let now = t0();
    let cfg = SchedulerConfig::default();

    let fresh = cfg.new_state(now);
    assert_eq!(fresh.due_status(now), DueStatus::New);

    let reviewed = ReviewState {
        interval_days: 3,
        ease_factor: 2.5,
        repetitions: 2,
        due_at: now,
        last_reviewed_at: Some(now - Duration::days(3)),
    };
    assert_eq!(reviewed.due_status(now - Duration::hours(1)), DueStatus::Future);
    assert_eq!(reviewed.due_status(now), DueStatus::Due);
    assert_eq!(reviewed.due_status(now + Duration::hours(23)), DueStatus::Due);
    assert_eq!(reviewed.due_status(now + Duration::hours(24)), DueStatus::Lapsed);
}

#[test]
fn outcome_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&ReviewOutcome::Good).unwrap(), "\"good\"");
    let back: ReviewOutcome = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(back, ReviewOutcome::Hard);
}

#[test]
fn state_roundtrips_through_json() {
    let now = t0();
    let state = ReviewState {
        interval_days: 14,
        ease_factor: 2.36,
        repetitions: 3,
        due_at: now + Duration::days(14),
        last_reviewed_at: Some(now),
    };

    let json = serde_json::to_string(&state).unwrap();
    let back: ReviewState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
