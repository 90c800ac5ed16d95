//! End-to-end walks through the timer lifecycle, store -> tick -> cards

use chrono::{DateTime, Duration, TimeZone, Utc};
use tada_core::render::{render_model, TimerCard};
use tada_core::store::TimerStore;
use tada_core::ValidationError;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn launch_timer_lifecycle() {
    let mut store = TimerStore::new();
    let now = base_time();

    let timer = store
        .add("Launch", Some(now + Duration::milliseconds(2_000)), now)
        .unwrap();
    let original_display = timer.target_display.clone();

    // Fresh timer renders active with roughly two seconds on the clock.
    let cards = render_model(&store, now);
    match &cards[0] {
        TimerCard::Active { breakdown, .. } => {
            assert_eq!(breakdown.days, 0);
            assert_eq!(breakdown.hours, 0);
            assert_eq!(breakdown.minutes, 0);
            assert_eq!(breakdown.seconds, 2);
        }
        other => panic!("expected active card, got {:?}", other),
    }

    // One second in: still counting.
    let results = store.tick_all(now + Duration::milliseconds(1_000));
    assert!(results.iter().all(|r| !r.just_completed));

    // Past the target: completes on this tick and only this tick.
    let mut completions = 0;
    for offset_ms in [2_500, 3_500, 4_500] {
        for result in store.tick_all(now + Duration::milliseconds(offset_ms)) {
            if result.just_completed {
                completions += 1;
            }
        }
    }
    assert_eq!(completions, 1);

    // The finished card keeps the display string computed at creation.
    let cards = render_model(&store, now + Duration::milliseconds(5_000));
    match &cards[0] {
        TimerCard::Complete {
            name,
            target_display,
            ..
        } => {
            assert_eq!(name, "Launch");
            assert_eq!(*target_display, original_display);
        }
        other => panic!("expected complete card, got {:?}", other),
    }
}

#[test]
fn missing_target_never_mutates_store() {
    let mut store = TimerStore::new();
    let now = base_time();

    let err = store.add("Oops", None, now).unwrap_err();
    assert_eq!(err, ValidationError::MissingTarget);
    assert!(store.is_empty());
    assert!(render_model(&store, now).is_empty());
}

#[test]
fn past_target_never_mutates_store() {
    let mut store = TimerStore::new();
    let now = base_time();

    let err = store
        .add("Yesterday", Some(now - Duration::seconds(60)), now)
        .unwrap_err();
    assert_eq!(err, ValidationError::TargetInThePast);
    assert!(store.is_empty());
}

#[test]
fn two_timers_keep_order_and_independent_flags() {
    let mut store = TimerStore::new();
    let now = base_time();
    let target = Some(now + Duration::seconds(30));

    let a = store.add("A", target, now).unwrap();
    let b = store.add("B", target, now).unwrap();

    let names: Vec<String> = render_model(&store, now)
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(names, vec!["A", "B"]);

    store.remove(&a.id);
    let cards = render_model(&store, now);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name(), "B");
    assert_eq!(cards[0].id(), b.id);

    // B's flag was untouched by A's removal.
    assert!(!store.get(&b.id).unwrap().completed);
    store.tick_all(now + Duration::seconds(60));
    assert!(store.get(&b.id).unwrap().completed);
}

#[test]
fn clear_then_add_starts_numbering_over() {
    let mut store = TimerStore::new();
    let now = base_time();
    let target = Some(now + Duration::seconds(30));

    store.add("", target, now).unwrap();
    store.add("", target, now).unwrap();
    store.clear();
    assert!(store.is_empty());

    let fresh = store.add("", target, now).unwrap();
    assert_eq!(fresh.name, "Timer 1");
}
