//! In-memory timer collection and the per-tick completion pass

use crate::error::ValidationError;
use crate::models::Timer;
use chrono::{DateTime, Duration, Utc};

/// Per-timer outcome of a tick pass, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    pub id: String,
    /// True only on the tick where the timer flipped from active to
    /// completed. False on every later tick.
    pub just_completed: bool,
}

/// Ordered collection of countdown timers. Insertion order is the
/// display order; `completed` is mutated in `tick_all` and nowhere
/// else.
#[derive(Debug, Default)]
pub struct TimerStore {
    timers: Vec<Timer>,
}

impl TimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new timer.
    ///
    /// An empty or whitespace-only name falls back to "Timer N" where
    /// N is the 1-based position the timer lands in. A missing target
    /// or a target at/before `now` is rejected without touching the
    /// collection.
    pub fn add(
        &mut self,
        name: &str,
        target: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<Timer, ValidationError> {
        let target = target.ok_or(ValidationError::MissingTarget)?;
        if target <= now {
            return Err(ValidationError::TargetInThePast);
        }

        let name = name.trim();
        let name = if name.is_empty() {
            format!("Timer {}", self.timers.len() + 1)
        } else {
            name.to_string()
        };

        let timer = Timer::new(name, target);
        self.timers.push(timer.clone());
        Ok(timer)
    }

    /// Remove the timer with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.timers.retain(|t| t.id != id);
    }

    /// Drop every timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn get(&self, id: &str) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Single pass over all timers: any active timer whose remaining
    /// time has reached zero is marked completed, exactly once. The
    /// caller fires celebration effects for the `just_completed`
    /// entries.
    pub fn tick_all(&mut self, now: DateTime<Utc>) -> Vec<TickResult> {
        self.timers
            .iter_mut()
            .map(|timer| {
                let expired = timer.remaining(now) <= Duration::zero();
                let just_completed = expired && !timer.completed;
                if just_completed {
                    timer.completed = true;
                }
                TickResult {
                    id: timer.id.clone(),
                    just_completed,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_add_returns_active_timer() {
        let mut store = TimerStore::new();
        let timer = store
            .add("Launch", Some(instant(1_000)), instant(0))
            .unwrap();

        assert!(!timer.completed);
        assert_eq!(timer.name, "Launch");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_defaults_blank_names() {
        let mut store = TimerStore::new();
        let now = instant(0);
        let target = Some(instant(1_000));

        let first = store.add("", target, now).unwrap();
        let second = store.add("   ", target, now).unwrap();
        let third = store.add("  Party  ", target, now).unwrap();

        assert_eq!(first.name, "Timer 1");
        assert_eq!(second.name, "Timer 2");
        assert_eq!(third.name, "Party");
    }

    #[test]
    fn test_add_missing_target_leaves_store_untouched() {
        let mut store = TimerStore::new();
        let err = store.add("X", None, instant(0)).unwrap_err();

        assert_eq!(err, ValidationError::MissingTarget);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_past_target_leaves_store_untouched() {
        let mut store = TimerStore::new();
        let now = instant(1_000);

        let err = store.add("X", Some(instant(500)), now).unwrap_err();
        assert_eq!(err, ValidationError::TargetInThePast);

        // Exactly "now" is also rejected.
        let err = store.add("X", Some(now), now).unwrap_err();
        assert_eq!(err, ValidationError::TargetInThePast);

        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_unique_across_adds() {
        let mut store = TimerStore::new();
        let now = instant(0);
        let a = store.add("A", Some(instant(1_000)), now).unwrap();
        let b = store.add("B", Some(instant(1_000)), now).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = TimerStore::new();
        store.add("A", Some(instant(1_000)), instant(0)).unwrap();

        store.remove("not-a-real-id");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut store = TimerStore::new();
        let now = instant(0);
        let target = Some(instant(1_000));
        let _a = store.add("A", target, now).unwrap();
        let b = store.add("B", target, now).unwrap();
        let _c = store.add("C", target, now).unwrap();

        store.remove(&b.id);

        let names: Vec<&str> = store.timers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = TimerStore::new();
        let now = instant(0);
        store.add("A", Some(instant(1_000)), now).unwrap();
        store.add("B", Some(instant(1_000)), now).unwrap();

        store.clear();
        assert!(store.is_empty());

        // Clearing an already-empty store stays a no-op.
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_tick_before_target_completes_nothing() {
        let mut store = TimerStore::new();
        store.add("A", Some(instant(1_000)), instant(0)).unwrap();

        let results = store.tick_all(instant(999));
        assert_eq!(results.len(), 1);
        assert!(!results[0].just_completed);
        assert!(!store.timers()[0].completed);
    }

    #[test]
    fn test_tick_at_target_completes() {
        let mut store = TimerStore::new();
        store.add("A", Some(instant(1_000)), instant(0)).unwrap();

        let results = store.tick_all(instant(1_000));
        assert!(results[0].just_completed);
        assert!(store.timers()[0].completed);
    }

    #[test]
    fn test_completion_reported_exactly_once() {
        let mut store = TimerStore::new();
        store.add("A", Some(instant(1_000)), instant(0)).unwrap();

        let mut completions = 0;
        for secs in [500, 1_000, 2_000, 3_000] {
            for result in store.tick_all(instant(secs)) {
                if result.just_completed {
                    completions += 1;
                }
            }
        }

        assert_eq!(completions, 1);
        assert!(store.timers()[0].completed);
    }

    #[test]
    fn test_completed_flag_is_monotonic() {
        let mut store = TimerStore::new();
        store.add("A", Some(instant(1_000)), instant(0)).unwrap();

        store.tick_all(instant(2_000));
        assert!(store.timers()[0].completed);

        // Later ticks never un-complete a timer.
        store.tick_all(instant(3_000));
        store.tick_all(instant(4_000));
        assert!(store.timers()[0].completed);
    }

    #[test]
    fn test_tick_results_follow_insertion_order() {
        let mut store = TimerStore::new();
        let now = instant(0);
        let a = store.add("A", Some(instant(1_000)), now).unwrap();
        let b = store.add("B", Some(instant(2_000)), now).unwrap();

        let results = store.tick_all(instant(500));
        assert_eq!(results[0].id, a.id);
        assert_eq!(results[1].id, b.id);
    }

    #[test]
    fn test_timers_complete_independently() {
        let mut store = TimerStore::new();
        let now = instant(0);
        store.add("A", Some(instant(1_000)), now).unwrap();
        store.add("B", Some(instant(5_000)), now).unwrap();

        let results = store.tick_all(instant(2_000));
        assert!(results[0].just_completed);
        assert!(!results[1].just_completed);

        assert!(store.timers()[0].completed);
        assert!(!store.timers()[1].completed);
    }

    #[test]
    fn test_tick_after_remove_skips_removed_timer() {
        let mut store = TimerStore::new();
        let now = instant(0);
        let a = store.add("A", Some(instant(1_000)), now).unwrap();
        store.add("B", Some(instant(1_000)), now).unwrap();

        store.remove(&a.id);
        let results = store.tick_all(instant(2_000));

        assert_eq!(results.len(), 1);
        assert_ne!(results[0].id, a.id);
    }
}
