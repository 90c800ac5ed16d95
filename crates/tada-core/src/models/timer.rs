//! Countdown timer data model

use chrono::{DateTime, Duration, Local, Utc};
use uuid::Uuid;

/// Format used both for the target shown on a card and for the
/// date/time text the user types in.
pub const TARGET_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single countdown. Timers live only for the session; nothing here
/// is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub id: String,
    pub name: String,
    /// Absolute target instant. Validated once at creation, never
    /// re-validated afterwards.
    pub target: DateTime<Utc>,
    /// Human rendering of `target` in the local timezone, computed at
    /// creation and kept as-is for the card's whole lifetime.
    pub target_display: String,
    /// Flips to `true` exactly once, inside the tick pass, and never
    /// flips back.
    pub completed: bool,
}

impl Timer {
    /// Create a new timer counting down to `target`
    pub fn new(name: String, target: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            target,
            target_display: format_target(target),
            completed: false,
        }
    }

    /// Remaining time until the target. Pure; may be negative once the
    /// target has passed.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.target.signed_duration_since(now)
    }
}

fn format_target(target: DateTime<Utc>) -> String {
    target
        .with_timezone(&Local)
        .format(TARGET_FORMAT)
        .to_string()
}
