//! Pure mapping from store state to display records
//!
//! The presentation layer consumes these records without ever looking
//! at the timers themselves, which keeps the state transitions
//! testable without a terminal.

use crate::models::TimeBreakdown;
use crate::store::TimerStore;
use chrono::{DateTime, Utc};

/// Fixed message shown on a finished card.
pub const COMPLETION_MESSAGE: &str = "🎉 Complete! 🎉";

/// One display record per timer. Which variant a timer gets is decided
/// solely by its `completed` flag, never by recomputing the remaining
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCard {
    Active {
        id: String,
        name: String,
        target_display: String,
        breakdown: TimeBreakdown,
    },
    Complete {
        id: String,
        name: String,
        target_display: String,
    },
}

impl TimerCard {
    pub fn id(&self) -> &str {
        match self {
            Self::Active { id, .. } | Self::Complete { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Active { name, .. } | Self::Complete { name, .. } => name,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

/// Materialize the whole store into cards, in insertion order. An
/// empty store yields an empty list; the caller renders the
/// placeholder.
pub fn render_model(store: &TimerStore, now: DateTime<Utc>) -> Vec<TimerCard> {
    store
        .timers()
        .iter()
        .map(|timer| {
            if timer.completed {
                TimerCard::Complete {
                    id: timer.id.clone(),
                    name: timer.name.clone(),
                    target_display: timer.target_display.clone(),
                }
            } else {
                TimerCard::Active {
                    id: timer.id.clone(),
                    name: timer.name.clone(),
                    target_display: timer.target_display.clone(),
                    breakdown: TimeBreakdown::from_remaining(timer.remaining(now)),
                }
            }
        })
        .collect()
}
