//! Application state management

use crate::effects::EffectPlayer;
use crate::tick::TickScheduler;
use crate::ui::confetti::ConfettiState;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::time::{Duration, Instant};
use tada_core::models::timer::TARGET_FORMAT;
use tada_core::models::{Preferences, Theme};
use tada_core::storage::PrefsStorage;
use tada_core::store::TimerStore;
use tracing::{info, warn};

const ALERT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditForm,
    ConfirmClear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Target,
}

/// Transient validation notice. Goes away on its own after a few
/// seconds, or earlier when dismissed.
pub struct Alert {
    pub message: String,
    raised_at: Instant,
}

impl Alert {
    fn new(message: String) -> Self {
        Self {
            message,
            raised_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.raised_at.elapsed() >= ALERT_TIMEOUT
    }
}

pub struct App {
    pub store: TimerStore,
    pub scheduler: TickScheduler,
    pub effects: Box<dyn EffectPlayer>,
    pub confetti: ConfettiState,
    pub muted: bool,

    pub theme: Theme,
    prefs: PrefsStorage,

    pub input_mode: InputMode,
    pub form_name: String,
    pub form_target: String,
    pub form_focus: FormField,

    pub selected_index: usize,
    pub alert: Option<Alert>,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        prefs: PrefsStorage,
        scheduler: TickScheduler,
        effects: Box<dyn EffectPlayer>,
        muted: bool,
    ) -> Self {
        let theme = match prefs.load() {
            Ok(preferences) => preferences.theme,
            Err(err) => {
                warn!("Could not load preferences: {}", err);
                Theme::default()
            }
        };

        Self {
            store: TimerStore::new(),
            scheduler,
            effects,
            confetti: ConfettiState::new(),
            muted,
            theme,
            prefs,
            input_mode: InputMode::Normal,
            form_name: String::new(),
            form_target: suggested_target_text(),
            form_focus: FormField::Name,
            selected_index: 0,
            alert: None,
            status_message: String::new(),
            should_quit: false,
        }
    }

    // --- form -----------------------------------------------------------

    pub fn open_form(&mut self) {
        self.input_mode = InputMode::EditForm;
        self.form_focus = FormField::Name;
        if self.form_target.trim().is_empty() {
            self.form_target = suggested_target_text();
        }
    }

    pub fn close_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn form_toggle_focus(&mut self) {
        self.form_focus = match self.form_focus {
            FormField::Name => FormField::Target,
            FormField::Target => FormField::Name,
        };
    }

    pub fn form_push(&mut self, c: char) {
        match self.form_focus {
            FormField::Name => self.form_name.push(c),
            FormField::Target => self.form_target.push(c),
        }
    }

    pub fn form_backspace(&mut self) {
        match self.form_focus {
            FormField::Name => self.form_name.pop(),
            FormField::Target => self.form_target.pop(),
        };
    }

    /// Validate the form and add the timer. On success the inputs are
    /// reset, a fresh suggested target is filled in and the tick
    /// schedule is (re)started.
    pub fn submit_form(&mut self) {
        let now = Utc::now();
        let target = parse_target_text(&self.form_target);

        match self.store.add(&self.form_name, target, now) {
            Ok(timer) => {
                info!(name = %timer.name, target = %timer.target_display, "Timer added");
                self.status_message = format!("Added \"{}\"", timer.name);
                self.form_name.clear();
                self.form_target = suggested_target_text();
                self.selected_index = self.store.len() - 1;
                self.input_mode = InputMode::Normal;
                self.alert = None;
                self.scheduler.start();
            }
            Err(err) => {
                self.raise_alert(err.to_string());
            }
        }
    }

    // --- list actions ---------------------------------------------------

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn delete_selected(&mut self) {
        let Some(timer) = self.store.timers().get(self.selected_index) else {
            return;
        };
        let id = timer.id.clone();
        let name = timer.name.clone();

        self.store.remove(&id);
        info!(name = %name, "Timer deleted");
        self.status_message = format!("Deleted \"{}\"", name);

        if self.store.is_empty() {
            self.scheduler.stop();
            self.selected_index = 0;
        } else if self.selected_index >= self.store.len() {
            self.selected_index = self.store.len() - 1;
        }
    }

    /// Open the confirmation modal. No-op on an empty store.
    pub fn request_clear_all(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.input_mode = InputMode::ConfirmClear;
    }

    pub fn confirm_clear_all(&mut self) {
        let count = self.store.len();
        self.store.clear();
        self.scheduler.stop();
        self.selected_index = 0;
        self.input_mode = InputMode::Normal;
        info!(count, "All timers cleared");
        self.status_message = "All timers cleared".to_string();
    }

    pub fn cancel_modal(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // --- tick -----------------------------------------------------------

    /// Recompute every timer. Newly completed ones get the full
    /// celebration: log line, status message, confetti and (unless
    /// muted) the popper sound.
    pub fn on_tick(&mut self, now: DateTime<Utc>) {
        for result in self.store.tick_all(now) {
            if !result.just_completed {
                continue;
            }

            let name = self
                .store
                .get(&result.id)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            info!(name = %name, "Timer completed");
            self.status_message = format!("🎉 \"{}\" finished!", name);

            self.confetti.burst();
            if !self.muted {
                self.effects.play_celebration();
            }
        }
    }

    // --- theme / audio --------------------------------------------------

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status_message = format!("Theme: {}", self.theme.as_str());

        let preferences = Preferences { theme: self.theme };
        if let Err(err) = self.prefs.save(&preferences) {
            warn!("Could not save preferences: {}", err);
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.status_message = if self.muted {
            "Sound off".to_string()
        } else {
            "Sound on".to_string()
        };
    }

    // --- alerts ---------------------------------------------------------

    pub fn raise_alert(&mut self, message: String) {
        self.alert = Some(Alert::new(message));
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Called from the main loop; drops the alert once its timeout has
    /// passed.
    pub fn expire_alert(&mut self) {
        if let Some(alert) = &self.alert {
            if alert.expired() {
                self.alert = None;
            }
        }
    }
}

/// Parse the target field. Empty or unparseable text maps to `None`,
/// which the store rejects as a missing target.
pub fn parse_target_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(text, TARGET_FORMAT).ok()?;
    let local = Local.from_local_datetime(&naive).earliest()?;
    Some(local.with_timezone(&Utc))
}

/// Pre-fill for the target field: the current minute, in the same
/// format the parser accepts.
pub fn suggested_target_text() -> String {
    Local::now().format(TARGET_FORMAT).to_string()
}
