use crate::chime::{ToneGenerator, COMPLETION_TONE};
use crate::domain::{IntervalKind, Session, StartOutcome, TickOutcome, UiMode, ViewModel};
use crate::persistence::SettingsStore;
use crate::scheduler::Schedule;
use crate::settings::{self, format_minutes, parse_minutes, SettingsError};
use chrono::{DateTime, Local};
use std::time::Instant;

/// Settings overlay form state
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFormState {
    pub session_minutes: String,
    pub break_minutes: String,
    pub editing_field: usize, // 0 = work, 1 = break
    pub error: Option<String>,
}

/// Main application state: the session plus everything that acts on it
pub struct AppState {
    pub session: Session,
    pub schedule: Schedule,
    pub settings_form: Option<SettingsFormState>,
    pub last_completion: Option<(IntervalKind, DateTime<Local>)>,
    pub completed_work_sessions: u32,
    store: Box<dyn SettingsStore>,
    chime: Box<dyn ToneGenerator>,
}

impl AppState {
    pub fn new(store: Box<dyn SettingsStore>, chime: Box<dyn ToneGenerator>) -> Self {
        let durations = settings::load_durations(store.as_ref());

        Self {
            session: Session::new(durations),
            schedule: Schedule::new(),
            settings_form: None,
            last_completion: None,
            completed_work_sessions: 0,
            store,
            chime,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.session.settings_panel_open {
            UiMode::Settings
        } else if self.session.showing_call_to_action {
            UiMode::CallToAction
        } else {
            UiMode::Normal
        }
    }

    /// Project the current state for rendering
    pub fn view(&self, now: Instant) -> ViewModel {
        ViewModel {
            pulsing: self.schedule.is_pulsing(now),
            emphasized: self.schedule.is_emphasized(now),
            ..ViewModel::project(&self.session)
        }
    }

    /// Start the countdown; controls hide right away and again after any activity
    pub fn start(&mut self, now: Instant) -> StartOutcome {
        let outcome = self.session.start();
        match outcome {
            StartOutcome::Started => {
                self.session.hide_ui();
                self.schedule.start_countdown(now);
                self.schedule.arm_auto_hide(now);
                tracing::debug!(
                    interval = self.session.interval().name(),
                    time_left = self.session.time_left_secs,
                    "Countdown started"
                );
            }
            StartOutcome::ResetInstead => {
                self.cancel_pending();
                tracing::debug!("No time left, reset instead of starting");
            }
            StartOutcome::AlreadyRunning | StartOutcome::AwaitingChoice => {}
        }
        outcome
    }

    pub fn pause(&mut self) {
        if self.session.pause() {
            tracing::debug!(time_left = self.session.time_left_secs, "Countdown paused");
        }
        self.cancel_pending();
    }

    /// Start/pause toggle
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.session.is_running {
            self.pause();
        } else {
            self.start(now);
        }
    }

    pub fn reset(&mut self) {
        self.pause();
        self.session.reset();
        tracing::debug!("Session reset");
    }

    /// Add five minutes to whatever is on the clock
    pub fn extend(&mut self, now: Instant) {
        self.session.extend();
        self.schedule.start_emphasis(now);
        tracing::debug!(time_left = self.session.time_left_secs, "Time extended");
    }

    pub fn add_time_from_cta(&mut self) -> bool {
        self.session.add_time_from_cta()
    }

    /// Switch to the break and start it immediately
    pub fn start_break_from_cta(&mut self, now: Instant) -> bool {
        if !self.session.begin_break_from_cta() {
            return false;
        }
        self.start(now);
        true
    }

    /// Pointer movement or a key press. Returns true if the controls were hidden
    /// and have just been revealed.
    pub fn register_activity(&mut self, now: Instant) -> bool {
        if !self.session.is_running {
            return false;
        }
        let revealed = self.session.show_ui();
        self.schedule.arm_auto_hide(now);
        revealed
    }

    /// Run whatever callbacks are due at `now`
    pub fn poll(&mut self, now: Instant) {
        while self.schedule.take_due_tick(now) {
            match self.session.tick() {
                TickOutcome::Continue => {}
                TickOutcome::Expired => self.complete(now),
                TickOutcome::NotRunning => {
                    self.schedule.cancel_countdown();
                }
            }
        }

        if self.schedule.take_due_auto_hide(now)
            && self.session.is_running
            && !self.session.settings_panel_open
        {
            self.session.hide_ui();
        }

        self.schedule.expire_cosmetics(now);

        debug_assert!(self.session.is_consistent());
        debug_assert_eq!(self.session.is_running, self.schedule.countdown_active());
    }

    fn complete(&mut self, now: Instant) {
        self.schedule.cancel_countdown();
        self.schedule.cancel_auto_hide();
        let finished = self.session.complete();

        if let Err(e) = self.chime.play_tone(&COMPLETION_TONE) {
            tracing::warn!("Could not play completion tone: {:#}", e);
        }

        if finished == IntervalKind::Work {
            self.completed_work_sessions += 1;
            self.schedule.start_pulse(now);
        }
        self.last_completion = Some((finished, Local::now()));
        tracing::info!(interval = finished.name(), "Interval completed");
    }

    /// Drop the countdown and any pending hide, and show the controls
    fn cancel_pending(&mut self) {
        self.schedule.cancel_countdown();
        self.schedule.cancel_auto_hide();
        self.session.show_ui();
    }

    /// Open the settings overlay, prefilled with the current durations
    pub fn open_settings(&mut self) {
        self.session.open_settings();
        self.schedule.cancel_auto_hide();
        self.settings_form = Some(SettingsFormState {
            session_minutes: format_minutes(self.session.durations.session_secs),
            break_minutes: format_minutes(self.session.durations.break_secs),
            editing_field: 0,
            error: None,
        });
    }

    pub fn close_settings(&mut self) {
        self.session.close_settings();
        self.settings_form = None;
    }

    /// Toggle between the work and break fields
    pub fn settings_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Add character to the field being edited
    pub fn settings_form_add_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.' || c == '-') {
            return;
        }
        if let Some(form) = &mut self.settings_form {
            match form.editing_field {
                0 => form.session_minutes.push(c),
                _ => form.break_minutes.push(c),
            }
        }
    }

    pub fn settings_form_backspace(&mut self) {
        if let Some(form) = &mut self.settings_form {
            match form.editing_field {
                0 => {
                    form.session_minutes.pop();
                }
                _ => {
                    form.break_minutes.pop();
                }
            }
        }
    }

    /// Save what was typed; a rejection is shown in the form
    pub fn submit_settings_form(&mut self) {
        let Some(form) = &self.settings_form else {
            return;
        };
        let session_minutes = parse_minutes(&form.session_minutes);
        let break_minutes = parse_minutes(&form.break_minutes);

        if let Err(e) = self.save_settings(session_minutes, break_minutes) {
            tracing::warn!("Settings rejected: {}", e);
            if let Some(form) = &mut self.settings_form {
                form.error = Some(e.to_string());
            }
        }
    }

    /// Validate, persist and apply new durations. A running countdown keeps its time.
    pub fn save_settings(&mut self, session_minutes: f64, break_minutes: f64) -> Result<(), SettingsError> {
        let durations = settings::save_durations(self.store.as_mut(), session_minutes, break_minutes)?;
        self.session.apply_durations(durations);
        self.close_settings();
        Ok(())
    }
}
