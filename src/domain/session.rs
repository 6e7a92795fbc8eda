use crate::domain::{IntervalKind, Phase, StartOutcome, TickOutcome};

/// Seconds added by "+5 min" and by "Add Time" on the post-work prompt
pub const EXTENSION_SECS: i64 = 5 * 60;

/// Configured interval lengths in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub session_secs: i64,
    pub break_secs: i64,
}

impl Durations {
    /// Length of the given interval
    pub fn for_interval(&self, kind: IntervalKind) -> i64 {
        match kind {
            IntervalKind::Work => self.session_secs,
            IntervalKind::Break => self.break_secs,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            session_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

/// The single timer session. Every transition here is side-effect free:
/// scheduling, sound and persistence are the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub durations: Durations,
    pub time_left_secs: i64,
    pub is_break: bool,
    pub is_running: bool,
    pub showing_call_to_action: bool,
    pub ui_hidden: bool,
    pub settings_panel_open: bool,
}

impl Session {
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            time_left_secs: durations.session_secs,
            is_break: false,
            is_running: false,
            showing_call_to_action: false,
            ui_hidden: false,
            settings_panel_open: false,
        }
    }

    pub fn interval(&self) -> IntervalKind {
        if self.is_break {
            IntervalKind::Break
        } else {
            IntervalKind::Work
        }
    }

    pub fn phase(&self) -> Phase {
        if self.showing_call_to_action {
            Phase::CallToAction
        } else if self.is_running {
            Phase::Running(self.interval())
        } else {
            Phase::Idle(self.interval())
        }
    }

    /// Configured length of the current interval (the progress baseline)
    pub fn base_duration(&self) -> i64 {
        self.durations.for_interval(self.interval())
    }

    /// Begin counting down the current interval
    pub fn start(&mut self) -> StartOutcome {
        if self.is_running {
            return StartOutcome::AlreadyRunning;
        }
        if self.time_left_secs <= 0 {
            self.reset();
            return StartOutcome::ResetInstead;
        }
        if self.showing_call_to_action {
            return StartOutcome::AwaitingChoice;
        }
        self.is_running = true;
        StartOutcome::Started
    }

    /// Stop counting down. Returns false if nothing was running.
    pub fn pause(&mut self) -> bool {
        let was_running = self.is_running;
        self.is_running = false;
        self.ui_hidden = false;
        was_running
    }

    /// Back to a fresh, idle work interval
    pub fn reset(&mut self) {
        self.is_running = false;
        self.is_break = false;
        self.time_left_secs = self.durations.session_secs;
        self.showing_call_to_action = false;
        self.ui_hidden = false;
    }

    /// Add five minutes, whatever the current state.
    /// Note: on a finished work interval this leaves the post-work prompt up.
    pub fn extend(&mut self) {
        self.time_left_secs += EXTENSION_SECS;
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::NotRunning;
        }
        self.time_left_secs -= 1;
        if self.time_left_secs <= 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Continue
        }
    }

    /// Finish the current interval. Work leads to the post-work prompt,
    /// a break rolls straight into an idle work interval.
    pub fn complete(&mut self) -> IntervalKind {
        let finished = self.interval();
        self.is_running = false;
        self.ui_hidden = false;
        self.time_left_secs = self.time_left_secs.max(0);

        match finished {
            IntervalKind::Work => {
                self.showing_call_to_action = true;
            }
            IntervalKind::Break => {
                self.is_break = false;
                self.time_left_secs = self.durations.session_secs;
                self.showing_call_to_action = false;
            }
        }
        finished
    }

    /// Post-work choice: five more minutes of work, not started yet
    pub fn add_time_from_cta(&mut self) -> bool {
        if !self.showing_call_to_action {
            return false;
        }
        self.time_left_secs = EXTENSION_SECS;
        self.showing_call_to_action = false;
        true
    }

    /// Post-work choice: switch to a break. The caller starts it.
    pub fn begin_break_from_cta(&mut self) -> bool {
        if !self.showing_call_to_action {
            return false;
        }
        self.is_break = true;
        self.time_left_secs = self.durations.break_secs;
        self.showing_call_to_action = false;
        true
    }

    /// Hide the controls. Only allowed during a running countdown.
    pub fn hide_ui(&mut self) -> bool {
        if !self.is_running || self.ui_hidden {
            return false;
        }
        self.ui_hidden = true;
        true
    }

    /// Show the controls, returns whether they were hidden
    pub fn show_ui(&mut self) -> bool {
        std::mem::replace(&mut self.ui_hidden, false)
    }

    pub fn open_settings(&mut self) {
        self.settings_panel_open = true;
        self.ui_hidden = false;
    }

    pub fn close_settings(&mut self) {
        self.settings_panel_open = false;
    }

    /// Take new durations. A running countdown keeps its remaining time.
    pub fn apply_durations(&mut self, durations: Durations) {
        self.durations = durations;
        if !self.is_running {
            self.time_left_secs = durations.for_interval(self.interval());
        }
    }

    /// Hidden controls imply a running countdown, and the post-work prompt
    /// implies a stopped one.
    pub fn is_consistent(&self) -> bool {
        (!self.ui_hidden || self.is_running) && !(self.is_running && self.showing_call_to_action)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
