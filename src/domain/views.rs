use crate::domain::{IntervalKind, Session};

/// Icon shown under the clock while there is time left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Play,
    Pause,
}

impl StatusIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIcon::Play => "▶",
            StatusIcon::Pause => "⏸",
        }
    }
}

/// Everything the render layer needs, computed from the session alone
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub clock: String,
    pub progress: f64,
    pub interval: IntervalKind,
    pub header_visible: bool,
    pub controls_visible: bool,
    pub cta_visible: bool,
    pub settings_open: bool,
    pub status_icon: Option<StatusIcon>,
    pub start_pause_label: &'static str,
    /// Short highlight after a work interval finishes
    pub pulsing: bool,
    /// Short emphasis on the clock after time was added
    pub emphasized: bool,
}

impl ViewModel {
    pub fn project(session: &Session) -> Self {
        let status_icon = if session.time_left_secs <= 0 {
            None
        } else if session.is_running {
            Some(StatusIcon::Play)
        } else {
            Some(StatusIcon::Pause)
        };

        Self {
            clock: format_clock(session.time_left_secs),
            progress: progress_fraction(session.time_left_secs, session.base_duration()),
            interval: session.interval(),
            header_visible: !session.ui_hidden,
            // The prompt replaces the controls even when nothing is hidden
            controls_visible: !session.showing_call_to_action && !session.ui_hidden,
            cta_visible: session.showing_call_to_action,
            settings_open: session.settings_panel_open,
            status_icon,
            start_pause_label: if session.is_running { "Pause" } else { "Start" },
            pulsing: false,
            emphasized: false,
        }
    }
}

/// Format seconds as zero-padded "MM:SS". Minutes are not folded into hours.
pub fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Fraction of the interval already elapsed, clamped to [0, 1]
pub fn progress_fraction(time_left_secs: i64, base_duration_secs: i64) -> f64 {
    if base_duration_secs <= 0 {
        return 1.0;
    }
    (1.0 - time_left_secs as f64 / base_duration_secs as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(3725), "62:05");
        assert_eq!(format_clock(-3), "00:00");
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(1500, 1500), 0.0);
        assert_eq!(progress_fraction(750, 1500), 0.5);
        assert_eq!(progress_fraction(0, 1500), 1.0);
        // Extended past the configured length
        assert_eq!(progress_fraction(1800, 1500), 0.0);
    }

    #[test]
    fn test_project_idle_session() {
        let view = ViewModel::project(&Session::default());
        assert_eq!(view.clock, "25:00");
        assert_eq!(view.status_icon, Some(StatusIcon::Pause));
        assert_eq!(view.start_pause_label, "Start");
        assert!(view.header_visible);
        assert!(view.controls_visible);
        assert!(!view.cta_visible);
        assert_eq!(view.interval, IntervalKind::Work);
    }

    #[test]
    fn test_project_hidden_running_session() {
        let mut session = Session::default();
        session.start();
        session.hide_ui();

        let view = ViewModel::project(&session);
        assert_eq!(view.status_icon, Some(StatusIcon::Play));
        assert_eq!(view.start_pause_label, "Pause");
        assert!(!view.header_visible);
        assert!(!view.controls_visible);
    }

    #[test]
    fn test_project_call_to_action() {
        let mut session = Session::default();
        session.start();
        session.time_left_secs = 0;
        session.complete();

        let view = ViewModel::project(&session);
        assert!(view.cta_visible);
        assert!(!view.controls_visible);
        assert_eq!(view.status_icon, None);
        assert_eq!(view.progress, 1.0);
    }
}
