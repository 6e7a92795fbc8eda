pub mod digits;
pub mod header;
pub mod keybindings;
pub mod layout;
pub mod settings_form;
pub mod status_line;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::ViewModel;
use header::render_header;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use settings_form::render_settings_form;
use status_line::render_status_line;
use timer_pane::{render_progress, render_timer_pane};

/// Main render function - draws the entire UI from the projected view.
/// Each piece draws independently and skips itself when it has no room.
pub fn render(f: &mut Frame, app: &AppState, view: &ViewModel) {
    let size = f.size();
    let layout = create_layout(size);

    render_header(f, app, view, layout.header_area);
    render_timer_pane(f, view, layout.timer_area);
    render_progress(f, view, layout.gauge_area);
    render_keybindings(f, view, layout.controls_area);
    render_status_line(f, app, layout.status_area);

    if view.settings_open {
        render_settings_form(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chime::RecordingTone;
    use crate::persistence::store::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = app.view(Instant::now());
        terminal.draw(|f| render(f, app, &view)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn create_test_app() -> AppState {
        AppState::new(Box::new(MemoryStore::default()), Box::new(RecordingTone::default()))
    }

    #[test]
    fn test_render_idle_screen() {
        let app = create_test_app();
        let screen = draw(&app, 80, 24);

        assert!(screen.contains("Pomodoro"));
        assert!(screen.contains("Start"));
        assert!(screen.contains("Ready to focus"));
        assert!(screen.contains("█"));
    }

    #[test]
    fn test_render_falls_back_to_plain_clock() {
        let app = create_test_app();
        let screen = draw(&app, 20, 10);
        assert!(screen.contains("25:00"));
    }

    #[test]
    fn test_render_call_to_action() {
        let mut app = create_test_app();
        app.session.time_left_secs = 0;
        app.session.showing_call_to_action = true;

        let screen = draw(&app, 80, 24);
        assert!(screen.contains("Add Time"));
        assert!(screen.contains("Start Break"));
        assert!(!screen.contains("Reset"));
    }

    #[test]
    fn test_render_settings_overlay() {
        let mut app = create_test_app();
        app.open_settings();

        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Settings"));
        assert!(screen.contains("25.0"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let app = create_test_app();
        draw(&app, 4, 3);
    }
}
