use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use std::time::Instant;

/// Handle a terminal event. Returns true when the app should quit.
pub fn handle_event(app: &mut AppState, event: Event, now: Instant) -> bool {
    match event {
        // Only process key press events (ignore key release)
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key, now),
        Event::Mouse(mouse) => {
            if matches!(
                mouse.kind,
                MouseEventKind::Moved | MouseEventKind::Down(_) | MouseEventKind::Drag(_)
            ) {
                app.register_activity(now);
            }
            false
        }
        _ => false,
    }
}

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    if is_quit(&key) {
        return true;
    }

    // While the controls are hidden a key press only brings them back
    if app.register_activity(now) {
        return false;
    }

    match app.ui_mode() {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::CallToAction => handle_call_to_action_mode(app, key, now),
        UiMode::Settings => handle_settings_mode(app, key),
    }
    false
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        // Start/pause
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_timer(now),

        // Five more minutes
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.extend(now)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),

        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),

        _ => {}
    }
}

/// Handle keys while the post-work prompt is up
fn handle_call_to_action_mode(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.add_time_from_cta();
        }

        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.start_break_from_cta(now);
        }

        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),

        _ => {}
    }
}

/// Handle keys in the settings overlay
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_settings_form(),
        KeyCode::Esc => app.close_settings(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.settings_form_toggle_field()
        }
        KeyCode::Backspace => app.settings_form_backspace(),
        KeyCode::Char(c) => app.settings_form_add_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chime::RecordingTone;
    use crate::persistence::store::MemoryStore;
    use crossterm::event::{MouseEvent, MouseEventKind};

    fn create_test_app() -> AppState {
        AppState::new(Box::new(MemoryStore::default()), Box::new(RecordingTone::default()))
    }

    fn press(app: &mut AppState, code: KeyCode, now: Instant) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    fn mouse_move(app: &mut AppState, now: Instant) {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!handle_event(app, event, now));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        let now = Instant::now();
        assert!(press(&mut app, KeyCode::Char('q'), now));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now
        ));
        assert!(!press(&mut app, KeyCode::Char('c'), now));
    }

    #[test]
    fn test_space_starts_and_first_key_reveals() {
        let mut app = create_test_app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char(' '), now);
        assert!(app.session.is_running);
        assert!(app.session.ui_hidden);

        // Hidden: the press only reveals
        press(&mut app, KeyCode::Char(' '), now);
        assert!(app.session.is_running);
        assert!(!app.session.ui_hidden);

        press(&mut app, KeyCode::Char(' '), now);
        assert!(!app.session.is_running);
    }

    #[test]
    fn test_mouse_movement_reveals_controls() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.start(now);

        mouse_move(&mut app, now);
        assert!(!app.session.ui_hidden);
        assert!(app.schedule.auto_hide_armed());
    }

    #[test]
    fn test_extend_and_reset_keys() {
        let mut app = create_test_app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('e'), now);
        assert_eq!(app.session.time_left_secs, 1800);
        press(&mut app, KeyCode::Char('r'), now);
        assert_eq!(app.session.time_left_secs, 1500);
    }

    #[test]
    fn test_call_to_action_keys() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.session.time_left_secs = 0;
        app.session.showing_call_to_action = true;

        // Start is not on offer while the prompt is up
        press(&mut app, KeyCode::Char('e'), now);
        assert_eq!(app.session.time_left_secs, 0);

        press(&mut app, KeyCode::Char('b'), now);
        assert!(app.session.is_break);
        assert!(app.session.is_running);
        assert_eq!(app.session.time_left_secs, 300);
    }

    #[test]
    fn test_settings_keys() {
        let mut app = create_test_app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('s'), now);
        assert_eq!(app.ui_mode(), UiMode::Settings);

        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Char('1'), now);
        press(&mut app, KeyCode::Char('0'), now);
        press(&mut app, KeyCode::Tab, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Char('3'), now);
        press(&mut app, KeyCode::Enter, now);

        assert_eq!(app.ui_mode(), UiMode::Normal);
        assert_eq!(app.session.durations.session_secs, 600);
        assert_eq!(app.session.durations.break_secs, 180);
    }

    #[test]
    fn test_escape_closes_settings_without_saving() {
        let mut app = create_test_app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('s'), now);
        press(&mut app, KeyCode::Char('9'), now);
        press(&mut app, KeyCode::Esc, now);

        assert_eq!(app.ui_mode(), UiMode::Normal);
        assert!(app.settings_form.is_none());
        assert_eq!(app.session.durations.session_secs, 1500);
    }
}
