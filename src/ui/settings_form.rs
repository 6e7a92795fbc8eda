use crate::app::AppState;
use crate::settings::{BREAK_MINUTES_RANGE, WORK_MINUTES_RANGE};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the settings overlay
pub fn render_settings_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.settings_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let fields = [
            (
                format!(
                    "Work Duration (minutes, {}-{})",
                    WORK_MINUTES_RANGE.start(),
                    WORK_MINUTES_RANGE.end()
                ),
                &form.session_minutes,
            ),
            (
                format!(
                    "Break Duration (minutes, {}-{})",
                    BREAK_MINUTES_RANGE.start(),
                    BREAK_MINUTES_RANGE.end()
                ),
                &form.break_minutes,
            ),
        ];

        let mut lines = vec![Line::raw("")];
        for (idx, (label, value)) in fields.iter().enumerate() {
            let editing = form.editing_field == idx;
            lines.push(Line::raw(if editing {
                format!("{} (editing)", label)
            } else {
                label.clone()
            }));
            lines.push(Line::from(vec![
                Span::raw("> "),
                Span::styled(value.as_str(), modal_title_style()),
                if editing {
                    Span::styled("█", modal_title_style()) // Cursor
                } else {
                    Span::raw("")
                },
            ]));
            lines.push(Line::raw(""));
        }

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(error.as_str(), error_style())));
            lines.push(Line::raw(""));
        }

        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to close"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⚙ Settings ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
