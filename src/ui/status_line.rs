use crate::app::AppState;
use crate::domain::{IntervalKind, Phase};
use crate::ui::styles::hint_style;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

fn phase_text(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle(IntervalKind::Work) => "Ready to focus",
        Phase::Idle(IntervalKind::Break) => "Break paused",
        Phase::Running(IntervalKind::Work) => "Focusing",
        Phase::Running(IntervalKind::Break) => "On a break",
        Phase::CallToAction => "Work session complete",
    }
}

/// Render the status row with the time of the last completion
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    if area.height == 0 {
        return;
    }

    let mut text = phase_text(app.session.phase()).to_string();
    if let Some((kind, at)) = &app.last_completion {
        text.push_str(&format!("  ·  {} finished at {}", kind.name(), at.format("%H:%M")));
    }

    let paragraph = Paragraph::new(text)
        .style(hint_style())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
