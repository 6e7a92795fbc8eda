use crate::app::AppState;
use crate::domain::{IntervalKind, ViewModel};
use crate::ui::styles::{active_indicator_style, hint_style, inactive_indicator_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the title bar with the work/break indicator
pub fn render_header(f: &mut Frame, app: &AppState, view: &ViewModel, area: Rect) {
    if !view.header_visible || area.height == 0 {
        return;
    }

    let mut spans = vec![Span::styled(" 🍅 Pomodoro   ", title_style())];

    for kind in IntervalKind::all() {
        let label = format!(" {} {} ", kind.symbol(), kind.name());
        let style = if *kind == view.interval {
            active_indicator_style(*kind)
        } else {
            inactive_indicator_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    if app.completed_work_sessions > 0 {
        spans.push(Span::styled(
            format!("  done today: {}", app.completed_work_sessions),
            hint_style(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
