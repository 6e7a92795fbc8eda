use crate::domain::{ViewModel, EXTENSION_SECS};
use crate::ui::styles::{hint_style, key_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn hint(key: &'static str, action: impl Into<String>) -> [Span<'static>; 2] {
    [
        Span::styled(key, key_style()),
        Span::styled(action.into(), hint_style()),
    ]
}

/// Render the controls row: key hints, or the post-work choices
pub fn render_keybindings(f: &mut Frame, view: &ViewModel, area: Rect) {
    if area.height == 0 {
        return;
    }

    let spans: Vec<Span> = if view.cta_visible {
        [hint("a", " + Add Time    "), hint("b", " Start Break")]
            .into_iter()
            .flatten()
            .collect()
    } else if view.controls_visible {
        [
            hint("Space", format!(" {}   ", view.start_pause_label)),
            hint("e", format!(" +{} min   ", EXTENSION_SECS / 60)),
            hint("r", " Reset   "),
            hint("s", " Settings   "),
            hint("q", " Quit"),
        ]
        .into_iter()
        .flatten()
        .collect()
    } else {
        vec![Span::styled("move the mouse or press any key", hint_style())]
    };

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
