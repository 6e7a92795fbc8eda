use crate::domain::ViewModel;
use crate::ui::digits::{big_text, big_text_width, GLYPH_HEIGHT};
use crate::ui::styles::{border_style, clock_style, gauge_style, hint_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the clock with its status icon. Falls back to plain digits when
/// the area cannot fit the block font.
pub fn render_timer_pane(f: &mut Frame, view: &ViewModel, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(view.pulsing));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let clock_style = clock_style(view.interval, view.emphasized);
    let icon = view
        .status_icon
        .map(|icon| icon.glyph())
        .unwrap_or_default();

    let mut lines: Vec<Line> = Vec::new();
    let big = big_text(&view.clock)
        .filter(|rows| big_text_width(rows) <= inner.width as usize)
        .filter(|_| inner.height as usize >= GLYPH_HEIGHT + 2);

    match big {
        Some(rows) => {
            let top_padding = (inner.height as usize - (GLYPH_HEIGHT + 2)) / 2;
            lines.extend(std::iter::repeat(Line::raw("")).take(top_padding));
            lines.extend(rows.into_iter().map(|row| Line::styled(row, clock_style)));
        }
        None => {
            let top_padding = inner.height.saturating_sub(2) as usize / 2;
            lines.extend(std::iter::repeat(Line::raw("")).take(top_padding));
            lines.push(Line::styled(view.clock.clone(), clock_style));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(icon, hint_style())));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

/// Render the progress bar for the current interval
pub fn render_progress(f: &mut Frame, view: &ViewModel, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let gauge = Gauge::default()
        .gauge_style(gauge_style(view.interval))
        .ratio(view.progress)
        .label(format!("{:.0}%", view.progress * 100.0));
    f.render_widget(gauge, area);
}
