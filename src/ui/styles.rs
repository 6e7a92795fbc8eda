use crate::domain::IntervalKind;
use ratatui::style::{Color, Modifier, Style};

/// Accent color of an interval
pub fn interval_color(kind: IntervalKind) -> Color {
    match kind {
        IntervalKind::Work => Color::LightRed,
        IntervalKind::Break => Color::Yellow,
    }
}

/// Active interval indicator
pub fn active_indicator_style(kind: IntervalKind) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(interval_color(kind))
        .add_modifier(Modifier::BOLD)
}

/// Inactive interval indicator
pub fn inactive_indicator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Clock digits
pub fn clock_style(kind: IntervalKind, emphasized: bool) -> Style {
    let style = Style::default().fg(interval_color(kind));
    if emphasized {
        style.fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style, brighter while a finished work interval pulses
pub fn border_style(pulsing: bool) -> Style {
    if pulsing {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Progress gauge style
pub fn gauge_style(kind: IntervalKind) -> Style {
    Style::default().fg(interval_color(kind)).bg(Color::DarkGray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Keybinding key style
pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}
