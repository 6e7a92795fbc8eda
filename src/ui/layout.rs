use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub timer_area: Rect,
    pub gauge_area: Rect,
    pub controls_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Header: title and interval indicator (1 row)
/// - Timer: clock and status icon (rest)
/// - Gauge: progress (1 row)
/// - Controls: key hints or the post-work prompt (1 row)
/// - Status: last completion (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Timer
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Status
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        timer_area: chunks[1],
        gauge_area: chunks[2],
        controls_area: chunks[4],
        status_area: chunks[5],
    }
}

/// Create centered modal area (for the settings overlay)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.timer_area.height, 19);
        assert_eq!(layout.gauge_area.height, 1);
        assert_eq!(layout.controls_area.height, 1);
        assert_eq!(layout.status_area.y, 23);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 12);
    }
}
