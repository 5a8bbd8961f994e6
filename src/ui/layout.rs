//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout with the indicator pane and a bottom status bar.
pub struct AppLayout {
    pub indicator_area: Rect,
    /// `indicator_area` minus its border.
    pub indicator_inner: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // indicator pane (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let indicator_area = chunks[0];
        let indicator_inner = Rect::new(
            indicator_area.x.saturating_add(1),
            indicator_area.y.saturating_add(1),
            indicator_area.width.saturating_sub(2),
            indicator_area.height.saturating_sub(2),
        );

        Self {
            indicator_area,
            indicator_inner,
            status_area: chunks[1],
        }
    }
}
