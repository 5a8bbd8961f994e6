//! Popup overlay widget for the indicator's properties.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::settings::PROPERTY_ITEMS;
use crate::app::state::AppState;

use super::theme::Theme;

// ───────────────────────────────────────── properties popup ──

/// Properties popup overlay — one row per configurable property.
pub struct PropertiesPopup<'a> {
    pub state: &'a AppState,
    pub selected: usize,
}

impl<'a> Widget for PropertiesPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (PROPERTY_ITEMS.len() as u16) + 5;
        let popup = centered_fixed(44, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Properties ")
            .title_style(Theme::popup_title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::popup_border_style());

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        for (i, item) in PROPERTY_ITEMS.iter().enumerate() {
            let is_selected = i == self.selected;
            let prefix = if is_selected { " ▸ " } else { "   " };
            let label_style = if is_selected {
                Theme::selected_style()
            } else {
                Theme::popup_text_style()
            };

            // Fixed-width columns: label left-aligned, value right-aligned.
            let label_col = format!("{prefix}{:<20}", item.label());
            let value = item.display_value(self.state);
            let value_width = (inner.width as usize)
                .saturating_sub(label_col.chars().count() + 1)
                .max(1);
            let value_col = format!("{value:>value_width$} ");

            let value_style = if is_selected {
                Theme::value_style().patch(Theme::selected_style())
            } else {
                Theme::value_style()
            };

            lines.push(Line::from(vec![
                Span::styled(label_col, label_style),
                Span::styled(value_col, value_style),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  ←/→: adjust  w: save  Esc: close",
            Theme::hint_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn lists_every_property_with_its_value() {
        let state = AppState::new(AppConfig::default(), false);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        PropertiesPopup {
            state: &state,
            selected: 0,
        }
        .render(area, &mut buf);

        let text: Vec<String> = (0..area.height).map(|y| row_text(&buf, y)).collect();
        let screen = text.join("\n");
        for item in PROPERTY_ITEMS {
            assert!(screen.contains(item.label()), "missing {}", item.label());
        }
        assert!(screen.contains("300ms"));
        assert!(screen.contains("#9acd32"));
        assert!(screen.contains("▸ Animation Interval"));
    }

    #[test]
    fn centered_fixed_clamps_to_area() {
        let r = centered_fixed(44, 13, Rect::new(0, 0, 20, 10));
        assert_eq!(r, Rect::new(0, 0, 20, 10));
        let r = centered_fixed(10, 4, Rect::new(0, 0, 20, 10));
        assert_eq!(r, Rect::new(5, 3, 10, 4));
    }
}
