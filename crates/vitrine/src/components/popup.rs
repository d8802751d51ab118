//! Shared popup rendering helpers.
//!
//! Usage: draw the page as usual, then `render_backdrop`, then compute a
//! centered rect with `centered_rect_fixed` and draw the dialog frame and
//! content inside it.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Clear},
};

use crate::tui::Frame;

/// Render a modal-style backdrop that visually separates a popup from the
/// underlying page. Terminals have no real transparency, so a solid dark
/// fill stands in for the dim overlay.
pub fn render_backdrop(frame: &mut Frame<'_>, area: Rect) {
    let backdrop = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(backdrop, area);
}

/// Compute a centered rectangle with a fixed width/height clamped to the
/// available `area`.
pub fn centered_rect_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);

    let x = area.x.saturating_add((area.width.saturating_sub(w)) / 2);
    let y = area.y.saturating_add((area.height.saturating_sub(h)) / 2);

    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

/// Draw a rounded, bordered popup shell with a title at `area`, clearing
/// the area first so underlying content doesn't bleed through.
pub fn draw_popup_frame(frame: &mut Frame<'_>, area: Rect, title: impl Into<String>) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(block, area);
    area
}

/// Inner rect of a bordered block: shrink by one on each side if possible.
pub fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(area, 100, 100);
        assert_eq!(rect, area);
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(area, 20, 4);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn inner_rect_shrinks_by_border() {
        let rect = inner_rect(Rect::new(5, 5, 10, 6));
        assert_eq!(rect, Rect::new(6, 6, 8, 4));
    }
}
