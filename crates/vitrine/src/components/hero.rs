//! Hero banner for the home section.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use tui_big_text::{BigText, PixelSize};

use crate::{style, tui::Frame};

const TAGLINE: &str = "Property that works for you";
const CTA_HINT: &str = "Press r to leave a request";

pub fn render_hero(frame: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(style::active_marker())
        .lines(vec!["VITRINE".into()])
        .build();
    frame.render_widget(title, chunks[1]);

    let tagline = Paragraph::new(Line::from(TAGLINE)).alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[2]);

    let hint = Paragraph::new(Line::from(CTA_HINT))
        .style(style::hint())
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}
