//! Review carousel.
//!
//! A paged strip of customer reviews with pagination dots. The number of
//! slides per page follows the viewport width: wide terminals show two
//! slides side by side, narrow ones a single slide. Paging clamps at the
//! ends rather than wrapping.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{style, tui::Frame};

/// Viewport width at which the carousel switches to two slides per page.
pub const WIDE_BREAKPOINT: u16 = 110;

#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub author: &'static str,
    pub text: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        author: "Marina K.",
        text: "The team found us a flat in two weeks. Every viewing was arranged around our schedule.",
    },
    Review {
        author: "Oleg P.",
        text: "Sold my apartment above the asking price. Paperwork was handled start to finish.",
    },
    Review {
        author: "Anna S.",
        text: "Renting through them was painless. The contract was clear and the deposit came back in full.",
    },
    Review {
        author: "Dmitry V.",
        text: "Honest about every property's downsides, which saved us from a bad purchase.",
    },
    Review {
        author: "Elena R.",
        text: "They kept me updated at every step. I never had to chase anyone for an answer.",
    },
    Review {
        author: "Igor T.",
        text: "Second deal with this agency. Same care as the first time, five years later.",
    },
];

#[derive(Debug)]
pub struct Carousel {
    slides: &'static [Review],
    per_page: usize,
    page: usize,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            slides: REVIEWS,
            per_page: 1,
            page: 0,
        }
    }

    pub fn pages(&self) -> usize {
        self.slides.len().div_ceil(self.per_page)
    }

    pub fn active_page(&self) -> usize {
        self.page
    }

    pub fn next(&mut self) {
        if self.page + 1 < self.pages() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn goto(&mut self, page: usize) {
        self.page = page.min(self.pages().saturating_sub(1));
    }

    /// Re-derive slides-per-page from the viewport width and clamp the
    /// current page into the new range.
    pub fn resize(&mut self, width: u16) {
        self.per_page = if width >= WIDE_BREAKPOINT { 2 } else { 1 };
        self.page = self.page.min(self.pages().saturating_sub(1));
    }

    fn visible(&self) -> &[Review] {
        let start = self.page * self.per_page;
        let end = (start + self.per_page).min(self.slides.len());
        &self.slides[start..end]
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.resize(area.width);

        let block = Block::default().borders(Borders::ALL).title(" Reviews ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let visible = self.visible();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, visible.len().max(1) as u32);
                visible.len().max(1)
            ])
            .split(rows[0]);
        for (review, column) in visible.iter().zip(columns.iter()) {
            let card = Paragraph::new(vec![
                Line::from(review.text),
                Line::from(""),
                Line::styled(format!("— {}", review.author), style::hint()),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, *column);
        }

        let dots: String = (0..self.pages())
            .map(|p| if p == self.page { '●' } else { '○' })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Line::from("←/→ page"))
                .style(style::hint())
                .alignment(Alignment::Center),
            rows[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn narrow_viewport_pages_one_slide_at_a_time() {
        let mut carousel = Carousel::new();
        carousel.resize(80);
        assert_eq!(carousel.pages(), 6);
    }

    #[test]
    fn wide_viewport_pairs_slides() {
        let mut carousel = Carousel::new();
        carousel.resize(WIDE_BREAKPOINT);
        assert_eq!(carousel.pages(), 3);
    }

    #[test]
    fn paging_clamps_at_both_ends() {
        let mut carousel = Carousel::new();
        carousel.resize(80);
        carousel.prev();
        assert_eq!(carousel.active_page(), 0);
        for _ in 0..20 {
            carousel.next();
        }
        assert_eq!(carousel.active_page(), 5);
    }

    #[test]
    fn shrinking_page_count_clamps_the_active_page() {
        let mut carousel = Carousel::new();
        carousel.resize(80);
        carousel.goto(5);
        carousel.resize(WIDE_BREAKPOINT);
        assert_eq!(carousel.active_page(), 2);
    }

    #[test]
    fn goto_out_of_range_lands_on_the_last_page() {
        let mut carousel = Carousel::new();
        carousel.resize(80);
        carousel.goto(99);
        assert_eq!(carousel.active_page(), 5);
    }
}
