//! Section navigation bar.
//!
//! The landing page is a fixed virtual column of rows; each section owns
//! a row extent. The nav bar highlights the link whose section contains
//! the current scroll position (with a small look-ahead, so the highlight
//! flips slightly before the section top reaches the viewport edge), and
//! a link activation jumps the scroll to its section.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{style, tui::Frame};

/// Rows the nav highlight looks ahead of the scroll position.
pub const LOOKAHEAD: u16 = 3;

/// Total height of the virtual page, in rows.
pub const PAGE_ROWS: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Section {
    Home,
    Properties,
    Reviews,
    Contacts,
}

impl Section {
    /// (top, height) extent of this section, in virtual page rows.
    pub fn extent(self) -> (u16, u16) {
        match self {
            Section::Home => (0, 14),
            Section::Properties => (14, 16),
            Section::Reviews => (30, 14),
            Section::Contacts => (44, 12),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Properties => "Properties",
            Section::Reviews => "Reviews",
            Section::Contacts => "Contacts",
        }
    }

    /// The digit key that activates this nav link.
    pub fn hotkey(self) -> char {
        match self {
            Section::Home => '1',
            Section::Properties => '2',
            Section::Reviews => '3',
            Section::Contacts => '4',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Section::iter().find(|s| s.hotkey() == c)
    }
}

/// Which nav link is active for the given scroll position.
pub fn active_section(scroll: u16) -> Option<Section> {
    let pos = scroll.saturating_add(LOOKAHEAD);
    Section::iter().find(|s| {
        let (top, height) = s.extent();
        pos >= top && pos < top + height
    })
}

/// Render the nav bar with the active link highlighted.
pub fn render_nav(frame: &mut Frame<'_>, area: Rect, active: Option<Section>) {
    let mut spans: Vec<Span> = Vec::new();
    for section in Section::iter() {
        let label = format!(" [{}] {} ", section.hotkey(), section.title());
        let style = if Some(section) == active {
            style::active_marker()
        } else {
            style::field()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM).title(" vitrine "));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_highlights_home() {
        assert_eq!(active_section(0), Some(Section::Home));
    }

    #[test]
    fn highlight_flips_lookahead_rows_early() {
        // Properties starts at row 14; with a 3-row look-ahead the link
        // activates at scroll 11.
        assert_eq!(active_section(10), Some(Section::Home));
        assert_eq!(active_section(11), Some(Section::Properties));
    }

    #[test]
    fn each_section_resolves_at_its_top() {
        for section in Section::iter() {
            let (top, _) = section.extent();
            assert_eq!(active_section(top), Some(section), "{section}");
        }
    }

    #[test]
    fn beyond_the_page_nothing_is_active() {
        assert_eq!(active_section(PAGE_ROWS), None);
    }

    #[test]
    fn hotkeys_round_trip() {
        for section in Section::iter() {
            assert_eq!(Section::from_hotkey(section.hotkey()), Some(section));
        }
        assert_eq!(Section::from_hotkey('9'), None);
    }
}
