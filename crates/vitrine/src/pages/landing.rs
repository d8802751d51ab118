//! The landing page.
//!
//! A scrollable virtual column of four sections (hero, properties,
//! reviews, contacts) under a fixed nav bar. Scroll keys move through the
//! column unless the page marker set by the open modal locks them out;
//! digit keys jump straight to a section.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    action::Action,
    components::{
        hero,
        nav::{self, Section},
        reviews::Carousel,
        subscribe::SubscribeForm,
        Component,
    },
    pages::Page,
    state::{InputMode, State},
    style,
    tui::{Event, EventResponse, Frame},
};

#[derive(Debug, Default)]
pub struct LandingPage {
    scroll: u16,
    carousel: Carousel,
    subscribe: SubscribeForm,
    /// Body height from the last draw, for clamping scroll and page jumps.
    viewport_rows: u16,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_scroll(&self) -> u16 {
        nav::PAGE_ROWS.saturating_sub(self.viewport_rows.max(1))
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = self.scroll as i32 + delta;
        self.scroll = target.clamp(0, self.max_scroll() as i32) as u16;
    }

    fn scroll_to(&mut self, section: Section) {
        let (top, _) = section.extent();
        self.scroll = top.min(self.max_scroll());
    }

    fn handle_scroll_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_rows.max(1) as i32)),
            KeyCode::PageDown => self.scroll_by(self.viewport_rows.max(1) as i32),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            _ => return false,
        }
        true
    }

    fn draw_section(
        &mut self,
        frame: &mut Frame<'_>,
        body: Rect,
        section: Section,
        state: &State,
    ) -> Result<()> {
        let (top, height) = section.extent();
        let view_top = self.scroll;
        let view_bottom = self.scroll + body.height;
        let visible_top = top.max(view_top);
        let visible_bottom = (top + height).min(view_bottom);
        if visible_top >= visible_bottom {
            return Ok(());
        }
        let rect = Rect {
            x: body.x,
            y: body.y + (visible_top - view_top),
            width: body.width,
            height: visible_bottom - visible_top,
        };
        match section {
            Section::Home => hero::render_hero(frame, rect),
            Section::Properties => draw_properties(frame, rect),
            Section::Reviews => self.carousel.draw(frame, rect),
            Section::Contacts => self.subscribe.draw(frame, rect, state)?,
        }
        Ok(())
    }
}

fn draw_properties(frame: &mut Frame<'_>, area: Rect) {
    let listings = [
        ("Two-room flat, city centre", "54 m², 4th floor"),
        ("Family house with a garden", "120 m², 6 acres"),
        ("Studio near the river", "28 m², new build"),
        ("Office space downtown", "85 m², open plan"),
    ];
    let mut lines: Vec<Line> = Vec::new();
    for (title, details) in listings {
        lines.push(Line::from(title));
        lines.push(Line::styled(format!("  {details}"), style::hint()));
        lines.push(Line::from(""));
    }
    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Properties "),
    );
    frame.render_widget(body, area);
}

impl Page for LandingPage {
    fn name(&self) -> &str {
        "landing"
    }

    fn handle_events(
        &mut self,
        event: Event,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        let Event::Key(key) = event else {
            return Ok(None);
        };
        self.handle_key_events(key, state)
    }

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        self.subscribe.update(action, state)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.viewport_rows = chunks[1].height;
        self.scroll = self.scroll.min(self.max_scroll());

        nav::render_nav(frame, chunks[0], nav::active_section(self.scroll));
        for section in [
            Section::Home,
            Section::Properties,
            Section::Reviews,
            Section::Contacts,
        ] {
            self.draw_section(frame, chunks[1], section, state)?;
        }
        Ok(())
    }
}

impl LandingPage {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        // An editing subscribe box owns the keyboard until it blurs.
        if self.subscribe.is_focused() {
            return self.subscribe.handle_key_events(key, state);
        }
        if state.input_mode != InputMode::Normal {
            return Ok(None);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(Some(EventResponse::Stop(Action::Quit))),
            KeyCode::Char('r') => return Ok(Some(EventResponse::Stop(Action::OpenModal))),
            KeyCode::Char('s') => {
                self.subscribe.focus(state);
                self.scroll_to(Section::Contacts);
                return Ok(Some(EventResponse::Stop(Action::Update)));
            }
            KeyCode::Left => {
                self.carousel.prev();
                return Ok(Some(EventResponse::Stop(Action::Update)));
            }
            KeyCode::Right => {
                self.carousel.next();
                return Ok(Some(EventResponse::Stop(Action::Update)));
            }
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_hotkey(c) {
                    if !state.scroll_locked {
                        self.scroll_to(section);
                    }
                    return Ok(Some(EventResponse::Stop(Action::Update)));
                }
            }
            _ => {}
        }

        if !state.scroll_locked && self.handle_scroll_key(key.code) {
            return Ok(Some(EventResponse::Stop(Action::Update)));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page_with_viewport(rows: u16) -> LandingPage {
        let mut page = LandingPage::new();
        page.viewport_rows = rows;
        page
    }

    #[test]
    fn q_requests_quit_in_normal_mode() {
        let mut page = page_with_viewport(30);
        let mut state = State::new();
        let response = page.handle_key_events(key(KeyCode::Char('q')), &mut state).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::Quit)));
    }

    #[test]
    fn r_opens_the_request_modal() {
        let mut page = page_with_viewport(30);
        let mut state = State::new();
        let response = page.handle_key_events(key(KeyCode::Char('r')), &mut state).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::OpenModal)));
    }

    #[test]
    fn scroll_keys_move_the_page_and_clamp() {
        let mut page = page_with_viewport(30);
        let mut state = State::new();
        page.handle_key_events(key(KeyCode::Up), &mut state).unwrap();
        assert_eq!(page.scroll, 0);
        page.handle_key_events(key(KeyCode::End), &mut state).unwrap();
        assert_eq!(page.scroll, nav::PAGE_ROWS - 30);
        page.handle_key_events(key(KeyCode::Down), &mut state).unwrap();
        assert_eq!(page.scroll, nav::PAGE_ROWS - 30);
    }

    #[test]
    fn scroll_keys_are_ignored_while_the_page_is_locked() {
        let mut page = page_with_viewport(30);
        let mut state = State::new();
        state.open_modal();
        let response = page.handle_key_events(key(KeyCode::Down), &mut state).unwrap();
        assert!(response.is_none());
        assert_eq!(page.scroll, 0);
    }

    #[test]
    fn digit_keys_jump_to_their_section() {
        let mut page = page_with_viewport(20);
        let mut state = State::new();
        page.handle_key_events(key(KeyCode::Char('3')), &mut state).unwrap();
        assert_eq!(page.scroll, Section::Reviews.extent().0);
        assert_eq!(nav::active_section(page.scroll), Some(Section::Reviews));
    }

    #[test]
    fn s_focuses_the_subscribe_box_and_scrolls_to_contacts() {
        let mut page = page_with_viewport(30);
        let mut state = State::new();
        page.handle_key_events(key(KeyCode::Char('s')), &mut state).unwrap();
        assert!(page.subscribe.is_focused());
        assert_eq!(state.input_mode, InputMode::Insert);
        assert_eq!(page.scroll, page.max_scroll().min(Section::Contacts.extent().0));
    }

    #[test]
    fn a_focused_subscribe_box_swallows_page_hotkeys() {
        let mut page = page_with_viewport(30);
        let mut state = State::new();
        page.handle_key_events(key(KeyCode::Char('s')), &mut state).unwrap();
        let response = page.handle_key_events(key(KeyCode::Char('q')), &mut state).unwrap();
        // 'q' was typed into the email field, not treated as quit.
        assert_eq!(response, Some(EventResponse::Stop(Action::Update)));
    }
}
