//! Success toast.
//!
//! A small notification box pinned to the top-right corner. It appears
//! when a submission completes, disappears on its own after the
//! configured lifetime (the app arms the hide timer), and can be closed
//! early with `x`.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    action::Action,
    components::Component,
    state::{State, ToastState},
    style,
    tui::EventResponse,
};

#[derive(Debug, Default)]
pub struct ToastOverlay {
    message: String,
}

impl ToastOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for ToastOverlay {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        if state.toast == ToastState::Visible && key.code == KeyCode::Char('x') {
            return Ok(Some(EventResponse::Stop(Action::HideToast)));
        }
        Ok(None)
    }

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        match action {
            Action::ShowToast(message) => {
                self.message = message;
                state.show_toast();
            }
            Action::HideToast => state.hide_toast(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut crate::tui::Frame<'_>, area: Rect, state: &State) -> Result<()> {
        if state.toast != ToastState::Visible {
            return Ok(());
        }
        let width = (self.message.chars().count() as u16 + 4).min(area.width);
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y,
            width,
            height: 4.min(area.height),
        };
        f.render_widget(Clear, rect);
        let body = Paragraph::new(vec![
            Line::from(self.message.as_str()),
            Line::styled("x: close", style::hint()),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ✓ ")
                .border_style(style::active_marker()),
        );
        f.render_widget(body, rect);
        Ok(())
    }
}
