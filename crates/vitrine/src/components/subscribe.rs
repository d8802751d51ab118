//! Newsletter subscribe form in the contacts section.
//!
//! A single email field with live validation: while typing, an invalid
//! non-empty address shows the format error and a valid or cleared field
//! removes it. Submitting with an empty field shows the required-field
//! error instead. A submit flips the button into its pending label until
//! the finished signal arrives, then the field resets and a toast is
//! requested.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use intake::{
    error_message, LeadField, SubscribeFormData, ValidationError,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    action::{Action, SubmitTarget},
    components::Component,
    state::{InputMode, State},
    style,
    tui::EventResponse,
};

const IDLE_LABEL: &str = "Subscribe";
const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_TOAST: &str = "Your email has been sent";

#[derive(Debug, Default)]
pub struct SubscribeForm {
    input: Input,
    error: Option<&'static str>,
    submitting: bool,
    focused: bool,
}

impl SubscribeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self, state: &mut State) {
        self.focused = true;
        state.input_mode = InputMode::Insert;
    }

    fn blur(&mut self, state: &mut State) {
        self.focused = false;
        state.input_mode = InputMode::Normal;
        // Leaving the field only flags an address that is present but
        // malformed; an empty field stays quiet until submit.
        self.error = match SubscribeFormData::new(self.input.value()).validate() {
            Err(ValidationError::InvalidFormat) => {
                Some(error_message(LeadField::Email, ValidationError::InvalidFormat))
            }
            _ => None,
        };
    }

    fn revalidate_live(&mut self) {
        self.error = match SubscribeFormData::new(self.input.value()).validate() {
            Ok(()) | Err(ValidationError::EmptyField) => None,
            Err(err) => Some(error_message(LeadField::Email, err)),
        };
    }

    fn submit(&mut self) -> Option<Action> {
        if self.submitting {
            return Some(Action::Update);
        }
        match SubscribeFormData::new(self.input.value()).validate() {
            Err(err) => {
                self.error = Some(error_message(LeadField::Email, err));
                Some(Action::Update)
            }
            Ok(()) => {
                self.error = None;
                self.submitting = true;
                Some(Action::SubmitStarted(SubmitTarget::Subscribe))
            }
        }
    }

    fn button_label(&self) -> &'static str {
        if self.submitting {
            PENDING_LABEL
        } else {
            IDLE_LABEL
        }
    }
}

impl Component for SubscribeForm {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        if !self.focused {
            return Ok(None);
        }
        match key.code {
            KeyCode::Esc => {
                self.blur(state);
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
            KeyCode::Enter => Ok(self.submit().map(EventResponse::Stop)),
            _ => {
                self.input
                    .handle_event(&crossterm::event::Event::Key(key));
                self.revalidate_live();
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
        }
    }

    fn update(&mut self, action: Action, _state: &mut State) -> Result<Option<Action>> {
        if action == Action::SubmitFinished(SubmitTarget::Subscribe) {
            self.submitting = false;
            self.input.reset();
            self.error = None;
            return Ok(Some(Action::ShowToast(SUCCESS_TOAST.to_string())));
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut crate::tui::Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Stay in touch ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        f.render_widget(Paragraph::new("Get new listings by email"), rows[0]);

        let field_style = if self.error.is_some() {
            style::invalid_field()
        } else if self.focused {
            style::focused_field()
        } else {
            style::field()
        };
        let scroll = self.input.visual_scroll(rows[1].width.max(1) as usize - 1);
        let field = Paragraph::new(self.input.value())
            .style(field_style)
            .scroll((0, scroll as u16));
        f.render_widget(field, rows[1]);
        if self.focused {
            let x = (self.input.visual_cursor().max(scroll) - scroll) as u16;
            f.set_cursor_position((rows[1].x + x, rows[1].y));
        }

        if let Some(message) = self.error {
            f.render_widget(
                Paragraph::new(Line::from(message)).style(style::error_text()),
                rows[2],
            );
        }

        let button_style = if self.submitting {
            style::disabled_control()
        } else {
            style::active_marker()
        };
        f.render_widget(
            Paragraph::new(format!("[ {} ]", self.button_label())).style(button_style),
            rows[3],
        );
        Ok(())
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

    fn type_text(form: &mut SubscribeForm, state: &mut State, text: &str) {
        for c in text.chars() {
            form.handle_key_events(key(KeyCode::Char(c)), state).unwrap();
        }
    }

    #[test]
    fn unfocused_form_ignores_keys() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        let response = form.handle_key_events(key(KeyCode::Char('a')), &mut state).unwrap();
        assert!(response.is_none());
        assert_eq!(form.input.value(), "");
    }

    #[test]
    fn typing_an_invalid_address_shows_the_format_error_live() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        type_text(&mut form, &mut state, "user@");
        assert_eq!(form.error, Some("Please enter a valid email address"));
    }

    #[test]
    fn completing_the_address_clears_the_error() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        type_text(&mut form, &mut state, "user@");
        type_text(&mut form, &mut state, "mail.com");
        assert_eq!(form.error, None);
    }

    #[test]
    fn clearing_the_field_clears_the_error_without_showing_required() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        type_text(&mut form, &mut state, "x");
        for _ in 0..1 {
            form.handle_key_events(key(KeyCode::Backspace), &mut state).unwrap();
        }
        assert_eq!(form.error, None);
    }

    #[test]
    fn submitting_empty_shows_the_required_error() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        let response = form.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::Update)));
        assert_eq!(form.error, Some("Please enter your email address"));
        assert!(!form.submitting);
    }

    #[test]
    fn submitting_a_valid_address_starts_the_pending_state() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        type_text(&mut form, &mut state, "user@mail.com");
        let response = form.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(
            response,
            Some(EventResponse::Stop(Action::SubmitStarted(SubmitTarget::Subscribe)))
        );
        assert_eq!(form.button_label(), "Sending...");
    }

    #[test]
    fn a_second_enter_while_pending_does_not_resubmit() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        type_text(&mut form, &mut state, "user@mail.com");
        form.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        let response = form.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::Update)));
    }

    #[test]
    fn finishing_the_submit_resets_the_field_and_requests_a_toast() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        type_text(&mut form, &mut state, "user@mail.com");
        form.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        let followup = form
            .update(Action::SubmitFinished(SubmitTarget::Subscribe), &mut state)
            .unwrap();
        assert_eq!(followup, Some(Action::ShowToast(SUCCESS_TOAST.to_string())));
        assert_eq!(form.input.value(), "");
        assert_eq!(form.button_label(), "Subscribe");
    }

    #[test]
    fn blurring_with_a_malformed_address_keeps_the_error_visible() {
        let mut form = SubscribeForm::new();
        let mut state = State::new();
        form.focus(&mut state);
        type_text(&mut form, &mut state, "nope");
        form.handle_key_events(key(KeyCode::Esc), &mut state).unwrap();
        assert!(!form.is_focused());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(form.error, Some("Please enter a valid email address"));
    }
}
