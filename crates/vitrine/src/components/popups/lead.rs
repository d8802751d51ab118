//! Lead-capture modal.
//!
//! The request dialog: a deal choice group, three text fields, the
//! privacy-policy checkbox and a submit button. Focus starts unset and is
//! moved to the name field by a deferred action shortly after the modal
//! opens. Leaving a text field validates it (blur), editing clears its
//! error, and the phone field re-applies the display mask on every
//! keystroke. Submit validates everything at once, shows all failures and
//! focuses the first offender; a clean submit flips the button into its
//! pending label and fires the deferred completion.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use intake::{
    error_message, format_phone, FieldErrors, LeadField, LeadFormData,
    flow::first_focus_target,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use strum::IntoEnumIterator;
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    action::{Action, SubmitTarget},
    components::{popup, Component},
    state::{DealKind, InputMode, State},
    style,
    tui::EventResponse,
};

const TITLE: &str = "Leave a request";
const IDLE_LABEL: &str = "Submit";
const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_TOAST: &str = "Your request has been sent";

const DIALOG_WIDTH: u16 = 58;
const DIALOG_HEIGHT: u16 = 22;

/// Focusable controls of the dialog, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Deal,
    Name,
    Phone,
    Email,
    Agreement,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Deal,
        Focus::Name,
        Focus::Phone,
        Focus::Email,
        Focus::Agreement,
        Focus::Submit,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn field(self) -> Option<LeadField> {
        match self {
            Focus::Name => Some(LeadField::Name),
            Focus::Phone => Some(LeadField::Phone),
            Focus::Email => Some(LeadField::Email),
            Focus::Agreement => Some(LeadField::Agreement),
            Focus::Deal | Focus::Submit => None,
        }
    }
}

fn focus_for(field: LeadField) -> Focus {
    match field {
        LeadField::Name => Focus::Name,
        LeadField::Phone => Focus::Phone,
        LeadField::Email => Focus::Email,
        LeadField::Agreement => Focus::Agreement,
    }
}

#[derive(Debug)]
pub struct LeadPopup {
    name: Input,
    phone: Input,
    email: Input,
    agreed: bool,
    errors: FieldErrors<LeadField>,
    focused: Option<Focus>,
    submitting: bool,
}

impl Default for LeadPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadPopup {
    pub fn new() -> Self {
        Self {
            name: Input::default(),
            // The phone field is primed with the country prefix so the
            // first digit typed lands inside the mask.
            phone: Input::new(format_phone("")),
            email: Input::default(),
            agreed: false,
            errors: FieldErrors::new(),
            focused: None,
            submitting: false,
        }
    }

    fn data(&self) -> LeadFormData {
        LeadFormData {
            name: self.name.value().to_string(),
            phone: self.phone.value().to_string(),
            email: self.email.value().to_string(),
            agreed: self.agreed,
        }
    }

    fn text_input_mut(&mut self, focus: Focus) -> Option<&mut Input> {
        match focus {
            Focus::Name => Some(&mut self.name),
            Focus::Phone => Some(&mut self.phone),
            Focus::Email => Some(&mut self.email),
            _ => None,
        }
    }

    /// Blur validation for the field losing focus. Text fields run their
    /// validator; the non-text controls validate only on submit.
    fn blur_current(&mut self) {
        let Some(focus) = self.focused else { return };
        let Some(field) = focus.field() else { return };
        if field == LeadField::Agreement {
            return;
        }
        let data = self.data();
        let failure = data
            .validate()
            .into_iter()
            .find(|(f, _)| *f == field);
        match failure {
            Some((f, e)) => self.errors.show(f, error_message(f, e)),
            None => self.errors.clear(field),
        }
    }

    fn move_focus(&mut self, forward: bool) {
        self.blur_current();
        let current = self.focused.unwrap_or(Focus::Submit);
        self.focused = Some(if forward { current.next() } else { current.prev() });
    }

    fn cycle_deal(&self, state: &State, forward: bool) -> Action {
        let order = DealKind::iter().collect::<Vec<_>>();
        let next = match state.deal_choice {
            None => order[0],
            Some(current) => {
                let i = order.iter().position(|d| *d == current).unwrap_or(0);
                let n = order.len();
                order[if forward { (i + 1) % n } else { (i + n - 1) % n }]
            }
        };
        Action::SelectDeal(next)
    }

    fn toggle_agreement(&mut self) {
        self.agreed = !self.agreed;
        if self.agreed {
            self.errors.clear(LeadField::Agreement);
        }
    }

    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::Update;
        }
        let failures = self.data().validate();
        if !failures.is_empty() {
            for (field, error) in &failures {
                self.errors.show(*field, error_message(*field, *error));
            }
            if let Some(target) = first_focus_target(&failures) {
                self.focused = Some(focus_for(target));
            }
            return Action::Update;
        }
        self.errors.clear_all();
        self.submitting = true;
        Action::SubmitStarted(SubmitTarget::Lead)
    }

    fn button_label(&self) -> &'static str {
        if self.submitting {
            PENDING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    fn draw_text_field(
        &self,
        f: &mut crate::tui::Frame<'_>,
        area: Rect,
        label: &str,
        focus: Focus,
        field: LeadField,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let input = match focus {
            Focus::Name => &self.name,
            Focus::Phone => &self.phone,
            _ => &self.email,
        };
        let focused = self.focused == Some(focus);
        let field_style = if self.errors.is_invalid(field) {
            style::invalid_field()
        } else if focused {
            style::focused_field()
        } else {
            style::field()
        };

        f.render_widget(Paragraph::new(label.to_string()).style(style::hint()), rows[0]);
        let scroll = input.visual_scroll(rows[1].width.max(2) as usize - 1);
        f.render_widget(
            Paragraph::new(input.value())
                .style(field_style)
                .scroll((0, scroll as u16)),
            rows[1],
        );
        if focused {
            let x = (input.visual_cursor().max(scroll) - scroll) as u16;
            f.set_cursor_position((rows[1].x + x, rows[1].y));
        }
        if let Some(message) = self.errors.message(field) {
            f.render_widget(
                Paragraph::new(Line::from(message)).style(style::error_text()),
                rows[2],
            );
        }
    }
}

impl Component for LeadPopup {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        if key.code == KeyCode::Esc {
            return Ok(Some(EventResponse::Stop(Action::CloseModal)));
        }
        let response = match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                Action::Update
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                Action::Update
            }
            KeyCode::Left | KeyCode::Right if self.focused == Some(Focus::Deal) => {
                self.cycle_deal(state, key.code == KeyCode::Right)
            }
            KeyCode::Char(' ') | KeyCode::Enter if self.focused == Some(Focus::Agreement) => {
                self.toggle_agreement();
                Action::Update
            }
            KeyCode::Enter => self.submit(),
            _ => {
                let Some(focus) = self.focused else {
                    return Ok(Some(EventResponse::Stop(Action::Update)));
                };
                if let Some(field) = focus.field() {
                    if let Some(input) = self.text_input_mut(focus) {
                        input.handle_event(&crossterm::event::Event::Key(key));
                        if focus == Focus::Phone {
                            let masked = format_phone(self.phone.value());
                            self.phone = self.phone.clone().with_value(masked);
                        }
                        // Editing a field removes its error immediately.
                        self.errors.clear(field);
                    }
                }
                Action::Update
            }
        };
        Ok(Some(EventResponse::Stop(response)))
    }

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        match action {
            Action::FocusFirstInput => {
                self.focused = Some(Focus::Name);
                state.input_mode = InputMode::Insert;
            }
            Action::SubmitFinished(SubmitTarget::Lead) => {
                self.submitting = false;
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut crate::tui::Frame<'_>, area: Rect, state: &State) -> Result<()> {
        popup::render_backdrop(f, area);
        let dialog = popup::centered_rect_fixed(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        popup::draw_popup_frame(f, dialog, TITLE);
        let inner = popup::inner_rect(dialog);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // deal choice
                Constraint::Length(1),
                Constraint::Length(3), // name
                Constraint::Length(3), // phone
                Constraint::Length(3), // email
                Constraint::Length(2), // agreement
                Constraint::Length(1), // submit
                Constraint::Min(0),
                Constraint::Length(1), // hints
            ])
            .split(inner);

        let mut choice_spans: Vec<Span> = vec![Span::styled("I want to ", style::hint())];
        for deal in DealKind::iter() {
            let pressed = state.deal_choice == Some(deal);
            let mut label_style = if pressed {
                style::pressed_choice()
            } else {
                style::idle_choice()
            };
            if self.focused == Some(Focus::Deal) {
                label_style = label_style.patch(style::focused_field());
            }
            choice_spans.push(Span::styled(format!(" {deal} "), label_style));
            choice_spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(choice_spans)), rows[0]);

        self.draw_text_field(f, rows[2], "Name", Focus::Name, LeadField::Name);
        self.draw_text_field(f, rows[3], "Phone", Focus::Phone, LeadField::Phone);
        self.draw_text_field(f, rows[4], "Email (optional)", Focus::Email, LeadField::Email);

        let agreement_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(rows[5]);
        let checkbox = if self.agreed { "[x]" } else { "[ ]" };
        let agreement_style = if self.errors.is_invalid(LeadField::Agreement) {
            style::invalid_field()
        } else if self.focused == Some(Focus::Agreement) {
            style::focused_field()
        } else {
            style::field()
        };
        f.render_widget(
            Paragraph::new(format!("{checkbox} I agree to the Privacy Policy"))
                .style(agreement_style),
            agreement_rows[0],
        );
        if let Some(message) = self.errors.message(LeadField::Agreement) {
            f.render_widget(
                Paragraph::new(Line::from(message)).style(style::error_text()),
                agreement_rows[1],
            );
        }

        let button_style = if self.submitting {
            style::disabled_control()
        } else if self.focused == Some(Focus::Submit) {
            style::focused_field()
        } else {
            style::active_marker()
        };
        f.render_widget(
            Paragraph::new(format!("[ {} ]", self.button_label())).style(button_style),
            rows[6],
        );

        f.render_widget(
            Paragraph::new("tab: next  enter: submit  esc: close").style(style::hint()),
            rows[8],
        );
        Ok(())
    }
}
