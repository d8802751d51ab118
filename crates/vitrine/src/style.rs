//! Semantic styles shared by the landing page widgets.

use ratatui::style::{Color, Modifier, Style};

/// Inline validation message next to a field.
pub fn error_text() -> Style {
    Style::default().fg(Color::Red)
}

/// Border/marker of a field that currently carries an error.
pub fn invalid_field() -> Style {
    Style::default().fg(Color::Red)
}

/// Border/marker of the focused field.
pub fn focused_field() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Regular, unfocused field chrome.
pub fn field() -> Style {
    Style::default().fg(Color::White)
}

/// Dimmed footer hints.
pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Active nav link / active carousel dot.
pub fn active_marker() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// A pressed choice-group button.
pub fn pressed_choice() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// An idle choice-group button.
pub fn idle_choice() -> Style {
    Style::default().fg(Color::White)
}

/// The submit control while a simulated submission is pending.
pub fn disabled_control() -> Style {
    Style::default().fg(Color::DarkGray)
}
