use color_eyre::Result;
use ratatui::layout::Rect;

use crate::{
    action::Action,
    state::State,
    tui::{Event, EventResponse, Frame},
};

pub mod landing;

pub use landing::LandingPage;

/// A full-screen page of the application. Pages receive events after any
/// open popup had its chance to swallow them.
pub trait Page {
    fn name(&self) -> &str;

    fn handle_events(
        &mut self,
        event: Event,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>>;

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>>;

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()>;
}
