//! Page-wide shared state.
//!
//! The two overlay widgets are singletons on the page; their visibility
//! state and the page-level markers they maintain live here, behind
//! transition methods. Components query the state handle instead of
//! keeping private copies.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The mutually exclusive deal buttons in the modal. The selection is
/// deliberately NOT reset when the modal closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum DealKind {
    Buy,
    Rent,
    Sell,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

#[derive(Debug, Default)]
pub struct State {
    pub input_mode: InputMode,
    pub modal: ModalState,
    /// Page-level marker applied while the modal is open; the page stops
    /// reacting to scroll keys while it is set. Removed exactly once on
    /// close.
    pub scroll_locked: bool,
    /// The dialog's visible-to-assistive-tech flag (`aria-hidden` inverse).
    pub overlay_visible: bool,
    pub toast: ToastState,
    /// None until the first interaction with the choice group; exactly
    /// one active afterwards.
    pub deal_choice: Option<DealKind>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition the modal to `Open`. Returns false (and does nothing)
    /// when it is already open.
    pub fn open_modal(&mut self) -> bool {
        if self.modal == ModalState::Open {
            return false;
        }
        self.modal = ModalState::Open;
        self.scroll_locked = true;
        self.overlay_visible = true;
        true
    }

    /// Transition the modal to `Closed`, removing the page markers
    /// exactly once. Returns false when it is already closed.
    pub fn close_modal(&mut self) -> bool {
        if self.modal == ModalState::Closed {
            return false;
        }
        self.modal = ModalState::Closed;
        self.scroll_locked = false;
        self.overlay_visible = false;
        self.input_mode = InputMode::Normal;
        true
    }

    /// Transition the toast to `Visible`. Re-showing while visible is
    /// allowed; the caller re-arms the auto-hide timer.
    pub fn show_toast(&mut self) {
        self.toast = ToastState::Visible;
    }

    /// Transition the toast to `Hidden`. Idempotent, so a stale auto-hide
    /// timer firing after a manual close is harmless.
    pub fn hide_toast(&mut self) {
        self.toast = ToastState::Hidden;
    }

    /// Activate one choice-group button, deactivating the others.
    pub fn select_deal(&mut self, deal: DealKind) {
        self.deal_choice = Some(deal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_applies_page_markers() {
        let mut state = State::new();
        assert!(state.open_modal());
        assert_eq!(state.modal, ModalState::Open);
        assert!(state.scroll_locked);
        assert!(state.overlay_visible);
    }

    #[test]
    fn double_open_is_rejected() {
        let mut state = State::new();
        assert!(state.open_modal());
        assert!(!state.open_modal());
    }

    #[test]
    fn closing_removes_markers_exactly_once() {
        let mut state = State::new();
        state.open_modal();
        assert!(state.close_modal());
        assert!(!state.scroll_locked);
        assert!(!state.overlay_visible);
        // Second close is a no-op; markers were already removed.
        assert!(!state.close_modal());
        assert!(!state.scroll_locked);
    }

    #[test]
    fn toast_hide_is_idempotent() {
        let mut state = State::new();
        state.show_toast();
        assert_eq!(state.toast, ToastState::Visible);
        state.hide_toast();
        state.hide_toast();
        assert_eq!(state.toast, ToastState::Hidden);
    }

    #[test]
    fn reshow_while_visible_stays_visible() {
        let mut state = State::new();
        state.show_toast();
        state.show_toast();
        assert_eq!(state.toast, ToastState::Visible);
    }

    #[test]
    fn deal_choice_starts_empty_then_holds_exactly_one() {
        let mut state = State::new();
        assert_eq!(state.deal_choice, None);
        state.select_deal(DealKind::Rent);
        assert_eq!(state.deal_choice, Some(DealKind::Rent));
        state.select_deal(DealKind::Sell);
        assert_eq!(state.deal_choice, Some(DealKind::Sell));
    }

    #[test]
    fn deal_choice_survives_modal_close() {
        let mut state = State::new();
        state.open_modal();
        state.select_deal(DealKind::Buy);
        state.close_modal();
        assert_eq!(state.deal_choice, Some(DealKind::Buy));
    }
}
