use serde::{Deserialize, Serialize};
use strum::Display;

use crate::state::DealKind;

/// Which simulated submission a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum SubmitTarget {
    Subscribe,
    Lead,
}

#[derive(Debug, Clone, PartialEq, Display, Serialize, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Update,
    /// Open the lead-capture modal.
    OpenModal,
    /// Close the lead-capture modal (close control, Escape, or success).
    CloseModal,
    /// Deferred focus transfer to the modal's first input.
    FocusFirstInput,
    /// A form passed validation and its simulated submission started.
    SubmitStarted(SubmitTarget),
    /// The simulated submission latency elapsed.
    SubmitFinished(SubmitTarget),
    /// Make the toast visible with the given message and arm auto-hide.
    ShowToast(String),
    /// Hide the toast (manual close or auto-hide firing).
    HideToast,
    /// A choice-group button was activated.
    SelectDeal(DealKind),
}
