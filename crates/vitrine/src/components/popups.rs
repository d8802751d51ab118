//! Modal dialogs layered over the landing page.

pub mod lead;

pub use lead::LeadPopup;
