//! Forms core for Vitrine.
//!
//! Everything in this crate is pure and synchronous: validators report
//! outcomes as values, the phone mask is a deterministic string transform,
//! and the submission flow aggregates per-field results without touching
//! any UI. The terminal frontend (the `vitrine` crate) owns rendering,
//! focus, and timers.

pub mod fields;
pub mod flow;
pub mod phone_mask;
pub mod validate;

pub use fields::{error_message, FieldErrors, LeadField};
pub use flow::{LeadFormData, SubscribeFormData};
pub use phone_mask::format_phone;
pub use validate::{ValidationError, ValidationResult};
