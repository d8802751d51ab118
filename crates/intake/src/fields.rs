//! Per-field error state.
//!
//! `FieldErrors` is the registry behind the inline error slots next to
//! each input: showing an error overwrites any prior message for that
//! field, clearing a clean field is a no-op, and a form reset wipes every
//! slot including the agreement checkbox's.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::validate::ValidationError;

/// The validable fields of the lead-capture form, in visual order.
/// `Agreement` is the privacy-policy checkbox; it owns an error slot of
/// its own even though it is not a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum LeadField {
    Name,
    Phone,
    Email,
    Agreement,
}

/// User-facing message for a failure on a given field.
pub fn error_message(field: LeadField, error: ValidationError) -> &'static str {
    match (field, error) {
        (LeadField::Name, ValidationError::EmptyField) => "Name is required",
        (LeadField::Name, ValidationError::InvalidCharacters) => {
            "Name can only contain letters, numbers, spaces and one special character"
        }
        (LeadField::Name, ValidationError::TooManySpecialChars) => {
            "Name can contain maximum one special character"
        }
        (LeadField::Phone, _) => "Please enter a valid phone number",
        (LeadField::Agreement, _) => "You must agree to the Privacy Policy",
        (LeadField::Email, ValidationError::EmptyField) => "Please enter your email address",
        (LeadField::Email, _) => "Please enter a valid email address",
        // Remaining combinations are unreachable from the validators but
        // still render something sensible.
        (LeadField::Name, ValidationError::InvalidFormat) => "Name is not valid",
    }
}

/// Error registry keyed by field identity.
#[derive(Debug, Default, Clone)]
pub struct FieldErrors<K: Eq + Hash + Copy> {
    entries: HashMap<K, &'static str>,
}

impl<K: Eq + Hash + Copy> FieldErrors<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Attach `message` to `field`, replacing any prior message.
    pub fn show(&mut self, field: K, message: &'static str) {
        self.entries.insert(field, message);
    }

    /// Remove the error for `field`. Safe to call on a clean field.
    pub fn clear(&mut self, field: K) {
        self.entries.remove(&field);
    }

    /// Wipe every error slot. Used on modal close/reset.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn message(&self, field: K) -> Option<&'static str> {
        self.entries.get(&field).copied()
    }

    /// Whether the field currently carries the invalid marker. Mirrors
    /// message presence by construction.
    pub fn is_invalid(&self, field: K) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
