//! Submission gating.
//!
//! Aggregates validator results for a whole form. Every applicable field
//! is checked even after the first failure, so each invalid field gets
//! its own message at the same time; the caller renders them all and
//! moves focus to the first offender.

use serde::{Deserialize, Serialize};

use crate::fields::LeadField;
use crate::validate::{
    self, ValidationError, ValidationResult,
};

/// Raw values captured from the lead-capture modal at submit time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub agreed: bool,
}

/// Raw value captured from the newsletter subscribe box.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeFormData {
    pub email: String,
}

impl LeadFormData {
    /// Run every validator for the modal form and collect all failures in
    /// visual order. Email is optional here; the agreement checkbox fails
    /// with `EmptyField` when unchecked.
    pub fn validate(&self) -> Vec<(LeadField, ValidationError)> {
        let checks: [(LeadField, ValidationResult); 4] = [
            (LeadField::Name, validate::validate_name(&self.name)),
            (LeadField::Phone, validate::validate_phone(&self.phone)),
            (
                LeadField::Email,
                validate::validate_optional_email(&self.email),
            ),
            (
                LeadField::Agreement,
                if self.agreed {
                    Ok(())
                } else {
                    Err(ValidationError::EmptyField)
                },
            ),
        ];
        checks
            .into_iter()
            .filter_map(|(field, result)| result.err().map(|e| (field, e)))
            .collect()
    }
}

impl SubscribeFormData {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate::validate_email(&self.email)
    }
}

/// Pick the field that should receive focus after a failed submission:
/// the first invalid field in visual order. When the unchecked agreement
/// is the only failure, that is the agreement checkbox itself.
pub fn first_focus_target(failures: &[(LeadField, ValidationError)]) -> Option<LeadField> {
    failures.first().map(|(field, _)| *field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> LeadFormData {
        LeadFormData {
            name: "Marie O'Neill".into(),
            phone: "+7(999) 123-45-67".into(),
            email: String::new(),
            agreed: true,
        }
    }

    #[test]
    fn fully_valid_form_reports_no_failures() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn every_failure_is_collected_not_just_the_first() {
        let data = LeadFormData {
            name: String::new(),
            phone: "123".into(),
            email: "bad".into(),
            agreed: false,
        };
        let failures = data.validate();
        assert_eq!(
            failures,
            vec![
                (LeadField::Name, ValidationError::EmptyField),
                (LeadField::Phone, ValidationError::InvalidFormat),
                (LeadField::Email, ValidationError::InvalidFormat),
                (LeadField::Agreement, ValidationError::EmptyField),
            ]
        );
    }

    #[test]
    fn empty_email_is_fine_in_the_modal() {
        let mut data = filled();
        data.email = String::new();
        assert!(data.validate().is_empty());
    }

    #[test]
    fn focus_goes_to_first_invalid_field() {
        let data = LeadFormData {
            name: String::new(),
            phone: "9991234567".into(),
            email: String::new(),
            agreed: false,
        };
        let failures = data.validate();
        assert_eq!(first_focus_target(&failures), Some(LeadField::Name));
    }

    #[test]
    fn focus_goes_to_agreement_when_it_is_the_only_failure() {
        let mut data = filled();
        data.agreed = false;
        let failures = data.validate();
        assert_eq!(failures.len(), 1);
        assert_eq!(first_focus_target(&failures), Some(LeadField::Agreement));
    }

    #[test]
    fn masked_phone_from_the_input_mask_passes_validation() {
        let masked = crate::phone_mask::format_phone("89991234567");
        assert_eq!(masked, "+7(999) 123-45-67");
        assert_eq!(validate::validate_phone(&masked), Ok(()));
    }

    #[test]
    fn subscribe_requires_an_email() {
        let empty = SubscribeFormData::default();
        assert_eq!(empty.validate(), Err(ValidationError::EmptyField));
        let ok = SubscribeFormData {
            email: "a@b.com".into(),
        };
        assert_eq!(ok.validate(), Ok(()));
    }
}
