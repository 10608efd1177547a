// SPDX-License-Identifier: MPL-2.0
//! Field validation rules for the contact form.
//!
//! The rules mirror what the form service expects: required fields must be
//! non-blank, emails must have a local part, an `@`, and a dotted domain,
//! and phone numbers (after removing spaces) must be 7-15 digits with an
//! optional leading `+`.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").expect("valid phone pattern"));

/// What kind of content a field holds, which picks its format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Free text, only the `required` check applies.
    Text,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl ValidationError {
    /// Localization key of the inline error message.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationError::Required => "form-error-required",
            ValidationError::InvalidEmail => "form-error-email",
            ValidationError::InvalidPhone => "form-error-phone",
        }
    }
}

/// Validates a single value against its rule.
///
/// Format rules only apply to non-empty values, so an optional phone field
/// left blank passes.
pub fn validate(rule: Rule, required: bool, value: &str) -> Result<(), ValidationError> {
    if required && value.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    match rule {
        Rule::Text => Ok(()),
        Rule::Email => {
            if !value.is_empty() && !EMAIL_PATTERN.is_match(value) {
                Err(ValidationError::InvalidEmail)
            } else {
                Ok(())
            }
        }
        Rule::Phone => {
            let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            if !stripped.is_empty() && !PHONE_PATTERN.is_match(&stripped) {
                Err(ValidationError::InvalidPhone)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_empty_value_is_flagged() {
        assert_eq!(
            validate(Rule::Text, true, ""),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate(Rule::Text, true, "   "),
            Err(ValidationError::Required)
        );
        assert_eq!(validate(Rule::Text, true, "Budi"), Ok(()));
    }

    #[test]
    fn optional_empty_value_passes() {
        assert_eq!(validate(Rule::Phone, false, ""), Ok(()));
    }

    #[test]
    fn email_shapes() {
        let valid = ["budi@contoh.com", "a.b@sub.domain.co.id", "x@y.z"];
        for value in valid {
            assert_eq!(validate(Rule::Email, true, value), Ok(()), "{value}");
        }

        let invalid = [
            "plainaddress",
            "no [at]domain.com",
            "missing@domain",
            "two@@signs.com",
            "spaces in@mail.com",
        ];
        for value in invalid {
            assert_eq!(
                validate(Rule::Email, true, value),
                Err(ValidationError::InvalidEmail),
                "{value}"
            );
        }
    }

    #[test]
    fn phone_allows_spaces_and_leading_plus() {
        let valid = ["+62 812 3456 7890", "08123456789", "1234567"];
        for value in valid {
            assert_eq!(validate(Rule::Phone, false, value), Ok(()), "{value}");
        }
    }

    #[test]
    fn phone_rejects_short_long_and_lettered_numbers() {
        let invalid = ["123456", "1234567890123456", "0812-345-678", "telephone"];
        for value in invalid {
            assert_eq!(
                validate(Rule::Phone, false, value),
                Err(ValidationError::InvalidPhone),
                "{value}"
            );
        }
    }

    #[test]
    fn required_wins_over_format() {
        assert_eq!(
            validate(Rule::Email, true, ""),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn error_message_keys_are_stable() {
        assert_eq!(
            ValidationError::Required.message_key(),
            "form-error-required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.message_key(),
            "form-error-email"
        );
        assert_eq!(
            ValidationError::InvalidPhone.message_key(),
            "form-error-phone"
        );
    }
}
