// SPDX-License-Identifier: MPL-2.0
//! Field-level validation rules.
//!
//! Rules run on the trimmed value in a fixed order and the first failing
//! rule decides the reason:
//!
//! 1. required and empty → [`ReasonCode::RequiredMissing`]
//! 2. email, non-empty, not `local@domain.tld` → [`ReasonCode::InvalidEmailFormat`]
//! 3. password, non-empty, too short → [`ReasonCode::PasswordTooShort`]

use crate::config::MIN_PASSWORD_LENGTH;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map_err(|err| tracing::error!(%err, "email pattern failed to compile"))
        .ok()
});

/// What kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

/// A field value to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub kind: FieldKind,
    pub required: bool,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    #[must_use]
    pub fn required(kind: FieldKind, value: &'a str) -> Self {
        Self {
            kind,
            required: true,
            value,
        }
    }

    #[must_use]
    pub fn optional(kind: FieldKind, value: &'a str) -> Self {
        Self {
            kind,
            required: false,
            value,
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    RequiredMissing,
    InvalidEmailFormat,
    PasswordTooShort,
}

impl ReasonCode {
    /// Stable identifier of the reason.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ReasonCode::RequiredMissing => "required-missing",
            ReasonCode::InvalidEmailFormat => "invalid-email-format",
            ReasonCode::PasswordTooShort => "password-too-short",
        }
    }

    /// Translation key of the inline error message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ReasonCode::RequiredMissing => "validation-required",
            ReasonCode::InvalidEmailFormat => "validation-email-format",
            ReasonCode::PasswordTooShort => "validation-password-too-short",
        }
    }
}

/// Result of validating one field. `reason` is `None` when valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldReport {
    pub reason: Option<ReasonCode>,
}

impl FieldReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }
}

/// Password length in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
#[must_use]
pub fn password_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Returns true if `value` looks like `local@domain.tld`.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Validates a single field.
#[must_use]
pub fn validate_field(field: &Field<'_>) -> FieldReport {
    let value = field.value.trim();

    let reason = if field.required && value.is_empty() {
        Some(ReasonCode::RequiredMissing)
    } else if field.kind == FieldKind::Email && !value.is_empty() && !is_email(value) {
        Some(ReasonCode::InvalidEmailFormat)
    } else if field.kind == FieldKind::Password
        && !value.is_empty()
        && password_length(value) < MIN_PASSWORD_LENGTH
    {
        Some(ReasonCode::PasswordTooShort)
    } else {
        None
    };

    FieldReport { reason }
}

/// Returns true if every required field is valid.
///
/// Optional fields do not take part in the decision.
#[must_use]
pub fn validate_form(fields: &[Field<'_>]) -> bool {
    fields
        .iter()
        .filter(|field| field.required)
        .all(|field| validate_field(field).is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(kind: FieldKind, required: bool, value: &str) -> Option<ReasonCode> {
        validate_field(&Field {
            kind,
            required,
            value,
        })
        .reason
    }

    #[test]
    fn required_empty_fields_are_missing() {
        assert_eq!(
            reason(FieldKind::Text, true, ""),
            Some(ReasonCode::RequiredMissing)
        );
        assert_eq!(
            reason(FieldKind::Email, true, "   \t"),
            Some(ReasonCode::RequiredMissing)
        );
        assert_eq!(reason(FieldKind::Text, false, "  "), None);
        assert_eq!(reason(FieldKind::Text, true, " Ada "), None);
    }

    #[test]
    fn email_pattern_is_enforced() {
        assert_eq!(reason(FieldKind::Email, true, "a@b.com"), None);
        assert_eq!(
            reason(FieldKind::Email, true, "not-an-email"),
            Some(ReasonCode::InvalidEmailFormat)
        );
        assert_eq!(
            reason(FieldKind::Email, true, "a b@c.com"),
            Some(ReasonCode::InvalidEmailFormat)
        );
        assert_eq!(
            reason(FieldKind::Email, true, "a@b"),
            Some(ReasonCode::InvalidEmailFormat)
        );
        // Surrounding whitespace is trimmed before matching.
        assert_eq!(reason(FieldKind::Email, true, "  a@b.com  "), None);
    }

    #[test]
    fn password_length_is_enforced() {
        assert_eq!(
            reason(FieldKind::Password, true, "short"),
            Some(ReasonCode::PasswordTooShort)
        );
        assert_eq!(reason(FieldKind::Password, true, "longenough1"), None);
        assert_eq!(reason(FieldKind::Password, true, "12345678"), None);
        assert_eq!(
            reason(FieldKind::Password, true, "  1234567  "),
            Some(ReasonCode::PasswordTooShort)
        );
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert_eq!(reason(FieldKind::Password, true, "éééééééé"), None);
        assert_eq!(reason(FieldKind::Password, true, "😀😀😀😀"), None);
        assert_eq!(
            reason(FieldKind::Password, true, "😀😀😀"),
            Some(ReasonCode::PasswordTooShort)
        );
        assert_eq!(password_length("😀"), 2);
    }

    #[test]
    fn required_rule_wins_over_format_rules() {
        assert_eq!(
            reason(FieldKind::Password, true, ""),
            Some(ReasonCode::RequiredMissing)
        );
    }

    #[test]
    fn optional_email_is_still_format_checked() {
        assert_eq!(
            reason(FieldKind::Email, false, "nope"),
            Some(ReasonCode::InvalidEmailFormat)
        );
        assert_eq!(reason(FieldKind::Email, false, ""), None);
    }

    #[test]
    fn validate_form_fails_with_one_bad_required_field() {
        let fields = [
            Field::required(FieldKind::Email, "a@b.com"),
            Field::required(FieldKind::Password, "short"),
        ];
        assert!(!validate_form(&fields));

        let fields = [
            Field::required(FieldKind::Email, "a@b.com"),
            Field::required(FieldKind::Password, "longenough1"),
        ];
        assert!(validate_form(&fields));
    }

    #[test]
    fn validate_form_ignores_optional_fields() {
        let fields = [
            Field::required(FieldKind::Text, "Ada"),
            Field::optional(FieldKind::Email, "broken"),
        ];
        assert!(validate_form(&fields));
    }

    #[test]
    fn reason_codes_map_to_distinct_keys() {
        let reasons = [
            ReasonCode::RequiredMissing,
            ReasonCode::InvalidEmailFormat,
            ReasonCode::PasswordTooShort,
        ];
        for (i, a) in reasons.iter().enumerate() {
            for b in &reasons[i + 1..] {
                assert_ne!(a.i18n_key(), b.i18n_key());
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
