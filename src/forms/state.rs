// SPDX-License-Identifier: MPL-2.0
//! Editing state of the sign-in and sign-up forms.
//!
//! Each field keeps its value and the status drawn on screen. A field is
//! re-validated on every input while it is invalid, and always when focus
//! leaves it (Enter pressed in it, or typing starts in another field).

use super::strength::{self, Strength};
use super::validation::{validate_field, validate_form, Field, FieldKind, ReasonCode};

/// Which form is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    /// Fields shown by the form, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormKind::Login => &[FieldId::Email, FieldId::Password],
            FormKind::Signup => &[FieldId::FullName, FieldId::Email, FieldId::Password],
        }
    }
}

/// Identifies a field within a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Password,
}

impl FieldId {
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::FullName => FieldKind::Text,
            FieldId::Email => FieldKind::Email,
            FieldId::Password => FieldKind::Password,
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FieldId::FullName => "auth-field-full-name",
            FieldId::Email => "auth-field-email",
            FieldId::Password => "auth-field-password",
        }
    }
}

/// Validation state drawn on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Not validated yet, or valid but empty.
    #[default]
    Neutral,
    Valid,
    Invalid(ReasonCode),
}

#[derive(Debug, Clone)]
pub struct FieldState {
    id: FieldId,
    required: bool,
    value: String,
    status: FieldStatus,
}

impl FieldState {
    fn new(id: FieldId) -> Self {
        Self {
            id,
            required: true,
            value: String::new(),
            status: FieldStatus::Neutral,
        }
    }

    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// Translation key of the inline error, if any.
    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        match self.status {
            FieldStatus::Invalid(reason) => Some(reason.i18n_key()),
            FieldStatus::Neutral | FieldStatus::Valid => None,
        }
    }

    fn as_field(&self) -> Field<'_> {
        Field {
            kind: self.id.kind(),
            required: self.required,
            value: &self.value,
        }
    }

    /// Validates the current value and updates the drawn status.
    fn revalidate(&mut self) -> bool {
        let report = validate_field(&self.as_field());
        self.status = match report.reason {
            Some(reason) => FieldStatus::Invalid(reason),
            None if self.value.trim().is_empty() => FieldStatus::Neutral,
            None => FieldStatus::Valid,
        };
        report.is_valid()
    }
}

/// Data handed to the simulated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form: FormKind,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one required field failed; nothing was submitted.
    Blocked,
    /// A submission is already running.
    Busy,
    Accepted(Submission),
}

#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<FieldState>,
    /// Field that last received input.
    active: Option<FieldId>,
    submitting: bool,
}

impl FormState {
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: kind.fields().iter().copied().map(FieldState::new).collect(),
            active: None,
            submitting: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.id == id)
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|field| field.id == id)
    }

    #[must_use]
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).map_or("", FieldState::value)
    }

    #[must_use]
    pub fn status(&self, id: FieldId) -> FieldStatus {
        self.field(id).map_or(FieldStatus::Neutral, FieldState::status)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Strength of the password field, when the form has one.
    #[must_use]
    pub fn password_strength(&self) -> Option<Strength> {
        self.field(FieldId::Password)
            .map(|field| strength::evaluate(field.value()))
    }

    /// Applies typed input to a field.
    ///
    /// Typing in a different field than the previous one counts as focus
    /// leaving the previous field.
    pub fn input(&mut self, id: FieldId, value: String) {
        if let Some(previous) = self.active.filter(|previous| *previous != id) {
            self.blur(previous);
        }
        self.active = Some(id);

        if let Some(field) = self.field_mut(id) {
            field.value = value;
            if matches!(field.status, FieldStatus::Invalid(_)) {
                field.revalidate();
            }
        }
    }

    /// Focus left a field: always re-validate it.
    pub fn blur(&mut self, id: FieldId) {
        if let Some(field) = self.field_mut(id) {
            field.revalidate();
        }
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// Validates every required field and starts the submission if all pass.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Busy;
        }

        for field in &mut self.fields {
            field.revalidate();
        }
        let fields: Vec<Field<'_>> = self.fields.iter().map(FieldState::as_field).collect();
        if !validate_form(&fields) {
            return SubmitOutcome::Blocked;
        }

        self.submitting = true;
        SubmitOutcome::Accepted(Submission {
            form: self.kind,
            email: self.value(FieldId::Email).trim().to_string(),
        })
    }

    /// The simulated submission completed or was cancelled.
    pub fn finish(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_login(email: &str, password: &str) -> FormState {
        let mut form = FormState::new(FormKind::Login);
        form.input(FieldId::Email, email.into());
        form.input(FieldId::Password, password.into());
        form
    }

    #[test]
    fn signup_has_three_fields_in_order() {
        let form = FormState::new(FormKind::Signup);
        let ids: Vec<_> = form.fields().map(FieldState::id).collect();
        assert_eq!(ids, vec![FieldId::FullName, FieldId::Email, FieldId::Password]);
    }

    #[test]
    fn typing_does_not_validate_until_blur() {
        let mut form = FormState::new(FormKind::Login);
        form.input(FieldId::Email, "nope".into());
        assert_eq!(form.status(FieldId::Email), FieldStatus::Neutral);

        form.blur(FieldId::Email);
        assert_eq!(
            form.status(FieldId::Email),
            FieldStatus::Invalid(ReasonCode::InvalidEmailFormat)
        );
    }

    #[test]
    fn typing_in_another_field_blurs_the_previous_one() {
        let mut form = FormState::new(FormKind::Login);
        form.input(FieldId::Email, "a@b.com".into());
        form.input(FieldId::Password, "x".into());
        assert_eq!(form.status(FieldId::Email), FieldStatus::Valid);
        assert_eq!(form.status(FieldId::Password), FieldStatus::Neutral);
    }

    #[test]
    fn invalid_field_revalidates_on_every_input() {
        let mut form = FormState::new(FormKind::Login);
        form.input(FieldId::Password, "short".into());
        form.blur(FieldId::Password);
        assert_eq!(
            form.status(FieldId::Password),
            FieldStatus::Invalid(ReasonCode::PasswordTooShort)
        );

        form.input(FieldId::Password, "longenough1".into());
        assert_eq!(form.status(FieldId::Password), FieldStatus::Valid);
    }

    #[test]
    fn blurring_empty_required_field_marks_it_missing() {
        let mut form = FormState::new(FormKind::Login);
        form.blur(FieldId::Email);
        assert_eq!(
            form.status(FieldId::Email),
            FieldStatus::Invalid(ReasonCode::RequiredMissing)
        );
    }

    #[test]
    fn error_key_follows_status() {
        let mut form = FormState::new(FormKind::Login);
        form.blur(FieldId::Email);
        let field = form.field(FieldId::Email).expect("email field");
        assert_eq!(field.error_key(), Some("validation-required"));

        form.input(FieldId::Email, "a@b.com".into());
        let field = form.field(FieldId::Email).expect("email field");
        assert_eq!(field.error_key(), None);
    }

    #[test]
    fn submit_blocks_invalid_form_and_marks_fields() {
        let mut form = filled_login("a@b.com", "short");
        assert_eq!(form.submit(), SubmitOutcome::Blocked);
        assert!(!form.is_submitting());
        assert_eq!(
            form.status(FieldId::Password),
            FieldStatus::Invalid(ReasonCode::PasswordTooShort)
        );
    }

    #[test]
    fn submit_accepts_valid_form_once() {
        let mut form = filled_login("  a@b.com ", "longenough1");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Accepted(Submission {
                form: FormKind::Login,
                email: "a@b.com".into(),
            })
        );
        assert!(form.is_submitting());
        assert_eq!(form.submit(), SubmitOutcome::Busy);

        form.finish();
        assert!(!form.is_submitting());
    }

    #[test]
    fn signup_requires_full_name() {
        let mut form = FormState::new(FormKind::Signup);
        form.input(FieldId::Email, "a@b.com".into());
        form.input(FieldId::Password, "longenough1".into());
        assert_eq!(form.submit(), SubmitOutcome::Blocked);
        assert_eq!(
            form.status(FieldId::FullName),
            FieldStatus::Invalid(ReasonCode::RequiredMissing)
        );
    }

    #[test]
    fn password_strength_tracks_value() {
        let mut form = FormState::new(FormKind::Login);
        form.input(FieldId::Password, "Ab1!defg".into());
        assert_eq!(form.password_strength().map(|s| s.score), Some(4));
    }
}
