// SPDX-License-Identifier: MPL-2.0
//! Form validation engine.
//!
//! - [`validation`]: per-field rules and the form-level gate
//! - [`strength`]: advisory password strength meter
//! - [`state`]: editing state of the sign-in and sign-up forms

pub mod state;
pub mod strength;
pub mod validation;

pub use state::{FieldId, FieldState, FieldStatus, FormKind, FormState, SubmitOutcome, Submission};
pub use strength::{evaluate as password_strength, Strength, StrengthLevel};
pub use validation::{
    is_email, password_length, validate_field, validate_form, Field, FieldKind, FieldReport,
    ReasonCode,
};
