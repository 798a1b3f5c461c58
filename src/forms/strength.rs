// SPDX-License-Identifier: MPL-2.0
//! Advisory password strength meter.
//!
//! The score counts satisfied criteria (length, lowercase, uppercase,
//! digit, symbol) and is clamped to 4. It never blocks a submission.

use super::validation::password_length;
use crate::config::MIN_PASSWORD_LENGTH;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Highest score shown by the meter.
pub const MAX_SCORE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Fair,
            3 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "strength-very-weak",
            StrengthLevel::Weak => "strength-weak",
            StrengthLevel::Fair => "strength-fair",
            StrengthLevel::Good => "strength-good",
            StrengthLevel::Strong => "strength-strong",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            StrengthLevel::VeryWeak => palette::ERROR_500,
            StrengthLevel::Weak => palette::ERROR_300,
            StrengthLevel::Fair => palette::WARNING_500,
            StrengthLevel::Good | StrengthLevel::Strong => palette::SUCCESS_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub level: StrengthLevel,
}

impl Strength {
    /// Portion of the bar to fill, in `0.0..=1.0` (25 % per point).
    #[must_use]
    pub fn fill(self) -> f32 {
        f32::from(self.score) * 0.25
    }
}

/// Scores a password. Whitespace is not trimmed.
#[must_use]
pub fn evaluate(password: &str) -> Strength {
    let criteria = [
        password_length(password) >= MIN_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let satisfied = criteria.iter().filter(|met| **met).count();
    let score = u8::try_from(satisfied).unwrap_or(MAX_SCORE).min(MAX_SCORE);

    Strength {
        score,
        level: StrengthLevel::from_score(score),
    }
}
