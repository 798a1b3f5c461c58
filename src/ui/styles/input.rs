// SPDX-License-Identifier: MPL-2.0
//! Text input styles reflecting field validation state.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::{Border, Color, Theme};

/// Validation state drawn on a field's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Neutral,
    Valid,
    Invalid,
}

impl FieldState {
    #[must_use]
    pub fn border_color(self, theme: &Theme) -> Color {
        match self {
            FieldState::Neutral => theme.extended_palette().background.strong.color,
            FieldState::Valid => palette::SUCCESS_500,
            FieldState::Invalid => palette::ERROR_500,
        }
    }
}

/// Returns a text input style whose border follows `state`.
pub fn field(state: FieldState) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        use iced::widget::text_input::{Status, Style};

        let extended = theme.extended_palette();
        let focused = matches!(status, Status::Focused { .. });

        let mut style = Style {
            background: extended.background.base.color.into(),
            border: Border {
                color: state.border_color(theme),
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            icon: extended.background.weak.text,
            placeholder: extended.background.strong.text,
            value: extended.background.base.text,
            selection: extended.primary.weak.color,
        };

        if matches!(status, Status::Disabled) {
            style.background = extended.background.weak.color.into();
            style.value = extended.background.strong.text;
        }
        if focused && state == FieldState::Neutral {
            style.border.color = palette::ACCENT_500;
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_has_error_border() {
        let style = field(FieldState::Invalid)(&Theme::Dark, text_input::Status::Active);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn valid_field_has_success_border() {
        let style = field(FieldState::Valid)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, palette::SUCCESS_500);
    }
}
