// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (search, submit, apply).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        button::Status::Pressed => palette::ACCENT_600,
        button::Status::Active => palette::ACCENT_500,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::ACCENT_500
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::ACCENT_600,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Selected chip in a toggle group (active filter).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            color: palette::ACCENT_400,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..primary(theme, status)
    }
}

/// Unselected chip or secondary action.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::NAVY_700, WHITE)
    };

    let border_color = match status {
        button::Status::Hovered => palette::ACCENT_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button used by navbar links and suggestion rows.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Close control of a toast.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    button::Style {
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => text,
            button::Status::Active | button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text
            },
        },
        ..link(theme, status)
    }
}
