// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for job listings, forms and the newsletter box.
///
/// Derived from the active theme background so cards stay readable in both
/// light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(extended.background.weak.text),
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let is_dark = (base.r + base.g + base.b) / 3.0 < 0.5;
    let background = if is_dark { palette::NAVY_900 } else { base };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Floating suggestion list under the search box.
pub fn dropdown(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        border: Border {
            radius: radius::MD.into(),
            ..card(theme).border
        },
        ..card(theme)
    }
}

/// Pill used for job categories and tags.
pub fn badge(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ACCENT_500
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Toast card with a colored accent border.
///
/// Notifications that are leaving are drawn faded.
pub fn toast(theme: &Theme, accent: Color, leaving: bool) -> container::Style {
    let alpha = if leaving { opacity::LEAVING } else { opacity::OPAQUE };
    let background = theme.extended_palette().background.base.color;
    let text = theme.palette().text;

    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..background
        })),
        border: Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_ACCENT,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(Color { a: alpha, ..text }),
        ..Default::default()
    }
}

/// Track and fill of the password strength bar.
pub fn strength_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TRACK,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn strength_fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_uses_accent_border() {
        let style = toast(&Theme::Dark, palette::SUCCESS_500, false);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn leaving_toast_is_faded() {
        let style = toast(&Theme::Dark, palette::ERROR_500, true);
        assert!(style.border.color.a < 1.0);
    }

    #[test]
    fn dark_navbar_uses_night_surface() {
        let style = navbar(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::NAVY_900)));
    }
}
