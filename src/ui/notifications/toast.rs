// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are small cards with a kind-colored accent border, an icon glyph,
//! the localized message and a close control. They stack in the top-right
//! corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding, Theme};

/// Shared presentation settings for every toast of a manager.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub width: f32,
    pub padding: f32,
    pub spacing: f32,
    /// Distance from the top edge, below the navbar.
    pub offset_top: f32,
}

impl StyleSheet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: sizing::TOAST_WIDTH,
            padding: spacing::SM,
            spacing: spacing::XS,
            offset_top: sizing::NAVBAR_HEIGHT + spacing::LG,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        sheet: &StyleSheet,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let kind = notification.kind();
        let accent = kind.color();
        let leaving = notification.is_removing();

        let icon = Text::new(kind.icon())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message = Text::new(Self::message_text(notification, i18n)).size(typography::BODY);

        let close = button(Text::new("×").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        // Layout: [icon] [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(Container::new(message).width(Length::Fill))
            .push(close);

        Container::new(content)
            .width(Length::Fixed(sheet.width))
            .padding(sheet.padding)
            .style(move |theme: &Theme| styles::container::toast(theme, accent, leaving))
            .into()
    }

    /// Renders every toast of the manager, stacked in the top-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(sheet) = manager.style_sheet() else {
            return Self::empty();
        };

        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, sheet, i18n))
            .collect();

        if toasts.is_empty() {
            return Self::empty();
        }

        let column = Column::with_children(toasts)
            .spacing(sheet.spacing)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: sheet.offset_top,
                right: spacing::LG,
                bottom: spacing::MD,
                left: spacing::MD,
            })
            .into()
    }

    /// Resolves the localized text of a notification.
    #[must_use]
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        }
    }

    fn empty<'a>() -> Element<'a, Message> {
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn style_sheet_places_toasts_below_navbar() {
        let sheet = StyleSheet::new();
        assert!(sheet.offset_top > sizing::NAVBAR_HEIGHT);
        assert_eq!(sheet.width, sizing::TOAST_WIDTH);
    }

    #[test]
    fn message_text_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let notification =
            Notification::success("notification-search-finished").with_arg("query", "UX Designer");
        assert_eq!(
            Toast::message_text(&notification, &i18n),
            "Found results for \"UX Designer\""
        );
    }
}
