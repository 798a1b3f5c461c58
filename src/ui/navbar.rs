// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the brand and a hamburger button. The dropdown lists the
//! job board and either the sign-in entries or the signed-in account.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub screen: Screen,
    /// Email of the signed-in user, if any.
    pub session_email: Option<&'a str>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Screen),
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    SignOut,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
        Message::SignOut => {
            *menu_open = false;
            Event::SignOut
        }
    }
}

/// Part of an email shown as the account name.
#[must_use]
pub fn display_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(
            Container::new(build_dropdown(&ctx))
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding([0.0, spacing::MD]),
        );
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD))
        .on_press(Message::Navigate(Screen::Jobs))
        .padding(spacing::XXS)
        .style(styles::button::link);

    let menu_button = button(Text::new("☰").size(typography::TITLE_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(if ctx.menu_open {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS).width(Length::Fixed(220.0));

    menu_column = menu_column.push(build_menu_item(
        ctx.i18n.tr("menu-jobs"),
        Message::Navigate(Screen::Jobs),
        ctx.screen == Screen::Jobs,
    ));

    match ctx.session_email {
        Some(email) => {
            menu_column = menu_column
                .push(build_menu_item(
                    display_name(email).to_string(),
                    Message::Navigate(Screen::Profile),
                    ctx.screen == Screen::Profile,
                ))
                .push(build_menu_item(
                    ctx.i18n.tr("menu-sign-out"),
                    Message::SignOut,
                    false,
                ));
        }
        None => {
            menu_column = menu_column
                .push(build_menu_item(
                    ctx.i18n.tr("menu-login"),
                    Message::Navigate(Screen::Login),
                    ctx.screen == Screen::Login,
                ))
                .push(build_menu_item(
                    ctx.i18n.tr("menu-signup"),
                    Message::Navigate(Screen::Signup),
                    ctx.screen == Screen::Signup,
                ));
        }
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(styles::container::dropdown)
        .into()
}

fn build_menu_item<'a>(label: String, message: Message, current: bool) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(move |theme: &Theme, status| menu_item_style(theme, status, current))
        .into()
}

fn menu_item_style(theme: &Theme, status: button::Status, current: bool) -> button::Style {
    let palette = theme.extended_palette();
    let rounded = Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: if current {
                palette.primary.base.color
            } else {
                palette.background.base.text
            },
            border: Border::default(),
            ..Default::default()
        },
    }
}
