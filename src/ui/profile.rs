// SPDX-License-Identifier: MPL-2.0
//! Profile screen.
//!
//! Shows the signed-in account, or a prompt to sign in or create one.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Which prompt button was clicked while signed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    SignIn,
    SignUp,
}

impl PromptAction {
    /// Name recorded in tracked events.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PromptAction::SignIn => "signin",
            PromptAction::SignUp => "signup",
        }
    }

    #[must_use]
    pub fn target(self) -> Screen {
        match self {
            PromptAction::SignIn => Screen::Login,
            PromptAction::SignUp => Screen::Signup,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Prompt(PromptAction),
    ExportActivity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Prompt(PromptAction),
    ExportActivity,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Prompt(action) => Event::Prompt(action),
        Message::ExportActivity => Event::ExportActivity,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session_email: Option<&'a str>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("profile-title")).size(typography::TITLE_LG));

    match ctx.session_email {
        Some(email) => {
            content = content
                .push(
                    Text::new(ctx.i18n.tr_with_args("profile-signed-in-as", &[("email", email)]))
                        .size(typography::BODY_LG),
                )
                .push(Text::new(ctx.i18n.tr("profile-export-hint")).size(typography::BODY_SM))
                .push(
                    button(Text::new(ctx.i18n.tr("profile-export-activity")))
                        .on_press(Message::ExportActivity)
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::unselected),
                );
        }
        None => {
            let prompts = Row::new()
                .spacing(spacing::XS)
                .push(
                    button(Text::new(ctx.i18n.tr("menu-login")))
                        .on_press(Message::Prompt(PromptAction::SignIn))
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::primary),
                )
                .push(
                    button(Text::new(ctx.i18n.tr("menu-signup")))
                        .on_press(Message::Prompt(PromptAction::SignUp))
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::unselected),
                );
            content = content
                .push(Text::new(ctx.i18n.tr("profile-signed-out")).size(typography::BODY_LG))
                .push(prompts);
        }
    }

    Container::new(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
