// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top, the active screen fills the rest, and toasts are
//! stacked over everything in the top-right corner.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::forms::{FormKind, FormState};
use crate::i18n::fluent::I18n;
use crate::ui::auth;
use crate::ui::design_tokens::spacing;
use crate::ui::job_board;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::profile;
use crate::ui::search;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub menu_open: bool,
    pub session_email: Option<&'a str>,
    pub catalog: &'a Catalog,
    pub search: &'a search::State,
    pub job_board: &'a job_board::State,
    pub login: &'a FormState,
    pub signup: &'a FormState,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Jobs => view_jobs(&ctx),
        Screen::Login => view_form(ctx.i18n, ctx.login),
        Screen::Signup => view_form(ctx.i18n, ctx.signup),
        Screen::Profile => view_profile(&ctx),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        screen: ctx.screen,
        session_email: ctx.session_email,
    })
    .map(Message::Navbar);

    let body = scrollable(
        Container::new(current_view)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let base = Column::new()
        .push(navbar_view)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_jobs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let search_view = search::view(search::ViewContext {
        i18n: ctx.i18n,
        state: ctx.search,
    })
    .map(Message::Search);

    let board = job_board::view(job_board::ViewContext {
        i18n: ctx.i18n,
        state: ctx.job_board,
        catalog: ctx.catalog,
    })
    .map(Message::JobBoard);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(search_view)
        .push(board)
        .into()
}

fn view_form<'a>(i18n: &'a I18n, form: &'a FormState) -> Element<'a, Message> {
    let kind: FormKind = form.kind();
    auth::view(auth::ViewContext { i18n, form }).map(move |message| Message::Auth(kind, message))
}

fn view_profile<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    profile::view(profile::ViewContext {
        i18n: ctx.i18n,
        session_email: ctx.session_email,
    })
    .map(Message::Profile)
}
