// SPDX-License-Identifier: MPL-2.0
//! Sign-in and sign-up forms.
//!
//! Field state and validation live in [`crate::forms`]; this module maps
//! them to widgets and turns submissions into events for the application.

use crate::app::Screen;
use crate::forms::{
    FieldId, FieldState, FieldStatus, FormKind, FormState, Strength, SubmitOutcome, Submission,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::input::FieldState as FieldStyle;
use iced::widget::{button, text, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Number of segments in the strength bar, one per score point.
const STRENGTH_SEGMENTS: u8 = 4;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FieldId, String),
    /// Enter pressed inside a field.
    FieldSubmitted(FieldId),
    Submit,
    SwitchForm,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Submission blocked by at least one invalid field.
    Invalid,
    Submitted(Submission),
    Navigate(Screen),
}

pub fn update(form: &mut FormState, message: Message) -> Event {
    match message {
        Message::FieldChanged(id, value) => {
            form.input(id, value);
            Event::None
        }
        Message::FieldSubmitted(id) => {
            form.blur(id);
            submit(form)
        }
        Message::Submit => submit(form),
        Message::SwitchForm => Event::Navigate(match form.kind() {
            FormKind::Login => Screen::Signup,
            FormKind::Signup => Screen::Login,
        }),
    }
}

fn submit(form: &mut FormState) -> Event {
    match form.submit() {
        SubmitOutcome::Blocked => Event::Invalid,
        SubmitOutcome::Busy => Event::None,
        SubmitOutcome::Accepted(submission) => Event::Submitted(submission),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (title_key, submit_key, switch_key) = match ctx.form.kind() {
        FormKind::Login => ("auth-login-title", "auth-login-submit", "auth-switch-to-signup"),
        FormKind::Signup => ("auth-signup-title", "auth-signup-submit", "auth-switch-to-login"),
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_LG));

    for field in ctx.form.fields() {
        content = content.push(field_view(&ctx, field));
    }

    let submit_button = if ctx.form.is_submitting() {
        button(Text::new(ctx.i18n.tr("auth-processing")))
    } else {
        button(Text::new(ctx.i18n.tr(submit_key))).on_press(Message::Submit)
    };

    content = content
        .push(
            submit_button
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::primary),
        )
        .push(
            Container::new(
                button(Text::new(ctx.i18n.tr(switch_key)).size(typography::BODY_SM))
                    .on_press(Message::SwitchForm)
                    .style(styles::button::link),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn field_view<'a>(ctx: &ViewContext<'a>, field: &'a FieldState) -> Element<'a, Message> {
    let id = field.id();
    let style = match field.status() {
        FieldStatus::Neutral => FieldStyle::Neutral,
        FieldStatus::Valid => FieldStyle::Valid,
        FieldStatus::Invalid(_) => FieldStyle::Invalid,
    };

    let mut input = text_input(&ctx.i18n.tr(id.label_key()), field.value())
        .on_input(move |value| Message::FieldChanged(id, value))
        .on_submit(Message::FieldSubmitted(id))
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::input::field(style));
    if id == FieldId::Password {
        input = input.secure(true);
    }

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr(id.label_key())).size(typography::BODY_SM))
        .push(input);

    if let Some(key) = field.error_key() {
        column = column.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    if id == FieldId::Password && !field.value().is_empty() {
        if let Some(strength) = ctx.form.password_strength() {
            column = column.push(strength_meter(ctx.i18n, strength));
        }
    }

    column.into()
}

/// Segmented bar filled one segment per score point, plus the level label.
pub fn strength_meter<'a>(i18n: &I18n, strength: Strength) -> Element<'a, Message> {
    let color = strength.level.color();

    let segments: Vec<Element<'a, Message>> = (0..STRENGTH_SEGMENTS)
        .map(|index| {
            let segment = Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::STRENGTH_BAR_HEIGHT));
            if index < strength.score {
                segment.style(styles::container::strength_fill(color)).into()
            } else {
                segment.style(styles::container::strength_track).into()
            }
        })
        .collect();

    let level = i18n.tr(strength.level.i18n_key());
    let label = i18n.tr_with_args("strength-label", &[("level", level.as_str())]);

    Column::new()
        .spacing(spacing::XXS)
        .push(Row::with_children(segments).spacing(spacing::XXS))
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style { color: Some(color) }),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ReasonCode;

    fn fill(form: &mut FormState, id: FieldId, value: &str) {
        update(form, Message::FieldChanged(id, value.into()));
    }

    #[test]
    fn invalid_submit_is_reported_once() {
        let mut form = FormState::new(FormKind::Login);
        fill(&mut form, FieldId::Email, "not-an-email");

        assert_eq!(update(&mut form, Message::Submit), Event::Invalid);
        assert!(!form.is_submitting());
        assert_eq!(
            form.status(FieldId::Email),
            FieldStatus::Invalid(ReasonCode::InvalidEmailFormat)
        );
        assert_eq!(
            form.status(FieldId::Password),
            FieldStatus::Invalid(ReasonCode::RequiredMissing)
        );
    }

    #[test]
    fn valid_submit_starts_submission() {
        let mut form = FormState::new(FormKind::Signup);
        fill(&mut form, FieldId::FullName, "Ada Lovelace");
        fill(&mut form, FieldId::Email, "ada@example.com");
        fill(&mut form, FieldId::Password, "longenough1");

        let event = update(&mut form, Message::Submit);
        assert_eq!(
            event,
            Event::Submitted(Submission {
                form: FormKind::Signup,
                email: "ada@example.com".into(),
            })
        );
        assert!(form.is_submitting());

        // A second press while processing does nothing.
        assert_eq!(update(&mut form, Message::Submit), Event::None);
    }

    #[test]
    fn enter_in_field_submits() {
        let mut form = FormState::new(FormKind::Login);
        fill(&mut form, FieldId::Email, "a@b.com");
        fill(&mut form, FieldId::Password, "longenough1");
        assert!(matches!(
            update(&mut form, Message::FieldSubmitted(FieldId::Password)),
            Event::Submitted(_)
        ));
    }

    #[test]
    fn switch_form_navigates_to_the_other_form() {
        let mut login = FormState::new(FormKind::Login);
        assert_eq!(
            update(&mut login, Message::SwitchForm),
            Event::Navigate(Screen::Signup)
        );
        let mut signup = FormState::new(FormKind::Signup);
        assert_eq!(
            update(&mut signup, Message::SwitchForm),
            Event::Navigate(Screen::Login)
        );
    }

    #[test]
    fn auth_views_render_in_every_state() {
        let i18n = I18n::default();
        for kind in [FormKind::Login, FormKind::Signup] {
            let mut form = FormState::new(kind);
            drop(view(ViewContext {
                i18n: &i18n,
                form: &form,
            }));

            fill(&mut form, FieldId::Password, "Ab1!defg");
            update(&mut form, Message::Submit);
            drop(view(ViewContext {
                i18n: &i18n,
                form: &form,
            }));
        }
    }
}
