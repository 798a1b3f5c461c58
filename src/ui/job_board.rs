// SPDX-License-Identifier: MPL-2.0
//! Job board: category filters, job cards, career resources and the
//! newsletter sign-up box.

use crate::catalog::{Catalog, Job, JobFilter, Resource};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::input::FieldState;
use iced::widget::{button, text, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct State {
    filter: JobFilter,
    saved: HashSet<String>,
    newsletter_email: String,
}

impl State {
    #[must_use]
    pub fn filter(&self) -> JobFilter {
        self.filter
    }

    #[must_use]
    pub fn is_saved(&self, job_id: &str) -> bool {
        self.saved.contains(job_id)
    }

    #[must_use]
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    #[must_use]
    pub fn newsletter_email(&self) -> &str {
        &self.newsletter_email
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(JobFilter),
    ToggleSave(String),
    Apply(String),
    NewsletterEmailChanged(String),
    /// Subscribes with the trimmed email. A blank or whitespace-only input
    /// is rejected silently and left in the field.
    NewsletterSubmitted,
    ResourceOpened(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    FilterChanged(JobFilter),
    SaveToggled { job_id: String, saved: bool },
    ApplicationStarted(String),
    /// Newsletter subscription with the trimmed email.
    Subscribed(String),
    ResourceOpened(String),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FilterSelected(filter) => {
            state.filter = filter;
            Event::FilterChanged(filter)
        }
        Message::ToggleSave(job_id) => {
            let saved = if state.saved.remove(&job_id) {
                false
            } else {
                state.saved.insert(job_id.clone());
                true
            };
            Event::SaveToggled { job_id, saved }
        }
        Message::Apply(job_id) => Event::ApplicationStarted(job_id),
        Message::NewsletterEmailChanged(email) => {
            state.newsletter_email = email;
            Event::None
        }
        Message::NewsletterSubmitted => {
            let email = state.newsletter_email.trim().to_string();
            if email.is_empty() {
                return Event::None;
            }
            state.newsletter_email.clear();
            Event::Subscribed(email)
        }
        Message::ResourceOpened(resource_id) => Event::ResourceOpened(resource_id),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub catalog: &'a Catalog,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut jobs = Column::new().spacing(spacing::MD).width(Length::Fill);
    let mut shown = 0usize;
    for job in ctx.catalog.filtered(ctx.state.filter) {
        jobs = jobs.push(job_card(&ctx, job));
        shown += 1;
    }
    if shown == 0 {
        jobs = jobs.push(Text::new(ctx.i18n.tr("jobs-empty")).size(typography::BODY));
    }

    let count = ctx
        .i18n
        .tr_with_args("jobs-count", &[("count", shown.to_string().as_str())]);

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(filter_bar(&ctx))
        .push(Text::new(count).size(typography::BODY_SM))
        .push(jobs)
        .push(resources(&ctx))
        .push(newsletter(&ctx))
        .into()
}

fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let buttons = JobFilter::all().into_iter().map(|filter| {
        let style = if filter == ctx.state.filter {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(ctx.i18n.tr(filter.i18n_key())).size(typography::BODY))
            .on_press(Message::FilterSelected(filter))
            .padding([spacing::XS, spacing::MD])
            .style(style)
            .into()
    });

    Row::with_children(buttons).spacing(spacing::XS).into()
}

fn job_card<'a>(ctx: &ViewContext<'a>, job: &'a Job) -> Element<'a, Message> {
    let saved = ctx.state.is_saved(&job.id);

    let header = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(Text::new(job.title.as_str()).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            Container::new(
                Text::new(ctx.i18n.tr(job.category.i18n_key())).size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge),
        );

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(format!("{} · {}", job.company, job.location)).size(typography::BODY));
    if let Some(salary) = &job.salary {
        details = details.push(
            Text::new(salary.as_str())
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::SUCCESS_500),
                }),
        );
    }

    let tags = Row::with_children(job.tags.iter().map(|tag| {
        Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge)
            .into()
    }))
    .spacing(spacing::XXS);

    let save_label = if saved { "job-saved" } else { "job-save" };
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(ctx.i18n.tr(save_label)))
                .on_press(Message::ToggleSave(job.id.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(if saved {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }),
        )
        .push(
            button(Text::new(ctx.i18n.tr("job-apply")))
                .on_press(Message::Apply(job.id.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(details)
        .push(Text::new(job.summary.as_str()).size(typography::BODY))
        .push(tags)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn resources<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = ctx.catalog.resources().iter().map(resource_link);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("resources-title")).size(typography::TITLE_SM))
        .push(Column::with_children(links).spacing(spacing::XXS))
        .into()
}

fn resource_link(resource: &Resource) -> Element<'_, Message> {
    let label = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(resource.title.as_str()).size(typography::BODY_LG))
        .push(Text::new(resource.description.as_str()).size(typography::BODY_SM));

    button(label)
        .on_press(Message::ResourceOpened(resource.id.clone()))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::link)
        .into()
}

fn newsletter<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(
        &ctx.i18n.tr("newsletter-placeholder"),
        ctx.state.newsletter_email(),
    )
    .on_input(Message::NewsletterEmailChanged)
    .on_submit(Message::NewsletterSubmitted)
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::input::field(FieldState::Neutral));

    let subscribe = button(Text::new(ctx.i18n.tr("newsletter-subscribe")))
        .on_press(Message::NewsletterSubmitted)
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("newsletter-title")).size(typography::TITLE_SM))
        .push(Text::new(ctx.i18n.tr("newsletter-description")).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(input)
                .push(subscribe),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
