// SPDX-License-Identifier: MPL-2.0
//! Job search box with a suggestion dropdown.
//!
//! Searching is simulated: the application announces the query and later
//! reports results, without querying anything.

use crate::config::SEARCH_SUGGESTION_MIN_CHARS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::input::FieldState;
use iced::widget::{button, operation, text_input, Column, Container, Id, Row, Text};
use iced::{alignment::Vertical, Element, Length, Task};

/// Widget ID of the search input, used to focus it from shortcuts.
pub const SEARCH_INPUT_ID: &str = "job-search-input";

/// Fixed suggestions offered while typing.
pub const SUGGESTIONS: [&str; 6] = [
    "Software Developer",
    "Data Scientist",
    "UX Designer",
    "Marketing Intern",
    "Product Manager",
    "Frontend Developer",
];

#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
    /// Suggestions matching the query; the dropdown shows when non-empty.
    matches: Vec<&'static str>,
}

impl State {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn suggestions(&self) -> &[&'static str] {
        &self.matches
    }

    #[must_use]
    pub fn dropdown_open(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn close_dropdown(&mut self) {
        self.matches.clear();
    }
}

/// Suggestions containing `query`, ignoring case.
///
/// Queries of one character or less match nothing.
#[must_use]
pub fn matching_suggestions(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    if needle.chars().count() <= SEARCH_SUGGESTION_MIN_CHARS {
        return Vec::new();
    }
    SUGGESTIONS
        .iter()
        .copied()
        .filter(|suggestion| suggestion.to_lowercase().contains(&needle))
        .collect()
}

/// Returns the task focusing the search input.
pub fn focus<T>() -> Task<T>
where
    T: Send + 'static,
{
    operation::focus(Id::new(SEARCH_INPUT_ID))
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submitted,
    SuggestionPicked(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Perform a search for the trimmed, non-empty query.
    Search(String),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.matches = matching_suggestions(&query);
            state.query = query;
            Event::None
        }
        Message::Submitted => search_event(&state.query),
        Message::SuggestionPicked(suggestion) => {
            state.query = suggestion.to_string();
            state.close_dropdown();
            search_event(suggestion)
        }
    }
}

/// Turns a submitted query into a search.
///
/// Surrounding whitespace is stripped before the query reaches the
/// notifications and the activity log. A query that is empty after
/// trimming is ignored instead of searching for an empty string.
fn search_event(query: &str) -> Event {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Event::None
    } else {
        Event::Search(trimmed.to_string())
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.state.query())
        .id(Id::new(SEARCH_INPUT_ID))
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submitted)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(styles::input::field(FieldState::Neutral));

    let search_button = button(Text::new(ctx.i18n.tr("search-button")))
        .on_press(Message::Submitted)
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary);

    let bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(search_button);

    let mut column = Column::new()
        .width(Length::Fixed(sizing::SEARCH_WIDTH))
        .spacing(spacing::XXS)
        .push(bar);

    if ctx.state.dropdown_open() {
        let items = ctx.state.suggestions().iter().map(|suggestion| {
            button(Text::new(*suggestion).size(typography::BODY))
                .on_press(Message::SuggestionPicked(*suggestion))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::button::link)
                .into()
        });
        column = column.push(
            Container::new(Column::with_children(items))
                .width(Length::Fill)
                .style(styles::container::dropdown),
        );
    }

    column.into()
}
