// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the application,
//! and a `view` taking a borrowed `ViewContext`.
//!
//! # Screens
//!
//! - [`job_board`] - Filterable job list, career resources and newsletter
//! - [`auth`] - Sign-in and sign-up forms with live validation
//! - [`profile`] - Signed-in summary and activity export
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`search`] - Search box with the suggestion dropdown
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod auth;
pub mod design_tokens;
pub mod job_board;
pub mod navbar;
pub mod notifications;
pub mod profile;
pub mod search;
pub mod styles;
pub mod theming;
