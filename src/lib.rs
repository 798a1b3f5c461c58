// SPDX-License-Identifier: MPL-2.0
//! `pathstarter` is a desktop job board for students and early-career
//! candidates, built with the Iced GUI framework.
//!
//! It offers a searchable, filterable list of openings, offline sign-in and
//! sign-up forms with live validation, toast notifications, Fluent
//! localization and a local activity log that can be exported as JSON.

#![doc(html_root_url = "https://docs.rs/pathstarter/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod ui;
