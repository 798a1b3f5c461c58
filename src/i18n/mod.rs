// SPDX-License-Identifier: MPL-2.0
//! Localization of every user-facing string.
//!
//! UI text, notification messages and validation errors are Fluent message
//! keys resolved through [`fluent::I18n`]. English (`en-US`) and French
//! (`fr`) ship embedded in the binary; a directory passed with `--i18n-dir`
//! can replace or add locales. The locale comes from the command line, then
//! `settings.toml`, then the OS, and falls back to `en-US`.

pub mod fluent;
