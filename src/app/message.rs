// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::subscription::Shortcut;
use super::Screen;
use crate::forms::{FormKind, Submission};
use crate::ui::auth;
use crate::ui::job_board;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::profile;
use crate::ui::search;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Search(search::Message),
    JobBoard(job_board::Message),
    Auth(FormKind, auth::Message),
    Profile(profile::Message),
    Notification(notifications::NotificationMessage),
    Shortcut(Shortcut),
    /// Virtual clock advanced.
    Tick(Instant),
}

/// Work released by the virtual clock after a simulated latency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    SearchCompleted { query: String },
    SubmissionFinished(Submission),
    Redirect(Screen),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (session and activity reports).
    /// Takes precedence over `PATHSTARTER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PATHSTARTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
