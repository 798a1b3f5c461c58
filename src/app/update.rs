// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components return events; the handlers here turn them into
//! notifications, tracked actions, session changes and deferred work.

use super::deferred::{Deferred, DeferredId};
use super::message::DeferredAction;
use super::paths;
use super::session::Session;
use super::subscription::Shortcut;
use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::config::Latencies;
use crate::diagnostics::{
    default_report_filename, email_domain, DiagnosticsCollector, DiagnosticsHandle, UserAction,
};
use crate::forms::{FormKind, FormState, Submission};
use crate::ui::auth::{self, Event as AuthEvent};
use crate::ui::job_board::{self, Event as JobBoardEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::profile::{self, Event as ProfileEvent};
use crate::ui::search::{self, Event as SearchEvent};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub menu_open: &'a mut bool,
    pub catalog: &'a Catalog,
    pub search: &'a mut search::State,
    pub job_board: &'a mut job_board::State,
    pub login: &'a mut FormState,
    pub signup: &'a mut FormState,
    pub session: &'a mut Session,
    pub data_dir: Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
    pub tracker: &'a DiagnosticsHandle,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub deferred: &'a mut Deferred<DeferredAction>,
    /// Running submission and the form it belongs to.
    pub pending_submission: &'a mut Option<(FormKind, DeferredId)>,
    pub pending_redirect: &'a mut Option<DeferredId>,
    pub latencies: Latencies,
    pub now: Instant,
}

impl UpdateContext<'_> {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push_at(notification, self.now);
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut FormState {
        match kind {
            FormKind::Login => &mut *self.login,
            FormKind::Signup => &mut *self.signup,
        }
    }
}

/// Screen hosting a form.
#[must_use]
pub fn form_screen(kind: FormKind) -> Screen {
    match kind {
        FormKind::Login => Screen::Login,
        FormKind::Signup => Screen::Signup,
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Navigation requested by the user. Cancels a pending redirect.
pub fn handle_navigation(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if let Some(id) = ctx.pending_redirect.take() {
        ctx.deferred.cancel(id);
    }
    switch_screen(ctx, target);
    Task::none()
}

/// Switches screens, cancelling a submission left behind on its form.
fn switch_screen(ctx: &mut UpdateContext<'_>, target: Screen) {
    *ctx.menu_open = false;
    ctx.search.close_dropdown();

    if let Some((kind, id)) = *ctx.pending_submission {
        if form_screen(kind) != target {
            ctx.deferred.cancel(id);
            ctx.form_mut(kind).finish();
            *ctx.pending_submission = None;
            tracing::debug!(?kind, "pending submission cancelled");
        }
    }

    if *ctx.screen != target {
        *ctx.screen = target;
        ctx.tracker.track(UserAction::PageView {
            screen: target.as_str().to_string(),
        });
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => handle_navigation(ctx, screen),
        NavbarEvent::SignOut => handle_sign_out(ctx),
    }
}

fn handle_sign_out(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(key) = ctx.session.clear_from(ctx.data_dir.clone()) {
        ctx.notify(Notification::info(key));
    }
    ctx.notify(Notification::info("notification-logged-out"));
    ctx.tracker.track(UserAction::UserLogout);

    if let Some(id) = ctx.pending_redirect.take() {
        ctx.deferred.cancel(id);
    }
    *ctx.pending_redirect = Some(ctx.deferred.schedule(
        ctx.now,
        ctx.latencies.logout_redirect,
        DeferredAction::Redirect(Screen::Jobs),
    ));
    Task::none()
}

// =============================================================================
// Search
// =============================================================================

pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search::Message,
) -> Task<Message> {
    match search::update(ctx.search, message) {
        SearchEvent::None => {}
        SearchEvent::Search(query) => {
            ctx.search.close_dropdown();
            ctx.tracker.track(UserAction::SearchPerformed {
                query: query.clone(),
            });
            ctx.notify(
                Notification::info("notification-search-started")
                    .with_arg("query", &query),
            );
            ctx.deferred.schedule(
                ctx.now,
                ctx.latencies.search,
                DeferredAction::SearchCompleted { query },
            );
        }
    }
    Task::none()
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::FocusSearch => {
            if *ctx.screen != Screen::Jobs {
                switch_screen(ctx, Screen::Jobs);
            }
            ctx.notify(Notification::info("notification-search-shortcut"));
            ctx.tracker.track(UserAction::SearchShortcut);
            search::focus()
        }
        Shortcut::Dismiss => {
            *ctx.menu_open = false;
            ctx.search.close_dropdown();
            Task::none()
        }
    }
}

// =============================================================================
// Job Board
// =============================================================================

pub fn handle_job_board_message(
    ctx: &mut UpdateContext<'_>,
    message: job_board::Message,
) -> Task<Message> {
    match job_board::update(ctx.job_board, message) {
        JobBoardEvent::None => {}
        JobBoardEvent::FilterChanged(filter) => {
            ctx.tracker.track(UserAction::FilterUsed {
                filter: filter.as_str().to_string(),
            });
        }
        JobBoardEvent::SaveToggled { job_id, saved } => {
            let key = if saved {
                "notification-job-saved"
            } else {
                "notification-job-unsaved"
            };
            ctx.notify(Notification::success(key));
            ctx.tracker.track(UserAction::JobSaved { job_id, saved });
        }
        JobBoardEvent::ApplicationStarted(job_id) => {
            ctx.notify(Notification::success("notification-application-submitted"));
            ctx.tracker.track(UserAction::JobApplicationStarted { job_id });
        }
        JobBoardEvent::Subscribed(email) => {
            ctx.notify(Notification::success("notification-newsletter-subscribed"));
            ctx.tracker.track(UserAction::NewsletterSubscription {
                email_domain: email_domain(&email),
            });
        }
        JobBoardEvent::ResourceOpened(resource_id) => {
            let resource = ctx
                .catalog
                .resource(&resource_id)
                .map_or(resource_id.clone(), |resource| resource.title.clone());
            ctx.tracker.track(UserAction::ResourceClick { resource });
        }
    }
    Task::none()
}

// =============================================================================
// Auth
// =============================================================================

pub fn handle_auth_message(
    ctx: &mut UpdateContext<'_>,
    kind: FormKind,
    message: auth::Message,
) -> Task<Message> {
    match auth::update(ctx.form_mut(kind), message) {
        AuthEvent::None => Task::none(),
        AuthEvent::Invalid => {
            ctx.notify(Notification::error("notification-form-invalid"));
            Task::none()
        }
        AuthEvent::Submitted(submission) => {
            let form = submission.form;
            let id = ctx.deferred.schedule(
                ctx.now,
                ctx.latencies.submit,
                DeferredAction::SubmissionFinished(submission),
            );
            *ctx.pending_submission = Some((form, id));
            Task::none()
        }
        AuthEvent::Navigate(screen) => handle_navigation(ctx, screen),
    }
}

fn finish_submission(ctx: &mut UpdateContext<'_>, submission: Submission) {
    *ctx.pending_submission = None;
    *ctx.form_mut(submission.form) = FormState::new(submission.form);

    *ctx.session = Session::signed_in(submission.email.clone());
    if let Some(key) = ctx.session.save_to(ctx.data_dir.clone()) {
        ctx.notify(Notification::info(key));
    }

    let domain = email_domain(&submission.email);
    let key = match submission.form {
        FormKind::Login => {
            ctx.tracker.track(UserAction::UserLogin {
                email_domain: domain,
            });
            "notification-login-success"
        }
        FormKind::Signup => {
            ctx.tracker.track(UserAction::UserSignup {
                email_domain: domain,
            });
            "notification-signup-success"
        }
    };
    ctx.notify(Notification::success(key));

    if let Some(id) = ctx.pending_redirect.take() {
        ctx.deferred.cancel(id);
    }
    *ctx.pending_redirect = Some(ctx.deferred.schedule(
        ctx.now,
        ctx.latencies.redirect,
        DeferredAction::Redirect(Screen::Profile),
    ));
}

// =============================================================================
// Profile
// =============================================================================

pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    match profile::update(message) {
        ProfileEvent::Prompt(action) => {
            ctx.tracker.track(UserAction::ProfilePromptClick {
                action: action.as_str().to_string(),
            });
            handle_navigation(ctx, action.target())
        }
        ProfileEvent::ExportActivity => {
            handle_export_activity(ctx);
            Task::none()
        }
    }
}

fn handle_export_activity(ctx: &mut UpdateContext<'_>) {
    ctx.diagnostics.process_pending();

    let Some(dir) = paths::get_app_data_dir_with_override(ctx.data_dir.clone()) else {
        ctx.notify(Notification::error("notification-activity-export-error"));
        return;
    };

    match ctx.diagnostics.export_to_file(dir.join(default_report_filename())) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "activity report exported");
            ctx.notify(
                Notification::success("notification-activity-exported")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(err) => {
            tracing::warn!(%err, "activity export failed");
            ctx.notify(Notification::error("notification-activity-export-error"));
        }
    }
}

// =============================================================================
// Virtual Time
// =============================================================================

/// Advances timers: notifications, deferred actions, tracked events.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick(ctx.now);

    for action in ctx.deferred.take_due(ctx.now) {
        run_deferred(ctx, action);
    }

    ctx.diagnostics.process_pending();
    Task::none()
}

fn run_deferred(ctx: &mut UpdateContext<'_>, action: DeferredAction) {
    match action {
        DeferredAction::SearchCompleted { query } => {
            ctx.notify(
                Notification::success("notification-search-finished")
                    .with_arg("query", query),
            );
        }
        DeferredAction::SubmissionFinished(submission) => finish_submission(ctx, submission),
        DeferredAction::Redirect(screen) => {
            *ctx.pending_redirect = None;
            switch_screen(ctx, screen);
        }
    }
}
