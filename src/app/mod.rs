// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the job board, the
//! sign-in forms and the profile.
//!
//! The `App` struct wires together the components, localization, the
//! persisted session and the virtual clock, and translates messages into
//! side effects like notifications, session persistence or tracked events.

pub mod deferred;
mod message;
pub mod paths;
pub mod screen;
pub mod session;
pub mod subscription;
mod update;
mod view;

pub use message::{DeferredAction, Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::config::{self, Latencies};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, DiagnosticsHandle, UserAction};
use crate::forms::{FormKind, FormState};
use crate::i18n::fluent::I18n;
use crate::ui::job_board;
use crate::ui::notifications::{self, Notification};
use crate::ui::search;
use crate::ui::theming::ThemeMode;
use deferred::{Deferred, DeferredId};
use iced::{window, Element, Subscription, Task, Theme};
use session::Session;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    catalog: Catalog,
    search: search::State,
    job_board: job_board::State,
    login: FormState,
    signup: FormState,
    session: Session,
    /// Data directory override from the command line.
    data_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    tracker: DiagnosticsHandle,
    deferred: Deferred<DeferredAction>,
    pending_submission: Option<(FormKind, DeferredId)>,
    pending_redirect: Option<DeferredId>,
    latencies: Latencies,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_signed_in())
            .field("pending", &self.deferred.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let tracker = diagnostics.handle();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            theme_mode: ThemeMode::System,
            menu_open: false,
            catalog: Catalog::default(),
            search: search::State::default(),
            job_board: job_board::State::default(),
            login: FormState::new(FormKind::Login),
            signup: FormState::new(FormKind::Signup),
            session: Session::default(),
            data_dir: None,
            notifications: notifications::Manager::new(),
            diagnostics,
            tracker,
            deferred: Deferred::new(),
            pending_submission: None,
            pending_redirect: None,
            latencies: Latencies::default(),
        }
    }
}

impl App {
    /// Initializes application state from the launcher flags.
    ///
    /// Failures to read settings, the session or the catalog never abort
    /// startup; they degrade to defaults and surface as notifications.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let data_dir = flags.data_dir.map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_dir);
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::from_config(&config.notifications),
            latencies: config.timing.latencies(),
            data_dir,
            ..Self::default()
        };
        app.notifications.set_diagnostics(app.tracker.clone());

        if let Some(key) = config_warning {
            app.notifications.push(Notification::info(key));
        }

        let (session, session_warning) = Session::load_from(app.data_dir.clone());
        app.session = session;
        if let Some(key) = session_warning {
            app.notifications.push(Notification::info(key));
        }

        match Catalog::load_embedded() {
            Ok(catalog) => app.catalog = catalog,
            Err(err) => {
                tracing::error!(%err, "failed to load job catalog");
                app.notifications
                    .push(Notification::error("notification-catalog-load-error"));
            }
        }

        app.tracker.track(UserAction::PageView {
            screen: app.screen.as_str().to_string(),
        });
        tracing::info!(
            locale = %app.i18n.current_locale(),
            signed_in = app.session.is_signed_in(),
            jobs = app.catalog.jobs().len(),
            "application started"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.title_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            !self.deferred.is_empty(),
            self.diagnostics.has_pending(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            menu_open: &mut self.menu_open,
            catalog: &self.catalog,
            search: &mut self.search,
            job_board: &mut self.job_board,
            login: &mut self.login,
            signup: &mut self.signup,
            session: &mut self.session,
            data_dir: self.data_dir.clone(),
            notifications: &mut self.notifications,
            tracker: &self.tracker,
            diagnostics: &mut self.diagnostics,
            deferred: &mut self.deferred,
            pending_submission: &mut self.pending_submission,
            pending_redirect: &mut self.pending_redirect,
            latencies: self.latencies,
            now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::JobBoard(board_message) => {
                update::handle_job_board_message(&mut ctx, board_message)
            }
            Message::Auth(kind, auth_message) => {
                update::handle_auth_message(&mut ctx, kind, auth_message)
            }
            Message::Profile(profile_message) => {
                update::handle_profile_message(&mut ctx, profile_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message, now);
                Task::none()
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            menu_open: self.menu_open,
            session_email: self.session.email(),
            catalog: &self.catalog,
            search: &self.search,
            job_board: &self.job_board,
            login: &self.login,
            signup: &self.signup,
            notifications: &self.notifications,
        })
    }
}
