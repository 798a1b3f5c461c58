// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind` and the
//! `Phase` it moves through before being detached from the stack.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of notification; selects the icon glyph and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    /// Returns the glyph shown before the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ",
            Kind::Success => "✓",
            Kind::Error => "✗",
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Info => palette::ACCENT_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen, waiting for its lifetime to elapse or a close request.
    Displayed,
    /// Playing the exit transition that started at `since`.
    Removing { since: Instant },
    /// Detached from the stack. Terminal.
    Removed,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// The i18n key for the notification message.
    message_key: String,
    /// Arguments for message interpolation.
    message_args: Vec<(String, String)>,
    /// When the notification entered the stack.
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given kind and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            phase: Phase::Displayed,
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Info, message_key)
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        matches!(self.phase, Phase::Removing { .. })
    }

    /// Resets the creation instant; the manager stamps it with virtual time.
    pub(super) fn stamp(&mut self, now: Instant) {
        self.created_at = now;
    }

    /// Starts the exit transition. Returns false unless still displayed.
    pub(super) fn begin_removal(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Displayed {
            self.phase = Phase::Removing { since: now };
            true
        } else {
            false
        }
    }

    pub(super) fn mark_removed(&mut self) {
        self.phase = Phase::Removed;
    }

    /// Returns true once the display lifetime has elapsed.
    pub(super) fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        self.phase == Phase::Displayed && now.saturating_duration_since(self.created_at) >= lifetime
    }

    /// Returns true once the exit transition has finished.
    pub(super) fn exit_finished(&self, now: Instant, exit: Duration) -> bool {
        match self.phase {
            Phase::Removing { since } => now.saturating_duration_since(since) >= exit,
            Phase::Displayed | Phase::Removed => false,
        }
    }
}
