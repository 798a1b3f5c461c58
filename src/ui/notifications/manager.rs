// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the on-screen stack. Every notification goes through
//! the same removal path whether its lifetime elapsed or its close button
//! was pressed: displayed, then removing for the exit transition, then
//! detached. Time is supplied by the caller so the lifecycle can be driven
//! by the application tick and by tests alike.

use super::notification::{Kind, Notification, NotificationId, Phase};
use super::toast::StyleSheet;
use crate::config::{
    NotificationsConfig, DEFAULT_NOTIFICATION_EXIT_MS, DEFAULT_NOTIFICATION_LIFETIME_MS,
};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control of a notification was pressed.
    Dismiss(NotificationId),
}

/// Manages the stack of active notifications.
#[derive(Debug)]
pub struct Manager {
    /// Displayed and removing notifications, oldest first.
    active: VecDeque<Notification>,
    lifetime: Duration,
    exit: Duration,
    /// Optional cap on displayed notifications.
    max_visible: Option<usize>,
    /// Shared toast styles, built on the first push.
    styles: Option<StyleSheet>,
    style_registrations: usize,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            active: VecDeque::new(),
            lifetime: Duration::from_millis(DEFAULT_NOTIFICATION_LIFETIME_MS),
            exit: Duration::from_millis(DEFAULT_NOTIFICATION_EXIT_MS),
            max_visible: None,
            styles: None,
            style_registrations: 0,
            diagnostics: None,
        }
    }
}

impl Manager {
    /// Creates a new empty manager with default timings and no cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager using the `[notifications]` settings.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            lifetime: config.lifetime(),
            exit: config.exit(),
            max_visible: config.cap(),
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle used to report error notifications.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a notification, stamping it with the current instant.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    /// Pushes a notification that entered the stack at `now`.
    pub fn push_at(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        if self.styles.is_none() {
            self.styles = Some(StyleSheet::new());
            self.style_registrations += 1;
        }

        if notification.kind() == Kind::Error {
            if let Some(handle) = &self.diagnostics {
                handle.log_error(notification.message_key());
            }
        }

        notification.stamp(now);
        let id = notification.id();
        self.active.push_back(notification);
        self.enforce_cap(now);
        id
    }

    /// Convenience for `push` with a bare message key.
    pub fn notify(&mut self, kind: Kind, message_key: impl Into<String>) -> NotificationId {
        self.push(Notification::new(kind, message_key))
    }

    /// Starts the removal of a notification.
    ///
    /// Returns `true` if the notification was displayed and is now leaving.
    /// Unknown IDs and notifications already leaving are ignored.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.active
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.begin_removal(now))
    }

    /// Advances the lifecycle to `now`.
    ///
    /// Displayed notifications whose lifetime elapsed start leaving, and
    /// notifications whose exit transition finished are detached. Returns
    /// the detached notifications, each in the `Removed` phase.
    pub fn tick(&mut self, now: Instant) -> Vec<Notification> {
        let lifetime = self.lifetime;
        for notification in &mut self.active {
            if notification.is_expired(now, lifetime) {
                let deadline = notification.created_at() + lifetime;
                notification.begin_removal(deadline);
            }
        }

        let exit = self.exit;
        let mut detached = Vec::new();
        let mut kept = VecDeque::with_capacity(self.active.len());
        for mut notification in self.active.drain(..) {
            if notification.exit_finished(now, exit) {
                notification.mark_removed();
                detached.push(notification);
            } else {
                kept.push_back(notification);
            }
        }
        self.active = kept;
        detached
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Returns the notifications on screen (displayed or leaving), oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the number of notifications on screen.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of notifications not yet leaving.
    #[must_use]
    pub fn displayed_count(&self) -> usize {
        self.active
            .iter()
            .filter(|n| n.phase() == Phase::Displayed)
            .count()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns the shared toast styles once the first notification arrived.
    #[must_use]
    pub fn style_sheet(&self) -> Option<&StyleSheet> {
        self.styles.as_ref()
    }

    /// Returns how many times the toast styles were built.
    #[must_use]
    pub fn style_registrations(&self) -> usize {
        self.style_registrations
    }

    /// Retires the oldest displayed notifications beyond the cap.
    fn enforce_cap(&mut self, now: Instant) {
        let Some(cap) = self.max_visible else {
            return;
        };
        let mut excess = self.displayed_count().saturating_sub(cap);
        for notification in &mut self.active {
            if excess == 0 {
                break;
            }
            if notification.begin_removal(now) {
                excess -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    const LIFETIME: Duration = Duration::from_millis(5000);
    const EXIT: Duration = Duration::from_millis(300);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert!(manager.style_sheet().is_none());
    }

    #[test]
    fn style_sheet_is_registered_once() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.push_at(Notification::info("a"), start);
        manager.push_at(Notification::success("b"), start);
        manager.push_at(Notification::error("c"), start);

        assert!(manager.style_sheet().is_some());
        assert_eq!(manager.style_registrations(), 1);
    }

    #[test]
    fn style_sheet_does_not_depend_on_exit_timing() {
        let config = NotificationsConfig {
            exit_ms: Some(900),
            ..NotificationsConfig::default()
        };
        let mut manager = Manager::from_config(&config);
        manager.push_at(Notification::info("a"), Instant::now());

        assert_eq!(manager.style_sheet(), Some(&StyleSheet::new()));
    }

    #[test]
    fn notification_expires_after_lifetime_then_exit() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.push_at(Notification::success("saved"), start);

        assert!(manager.tick(start + LIFETIME - ms(1)).is_empty());
        assert_eq!(manager.displayed_count(), 1);

        assert!(manager.tick(start + LIFETIME).is_empty());
        assert_eq!(manager.displayed_count(), 0);
        assert_eq!(manager.visible_count(), 1);

        let detached = manager.tick(start + LIFETIME + EXIT);
        assert_eq!(detached.len(), 1);
        assert_eq!(detached[0].phase(), Phase::Removed);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn late_tick_expires_and_detaches_in_one_step() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.push_at(Notification::info("late"), start);

        let detached = manager.tick(start + LIFETIME + EXIT + ms(50));
        assert_eq!(detached.len(), 1);
    }

    #[test]
    fn dismiss_starts_exit_transition() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.push_at(Notification::info("hello"), start);

        assert!(manager.dismiss(id, start + ms(100)));
        assert!(manager.tick(start + ms(399)).is_empty());
        assert_eq!(manager.tick(start + ms(400)).len(), 1);
    }

    #[test]
    fn close_and_timeout_in_same_tick_detach_once() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.push_at(Notification::error("boom"), start);

        let deadline = start + LIFETIME;
        assert!(manager.dismiss(id, deadline));
        assert!(!manager.dismiss(id, deadline));

        let mut detached = manager.tick(deadline);
        detached.extend(manager.tick(deadline + EXIT));
        detached.extend(manager.tick(deadline + EXIT + ms(1000)));
        assert_eq!(detached.len(), 1);
        assert!(!manager.dismiss(id, deadline + EXIT + ms(2000)));
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let mut manager = Manager::new();
        let stray = Notification::success("temp").id();
        assert!(!manager.dismiss(stray, Instant::now()));
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.push_at(Notification::success("test"), start);

        manager.handle_message(&Message::Dismiss(id), start);
        assert_eq!(manager.displayed_count(), 0);
    }

    #[test]
    fn stack_is_unbounded_by_default() {
        let mut manager = Manager::new();
        let start = Instant::now();
        for i in 0..20 {
            manager.push_at(Notification::info(format!("n-{i}")), start);
        }
        assert_eq!(manager.displayed_count(), 20);
    }

    #[test]
    fn identical_messages_are_not_merged() {
        let mut manager = Manager::new();
        manager.notify(Kind::Info, "same");
        manager.notify(Kind::Info, "same");
        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn cap_retires_oldest_through_removal_path() {
        let config = NotificationsConfig {
            max_visible: Some(2),
            ..NotificationsConfig::default()
        };
        let mut manager = Manager::from_config(&config);
        let start = Instant::now();
        let first = manager.push_at(Notification::info("1"), start);
        manager.push_at(Notification::info("2"), start + ms(10));
        manager.push_at(Notification::info("3"), start + ms(20));

        assert_eq!(manager.displayed_count(), 2);
        let leaving: Vec<_> = manager.visible().filter(|n| n.is_removing()).collect();
        assert_eq!(leaving.len(), 1);
        assert_eq!(leaving[0].id(), first);

        let detached = manager.tick(start + ms(20) + EXIT);
        assert_eq!(detached.len(), 1);
        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn configured_timings_are_used() {
        let config = NotificationsConfig {
            lifetime_ms: Some(1000),
            exit_ms: Some(100),
            max_visible: None,
        };
        let mut manager = Manager::from_config(&config);
        let start = Instant::now();
        manager.push_at(Notification::info("quick"), start);

        assert_eq!(manager.tick(start + ms(1100)).len(), 1);
    }

    #[test]
    fn error_notifications_are_reported_to_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.notify(Kind::Success, "notification-job-saved");
        manager.notify(Kind::Error, "notification-form-invalid");
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticEventKind::Error {
                message_key: "notification-form-invalid".into()
            }]
        );
    }
}
