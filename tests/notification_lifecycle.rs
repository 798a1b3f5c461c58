// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle of toast notifications driven by virtual time.

use pathstarter::config::NotificationsConfig;
use pathstarter::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use pathstarter::ui::notifications::{Kind, Manager, Notification, NotificationMessage, Phase};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn timer_and_close_race_removes_once() {
    let t0 = Instant::now();
    let mut manager = Manager::new();
    let id = manager.push_at(Notification::success("notification-job-saved"), t0);

    // Close at 4.9s, timer would fire at 5s.
    manager.handle_message(&NotificationMessage::Dismiss(id), t0 + ms(4900));
    assert!(manager.tick(t0 + ms(5000)).is_empty());

    let detached = manager.tick(t0 + ms(5200));
    assert_eq!(detached.len(), 1);
    assert_eq!(detached[0].phase(), Phase::Removed);

    // A late close request for a detached notification is a no-op.
    assert!(!manager.dismiss(id, t0 + ms(5300)));
    assert!(manager.tick(t0 + ms(6000)).is_empty());
}

#[test]
fn notifications_stack_in_insertion_order() {
    let t0 = Instant::now();
    let mut manager = Manager::new();
    manager.push_at(Notification::info("first"), t0);
    manager.push_at(Notification::error("second"), t0 + ms(10));
    manager.push_at(Notification::success("third"), t0 + ms(20));

    let keys: Vec<_> = manager.visible().map(|n| n.message_key().to_string()).collect();
    assert_eq!(keys, ["first", "second", "third"]);
    assert_eq!(manager.visible().nth(1).map(Notification::kind), Some(Kind::Error));

    // Each expires on its own clock.
    manager.tick(t0 + ms(5005));
    assert_eq!(manager.displayed_count(), 2);
    let detached = manager.tick(t0 + ms(5305));
    assert_eq!(detached.len(), 1);
    assert_eq!(detached[0].message_key(), "first");
    assert_eq!(manager.visible_count(), 2);
    assert_eq!(manager.displayed_count(), 0);
}

#[test]
fn configured_cap_starts_removal_of_oldest() {
    let config = NotificationsConfig {
        max_visible: Some(2),
        ..NotificationsConfig::default()
    };
    let t0 = Instant::now();
    let mut manager = Manager::from_config(&config);
    manager.push_at(Notification::info("a"), t0);
    manager.push_at(Notification::info("b"), t0);
    manager.push_at(Notification::info("c"), t0);

    assert_eq!(manager.displayed_count(), 2);
    assert!(manager.visible().next().is_some_and(Notification::is_removing));
}

#[test]
fn error_notifications_are_logged_for_activity_reports() {
    let mut collector = DiagnosticsCollector::default();
    let mut manager = Manager::new();
    manager.set_diagnostics(collector.handle());

    manager.push(Notification::info("notification-logged-out"));
    manager.push(Notification::error("notification-form-invalid"));
    collector.process_pending();

    let errors: Vec<_> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::Error { message_key } => Some(message_key.as_str()),
            DiagnosticEventKind::UserAction { .. } => None,
        })
        .collect();
    assert_eq!(errors, ["notification-form-invalid"]);
}
