// SPDX-License-Identifier: MPL-2.0
//! Tracked event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions captured for activity reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation
    // ==========================================================================
    /// A screen was shown.
    PageView { screen: String },

    /// The Ctrl/Cmd+K shortcut focused the search box.
    SearchShortcut,

    /// A sign-in or sign-up prompt on the profile screen was used.
    ProfilePromptClick { action: String },

    // ==========================================================================
    // Job Board
    // ==========================================================================
    FilterUsed { filter: String },

    SearchPerformed { query: String },

    JobSaved { job_id: String, saved: bool },

    JobApplicationStarted { job_id: String },

    NewsletterSubscription { email_domain: String },

    /// A career resource was opened.
    ResourceClick { resource: String },

    // ==========================================================================
    // Session
    // ==========================================================================
    UserLogin { email_domain: String },

    UserSignup { email_domain: String },

    UserLogout,
}

/// Category of a stored event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    /// An error notification was shown to the user.
    Error { message_key: String },
}

/// A timestamped event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// Returns the domain part of an email address, or `"unknown"`.
#[must_use]
pub fn email_domain(email: &str) -> String {
    email
        .trim()
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .filter(|domain| !domain.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_domain_keeps_only_domain() {
        assert_eq!(email_domain("Jane.Doe@Example.COM"), "example.com");
        assert_eq!(email_domain("no-at-sign"), "unknown");
        assert_eq!(email_domain("trailing@"), "unknown");
    }

    #[test]
    fn user_action_serializes_with_snake_case_tag() {
        let json = serde_json::to_value(UserAction::FilterUsed {
            filter: "design".into(),
        })
        .expect("serialize");
        assert_eq!(json["event"], "filter_used");
        assert_eq!(json["filter"], "design");
    }

    #[test]
    fn prompt_click_keeps_its_action_field() {
        let action = UserAction::ProfilePromptClick {
            action: "signup".into(),
        };
        let json = serde_json::to_value(&action).expect("serialize");
        assert_eq!(json["event"], "profile_prompt_click");
        assert_eq!(json["action"], "signup");

        let back: UserAction = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, action);
    }

    #[test]
    fn event_flattens_kind() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            message_key: "notification-form-invalid".into(),
        });
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message_key"], "notification-form-invalid");
        assert!(json.get("timestamp").is_some());
    }
}
