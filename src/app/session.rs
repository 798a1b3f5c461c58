// SPDX-License-Identifier: MPL-2.0
//! Signed-in session persisted in CBOR format.
//!
//! The session is loaded once at startup, written when a sign-in or sign-up
//! completes and removed on sign-out. It lives next to other application
//! data, separate from the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()`/`clear_from()` with an explicit directory
//! 2. Set `PATHSTARTER_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;

/// Session file name within the app data directory.
const SESSION_FILE: &str = "session.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    /// A signed-in session for `email`.
    #[must_use]
    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            email: Some(email.into()),
        }
    }

    /// Email of the signed-in user. `None` while signed out.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        if self.logged_in {
            self.email.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.email().is_some()
    }

    /// Loads the session from `base_dir`, or the default data directory.
    ///
    /// Returns the session and an optional i18n warning key. Any failure
    /// degrades to a signed-out session.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::session_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(session) => (session, None),
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "failed to parse session");
                    (
                        Self::default(),
                        Some("notification-session-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "failed to read session");
                (
                    Self::default(),
                    Some("notification-session-read-error".to_string()),
                )
            }
        }
    }

    /// Returns an i18n warning key if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::session_file_path_with_override(base_dir) else {
            return Some("notification-session-write-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-session-write-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
                    tracing::warn!(%err, "failed to write session");
                    return Some("notification-session-write-error".to_string());
                }
                None
            }
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "failed to create session file");
                Some("notification-session-write-error".to_string())
            }
        }
    }

    /// Signs out and removes the persisted session file.
    pub fn clear_from(&mut self, base_dir: Option<PathBuf>) -> Option<String> {
        *self = Self::default();

        let path = Self::session_file_path_with_override(base_dir)?;
        match fs::remove_file(&path) {
            Ok(()) => None,
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "failed to remove session");
                Some("notification-session-write-error".to_string())
            }
        }
    }

    fn session_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SESSION_FILE);
            path
        })
    }
}
