// SPDX-License-Identifier: MPL-2.0
//! Collector for aggregating and storing tracked events.
//!
//! Components hold a [`DiagnosticsHandle`] and send events through a
//! bounded channel; the application drains it on each tick.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction};
use crate::error::{Error, Result};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending events to the collector.
///
/// Cheap to clone. Sending never blocks: events are dropped when the
/// channel is full or the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a user action.
    pub fn track(&self, action: UserAction) {
        tracing::debug!(?action, "tracked event");
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }

    /// Records that an error notification was shown.
    pub fn log_error(&self, message_key: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            message_key: message_key.into(),
        });
        let _ = self.event_tx.try_send(event);
    }
}

/// Serialized form of the collected events.
#[derive(Debug, Serialize)]
struct ActivityReport<'a> {
    app_version: &'static str,
    collection_started_at: DateTime<Utc>,
    exported_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<&'a DiagnosticEvent>,
}

/// Central collector for tracked events.
///
/// Stores events in a memory-bounded circular buffer; the oldest are
/// evicted once capacity is reached.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns true if events are waiting in the channel.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.event_rx.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the stored user actions (oldest first).
    pub fn actions(&self) -> impl Iterator<Item = &UserAction> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(action),
            DiagnosticEventKind::Error { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as a JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = ActivityReport {
            app_version: env!("CARGO_PKG_VERSION"),
            collection_started_at: self.collection_started_at,
            exported_at: Utc::now(),
            event_count: self.buffer.len(),
            events: self.buffer.iter().collect(),
        };
        serde_json::to_string_pretty(&report)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// The report is written to a temporary sibling first and then renamed.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if file operations fail, or `Error::State` if
    /// serialization fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self
            .export_json()
            .map_err(|err| Error::State(err.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;

        Ok(path.to_path_buf())
    }
}

/// Default file name for exported activity reports.
#[must_use]
pub fn default_report_filename() -> String {
    format!(
        "pathstarter-activity-{}.json",
        Utc::now().format("%Y%m%d-%H%M%S")
    )
}
