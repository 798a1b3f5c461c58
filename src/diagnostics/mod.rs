// SPDX-License-Identifier: MPL-2.0
//! Activity tracking for the job board.
//!
//! User interactions (filter changes, searches, saved jobs, sign-ins) are
//! captured as typed events, stored in a memory-bounded circular buffer and
//! exportable as a JSON report.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cheap, cloneable sender handed to components
//! - [`DiagnosticsCollector`]: owns the buffer and drains the channel on tick
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//!
//! # Privacy
//!
//! Email addresses are never recorded; only their domain is kept.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{default_report_filename, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{email_domain, DiagnosticEvent, DiagnosticEventKind, UserAction};
