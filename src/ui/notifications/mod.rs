// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear in the top-right corner to confirm actions (job
//! saved, application sent, signed in) or report problems without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with its `Kind` and lifecycle `Phase`
//! - [`manager`] - `Manager` owning the stack and the removal protocol
//! - [`toast`] - Toast widget and the shared `StyleSheet`
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Kind, Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-job-saved"));
//!
//! // On every application tick
//! manager.tick(now);
//!
//! // In the view
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use toast::{StyleSheet, Toast};
