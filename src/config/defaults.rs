// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime, exit transition, stack cap
//! - **Timing**: Simulated latencies for search, form submission, redirects
//! - **Forms**: Validation thresholds
//! - **Search**: Suggestion dropdown behavior

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays on screen before it starts leaving (milliseconds).
pub const DEFAULT_NOTIFICATION_LIFETIME_MS: u64 = 5000;

/// Duration of the exit transition before a toast is detached (milliseconds).
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;

/// Upper bound accepted for `max_visible` in `settings.toml`.
pub const MAX_NOTIFICATION_CAP: usize = 50;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay between "Searching for..." and "Found results for..." (milliseconds).
pub const DEFAULT_SEARCH_LATENCY_MS: u64 = 1500;

/// Simulated processing time for an accepted form submission (milliseconds).
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 2000;

/// Delay before redirecting to the profile after sign-in (milliseconds).
pub const DEFAULT_REDIRECT_MS: u64 = 1500;

/// Delay before returning to the job list after sign-out (milliseconds).
pub const DEFAULT_LOGOUT_REDIRECT_MS: u64 = 1000;

/// Longest simulated delay accepted from `settings.toml` (milliseconds).
pub const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Minimum password length accepted by the validator.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// The suggestion dropdown opens once the query is longer than this.
pub const SEARCH_SUGGESTION_MIN_CHARS: usize = 1;

const _: () = {
    assert!(DEFAULT_NOTIFICATION_EXIT_MS < DEFAULT_NOTIFICATION_LIFETIME_MS);
    assert!(DEFAULT_SUBMIT_LATENCY_MS <= MAX_SIMULATED_DELAY_MS);
    assert!(MIN_PASSWORD_LENGTH > 0);
};
