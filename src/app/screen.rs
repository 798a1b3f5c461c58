// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Jobs,
    Login,
    Signup,
    Profile,
}

impl Screen {
    /// Name recorded in page-view events.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Jobs => "jobs",
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Profile => "profile",
        }
    }

    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Jobs => "screen-jobs",
            Screen::Login => "screen-login",
            Screen::Signup => "screen-signup",
            Screen::Profile => "screen-profile",
        }
    }
}
