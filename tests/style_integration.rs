// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use pathstarter::forms::StrengthLevel;
    use pathstarter::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
    use pathstarter::ui::notifications::Kind;
    use pathstarter::ui::styles::{button, container, input};
    use pathstarter::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;
        let status = iced::widget::button::Status::Active;

        let _ = button::primary(&theme, status);
        let _ = button::selected(&theme, status);
        let _ = button::unselected(&theme, status);
        let _ = button::link(&theme, status);
        let _ = button::dismiss(&theme, status);
    }

    #[test]
    fn container_styles_follow_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::card(&theme);
            let _ = container::navbar(&theme);
            let _ = container::dropdown(&theme);
            let _ = container::badge(&theme);
            let _ = container::strength_track(&theme);
            let _ = container::toast(&theme, palette::SUCCESS_500, true);
        }
    }

    #[test]
    fn input_borders_signal_validity() {
        let theme = Theme::Light;
        assert_eq!(input::FieldState::Valid.border_color(&theme), palette::SUCCESS_500);
        assert_eq!(input::FieldState::Invalid.border_color(&theme), palette::ERROR_500);
    }

    #[test]
    fn design_tokens_are_ordered() {
        assert!(spacing::XS < spacing::MD && spacing::MD < spacing::XL);
        assert!(radius::SM < radius::LG);
        assert!(opacity::LEAVING < opacity::OPAQUE);
        assert!(sizing::FORM_WIDTH > sizing::TOAST_WIDTH);
    }

    #[test]
    fn accents_are_distinct_per_kind() {
        assert_ne!(Kind::Info.color(), Kind::Success.color());
        assert_ne!(Kind::Success.color(), Kind::Error.color());
        assert_eq!(StrengthLevel::VeryWeak.color(), palette::ERROR_500);
    }

    #[test]
    fn explicit_theme_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
