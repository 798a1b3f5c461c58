// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for colors, spacing, sizes and typography.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pathstarter::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let glass = Color {
    a: opacity::GLASS,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.32, 0.36);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.58, 0.64);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.82, 0.86);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.96);

    // Night surfaces (rgb(10, 14, 26) and lifts)
    pub const NAVY_900: Color = Color::from_rgb(0.039, 0.055, 0.102);
    pub const NAVY_800: Color = Color::from_rgb(0.075, 0.098, 0.165);
    pub const NAVY_700: Color = Color::from_rgb(0.118, 0.145, 0.231);

    // Brand accent
    pub const ACCENT_400: Color = Color::from_rgb(0.55, 0.45, 1.0);
    pub const ACCENT_500: Color = Color::from_rgb(0.424, 0.361, 0.906);
    pub const ACCENT_600: Color = Color::from_rgb(0.33, 0.27, 0.78);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(1.0, 0.278, 0.341); // #ff4757
    pub const ERROR_300: Color = Color::from_rgb(1.0, 0.42, 0.478); // #ff6b7a
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.647, 0.008); // #ffa502
    pub const SUCCESS_500: Color = Color::from_rgb(0.18, 0.835, 0.451); // #2ed573
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Frosted panels over the night background
    pub const GLASS: f32 = 0.08;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Strength bar track
    pub const TRACK: f32 = 0.3;
    pub const OPAQUE: f32 = 1.0;

    /// Toasts that are leaving are drawn faded
    pub const LEAVING: f32 = 0.45;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const STRENGTH_BAR_HEIGHT: f32 = 6.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const FORM_WIDTH: f32 = 420.0;
    pub const SEARCH_WIDTH: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Brand and card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Badges and inline field errors
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accent stripe
    pub const WIDTH_ACCENT: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::LEAVING > 0.0 && opacity::LEAVING < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};
