// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every gallery widget.
//!
//! Palette, spacing, sizing, typography, radius and shadow scales. Widgets
//! take values from here instead of hard-coding numbers so the grid, the
//! controls and the detail modal stay visually consistent.
//!
//! ```
//! use apod_gallery::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.05, 0.06, 0.09);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.11, 0.14);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.17, 0.21);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.46, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.79, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.91, 0.93);

    // Brand (deep-space blue)
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.55, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.18, 0.4, 0.85);
    pub const PRIMARY_600: Color = Color::from_rgb(0.12, 0.3, 0.7);

    // Accent used for the video badge
    pub const ACCENT_500: Color = Color::from_rgb(0.93, 0.33, 0.25);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.15;
    /// Modal backdrop over the gallery.
    pub const BACKDROP: f32 = 0.75;
    pub const BADGE: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Cards per grid row; nine results fill three rows.
    pub const GRID_COLUMNS: usize = 3;
    pub const THUMBNAIL_HEIGHT: f32 = 180.0;
    pub const DATE_INPUT_WIDTH: f32 = 160.0;
    pub const MODAL_MAX_WIDTH: f32 = 820.0;
    pub const MODAL_IMAGE_HEIGHT: f32 = 440.0;
    pub const FOCUS_RING: f32 = 3.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Application heading.
    pub const TITLE_LG: f32 = 28.0;

    /// Modal title.
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles.
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Dates, badges, hints.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::GRID_COLUMNS > 0);
};
