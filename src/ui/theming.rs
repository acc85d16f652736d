// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the custom styles draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_primary: Color,
    pub surface_card: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand and semantic
    pub brand_primary: Color,
    pub error: Color,
    pub focus: Color,

    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_card: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            error: palette::ERROR_500,
            focus: palette::PRIMARY_600,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_card: palette::GRAY_800,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            error: palette::ERROR_500,
            focus: palette::INFO_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching an already resolved iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// `System` asks the desktop and falls back to dark when it cannot tell.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
