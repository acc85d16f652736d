// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow, sizing,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (fetch, open player).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_400)),
            text_color: palette::GRAY_200,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Gallery card. `focused` draws the keyboard focus ring.
pub fn card(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered);

        let border = if focused {
            Border {
                color: colors.focus,
                width: sizing::FOCUS_RING,
                radius: radius::MD.into(),
            }
        } else if hovered {
            Border {
                color: colors.brand_primary,
                width: 1.0,
                radius: radius::MD.into(),
            }
        } else {
            Border {
                color: Color::TRANSPARENT,
                width: 1.0,
                radius: radius::MD.into(),
            }
        };

        button::Style {
            background: Some(Background::Color(colors.surface_card)),
            text_color: colors.text_primary,
            border,
            shadow: if hovered || focused {
                shadow::LG
            } else {
                shadow::SM
            },
            snap: true,
        }
    }
}

/// Round "×" control in the modal corner.
pub fn close(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::BADGE,
        _ => opacity::SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..colors.text_secondary
        })),
        text_color: colors.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
