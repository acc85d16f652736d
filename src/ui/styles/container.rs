// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Rounded surface for the controls bar and the fact banner.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind the detail modal.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).backdrop)),
        ..Default::default()
    }
}

/// Detail modal content box.
pub fn modal(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Area where a thumbnail has not arrived (or never will).
pub fn placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..colors.text_secondary
        })),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status line for errors and the empty-range message.
pub fn status_error(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..colors.error
        })),
        text_color: Some(colors.error),
        border: Border {
            color: colors.error,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Status line while a fetch is running.
pub fn status_info(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.text_secondary),
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// "Video" badge on cards.
pub fn video_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE,
            ..palette::ACCENT_500
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
