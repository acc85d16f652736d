// SPDX-License-Identifier: MPL-2.0
//! "Did you know?" banner with a random space fact.

use iced::widget::{container, Column, Text};
use iced::{Element, Length};
use rand::Rng;

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;

/// i18n keys of the facts the banner picks from.
pub const FACT_KEYS: [&str; 7] = [
    "space-fact-1",
    "space-fact-2",
    "space-fact-3",
    "space-fact-4",
    "space-fact-5",
    "space-fact-6",
    "space-fact-7",
];

/// Picks one fact for this session.
#[must_use]
pub fn random_fact_key() -> &'static str {
    FACT_KEYS[rand::rng().random_range(0..FACT_KEYS.len())]
}

pub fn view<'a>(i18n: &I18n, fact_key: &str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("fact-heading")).size(typography::BODY_LG))
        .push(Text::new(i18n.tr(fact_key)).size(typography::BODY));

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
