// SPDX-License-Identifier: MPL-2.0
//! Status region: loading line or a single-line message.

use iced::widget::{container, Text};
use iced::{Element, Length};

use super::Message;
use crate::application::port::Status;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;

/// The status region, or `None` while it is hidden.
pub fn view<'a>(i18n: &I18n, status: Status) -> Option<Element<'a, Message>> {
    let (key, style): (&str, fn(&iced::Theme) -> container::Style) = match status {
        Status::Hidden => return None,
        Status::Loading => ("status-loading", styles::container::status_info),
        Status::Error(key) => (key, styles::container::status_error),
    };

    Some(
        container(Text::new(i18n.tr(key)).size(typography::BODY_LG))
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(style)
            .into(),
    )
}

/// Secondary notice (settings fallback, browser launch failure).
pub fn notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    container(Text::new(i18n.tr(key)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::placeholder)
        .into()
}
