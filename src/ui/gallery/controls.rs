// SPDX-License-Identifier: MPL-2.0
//! Start/end date inputs and the fetch button.

use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;

pub fn view<'a>(i18n: &I18n, start: &str, end: &str) -> Element<'a, Message> {
    let placeholder = i18n.tr("date-placeholder");

    let start_field = labeled_input(
        i18n.tr("start-date-label"),
        text_input(&placeholder, start)
            .on_input(Message::StartChanged)
            .on_submit(Message::FetchPressed),
    );
    let end_field = labeled_input(
        i18n.tr("end-date-label"),
        text_input(&placeholder, end)
            .on_input(Message::EndChanged)
            .on_submit(Message::FetchPressed),
    );

    let fetch = button(Text::new(i18n.tr("fetch-button")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::FetchPressed);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Bottom)
        .push(start_field)
        .push(end_field)
        .push(fetch);

    let content = Column::new().spacing(spacing::XS).push(row).push(
        Text::new(i18n.tr("keyboard-hint")).size(typography::CAPTION),
    );

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn labeled_input<'a>(
    label: String,
    input: iced::widget::TextInput<'a, Message>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(
            input
                .padding(spacing::XS)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::DATE_INPUT_WIDTH)),
        )
        .into()
}
