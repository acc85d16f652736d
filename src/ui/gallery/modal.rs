// SPDX-License-Identifier: MPL-2.0
//! Detail modal drawn over the gallery.
//!
//! The backdrop fills the window and reports clicks as
//! [`Message::BackdropPressed`]; the content box is opaque so clicks inside it
//! never reach the backdrop.

use iced::widget::{
    button, center, container, image, mouse_area, opaque, scrollable, Column, Row, Text,
};
use iced::{alignment, ContentFit, Element, Length};

use super::Message;
use crate::application::gallery::DetailContent;
use crate::application::media::DetailMedia;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;

/// What the modal can show in its image area.
pub enum ImageSlot<'a> {
    Absent,
    Loading,
    Ready(&'a image::Handle),
    Failed,
}

pub fn view<'a>(
    i18n: &I18n,
    detail: &'a DetailContent,
    slot: ImageSlot<'a>,
) -> Element<'a, Message> {
    let close = button(Text::new(i18n.tr("modal-close")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::close)
        .on_press(Message::ClosePressed);

    let heading = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(detail.title.as_str())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(close);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(Text::new(detail.display_date.as_str()).size(typography::CAPTION));

    content = match &detail.media {
        DetailMedia::Image { .. } => content.push(image_area(i18n, slot)),
        DetailMedia::Embed { url } => content.push(video_area(i18n, url, slot)),
    };

    if !detail.explanation.is_empty() {
        content = content.push(
            scrollable(Text::new(detail.explanation.as_str()).size(typography::BODY))
                .height(Length::Shrink),
        );
    }

    let panel = container(content)
        .padding(spacing::LG)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .style(styles::container::modal);

    opaque(
        mouse_area(
            center(opaque(panel))
                .padding(spacing::XL)
                .style(styles::container::backdrop),
        )
        .on_press(Message::BackdropPressed),
    )
}

fn image_area<'a>(i18n: &I18n, slot: ImageSlot<'a>) -> Element<'a, Message> {
    match slot {
        ImageSlot::Ready(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .into(),
        ImageSlot::Loading => image_message(i18n.tr("modal-image-loading")),
        ImageSlot::Failed | ImageSlot::Absent => image_message(i18n.tr("modal-image-failed")),
    }
}

fn video_area<'a>(i18n: &I18n, embed_url: &'a str, poster: ImageSlot<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    if let ImageSlot::Ready(handle) = poster {
        column = column.push(
            image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT)),
        );
    }

    let open = button(Text::new(i18n.tr("modal-open-player")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenPlayerPressed);

    column
        .push(Text::new(i18n.tr("modal-video-hint")).size(typography::BODY))
        .push(Text::new(embed_url).size(typography::CAPTION))
        .push(open)
        .into()
}

fn image_message<'a>(label: String) -> Element<'a, Message> {
    center(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
        .style(styles::container::placeholder)
        .into()
}
