// SPDX-License-Identifier: MPL-2.0
//! Card grid.

use iced::widget::{button, center, container, image, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

use super::Message;
use crate::application::gallery::GalleryCard;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::{Thumbnail, ThumbnailCache};

pub fn view<'a>(
    i18n: &I18n,
    cards: &'a [GalleryCard],
    focused: Option<usize>,
    thumbnails: &ThumbnailCache,
) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);

    for (row_index, chunk) in cards.chunks(sizing::GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (column, card) in chunk.iter().enumerate() {
            let index = row_index * sizing::GRID_COLUMNS + column;
            row = row.push(card_view(i18n, card, focused == Some(index), thumbnails));
        }
        // Pad the last row so cards keep the same width.
        for _ in chunk.len()..sizing::GRID_COLUMNS {
            row = row.push(iced::widget::Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn card_view<'a>(
    i18n: &I18n,
    card: &'a GalleryCard,
    focused: bool,
    thumbnails: &ThumbnailCache,
) -> Element<'a, Message> {
    let mut preview = Stack::new().push(thumbnail_view(i18n, card, thumbnails));
    if card.is_video {
        let badge = container(Text::new(i18n.tr("video-badge")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::video_badge);
        preview = preview.push(
            Container::new(badge)
                .padding(spacing::XS)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );
    }

    let content = Column::new()
        .spacing(spacing::XS)
        .push(preview)
        .push(Text::new(card.title.as_str()).size(typography::BODY_LG))
        .push(Text::new(card.display_date.as_str()).size(typography::CAPTION));

    button(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::card(focused))
        .on_press(Message::CardPressed(card.key.clone()))
        .into()
}

fn thumbnail_view<'a>(
    i18n: &I18n,
    card: &GalleryCard,
    thumbnails: &ThumbnailCache,
) -> Element<'a, Message> {
    let state = card.thumbnail.as_deref().and_then(|url| thumbnails.get(url));
    match state {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        Some(Thumbnail::Loading) => placeholder(i18n.tr("thumbnail-loading")),
        Some(Thumbnail::Failed) | None => placeholder(i18n.tr("thumbnail-placeholder")),
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    center(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .style(styles::container::placeholder)
        .into()
}
