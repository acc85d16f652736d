// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
}

/// Renders the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    ctx.gallery.view(ctx.i18n).map(Message::Gallery)
}
