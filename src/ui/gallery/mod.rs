// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: date controls, status region, card grid and detail modal.
//!
//! [`State`] is the iced-side [`GallerySurface`]. The
//! [`GalleryController`](crate::application::gallery::GalleryController)
//! decides what to show and calls the surface capabilities; this module only
//! stores what it is told and draws it. User input leaves as an [`Effect`]
//! carrying a [`Command`] for the controller.

mod controls;
pub mod fact;
mod grid;
mod modal;
mod status;

use iced::widget::{image, scrollable, Column, Container, Stack, Text};
use iced::{Element, Length};

use crate::application::gallery::{CloseReason, DetailContent, GalleryCard};
use crate::application::media::DetailMedia;
use crate::application::port::{Command, GallerySurface, Status};
use crate::domain::error::NetworkError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::ThumbnailCache;
use crate::ui::widgets::scroll_lock;

/// Keyboard focus movement across the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// Tab / right arrow, wraps around.
    Next,
    /// Shift-Tab / left arrow, wraps around.
    Previous,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

#[derive(Debug, Clone)]
pub enum Message {
    StartChanged(String),
    EndChanged(String),
    FetchPressed,
    CardPressed(String),
    ClosePressed,
    BackdropPressed,
    /// Escape.
    CancelPressed,
    OpenPlayerPressed,
    MoveFocus(FocusMove),
    /// Enter on the focused card.
    ActivateFocused,
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, NetworkError>,
    },
    DetailImageLoaded {
        url: String,
        result: Result<Vec<u8>, NetworkError>,
    },
}

/// What the application must do after a gallery message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Forward to the gallery controller.
    Command(Command),
    /// Open this player URL in the system browser.
    OpenPlayer(String),
}

/// Image slot of the detail modal.
#[derive(Debug, Clone, Default)]
enum DetailImage {
    #[default]
    None,
    Loading(String),
    Ready(image::Handle),
    Failed,
}

/// Results summary when the range held more records than fit the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Capped {
    shown: usize,
    total: usize,
}

#[derive(Debug)]
pub struct State {
    start_input: String,
    end_input: String,
    cards: Vec<GalleryCard>,
    status: Status,
    detail: Option<DetailContent>,
    detail_image: DetailImage,
    pending_detail_image: Option<String>,
    scroll_locked: bool,
    focused: Option<usize>,
    thumbnails: ThumbnailCache,
    capped: Option<Capped>,
    notice: Option<&'static str>,
    fact_key: &'static str,
}

impl State {
    #[must_use]
    pub fn new(
        start_input: String,
        end_input: String,
        thumbnail_capacity: usize,
        fact_key: &'static str,
    ) -> Self {
        Self {
            start_input,
            end_input,
            cards: Vec::new(),
            status: Status::Hidden,
            detail: None,
            detail_image: DetailImage::None,
            pending_detail_image: None,
            scroll_locked: false,
            focused: None,
            thumbnails: ThumbnailCache::new(thumbnail_capacity),
            capped: None,
            notice: None,
            fact_key,
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::StartChanged(value) => {
                self.start_input = value;
                Effect::None
            }
            Message::EndChanged(value) => {
                self.end_input = value;
                Effect::None
            }
            Message::FetchPressed => {
                self.notice = None;
                Effect::Command(Command::Fetch {
                    start: self.start_input.clone(),
                    end: self.end_input.clone(),
                })
            }
            Message::CardPressed(key) => {
                self.focused = self.cards.iter().position(|card| card.key == key);
                Effect::Command(Command::Activate(key))
            }
            Message::ClosePressed => self.close(CloseReason::CloseControl),
            Message::BackdropPressed => self.close(CloseReason::Backdrop),
            Message::CancelPressed => self.close(CloseReason::CancelKey),
            Message::OpenPlayerPressed => match self.detail.as_ref().map(|d| &d.media) {
                Some(DetailMedia::Embed { url }) => Effect::OpenPlayer(url.clone()),
                _ => Effect::None,
            },
            Message::MoveFocus(movement) => {
                if self.detail.is_none() {
                    self.focused = move_focus(self.focused, self.cards.len(), movement);
                }
                Effect::None
            }
            Message::ActivateFocused => {
                if self.detail.is_some() {
                    return Effect::None;
                }
                self.focused
                    .and_then(|index| self.cards.get(index))
                    .map_or(Effect::None, |card| {
                        Effect::Command(Command::Activate(card.key.clone()))
                    })
            }
            Message::ThumbnailLoaded { url, result } => {
                self.thumbnails.complete(&url, result);
                Effect::None
            }
            Message::DetailImageLoaded { url, result } => {
                self.apply_detail_image(&url, result);
                Effect::None
            }
        }
    }

    fn close(&self, reason: CloseReason) -> Effect {
        if self.detail.is_some() {
            Effect::Command(Command::Close(reason))
        } else {
            Effect::None
        }
    }

    fn apply_detail_image(&mut self, url: &str, result: Result<Vec<u8>, NetworkError>) {
        if !matches!(&self.detail_image, DetailImage::Loading(wanted) if wanted == url) {
            log::debug!("Dropping detail image {url}: modal closed or switched");
            return;
        }
        self.detail_image = match result {
            Ok(bytes) => DetailImage::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!("Detail image {url} failed: {err}");
                DetailImage::Failed
            }
        };
    }

    /// Filters `urls` down to thumbnails that still need downloading.
    pub fn request_thumbnails(&mut self, urls: Vec<String>) -> Vec<String> {
        urls.into_iter()
            .filter(|url| self.thumbnails.request(url))
            .collect()
    }

    /// URL of the detail image to download, once per open.
    pub fn take_detail_image_request(&mut self) -> Option<String> {
        self.pending_detail_image.take()
    }

    /// Records that only the most recent `shown` of `total` matches are drawn.
    pub fn set_result_summary(&mut self, shown: usize, total: usize) {
        self.capped = (total > shown).then_some(Capped { shown, total });
    }

    /// One-line notice under the controls, cleared by the next fetch.
    pub fn set_notice(&mut self, key: &'static str) {
        self.notice = Some(key);
    }

    #[must_use]
    pub fn cards(&self) -> &[GalleryCard] {
        &self.cards
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailContent> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn inputs(&self) -> (&str, &str) {
        (&self.start_input, &self.end_input)
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("app-heading")).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("app-tagline")).size(typography::BODY));

        let mut page = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(fact::view(i18n, self.fact_key))
            .push(controls::view(i18n, &self.start_input, &self.end_input));

        if let Some(key) = self.notice {
            page = page.push(status::notice(i18n, key));
        }
        if let Some(region) = status::view(i18n, self.status) {
            page = page.push(region);
        }
        if let Some(Capped { shown, total }) = self.capped {
            page = page.push(
                Text::new(i18n.tr_with_args(
                    "results-capped",
                    &[
                        ("shown", shown.to_string().as_str()),
                        ("total", total.to_string().as_str()),
                    ],
                ))
                .size(typography::CAPTION),
            );
        }

        let grid = grid::view(i18n, &self.cards, self.focused, &self.thumbnails);
        let body = scroll_lock(
            scrollable(page.push(grid))
                .width(Length::Fill)
                .height(Length::Fill),
            self.scroll_locked,
        );

        let base = Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page);

        match &self.detail {
            Some(detail) => Stack::new()
                .push(base)
                .push(modal::view(i18n, detail, self.detail_image_handle()))
                .into(),
            None => base.into(),
        }
    }

    fn detail_image_handle(&self) -> modal::ImageSlot<'_> {
        match &self.detail_image {
            DetailImage::None => modal::ImageSlot::Absent,
            DetailImage::Loading(_) => modal::ImageSlot::Loading,
            DetailImage::Ready(handle) => modal::ImageSlot::Ready(handle),
            DetailImage::Failed => modal::ImageSlot::Failed,
        }
    }
}

impl GallerySurface for State {
    fn render(&mut self, cards: Vec<GalleryCard>) {
        self.cards = cards;
        self.focused = None;
        self.capped = None;
    }

    fn show_status(&mut self, status: Status) {
        self.status = status;
    }

    fn show_detail(&mut self, detail: Option<DetailContent>) {
        self.pending_detail_image = None;
        self.detail_image = DetailImage::None;

        if let Some(content) = &detail {
            let wanted = match &content.media {
                DetailMedia::Image { url } => Some(url.clone()),
                DetailMedia::Embed { .. } => content.poster.clone(),
            };
            if let Some(url) = wanted.filter(|url| !url.is_empty()) {
                self.detail_image = match self.thumbnails.handle(&url) {
                    Some(handle) => DetailImage::Ready(handle),
                    None => {
                        self.pending_detail_image = Some(url.clone());
                        DetailImage::Loading(url)
                    }
                };
            }
        }
        self.detail = detail;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

/// Next focused card index for `movement` over `len` cards.
fn move_focus(current: Option<usize>, len: usize, movement: FocusMove) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = sizing::GRID_COLUMNS;
    let Some(index) = current.filter(|&i| i < len) else {
        return Some(match movement {
            FocusMove::Previous => len - 1,
            _ => 0,
        });
    };

    Some(match movement {
        FocusMove::Next => (index + 1) % len,
        FocusMove::Previous => (index + len - 1) % len,
        FocusMove::Down if index + columns < len => index + columns,
        FocusMove::Up if index >= columns => index - columns,
        FocusMove::Down | FocusMove::Up => index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::gallery::GalleryController;
    use crate::test_utils::{image_record, video_record};

    fn state() -> State {
        State::new("2024-01-01".into(), "2024-01-09".into(), 16, fact::FACT_KEYS[0])
    }

    fn card(key: &str) -> GalleryCard {
        GalleryCard {
            key: key.to_string(),
            thumbnail: Some(format!("https://example.com/{key}.jpg")),
            title: format!("Title {key}"),
            display_date: key.to_string(),
            is_video: false,
        }
    }

    fn open_detail(state: &mut State, record: &crate::domain::apod::Record) {
        state.show_detail(Some(DetailContent::from_record(record)));
        state.set_scroll_locked(true);
    }

    #[test]
    fn fetch_pressed_forwards_current_inputs() {
        let mut state = state();
        state.update(Message::StartChanged("2024-02-01".into()));
        state.update(Message::EndChanged("2024-02-05".into()));

        assert_eq!(
            state.update(Message::FetchPressed),
            Effect::Command(Command::Fetch {
                start: "2024-02-01".into(),
                end: "2024-02-05".into(),
            })
        );
    }

    #[test]
    fn fetch_clears_notice() {
        let mut state = state();
        state.set_notice("warning-config-load");
        state.update(Message::FetchPressed);
        assert!(state.notice.is_none());
    }

    #[test]
    fn card_press_activates_and_moves_focus() {
        let mut state = state();
        state.render(vec![card("2024-01-01"), card("2024-01-02")]);

        let effect = state.update(Message::CardPressed("2024-01-02".into()));

        assert_eq!(effect, Effect::Command(Command::Activate("2024-01-02".into())));
        assert_eq!(state.focused(), Some(1));
    }

    #[test]
    fn enter_activates_focused_card_like_a_click() {
        let mut state = state();
        state.render(vec![card("2024-01-01"), card("2024-01-02")]);
        state.update(Message::MoveFocus(FocusMove::Next));
        state.update(Message::MoveFocus(FocusMove::Next));

        assert_eq!(
            state.update(Message::ActivateFocused),
            Effect::Command(Command::Activate("2024-01-02".into()))
        );
    }

    #[test]
    fn enter_without_focus_does_nothing() {
        let mut state = state();
        state.render(vec![card("2024-01-01")]);
        assert_eq!(state.update(Message::ActivateFocused), Effect::None);
    }

    #[test]
    fn close_messages_map_to_reasons_only_while_open() {
        let mut state = state();
        assert_eq!(state.update(Message::CancelPressed), Effect::None);

        open_detail(&mut state, &image_record("2024-01-03"));
        assert_eq!(
            state.update(Message::CancelPressed),
            Effect::Command(Command::Close(CloseReason::CancelKey))
        );
        assert_eq!(
            state.update(Message::BackdropPressed),
            Effect::Command(Command::Close(CloseReason::Backdrop))
        );
        assert_eq!(
            state.update(Message::ClosePressed),
            Effect::Command(Command::Close(CloseReason::CloseControl))
        );
    }

    #[test]
    fn focus_is_frozen_while_modal_is_open() {
        let mut state = state();
        state.render(vec![card("2024-01-01"), card("2024-01-02")]);
        open_detail(&mut state, &image_record("2024-01-01"));

        state.update(Message::MoveFocus(FocusMove::Next));
        assert_eq!(state.focused(), None);
        assert_eq!(state.update(Message::ActivateFocused), Effect::None);
    }

    #[test]
    fn render_replaces_cards_and_resets_focus_and_summary() {
        let mut state = state();
        state.render(vec![card("2024-01-01"), card("2024-01-02")]);
        state.update(Message::MoveFocus(FocusMove::Next));
        state.set_result_summary(9, 30);

        state.render(vec![card("2024-02-01")]);

        assert_eq!(state.cards().len(), 1);
        assert_eq!(state.focused(), None);
        assert!(state.capped.is_none());
    }

    #[test]
    fn summary_only_when_results_were_capped() {
        let mut state = state();
        state.set_result_summary(9, 9);
        assert!(state.capped.is_none());
        state.set_result_summary(9, 12);
        assert_eq!(state.capped, Some(Capped { shown: 9, total: 12 }));
    }

    #[test]
    fn image_detail_requests_full_image_once() {
        let mut state = state();
        let record = image_record("2024-01-05");
        open_detail(&mut state, &record);

        let requested = state.take_detail_image_request();
        assert_eq!(requested.as_deref(), record.hdurl());
        assert!(state.take_detail_image_request().is_none());
        assert!(matches!(state.detail_image, DetailImage::Loading(_)));
    }

    #[test]
    fn video_detail_reuses_cached_poster() {
        let mut state = state();
        let record = video_record("2024-01-06", "dQw4w9WgXcQ");
        let poster = "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string();
        assert_eq!(state.request_thumbnails(vec![poster.clone()]), vec![poster.clone()]);
        state.update(Message::ThumbnailLoaded {
            url: poster,
            result: Ok(vec![1, 2, 3]),
        });

        open_detail(&mut state, &record);

        assert!(state.take_detail_image_request().is_none());
        assert!(matches!(state.detail_image, DetailImage::Ready(_)));
    }

    #[test]
    fn open_player_uses_embed_url() {
        let mut state = state();
        open_detail(&mut state, &video_record("2024-01-06", "dQw4w9WgXcQ"));

        assert_eq!(
            state.update(Message::OpenPlayerPressed),
            Effect::OpenPlayer("https://www.youtube.com/embed/dQw4w9WgXcQ".into())
        );
    }

    #[test]
    fn open_player_is_ignored_for_images() {
        let mut state = state();
        open_detail(&mut state, &image_record("2024-01-05"));
        assert_eq!(state.update(Message::OpenPlayerPressed), Effect::None);
    }

    #[test]
    fn late_detail_image_for_other_record_is_dropped() {
        let mut state = state();
        let first = image_record("2024-01-05");
        open_detail(&mut state, &first);
        let first_url = state.take_detail_image_request().expect("first request");

        open_detail(&mut state, &image_record("2024-01-07"));
        state.update(Message::DetailImageLoaded {
            url: first_url,
            result: Ok(vec![1, 2, 3]),
        });

        assert!(matches!(state.detail_image, DetailImage::Loading(_)));
    }

    #[test]
    fn detail_image_after_close_is_dropped() {
        let mut state = state();
        open_detail(&mut state, &image_record("2024-01-05"));
        let url = state.take_detail_image_request().expect("request");
        state.show_detail(None);

        state.update(Message::DetailImageLoaded {
            url,
            result: Ok(vec![1]),
        });

        assert!(matches!(state.detail_image, DetailImage::None));
    }

    #[test]
    fn failed_detail_image_is_reported() {
        let mut state = state();
        open_detail(&mut state, &image_record("2024-01-05"));
        let url = state.take_detail_image_request().expect("request");

        state.update(Message::DetailImageLoaded {
            url,
            result: Err(NetworkError::Status(404)),
        });

        assert!(matches!(state.detail_image, DetailImage::Failed));
    }

    #[test]
    fn thumbnails_are_requested_once() {
        let mut state = state();
        let urls = vec!["https://a/1.jpg".to_string(), "https://a/2.jpg".to_string()];
        assert_eq!(state.request_thumbnails(urls.clone()).len(), 2);
        assert!(state.request_thumbnails(urls).is_empty());
    }

    #[test]
    fn controller_drives_surface_end_to_end() {
        let mut state = state();
        let mut controller = GalleryController::new();

        let Effect::Command(command) = state.update(Message::FetchPressed) else {
            panic!("fetch should produce a command");
        };
        let ticket = controller
            .handle(command, &mut state)
            .expect("valid range issues a ticket");
        assert_eq!(state.status(), Status::Loading);

        let thumbnails = controller.complete_fetch(
            ticket.token,
            Ok(vec![image_record("2024-01-02"), image_record("2024-01-04")]),
            &mut state,
        );
        assert_eq!(state.cards().len(), 2);
        assert_eq!(thumbnails.len(), 2);
        assert_eq!(state.status(), Status::Hidden);

        let Effect::Command(activate) = state.update(Message::CardPressed("2024-01-04".into()))
        else {
            panic!("card press should produce a command");
        };
        controller.handle(activate, &mut state);
        assert_eq!(state.detail().map(|d| d.key.as_str()), Some("2024-01-04"));
        assert!(state.is_scroll_locked());

        let Effect::Command(close) = state.update(Message::CancelPressed) else {
            panic!("escape should close");
        };
        controller.handle(close, &mut state);
        assert!(state.detail().is_none());
        assert!(!state.is_scroll_locked());
    }

    #[test]
    fn focus_wraps_on_tab() {
        assert_eq!(move_focus(None, 4, FocusMove::Next), Some(0));
        assert_eq!(move_focus(None, 4, FocusMove::Previous), Some(3));
        assert_eq!(move_focus(Some(3), 4, FocusMove::Next), Some(0));
        assert_eq!(move_focus(Some(0), 4, FocusMove::Previous), Some(3));
    }

    #[test]
    fn vertical_focus_moves_by_row_and_stops_at_edges() {
        assert_eq!(move_focus(Some(1), 9, FocusMove::Down), Some(4));
        assert_eq!(move_focus(Some(7), 9, FocusMove::Down), Some(7));
        assert_eq!(move_focus(Some(4), 9, FocusMove::Up), Some(1));
        assert_eq!(move_focus(Some(2), 9, FocusMove::Up), Some(2));
    }

    #[test]
    fn focus_on_empty_grid_is_none() {
        assert_eq!(move_focus(Some(2), 0, FocusMove::Next), None);
    }

    #[test]
    fn stale_focus_index_restarts() {
        assert_eq!(move_focus(Some(8), 2, FocusMove::Down), Some(0));
    }
}
