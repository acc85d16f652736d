// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery screen to the controller, the feed
//! source and the diagnostics collector, and translates messages into
//! side effects (feed request, image downloads, browser launch).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, ImageTarget, Message};

use crate::application::gallery::GalleryController;
use crate::application::port::{Command, FeedSource};
use crate::application::query::RangeSelector;
use crate::diagnostics::{DiagnosticsCollector, WarningEvent, WarningType};
use crate::i18n::fluent::I18n;
use crate::infrastructure::http::{build_client, HttpFeedSource};
use crate::ui::gallery::{self, fact};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    controller: GalleryController,
    /// `None` when no HTTP client could be built; fetches then fail.
    feed: Option<Arc<dyn FeedSource>>,
    http: Option<reqwest::Client>,
    theme_mode: ThemeMode,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cards", &self.gallery.cards().len())
            .field("status", &self.gallery.status())
            .field("detail_open", &self.controller.detail().is_open())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, builds the HTTP adapters and optionally starts the
    /// first fetch requested on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let url = flags
            .feed_url
            .clone()
            .unwrap_or_else(|| config.feed.url().to_string());
        let (feed, http) = match build_client(config.feed.user_agent()) {
            Ok(client) => {
                let feed: Arc<dyn FeedSource> =
                    Arc::new(HttpFeedSource::with_client(client.clone(), url));
                (Some(feed), Some(client))
            }
            Err(err) => {
                log::error!("HTTP client unavailable: {err}");
                (None, None)
            }
        };

        let mut app = Self::with_parts(&flags, &config, feed, http);
        if config_warning.is_some() {
            app.gallery.set_notice(config::LOAD_WARNING_KEY);
            app.diagnostics.log_warning(WarningEvent::new(
                WarningType::Config,
                "settings.toml unreadable, using defaults",
            ));
        }

        let task = if flags.requests_initial_fetch() {
            let (start, end) = app.gallery.inputs();
            let command = Command::Fetch {
                start: start.to_string(),
                end: end.to_string(),
            };
            app.dispatch(command)
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Assembles the application from already resolved parts.
    fn with_parts(
        flags: &Flags,
        config: &Config,
        feed: Option<Arc<dyn FeedSource>>,
        http: Option<reqwest::Client>,
    ) -> Self {
        let default = RangeSelector::default_interval(chrono::Local::now().date_naive());
        let start = flags
            .start
            .clone()
            .unwrap_or_else(|| default.start_iso().to_string());
        let end = flags
            .end
            .clone()
            .unwrap_or_else(|| default.end_iso().to_string());

        Self {
            i18n: I18n::new(flags.lang.clone(), config),
            gallery: gallery::State::new(
                start,
                end,
                config.feed.thumbnail_cache_entries(),
                fact::random_fact_key(),
            ),
            controller: GalleryController::new(),
            feed,
            http,
            theme_mode: config.general.theme_mode,
            diagnostics: DiagnosticsCollector::default(),
        }
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            controller: &mut self.controller,
            feed: self.feed.as_ref(),
            http: self.http.as_ref(),
            diagnostics: &mut self.diagnostics,
        }
    }

    fn dispatch(&mut self, command: Command) -> Task<Message> {
        update::dispatch(&mut self.context(), command)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();
        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::FeedLoaded {
                token,
                result,
                duration_ms,
            } => update::handle_feed_loaded(&mut ctx, token, result, duration_ms),
            Message::ImageFetched {
                target,
                url,
                result,
                duration_ms,
            } => update::handle_image_fetched(&mut ctx, target, url, result, duration_ms),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
        })
    }
}
