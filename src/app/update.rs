// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery messages become controller commands; feed and image downloads run
//! as [`Task`]s and come back as [`Message::FeedLoaded`] and
//! [`Message::ImageFetched`].

use std::sync::Arc;
use std::time::Instant;

use iced::Task;

use super::message::{ImageTarget, Message};
use crate::application::gallery::{FetchCompletion, FetchTicket, GalleryController, RequestToken};
use crate::application::port::{Command, FeedSource, Status};
use crate::diagnostics::{
    duration_ms, AppOperation, DiagnosticsCollector, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
use crate::domain::apod::Record;
use crate::domain::error::NetworkError;
use crate::infrastructure::fetch_image;
use crate::ui::browser;
use crate::ui::gallery::{self, Effect};

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub controller: &'a mut GalleryController,
    pub feed: Option<&'a Arc<dyn FeedSource>>,
    pub http: Option<&'a reqwest::Client>,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

/// Handles gallery component messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.update(message) {
        Effect::None => Task::none(),
        Effect::Command(command) => dispatch(ctx, command),
        Effect::OpenPlayer(url) => {
            ctx.diagnostics.log_action(UserAction::OpenPlayer);
            if let Err(err) = browser::open_in_browser(&url) {
                ctx.diagnostics
                    .log_error(ErrorEvent::new(ErrorType::Browser, err.to_string()));
                ctx.gallery.set_notice(err.i18n_key());
            }
            Task::none()
        }
    }
}

/// Runs a command through the controller and starts whatever it needs.
pub fn dispatch(ctx: &mut UpdateContext<'_>, command: Command) -> Task<Message> {
    record_command(ctx.diagnostics, &command);
    let is_fetch = matches!(command, Command::Fetch { .. });
    let is_activate = matches!(command, Command::Activate(_));

    if let Some(ticket) = ctx.controller.handle(command, &mut *ctx.gallery) {
        return start_fetch(ctx, ticket);
    }

    if is_fetch {
        if let Status::Error(key) = ctx.gallery.status() {
            ctx.diagnostics
                .log_warning(WarningEvent::new(WarningType::InvalidRange, key));
        }
    }

    if is_activate {
        if let Some(url) = ctx.gallery.take_detail_image_request() {
            return load_image(ctx.http, ImageTarget::Detail, url);
        }
    }

    Task::none()
}

fn record_command(diagnostics: &mut DiagnosticsCollector, command: &Command) {
    let action = match command {
        Command::Fetch { start, end } => UserAction::FetchRange {
            start: start.clone(),
            end: end.clone(),
        },
        Command::Activate(key) => UserAction::OpenDetail { date: key.clone() },
        Command::Close(reason) => UserAction::CloseDetail {
            reason: reason.as_str().to_string(),
        },
    };
    diagnostics.log_action(action);
}

fn start_fetch(ctx: &mut UpdateContext<'_>, ticket: FetchTicket) -> Task<Message> {
    let FetchTicket { token, interval } = ticket;

    let Some(feed) = ctx.feed else {
        return Task::done(Message::FeedLoaded {
            token,
            result: Err(NetworkError::Transport("HTTP client unavailable".into())),
            duration_ms: 0,
        });
    };

    log::info!(
        "Request #{} for {}..{} ({} days) from {}",
        token.value(),
        interval.start_iso(),
        interval.end_iso(),
        (interval.end() - interval.start()).num_days() + 1,
        feed.location()
    );

    let request = feed.fetch();
    Task::perform(
        async move {
            let started = Instant::now();
            let result = request.await;
            (result, duration_ms(started.elapsed()))
        },
        move |(result, duration_ms)| Message::FeedLoaded {
            token,
            result,
            duration_ms,
        },
    )
}

/// Applies a feed response and starts thumbnail downloads.
pub fn handle_feed_loaded(
    ctx: &mut UpdateContext<'_>,
    token: RequestToken,
    result: Result<Vec<Record>, NetworkError>,
    elapsed_ms: u64,
) -> Task<Message> {
    let records = result.as_ref().map_or(0, Vec::len);
    let failure = result.as_ref().err().map(ToString::to_string);

    let completion = ctx.controller.apply_response(token, result, &mut *ctx.gallery);
    match &completion {
        FetchCompletion::Stale => ctx.diagnostics.log_warning(WarningEvent::new(
            WarningType::StaleResponse,
            format!("request #{}", token.value()),
        )),
        FetchCompletion::Failed => {
            ctx.diagnostics.log_error(ErrorEvent::new(
                ErrorType::Feed,
                failure.unwrap_or_default(),
            ));
            ctx.diagnostics.dump_to_log("feed request failed");
        }
        FetchCompletion::Empty => ctx.diagnostics.log_operation(AppOperation::FetchFeed {
            duration_ms: elapsed_ms,
            records,
            shown: 0,
        }),
        FetchCompletion::Applied {
            shown,
            total_matches,
            ..
        } => {
            ctx.diagnostics.log_operation(AppOperation::FetchFeed {
                duration_ms: elapsed_ms,
                records,
                shown: *shown,
            });
            ctx.gallery.set_result_summary(*shown, *total_matches);
        }
    }

    let http = ctx.http;
    let wanted = ctx.gallery.request_thumbnails(completion.into_thumbnails());
    Task::batch(
        wanted
            .into_iter()
            .map(|url| load_image(http, ImageTarget::Thumbnail, url)),
    )
}

/// Records a finished image download and hands it to the gallery.
pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    target: ImageTarget,
    url: String,
    result: Result<Vec<u8>, NetworkError>,
    elapsed_ms: u64,
) -> Task<Message> {
    match &result {
        Ok(bytes) => ctx.diagnostics.log_operation(AppOperation::LoadImage {
            duration_ms: elapsed_ms,
            bytes: bytes.len(),
        }),
        Err(err) => ctx
            .diagnostics
            .log_error(ErrorEvent::new(ErrorType::Image, format!("{url}: {err}"))),
    }

    let message = match target {
        ImageTarget::Thumbnail => gallery::Message::ThumbnailLoaded { url, result },
        ImageTarget::Detail => gallery::Message::DetailImageLoaded { url, result },
    };
    // Download results never produce an effect.
    let _ = ctx.gallery.update(message);
    Task::none()
}

fn load_image(http: Option<&reqwest::Client>, target: ImageTarget, url: String) -> Task<Message> {
    let Some(client) = http.cloned() else {
        return Task::done(Message::ImageFetched {
            target,
            url,
            result: Err(NetworkError::Transport("HTTP client unavailable".into())),
            duration_ms: 0,
        });
    };

    Task::perform(
        async move {
            let started = Instant::now();
            let result = fetch_image(client, url.clone()).await;
            (url, result, duration_ms(started.elapsed()))
        },
        move |(url, result, duration_ms)| Message::ImageFetched {
            target,
            url,
            result,
            duration_ms,
        },
    )
}
