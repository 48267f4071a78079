// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Controllers decide what changed; the handlers here turn the resulting
//! effects into image requests and animation restarts.

use super::{Animations, Message, Screen};
use crate::calculator::{self, Calculator};
use crate::error::Error;
use crate::gallery::{self, swipe::SwipeTracker, Effect, GalleryController};
use crate::media::{self, CacheKey, ImageCache};
use crate::ui::animation;
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::widget::image::Handle;
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub gallery: &'a mut GalleryController,
    pub calculator: &'a mut Calculator,
    pub cache: &'a mut ImageCache,
    pub http: &'a reqwest::Client,
    pub swipe: &'a mut SwipeTracker,
    /// A backdrop tap waiting for its touch to end.
    pub deferred_close: &'a mut bool,
    pub animations: &'a mut Animations,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.screen) {
        NavbarEvent::ScreenChanged(screen) => {
            tracing::debug!(?screen, "switched screen");
            ctx.swipe.cancel();
            *ctx.deferred_close = false;
            Task::none()
        }
        NavbarEvent::None => Task::none(),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    // The lift that released over the backdrop may end a swipe.
    if message == gallery::Message::BackdropClicked && ctx.swipe.is_tracking() {
        *ctx.deferred_close = true;
        return Task::none();
    }
    match ctx.gallery.handle(message) {
        Effect::None => Task::none(),
        Effect::GridChanged => {
            restart_reveal(ctx.gallery, ctx.animations);
            request_thumbnails(ctx)
        }
        Effect::ViewerChanged { id, url } => {
            ctx.animations
                .viewer_fade
                .restart(Instant::now(), animation::lightbox_fade_duration());
            fetch(ctx.cache, ctx.http, CacheKey::viewer(id), url)
        }
        Effect::ViewerClosed => {
            ctx.swipe.cancel();
            *ctx.deferred_close = false;
            Task::none()
        }
    }
}

pub fn handle_calculator_message(
    ctx: &mut UpdateContext<'_>,
    message: calculator::Message,
) -> Task<Message> {
    ctx.calculator.handle(message);
    Task::none()
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    key: CacheKey,
    result: Result<Handle, Error>,
) -> Task<Message> {
    ctx.cache.complete(key, result);
    Task::none()
}

pub fn handle_touch_pressed(ctx: &mut UpdateContext<'_>, x: f32) -> Task<Message> {
    if ctx.gallery.is_viewer_open() {
        ctx.swipe.begin(x);
    }
    Task::none()
}

/// Ends a touch: a long horizontal move navigates, a tap on the backdrop
/// closes the lightbox.
pub fn handle_touch_lifted(ctx: &mut UpdateContext<'_>, x: f32) -> Task<Message> {
    let swipe = ctx.swipe.end(x);
    let close = std::mem::take(ctx.deferred_close);
    match swipe {
        Some(direction) if ctx.gallery.is_viewer_open() => {
            tracing::debug!(?direction, "swipe");
            handle_gallery_message(ctx, gallery::Message::Navigate(direction))
        }
        None if close => handle_gallery_message(ctx, gallery::Message::BackdropClicked),
        _ => Task::none(),
    }
}

/// Drops a touch that ended without a lift.
pub fn handle_touch_lost(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.swipe.cancel();
    *ctx.deferred_close = false;
    Task::none()
}

/// Starts the staggered reveal over the tiles currently shown.
pub fn restart_reveal(gallery: &GalleryController, animations: &mut Animations) {
    animations.grid_reveal.restart(
        Instant::now(),
        animation::reveal_duration(gallery.filtered_len()),
    );
}

/// Requests thumbnails for every shown tile that is not cached yet.
pub fn request_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let wanted: Vec<(CacheKey, String)> = ctx
        .gallery
        .filtered_view()
        .map(|record| (CacheKey::thumbnail(record.id), record.src.clone()))
        .collect();
    Task::batch(
        wanted
            .into_iter()
            .map(|(key, url)| fetch(ctx.cache, ctx.http, key, url)),
    )
}

/// Starts fetching `url` into `key` unless the cache already knows it.
pub fn fetch(
    cache: &mut ImageCache,
    http: &reqwest::Client,
    key: CacheKey,
    url: String,
) -> Task<Message> {
    if !cache.begin(key) {
        return Task::none();
    }
    let client = http.clone();
    Task::perform(media::fetch_image(client, url), move |result| {
        Message::ImageFetched {
            key,
            result: result.map(Handle::from_bytes),
        }
    })
}
