// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! calculator.
//!
//! The `App` struct owns both controllers, the image cache and localization,
//! and translates messages into side effects like image fetches. The two
//! controllers never see each other.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::calculator::Calculator;
use crate::config;
use crate::gallery::{swipe::SwipeTracker, CatalogOrigin, GalleryController, ImageSource};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageCache};
use crate::ui::animation::{self, Animation};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Animation clocks sampled at the latest tick.
#[derive(Debug, Clone, Copy)]
pub struct Animations {
    pub now: Instant,
    pub grid_reveal: Animation,
    pub viewer_fade: Animation,
}

impl Default for Animations {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            now,
            grid_reveal: Animation::finished(now),
            viewer_fade: Animation::finished(now),
        }
    }
}

impl Animations {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.grid_reveal.is_running(self.now) || self.viewer_fade.is_running(self.now)
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    gallery: GalleryController,
    calculator: Calculator,
    cache: ImageCache,
    http: reqwest::Client,
    swipe: SwipeTracker,
    /// Set when a backdrop tap arrives before its touch has ended.
    deferred_close: bool,
    window_width: f32,
    tile_width: f32,
    animations: Animations,
    /// i18n key of a startup problem shown in the navbar.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery_status", self.gallery.status())
            .field("viewer_open", &self.gallery.is_viewer_open())
            .field("buffer", &self.calculator.buffer())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; the flags are consumed once.
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

fn build_http_client() -> reqwest::Client {
    media::http_client().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default HTTP client");
        reqwest::Client::new()
    })
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            theme_mode: ThemeMode::System,
            gallery: GalleryController::new(ImageSource::default()),
            calculator: Calculator::new(),
            cache: ImageCache::default(),
            http: build_http_client(),
            swipe: SwipeTracker::new(config::DEFAULT_SWIPE_THRESHOLD),
            deferred_close: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            tile_width: config::DEFAULT_TILE_WIDTH,
            animations: Animations::default(),
            notice: None,
        }
    }
}

impl App {
    /// Initializes application state from settings and CLI flags, loads the
    /// catalog and starts fetching the first thumbnails.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            screen: flags.screen.unwrap_or(config.general.start_screen).into(),
            theme_mode: config.general.theme_mode,
            gallery: GalleryController::new(ImageSource::from_config(&config.gallery)),
            cache: ImageCache::new(config.gallery.cache_capacity()),
            swipe: SwipeTracker::new(config.gallery.swipe_threshold()),
            tile_width: config.gallery.tile_width(),
            notice: config_warning,
            ..Self::default()
        };

        let origin = config
            .gallery
            .catalog_path
            .clone()
            .map_or(CatalogOrigin::Builtin, CatalogOrigin::File);
        // A failure is kept in the gallery status and rendered there.
        let _ = app.gallery.load_catalog(&origin);

        let task = app.refresh_grid();
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            calculator: &mut self.calculator,
            cache: &mut self.cache,
            http: &self.http,
            swipe: &mut self.swipe,
            deferred_close: &mut self.deferred_close,
            animations: &mut self.animations,
        }
    }

    /// Restarts the reveal and requests missing thumbnails.
    fn refresh_grid(&mut self) -> Task<Message> {
        update::restart_reveal(&self.gallery, &mut self.animations);
        update::request_thumbnails(&mut self.update_context())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.i18n_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(self.animations.is_running());
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut self.update_context(), navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.update_context(), gallery_message)
            }
            Message::Calculator(calculator_message) => {
                update::handle_calculator_message(&mut self.update_context(), calculator_message)
            }
            Message::ImageFetched { key, result } => {
                update::handle_image_fetched(&mut self.update_context(), key, result)
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::TouchPressed(x) => update::handle_touch_pressed(&mut self.update_context(), x),
            Message::TouchLifted(x) => update::handle_touch_lifted(&mut self.update_context(), x),
            Message::TouchLost => update::handle_touch_lost(&mut self.update_context()),
            Message::Tick(now) => {
                self.animations.now = now;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let now = self.animations.now;
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            notice: self.notice.as_deref(),
            gallery: &self.gallery,
            calculator: &self.calculator,
            cache: &self.cache,
            window_width: self.window_width,
            tile_width: self.tile_width,
            reveal_elapsed: self.animations.grid_reveal.elapsed(now),
            fade_opacity: animation::fade_opacity(self.animations.viewer_fade.elapsed(now)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator;
    use crate::config::{Config, StartScreen};
    use crate::error::Error;
    use crate::gallery::{self, CategoryFilter, Direction, ImageId};
    use crate::media::{CacheKey, Entry};
    use crate::test_utils::with_temp_config_dir;
    use crate::ui::navbar;
    use iced::widget::image::Handle;
    use iced::Size;
    use std::fs;
    use std::time::Duration;

    fn english_app() -> App {
        App {
            i18n: I18n::new(Some("en-US".into()), &Config::default()),
            ..App::default()
        }
    }

    fn loaded_app() -> App {
        let mut app = english_app();
        app.gallery
            .load_catalog(&CatalogOrigin::Builtin)
            .expect("builtin catalog");
        app
    }

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![255_u8; 4])
    }

    #[test]
    fn new_starts_on_gallery_with_builtin_catalog() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Gallery);
            assert_eq!(app.gallery.filtered_len(), 20);
            assert!(app.notice.is_none());
            // Every shown thumbnail was requested once.
            assert_eq!(app.cache.len(), 20);
        });
    }

    #[test]
    fn new_applies_settings_and_flags() {
        with_temp_config_dir(|dir| {
            fs::write(
                dir.join("settings.toml"),
                "[general]\nlanguage = \"fr\"\nstart_screen = \"calculator\"\n\n[gallery]\nswipe_threshold = 80.0\n",
            )
            .expect("write settings");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Calculator);
            assert_eq!(app.title(), "Calculatrice - Iced Gallery");

            let (app, _task) = App::new(Flags {
                lang: Some("en-US".into()),
                screen: Some(StartScreen::Gallery),
            });
            assert_eq!(app.screen, Screen::Gallery);
            assert_eq!(app.title(), "Gallery - Iced Gallery");
        });
    }

    #[test]
    fn invalid_settings_show_notice() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "[general\nbroken").expect("write settings");
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.notice.as_deref(), Some("notification-config-load-error"));
        });
    }

    #[test]
    fn missing_catalog_file_fails_gallery_only() {
        with_temp_config_dir(|dir| {
            let catalog = dir.join("missing.toml");
            fs::write(
                dir.join("settings.toml"),
                format!("[gallery]\ncatalog_path = {:?}\n", catalog.display().to_string()),
            )
            .expect("write settings");
            let (mut app, _task) = App::new(Flags::default());
            assert!(matches!(app.gallery.status(), gallery::Status::Failed(_)));

            let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Calculator)));
            let _ = app.update(Message::Calculator(calculator::Message::Append("1+1".into())));
            let _ = app.update(Message::Calculator(calculator::Message::Evaluate));
            assert_eq!(app.calculator.buffer(), "2");
        });
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = english_app();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Calculator)));
        assert_eq!(app.screen, Screen::Calculator);
        assert_eq!(app.title(), "Calculator - Iced Gallery");
    }

    #[test]
    fn filter_requests_thumbnails_and_restarts_reveal() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::FilterSelected(
            CategoryFilter::from_key("animals"),
        )));
        assert_eq!(app.gallery.filtered_len(), 5);
        assert_eq!(app.cache.len(), 5);
        assert!(matches!(
            app.cache.entry(&CacheKey::thumbnail(ImageId(1022))),
            Some(Entry::Pending)
        ));
        assert!(app.animations.is_running());
    }

    #[test]
    fn opening_viewer_requests_large_rendition() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1019))));
        assert!(app.gallery.is_viewer_open());
        assert!(app.cache.entry(&CacheKey::viewer(ImageId(1019))).is_some());
    }

    #[test]
    fn fetched_image_is_cached() {
        let mut app = loaded_app();
        let key = CacheKey::thumbnail(ImageId(1000));
        app.cache.begin(key);
        let _ = app.update(Message::ImageFetched {
            key,
            result: Ok(pixel()),
        });
        assert!(app.cache.handle(&key).is_some());

        let failed = CacheKey::thumbnail(ImageId(1001));
        app.cache.begin(failed);
        let _ = app.update(Message::ImageFetched {
            key: failed,
            result: Err(Error::Network("503".into())),
        });
        assert!(matches!(app.cache.entry(&failed), Some(Entry::Failed)));
    }

    #[test]
    fn swipe_navigates_open_viewer() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1015))));

        let _ = app.update(Message::TouchPressed(400.0));
        let _ = app.update(Message::TouchLifted(300.0));
        assert_eq!(app.gallery.current().map(|r| r.id), Some(ImageId(1018)));

        let _ = app.update(Message::TouchPressed(100.0));
        let _ = app.update(Message::TouchLifted(300.0));
        assert_eq!(app.gallery.current().map(|r| r.id), Some(ImageId(1015)));

        // Under the threshold
        let _ = app.update(Message::TouchPressed(100.0));
        let _ = app.update(Message::TouchLifted(130.0));
        assert_eq!(app.gallery.current().map(|r| r.id), Some(ImageId(1015)));
    }

    #[test]
    fn swipe_is_ignored_while_viewer_closed() {
        let mut app = loaded_app();
        let _ = app.update(Message::TouchPressed(400.0));
        let _ = app.update(Message::TouchLifted(100.0));
        assert!(!app.gallery.is_viewer_open());
        assert_eq!(app.gallery.cursor(), 0);
    }

    #[test]
    fn lost_touch_cancels_swipe() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1015))));
        let _ = app.update(Message::TouchPressed(400.0));
        let _ = app.update(Message::TouchLost);
        let _ = app.update(Message::TouchLifted(100.0));
        assert_eq!(app.gallery.current().map(|r| r.id), Some(ImageId(1015)));
    }

    #[test]
    fn backdrop_click_closes_viewer() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1015))));
        let _ = app.update(Message::Gallery(gallery::Message::BackdropClicked));
        assert!(!app.gallery.is_viewer_open());
    }

    #[test]
    fn swipe_starting_on_backdrop_navigates() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1015))));

        // The backdrop reports the lift before the touch itself ends.
        let _ = app.update(Message::TouchPressed(900.0));
        let _ = app.update(Message::Gallery(gallery::Message::BackdropClicked));
        assert!(app.gallery.is_viewer_open());
        let _ = app.update(Message::TouchLifted(600.0));
        assert!(app.gallery.is_viewer_open());
        assert_eq!(app.gallery.current().map(|r| r.id), Some(ImageId(1018)));
        assert!(!app.deferred_close);
    }

    #[test]
    fn backdrop_tap_closes_after_lift() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1015))));

        let _ = app.update(Message::TouchPressed(40.0));
        let _ = app.update(Message::Gallery(gallery::Message::BackdropClicked));
        let _ = app.update(Message::TouchLifted(42.0));
        assert!(!app.gallery.is_viewer_open());

        // A lost touch drops the pending close.
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1015))));
        let _ = app.update(Message::TouchPressed(40.0));
        let _ = app.update(Message::Gallery(gallery::Message::BackdropClicked));
        let _ = app.update(Message::TouchLost);
        assert!(app.gallery.is_viewer_open());
        assert!(!app.deferred_close);
    }

    #[test]
    fn keyboard_navigation_through_messages() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(ImageId(1000))));
        let _ = app.update(Message::Gallery(gallery::Message::Navigate(Direction::Previous)));
        assert_eq!(app.gallery.current().map(|r| r.id), Some(ImageId(1021)));
        let _ = app.update(Message::Gallery(gallery::Message::CloseViewer));
        assert!(!app.gallery.scroll_locked());
    }

    #[test]
    fn resize_updates_width() {
        let mut app = english_app();
        let _ = app.update(Message::WindowResized(Size::new(640.0, 480.0)));
        assert_eq!(app.window_width, 640.0);
    }

    #[test]
    fn tick_advances_clock_until_animation_ends() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::FilterSelected(
            CategoryFilter::All,
        )));
        assert!(app.animations.is_running());
        let later = Instant::now() + Duration::from_secs(10);
        let _ = app.update(Message::Tick(later));
        assert!(!app.animations.is_running());
    }
}
