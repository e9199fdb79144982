// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the showcase page.
//!
//! The `App` struct wires together the domains (content, localization,
//! scroll effects) and translates messages into side effects like scroll
//! commands or file dialogs. This file intentionally keeps policy
//! decisions (window sizing, content fallback, which timers run) close
//! to the main update loop so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, RESIZE_DEBOUNCE_MS, SMOOTH_SCROLL_MS};
use crate::content::{self, Showcase};
use crate::i18n::fluent::I18n;
use crate::ui::contact;
use crate::ui::gallery::Gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::replace_modal;
use crate::ui::scroll_effects::{PageMetrics, ScrollEffects};
use crate::ui::state::{Debouncer, ScrollAnimator};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Widget id of the page scrollable. Scroll commands and viewport
/// reports both refer to it.
pub const PAGE_SCROLLABLE_ID: &str = "showcase-page";

/// Root Iced application state that bridges the page components,
/// localization, and configuration.
pub struct App {
    pub i18n: I18n,
    config: Config,
    showcase: Showcase,
    /// Section and reveal-target geometry derived from the content.
    metrics: PageMetrics,
    /// One carousel state per collection, in page order.
    galleries: Vec<Gallery>,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    contact: contact::State,
    modal: replace_modal::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Entrance reveals and the navbar style swap.
    effects: ScrollEffects,
    /// Tween driving smooth anchor scrolling.
    animator: ScrollAnimator,
    /// Collapses resize bursts into a single reveal rescan.
    resize_debounce: Debouncer,
    theme_mode: ThemeMode,
    /// Last reported vertical scroll offset of the page.
    scroll_offset: f32,
    /// Last reported viewport height.
    viewport_height: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("collections", &self.showcase.collection_count())
            .field("menu_open", &self.menu_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 960;

/// Builds the window settings
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            showcase: Showcase::default(),
            metrics: PageMetrics::new(0, view::TEAM_MEMBER_COUNT),
            galleries: Vec::new(),
            menu_open: false,
            contact: contact::State::default(),
            modal: replace_modal::State::default(),
            notifications: notifications::Manager::new(),
            effects: ScrollEffects::new(0, view::TEAM_MEMBER_COUNT, true),
            animator: ScrollAnimator::new(Duration::from_millis(SMOOTH_SCROLL_MS)),
            resize_debounce: Debouncer::new(Duration::from_millis(RESIZE_DEBOUNCE_MS)),
            theme_mode: ThemeMode::System,
            scroll_offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
        }
    }
}

impl App {
    /// Initializes application state: configuration, localization, and
    /// the showcase content with one carousel per collection.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load();
        let i18n = I18n::new(
            flags.lang.clone(),
            flags.i18n_dir.clone().map(PathBuf::from),
            &config,
        );

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        // An explicit content directory wins over the embedded sample,
        // with the command line taking precedence over the config file.
        let content_dir = flags
            .content_dir
            .clone()
            .or_else(|| config.showcase.content_dir.clone());
        let showcase = match content_dir {
            Some(dir) => match content::scan::scan_content_dir(Path::new(&dir)) {
                Ok(showcase) => showcase,
                Err(error) => {
                    eprintln!("Content directory problem: {error}");
                    app.notifications.push(
                        Notification::warning("notification-content-load-error"),
                        now,
                    );
                    app.embedded_showcase(now)
                }
            },
            None => app.embedded_showcase(now),
        };

        let interval = Duration::from_millis(config.showcase.effective_autoplay_interval_ms());
        app.galleries = showcase
            .collections
            .iter()
            .map(|collection| Gallery::new(collection.slides.len(), interval, now))
            .collect();
        app.metrics = PageMetrics::new(showcase.collection_count(), view::TEAM_MEMBER_COUNT);
        app.effects = ScrollEffects::new(
            showcase.collection_count(),
            view::TEAM_MEMBER_COUNT,
            config.effects.reveal_animations.unwrap_or(true),
        );
        // Targets inside the initial viewport reveal without waiting for
        // a first scroll report.
        app.effects.rescan(0.0, app.viewport_height, &app.metrics, now);
        app.showcase = showcase;
        app.config = config;

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key), now);
        }

        (app, Task::none())
    }

    /// Falls back to the embedded sample collections, surfacing the
    /// first asset problem as a warning toast.
    fn embedded_showcase(&mut self, now: Instant) -> Showcase {
        let (showcase, problems) = Showcase::embedded(&self.i18n);
        if let Some(problem) = problems.first() {
            self.notifications
                .push(Notification::warning(problem.i18n_key()), now);
        }
        showcase
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.animator.is_active() || self.effects.is_animating(),
            self.galleries.iter().any(Gallery::autoplay_running)
                || self.notifications.has_active()
                || self.resize_debounce.is_pending(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            showcase: &mut self.showcase,
            metrics: &self.metrics,
            galleries: &mut self.galleries,
            menu_open: &mut self.menu_open,
            contact: &mut self.contact,
            modal: &mut self.modal,
            notifications: &mut self.notifications,
            effects: &mut self.effects,
            animator: &mut self.animator,
            resize_debounce: &mut self.resize_debounce,
            scroll_offset: &mut self.scroll_offset,
            viewport_height: &mut self.viewport_height,
            now: Instant::now(),
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery {
                collection,
                message,
            } => update::handle_gallery_message(&mut ctx, collection, message),
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::ReplaceModal(modal_message) => {
                update::handle_modal_message(&mut ctx, modal_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, notification_message)
            }
            Message::NavigateTo(section) => update::navigate_to(&mut ctx, section),
            Message::PageScrolled { offset, bounds } => {
                update::handle_page_scrolled(&mut ctx, offset, bounds)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::FileHovered => update::handle_file_hovered(&mut ctx),
            Message::FilesHoveredLeft => update::handle_files_hovered_left(&mut ctx),
            Message::EscapePressed => update::handle_escape_pressed(&mut ctx),
            Message::Tick(instant) => {
                // Deadlines are judged against the subscription's instant
                // so message delivery jitter does not skew timers.
                ctx.now = instant;
                update::handle_tick(&mut ctx)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            showcase: &self.showcase,
            galleries: &self.galleries,
            menu_open: self.menu_open,
            contact: &self.contact,
            modal: &self.modal,
            notifications: &self.notifications,
            effects: &self.effects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_AUTOPLAY_INTERVAL_MS;
    use crate::content::{Collection, Slide, SlideRef};
    use crate::media::ImageData;
    use crate::ui::gallery;
    use crate::ui::navbar::{self, Section};
    use iced::widget::image::Handle;
    use iced::Size;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn sample_image_data() -> ImageData {
        let pixels = vec![255_u8; 4];
        ImageData {
            handle: Handle::from_rgba(1, 1, pixels),
            width: 1,
            height: 1,
        }
    }

    fn sample_showcase(collections: usize, slides: usize) -> Showcase {
        let collections = (0..collections)
            .map(|index| Collection {
                title: format!("Collection {index}"),
                description: String::from("Sample description"),
                slides: (0..slides)
                    .map(|slide| Slide {
                        image: sample_image_data(),
                        source_name: format!("slide-{slide}.png"),
                    })
                    .collect(),
            })
            .collect();

        Showcase { collections }
    }

    /// Builds an app around sample content, returning the instant the
    /// carousels were started at so tests can craft tick times.
    fn sample_app() -> (App, Instant) {
        let now = Instant::now();
        let showcase = sample_showcase(3, 3);
        let interval = Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS);
        let galleries = showcase
            .collections
            .iter()
            .map(|collection| Gallery::new(collection.slides.len(), interval, now))
            .collect();

        let app = App {
            metrics: PageMetrics::new(showcase.collection_count(), view::TEAM_MEMBER_COUNT),
            effects: ScrollEffects::new(
                showcase.collection_count(),
                view::TEAM_MEMBER_COUNT,
                true,
            ),
            galleries,
            showcase,
            ..App::default()
        };

        (app, now)
    }

    #[test]
    fn default_app_is_empty() {
        let app = App::default();

        assert_eq!(app.showcase.collection_count(), 0);
        assert!(app.galleries.is_empty());
        assert!(format!("{app:?}").contains("App"));
    }

    #[test]
    fn new_app_builds_one_gallery_per_collection() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());

            assert!(app.showcase.collection_count() > 0);
            assert_eq!(app.galleries.len(), app.showcase.collection_count());
        });
    }

    #[test]
    fn title_is_localized() {
        let (app, _now) = sample_app();

        let title = app.title();
        assert!(!title.is_empty());
        assert_ne!(title, "window-title");
    }

    #[test]
    fn view_renders_with_sample_content() {
        let (app, _now) = sample_app();
        let _element = app.view();
    }

    #[test]
    fn view_renders_with_the_modal_open() {
        let (mut app, _now) = sample_app();
        app.modal = replace_modal::State::opened(SlideRef {
            collection: 0,
            slide: 0,
        });

        let _element = app.view();
    }

    #[test]
    fn navigating_closes_the_menu_and_starts_the_tween() {
        let (mut app, _now) = sample_app();
        app.menu_open = true;

        let _task = app.update(Message::Navbar(navbar::Message::LinkClicked(Section::About)));

        assert!(!app.menu_open);
        assert!(app.animator.is_active());
    }

    #[test]
    fn escape_closes_the_modal_before_the_menu() {
        let (mut app, _now) = sample_app();
        app.menu_open = true;
        app.modal = replace_modal::State::opened(SlideRef {
            collection: 0,
            slide: 0,
        });

        let _task = app.update(Message::EscapePressed);
        assert!(!app.modal.is_open());
        assert!(app.menu_open);

        let _task = app.update(Message::EscapePressed);
        assert!(!app.menu_open);
    }

    #[test]
    fn ticks_advance_running_carousels() {
        let (mut app, now) = sample_app();

        let _task = app.update(Message::Tick(
            now + Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS + 50),
        ));

        assert_eq!(app.galleries[0].active(), 1);
        assert_eq!(app.galleries[2].active(), 1);
    }

    #[test]
    fn replace_request_opens_the_modal_for_the_active_slide() {
        let (mut app, _now) = sample_app();

        let _task = app.update(Message::Gallery {
            collection: 1,
            message: gallery::Message::ReplacePressed,
        });

        assert!(app.modal.is_open());
    }

    #[test]
    fn dropped_files_are_ignored_without_the_modal() {
        let (mut app, _now) = sample_app();

        let _task = app.update(Message::FileDropped(PathBuf::from("/tmp/brooch.png")));

        assert!(!app.modal.is_open());
        assert!(!app.notifications.has_active());
    }

    #[test]
    fn empty_submit_raises_a_validation_toast() {
        let (mut app, now) = sample_app();

        let _task = app.update(Message::Contact(contact::Message::SubmitPressed));

        assert!(app.notifications.has_active());
        // Still inside the show delay immediately after the push.
        assert!(app.notifications.visible().is_none());

        let _task = app.update(Message::Tick(now + Duration::from_millis(150)));
        assert!(app.notifications.visible().is_some());
    }

    #[test]
    fn resize_rescans_reveals_after_the_quiet_period() {
        let (mut app, now) = sample_app();
        assert!(!app.effects.is_animating());

        let _task = app.update(Message::WindowResized(Size::new(1280.0, 900.0)));
        assert!(app.resize_debounce.is_pending());

        let _task = app.update(Message::Tick(
            now + Duration::from_millis(RESIZE_DEBOUNCE_MS + 100),
        ));

        assert!(!app.resize_debounce.is_pending());
        assert!(app.effects.is_animating());
    }
}
