// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers the main
//! `update` function dispatches to. Component events that need
//! application context (toasts, navigation, content swaps) are resolved
//! here.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::config::{Config, HEADER_SCROLL_OFFSET, SUBMIT_SIMULATION_MS};
use crate::content::{Showcase, SlideRef};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::navbar::{self, Event as NavbarEvent, Section};
use crate::ui::notifications::{self, Notification};
use crate::ui::replace_modal::{self, Effect as ModalEffect, PendingImage};
use crate::ui::scroll_effects::{PageMetrics, ScrollEffects};
use crate::ui::state::{Debouncer, ScrollAnimator};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{Rectangle, Size, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub showcase: &'a mut Showcase,
    pub metrics: &'a PageMetrics,
    pub galleries: &'a mut [gallery::Gallery],
    pub menu_open: &'a mut bool,
    pub contact: &'a mut contact::State,
    pub modal: &'a mut replace_modal::State,
    pub notifications: &'a mut notifications::Manager,
    pub effects: &'a mut ScrollEffects,
    pub animator: &'a mut ScrollAnimator,
    pub resize_debounce: &'a mut Debouncer,
    pub scroll_offset: &'a mut f32,
    pub viewport_height: &'a mut f32,
    /// Instant the surrounding update began; every timer decision inside
    /// one update sees the same clock.
    pub now: Instant,
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::NavigateTo(section) => navigate_to(ctx, section),
    }
}

/// Starts navigation to a page section.
///
/// The target offset is the section top minus the fixed navbar height,
/// clamped to the scrollable range. With smooth scrolling enabled the
/// tween animator drives the scroll from the tick subscription;
/// otherwise the page jumps in one operation.
pub fn navigate_to(ctx: &mut UpdateContext<'_>, section: Section) -> Task<Message> {
    let target = (ctx.metrics.section_top(section) - HEADER_SCROLL_OFFSET)
        .max(0.0)
        .min(ctx.metrics.max_scroll_offset(*ctx.viewport_height));

    if ctx.config.effects.smooth_scroll.unwrap_or(true) {
        ctx.animator.begin(*ctx.scroll_offset, target, ctx.now);
        Task::none()
    } else {
        scroll_page_to(target)
    }
}

/// Task that moves the page scrollable to an absolute vertical offset.
pub fn scroll_page_to(offset_y: f32) -> Task<Message> {
    operation::scroll_to(
        Id::new(PAGE_SCROLLABLE_ID),
        AbsoluteOffset {
            x: 0.0,
            y: offset_y,
        },
    )
}

/// Handles carousel messages for one collection card.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    collection: usize,
    message: gallery::Message,
) -> Task<Message> {
    let Some(gallery) = ctx.galleries.get_mut(collection) else {
        return Task::none();
    };

    match gallery::update(message, gallery, ctx.now) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::ReplaceRequested => {
            let target = SlideRef {
                collection,
                slide: gallery.active(),
            };
            if ctx.showcase.contains(target) {
                *ctx.modal = replace_modal::State::opened(target);
            } else {
                ctx.notifications.push(
                    Notification::error("notification-replace-target-missing"),
                    ctx.now,
                );
            }
            Task::none()
        }
    }
}

/// Handles contact form messages.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(message, ctx.contact) {
        ContactEvent::None => Task::none(),
        ContactEvent::Invalid(error) => {
            ctx.notifications
                .push(Notification::error(error.i18n_key()), ctx.now);
            Task::none()
        }
        ContactEvent::SubmitStarted(_draft) => {
            // There is no backend; delivery is simulated with a delay.
            ctx.notifications
                .push(Notification::info("notification-form-sending"), ctx.now);
            Task::perform(
                async { tokio::time::sleep(Duration::from_millis(SUBMIT_SIMULATION_MS)).await },
                |()| Message::Contact(contact::Message::SubmitCompleted),
            )
        }
        ContactEvent::Submitted => {
            ctx.notifications
                .push(Notification::success("notification-form-sent"), ctx.now);
            Task::none()
        }
    }
}

/// Handles replace-modal messages and resolves their effects.
pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: replace_modal::Message,
) -> Task<Message> {
    match replace_modal::update(message, ctx.modal) {
        ModalEffect::None | ModalEffect::Closed => Task::none(),
        ModalEffect::PickFile => open_image_picker(ctx.i18n),
        ModalEffect::LoadFile(path) => load_selected_image(path),
        ModalEffect::RejectFile(name) => {
            eprintln!("Rejected non-image file: {name}");
            show_invalid_file_alert(ctx.i18n)
        }
        ModalEffect::LoadFailed(key) => {
            ctx.notifications.push(Notification::error(key), ctx.now);
            Task::none()
        }
        ModalEffect::Apply {
            target,
            image,
            file_name,
        } => {
            if ctx
                .showcase
                .replace_slide_image(target, image, file_name.clone())
            {
                ctx.notifications.push(
                    Notification::success("notification-image-replaced").with_arg("name", file_name),
                    ctx.now,
                );
            } else {
                ctx.notifications.push(
                    Notification::error("notification-replace-target-missing"),
                    ctx.now,
                );
            }
            Task::none()
        }
    }
}

/// Opens the native image picker, filtered to supported image types.
fn open_image_picker(i18n: &I18n) -> Task<Message> {
    let filter_name = i18n.tr("file-filter-images");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| Message::ReplaceModal(replace_modal::Message::FilePicked(path)),
    )
}

/// Decodes a picked or dropped image off the UI thread.
fn load_selected_image(path: PathBuf) -> Task<Message> {
    let file_name = replace_modal::display_name(&path);
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_image(&path))
                .await
                .map_err(|_| String::from("error-content-decode"))?
                .map(|image| PendingImage { image, file_name })
                .map_err(|_| String::from("error-content-decode"))
        },
        |result| Message::ReplaceModal(replace_modal::Message::FileLoaded(result)),
    )
}

/// Raises the blocking alert for a rejected non-image file.
fn show_invalid_file_alert(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("dialog-invalid-file-title");
    let body = i18n.tr("dialog-invalid-file-body");
    Task::future(async move {
        rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(body)
            .show()
            .await;
    })
    .discard()
}

/// Handles a viewport report from the page scrollable.
pub fn handle_page_scrolled(
    ctx: &mut UpdateContext<'_>,
    offset: AbsoluteOffset,
    bounds: Rectangle,
) -> Task<Message> {
    *ctx.scroll_offset = offset.y;
    *ctx.viewport_height = bounds.height;
    ctx.effects
        .on_scroll(offset.y, bounds.height, ctx.metrics, ctx.now);
    Task::none()
}

/// Handles a window resize; the reveal rescan waits for the size to settle.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.viewport_height = size.height;
    ctx.resize_debounce.trigger(ctx.now);
    Task::none()
}

/// Routes a dropped file to the replace modal, if one is open.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if ctx.modal.is_open() {
        handle_modal_message(ctx, replace_modal::Message::FileDropped(path))
    } else {
        Task::none()
    }
}

/// Highlights the modal drop zone while a file is dragged over the window.
pub fn handle_file_hovered(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.modal.is_open() {
        handle_modal_message(ctx, replace_modal::Message::DragEntered)
    } else {
        Task::none()
    }
}

/// Clears the drop-zone highlight when the drag leaves the window.
pub fn handle_files_hovered_left(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.modal.is_open() {
        handle_modal_message(ctx, replace_modal::Message::DragLeft)
    } else {
        Task::none()
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message, ctx.now);
    Task::none()
}

/// Escape closes the replace modal first, then the navigation menu.
pub fn handle_escape_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.modal.is_open() {
        handle_modal_message(ctx, replace_modal::Message::CancelPressed)
    } else if *ctx.menu_open {
        handle_navbar_message(ctx, navbar::Message::CloseMenu)
    } else {
        Task::none()
    }
}

/// Polls every deadline-based state machine with the tick instant.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    for gallery in ctx.galleries.iter_mut() {
        gallery.poll(ctx.now);
    }
    ctx.notifications.tick(ctx.now);
    ctx.effects.tick(ctx.now);

    if ctx.resize_debounce.fired(ctx.now) {
        ctx.effects.rescan(
            *ctx.scroll_offset,
            *ctx.viewport_height,
            ctx.metrics,
            ctx.now,
        );
    }

    match ctx.animator.tick(ctx.now) {
        Some(offset_y) => scroll_page_to(offset_y),
        None => Task::none(),
    }
}
