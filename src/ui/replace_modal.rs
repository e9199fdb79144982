// SPDX-License-Identifier: MPL-2.0
//! Image replacement modal.
//!
//! Opened from a collection card, the modal lets the user pick a file
//! through a dialog or drop one onto the window, previews the decoded
//! image, and on confirm swaps it into the targeted slide. The swap is
//! purely in-memory; nothing is written back to the content directory.
//!
//! Only files whose extension maps to an image type are accepted; other
//! files raise a blocking alert and clear the pending selection.

use crate::content::SlideRef;
use crate::i18n::fluent::I18n;
use crate::media::{self, image::ImageData};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// A decoded file waiting for confirmation.
#[derive(Debug, Clone)]
pub struct PendingImage {
    pub image: ImageData,
    pub file_name: String,
}

/// Modal state. At most one replace flow runs at a time.
#[derive(Debug, Clone, Default)]
pub enum State {
    #[default]
    Closed,
    Open {
        /// The slide whose image gets replaced on confirm.
        target: SlideRef,
        pending: Option<PendingImage>,
        /// Whether a dragged file currently hovers the window.
        drag_over: bool,
    },
}

impl State {
    /// Opens the modal for a slide. The caller has already checked that
    /// the slide exists.
    #[must_use]
    pub fn opened(target: SlideRef) -> Self {
        State::Open {
            target,
            pending: None,
            drag_over: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, State::Open { .. })
    }
}

/// Messages emitted by the modal.
#[derive(Debug, Clone)]
pub enum Message {
    BrowsePressed,
    /// The file dialog closed; `None` means it was cancelled.
    FilePicked(Option<PathBuf>),
    /// A file was dropped on the window while the modal is open.
    FileDropped(PathBuf),
    DragEntered,
    DragLeft,
    /// The picked file finished decoding. The error is an i18n key.
    FileLoaded(Result<PendingImage, String>),
    ConfirmPressed,
    CancelPressed,
}

/// Effects the application must carry out.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Open the async file dialog.
    PickFile,
    /// Decode the accepted file off the update path.
    LoadFile(PathBuf),
    /// Show a blocking alert for a non-image file.
    RejectFile(String),
    /// Surface a decode failure as an error toast (i18n key).
    LoadFailed(String),
    /// Swap the image into the target slide and confirm with a toast.
    Apply {
        target: SlideRef,
        image: ImageData,
        file_name: String,
    },
    /// The modal was dismissed without applying.
    Closed,
}

/// Process a modal message and return the effect to carry out.
///
/// Messages arriving after the modal closed (stale dialog results,
/// drops) are ignored.
pub fn update(message: Message, state: &mut State) -> Effect {
    let State::Open {
        target,
        pending,
        drag_over,
    } = state
    else {
        return Effect::None;
    };

    match message {
        Message::BrowsePressed => Effect::PickFile,
        Message::FilePicked(None) => Effect::None,
        Message::FilePicked(Some(path)) | Message::FileDropped(path) => {
            *drag_over = false;
            if media::is_image_file(&path) {
                Effect::LoadFile(path)
            } else {
                *pending = None;
                Effect::RejectFile(display_name(&path))
            }
        }
        Message::DragEntered => {
            *drag_over = true;
            Effect::None
        }
        Message::DragLeft => {
            *drag_over = false;
            Effect::None
        }
        Message::FileLoaded(Ok(image)) => {
            *pending = Some(image);
            Effect::None
        }
        Message::FileLoaded(Err(key)) => {
            *pending = None;
            Effect::LoadFailed(key)
        }
        Message::ConfirmPressed => match pending.take() {
            Some(PendingImage { image, file_name }) => {
                let target = *target;
                *state = State::Closed;
                Effect::Apply {
                    target,
                    image,
                    file_name,
                }
            }
            None => Effect::None,
        },
        Message::CancelPressed => {
            *state = State::Closed;
            Effect::Closed
        }
    }
}

/// Short human-readable name for a picked or dropped file.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the modal panel, or `None` while closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let State::Open {
        pending, drag_over, ..
    } = ctx.state
    else {
        return None;
    };

    let title = Text::new(ctx.i18n.tr("modal-replace-title")).size(typography::TITLE_MD);
    let hint = Text::new(ctx.i18n.tr("modal-replace-hint")).size(typography::BODY_SM);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(hint)
        .push(build_drop_zone(ctx.i18n, *drag_over));

    if let Some(pending) = pending {
        content = content.push(build_preview(ctx.i18n, pending));
    }

    let panel = Container::new(content.push(build_buttons(ctx.i18n, pending.is_some())))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel);

    Some(panel.into())
}

fn build_drop_zone<'a>(i18n: &I18n, drag_over: bool) -> Element<'a, Message> {
    let prompt = Text::new(i18n.tr("modal-drop-here")).size(typography::BODY);

    let browse = button(Text::new(i18n.tr("modal-browse")).size(typography::BODY))
        .on_press(Message::BrowsePressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);

    let inner = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::upload(), sizing::ICON_XL))
        .push(prompt)
        .push(browse);

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_zone(drag_over))
        .into()
}

fn build_preview<'a>(i18n: &I18n, pending: &PendingImage) -> Element<'a, Message> {
    let thumbnail = Image::new(pending.image.handle.clone())
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .content_fit(ContentFit::Cover);

    let label = Text::new(i18n.tr_with_args(
        "modal-selected-file",
        &[("name", pending.file_name.as_str())],
    ))
    .size(typography::BODY_SM);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(thumbnail)
        .push(label)
        .into()
}

fn build_buttons<'a>(i18n: &I18n, has_pending: bool) -> Element<'a, Message> {
    let cancel = button(Text::new(i18n.tr("modal-cancel")).size(typography::BODY))
        .on_press(Message::CancelPressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);

    let confirm_label = Text::new(i18n.tr("modal-confirm")).size(typography::BODY);
    let confirm = if has_pending {
        button(confirm_label).on_press(Message::ConfirmPressed)
    } else {
        button(confirm_label)
    };

    Row::new()
        .spacing(spacing::SM)
        .push(
            Container::new(cancel)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(
            confirm
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}
