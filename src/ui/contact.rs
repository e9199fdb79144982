// SPDX-License-Identifier: MPL-2.0
//! Contact form with client-side validation.
//!
//! The form never talks to a server; submission is simulated by the app
//! with a fixed delay before the form resets. Validation failures
//! surface as error toasts, not inline markers, and leave the typed
//! values untouched.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};

/// A form field identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// Why a draft failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty. Presence of all required fields is
    /// checked before the email shape; the first empty field wins in
    /// name, email, message order.
    MissingField(Field),
    /// The email does not have a `local@domain.tld` shape.
    InvalidEmail,
}

impl ValidationError {
    /// The i18n key of the toast message for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "notification-form-missing-fields",
            ValidationError::InvalidEmail => "notification-form-invalid-email",
        }
    }
}

/// A validated, trimmed submission draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Transient form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Whether a simulated submission is in flight.
    pub submitting: bool,
}

impl State {
    /// Clears all fields, e.g. after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    SubmitPressed,
    /// The simulated submission finished.
    SubmitCompleted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Validation failed; raise an error toast.
    Invalid(ValidationError),
    /// Validation passed; start the simulated submission.
    SubmitStarted(ValidDraft),
    /// The submission finished and the form was reset.
    Submitted,
}

/// Process a form message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            match field {
                Field::Name => state.name = value,
                Field::Email => state.email = value,
                Field::Phone => state.phone = value,
                Field::Message => state.message = value,
            }
            Event::None
        }
        Message::SubmitPressed => {
            if state.submitting {
                return Event::None;
            }
            match validate(state) {
                Ok(draft) => {
                    state.submitting = true;
                    Event::SubmitStarted(draft)
                }
                Err(error) => Event::Invalid(error),
            }
        }
        Message::SubmitCompleted => {
            state.reset();
            Event::Submitted
        }
    }
}

/// Validates the current field values into a submission draft.
///
/// Whitespace-only input counts as empty. The draft carries trimmed
/// values; an empty phone becomes `None`.
pub fn validate(state: &State) -> Result<ValidDraft, ValidationError> {
    let name = state.name.trim();
    let email = state.email.trim();
    let message = state.message.trim();

    for (field, value) in [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Message, message),
    ] {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let phone = state.phone.trim();
    Ok(ValidDraft {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        message: message.to_owned(),
    })
}

/// Simple `local@domain.tld` shape check, no full RFC compliance.
///
/// Accepts exactly one `@` with a non-empty local part and a domain
/// containing a dot that is neither its first nor last character; any
/// whitespace fails.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + c.len_utf8() < domain.len())
}

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the contact form. The section heading is laid out by the
/// page view alongside the other section headings.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = Column::new()
        .spacing(spacing::MD)
        .push(build_input(
            &ctx.i18n.tr("contact-name-placeholder"),
            &ctx.state.name,
            Field::Name,
        ))
        .push(build_input(
            &ctx.i18n.tr("contact-email-placeholder"),
            &ctx.state.email,
            Field::Email,
        ))
        .push(build_input(
            &ctx.i18n.tr("contact-phone-placeholder"),
            &ctx.state.phone,
            Field::Phone,
        ))
        .push(build_input(
            &ctx.i18n.tr("contact-message-placeholder"),
            &ctx.state.message,
            Field::Message,
        ))
        .push(build_submit(ctx));

    Container::new(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .into()
}

fn build_input<'a>(placeholder: &str, value: &str, field: Field) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .padding(spacing::SM)
        .size(typography::BODY)
        .into()
}

fn build_submit<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("contact-submit")).size(typography::BODY_LG);

    // No on_press while submitting, which renders the disabled style.
    let submit = if ctx.state.submitting {
        button(label)
    } else {
        button(label).on_press(Message::SubmitPressed)
    };

    submit
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .into()
}
