// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are routed to top-level messages;
//! a periodic tick drives the deadline-based state machines. The tick
//! runs at frame rate only while something animates, at a coarse rate
//! while timers are merely pending, and not at all when idle.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick interval while a fade or scroll tween is animating.
const FRAME_TICK_MS: u64 = 16;

/// Tick interval while only coarse timers (autoplay, toasts, debounce)
/// are pending.
const COARSE_TICK_MS: u64 = 100;

/// Routes native events to application messages.
///
/// Escape is only reported when no widget consumed it, so closing the
/// modal does not race with a text input dropping focus.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the periodic tick subscription for the timer state machines.
pub fn create_tick_subscription(
    needs_frame_ticks: bool,
    needs_coarse_ticks: bool,
) -> Subscription<Message> {
    if needs_frame_ticks {
        time::every(Duration::from_millis(FRAME_TICK_MS)).map(Message::Tick)
    } else if needs_coarse_ticks {
        time::every(Duration::from_millis(COARSE_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
