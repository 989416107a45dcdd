//! Root-level subscription composition

use std::time::Duration;

use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, key::Named};
use iced::{Subscription, window};

use crate::messages::{CarouselMessage, Message};
use crate::state::State;

/// Backdrop and hero animation cadence (~30 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Composes the page subscriptions into a single batch.
///
/// The auto-advance timer is only part of the batch while the carousel is
/// running. Removing it cancels the running timer; adding it back arms a
/// fresh one, so leaving the carousel waits a full interval before the next
/// slide.
pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        event::listen_with(carousel_key_handler),
        iced::time::every(FRAME_INTERVAL).map(|_| Message::Frame),
    ];

    if carousel_timer_armed(state) {
        subscriptions.push(
            iced::time::every(state.config.advance_interval).map(|_| Message::AutoAdvance),
        );
    }

    Subscription::batch(subscriptions)
}

pub fn carousel_timer_armed(state: &State) -> bool {
    !state.carousel.is_paused()
}

/// Arrow keys page through the carousel unless a widget already handled them.
pub fn carousel_key_handler(
    event: RuntimeEvent,
    status: EventStatus,
    _window: window::Id,
) -> Option<Message> {
    if matches!(status, EventStatus::Captured) {
        return None;
    }

    if let RuntimeEvent::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }

        match key {
            Key::Named(Named::ArrowLeft) => Some(Message::Carousel(CarouselMessage::Previous)),
            Key::Named(Named::ArrowRight) => Some(Message::Carousel(CarouselMessage::Next)),
            _ => None,
        }
    } else {
        None
    }
}
