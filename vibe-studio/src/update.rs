use std::time::Instant;

use iced::Task;

use crate::messages::{CarouselMessage, Message};
use crate::motion::StripShift;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Carousel(message) => update_carousel(state, message),
        Message::AutoAdvance => {
            let before = state.carousel.index();
            state.carousel.tick();
            slide_strip(state, before, 1.0);
        }
        Message::Frame => state.clock.advance(Instant::now()),
        Message::CallToAction(action) => {
            log::info!("Call to action pressed: {:?}", action);
        }
        Message::NoOp => {}
    }

    Task::none()
}

fn update_carousel(state: &mut State, message: CarouselMessage) {
    match message {
        CarouselMessage::Next => {
            let before = state.carousel.index();
            state.carousel.next();
            slide_strip(state, before, 1.0);
        }
        CarouselMessage::Previous => {
            let before = state.carousel.index();
            state.carousel.previous();
            slide_strip(state, before, -1.0);
        }
        CarouselMessage::JumpTo(target) => {
            let before = state.carousel.index();
            // Rejected jumps are already logged and leave the index alone
            let _ = state.carousel.jump_to(target);
            let direction = if target < before { -1.0 } else { 1.0 };
            slide_strip(state, before, direction);
        }
        CarouselMessage::HoverEnter => {
            state.hovering = true;
            if state.config.pause_on_hover {
                state.carousel.set_paused(true);
            }
        }
        CarouselMessage::HoverLeave => {
            state.hovering = false;
            state.carousel.set_paused(false);
        }
    }
}

/// Start a strip slide if the active card changed.
fn slide_strip(state: &mut State, before: usize, direction: f32) {
    if state.carousel.index() != before {
        state.strip = StripShift::begin(state.clock.elapsed(), direction);
    }
}
