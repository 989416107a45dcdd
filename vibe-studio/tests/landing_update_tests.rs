//! Landing page update loop tests
//!
//! These drive `update` with the same messages the view and subscriptions
//! produce and check the carousel state and timer gating that result.

use std::sync::Arc;
use std::time::{Duration, Instant};

use vibe_core::LandingConfig;
use vibe_studio::app::{AppConfig, bootstrap};
use vibe_studio::messages::{CallToAction, CarouselMessage, Message};
use vibe_studio::motion::{STRIP, StripShift};
use vibe_studio::state::State;
use vibe_studio::subscriptions::carousel_timer_armed;
use vibe_studio::update::update;

fn send(state: &mut State, message: impl Into<Message>) {
    let _ = update(state, message.into());
}

#[test]
fn boots_on_first_slide_with_timer_armed() {
    let state = bootstrap::base_state(&AppConfig::default());
    assert_eq!(state.carousel.index(), 0);
    assert!(!state.carousel.is_paused());
    assert!(!state.hovering);
    assert!(carousel_timer_armed(&state));
}

#[test]
fn navigation_buttons_wrap_both_ways() {
    let mut state = State::default();

    send(&mut state, CarouselMessage::Previous);
    assert_eq!(state.carousel.index(), 2);

    send(&mut state, CarouselMessage::Next);
    send(&mut state, CarouselMessage::Next);
    assert_eq!(state.carousel.index(), 1);
}

#[test]
fn dots_jump_and_ignore_bad_targets() {
    let mut state = State::default();

    send(&mut state, CarouselMessage::JumpTo(2));
    assert_eq!(state.carousel.index(), 2);

    send(&mut state, CarouselMessage::JumpTo(9));
    assert_eq!(state.carousel.index(), 2);
}

#[test]
fn hovering_pauses_and_disarms_the_timer() {
    let mut state = State::default();

    send(&mut state, Message::AutoAdvance);
    assert_eq!(state.carousel.index(), 1);

    send(&mut state, CarouselMessage::HoverEnter);
    assert!(state.hovering);
    assert!(state.carousel.is_paused());
    assert!(!carousel_timer_armed(&state));

    // A tick already in flight when the pointer entered is still ignored
    for _ in 0..5 {
        send(&mut state, Message::AutoAdvance);
    }
    assert_eq!(state.carousel.index(), 1);

    send(&mut state, CarouselMessage::HoverLeave);
    assert!(!state.hovering);
    assert!(carousel_timer_armed(&state));

    send(&mut state, Message::AutoAdvance);
    assert_eq!(state.carousel.index(), 2);

    send(&mut state, CarouselMessage::Next);
    assert_eq!(state.carousel.index(), 0);
}

#[test]
fn manual_navigation_works_while_hovered() {
    let mut state = State::default();
    send(&mut state, CarouselMessage::HoverEnter);
    send(&mut state, CarouselMessage::Next);
    send(&mut state, CarouselMessage::Next);
    assert_eq!(state.carousel.index(), 2);
    assert!(state.carousel.is_paused());
}

#[test]
fn hover_does_not_pause_when_disabled() {
    let config = LandingConfig {
        pause_on_hover: false,
        ..LandingConfig::default()
    };
    let mut state = State::new(Arc::new(config), std::time::Instant::now());

    send(&mut state, CarouselMessage::HoverEnter);
    assert!(state.hovering);
    assert!(carousel_timer_armed(&state));

    send(&mut state, Message::AutoAdvance);
    assert_eq!(state.carousel.index(), 1);
}

#[test]
fn calls_to_action_leave_carousel_alone() {
    let mut state = State::default();
    send(&mut state, Message::CallToAction(CallToAction::GetStarted));
    send(&mut state, Message::NoOp);
    assert_eq!(state.carousel.index(), 0);
}

#[test]
fn frames_move_the_animation_clock() {
    let mut state = State::default();
    let before = state.clock.elapsed();
    std::thread::sleep(std::time::Duration::from_millis(5));
    send(&mut state, Message::Frame);
    assert!(state.clock.elapsed() > before);
}

#[test]
fn strip_slides_toward_the_direction_of_travel() {
    let start = Instant::now();
    let mut state = State::new(Arc::new(LandingConfig::default()), start);
    assert_eq!(state.strip, StripShift::default());

    state.clock.advance(start + Duration::from_secs(1));
    let now = state.clock.elapsed();

    send(&mut state, CarouselMessage::Next);
    assert_eq!(state.strip.direction(), 1.0);
    assert_eq!(state.strip.offset(now), STRIP.rise);

    send(&mut state, CarouselMessage::Previous);
    assert_eq!(state.strip.direction(), -1.0);
    assert_eq!(state.strip.offset(now), -STRIP.rise);

    send(&mut state, CarouselMessage::JumpTo(2));
    assert_eq!(state.strip.direction(), 1.0);
    send(&mut state, CarouselMessage::JumpTo(0));
    assert_eq!(state.strip.direction(), -1.0);

    send(&mut state, Message::AutoAdvance);
    assert_eq!(state.strip.direction(), 1.0);

    state.clock.advance(start + Duration::from_secs(1) + STRIP.duration);
    assert_eq!(state.strip.offset(state.clock.elapsed()), 0.0);
    assert_eq!(state.strip.opacity(state.clock.elapsed()), 1.0);
}

#[test]
fn strip_stays_still_when_the_index_does_not_change() {
    let start = Instant::now();
    let mut state = State::new(Arc::new(LandingConfig::default()), start);

    send(&mut state, CarouselMessage::JumpTo(9));
    send(&mut state, CarouselMessage::JumpTo(0));
    send(&mut state, CarouselMessage::HoverEnter);
    send(&mut state, Message::AutoAdvance);
    assert_eq!(state.strip, StripShift::default());
}
