//! Feature carousel section.
//!
//! Cards are laid out starting at the active slide and wrapping around the
//! catalog, so advancing the carousel slides the next card into the lead
//! position. After each change the strip eases in from the side it moved
//! toward while the lead card fades in. The whole card strip plus dots is
//! the hover region that pauses auto-advance.

use iced::widget::{Row, button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length, Padding, alignment};
use vibe_core::{CarouselSnapshot, Slide};

use crate::messages::{CarouselMessage, Message};
use crate::motion;
use crate::state::State;
use crate::theme::{self, StudioTheme, badge_color, faded};

pub fn view_carousel_section(state: &State) -> Element<'_, Message> {
    let snapshot = state.carousel.snapshot();

    let heading = row![
        text("What you get")
            .size(24)
            .color(StudioTheme::TEXT_SOFT),
        container(
            row![
                nav_arrow("‹", CarouselMessage::Previous),
                nav_arrow("›", CarouselMessage::Next),
            ]
            .spacing(8),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right),
    ]
    .align_y(Alignment::End);

    let strip = mouse_area(
        column![card_strip(state, snapshot), dots(snapshot)].spacing(16),
    )
    .on_enter(Message::Carousel(CarouselMessage::HoverEnter))
    .on_exit(Message::Carousel(CarouselMessage::HoverLeave));

    column![heading, strip]
        .spacing(20)
        .padding([24, 40])
        .into()
}

fn card_strip(state: &State, snapshot: CarouselSnapshot) -> Element<'_, Message> {
    let elapsed = state.clock.elapsed();
    let offset = state.strip.offset(elapsed);
    let lead_opacity = state.strip.opacity(elapsed);

    let cards = state
        .catalog
        .rotated_from(snapshot.index)
        .take(state.config.visible_cards)
        .fold(Row::new().spacing(20), |strip, (position, slide)| {
            let active = snapshot.is_active(position);
            let opacity = if active { lead_opacity } else { 1.0 };
            strip.push(slide_card(slide, active, opacity))
        });

    // Total horizontal padding stays constant so only the cards move
    container(cards)
        .padding(Padding {
            top: 0.0,
            right: motion::STRIP.rise - offset,
            bottom: 0.0,
            left: motion::STRIP.rise + offset,
        })
        .into()
}

fn slide_card(slide: &Slide, active: bool, opacity: f32) -> Element<'_, Message> {
    let badge = container(text(slide.badge.glyph()).size(18))
        .padding([8, 12])
        .style(theme::badge(badge_color(slide.badge.accent_rgb())));

    let title = column![
        text(&slide.title)
            .size(18)
            .color(faded(StudioTheme::CARD_TITLE, opacity)),
        text(&slide.subtitle)
            .size(14)
            .color(faded(StudioTheme::CARD_SUBTITLE, opacity)),
    ]
    .spacing(2);

    let body = column![
        row![badge, title].spacing(16).align_y(Alignment::Center),
        text(&slide.description)
            .size(14)
            .color(faded(StudioTheme::CARD_BODY, opacity)),
    ]
    .spacing(16);

    container(body)
        .padding(20)
        .width(Length::FillPortion(1))
        .style(theme::slide_card(active))
        .into()
}

fn dots<'a>(snapshot: CarouselSnapshot) -> Element<'a, Message> {
    (0..snapshot.len)
        .fold(
            Row::new().spacing(8).align_y(Alignment::Center),
            |dots, position| {
                let active = snapshot.is_active(position);
                dots.push(
                    button(text(""))
                        .width(Length::Fixed(if active { 24.0 } else { 8.0 }))
                        .height(Length::Fixed(8.0))
                        .padding(0)
                        .style(theme::dot(active))
                        .on_press(Message::Carousel(CarouselMessage::JumpTo(position))),
                )
            },
        )
        .into()
}

fn nav_arrow<'a>(glyph: &'a str, message: CarouselMessage) -> Element<'a, Message> {
    button(text(glyph).size(18))
        .padding([6, 14])
        .style(theme::nav_arrow)
        .on_press(Message::Carousel(message))
        .into()
}
