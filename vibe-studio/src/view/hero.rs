use std::time::Duration;

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length, Padding, alignment};

use super::{ghost_button, solid_button};
use crate::messages::{CallToAction, Message};
use crate::motion::{self, Entrance};
use crate::state::State;
use crate::theme::{self, StudioTheme, faded};

pub const HEADLINE: &str = "Build modern apps with a living splash experience";
pub const TAGLINE: &str = "A dynamic, interactive hero powered by a 3D scene and smooth motion. \
Elegant, vibrant, and delightfully responsive.";

pub fn view_hero(state: &State) -> Element<'_, Message> {
    let elapsed = state.clock.elapsed();

    let headline = rise_in(
        motion::HEADLINE,
        elapsed,
        text(HEADLINE).size(56).color(faded(
            StudioTheme::TEXT_PRIMARY,
            motion::HEADLINE.opacity(elapsed),
        )),
    );

    let tagline = rise_in(
        motion::SUBTITLE,
        elapsed,
        text(TAGLINE).size(18).color(faded(
            StudioTheme::TEXT_SECONDARY,
            motion::SUBTITLE.opacity(elapsed),
        )),
    );

    let actions = rise_in(
        motion::ACTIONS,
        elapsed,
        row![
            solid_button("›  Explore Templates", CallToAction::ExploreTemplates),
            ghost_button("Learn More", CallToAction::LearnMore),
        ]
        .spacing(12),
    );

    let copy = column![headline, tagline, actions]
        .spacing(20)
        .width(Length::FillPortion(7));

    row![copy, live_preview(elapsed)]
        .spacing(32)
        .align_y(Alignment::Center)
        .padding([24, 40])
        .into()
}

fn live_preview<'a>(elapsed: Duration) -> Element<'a, Message> {
    let opacity = motion::PREVIEW.opacity(elapsed);

    let card = container(
        column![
            text("LIVE PREVIEW")
                .size(13)
                .color(faded(StudioTheme::TEXT_DIMMED, opacity)),
            text("Hover and scroll to explore")
                .size(18)
                .color(faded(StudioTheme::TEXT_SOFT, opacity)),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(280.0))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(theme::preview_card);

    container(rise_in(motion::PREVIEW, elapsed, card))
        .width(Length::FillPortion(5))
        .into()
}

/// Offset `content` downward by the entrance's remaining rise while keeping
/// its total height constant so surrounding layout does not jump.
fn rise_in<'a>(
    entrance: Entrance,
    elapsed: Duration,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let offset = entrance.offset(elapsed);
    container(content)
        .padding(Padding {
            top: offset,
            right: 0.0,
            bottom: entrance.rise - offset,
            left: 0.0,
        })
        .into()
}
