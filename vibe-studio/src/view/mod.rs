//! Landing page view tree.

pub mod carousel;
pub mod header;
pub mod hero;

use iced::widget::{button, canvas, column, container, scrollable, stack, text};
use iced::{Element, Length, alignment};

use crate::messages::{CallToAction, Message};
use crate::scene::Backdrop;
use crate::state::State;
use crate::theme::{self, StudioTheme};

/// Widest the page content grows before centering.
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let backdrop = canvas(Backdrop::at(state.clock.elapsed()))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::contrast_overlay);

    let content = column![
        header::view_header(),
        hero::view_hero(state),
        carousel::view_carousel_section(state),
        view_footer(),
    ]
    .max_width(CONTENT_MAX_WIDTH)
    .spacing(16);

    let page = scrollable(
        container(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    stack![backdrop, overlay, page].into()
}

fn view_footer<'a>() -> Element<'a, Message> {
    container(
        text("Built with love, motion, and a touch of 3D.")
            .size(14)
            .color(StudioTheme::TEXT_DIMMED),
    )
    .width(Length::Fill)
    .padding([40, 40])
    .align_x(alignment::Horizontal::Center)
    .into()
}

/// Translucent outline button used across the page.
pub(crate) fn ghost_button<'a>(label: &'a str, action: CallToAction) -> Element<'a, Message> {
    button(text(label).size(15))
        .padding([8, 16])
        .style(theme::ghost_button)
        .on_press(Message::CallToAction(action))
        .into()
}

/// White call-to-action button.
pub(crate) fn solid_button<'a>(label: &'a str, action: CallToAction) -> Element<'a, Message> {
    button(text(label).size(15))
        .padding([8, 16])
        .style(theme::solid_button)
        .on_press(Message::CallToAction(action))
        .into()
}
