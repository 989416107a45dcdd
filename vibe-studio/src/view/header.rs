use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length, alignment};
use vibe_core::Badge;

use super::{ghost_button, solid_button};
use crate::messages::{CallToAction, Message};
use crate::theme::{self, StudioTheme};

pub fn view_header<'a>() -> Element<'a, Message> {
    let brand = row![
        container(text(Badge::Sparkles.glyph()).size(18))
            .padding([6, 10])
            .style(theme::brand_mark),
        text("Vibe Studio").size(18).color(StudioTheme::TEXT_SOFT),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let nav = row![
        ghost_button("Features", CallToAction::Features),
        ghost_button("Docs", CallToAction::Docs),
        solid_button("▶  Get Started", CallToAction::GetStarted),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    row![
        brand,
        container(nav)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
    ]
    .align_y(Alignment::Center)
    .padding([24, 40])
    .into()
}
