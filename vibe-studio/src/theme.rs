use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container},
};

/// Night-sky theme with frosted glass surfaces
#[derive(Debug, Clone, Copy)]
pub struct StudioTheme;

impl StudioTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.008, 0.024, 0.090); // slate-950
    pub const ACCENT: Color = Color::from_rgb(0.851, 0.275, 0.937); // fuchsia-500
    pub const ACCENT_COOL: Color = Color::from_rgb(0.024, 0.714, 0.831); // cyan-500

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_SOFT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.9);
    pub const TEXT_SECONDARY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.8);
    pub const TEXT_DIMMED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);

    // Card text sits on light glass
    pub const CARD_TITLE: Color = Color::from_rgb(0.122, 0.161, 0.216); // gray-800
    pub const CARD_SUBTITLE: Color = Color::from_rgb(0.294, 0.333, 0.388); // gray-600
    pub const CARD_BODY: Color = Color::from_rgb(0.216, 0.255, 0.318); // gray-700

    // Glass surfaces
    pub const GLASS: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.10);
    pub const GLASS_HOVER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.15);
    pub const GLASS_BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.20);
    pub const CARD_GLASS: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.40);
    pub const CARD_GLASS_ACTIVE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.55);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;

        Theme::custom("Vibe Studio Night", palette)
    }
}

/// Scale a color's alpha, used by fade-in animations.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

pub fn badge_color(rgb: [f32; 3]) -> Color {
    Color::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn glass_border(radius: f32) -> Border {
    Border {
        color: StudioTheme::GLASS_BORDER,
        width: 1.0,
        radius: radius.into(),
    }
}

pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => StudioTheme::GLASS_HOVER,
        _ => StudioTheme::GLASS,
    };
    let text_color = match status {
        button::Status::Hovered => StudioTheme::TEXT_PRIMARY,
        _ => StudioTheme::TEXT_SOFT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: glass_border(12.0),
        ..button::Style::default()
    }
}

pub fn solid_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgb(0.945, 0.961, 0.976) // slate-100
        }
        _ => Color::WHITE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::from_rgb(0.059, 0.090, 0.165), // slate-900
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn nav_arrow(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: glass_border(8.0),
        ..ghost_button(theme, status)
    }
}

pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let color = if active {
            Color::WHITE
        } else if matches!(status, button::Status::Hovered) {
            Color::from_rgba(1.0, 1.0, 1.0, 0.75)
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.5)
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

pub fn brand_mark(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.2))),
        text_color: Some(StudioTheme::TEXT_PRIMARY),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.3),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn preview_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
        border: glass_border(24.0),
        shadow: Shadow {
            color: Color {
                a: 0.35,
                ..StudioTheme::ACCENT
            },
            offset: Vector::new(0.0, 0.0),
            blur_radius: 32.0,
        },
        ..container::Style::default()
    }
}

/// Feature card. The active card is brighter and lifted.
pub fn slide_card(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(if active {
            StudioTheme::CARD_GLASS_ACTIVE
        } else {
            StudioTheme::CARD_GLASS
        })),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, if active { 0.8 } else { 0.5 }),
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, if active { 14.0 } else { 10.0 }),
            blur_radius: 40.0,
        },
        ..container::Style::default()
    }
}

pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Darkens the backdrop so copy stays readable.
pub fn contrast_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.45,
            ..StudioTheme::BACKGROUND
        })),
        ..container::Style::default()
    }
}
