//! Procedural hero backdrop.
//!
//! Soft glowing orbs drift slowly over a dark sky. Each orb is drawn as a
//! stack of translucent circles to fake a blur.

use std::time::Duration;

use iced::widget::canvas::{self, Geometry, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::theme::StudioTheme;

const GLOW_LAYERS: usize = 6;

#[derive(Debug, Clone, Copy)]
struct Orb {
    /// Resting center as a fraction of the canvas.
    anchor: (f32, f32),
    /// Drift amplitude as a fraction of the canvas.
    sway: (f32, f32),
    /// Radius as a fraction of the shorter side.
    radius: f32,
    /// Seconds per full drift cycle.
    period: f32,
    color: Color,
}

const ORBS: [Orb; 3] = [
    Orb {
        anchor: (0.85, 0.12),
        sway: (0.04, 0.05),
        radius: 0.32,
        period: 18.0,
        color: StudioTheme::ACCENT,
    },
    Orb {
        anchor: (0.22, 0.70),
        sway: (0.06, 0.03),
        radius: 0.28,
        period: 24.0,
        color: StudioTheme::ACCENT_COOL,
    },
    Orb {
        anchor: (0.55, 0.40),
        sway: (0.05, 0.06),
        radius: 0.20,
        period: 30.0,
        color: Color::from_rgb(0.388, 0.400, 0.945), // indigo-500
    },
];

impl Orb {
    fn center(&self, seconds: f32, size: Size) -> Point {
        let phase = seconds / self.period * std::f32::consts::TAU;
        Point::new(
            (self.anchor.0 + self.sway.0 * phase.sin()) * size.width,
            (self.anchor.1 + self.sway.1 * (phase * 0.8).cos()) * size.height,
        )
    }
}

/// Canvas program for the backdrop at a given animation time.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    seconds: f32,
}

impl Backdrop {
    pub fn at(elapsed: Duration) -> Self {
        Self {
            seconds: elapsed.as_secs_f32(),
        }
    }
}

impl<Message> Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();

        frame.fill_rectangle(Point::ORIGIN, size, StudioTheme::BACKGROUND);

        let unit = size.width.min(size.height);
        for orb in &ORBS {
            let center = orb.center(self.seconds, size);
            let outer = orb.radius * unit;
            for layer in 0..GLOW_LAYERS {
                let shrink = layer as f32 / GLOW_LAYERS as f32;
                let circle = Path::circle(center, outer * (1.0 - 0.6 * shrink));
                frame.fill(
                    &circle,
                    Color {
                        a: 0.06,
                        ..orb.color
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
