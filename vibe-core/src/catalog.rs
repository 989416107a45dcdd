//! Fixed catalog of feature slides shown by the landing page carousel.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual badge drawn next to a slide title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// Magic wand, purple.
    Wand,
    /// Lightning bolt, indigo.
    Zap,
    /// Shield, blue.
    Shield,
    /// Sparkles, fuchsia.
    Sparkles,
}

impl Badge {
    /// Glyph rendered inside the badge.
    pub fn glyph(self) -> &'static str {
        match self {
            Badge::Wand => "✦",
            Badge::Zap => "⚡",
            Badge::Shield => "⛨",
            Badge::Sparkles => "✧",
        }
    }

    /// Badge background as linear RGB components.
    pub fn accent_rgb(self) -> [f32; 3] {
        match self {
            Badge::Wand => [0.576, 0.200, 0.918],     // purple-600
            Badge::Zap => [0.310, 0.275, 0.898],      // indigo-600
            Badge::Shield => [0.145, 0.388, 0.922],   // blue-600
            Badge::Sparkles => [0.753, 0.149, 0.827], // fuchsia-600
        }
    }
}

/// One display-only feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Card heading. Must not be blank.
    pub title: String,
    /// Short line under the title.
    pub subtitle: String,
    /// Body copy.
    pub description: String,
    /// Badge drawn beside the title.
    pub badge: Badge,
}

impl Slide {
    /// Build a slide from its display text and badge.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        badge: Badge,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            badge,
        }
    }
}

/// Rejected catalog contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No slides were supplied.
    #[error("slide catalog must contain at least one slide")]
    Empty,

    /// A slide title was empty or whitespace.
    #[error("slide at position {position} has a blank title")]
    BlankTitle {
        /// Position of the offending slide.
        position: usize,
    },
}

/// Ordered, immutable list of slides. Never empty.
///
/// Cloning is cheap; every clone shares the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideCatalog {
    slides: Arc<[Slide]>,
}

impl SlideCatalog {
    /// Validate and freeze `slides`.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CatalogError> {
        if slides.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(position) = slides
            .iter()
            .position(|slide| slide.title.trim().is_empty())
        {
            return Err(CatalogError::BlankTitle { position });
        }

        Ok(Self {
            slides: slides.into(),
        })
    }

    /// The three feature cards shipped with the landing page.
    pub fn builtin() -> Self {
        Self {
            slides: Arc::from(vec![
                Slide::new(
                    "Interactive 3D",
                    "Playful & immersive",
                    "Engage users with a reactive 3D hero that follows their cursor and sets a bold, modern tone.",
                    Badge::Wand,
                ),
                Slide::new(
                    "Fast by Default",
                    "Instant feedback",
                    "Experience buttery-smooth motions powered by a high-performance animation engine.",
                    Badge::Zap,
                ),
                Slide::new(
                    "Secure & Reliable",
                    "Production-ready",
                    "Built with robust patterns and best practices to keep your data and users safe.",
                    Badge::Shield,
                ),
            ]),
        }
    }

    /// Number of slides, at least 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True only for an empty catalog, which `new` never produces.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slides in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Borrow the backing slice.
    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }

    /// Walks every slide once, starting at `start` and wrapping past the end.
    ///
    /// Yields `(catalog_position, slide)` pairs. `start` is reduced modulo the
    /// catalog length.
    pub fn rotated_from(&self, start: usize) -> impl Iterator<Item = (usize, &Slide)> {
        let len = self.slides.len();
        (0..len).map(move |offset| {
            let position = (start + offset) % len;
            (position, &self.slides[position])
        })
    }
}

impl Default for SlideCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
