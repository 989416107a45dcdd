use std::sync::Arc;
use std::time::Instant;

use vibe_core::{Carousel, LandingConfig, SlideCatalog};

use crate::motion::{Clock, StripShift};

/// Whole-page state. The carousel is owned here; views only read it.
#[derive(Debug, Clone)]
pub struct State {
    pub config: Arc<LandingConfig>,
    pub catalog: SlideCatalog,
    pub carousel: Carousel,
    /// Pointer is over the carousel region.
    pub hovering: bool,
    pub clock: Clock,
    /// Slide of the card strip since the last index change.
    pub strip: StripShift,
}

impl State {
    pub fn new(config: Arc<LandingConfig>, now: Instant) -> Self {
        let catalog = config.catalog.clone();
        let carousel = Carousel::for_catalog(&catalog);
        Self {
            config,
            catalog,
            carousel,
            hovering: false,
            clock: Clock::start(now),
            strip: StripShift::default(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Arc::new(LandingConfig::default()), Instant::now())
    }
}
