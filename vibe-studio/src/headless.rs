//! Window-less carousel runner.
//!
//! Arms the tokio auto-advance timer against a shared carousel and logs the
//! active slide every time a new snapshot is published.

use anyhow::Context;
use vibe_core::{AutoAdvance, Carousel, CarouselHandle, LandingConfig};

/// Run until `ticks` slide changes have been observed, then tear the timer
/// down. Returns the titles in the order they became active.
pub async fn run(config: LandingConfig, ticks: usize) -> anyhow::Result<Vec<String>> {
    let handle = CarouselHandle::new(Carousel::for_catalog(&config.catalog));
    let mut updates = handle.subscribe();
    let ticker = AutoAdvance::spawn(handle.clone(), config.advance_interval);

    log::info!(
        "Headless carousel: {} slides, advancing every {:?}",
        config.catalog.len(),
        ticker.period()
    );

    let mut shown = Vec::with_capacity(ticks);
    while shown.len() < ticks {
        updates
            .changed()
            .await
            .context("carousel update channel closed")?;
        let snapshot = *updates.borrow_and_update();
        let Some(slide) = config.catalog.get(snapshot.index) else {
            continue;
        };
        log::info!(
            "Slide {}/{}: {} ({})",
            snapshot.index + 1,
            snapshot.len,
            slide.title,
            slide.subtitle
        );
        shown.push(slide.title.clone());
    }

    ticker.cancel();
    Ok(shown)
}
