//! Headless runner against a paused tokio clock.

use std::time::Duration;

use vibe_core::{Badge, LandingConfig, Slide, SlideCatalog};
use vibe_studio::headless;

#[tokio::test(start_paused = true)]
async fn logs_slides_in_rotation_order() {
    let config = LandingConfig {
        advance_interval: Duration::from_millis(100),
        ..LandingConfig::default()
    };

    let shown = headless::run(config, 4).await.unwrap();

    assert_eq!(
        shown,
        vec![
            "Fast by Default",
            "Secure & Reliable",
            "Interactive 3D",
            "Fast by Default",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn zero_ticks_returns_immediately() {
    let shown = headless::run(LandingConfig::default(), 0).await.unwrap();
    assert!(shown.is_empty());
}

#[tokio::test(start_paused = true)]
async fn single_slide_catalog_still_reports_each_tick() {
    let config = LandingConfig {
        advance_interval: Duration::from_millis(100),
        catalog: SlideCatalog::new(vec![Slide::new(
            "Solo",
            "Only card",
            "The only card in the catalog.",
            Badge::Sparkles,
        )])
        .unwrap(),
        ..LandingConfig::default()
    };

    let shown = tokio::time::timeout(Duration::from_secs(600), headless::run(config, 2))
        .await
        .expect("headless run stalled on a single-slide catalog")
        .unwrap();

    assert_eq!(shown, vec!["Solo", "Solo"]);
}
