//! Shared, publishing owner of one carousel.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::state::{Carousel, CarouselSnapshot};
use crate::error::CarouselError;

/// Shared owner of a single [`Carousel`].
///
/// Every operation runs under one lock, so mutations coming from the timer
/// and from user input are serialized in the order they arrive. Each change
/// is published on a watch channel; renderers call [`subscribe`] and redraw
/// whenever it fires. An applied tick is always published, even when it
/// leaves the index where it was (single-slide carousels).
///
/// [`subscribe`]: CarouselHandle::subscribe
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    carousel: Arc<Mutex<Carousel>>,
    updates: Arc<watch::Sender<CarouselSnapshot>>,
}

impl CarouselHandle {
    /// Take ownership of `carousel`.
    pub fn new(carousel: Carousel) -> Self {
        let (updates, _) = watch::channel(carousel.snapshot());
        Self {
            carousel: Arc::new(Mutex::new(carousel)),
            updates: Arc::new(updates),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        self.carousel.lock().snapshot()
    }

    /// Receiver that fires on every published change.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.updates.subscribe()
    }

    /// See [`Carousel::next`].
    pub fn next(&self) {
        self.apply(Carousel::next);
    }

    /// See [`Carousel::previous`].
    pub fn previous(&self) {
        self.apply(Carousel::previous);
    }

    /// See [`Carousel::jump_to`].
    pub fn jump_to(&self, target: usize) -> Result<(), CarouselError> {
        self.apply(|carousel| carousel.jump_to(target))
    }

    /// See [`Carousel::set_paused`].
    pub fn set_paused(&self, paused: bool) {
        self.apply(|carousel| carousel.set_paused(paused));
    }

    /// See [`Carousel::tick`].
    pub fn tick(&self) -> bool {
        self.apply_tick(None)
    }

    /// See [`Carousel::resize`].
    pub fn resize(&self, len: usize) -> Result<(), CarouselError> {
        self.apply(|carousel| carousel.resize(len))
    }

    /// Tick unless `cancel` has fired. The check happens under the carousel
    /// lock, which is also held while a ticker is cancelled.
    pub(crate) fn tick_unless_cancelled(&self, cancel: &CancellationToken) -> bool {
        self.apply_tick(Some(cancel))
    }

    /// Fire `cancel` while holding the carousel lock so no tick is halfway
    /// through a mutation when this returns.
    pub(crate) fn cancel_under_lock(&self, cancel: &CancellationToken) {
        let _guard = self.carousel.lock();
        cancel.cancel();
    }

    fn apply_tick(&self, cancel: Option<&CancellationToken>) -> bool {
        let mut carousel = self.carousel.lock();
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return false;
        }
        let applied = carousel.tick();
        if applied {
            self.updates.send_replace(carousel.snapshot());
        }
        applied
    }

    fn apply<T>(&self, op: impl FnOnce(&mut Carousel) -> T) -> T {
        let mut carousel = self.carousel.lock();
        let before = carousel.snapshot();
        let outcome = op(&mut carousel);
        let after = carousel.snapshot();
        if after != before {
            // Published under the lock so subscribers never see snapshots out of order
            self.updates.send_replace(after);
        }
        outcome
    }
}
