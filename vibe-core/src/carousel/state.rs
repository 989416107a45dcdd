//! Carousel state machine.

use crate::catalog::SlideCatalog;
use crate::error::CarouselError;

/// Point-in-time view of a carousel handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    /// Active slide position.
    pub index: usize,
    /// Auto-advance is suspended.
    pub paused: bool,
    /// Number of slides.
    pub len: usize,
}

impl CarouselSnapshot {
    /// Whether `position` is the active slide.
    pub fn is_active(&self, position: usize) -> bool {
        self.index == position
    }
}

/// Rotating slide index with a pause gate for auto-advance.
///
/// `index` is always a valid position: `0 <= index < len`, and `len >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    paused: bool,
    len: usize,
}

impl Carousel {
    /// Create a carousel over `len` slides, starting at slide 0 and running.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyCarousel);
        }
        Ok(Self {
            index: 0,
            paused: false,
            len,
        })
    }

    /// Catalogs are never empty, so this cannot fail.
    pub fn for_catalog(catalog: &SlideCatalog) -> Self {
        Self {
            index: 0,
            paused: false,
            len: catalog.len().max(1),
        }
    }

    /// Active slide position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether ticks are currently ignored.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true for a constructed carousel.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.index,
            paused: self.paused,
            len: self.len,
        }
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        log::debug!("Carousel advanced to {}/{}", self.index, self.len);
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        // Add len before subtracting so index 0 wraps instead of underflowing
        self.index = (self.index + self.len - 1) % self.len;
        log::debug!("Carousel rewound to {}/{}", self.index, self.len);
    }

    /// Jump straight to `target`.
    ///
    /// Out-of-range targets are rejected and leave the index untouched.
    pub fn jump_to(&mut self, target: usize) -> Result<(), CarouselError> {
        if target >= self.len {
            log::warn!(
                "Rejected carousel jump to {} (only {} slides)",
                target,
                self.len
            );
            return Err(CarouselError::IndexOutOfRange {
                target,
                len: self.len,
            });
        }
        self.index = target;
        log::debug!("Carousel jumped to {}/{}", self.index, self.len);
        Ok(())
    }

    /// Open or close the auto-advance gate. Manual navigation ignores it.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::debug!(
                "Carousel auto-advance {}",
                if paused { "paused" } else { "resumed" }
            );
        }
        self.paused = paused;
    }

    /// One auto-advance step.
    ///
    /// Returns whether the tick was applied, which is false only while
    /// paused. With a single slide an applied tick leaves the index at 0.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.next();
        true
    }

    /// Change the number of slides, clamping the index into the new range.
    pub fn resize(&mut self, len: usize) -> Result<(), CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyCarousel);
        }
        self.len = len;
        if self.index >= len {
            self.index = len - 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Carousel {
        Carousel::new(3).expect("non-empty carousel")
    }

    #[test]
    fn starts_at_zero_and_running() {
        let carousel = three();
        assert_eq!(
            carousel.snapshot(),
            CarouselSnapshot {
                index: 0,
                paused: false,
                len: 3
            }
        );
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::EmptyCarousel));
    }

    #[test]
    fn next_cycles_modulo_len() {
        for k in 0..10 {
            let mut carousel = three();
            for _ in 0..k {
                carousel.next();
            }
            assert_eq!(carousel.index(), k % 3, "after {k} next() calls");
        }
    }

    #[test]
    fn previous_cycles_backwards_from_zero() {
        for k in 0..10 {
            let mut carousel = three();
            for _ in 0..k {
                carousel.previous();
            }
            assert_eq!(carousel.index(), (3 - (k % 3)) % 3, "after {k} previous() calls");
        }
    }

    #[test]
    fn next_and_previous_undo_each_other() {
        for start in 0..3 {
            let mut carousel = three();
            carousel.jump_to(start).unwrap();

            carousel.next();
            carousel.previous();
            assert_eq!(carousel.index(), start);

            carousel.previous();
            carousel.next();
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn ticks_are_ignored_while_paused() {
        let mut carousel = three();
        carousel.set_paused(true);
        for _ in 0..5 {
            assert!(!carousel.tick());
        }
        assert_eq!(carousel.index(), 0);

        carousel.set_paused(false);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn jump_to_sets_exact_index() {
        for start in 0..3 {
            let mut carousel = three();
            carousel.jump_to(start).unwrap();
            carousel.jump_to(2).unwrap();
            assert_eq!(carousel.index(), 2);
        }
    }

    #[test]
    fn jump_out_of_range_leaves_index_untouched() {
        let mut carousel = three();
        carousel.next();
        assert_eq!(
            carousel.jump_to(3),
            Err(CarouselError::IndexOutOfRange { target: 3, len: 3 })
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn pause_and_resume_scenario() {
        let mut carousel = three();

        carousel.tick();
        assert_eq!(carousel.index(), 1);

        carousel.set_paused(true);
        for _ in 0..5 {
            carousel.tick();
        }
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_paused());

        carousel.set_paused(false);
        carousel.tick();
        assert_eq!(carousel.index(), 2);

        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn navigation_works_while_paused() {
        let mut carousel = three();
        carousel.set_paused(true);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        carousel.previous();
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_paused());
    }

    #[test]
    fn resize_clamps_stale_index() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.jump_to(4).unwrap();

        carousel.resize(3).unwrap();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.len(), 3);

        carousel.resize(10).unwrap();
        assert_eq!(carousel.index(), 2);

        assert_eq!(carousel.resize(0), Err(CarouselError::EmptyCarousel));
        assert_eq!(carousel.len(), 10);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.next();
        carousel.previous();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 0);

        carousel.set_paused(true);
        assert!(!carousel.tick());
    }
}
