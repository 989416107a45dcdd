//! Carousel operation errors.

use thiserror::Error;

/// Errors raised by carousel operations.
///
/// All of these are caller contract violations; the carousel state is left
/// untouched whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// `jump_to` was given a position past the last slide.
    #[error("slide index {target} is out of range for a carousel of {len} slides")]
    IndexOutOfRange {
        /// Requested position.
        target: usize,
        /// Slide count at the time of the request.
        len: usize,
    },

    /// A carousel was created or resized with zero slides.
    #[error("a carousel needs at least one slide")]
    EmptyCarousel,
}
