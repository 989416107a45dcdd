//! Carousel controller
//!
//! [`Carousel`] is the plain state machine (index plus pause gate) with pure
//! transitions. [`CarouselHandle`] shares one carousel between a renderer and
//! a timer and publishes snapshots on every change. [`AutoAdvance`] is the
//! scoped timer guard that ticks a handle until it is cancelled or dropped.

/// Shared, lock-guarded carousel with change notifications.
pub mod handle;
/// The carousel state machine.
pub mod state;
/// Tokio auto-advance timer.
pub mod ticker;

pub use handle::CarouselHandle;
pub use state::{Carousel, CarouselSnapshot};
pub use ticker::AutoAdvance;

use std::time::Duration;

/// Cadence of the auto-advance timer when nothing else is configured.
pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_millis(3500);
