//! Entrance animations for the hero section and the carousel strip.
//!
//! Each hero block fades in while rising into place, and the card strip
//! slides sideways whenever the active card changes. Progress is computed
//! from the time elapsed since the page mounted, so the view stays a pure
//! function of state.

use std::time::{Duration, Instant};

/// Easing function types for transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    EaseOutCubic,
    EaseInOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Delayed fade-and-rise for one block of content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub delay: Duration,
    pub duration: Duration,
    /// Pixels the block starts below its resting place.
    pub rise: f32,
    pub easing: EasingFunction,
}

impl Entrance {
    pub const fn new(delay_ms: u64, duration_ms: u64, rise: f32) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
            rise,
            easing: EasingFunction::EaseOutCubic,
        }
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if running >= self.duration {
            return 1.0;
        }
        self.easing
            .apply(running.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn opacity(&self, elapsed: Duration) -> f32 {
        self.progress(elapsed)
    }

    /// Remaining downward offset in pixels.
    pub fn offset(&self, elapsed: Duration) -> f32 {
        self.rise * (1.0 - self.progress(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

pub const HEADLINE: Entrance = Entrance::new(0, 800, 30.0);
pub const SUBTITLE: Entrance = Entrance::new(150, 700, 20.0);
pub const ACTIONS: Entrance = Entrance::new(300, 700, 20.0);
pub const PREVIEW: Entrance = Entrance::new(200, 600, 12.0);

pub const HERO_SEQUENCE: [Entrance; 4] = [HEADLINE, SUBTITLE, ACTIONS, PREVIEW];

/// Sideways settle of the card strip after the active card changes.
pub const STRIP: Entrance = Entrance {
    delay: Duration::ZERO,
    duration: Duration::from_millis(450),
    rise: 32.0,
    easing: EasingFunction::EaseInOutCubic,
};

/// Most recent strip slide, anchored on the animation clock.
///
/// `direction` is `1.0` when the strip moved forward (the new lead card
/// comes in from the right), `-1.0` when it moved back, and `0.0` before
/// the first change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripShift {
    started_at: Duration,
    direction: f32,
}

impl StripShift {
    pub fn begin(started_at: Duration, direction: f32) -> Self {
        Self {
            started_at,
            direction: direction.signum(),
        }
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Signed horizontal offset in pixels; positive pushes the strip right.
    pub fn offset(&self, elapsed: Duration) -> f32 {
        if self.direction == 0.0 {
            return 0.0;
        }
        STRIP.offset(elapsed.saturating_sub(self.started_at)) * self.direction
    }

    /// Opacity of the incoming lead card.
    pub fn opacity(&self, elapsed: Duration) -> f32 {
        if self.direction == 0.0 {
            return 1.0;
        }
        STRIP.opacity(elapsed.saturating_sub(self.started_at))
    }
}

/// Wall clock for animations, advanced on every frame message.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    started_at: Instant,
    now: Instant,
}

impl Clock {
    pub fn start(now: Instant) -> Self {
        Self {
            started_at: now,
            now,
        }
    }

    pub fn advance(&mut self, now: Instant) {
        // Frames can arrive out of order relative to a manual advance
        if now > self.now {
            self.now = now;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started_at)
    }

    pub fn hero_settled(&self) -> bool {
        let elapsed = self.elapsed();
        HERO_SEQUENCE
            .iter()
            .all(|entrance| entrance.is_finished(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [EasingFunction::EaseOutCubic, EasingFunction::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
        assert!(EasingFunction::EaseOutCubic.apply(0.5) > 0.5);
        assert_eq!(EasingFunction::EaseInOutCubic.apply(0.5), 0.5);
        assert!(EasingFunction::EaseInOutCubic.apply(0.25) < 0.25);
    }

    #[test]
    fn strip_shift_settles_toward_zero() {
        let idle = StripShift::default();
        assert_eq!(idle.offset(Duration::from_secs(3)), 0.0);
        assert_eq!(idle.opacity(Duration::from_secs(3)), 1.0);

        let start = Duration::from_secs(2);
        let forward = StripShift::begin(start, 1.0);
        assert_eq!(forward.offset(start), STRIP.rise);
        assert_eq!(forward.opacity(start), 0.0);

        let halfway = forward.offset(start + Duration::from_millis(225));
        assert!(halfway > 0.0 && halfway < STRIP.rise);

        let settled = start + STRIP.duration;
        assert_eq!(forward.offset(settled), 0.0);
        assert_eq!(forward.opacity(settled), 1.0);

        let back = StripShift::begin(start, -3.0);
        assert_eq!(back.direction(), -1.0);
        assert_eq!(back.offset(start), -STRIP.rise);
    }

    #[test]
    fn entrance_waits_for_delay() {
        let entrance = Entrance::new(150, 700, 20.0);
        assert_eq!(entrance.progress(Duration::from_millis(100)), 0.0);
        assert_eq!(entrance.offset(Duration::from_millis(100)), 20.0);
        assert!(entrance.progress(Duration::from_millis(400)) > 0.0);
        assert_eq!(entrance.progress(Duration::from_millis(850)), 1.0);
        assert_eq!(entrance.offset(Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn clock_settles_after_longest_entrance() {
        let start = Instant::now();
        let mut clock = Clock::start(start);
        assert!(!clock.hero_settled());

        clock.advance(start + Duration::from_millis(900));
        assert!(!clock.hero_settled());

        clock.advance(start + Duration::from_millis(1000));
        assert!(clock.hero_settled());

        clock.advance(start);
        assert_eq!(clock.elapsed(), Duration::from_millis(1000));
    }
}
