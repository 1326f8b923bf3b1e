//! Crossfade between two fixed colors
//!
//! The fade is a small state machine advanced once per frame. Its end
//! points are captured when it starts, so configuration edits during the
//! fade cannot make it jitter.

use embassy_time::{Duration, Instant};

use crate::color::{Hsv, blend_hsv};
use crate::math8::progress8;

/// Blends two values of type `T` using a progress value (0-255)
pub type ValueBlender<T> = fn(T, T, u8) -> T;

/// Fade progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase<T: Copy> {
    Idle,
    Fading {
        from: T,
        to: T,
        /// Time at which the fade started
        start: Instant,
    },
}

/// Crossfade for values of type `T`
#[derive(Debug, Clone)]
pub struct Crossfade<T: Copy> {
    blend: ValueBlender<T>,
    duration: Duration,
    phase: FadePhase<T>,
}

impl<T: Copy> Crossfade<T> {
    pub const fn new(duration: Duration, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            duration,
            phase: FadePhase::Idle,
        }
    }

    pub const fn phase(&self) -> FadePhase<T> {
        self.phase
    }

    pub const fn is_fading(&self) -> bool {
        matches!(self.phase, FadePhase::Fading { .. })
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Start fading from `from` to `to`
    pub fn start(&mut self, from: T, to: T, now: Instant) {
        self.phase = FadePhase::Fading {
            from,
            to,
            start: now,
        };
    }

    /// Blend step (0-255) reached at `now`, if fading
    pub fn step_at(&self, now: Instant) -> Option<u8> {
        let FadePhase::Fading { start, .. } = self.phase else {
            return None;
        };
        let elapsed = now
            .checked_duration_since(start)
            .unwrap_or(Duration::from_millis(0));
        Some(progress8(elapsed, self.duration))
    }

    /// Advance the fade and return this frame's value.
    ///
    /// Returns `None` while idle. The frame that reaches step 255 returns
    /// exactly the target and ends the fade.
    pub fn tick(&mut self, now: Instant) -> Option<T> {
        let FadePhase::Fading { from, to, .. } = self.phase else {
            return None;
        };
        let step = self.step_at(now)?;
        if step == u8::MAX {
            self.phase = FadePhase::Idle;
            return Some(to);
        }
        Some((self.blend)(from, to, step))
    }
}

impl Crossfade<Hsv> {
    /// Create a new HSV crossfade
    pub const fn new_hsv(duration: Duration) -> Self {
        Self::new(duration, blend_hsv)
    }
}
