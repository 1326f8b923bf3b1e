//! Pattern generators
//!
//! Effects are stored in an enum to avoid heap allocations. They read the
//! pattern configuration every frame so edits show up immediately; only
//! timing state (the pulse phase) lives in the effect.

mod constant;
mod pulse;

use embassy_time::Instant;
pub use constant::ConstantEffect;
pub use pulse::{PULSE_VALUE_MIN, PulseEffect};

use crate::color::Hsv;
use crate::pattern::{Pattern, PatternConfig};

pub trait Effect {
    /// Color for this frame
    ///
    /// `brightness` is the global scale (0-255 = 0.0-1.0).
    fn render(&self, config: &PatternConfig, brightness: u8, now: Instant) -> Hsv;

    /// Restart the effect from its first frame
    fn reset(&mut self, _now: Instant) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Constant(ConstantEffect),
    Pulse(PulseEffect),
}

impl EffectSlot {
    /// Create the effect for a pattern, starting at `now`
    pub fn for_pattern(pattern: Pattern, now: Instant) -> Self {
        match pattern {
            Pattern::Constant => Self::Constant(ConstantEffect),
            Pattern::Pulse => Self::Pulse(PulseEffect::new(now)),
        }
    }

    pub const fn pattern(&self) -> Pattern {
        match self {
            Self::Constant(_) => Pattern::Constant,
            Self::Pulse(_) => Pattern::Pulse,
        }
    }

    pub fn render(&self, config: &PatternConfig, brightness: u8, now: Instant) -> Hsv {
        match self {
            Self::Constant(effect) => effect.render(config, brightness, now),
            Self::Pulse(effect) => effect.render(config, brightness, now),
        }
    }

    pub fn reset(&mut self, now: Instant) {
        match self {
            Self::Constant(effect) => effect.reset(now),
            Self::Pulse(effect) => effect.reset(now),
        }
    }
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Constant(ConstantEffect)
    }
}

/// Color a state settles on: the constant color, or the peak of a pulse
pub fn resting_color(config: &PatternConfig, brightness: u8) -> Hsv {
    ConstantEffect.render(config, brightness, Instant::from_millis(0))
}
