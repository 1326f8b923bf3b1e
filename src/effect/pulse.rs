//! Breathing effect
//!
//! Brightness follows `exp(cos(x))`, which lingers near the top and the
//! bottom of each breath and moves quickly in between. The raw curve is
//! normalised to `[PULSE_VALUE_MIN, 255]`, then scaled by the configured
//! value and the global brightness. Every pulse starts at its peak.

use core::f32::consts::TAU;

use embassy_time::Instant;

use super::Effect;
use crate::{color::Hsv, math8::scale_exact, pattern::PatternConfig};

/// Floor of the breathing curve before value and brightness scaling
pub const PULSE_VALUE_MIN: u8 = 20;

const MILLIS_PER_MINUTE: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct PulseEffect {
    /// Moment of the first peak
    phase_start: Instant,
}

impl PulseEffect {
    pub const fn new(now: Instant) -> Self {
        Self { phase_start: now }
    }

    /// Breathing curve value in `[PULSE_VALUE_MIN, 255]` after `elapsed_ms`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn breath(pulses_per_minute: u8, elapsed_ms: u64) -> u8 {
        let rate = u64::from(pulses_per_minute.max(1));
        // Exact integer phase keeps the curve periodic for any rate
        let phase = ((elapsed_ms * rate) % MILLIS_PER_MINUTE) as f32 / MILLIS_PER_MINUTE as f32;

        let e = libm::expf(1.0);
        let e_inv = libm::expf(-1.0);
        let wave = libm::expf(libm::cosf(TAU * phase));
        let shape = ((wave - e_inv) / (e - e_inv)).clamp(0.0, 1.0);

        let min = f32::from(PULSE_VALUE_MIN);
        let raw = min + shape * (255.0 - min);
        libm::roundf(raw).clamp(min, 255.0) as u8
    }
}

impl Effect for PulseEffect {
    fn render(&self, config: &PatternConfig, brightness: u8, now: Instant) -> Hsv {
        let elapsed = now
            .checked_duration_since(self.phase_start)
            .map_or(0, |elapsed| elapsed.as_millis());
        let breath = Self::breath(config.pulses_per_minute, elapsed);

        Hsv {
            hue: config.hue,
            sat: config.saturation,
            val: scale_exact(scale_exact(breath, config.value), brightness),
        }
    }

    fn reset(&mut self, now: Instant) {
        self.phase_start = now;
    }
}
