//! Solid color at the configured value

use embassy_time::Instant;

use super::Effect;
use crate::{color::Hsv, math8::scale_exact, pattern::PatternConfig};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantEffect;

impl Effect for ConstantEffect {
    fn render(&self, config: &PatternConfig, brightness: u8, _now: Instant) -> Hsv {
        Hsv {
            hue: config.hue,
            sat: config.saturation,
            val: scale_exact(config.value, brightness),
        }
    }
}
