//! Per-channel gamma correction

use super::Filter;
use crate::color::Rgb;
use crate::gamma::ws2812_lut;
use crate::math8::U8Adjuster;

/// Runs every channel through a lookup function
#[derive(Debug, Clone, Copy)]
pub(crate) struct GammaCorrection {
    adjust: U8Adjuster,
}

impl GammaCorrection {
    pub(crate) const fn new(adjust: U8Adjuster) -> Self {
        Self { adjust }
    }

    pub(crate) const fn ws2812() -> Self {
        Self::new(ws2812_lut)
    }
}

impl Filter for GammaCorrection {
    fn apply(&self, frame: &mut [Rgb]) {
        for pixel in frame.iter_mut() {
            pixel.r = (self.adjust)(pixel.r);
            pixel.g = (self.adjust)(pixel.g);
            pixel.b = (self.adjust)(pixel.b);
        }
    }
}
