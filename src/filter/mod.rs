//! Output filters
//!
//! Applied to the RGB frame after HSV conversion, just before it goes to
//! the driver: gamma correction first, then the wiring-order swap.

use crate::color::Rgb;

mod gamma_correction;
mod wiring;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

pub(crate) use gamma_correction::GammaCorrection;
pub use wiring::WiringOrder;

#[derive(Debug, Clone, Copy)]
pub struct FilterProcessorConfig {
    /// Apply the WS2812 gamma table
    pub gamma: bool,
    /// Physical channel order of the strip
    pub wiring: WiringOrder,
}

impl Default for FilterProcessorConfig {
    fn default() -> Self {
        Self {
            gamma: true,
            wiring: WiringOrder::Grb,
        }
    }
}

/// Filter processor - applies post-processing to frames
#[derive(Debug)]
pub(crate) struct FilterProcessor {
    pub(crate) gamma: Option<GammaCorrection>,
    pub(crate) wiring: WiringOrder,
}

impl FilterProcessor {
    pub(crate) fn new(config: &FilterProcessorConfig) -> Self {
        Self {
            gamma: config.gamma.then(GammaCorrection::ws2812),
            wiring: config.wiring,
        }
    }

    /// Apply all filters in order
    pub(crate) fn apply(&self, frame: &mut [Rgb]) {
        if let Some(gamma) = &self.gamma {
            gamma.apply(frame);
        }
        self.wiring.apply(frame);
    }
}
