//! LED wiring order compensation
//!
//! Drivers send channels in GRB order. Strips wired RGB would show red
//! and green swapped, so the frame is pre-swapped for them.

use super::Filter;
use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WiringOrder {
    /// Green, red, blue (WS2812 default)
    #[default]
    Grb,
    /// Red, green, blue
    Rgb,
}

impl Filter for WiringOrder {
    fn apply(&self, frame: &mut [Rgb]) {
        if *self == Self::Grb {
            return;
        }
        for pixel in frame.iter_mut() {
            core::mem::swap(&mut pixel.r, &mut pixel.g);
        }
    }
}
