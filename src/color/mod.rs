mod blend;

pub use blend::blend_hsv;
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Fully dark color
pub const BLACK: Hsv = Hsv {
    hue: 0,
    sat: 0,
    val: 0,
};
