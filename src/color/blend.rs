use crate::color::Hsv;
use crate::math8::{blend8, scale_exact};

/// Blend two HSV colors, travelling the shortest way around the hue wheel.
///
/// A side that is black (`val == 0`) takes hue and saturation from the
/// other side, so fading to or from black keeps the color and only changes
/// brightness. A side that is white (`sat == 0`) takes only the hue.
///
/// # Arguments
/// * `from` - Color at `amount_of_to == 0`
/// * `to` - Color at `amount_of_to == 255`
/// * `amount_of_to` - Blend factor
pub fn blend_hsv(mut from: Hsv, mut to: Hsv, amount_of_to: u8) -> Hsv {
    if to.val == 0 {
        to.hue = from.hue;
        to.sat = from.sat;
    } else if to.sat == 0 {
        to.hue = from.hue;
    }
    if from.val == 0 {
        from.hue = to.hue;
        from.sat = to.sat;
    } else if from.sat == 0 {
        from.hue = to.hue;
    }

    let forward = to.hue.wrapping_sub(from.hue);
    let hue = if forward <= 127 {
        from.hue.wrapping_add(scale_exact(forward, amount_of_to))
    } else {
        let backward = 0u8.wrapping_sub(forward);
        from.hue.wrapping_sub(scale_exact(backward, amount_of_to))
    };

    Hsv {
        hue,
        sat: blend8(from.sat, to.sat, amount_of_to),
        val: blend8(from.val, to.val, amount_of_to),
    }
}
