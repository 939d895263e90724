//! Turns escape results into colors.  The hue is keyed to both the
//! escape step and the magnitude at escape, which smears the hard
//! bands a plain iteration count would give.

use image::Rgb;

use crate::escape::{Escape, ESCAPE_RADIUS_SQR};

/// The color of every point that never escaped.
pub const INSIDE_SET: Rgb<u8> = Rgb([255, 255, 255]);

/// Gradient-shaping divisor for the hue.  Tuned by eye.
pub const HUE_SCALE: f64 = 800.0;

/// Maps one escape result to a color: white for the set itself, a
/// fully saturated mid-lightness hue for everything outside it.
pub fn colorize(escape: Escape, max_iterations: usize) -> Rgb<u8> {
    if escape.iterations >= max_iterations || escape.magnitude_sqr <= ESCAPE_RADIUS_SQR {
        return INSIDE_SET;
    }
    let hue = escape.iterations as f64 / HUE_SCALE * escape.magnitude_sqr;
    hsl_to_rgb(hue, 1.0, 0.5)
}

/// Standard HSL to RGB.  `h` is a fraction of the hue wheel and wraps,
/// so any finite value is acceptable; `s` and `l` are in [0, 1].
/// Channels are scaled to 255 and truncated.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb<u8> {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(1.0);
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };
    Rgb([to_byte(r), to_byte(g), to_byte(b)])
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v: f64) -> u8 {
    num::clamp(v * 255.0, 0.0, 255.0) as u8
}
