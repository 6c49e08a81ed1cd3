//! Cell colors

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::intensity::Intensity;

/// Days without any events
pub const NO_DATA: Rgb888 = Rgb888::new(211, 211, 211);

/// Sequential greens, ColorBrewer 9-class, lightest first
const GREENS: [Rgb888; 9] = [
    Rgb888::new(0xf7, 0xfc, 0xf5),
    Rgb888::new(0xe5, 0xf5, 0xe0),
    Rgb888::new(0xc7, 0xe9, 0xc0),
    Rgb888::new(0xa1, 0xd9, 0x9b),
    Rgb888::new(0x74, 0xc4, 0x76),
    Rgb888::new(0x41, 0xab, 0x5d),
    Rgb888::new(0x23, 0x8b, 0x45),
    Rgb888::new(0x00, 0x6d, 0x2c),
    Rgb888::new(0x00, 0x44, 0x1b),
];

/// Color of `value` on the greens ramp. Values of 1 and above saturate.
pub fn greens(value: f64) -> Rgb888 {
    let last = GREENS.len() - 1;
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    let pos = value * last as f64;
    let lo = (pos.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let t = pos - lo as f64;

    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    let (a, b) = (GREENS[lo], GREENS[hi]);
    Rgb888::new(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

pub fn cell_color(intensity: Intensity) -> Rgb888 {
    match intensity {
        Intensity::NoData => NO_DATA,
        Intensity::Level(v) => greens(v),
    }
}
