//! Derivative to stroke color.
//!
//! Slopes pass through `tanh(value / SATURATION_SLOPE)`, so magnitudes past
//! roughly 15 all land on the same end color. Light scheme runs blue (steep
//! descent) through green (flat) to red (steep ascent); dark scheme runs
//! cyan to magenta with every channel kept at 55 or above.

use crate::rgb::Rgb;
use crate::scheme::ColorScheme;

/// Divisor applied before `tanh`.
pub const SATURATION_SLOPE: f64 = 5.0;

/// Map a slope into `[0, 1]`, with `0.5` for a flat segment.
///
/// NaN is treated as a flat segment; infinities saturate.
pub fn normalize_derivative(value: f64) -> f64 {
    let value = if value.is_nan() { 0.0 } else { value };
    (value / SATURATION_SLOPE).tanh().clamp(-1.0, 1.0) * 0.5 + 0.5
}

pub fn color_from_derivative(value: f64, scheme: ColorScheme) -> Rgb {
    let n = normalize_derivative(value);

    match scheme {
        ColorScheme::Light => Rgb::new(
            channel(n * 255.0),
            channel((1.0 - (n - 0.5).abs() * 2.0) * 200.0),
            channel((1.0 - n) * 255.0),
        ),
        ColorScheme::Dark => Rgb::new(
            channel(n * 200.0 + 55.0),
            channel((1.0 - n) * 200.0 + 55.0),
            channel(200.0 + n * 55.0),
        ),
    }
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
