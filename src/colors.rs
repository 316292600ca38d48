//! Conversions between floating-point colors and write-range intensities.
//!
//! The fader works on integer channel values in `[0, write_range]`. These helpers let
//! colors be described as `palette::Srgb` (0.0-1.0) or HSV and scaled to whatever range
//! the output was configured with.

use palette::{FromColor, Hsv, Srgb};

/// Scales a 0.0-1.0 color to `[0, write_range]`, rounding to nearest.
pub fn from_srgb(color: Srgb, write_range: u16) -> Srgb<u16> {
    let scale = |value: f32| libm::roundf(value.clamp(0.0, 1.0) * f32::from(write_range)) as u16;
    Srgb::new(scale(color.red), scale(color.green), scale(color.blue))
}

/// Normalizes a write-range color back to 0.0-1.0.
pub fn to_srgb(color: Srgb<u16>, write_range: u16) -> Srgb {
    let range = f32::from(write_range.max(1));
    let scale = |value: u16| (f32::from(value) / range).min(1.0);
    Srgb::new(scale(color.red), scale(color.green), scale(color.blue))
}

/// Creates a write-range color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32, write_range: u16) -> Srgb<u16> {
    let hsv = Hsv::new(hue, saturation, value);
    from_srgb(Srgb::from_color(hsv), write_range)
}

/// Creates a write-range color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32, write_range: u16) -> Srgb<u16> {
    hsv(hue, 1.0, 1.0, write_range)
}
