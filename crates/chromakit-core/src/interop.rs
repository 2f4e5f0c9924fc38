//! Conversions between [`Color`] and `palette` sRGB types.
//!
//! Incoming values go through [`Color::new`], so out-of-range channels are
//! clamped like any other construction path.

use palette::{Srgb, Srgba};

use crate::color::Color;

impl From<Color> for Srgba<f64> {
    fn from(color: Color) -> Self {
        Srgba::new(color.red(), color.green(), color.blue(), color.alpha())
    }
}

impl From<Srgba<f64>> for Color {
    fn from(value: Srgba<f64>) -> Self {
        Color::new(value.color.red, value.color.green, value.color.blue, value.alpha)
    }
}

/// Drops alpha.
impl From<Color> for Srgb<f64> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}

impl From<Srgb<f64>> for Color {
    fn from(value: Srgb<f64>) -> Self {
        Color::rgb(value.red, value.green, value.blue)
    }
}
