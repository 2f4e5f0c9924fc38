//! Reference backend: plain floating-point math, always available.

use crate::color::{Color, clamp_unit};
use crate::operation::{BlendMode, Operation};
use crate::processor::ColorProcessor;

/// NTSC / Rec. 601 luma weights used for grayscale conversion.
const LUMA_REC601: [f64; 3] = [0.299, 0.587, 0.114];

const FULL_TURN: f64 = 360.0;

/// Clamp into `[0, max]`. NaN maps to `max`.
fn clamp_factor(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return max;
    }
    value.clamp(0.0, max)
}

/// Pure CPU implementation of every [`Operation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuProcessor;

impl ColorProcessor for CpuProcessor {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn process(&self, color: Color, operation: &Operation) -> Color {
        match *operation {
            Operation::Brightness { factor } => apply_brightness(color, factor),
            Operation::Saturation { factor } => apply_saturation(color, factor),
            Operation::Contrast { factor } => apply_contrast(color, factor),
            Operation::Invert => apply_invert(color),
            Operation::Grayscale => apply_grayscale(color),
            Operation::Blend { with, mode } => apply_blend(color, with, mode),
            Operation::HueShift { degrees } => apply_hue_shift(color, degrees),
        }
    }
}

/// Scale RGB by `factor`, clamped to `[0, 2]`. NaN acts as 2.
///
/// ```text
/// out = min(1, in × factor)
/// ```
pub fn apply_brightness(color: Color, factor: f64) -> Color {
    let factor = clamp_factor(factor, 2.0);
    let [r, g, b] = color.rgb_channels();
    Color::new(
        (r * factor).min(1.0),
        (g * factor).min(1.0),
        (b * factor).min(1.0),
        color.alpha(),
    )
}

/// Scale HSB saturation by `factor`.
///
/// Only the resulting saturation is clamped to `[0, 1]`; the factor is used
/// as given. A NaN product saturates fully.
pub fn apply_saturation(color: Color, factor: f64) -> Color {
    let hsb = color.hsb();
    let saturation = clamp_factor(hsb.saturation * factor, 1.0);
    Color::from_hsb(hsb.hue, saturation, hsb.brightness, color.alpha())
}

/// Spread RGB around mid-gray. `factor` is clamped to `[0, 3]`; NaN acts as 3.
///
/// ```text
/// out = clamp01((in − 0.5) × factor + 0.5)
/// ```
pub fn apply_contrast(color: Color, factor: f64) -> Color {
    let factor = clamp_factor(factor, 3.0);
    let [r, g, b] = color.rgb_channels().map(|v| clamp_unit((v - 0.5) * factor + 0.5));
    Color::new(r, g, b, color.alpha())
}

/// `1 − channel` for RGB; alpha unchanged.
pub fn apply_invert(color: Color) -> Color {
    let [r, g, b] = color.rgb_channels();
    Color::new(1.0 - r, 1.0 - g, 1.0 - b, color.alpha())
}

/// Replace RGB with Rec. 601 luma.
pub fn apply_grayscale(color: Color) -> Color {
    let [r, g, b] = color.rgb_channels();
    let luma = LUMA_REC601[0] * r + LUMA_REC601[1] * g + LUMA_REC601[2] * b;
    Color::new(luma, luma, luma, color.alpha())
}

/// Composite `top` over `bottom`.
///
/// Only [`BlendMode::Normal`] is implemented; every other mode returns `top`
/// unchanged.
///
/// ```text
/// a   = a1 + a2 × (1 − a1)
/// out = (c1 × a1 + c2 × a2 × (1 − a1)) / a      (transparent black if a == 0)
/// ```
pub fn apply_blend(top: Color, bottom: Color, mode: BlendMode) -> Color {
    if mode != BlendMode::Normal {
        tracing::trace!(mode = mode.label(), "blend mode not implemented, passing color through");
        return top;
    }

    let a1 = top.alpha();
    let a2 = bottom.alpha();
    let alpha_out = a1 + a2 * (1.0 - a1);
    if alpha_out <= 0.0 {
        return Color::new(0.0, 0.0, 0.0, 0.0);
    }

    let over = |c1: f64, c2: f64| (c1 * a1 + c2 * a2 * (1.0 - a1)) / alpha_out;
    Color::new(
        over(top.red(), bottom.red()),
        over(top.green(), bottom.green()),
        over(top.blue(), bottom.blue()),
        alpha_out,
    )
}

/// Rotate hue by `degrees`, keeping saturation, brightness and alpha.
///
/// A non-finite shift leaves the color unchanged.
pub fn apply_hue_shift(color: Color, degrees: f64) -> Color {
    if !degrees.is_finite() {
        return color;
    }
    let hsb = color.hsb();
    let hue = wrap_degrees(hsb.hue + degrees);
    Color::from_hsb(hue, hsb.saturation, hsb.brightness, color.alpha())
}

/// Wrap a finite angle into `[0, 360)`.
///
/// Large magnitudes are reduced with a truncating remainder first so the
/// add/subtract loops run at most once.
fn wrap_degrees(mut hue: f64) -> f64 {
    if hue.abs() >= 2.0 * FULL_TURN {
        hue %= FULL_TURN;
    }
    while hue < 0.0 {
        hue += FULL_TURN;
    }
    while hue >= FULL_TURN {
        hue -= FULL_TURN;
    }
    hue
}
