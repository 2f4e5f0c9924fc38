//! Normalized RGBA color value.
//!
//! Every channel is stored as an `f64` in `[0, 1]`. All constructors clamp,
//! so a `Color` can never hold an out-of-range channel.

pub mod hex;
pub mod hsb;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

pub use hsb::Hsb;

/// Per-channel tolerance used by [`Color`] equality.
pub const CHANNEL_TOLERANCE: f64 = 0.001;

/// WCAG sRGB linearization threshold.
const WCAG_LINEAR_THRESHOLD: f64 = 0.03928;

/// Rec. 709 weights used by WCAG relative luminance.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// An immutable RGBA color with channels in `[0, 1]`.
///
/// Equality is approximate: two colors compare equal when every channel
/// differs by less than [`CHANNEL_TOLERANCE`]. Hashing is exact per channel,
/// so colors that compare equal may still hash differently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RgbaChannels")]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

/// Unclamped wire form; deserialization routes through [`Color::new`].
#[derive(Deserialize)]
struct RgbaChannels {
    red: f64,
    green: f64,
    blue: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl From<RgbaChannels> for Color {
    fn from(raw: RgbaChannels) -> Self {
        Self::new(raw.red, raw.green, raw.blue, raw.alpha)
    }
}

/// Clamp into `[0, 1]`. NaN becomes `0.0` and `-0.0` becomes `0.0`.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    // Adding +0.0 turns -0.0 into +0.0.
    value.clamp(0.0, 1.0) + 0.0
}

impl Color {
    /// Create a color from RGBA floats, clamping each channel to `[0, 1]`.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
        }
    }

    /// Create an opaque color from RGB floats.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from 8-bit channels (`0..=255` maps linearly onto `[0, 1]`).
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, u8::MAX)
    }

    /// Parse a hex color (`#RGB`, `#RRGGBB`, or `#AARRGGBB`).
    ///
    /// See [`hex::parse`] for the accepted forms.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        hex::parse(input)
    }

    /// Create a color from hue (degrees), saturation, brightness, and alpha.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let [red, green, blue] = hsb::hsb_to_rgb(hue, saturation, brightness);
        Self::new(red, green, blue, alpha)
    }

    /// Create an opaque color from hue, saturation, and brightness.
    pub fn from_hsb_opaque(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::from_hsb(hue, saturation, brightness, 1.0)
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// RGB channels as an array, alpha omitted.
    pub fn rgb_channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// The HSB view of this color. Computed on every call.
    pub fn hsb(&self) -> Hsb {
        hsb::rgb_to_hsb(self.rgb_channels())
    }

    /// 8-bit channels `[r, g, b, a]`, truncated rather than rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            to_byte(self.alpha),
        ]
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    pub fn hex_string(&self) -> String {
        hex::format(self)
    }

    /// WCAG relative luminance.
    ///
    /// ```text
    /// linear(v) = v / 12.92                     if v <= 0.03928
    ///           = ((v + 0.055) / 1.055) ^ 2.4   otherwise
    /// L = 0.2126 R + 0.7152 G + 0.0722 B        (on linear values)
    /// ```
    pub fn luminance(&self) -> f64 {
        self.rgb_channels()
            .iter()
            .zip(LUMINANCE_WEIGHTS)
            .map(|(&v, w)| w * srgb_to_linear(v))
            .sum()
    }
}

/// Truncating byte conversion; the input is already in `[0, 1]`.
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0) as u8
}

fn srgb_to_linear(value: f64) -> f64 {
    if value <= WCAG_LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        (self.red - other.red).abs() < CHANNEL_TOLERANCE
            && (self.green - other.green).abs() < CHANNEL_TOLERANCE
            && (self.blue - other.blue).abs() < CHANNEL_TOLERANCE
            && (self.alpha - other.alpha).abs() < CHANNEL_TOLERANCE
    }
}

// Exact per-channel hashing. Not consistent with the tolerance used by `eq`.
impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.red.to_bits().hash(state);
        self.green.to_bits().hash(state);
        self.blue.to_bits().hash(state);
        self.alpha.to_bits().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
