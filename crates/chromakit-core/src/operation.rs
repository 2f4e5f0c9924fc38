//! Transformation requests.
//!
//! An [`Operation`] names one transform and carries its parameters. Validity
//! and descriptions are advisory; processors never consult them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ColorError;

/// Compositing rule for [`Operation::Blend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    /// Standard alpha "over" compositing.
    Normal,
    Multiply,
    Screen,
    Overlay,
    SoftLight,
    HardLight,
}

impl BlendMode {
    /// Stable label, also used for serialization.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::SoftLight => "softLight",
            Self::HardLight => "hardLight",
        }
    }

    /// Every blend mode, in declaration order.
    pub fn all() -> &'static [Self] {
        const ALL: [BlendMode; 6] = [
            BlendMode::Normal,
            BlendMode::Multiply,
            BlendMode::Screen,
            BlendMode::Overlay,
            BlendMode::SoftLight,
            BlendMode::HardLight,
        ];
        &ALL
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| ColorError::UnknownBlendMode(s.to_string()))
    }
}

/// A single color transformation with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Scale RGB by `factor`. 1.0 = unchanged.
    Brightness { factor: f64 },
    /// Scale HSB saturation by `factor`. 1.0 = unchanged.
    Saturation { factor: f64 },
    /// Spread RGB around 0.5 by `factor`. 1.0 = unchanged.
    Contrast { factor: f64 },
    /// Replace each RGB channel with `1 - channel`.
    Invert,
    /// Replace RGB with NTSC luma.
    Grayscale,
    /// Composite this color over `with` using `mode`.
    Blend { with: Color, mode: BlendMode },
    /// Rotate the HSB hue by `degrees`.
    HueShift { degrees: f64 },
}

impl Operation {
    /// Whether the parameters are within their documented ranges.
    ///
    /// - factors: `[0, 2]`
    /// - hue shift: `[-360, 360]` degrees
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Brightness { factor }
            | Self::Saturation { factor }
            | Self::Contrast { factor } => (0.0..=2.0).contains(&factor),
            Self::HueShift { degrees } => (-360.0..=360.0).contains(&degrees),
            Self::Invert | Self::Grayscale | Self::Blend { .. } => true,
        }
    }

    /// Human-readable description for logs and diagnostics.
    pub fn description(&self) -> String {
        // `{:?}` keeps the decimal point on whole numbers ("1.0", not "1").
        match self {
            Self::Brightness { factor } => format!("Brightness adjustment (factor: {factor:?})"),
            Self::Saturation { factor } => format!("Saturation adjustment (factor: {factor:?})"),
            Self::Contrast { factor } => format!("Contrast adjustment (factor: {factor:?})"),
            Self::Invert => "Color inversion".to_string(),
            Self::Grayscale => "Grayscale conversion".to_string(),
            Self::Blend { mode, .. } => format!("Color blending ({mode} mode)"),
            Self::HueShift { degrees } => format!("Hue shift ({degrees:?}°)"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_validity_bounds() {
        assert!(Operation::Brightness { factor: 0.0 }.is_valid());
        assert!(Operation::Brightness { factor: 2.0 }.is_valid());
        assert!(!Operation::Brightness { factor: 2.0001 }.is_valid());
        assert!(!Operation::Saturation { factor: -0.1 }.is_valid());
        assert!(Operation::Contrast { factor: 2.0 }.is_valid());
        assert!(!Operation::Contrast { factor: 2.5 }.is_valid());
    }

    #[test]
    fn test_hue_shift_validity_bounds() {
        assert!(Operation::HueShift { degrees: 360.0 }.is_valid());
        assert!(Operation::HueShift { degrees: -360.0 }.is_valid());
        assert!(!Operation::HueShift { degrees: 360.0001 }.is_valid());
        assert!(!Operation::HueShift { degrees: -360.0001 }.is_valid());
    }

    #[test]
    fn test_nan_parameters_are_invalid() {
        assert!(!Operation::Brightness { factor: f64::NAN }.is_valid());
        assert!(!Operation::HueShift { degrees: f64::NAN }.is_valid());
    }

    #[test]
    fn test_parameterless_operations_always_valid() {
        assert!(Operation::Invert.is_valid());
        assert!(Operation::Grayscale.is_valid());
        for &mode in BlendMode::all() {
            let op = Operation::Blend {
                with: Color::rgb(0.0, 0.0, 0.0),
                mode,
            };
            assert!(op.is_valid(), "{mode} blend should be valid");
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            Operation::Brightness { factor: 1.5 }.description(),
            "Brightness adjustment (factor: 1.5)"
        );
        assert_eq!(
            Operation::Saturation { factor: 0.5 }.description(),
            "Saturation adjustment (factor: 0.5)"
        );
        assert_eq!(
            Operation::Contrast { factor: 1.0 }.description(),
            "Contrast adjustment (factor: 1.0)"
        );
        assert_eq!(Operation::Invert.description(), "Color inversion");
        assert_eq!(Operation::Grayscale.to_string(), "Grayscale conversion");
        assert_eq!(
            Operation::Blend {
                with: Color::rgb(1.0, 1.0, 1.0),
                mode: BlendMode::SoftLight,
            }
            .description(),
            "Color blending (softLight mode)"
        );
        assert_eq!(
            Operation::HueShift { degrees: -45.0 }.description(),
            "Hue shift (-45.0°)"
        );
    }

    #[test]
    fn test_blend_mode_labels_round_trip() {
        for &mode in BlendMode::all() {
            assert_eq!(mode.label().parse::<BlendMode>().ok(), Some(mode));
        }
        assert!("dissolve".parse::<BlendMode>().is_err());
    }

    #[test]
    fn test_operation_json_shape() {
        let json = serde_json::to_value(Operation::HueShift { degrees: 90.0 }).expect("serialize");
        assert_eq!(json["op"], "hue_shift");
        assert_eq!(json["degrees"], 90.0);

        let op: Operation = serde_json::from_str(
            r#"{"op":"blend","with":{"red":0,"green":0,"blue":1},"mode":"hardLight"}"#,
        )
        .expect("valid operation json");
        assert_eq!(
            op,
            Operation::Blend {
                with: Color::rgb(0.0, 0.0, 1.0),
                mode: BlendMode::HardLight,
            }
        );
    }
}
