//! Hex string parsing and formatting.
//!
//! Accepted digit counts after stripping non-alphanumeric characters:
//!
//! ```text
//! 3 digits  RGB       each nibble duplicated (F -> FF), alpha = 1
//! 6 digits  RRGGBB    alpha = 1
//! 8 digits  AARRGGBB  alpha is the most significant byte
//! ```

use super::Color;
use crate::error::ColorError;

/// Parse a hex color string. `#`, whitespace and other punctuation are ignored.
pub fn parse(input: &str) -> Result<Color, ColorError> {
    let digits: String = input.chars().filter(|c| c.is_alphanumeric()).collect();
    let count = digits.chars().count();
    if !matches!(count, 3 | 6 | 8) {
        return Err(ColorError::InvalidHexLength(count));
    }

    let value = u32::from_str_radix(&digits, 16)
        .map_err(|_| ColorError::InvalidHexDigit(digits.clone()))?;

    let color = match count {
        3 => Color::new(
            f64::from((value >> 8) * 17) / 255.0,
            f64::from((value >> 4 & 0xF) * 17) / 255.0,
            f64::from((value & 0xF) * 17) / 255.0,
            1.0,
        ),
        6 => Color::new(
            f64::from(value >> 16) / 255.0,
            f64::from(value >> 8 & 0xFF) / 255.0,
            f64::from(value & 0xFF) / 255.0,
            1.0,
        ),
        _ => Color::new(
            f64::from(value >> 16 & 0xFF) / 255.0,
            f64::from(value >> 8 & 0xFF) / 255.0,
            f64::from(value & 0xFF) / 255.0,
            f64::from(value >> 24) / 255.0,
        ),
    };
    Ok(color)
}

/// Format as `#RRGGBB`, or `#RRGGBBAA` when alpha is below 1.
///
/// Formatting emits RGBA order even though 8-digit parsing reads ARGB.
pub fn format(color: &Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    if color.alpha() < 1.0 {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}
