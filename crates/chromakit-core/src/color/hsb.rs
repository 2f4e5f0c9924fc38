//! HSB (hue, saturation, brightness) view of a color.

use serde::{Deserialize, Serialize};

/// Hue/saturation/brightness triple derived from a [`Color`](super::Color).
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `brightness` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

/// Convert RGB to HSB.
///
/// ```text
/// brightness = max
/// saturation = delta / max          (0 when max == 0)
/// hue        = 60 × (g − b) / delta       if max == r
///            = 60 × (2 + (b − r) / delta) if max == g
///            = 60 × (4 + (r − g) / delta) if max == b
/// ```
///
/// Achromatic colors (`delta == 0`) get hue 0. When several channels equal
/// the maximum, red wins over green and green over blue.
pub(crate) fn rgb_to_hsb([r, g, b]: [f64; 3]) -> Hsb {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let mut hue = 0.0;
    if delta != 0.0 {
        hue = if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * (2.0 + (b - r) / delta)
        } else {
            60.0 * (4.0 + (r - g) / delta)
        };
    }
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsb {
        hue,
        saturation,
        brightness: max,
    }
}

/// Convert HSB to RGB using the six-sector scheme.
///
/// ```text
/// h = hue / 60
/// c = brightness × saturation
/// x = c × (1 − |h mod 2 − 1|)
/// m = brightness − c
/// sector = floor(h) mod 6
/// ```
///
/// Results are not clamped here; [`Color::new`](super::Color::new) does that.
pub(crate) fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> [f64; 3] {
    let h = hue / 60.0;
    let c = brightness * saturation;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = brightness - c;

    // Non-finite hues make `h.floor().rem_euclid(6.0)` NaN, which casts to 0,
    // so they land in sector 0. The `_` arm is a default that is never reached.
    let sector = h.floor().rem_euclid(6.0) as i64;
    let (r, g, b) = match sector {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        5 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    [r + m, g + m, b + m]
}
