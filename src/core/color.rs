use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// 8-bit sRGB color parsed from a hex literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rgb`, `#rrggbb` or the same forms without the leading `#`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(input.to_owned()));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => return Err(ChartError::InvalidColor(input.to_owned())),
        };
        let packed = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ChartError::InvalidColor(input.to_owned()))?;
        Ok(Self::new(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        ))
    }

    /// Converts to hue in degrees `[0, 360)` plus saturation and lightness in `[0, 1]`.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.red) / 255.0;
        let g = f64::from(self.green) / 255.0;
        let b = f64::from(self.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
        let sector = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsl {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Continuous hue/saturation/lightness triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Rounded HSL color as accepted by canvas renderers, e.g. `hsl(28, 92%, 57%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    pub hue: u16,
    pub saturation_pct: u8,
    pub lightness_pct: u8,
}

impl HslColor {
    /// Rounds a continuous HSL value into whole degrees and percents.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self {
            hue: hsl.hue.round().clamp(0.0, 360.0) as u16,
            saturation_pct: (clamp01(hsl.saturation) * 100.0).round() as u8,
            lightness_pct: (clamp01(hsl.lightness) * 100.0).round() as u8,
        }
    }

    #[must_use]
    pub fn lightness(self) -> f64 {
        f64::from(self.lightness_pct) / 100.0
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation_pct, self.lightness_pct
        )
    }
}

pub(crate) fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
