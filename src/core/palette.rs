use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::color::{HslColor, Rgb, clamp01};

/// Categorical colors for light mode, in assignment order.
pub const CHART_LIGHT_COLORS: [&str; 10] = [
    "#086FFF", // blue
    "#CF7EE9", // violet
    "#73CEE6", // cyan
    "#5B5FEF", // indigo
    "#82B6FF", // light blue
    "#F5609F", // pink
    "#C2BDF3", // indigo 3
    "#8D1EB1", // violet 2
    "#EBCAF6", // violet 3
    "#7366E4", // indigo 2
];

/// Categorical colors for dark mode: the light set at 90% opacity.
pub const CHART_DARK_COLORS: [&str; 10] = [
    "#086FFFE6",
    "#CF7EE9E6",
    "#73CEE6E6",
    "#5B5FEFE6",
    "#82B6FFE6",
    "#F5609FE6",
    "#C2BDF3E6",
    "#8D1EB1E6",
    "#EBCAF6E6",
    "#7366E4E6",
];

/// Upper lightness bound used by shading (lightest shade).
pub const SHADE_LIGHTNESS_MAX: f64 = 0.72;
/// Lower lightness bound used by shading (darkest shade).
pub const SHADE_LIGHTNESS_MIN: f64 = 0.42;

const ORANGE_SHADE_BASE: Rgb = Rgb::new(0xf8, 0xa0, 0x54);
const GRAY_SHADE_BASE: Rgb = Rgb::new(0xee, 0xee, 0xee);
const BLUE_SHADE_BASE: Rgb = Rgb::new(0x00, 0x51, 0xc3);

/// Colors bound to a fixed meaning rather than to series order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticColor {
    Attention,
    Warning,
    Neutral,
    NeutralLight,
    Disabled,
    DisabledLight,
}

impl SemanticColor {
    pub const ALL: [SemanticColor; 6] = [
        SemanticColor::Attention,
        SemanticColor::Warning,
        SemanticColor::Neutral,
        SemanticColor::NeutralLight,
        SemanticColor::Disabled,
        SemanticColor::DisabledLight,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SemanticColor::Attention => "Attention",
            SemanticColor::Warning => "Warning",
            SemanticColor::Neutral => "Neutral",
            SemanticColor::NeutralLight => "NeutralLight",
            SemanticColor::Disabled => "Disabled",
            SemanticColor::DisabledLight => "DisabledLight",
        }
    }

    const fn light(self) -> &'static str {
        match self {
            SemanticColor::Attention => "#FC574A",
            SemanticColor::Warning => "#F8A054",
            SemanticColor::Neutral => "#82B6FF",
            SemanticColor::NeutralLight => "#B9D6FF",
            SemanticColor::Disabled => "#B6B6B6",
            SemanticColor::DisabledLight => "#D9D9D9",
        }
    }

    const fn dark(self) -> &'static str {
        match self {
            SemanticColor::Attention => "#FC574AE6",
            SemanticColor::Warning => "#F8A054E6",
            SemanticColor::Neutral => "#82B6FFE6",
            SemanticColor::NeutralLight => "#B9D6FFE6",
            SemanticColor::Disabled => "#B6B6B6E6",
            SemanticColor::DisabledLight => "#D9D9D9E6",
        }
    }
}

impl fmt::Display for SemanticColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SemanticColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| ChartError::UnknownSemanticColor(s.to_owned()))
    }
}

/// Stateless palette lookups shared by every chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartPalette;

impl ChartPalette {
    #[must_use]
    pub const fn semantic(name: SemanticColor, dark_mode: bool) -> &'static str {
        if dark_mode { name.dark() } else { name.light() }
    }

    /// Untyped lookup. Unknown names are an error rather than a fallback color.
    pub fn semantic_by_name(name: &str, dark_mode: bool) -> ChartResult<&'static str> {
        let color = name.parse::<SemanticColor>()?;
        Ok(Self::semantic(color, dark_mode))
    }

    /// Categorical color for series `index`, wrapping every ten entries.
    ///
    /// Negative indices wrap as well, so `-1` selects the last entry.
    #[must_use]
    pub fn categorical(index: i64, dark_mode: bool) -> &'static str {
        let colors = Self::categorical_colors(dark_mode);
        let slot = index.rem_euclid(colors.len() as i64) as usize;
        colors[slot]
    }

    #[must_use]
    pub const fn categorical_colors(dark_mode: bool) -> &'static [&'static str; 10] {
        if dark_mode {
            &CHART_DARK_COLORS
        } else {
            &CHART_LIGHT_COLORS
        }
    }

    /// Shades `base_hex` by interpolating its lightness across `count` steps.
    pub fn shade(base_hex: &str, index: i64, count: usize) -> ChartResult<HslColor> {
        let base = Rgb::from_hex(base_hex)?;
        Ok(shade_rgb(base, index, count))
    }

    #[must_use]
    pub fn orange_shade(index: i64, count: usize) -> HslColor {
        shade_rgb(ORANGE_SHADE_BASE, index, count)
    }

    #[must_use]
    pub fn gray_shade(index: i64, count: usize) -> HslColor {
        shade_rgb(GRAY_SHADE_BASE, index, count)
    }

    #[must_use]
    pub fn blue_shade(index: i64, count: usize) -> HslColor {
        shade_rgb(BLUE_SHADE_BASE, index, count)
    }
}

/// Keeps hue and saturation of `base` and moves lightness from
/// `SHADE_LIGHTNESS_MAX` (index 0) to `SHADE_LIGHTNESS_MIN` (index `count - 1`).
///
/// `count` is clamped to at least 1, where the single shade sits at the midpoint.
/// `index` is normalized into `[0, count)` so any integer is accepted.
#[must_use]
pub fn shade_rgb(base: Rgb, index: i64, count: usize) -> HslColor {
    let count = count.max(1);
    let index = index.rem_euclid(count as i64);

    let mut hsl = base.to_hsl();
    let max_l = clamp01(SHADE_LIGHTNESS_MAX);
    let min_l = clamp01(SHADE_LIGHTNESS_MIN);

    let t = if count == 1 {
        0.5
    } else {
        index as f64 / (count - 1) as f64
    };
    hsl.lightness = max_l + (min_l - max_l) * t;

    HslColor::from_hsl(hsl)
}
