pub mod color;
pub mod palette;
pub mod segments;
pub mod types;

pub use color::{Hsl, HslColor, Rgb};
pub use palette::{CHART_DARK_COLORS, CHART_LIGHT_COLORS, ChartPalette, SemanticColor, shade_rgb};
pub use segments::{SeriesSegments, partition_series};
pub use types::{IncompleteRange, SeriesKind, TimePoint, TimeSeries, Viewport};
