//! Demo catalogue of the documentation site.
//!
//! Each demo wires palette, transform and legend together the way a page
//! would, producing the option a live chart would be mounted with.

use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::api::{
    ChartOption, NamedValue, SeriesOption, TimeseriesChartProps, build_timeseries_option,
};
use crate::core::{ChartPalette, IncompleteRange, SemanticColor, SeriesKind, TimePoint, TimeSeries};
use crate::error::ChartError;
use crate::render::{LegendItem, LegendVariant};

pub const MINUTE_MS: f64 = 60_000.0;

/// Synthetic samples with a rising trend and bounded noise.
///
/// Produces `points` samples spaced `step_ms` apart and ending at `end_ms`.
/// Values are rounded to two decimals before `scale` is applied. Noise is
/// drawn from a generator seeded with `seed`, so output is reproducible.
#[must_use]
pub fn build_series_data(
    seed: u32,
    points: usize,
    step_ms: f64,
    scale: f64,
    end_ms: f64,
) -> Vec<TimePoint> {
    let start = end_ms - points.saturating_sub(1) as f64 * step_ms;
    let mut rng = SmallRng::seed_from_u64(u64::from(seed));

    (0..points)
        .map(|i| {
            let time = start + i as f64 * step_ms;
            let trend = i as f64 * 0.15;
            let noise = (rng.random::<f64>() - 0.5) * 8.0;
            let value = ((30.0 + f64::from(seed) * 15.0 + trend + noise) * 100.0).round() / 100.0;
            TimePoint::new(time, value * scale)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoName {
    BasicLine,
    TimeseriesPreview,
    IncompleteData,
    TimeRangeSelection,
    ChartExample,
    StackedBar,
    Pie,
    PiePreview,
}

impl DemoName {
    pub const ALL: [DemoName; 8] = [
        DemoName::BasicLine,
        DemoName::TimeseriesPreview,
        DemoName::IncompleteData,
        DemoName::TimeRangeSelection,
        DemoName::ChartExample,
        DemoName::StackedBar,
        DemoName::Pie,
        DemoName::PiePreview,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            DemoName::BasicLine => "basic-line",
            DemoName::TimeseriesPreview => "timeseries-preview",
            DemoName::IncompleteData => "incomplete-data",
            DemoName::TimeRangeSelection => "time-range-selection",
            DemoName::ChartExample => "chart-example",
            DemoName::StackedBar => "stacked-bar",
            DemoName::Pie => "pie",
            DemoName::PiePreview => "pie-preview",
        }
    }
}

impl fmt::Display for DemoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DemoName {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.slug() == s)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown demo `{s}`")))
    }
}

/// Option and container height of one rendered demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoChart {
    pub name: DemoName,
    pub height: u32,
    pub option: ChartOption,
}

fn semantic_series(
    name: &str,
    color: SemanticColor,
    dark_mode: bool,
    seed: u32,
    points: usize,
    scale: f64,
    end_ms: f64,
) -> TimeSeries {
    TimeSeries::new(
        name,
        build_series_data(seed, points, MINUTE_MS, scale, end_ms),
        ChartPalette::semantic(color, dark_mode),
    )
}

fn categorical_series(name: &str, dark_mode: bool, points: usize, end_ms: f64) -> TimeSeries {
    TimeSeries::new(
        name,
        build_series_data(0, points, MINUTE_MS, 1.0, end_ms),
        ChartPalette::categorical(0, dark_mode),
    )
}

fn timeseries_props(demo: DemoName, dark_mode: bool, end_ms: f64) -> TimeseriesChartProps {
    use SemanticColor::{Attention, Neutral, NeutralLight, Warning};

    let props = match demo {
        DemoName::BasicLine => TimeseriesChartProps::new(vec![
            semantic_series("Requests", Neutral, dark_mode, 0, 50, 1.0, end_ms),
            semantic_series("Errors", Attention, dark_mode, 1, 50, 0.3, end_ms),
        ])
        .with_x_axis_name("Time (UTC)")
        .with_y_axis_name("Count"),
        DemoName::TimeseriesPreview => TimeseriesChartProps::new(vec![
            semantic_series("Requests", Neutral, dark_mode, 0, 30, 1.0, end_ms),
            semantic_series("Errors", Attention, dark_mode, 1, 30, 0.3, end_ms),
        ])
        .with_y_axis_tick_number(2)
        .with_height(160),
        DemoName::IncompleteData => {
            let bandwidth = categorical_series("Bandwidth", dark_mode, 50, end_ms);
            let boundary = bandwidth.data[bandwidth.len() - 5].time;
            TimeseriesChartProps::new(vec![bandwidth])
                .with_x_axis_name("Time (UTC)")
                .with_y_axis_name("Mbps")
                .with_incomplete(IncompleteRange::after(boundary))
        }
        DemoName::TimeRangeSelection => {
            TimeseriesChartProps::new(vec![categorical_series("CPU Usage", dark_mode, 50, end_ms)])
                .with_x_axis_name("Time (UTC)")
                .with_y_axis_name("%")
                .with_time_range_callback(|from, to| {
                    info!(from, to, "time range selected");
                })
        }
        DemoName::ChartExample => TimeseriesChartProps::new(vec![
            semantic_series("P99", Attention, dark_mode, 3, 30, 1.0, end_ms),
            semantic_series("P95", Warning, dark_mode, 2, 30, 0.6, end_ms),
            semantic_series("P75", Neutral, dark_mode, 1, 30, 0.4, end_ms),
            semantic_series("P50", NeutralLight, dark_mode, 0, 30, 0.2, end_ms),
        ])
        .with_x_axis_name("Time (UTC)")
        .with_height(300),
        DemoName::StackedBar => TimeseriesChartProps::new(
            (0..3)
                .map(|i| {
                    TimeSeries::new(
                        format!("Region {}", i + 1),
                        build_series_data(i, 24, 60.0 * MINUTE_MS, 1.0, end_ms),
                        ChartPalette::categorical(i64::from(i), dark_mode),
                    )
                })
                .collect(),
        )
        .with_kind(SeriesKind::Bar)
        .with_x_axis_name("Time (UTC)")
        .with_y_axis_name("GB"),
        DemoName::Pie | DemoName::PiePreview => TimeseriesChartProps::default(),
    };
    props.with_dark_mode(dark_mode)
}

fn pie_option(slices: usize) -> ChartOption {
    let data = ["Series A", "Series B", "Series C", "Series D", "Series E"]
        .into_iter()
        .zip([101.0, 202.0, 303.0, 404.0, 505.0])
        .take(slices)
        .map(|(name, value)| NamedValue::new(name, value))
        .collect();
    ChartOption::default()
        .with_toolbox_hidden()
        .with_series(vec![SeriesOption::pie(data)])
}

/// Renders `demo` with data ending at `end_ms`.
#[must_use]
pub fn demo_chart(demo: DemoName, dark_mode: bool, end_ms: f64) -> DemoChart {
    let (option, height) = match demo {
        DemoName::Pie => (pie_option(5), 400),
        DemoName::PiePreview => (pie_option(3), 160),
        _ => {
            let props = timeseries_props(demo, dark_mode, end_ms);
            (build_timeseries_option(&props), props.height)
        }
    };
    DemoChart {
        name: demo,
        height,
        option,
    }
}

/// Legend entries of the read-latency example card.
#[must_use]
pub fn read_latency_legend(dark_mode: bool) -> Vec<LegendItem> {
    [
        ("P99", SemanticColor::Attention, "124"),
        ("P95", SemanticColor::Warning, "76"),
        ("P75", SemanticColor::Neutral, "32"),
        ("P50", SemanticColor::NeutralLight, "10"),
    ]
    .into_iter()
    .map(|(name, color, value)| {
        LegendItem::new(name, ChartPalette::semantic(color, dark_mode), value).with_unit("ms")
    })
    .collect()
}

fn legend_showcase_items(dark_mode: bool, inactive: bool) -> Vec<LegendItem> {
    let requests = LegendItem::new(
        "Requests",
        ChartPalette::semantic(SemanticColor::Neutral, dark_mode),
        "1,234",
    )
    .with_unit("req/s");
    let storage = LegendItem::new(
        "Storage",
        ChartPalette::semantic(SemanticColor::Attention, dark_mode),
        "56",
    )
    .with_unit("GB");
    let warnings = LegendItem::new(
        "Warnings",
        ChartPalette::semantic(SemanticColor::Warning, dark_mode),
        "128",
    );
    vec![requests, storage, warnings]
        .into_iter()
        .map(|item| item.with_inactive(inactive))
        .collect()
}

/// Markup of the legend showcase: active items, then the same items inactive.
#[must_use]
pub fn legend_showcase_markup(variant: LegendVariant, dark_mode: bool) -> String {
    let section = |title: &str, inactive: bool| {
        let items: String = legend_showcase_items(dark_mode, inactive)
            .iter()
            .map(|item| item.render(variant))
            .collect();
        format!(
            "<h3 class=\"text-sm font-medium text-kumo-text-secondary\">{title}</h3>\
             <div class=\"flex flex-wrap gap-4\">{items}</div>"
        )
    };
    format!(
        "<div class=\"space-y-4\">{}{}</div>",
        section("Active State", false),
        section("Inactive State", true)
    )
}

/// One row of the palette reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteRow {
    pub name: String,
    pub light: &'static str,
    pub dark: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteTable {
    pub semantic: Vec<PaletteRow>,
    pub categorical: Vec<PaletteRow>,
}

/// Light and dark values of every semantic and categorical color.
#[must_use]
pub fn palette_table() -> PaletteTable {
    let semantic = SemanticColor::ALL
        .into_iter()
        .map(|color| PaletteRow {
            name: color.name().to_owned(),
            light: ChartPalette::semantic(color, false),
            dark: ChartPalette::semantic(color, true),
        })
        .collect();
    let categorical = (0..10)
        .map(|index| PaletteRow {
            name: index.to_string(),
            light: ChartPalette::categorical(index, false),
            dark: ChartPalette::categorical(index, true),
        })
        .collect();
    PaletteTable {
        semantic,
        categorical,
    }
}
