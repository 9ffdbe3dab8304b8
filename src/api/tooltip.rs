use std::collections::HashSet;
use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::render::escape_html;

/// One entry of an axis-triggered tooltip, as supplied by the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipParam {
    pub series_name: String,
    /// Colored swatch markup prepared by the engine.
    #[serde(default)]
    pub marker: String,
    /// `[time, value]` of the hovered sample.
    #[serde(default)]
    pub value: Option<Vec<f64>>,
    #[serde(default)]
    pub axis_value: Option<f64>,
}

impl TooltipParam {
    #[must_use]
    pub fn new(series_name: impl Into<String>, time: f64, value: f64) -> Self {
        Self {
            series_name: series_name.into(),
            marker: String::new(),
            value: Some(vec![time, value]),
            axis_value: Some(time),
        }
    }

    fn time(&self) -> Option<f64> {
        self.value
            .as_deref()
            .and_then(|v| v.first().copied())
            .or(self.axis_value)
    }

    fn sample(&self) -> Option<f64> {
        self.value.as_deref().and_then(|v| v.get(1).copied())
    }
}

/// Tooltip formatting strategies the engine resolves by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipFormatter {
    /// One timestamp header, then one row per distinct series name.
    DedupBySeriesName,
}

impl TooltipFormatter {
    /// Formats with timestamps in the host's local time zone.
    #[must_use]
    pub fn format(self, params: &[TooltipParam]) -> String {
        self.format_in(params, &Local)
    }

    #[must_use]
    pub fn format_in<Tz>(self, params: &[TooltipParam], tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TooltipFormatter::DedupBySeriesName => format_dedup_tooltip(params, tz),
        }
    }
}

/// Keeps the first entry per series name.
///
/// A solid and a dashed segment of the same series share their boundary
/// sample, so both would otherwise be listed.
#[must_use]
pub fn dedup_by_series_name(params: &[TooltipParam]) -> Vec<&TooltipParam> {
    let mut seen = HashSet::new();
    params
        .iter()
        .filter(|param| seen.insert(param.series_name.as_str()))
        .collect()
}

/// `YYYY-MM-DD HH:MM:SS` in `tz`, `None` for timestamps out of range.
#[must_use]
pub fn format_timestamp<Tz>(time_ms: f64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !time_ms.is_finite() {
        return None;
    }
    let utc = DateTime::from_timestamp_millis(time_ms as i64)?;
    Some(
        utc.with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    )
}

fn format_dedup_tooltip<Tz>(params: &[TooltipParam], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let unique = dedup_by_series_name(params);

    let header = unique
        .first()
        .and_then(|first| first.time())
        .and_then(|time| format_timestamp(time, tz))
        .map(|stamp| format!("<div style=\"font-weight:600;margin-bottom:4px;\">{stamp}</div>"))
        .unwrap_or_default();

    let rows: Vec<String> = unique
        .iter()
        .map(|param| {
            let value = param
                .sample()
                .map_or_else(|| "-".to_owned(), |v| v.to_string());
            format!(
                "{} {}: <strong>{}</strong>",
                param.marker,
                escape_html(&param.series_name),
                value
            )
        })
        .collect();

    format!("{header}{}", rows.join("<br/>"))
}
