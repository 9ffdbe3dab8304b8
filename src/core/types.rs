use serde::{Deserialize, Serialize};

/// Pixel size of the container a chart is mounted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One sample of a time series: epoch milliseconds and value.
///
/// Serializes as a `[time, value]` pair, the shape time axes consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct TimePoint {
    pub time: f64,
    pub value: f64,
}

impl TimePoint {
    #[must_use]
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<TimePoint> for [f64; 2] {
    fn from(point: TimePoint) -> Self {
        [point.time, point.value]
    }
}

impl From<[f64; 2]> for TimePoint {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<(f64, f64)> for TimePoint {
    fn from((time, value): (f64, f64)) -> Self {
        Self::new(time, value)
    }
}

/// Named, colored, time-ordered samples.
///
/// Timestamps are expected to be non-decreasing but this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub name: String,
    pub data: Vec<TimePoint>,
    pub color: String,
}

impl TimeSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<TimePoint>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data,
            color: color.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Visual style of the primary series entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
}

/// Thresholds marking provisional data at either end of a series.
///
/// Points at or before `before`, and at or after `after`, render dashed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IncompleteRange {
    pub before: Option<f64>,
    pub after: Option<f64>,
}

impl IncompleteRange {
    #[must_use]
    pub fn before(time: f64) -> Self {
        Self {
            before: Some(time),
            after: None,
        }
    }

    #[must_use]
    pub fn after(time: f64) -> Self {
        Self {
            before: None,
            after: Some(time),
        }
    }

    #[must_use]
    pub fn with_before(mut self, time: f64) -> Self {
        self.before = Some(time);
        self
    }

    #[must_use]
    pub fn with_after(mut self, time: f64) -> Self {
        self.after = Some(time);
        self
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}
