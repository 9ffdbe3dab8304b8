use serde::{Deserialize, Serialize};

use crate::core::TimePoint;
use crate::error::ChartResult;
use crate::interaction::{BrushMode, BrushType};

use super::tooltip::TooltipFormatter;

/// Declarative configuration handed to the rendering engine.
///
/// Field names serialize in the engine's camelCase option schema. Every
/// `set_option` call replaces the previous configuration wholesale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria: Option<AriaOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush: Option<BrushOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbox: Option<ToolboxOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOption>,
    #[serde(default)]
    pub series: Vec<SeriesOption>,
}

impl ChartOption {
    #[must_use]
    pub fn with_series(mut self, series: Vec<SeriesOption>) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_toolbox_hidden(mut self) -> Self {
        self.toolbox = Some(ToolboxOption { show: false });
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_value(&self) -> ChartResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AriaOption {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolboxOption {
    pub show: bool,
}

/// Region selection tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushOption {
    pub snap_to_data: bool,
    pub x_axis_index: String,
    pub brush_type: BrushType,
    pub brush_mode: BrushMode,
    pub out_of_brush: OutOfBrush,
    pub brush_style: BrushStyle,
}

impl Default for BrushOption {
    fn default() -> Self {
        Self {
            snap_to_data: true,
            x_axis_index: "all".to_owned(),
            brush_type: BrushType::LineX,
            brush_mode: BrushMode::Single,
            out_of_brush: OutOfBrush { color_alpha: 0.3 },
            brush_style: BrushStyle {
                border_width: 1.0,
                color: "rgba(120,140,180,0.3)".to_owned(),
                border_color: "rgba(120,140,180,0.8)".to_owned(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfBrush {
    pub color_alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushStyle {
    pub border_width: f64,
    pub color: String,
    pub border_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPointerType {
    Line,
    Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: AxisPointerType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOption {
    pub trigger: TooltipTrigger,
    pub axis_pointer: AxisPointer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<TooltipFormatter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Time,
    Value,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLocation {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(rename = "type")]
    pub kind: LineType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl LineStyle {
    #[must_use]
    pub fn dashed() -> Self {
        Self {
            kind: LineType::Dashed,
            width: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub margin: f64,
}

/// Shared shape of the x and y axis options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOption {
    #[serde(rename = "type")]
    pub kind: AxisType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_location: Option<NameLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<Toggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u32>,
}

impl AxisOption {
    #[must_use]
    pub fn new(kind: AxisType) -> Self {
        Self {
            kind,
            name: None,
            name_location: None,
            name_gap: None,
            split_line: None,
            axis_line: None,
            axis_tick: None,
            axis_label: None,
            split_number: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOption {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Bar,
    Pie,
}

/// Value with a category label, as used by pie series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub value: f64,
    pub name: String,
}

impl NamedValue {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Points(Vec<TimePoint>),
    Named(Vec<NamedValue>),
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Points(points) => points.len(),
            SeriesData::Named(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(rename = "type")]
    pub kind: SeriesType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: SeriesData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

impl SeriesOption {
    /// Solid line without point symbols.
    #[must_use]
    pub fn line(name: impl Into<String>, color: impl Into<String>, data: Vec<TimePoint>) -> Self {
        Self {
            kind: SeriesType::Line,
            name: Some(name.into()),
            color: Some(color.into()),
            data: SeriesData::Points(data),
            stack: None,
            show_symbol: Some(false),
            line_style: None,
        }
    }

    /// Dashed line marking provisional data.
    #[must_use]
    pub fn dashed_line(
        name: impl Into<String>,
        color: impl Into<String>,
        data: Vec<TimePoint>,
    ) -> Self {
        Self {
            line_style: Some(LineStyle::dashed()),
            ..Self::line(name, color, data)
        }
    }

    /// Bar stacked with every other bar series of the chart.
    #[must_use]
    pub fn stacked_bar(
        name: impl Into<String>,
        color: impl Into<String>,
        data: Vec<TimePoint>,
    ) -> Self {
        Self {
            kind: SeriesType::Bar,
            name: Some(name.into()),
            color: Some(color.into()),
            data: SeriesData::Points(data),
            stack: Some("total".to_owned()),
            show_symbol: None,
            line_style: None,
        }
    }

    #[must_use]
    pub fn pie(data: Vec<NamedValue>) -> Self {
        Self {
            kind: SeriesType::Pie,
            name: None,
            color: None,
            data: SeriesData::Named(data),
            stack: None,
            show_symbol: None,
            line_style: None,
        }
    }

    #[must_use]
    pub fn is_dashed(&self) -> bool {
        matches!(
            self.line_style,
            Some(LineStyle {
                kind: LineType::Dashed,
                ..
            })
        )
    }
}
