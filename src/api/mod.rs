//! Chart configuration model, engine seam and chart components.

mod adapter;
mod engine;
mod events;
mod option;
mod timeseries;
mod tooltip;

pub use adapter::{AdapterState, ChartAdapter, ChartProps, DEFAULT_CHART_HEIGHT, EngineHandle};
pub use engine::{
    BrushCursorOption, ChartAction, ChartEngine, EngineFactory, EngineTheme, SetOptionOpts,
};
pub use events::{
    ChartEventKind, EventDispatcher, EventHandler, EventHandlers, EventParams,
    LegendSelectChangedParams, MouseEventParams,
};
pub use option::{
    AriaOption, AxisLabel, AxisOption, AxisPointer, AxisPointerType, AxisType, BrushOption,
    BrushStyle, ChartOption, GridOption, LineStyle, LineType, NameLocation, NamedValue,
    OutOfBrush, SeriesData, SeriesOption, SeriesType, SplitLine, Toggle, ToolboxOption,
    TooltipOption, TooltipTrigger,
};
pub use timeseries::{
    TimeRangeCallback, TimeseriesChart, TimeseriesChartProps, X_AXIS_SPLIT_NUMBER,
    build_timeseries_option, series_entries, time_range_handlers,
};
pub use tooltip::{TooltipFormatter, TooltipParam, dedup_by_series_name, format_timestamp};
