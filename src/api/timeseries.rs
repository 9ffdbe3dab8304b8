use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{IncompleteRange, SeriesKind, TimeSeries, Viewport, partition_series};
use crate::error::ChartResult;
use crate::interaction::BrushCursorState;

use super::adapter::{AdapterState, ChartAdapter, ChartProps, DEFAULT_CHART_HEIGHT, EngineHandle};
use super::engine::{ChartAction, EngineFactory};
use super::events::{ChartEventKind, EventHandlers, EventParams};
use super::option::{
    AriaOption, AxisLabel, AxisOption, AxisPointer, AxisPointerType, AxisType, BrushOption,
    ChartOption, GridOption, LineStyle, NameLocation, SeriesOption, SplitLine, Toggle,
    TooltipOption, TooltipTrigger,
};
use super::tooltip::TooltipFormatter;

/// Number of gridline splits on the time axis.
pub const X_AXIS_SPLIT_NUMBER: u32 = 5;

/// Receives `(from, to)` epoch milliseconds of a completed brush selection.
pub type TimeRangeCallback = Rc<dyn Fn(f64, f64)>;

#[derive(Clone)]
pub struct TimeseriesChartProps {
    pub kind: SeriesKind,
    pub data: Vec<TimeSeries>,
    pub x_axis_name: Option<String>,
    pub y_axis_name: Option<String>,
    /// Gridline splits on the value axis; engine default when `None`.
    pub y_axis_tick_number: Option<u32>,
    pub incomplete: IncompleteRange,
    pub height: u32,
    pub dark_mode: bool,
    pub on_time_range_change: Option<TimeRangeCallback>,
}

impl Default for TimeseriesChartProps {
    fn default() -> Self {
        Self {
            kind: SeriesKind::Line,
            data: Vec::new(),
            x_axis_name: None,
            y_axis_name: None,
            y_axis_tick_number: None,
            incomplete: IncompleteRange::default(),
            height: DEFAULT_CHART_HEIGHT,
            dark_mode: false,
            on_time_range_change: None,
        }
    }
}

impl fmt::Debug for TimeseriesChartProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeseriesChartProps")
            .field("kind", &self.kind)
            .field("series", &self.data.len())
            .field("x_axis_name", &self.x_axis_name)
            .field("y_axis_name", &self.y_axis_name)
            .field("y_axis_tick_number", &self.y_axis_tick_number)
            .field("incomplete", &self.incomplete)
            .field("height", &self.height)
            .field("dark_mode", &self.dark_mode)
            .field("has_range_callback", &self.on_time_range_change.is_some())
            .finish()
    }
}

impl TimeseriesChartProps {
    #[must_use]
    pub fn new(data: Vec<TimeSeries>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: SeriesKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_x_axis_name(mut self, name: impl Into<String>) -> Self {
        self.x_axis_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_name(mut self, name: impl Into<String>) -> Self {
        self.y_axis_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_tick_number(mut self, splits: u32) -> Self {
        self.y_axis_tick_number = Some(splits);
        self
    }

    #[must_use]
    pub fn with_incomplete(mut self, incomplete: IncompleteRange) -> Self {
        self.incomplete = incomplete;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    #[must_use]
    pub fn with_time_range_callback(mut self, callback: impl Fn(f64, f64) + 'static) -> Self {
        self.on_time_range_change = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn has_time_range_callback(&self) -> bool {
        self.on_time_range_change.is_some()
    }
}

/// Emits the solid entry for `series` followed by its dashed incomplete entries.
///
/// Every entry carries the series name and color so legends and tooltips can
/// fold them back together.
#[must_use]
pub fn series_entries(
    series: &TimeSeries,
    kind: SeriesKind,
    incomplete: IncompleteRange,
) -> SmallVec<[SeriesOption; 3]> {
    let segments = partition_series(&series.data, kind, incomplete);
    let mut entries = SmallVec::new();

    let complete = segments.complete.to_vec();
    entries.push(match kind {
        SeriesKind::Line => SeriesOption::line(&series.name, &series.color, complete),
        SeriesKind::Bar => SeriesOption::stacked_bar(&series.name, &series.color, complete),
    });

    for dashed in [segments.incomplete_before, segments.incomplete_after] {
        if !dashed.is_empty() {
            entries.push(SeriesOption::dashed_line(&series.name, &series.color, dashed));
        }
    }
    entries
}

/// Builds the complete chart option for a timeseries chart.
#[must_use]
pub fn build_timeseries_option(props: &TimeseriesChartProps) -> ChartOption {
    let series: Vec<SeriesOption> = props
        .data
        .iter()
        .flat_map(|s| series_entries(s, props.kind, props.incomplete))
        .collect();

    let x_axis = AxisOption {
        name: props.x_axis_name.clone(),
        name_location: Some(NameLocation::Middle),
        name_gap: Some(30),
        split_line: Some(SplitLine {
            show: false,
            line_style: None,
        }),
        axis_line: Some(Toggle { show: false }),
        split_number: Some(X_AXIS_SPLIT_NUMBER),
        ..AxisOption::new(AxisType::Time)
    };

    let y_axis = AxisOption {
        name: props.y_axis_name.clone(),
        name_location: Some(NameLocation::Middle),
        name_gap: Some(40),
        axis_tick: Some(Toggle { show: true }),
        axis_label: Some(AxisLabel { margin: 15.0 }),
        split_line: Some(SplitLine {
            show: true,
            line_style: Some(LineStyle {
                width: Some(1.0),
                ..LineStyle::dashed()
            }),
        }),
        split_number: props.y_axis_tick_number,
        ..AxisOption::new(AxisType::Value)
    };

    ChartOption {
        aria: Some(AriaOption { enabled: true }),
        brush: props
            .has_time_range_callback()
            .then(BrushOption::default),
        tooltip: Some(TooltipOption {
            trigger: TooltipTrigger::Axis,
            axis_pointer: AxisPointer {
                kind: AxisPointerType::Shadow,
            },
            formatter: Some(TooltipFormatter::DedupBySeriesName),
        }),
        background_color: Some("transparent".to_owned()),
        toolbox: None,
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        grid: Some(GridOption {
            left: if props.y_axis_name.is_some() { 30 } else { 24 },
            right: 24,
            top: 24,
            bottom: if props.x_axis_name.is_some() { 30 } else { 24 },
        }),
        series,
    }
    .with_toolbox_hidden()
}

/// Handlers reporting brush selections through `callback`.
///
/// The brush region is cleared right after reporting, so a selection is a
/// momentary gesture rather than a persistent overlay.
pub fn time_range_handlers<E>(
    callback: Option<TimeRangeCallback>,
    handle: EngineHandle<E>,
) -> EventHandlers
where
    E: super::engine::ChartEngine + 'static,
{
    let Some(callback) = callback else {
        return EventHandlers::new();
    };
    EventHandlers::new().with(ChartEventKind::BrushEnd, move |params| {
        let EventParams::BrushEnd(brush) = params else {
            return;
        };
        let Some(range) = brush.first_range() else {
            debug!("brush ended without a selected area");
            return;
        };
        callback(range.from, range.to);
        handle.dispatch_action(ChartAction::clear_brush());
    })
}

/// Timeseries chart component: transform + adapter + brush selection.
pub struct TimeseriesChart<F: EngineFactory>
where
    F::Engine: 'static,
{
    adapter: ChartAdapter<F>,
    props: TimeseriesChartProps,
    cursor: BrushCursorState,
}

impl<F: EngineFactory> TimeseriesChart<F>
where
    F::Engine: 'static,
{
    #[must_use]
    pub fn new(factory: F, props: TimeseriesChartProps) -> Self {
        let chart_props = ChartProps::new(build_timeseries_option(&props))
            .with_dark_mode(props.dark_mode)
            .with_height(props.height);
        let mut adapter = ChartAdapter::new(factory, chart_props);
        adapter.set_events(time_range_handlers(
            props.on_time_range_change.clone(),
            adapter.handle(),
        ));
        Self {
            adapter,
            props,
            cursor: BrushCursorState::default(),
        }
    }

    #[must_use]
    pub fn props(&self) -> &TimeseriesChartProps {
        &self.props
    }

    #[must_use]
    pub fn adapter(&self) -> &ChartAdapter<F> {
        &self.adapter
    }

    #[must_use]
    pub fn handle(&self) -> EngineHandle<F::Engine> {
        self.adapter.handle()
    }

    #[must_use]
    pub fn is_brush_cursor_engaged(&self) -> bool {
        self.cursor.is_engaged()
    }

    pub fn mount(&mut self, container: Option<F::Container>) -> ChartResult<AdapterState> {
        let state = self.adapter.mount(container)?;
        self.sync_cursor();
        Ok(state)
    }

    /// Applies new props: re-derives the option, swaps handlers, re-themes.
    pub fn set_props(&mut self, props: TimeseriesChartProps) -> ChartResult<()> {
        let dark_mode = props.dark_mode;
        self.props = props;

        self.adapter.set_height(self.props.height);
        self.adapter
            .set_option(build_timeseries_option(&self.props));
        self.adapter.set_events(time_range_handlers(
            self.props.on_time_range_change.clone(),
            self.adapter.handle(),
        ));
        self.set_dark_mode(dark_mode)
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> ChartResult<()> {
        self.props.dark_mode = dark_mode;
        if self.adapter.props().dark_mode != dark_mode {
            let reinit = self.adapter.set_dark_mode(dark_mode);
            // The previous engine, and its cursor, is gone even when re-init failed.
            self.cursor.reset();
            reinit?;
        }
        self.sync_cursor();
        Ok(())
    }

    pub fn container_resized(&mut self, viewport: Viewport) -> bool {
        self.adapter.container_resized(viewport)
    }

    pub fn unmount(&mut self) {
        if let Some(action) = self.cursor.sync(false) {
            self.adapter.handle().dispatch_action(action);
        }
        self.adapter.unmount();
    }

    fn sync_cursor(&mut self) {
        if !self.adapter.is_mounted() {
            return;
        }
        let want = self.props.has_time_range_callback();
        if let Some(action) = self.cursor.sync(want) {
            self.adapter.handle().dispatch_action(action);
        }
    }
}

impl<F: EngineFactory> Drop for TimeseriesChart<F>
where
    F::Engine: 'static,
{
    fn drop(&mut self) {
        self.unmount();
    }
}
