use serde::{Deserialize, Serialize};

use crate::api::ChartAction;

/// Shape of the brush region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrushType {
    /// Horizontal band spanning the time axis only.
    LineX,
    LineY,
    Rect,
    Polygon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushMode {
    Single,
    Multiple,
}

/// Inclusive time range in epoch milliseconds reported by a brush selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: f64,
    pub to: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }
}

/// One selected area of a `brushend` event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushArea {
    #[serde(default)]
    pub coord_range: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush_type: Option<BrushType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<String>,
}

impl BrushArea {
    #[must_use]
    pub fn line_x(from: f64, to: f64) -> Self {
        Self {
            coord_range: vec![from, to],
            brush_type: Some(BrushType::LineX),
            panel_id: None,
        }
    }

    /// Time range covered by a horizontal area, `None` when coordinates are missing.
    #[must_use]
    pub fn time_range(&self) -> Option<TimeRange> {
        match self.coord_range.as_slice() {
            [from, to, ..] => Some(TimeRange::new(*from, *to)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrushEndParams {
    #[serde(default)]
    pub areas: Vec<BrushArea>,
}

impl BrushEndParams {
    #[must_use]
    pub fn first_range(&self) -> Option<TimeRange> {
        self.areas.first().and_then(BrushArea::time_range)
    }
}

/// Tracks whether the selection-drawing cursor currently owns pointer input.
///
/// The cursor is engaged while a range callback is present on a mounted chart
/// and released when the callback goes away or the chart unmounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrushCursorState {
    engaged: bool,
}

impl BrushCursorState {
    #[must_use]
    pub fn is_engaged(self) -> bool {
        self.engaged
    }

    /// Returns the action to dispatch when the desired state differs.
    pub fn sync(&mut self, want_engaged: bool) -> Option<ChartAction> {
        if self.engaged == want_engaged {
            return None;
        }
        self.engaged = want_engaged;
        Some(if want_engaged {
            ChartAction::take_brush_cursor(BrushType::LineX, BrushMode::Single)
        } else {
            ChartAction::release_brush_cursor()
        })
    }

    /// Forgets the engaged flag without emitting anything, used once the
    /// engine backing the cursor has been disposed.
    pub fn reset(&mut self) {
        self.engaged = false;
    }
}
