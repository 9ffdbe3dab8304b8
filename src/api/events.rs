use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::interaction::BrushEndParams;

macro_rules! chart_events {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Engine events that may be proxied to caller handlers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ChartEventKind {
            $(#[serde(rename = $name)] $variant,)+
        }

        impl ChartEventKind {
            pub const ALL: &'static [ChartEventKind] = &[$(ChartEventKind::$variant,)+];

            /// Event name as registered on the engine.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(ChartEventKind::$variant => $name,)+
                }
            }
        }
    };
}

chart_events! {
    Click => "click",
    DblClick => "dblclick",
    MouseDown => "mousedown",
    MouseMove => "mousemove",
    MouseUp => "mouseup",
    MouseOver => "mouseover",
    MouseOut => "mouseout",
    GlobalOut => "globalout",
    ContextMenu => "contextmenu",
    LegendSelectChanged => "legendselectchanged",
    LegendSelected => "legendselected",
    LegendUnselected => "legendunselected",
    LegendScroll => "legendscroll",
    DataZoom => "datazoom",
    DataRangeSelected => "datarangeselected",
    TimelineChanged => "timelinechanged",
    TimelinePlayChanged => "timelineplaychanged",
    Restore => "restore",
    DataViewChanged => "dataviewchanged",
    MagicTypeChanged => "magictypechanged",
    PieSelectChanged => "pieselectchanged",
    PieSelected => "pieselected",
    PieUnselected => "pieunselected",
    MapSelectChanged => "mapselectchanged",
    MapSelected => "mapselected",
    MapUnselected => "mapunselected",
    GeoSelectChanged => "geoselectchanged",
    GeoSelected => "geoselected",
    GeoUnselected => "geounselected",
    AxisAreaSelected => "axisareaselected",
    Brush => "brush",
    BrushSelected => "brushselected",
    BrushEnd => "brushend",
}

impl fmt::Display for ChartEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartEventKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ChartError::InvalidData(format!("unsupported chart event `{s}`")))
    }
}

/// Payload of pointer events targeting a chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseEventParams {
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendSelectChangedParams {
    pub name: String,
    pub selected: IndexMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventParams {
    Mouse(MouseEventParams),
    LegendSelectChanged(LegendSelectChangedParams),
    BrushEnd(BrushEndParams),
    /// Events without a typed payload pass the engine's params through as-is.
    Raw(serde_json::Value),
}

impl EventParams {
    /// Decodes a raw engine payload into the typed shape of `kind`.
    pub fn decode(kind: ChartEventKind, raw: serde_json::Value) -> Result<Self, ChartError> {
        use ChartEventKind as K;
        Ok(match kind {
            K::Click | K::DblClick | K::MouseDown | K::MouseMove | K::MouseUp | K::MouseOver
            | K::MouseOut => EventParams::Mouse(serde_json::from_value(raw)?),
            K::LegendSelectChanged => EventParams::LegendSelectChanged(serde_json::from_value(raw)?),
            K::BrushEnd => EventParams::BrushEnd(serde_json::from_value(raw)?),
            _ => EventParams::Raw(raw),
        })
    }
}

pub type EventHandler = Rc<dyn Fn(&EventParams)>;

/// Caller-supplied handlers keyed by event, in insertion order.
#[derive(Clone, Default)]
pub struct EventHandlers {
    handlers: IndexMap<ChartEventKind, EventHandler>,
}

impl EventHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, kind: ChartEventKind, handler: impl Fn(&EventParams) + 'static) -> Self {
        self.insert(kind, handler);
        self
    }

    pub fn insert(&mut self, kind: ChartEventKind, handler: impl Fn(&EventParams) + 'static) {
        self.handlers.insert(kind, Rc::new(handler));
    }

    pub fn remove(&mut self, kind: ChartEventKind) -> bool {
        self.handlers.shift_remove(&kind).is_some()
    }

    #[must_use]
    pub fn get(&self, kind: ChartEventKind) -> Option<&EventHandler> {
        self.handlers.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: ChartEventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ChartEventKind> + '_ {
        self.handlers.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

/// Per-event wrapper bound on the engine.
///
/// The wrapper resolves the caller's handler at dispatch time, so its
/// identity stays fixed while the handler behind it is swapped freely.
#[derive(Clone)]
pub struct EventDispatcher {
    kind: ChartEventKind,
    inner: Rc<dyn Fn(&EventParams)>,
}

impl EventDispatcher {
    pub(crate) fn new(kind: ChartEventKind, handlers: Rc<RefCell<EventHandlers>>) -> Self {
        let inner: Rc<dyn Fn(&EventParams)> = Rc::new(move |params: &EventParams| {
            let handler = handlers.borrow().get(kind).cloned();
            if let Some(handler) = handler {
                handler(params);
            }
        });
        Self { kind, inner }
    }

    #[must_use]
    pub fn kind(&self) -> ChartEventKind {
        self.kind
    }

    pub fn dispatch(&self, params: &EventParams) {
        (self.inner)(params);
    }

    /// Identity comparison, the equivalent of handler reference equality.
    #[must_use]
    pub fn same_as(&self, other: &EventDispatcher) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("kind", &self.kind)
            .field("ptr", &Rc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
