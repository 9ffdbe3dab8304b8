use serde::{Deserialize, Serialize, Serializer};

use crate::core::ChartPalette;
use crate::error::ChartResult;
use crate::interaction::{BrushArea, BrushMode, BrushType};

use super::events::EventDispatcher;
use super::option::ChartOption;

/// Contract implemented by any rendering engine instance.
///
/// An instance is bound to exactly one container and owned by exactly one
/// adapter. Calls arrive sequentially from the UI thread.
pub trait ChartEngine {
    fn set_option(&mut self, option: &ChartOption, opts: SetOptionOpts);

    /// Registers `dispatcher` for its event kind.
    fn on(&mut self, dispatcher: EventDispatcher);

    /// Removes a previously registered dispatcher, matched by identity.
    fn off(&mut self, dispatcher: &EventDispatcher);

    /// Recomputes layout after the container changed size.
    fn resize(&mut self);

    fn dispatch_action(&mut self, action: ChartAction);

    /// Releases the instance. No other call is made afterwards.
    fn dispose(&mut self);
}

/// Creates engine instances bound to a host container.
pub trait EngineFactory {
    type Container;
    type Engine: ChartEngine;

    fn init(&mut self, container: &Self::Container, theme: &EngineTheme)
    -> ChartResult<Self::Engine>;
}

/// How `set_option` applies a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOptionOpts {
    /// Replace instead of merging into the previous option.
    pub not_merge: bool,
    /// Defer the update to the next idle frame.
    pub lazy_update: bool,
}

impl SetOptionOpts {
    /// Replacing, deferred update used for every prop change.
    pub const REPLACE_LAZY: Self = Self {
        not_merge: true,
        lazy_update: true,
    };
}

/// Theme passed to the engine at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EngineTheme {
    /// Built-in theme registered under a name.
    Named(String),
    /// Inline theme overriding the categorical color list.
    Custom { color: Vec<String> },
}

impl EngineTheme {
    pub const DARK_THEME_NAME: &'static str = "dark";

    /// Dark mode uses the engine's `dark` theme; light mode ships the light
    /// categorical palette.
    #[must_use]
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Named(Self::DARK_THEME_NAME.to_owned())
        } else {
            Self::Custom {
                color: ChartPalette::categorical_colors(false)
                    .iter()
                    .map(|c| (*c).to_owned())
                    .collect(),
            }
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Named(name) if name == Self::DARK_THEME_NAME)
    }
}

/// Imperative command dispatched to a live engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartAction {
    /// Replaces the drawn brush areas; an empty list clears the selection.
    Brush { areas: Vec<BrushArea> },
    /// Hands pointer input to a drawing tool.
    #[serde(rename_all = "camelCase")]
    TakeGlobalCursor {
        key: String,
        brush_option: BrushCursorOption,
    },
}

impl ChartAction {
    #[must_use]
    pub fn clear_brush() -> Self {
        Self::Brush { areas: Vec::new() }
    }

    #[must_use]
    pub fn take_brush_cursor(brush_type: BrushType, brush_mode: BrushMode) -> Self {
        Self::TakeGlobalCursor {
            key: "brush".to_owned(),
            brush_option: BrushCursorOption {
                brush_type: Some(brush_type),
                brush_mode: Some(brush_mode),
            },
        }
    }

    #[must_use]
    pub fn release_brush_cursor() -> Self {
        Self::TakeGlobalCursor {
            key: "brush".to_owned(),
            brush_option: BrushCursorOption {
                brush_type: None,
                brush_mode: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushCursorOption {
    /// `None` serializes as `false`, which turns the drawing cursor off.
    #[serde(serialize_with = "serialize_brush_type")]
    pub brush_type: Option<BrushType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_mode: Option<BrushMode>,
}

fn serialize_brush_type<S: Serializer>(
    brush_type: &Option<BrushType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match brush_type {
        Some(kind) => kind.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
