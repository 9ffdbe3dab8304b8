//! kumo-charts: chart components for the Kumo design system.
//!
//! The crate binds declarative chart options to a pluggable rendering engine
//! ([`api::ChartAdapter`]), derives timeseries options with dashed incomplete
//! segments and brush selection ([`api::TimeseriesChart`]), and ships the
//! color palette, legend markup and documentation surface around them.

pub mod api;
pub mod core;
pub mod docs;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartAdapter, ChartEngine, ChartOption, EngineFactory, TimeseriesChart};
pub use crate::core::{ChartPalette, SemanticColor};
pub use error::{ChartError, ChartResult};
