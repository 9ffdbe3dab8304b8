//! Presentational output: legend markup and the headless engine.

mod legend;
mod markup;
mod null_engine;

pub use legend::{LegendItem, LegendVariant};
pub use markup::escape_html;
pub use null_engine::{EngineCall, EngineProbe, NullEngine, NullEngineFactory};
