//! Documentation application: demo catalogue, registry and build metadata.
//!
//! The HTTP server, its configuration and the simulated loading timer are
//! behind the `docs-server` feature.

pub mod build_info;
pub mod demos;
pub mod registry;

#[cfg(feature = "docs-server")]
pub mod config;
#[cfg(feature = "docs-server")]
pub mod loading;
#[cfg(feature = "docs-server")]
pub mod server;

pub use build_info::{BUILD_INFO, BuildInfo};
pub use demos::{DemoChart, DemoName, build_series_data, demo_chart};
pub use registry::COMPONENT_REGISTRY_JSON;
