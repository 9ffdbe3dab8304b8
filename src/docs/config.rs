use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

/// Documentation server for the chart components.
#[derive(Debug, Clone, Parser)]
#[command(name = "docs_server", version, about)]
pub struct DocsServerArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:4321")]
    pub listen: SocketAddr,

    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`, `kumo_charts=trace`).
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    /// Simulated network delay of the select loading demo, in milliseconds.
    #[arg(long, default_value_t = 2_000)]
    pub select_delay_ms: u64,
}

impl DocsServerArgs {
    #[must_use]
    pub fn select_delay(&self) -> Duration {
        Duration::from_millis(self.select_delay_ms)
    }
}
