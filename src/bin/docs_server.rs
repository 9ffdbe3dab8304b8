use clap::Parser;
use tokio::sync::watch;
use tracing::{info, warn};

use kumo_charts::docs::config::DocsServerArgs;
use kumo_charts::docs::server::{AppState, DocsServer};
use kumo_charts::telemetry::init_default_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = DocsServerArgs::parse();
    if !init_default_tracing(&args.log_filter) {
        eprintln!("tracing subscriber already installed; keeping it");
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received ctrl-c"),
            Err(err) => warn!(error = %err, "failed to listen for ctrl-c"),
        }
        let _ = shutdown_tx.send(true);
    });

    let state = AppState {
        select_delay: args.select_delay(),
    };
    DocsServer::new(state, args.listen).run(shutdown_rx).await
}
