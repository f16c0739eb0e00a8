//! Headless entry point: wires the client together and runs the event loop
//! until interrupted. A rendering layer sits on top of [`App`] by reading
//! state each frame; this binary drives the same loop without one.

use koishop::app::App;
use koishop::config::ClientConfig;
use koishop::services::session::FileSessionStore;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("koishop=info")),
        )
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting koi shop client");

    let store = Arc::new(FileSessionStore::open("session.json").await);

    let mut app = App::new(config, store);
    app.start().await;

    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                app.on_tick();
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                app.shutdown();
                break;
            }
        }
    }
}
