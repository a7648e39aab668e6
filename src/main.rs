//! Portfolio site binary.
//!
//! Serves the server-rendered page (server feature) or boots the hydrated
//! client (web feature, wasm32).

use portfolio_site::app::App;

fn main() {
    #[cfg(feature = "server")]
    {
        if let Err(e) = init_logging() {
            eprintln!("Failed to initialize logging: {e:#}");
        }
    }

    tracing::info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_logging() -> anyhow::Result<()> {
    use portfolio_site::config::server;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = server::load_config()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(server::log_filter(&config))?)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::debug!("Configuration loaded, log filter: {}", config.log_filter);
    Ok(())
}
