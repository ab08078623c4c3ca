//! Earthquake Dashboard — Binary Entrypoint
//! Boots the Axum HTTP server with the dashboard routes and `/metrics`.

use quake_dashboard::{config::DashboardConfig, dashboard_from_config, metrics::Metrics, router};
use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact tracing logs, filter from `RUST_LOG`.
/// `try_init` leaves an already installed subscriber (the runtime's) in place.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quake_dashboard=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = DashboardConfig::load_default()?;
    tracing::info!(
        feed_url = %cfg.feed_url,
        cache_path = %cfg.cache_path.display(),
        "dashboard config loaded"
    );

    let mut app = router(dashboard_from_config(&cfg));
    match Metrics::init() {
        Ok(m) => app = app.merge(m.router()),
        Err(e) => tracing::warn!(error = ?e, "metrics disabled"),
    }

    Ok(app.into())
}
