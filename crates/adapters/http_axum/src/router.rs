//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::assets::AssetConfig;

/// Build the top-level axum [`Router`].
///
/// Serves files from the dashboard bundle; any GET without a matching file
/// receives the entry document so the client-side routes (`/`, `/actions`)
/// load the application. Other methods are answered `405`: trading
/// endpoints live on the trading web server, not here.
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(assets: &AssetConfig) -> Router {
    if !assets.is_built() {
        tracing::warn!(
            path = %assets.index_path().display(),
            "dashboard entry document not found; build the dashboard first"
        );
    }

    let files = ServeDir::new(&assets.dir).fallback(ServeFile::new(assets.index_path()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
