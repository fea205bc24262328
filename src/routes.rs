//! HTTP routes for the dev host.
//!
//! `/healthz` answers `ok`; every other path is a file under the site
//! directory, with `index.html` served for directories. The compiled WASM
//! bundle lives under the same tree (`site/pkg`).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn app(site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true);
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}
