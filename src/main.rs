//! Static dev host for the landing page.
//!
//! Serves the HTML, CSS, and compiled WASM bundle from one directory so the
//! page can be opened at `http://localhost:8080/` during development.

mod config;
mod routes;

use config::{ServeConfig, ServeError};

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    tracing_subscriber::fmt::init();

    let config = ServeConfig::from_env()?;
    config.check_site_dir()?;

    let app = routes::app(&config.site_dir);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, site_dir = %config.site_dir.display(), "landing listening");
    axum::serve(listener, app).await?;
    Ok(())
}
