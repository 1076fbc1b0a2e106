//! HTTP surface of the registration wizard.
//!
//! One router serves the whole flow: language chooser, the eight
//! wizard pages, finalize, the success page, and raw file retrieval.

use std::net::SocketAddr;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Default listening port when neither config nor CLI set one.
pub const DEFAULT_PORT: u16 = 5000;

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::language::index))
        .route("/set-language", post(routes::language::set_language))
        .route(
            "/step/:n",
            get(routes::steps::show).post(routes::steps::submit),
        )
        .route("/submit", post(routes::finalize::submit))
        .route("/thank-you", get(routes::finalize::thank_you))
        .route("/uploads/:filename", get(routes::uploads::fetch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and run the server until it is shut down.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("membership portal listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_build_router() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.database = dir.path().join("members.db").to_string_lossy().to_string();
        config.paths.uploads = dir.path().join("uploads").to_string_lossy().to_string();

        let state = AppState::from_config(&config).unwrap();
        let _router = build_router(state);
        // Router builds without panicking
    }
}
