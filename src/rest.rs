// Copyright 2026 Routemap Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface serving the sitemap.
//!
//! Requests whose path equals `/sitemap.xml` (ASCII case-insensitive) get a
//! freshly generated document with content type `application/xml`; every
//! other path gets 404. Generation is pure and per-request, so concurrent
//! requests need no coordination and there is no cross-request cache.

use crate::catalog::EndpointCatalog;
use crate::sitemap;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Immutable per-process state shared across requests.
pub struct AppState {
    /// Absolute application root URL, trailing slash already trimmed.
    pub root_url: String,
    pub catalog: EndpointCatalog,
}

/// Build the axum Router: a health probe plus the sitemap fallback.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .fallback(serve_sitemap)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind the listener and serve until shutdown.
pub async fn start(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("sitemap available at http://{addr}/sitemap.xml");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Trigger condition: path equals `/sitemap.xml`, case-insensitively.
/// Everything else bypasses generation entirely.
async fn serve_sitemap(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    if !uri.path().eq_ignore_ascii_case("/sitemap.xml") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let body = sitemap::generate(&state.root_url, Utc::now(), &state.catalog);
    tracing::debug!(bytes = body.len(), "sitemap rendered");
    ([(header::CONTENT_TYPE, "application/xml")], body).into_response()
}
