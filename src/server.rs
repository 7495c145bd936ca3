// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface: `GET /search?q=...` plus static assets for the browser UI.
//!
//! The searcher is loaded once before the listener binds and then shared as
//! router state behind an `Arc`. Handlers only read it, so there is no locking.
//! Searching is CPU-bound, so each request runs on the blocking pool instead
//! of stalling an async worker.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::search::Searcher;

/// Body of the 400 response for a missing or empty `q`.
pub const MISSING_QUERY: &str = "missing search query in URL params";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Build the router. Anything other than `/search` is looked up in `static_dir`.
pub fn router(searcher: Arc<Searcher>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(trace_layer())
        .with_state(searcher)
}

/// Request tracing at INFO, so the default log filter shows every request.
fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

pub async fn handle_search(
    State(searcher): State<Arc<Searcher>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response(),
    };

    match tokio::task::spawn_blocking(move || searcher.search(&query)).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "search task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "search failed").into_response()
        }
    }
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(
    searcher: Arc<Searcher>,
    static_dir: impl AsRef<Path>,
    addr: SocketAddr,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(searcher, static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
