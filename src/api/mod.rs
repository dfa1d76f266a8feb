// HTTP API routes (location search, catalog listing, health, metrics).

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::format::{self, FormatOptions, DEFAULT_SEPARATOR, DEFAULT_ZOOM};
use crate::metrics;
use crate::resolver::{self, ResolveError};

// ── Request types ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IzurviveParams {
    /// Free-text location search. Already URL-decoded by the extractor.
    pub search: Option<String>,
    /// Present (even valueless, as `?list`) to request the full catalog.
    pub list: Option<String>,
    pub max_results: Option<usize>,
    pub separator: Option<String>,
    pub zoom_level: Option<i64>,
}

// ── Shared application state ─────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

// ── Router ────────────────────────────────────────────────────────────

pub fn router(catalog: Arc<Catalog>) -> Router {
    let state = AppState { catalog };

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .route("/dayz/izurvive", get(izurvive))
        .with_state(state)
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "izurvive-backend" }))
}

async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}

/// Maps location names/searches to their izurvive.com deep links.
///
/// Chatbot command backend: every outcome, including user errors, is a
/// plain-text 200 response so bots can substitute the body verbatim.
async fn izurvive(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<IzurviveParams>,
) -> impl IntoResponse {
    let zoom = params.zoom_level.unwrap_or(DEFAULT_ZOOM);

    if params.list.is_some() {
        metrics::LISTING_REQUESTS_TOTAL.inc();
        let listing = format::listing(&state.catalog, zoom);
        if wants_json(&headers) {
            return Json(listing).into_response();
        }
        return format::listing_text(&listing).into_response();
    }

    let search = params.search.as_deref().map(str::trim).unwrap_or("");
    if search.is_empty() {
        return "Please specify ?search= or see a list of available locations: \
                /dayz/izurvive?list"
            .into_response();
    }

    let opts = FormatOptions {
        max_results: params.max_results.unwrap_or(1).max(1),
        separator: params
            .separator
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        zoom,
    };

    metrics::SEARCHES_TOTAL.inc();
    let started = Instant::now();
    let result = resolver::search(&state.catalog, search, opts.max_results);
    metrics::SEARCH_DURATION_SECONDS.observe(started.elapsed().as_secs_f64());

    match result {
        Ok(results) => format::join_search_results(&results, &opts).into_response(),
        Err(ResolveError::NoResults(search)) => {
            metrics::SEARCHES_NO_RESULTS_TOTAL.inc();
            tracing::info!("No location results for search: {search}");
            format!("No results found for search: {search}").into_response()
        }
        // The handler rejects blank input before resolving; same message.
        Err(ResolveError::BlankSearch) => {
            "Please specify ?search= or see a list of available locations: \
             /dayz/izurvive?list"
                .into_response()
        }
    }
}

/// Whether the caller asked for a JSON representation.
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));
        headers.insert(header::ACCEPT, "text/html".parse().unwrap());
        assert!(!wants_json(&headers));
        headers.insert(
            header::ACCEPT,
            "application/json, text/plain".parse().unwrap(),
        );
        assert!(wants_json(&headers));
    }
}
