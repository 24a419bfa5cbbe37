//! API Handlers
//!
//! HTTP request handlers for each answer cache endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};

use crate::chunk;
use crate::config::Config;
use crate::error::{ResolveError, Result};
use crate::models::{AskRequest, AskResponse, HealthResponse, StatsResponse};
use crate::resolve::Resolver;
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Coalescing resolver in front of the upstream generator
    pub resolver: Arc<Resolver>,
    /// Client for the upstream generation endpoint
    pub upstream: Arc<UpstreamClient>,
    /// Per-chunk byte limit for answer segmentation
    pub chunk_max_bytes: usize,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(resolver: Resolver, upstream: UpstreamClient, chunk_max_bytes: usize) -> Self {
        Self {
            resolver: Arc::new(resolver),
            upstream: Arc::new(upstream),
            chunk_max_bytes,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let resolver = Resolver::new(Duration::from_secs(config.cache_ttl_secs));
        let upstream = UpstreamClient::from_config(config);
        Self::new(resolver, upstream, config.chunk_max_bytes)
    }
}

/// Handler for POST /ask
///
/// Resolves a question through the cache and coalescer, invoking the
/// upstream generator at most once per question across all concurrent
/// requests, and returns the answer with its chunked form.
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(ResolveError::InvalidRequest(error_msg));
    }

    let upstream = Arc::clone(&state.upstream);
    let answer = state
        .resolver
        .resolve(req.key(), |question| async move {
            upstream.generate(&question).await
        })
        .await?;

    let chunks = chunk::split(&answer, state.chunk_max_bytes);

    Ok(Json(AskResponse::new(req.key(), answer, chunks)))
}

/// Handler for GET /stats
///
/// Returns current resolver counters and cache occupancy.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let metrics = state.resolver.metrics();
    let entries = state.resolver.entry_count().await;

    Json(StatsResponse::new(metrics, entries))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
