//! HTTP API Layer
//!
//! This crate exposes the claim triage pipeline over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `POST /process-claim` and `GET /health`
//! - **Middleware**: claim reference generation and request tracing
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use domain_claims::Pipeline;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::{request_span, MakeClaimRef, CLAIM_REF_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub config: ApiConfig,
}

/// Creates the main API router with the standard pipeline
pub fn create_router(config: ApiConfig) -> Router {
    create_router_with_pipeline(Pipeline::standard(), config)
}

/// Creates the API router around a specific pipeline
///
/// # Arguments
///
/// * `pipeline` - The stage sequence every claim runs through
/// * `config` - API configuration
pub fn create_router_with_pipeline(pipeline: Pipeline, config: ApiConfig) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
        config,
    };
    let claim_ref = HeaderName::from_static(CLAIM_REF_HEADER);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/process-claim", post(claims::process_claim))
        .fallback(handlers::not_found)
        .layer(PropagateRequestIdLayer::new(claim_ref.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::new(claim_ref, MakeClaimRef))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
