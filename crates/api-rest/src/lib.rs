//! # API REST
//!
//! REST API implementation for MOAT, the mock ORCID v3.0 service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - Content negotiation between JSON and namespaced XML
//! - Request logging, CORS and the OpenAPI document
//!
//! Domain behaviour lives in `moat-core`; wire formats live in `orcid`.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;
pub mod logging;
pub mod negotiate;

use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use moat_core::{CoreConfig, PutCodeSource, RandomPutCodes, RecordStore, TokenResponse};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub use error::ApiError;
pub use negotiate::{Format, Negotiator};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub cfg: Arc<CoreConfig>,
    pub put_codes: Arc<dyn PutCodeSource>,
}

impl AppState {
    /// State with randomly allocated put-codes.
    pub fn new(store: RecordStore, cfg: Arc<CoreConfig>) -> Self {
        Self {
            store,
            cfg,
            put_codes: Arc::new(RandomPutCodes),
        }
    }

    pub fn with_put_codes(mut self, source: impl PutCodeSource + 'static) -> Self {
        self.put_codes = Arc::new(source);
        self
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "MOAT", description = "Mock ORCID v3.0 API"),
    paths(
        handlers::issue_token,
        handlers::authorize,
        handlers::get_record,
        handlers::get_person,
        handlers::get_work,
        handlers::create_work,
        handlers::update_work,
        handlers::get_employment,
        handlers::create_employment,
        handlers::update_employment,
        handlers::search,
    ),
    components(schemas(TokenResponse))
)]
pub struct ApiDoc;

/// Build the application router with logging and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/oauth/token", post(handlers::issue_token))
        .route("/oauth/authorize", get(handlers::authorize))
        .route("/v3.0/search", get(handlers::search))
        .route("/v3.0/:id/record", get(handlers::get_record))
        .route("/v3.0/:id/person", get(handlers::get_person))
        .route("/v3.0/:id/work", post(handlers::create_work))
        .route(
            "/v3.0/:id/work/:put_code",
            get(handlers::get_work).put(handlers::update_work),
        )
        .route("/v3.0/:id/employment", post(handlers::create_employment))
        .route(
            "/v3.0/:id/employment/:put_code",
            get(handlers::get_employment).put(handlers::update_employment),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(logging::log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
