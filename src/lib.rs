//! Carbon emissions dashboard API
//!
//! Cálculo de emisiones Scope 1, 2 y 3 para un campus, exportación del
//! reporte en PDF y datos de comparación entre campus.

pub mod api;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use middleware::cors::cors_for;
use state::AppState;

/// Router completo de la aplicación con su middleware
pub fn app(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(state.config.request_body_limit))
        .layer(cors_for(&state.config.cors_origins));

    Router::new()
        .route("/health", get(api::health::health_check))
        .nest("/api", api::create_api_router())
        .layer(layers)
        .with_state(state)
}
