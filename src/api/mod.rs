//! API endpoints
//!
//! Este módulo contiene los endpoints de la API.

pub mod dashboard;
pub mod emissions;
pub mod health;
pub mod reports;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(emissions::calculate_emissions))
        .route("/report", post(reports::export_report))
        .route("/dashboard", get(dashboard::get_dashboard))
}
