//! Datos para los gráficos de comparación entre campus

use axum::Json;

use crate::models::dashboard::DashboardData;

/// GET /api/dashboard
pub async fn get_dashboard() -> Json<DashboardData> {
    Json(DashboardData::build())
}
