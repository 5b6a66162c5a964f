//! Handler del cálculo de emisiones

use axum::{body::Bytes, extract::State, Json};

use crate::{
    models::emission::{EmissionInput, EmissionResult},
    services::calculator,
    state::AppState,
    utils::{errors::AppResult, validation::parse_json_object},
};

/// POST /api/calculate
pub async fn calculate_emissions(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<EmissionResult>> {
    let input: EmissionInput = parse_json_object(&body)?;
    let result = calculator::calculate(&input, &state.factors);
    Ok(Json(result))
}
