//! Handler de exportación del reporte PDF

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Local;
use tracing::{error, info};

use crate::{
    dto::report_dto::ReportRequest,
    services::report,
    utils::{errors::AppResult, validation::parse_json_object},
};

/// POST /api/report
///
/// Devuelve el PDF como adjunto. Si la exportación se aborta (región
/// desconocida, fallo de captura) responde 204 sin cuerpo.
pub async fn export_report(body: Bytes) -> AppResult<Response> {
    let request: ReportRequest = parse_json_object(&body)?;
    info!(
        "📄 Exportando región '{}' para {}",
        request.region_id, request.data.month
    );

    let today = Local::now().date_naive();
    let Some(document) = report::export_carbon_report(&request.region_id, &request.data, today)
    else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    let disposition = match HeaderValue::try_from(disposition) {
        Ok(value) => value,
        Err(e) => {
            error!("❌ Nombre de archivo no válido para la cabecera: {}", e);
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    )
        .into_response())
}
