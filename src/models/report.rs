//! Metadatos del reporte exportable

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Resumen que acompaña a la captura del reporte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default = "current_month")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_emissions: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub scope1: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub scope2: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub scope3: f64,
}

/// Nombre completo del mes actual, p. ej. "October"
pub fn current_month() -> String {
    Local::now().format("%B").to_string()
}
