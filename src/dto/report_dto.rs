use serde::{Deserialize, Deserializer};

use crate::models::lenient;
use crate::models::report::ReportData;
use crate::services::report::DEFAULT_REGION;

// Request para exportar el reporte
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default = "default_region", deserialize_with = "region_id")]
    pub region_id: String,
    #[serde(flatten)]
    pub data: ReportData,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn region_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient::text_or(deserializer, DEFAULT_REGION)
}
