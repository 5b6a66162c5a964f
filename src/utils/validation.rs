//! Utilidades de validación de payloads
//!
//! Los campos se leen de forma tolerante, pero el cuerpo completo tiene que
//! ser un objeto JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::{invalid_input, AppResult};

/// Parsear el cuerpo de una petición como objeto JSON y deserializarlo
pub fn parse_json_object<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(invalid_input("request body must be a JSON object"));
    }
    Ok(serde_json::from_value(value)?)
}
