//! Decodificación tolerante de cantidades
//!
//! Los formularios del dashboard envían números, strings vacíos o lo que el
//! usuario haya tecleado. Cualquier valor que no se pueda leer como número
//! finito se convierte en 0 en lugar de rechazar la petición.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convertir un valor JSON arbitrario en cantidad (0 si no es numérico)
pub fn coerce_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        _ => 0.0,
    };

    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

/// `deserialize_with` para campos numéricos opcionales
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// Leer un campo de texto: null, vacío, `false` o `0` caen al valor por defecto
pub fn text_or<'de, D>(deserializer: D, default: &str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    };

    if text.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(text)
    }
}
