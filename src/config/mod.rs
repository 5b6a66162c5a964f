//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la carga de la tabla de
//! factores de emisión.

pub mod environment;

pub use environment::*;

use thiserror::Error;

use crate::models::factors::EmissionFactors;

/// Errores de arranque
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read emission factors file {path}: {source}")]
    FactorsFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid emission factors JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid emission factors: {0}")]
    InvalidFactors(String),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

/// Tabla de factores para este proceso: archivo si está configurado,
/// valores compilados si no
pub fn load_factors(config: &EnvironmentConfig) -> Result<EmissionFactors, ConfigError> {
    match &config.factors_file {
        Some(path) => EmissionFactors::from_file(path),
        None => Ok(EmissionFactors::default()),
    }
}
