//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo es de solo lectura después del arranque.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::models::factors::EmissionFactors;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub factors: Arc<EmissionFactors>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, factors: EmissionFactors) -> Self {
        Self {
            config,
            factors: Arc::new(factors),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EnvironmentConfig::default(), EmissionFactors::default())
    }
}
