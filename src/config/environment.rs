//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto para poder arrancar sin `.env`.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

use super::ConfigError;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: Level,
    pub factors_file: Option<PathBuf>,
    pub request_body_limit: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: Level::DEBUG,
            factors_file: None,
            request_body_limit: 64 * 1024,
        }
    }
}

/// Leer una variable y parsearla; si no es válida se usa el valor por
/// defecto y se anota un aviso
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
    warnings: &mut Vec<String>,
) -> T {
    match lookup(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warnings.push(format!(
                    "{} inválido ('{}'), usando el valor por defecto",
                    name, raw
                ));
                default
            }
        },
        None => default,
    }
}

impl EnvironmentConfig {
    /// Construir la configuración desde el entorno del proceso.
    ///
    /// Devuelve también los avisos de variables inválidas: se leen antes de
    /// que exista el subscriber de logging, así que los registra quien llama.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();
        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        let default_level = if environment == "development" {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let config = Self {
            port: parse_var(&lookup, "PORT", defaults.port, &mut warnings),
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            log_level: parse_var(&lookup, "LOG_LEVEL", default_level, &mut warnings),
            factors_file: lookup("EMISSION_FACTORS_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            request_body_limit: parse_var(
                &lookup,
                "REQUEST_BODY_LIMIT",
                defaults.request_body_limit,
                &mut warnings,
            ),
            environment,
        };
        (config, warnings)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server_url()
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.server_url()))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
