//! Sistema de manejo de errores
//!
//! Este módulo define los errores que llegan a la capa HTTP y su conversión
//! a respuestas. El detalle se registra en el log; al cliente solo se le
//! devuelve un mensaje genérico.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Mensaje que ve el cliente ante un payload inválido
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input or server error";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(msg) => {
                error!("❌ Payload inválido: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": INVALID_INPUT_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de entrada
pub fn invalid_input(message: &str) -> AppError {
    AppError::InvalidInput(message.to_string())
}
