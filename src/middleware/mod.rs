//! Middleware del sistema
//!
//! CORS para el dashboard del navegador.

pub mod cors;

pub use cors::*;
