//! Modelos del sistema
//!
//! Entradas y salidas del cálculo, tabla de factores, metadatos del reporte
//! y datos del dashboard.

pub mod dashboard;
pub mod emission;
pub mod factors;
pub mod lenient;
pub mod report;
