//! Servicios del sistema
//!
//! Lógica de negocio: cálculo de emisiones y exportación del reporte.

pub mod calculator;
pub mod report;
