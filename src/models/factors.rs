//! Tabla de factores de emisión
//!
//! Factores en kg CO₂e por unidad de entrada. La tabla se construye una sola
//! vez al arrancar (valores compilados o archivo JSON) y después solo se lee.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::config::ConfigError;

/// Tipo de vehículo usado cuando la petición no trae ninguno
pub const DEFAULT_VEHICLE_TYPE: &str = "Small Petrol Car";

lazy_static! {
    /// Factores por defecto del campus (red eléctrica de Pakistán)
    pub static ref DEFAULT_FACTORS: EmissionFactors = EmissionFactors {
        fuels: FuelFactors {
            diesel: 3.69,
            natural_gas: 1.9,
            lpg: 3.0,
        },
        vehicles: [
            ("Small Petrol Car", 0.192),
            ("Large Petrol Car", 0.282),
            ("Small Diesel Car", 0.171),
            ("Large Diesel Car", 0.210),
            ("Motorcycle", 0.103),
            ("Electric Car", 0.050),
        ]
        .into_iter()
        .map(|(name, factor)| (name.to_string(), factor))
        .collect(),
        electricity: 0.965,
        waste: WasteFactors {
            food: 1.305,
            plastic: 2.88,
            bottles: 2.5,
            glass: 1.437,
            cartons: 0.94,
        },
    };
}

/// Scope 1: combustibles quemados en el campus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FuelFactors {
    /// kg CO₂ por litro
    #[validate(range(min = 0.0))]
    pub diesel: f64,
    /// kg CO₂ por m³
    #[validate(range(min = 0.0))]
    pub natural_gas: f64,
    /// kg CO₂ por kg
    #[validate(range(min = 0.0))]
    pub lpg: f64,
}

/// Scope 3: kg CO₂e por kg de residuo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WasteFactors {
    #[validate(range(min = 0.0))]
    pub food: f64,
    #[validate(range(min = 0.0))]
    pub plastic: f64,
    #[validate(range(min = 0.0))]
    pub bottles: f64,
    #[validate(range(min = 0.0))]
    pub glass: f64,
    #[validate(range(min = 0.0))]
    pub cartons: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactors {
    #[validate]
    pub fuels: FuelFactors,
    /// kg CO₂ por km, indexado por el nombre que muestra el formulario
    #[validate(custom = "validate_vehicle_factors")]
    pub vehicles: BTreeMap<String, f64>,
    /// kg CO₂ por kWh de red
    #[validate(range(min = 0.0))]
    pub electricity: f64,
    #[validate]
    pub waste: WasteFactors,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        DEFAULT_FACTORS.clone()
    }
}

impl EmissionFactors {
    /// Factor del vehículo, `None` si el tipo no está en la tabla
    pub fn vehicle(&self, vehicle_type: &str) -> Option<f64> {
        self.vehicles.get(vehicle_type).copied()
    }

    /// Cargar la tabla desde un archivo JSON y validarla
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FactorsFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let factors: EmissionFactors = serde_json::from_str(raw)?;
        factors.check()?;
        Ok(factors)
    }

    /// Rechaza factores negativos o no finitos
    pub fn check(&self) -> Result<(), ConfigError> {
        let all = [
            self.fuels.diesel,
            self.fuels.natural_gas,
            self.fuels.lpg,
            self.electricity,
            self.waste.food,
            self.waste.plastic,
            self.waste.bottles,
            self.waste.glass,
            self.waste.cartons,
        ];
        if all.iter().any(|f| !f.is_finite()) {
            return Err(ConfigError::InvalidFactors(
                "emission factors must be finite".to_string(),
            ));
        }
        self.validate()
            .map_err(|e| ConfigError::InvalidFactors(e.to_string()))
    }
}

fn validate_vehicle_factors(vehicles: &BTreeMap<String, f64>) -> Result<(), ValidationError> {
    for (name, factor) in vehicles {
        if name.trim().is_empty() || !factor.is_finite() || *factor < 0.0 {
            let mut error = ValidationError::new("vehicle_factor");
            error.add_param("vehicle".into(), name);
            error.add_param("factor".into(), factor);
            return Err(error);
        }
    }
    Ok(())
}
