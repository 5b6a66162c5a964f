//! Modelos de entrada y salida del cálculo de emisiones
//!
//! Los nombres JSON siguen exactamente los campos del formulario del
//! dashboard (camelCase).

use serde::{Deserialize, Deserializer, Serialize};

use super::factors::DEFAULT_VEHICLE_TYPE;
use super::lenient;

/// Cantidades que introduce el usuario. Todo campo ausente vale 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionInput {
    // Scope 1
    #[serde(default, deserialize_with = "lenient::number")]
    pub diesel_liters: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub gas_m3: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lpg_kg: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub vehicle_distance_km: f64,
    #[serde(default = "default_vehicle_type", deserialize_with = "vehicle_type")]
    pub vehicle_type: String,

    // Scope 2
    #[serde(default, deserialize_with = "lenient::number", rename = "electricityKWh")]
    pub electricity_kwh: f64,
    #[serde(default, deserialize_with = "lenient::number", rename = "solarKWh")]
    pub solar_kwh: f64,

    // Scope 3
    #[serde(default, deserialize_with = "lenient::number")]
    pub food_waste: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub plastic_waste: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub bottle_waste: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub glass_waste: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub carton_waste: f64,
}

impl Default for EmissionInput {
    fn default() -> Self {
        Self {
            diesel_liters: 0.0,
            gas_m3: 0.0,
            lpg_kg: 0.0,
            vehicle_distance_km: 0.0,
            vehicle_type: default_vehicle_type(),
            electricity_kwh: 0.0,
            solar_kwh: 0.0,
            food_waste: 0.0,
            plastic_waste: 0.0,
            bottle_waste: 0.0,
            glass_waste: 0.0,
            carton_waste: 0.0,
        }
    }
}

fn default_vehicle_type() -> String {
    DEFAULT_VEHICLE_TYPE.to_string()
}

fn vehicle_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient::text_or(deserializer, DEFAULT_VEHICLE_TYPE)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope1Breakdown {
    pub diesel: f64,
    pub natural_gas: f64,
    pub lpg: f64,
    pub vehicles: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope2Breakdown {
    pub electricity: f64,
    pub solar_offset: f64,
    /// Red menos compensación solar; puede ser negativo
    pub net: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope3Breakdown {
    pub waste: f64,
    pub total: f64,
}

/// Resultado del cálculo, en kg CO₂e
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    pub scope1: Scope1Breakdown,
    pub scope2: Scope2Breakdown,
    pub scope3: Scope3Breakdown,
    pub total: f64,
}
