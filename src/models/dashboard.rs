//! Datos de comparación entre campus
//!
//! Valores mensuales escritos a mano para los dos colleges del proyecto.
//! No es una serie histórica: cada mes repite el mismo valor.

use serde::Serialize;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Emisiones mensuales de un campus, kg CO₂e
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampusProfile {
    pub name: &'static str,
    /// 500 L diésel de generador x 3.69
    pub scope1_monthly: f64,
    /// kWh de red x 0.915
    pub scope2_monthly: f64,
    pub scope3_waste_monthly: f64,
    pub scope3_commuting_monthly: f64,
}

pub const SUPERIOR_COLLEGE: CampusProfile = CampusProfile {
    name: "Superior",
    scope1_monthly: 1845.0,
    scope2_monthly: 3660.0,
    scope3_waste_monthly: 1760.0,
    scope3_commuting_monthly: 22140.0,
};

pub const ASPIRE_COLLEGE: CampusProfile = CampusProfile {
    name: "Aspire",
    scope1_monthly: 1476.0,
    scope2_monthly: 4575.0,
    scope3_waste_monthly: 2280.0,
    scope3_commuting_monthly: 22140.0,
};

pub const CAMPUSES: [CampusProfile; 2] = [SUPERIOR_COLLEGE, ASPIRE_COLLEGE];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusTotals {
    pub campus: String,
    pub scope1: f64,
    pub scope2: f64,
    pub scope3_waste: f64,
    pub scope3_commuting: f64,
    pub scope3: f64,
    pub total: f64,
}

impl CampusProfile {
    pub fn annual(&self) -> CampusTotals {
        let scope1 = self.scope1_monthly * 12.0;
        let scope2 = self.scope2_monthly * 12.0;
        let scope3_waste = self.scope3_waste_monthly * 12.0;
        let scope3_commuting = self.scope3_commuting_monthly * 12.0;
        let scope3 = scope3_waste + scope3_commuting;

        CampusTotals {
            campus: self.name.to_string(),
            scope1,
            scope2,
            scope3_waste,
            scope3_commuting,
            scope3,
            total: scope1 + scope2 + scope3,
        }
    }
}

/// Un punto de una serie: mes y valor por campus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub values: Vec<CampusValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampusValue {
    pub campus: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub campuses: Vec<CampusTotals>,
    pub scope1_monthly: Vec<SeriesPoint>,
    pub scope2_monthly: Vec<SeriesPoint>,
    pub scope3_waste_monthly: Vec<SeriesPoint>,
    pub comparison: Vec<SeriesPoint>,
}

fn monthly_series(pick: impl Fn(&CampusProfile) -> f64) -> Vec<SeriesPoint> {
    MONTHS
        .iter()
        .map(|month| SeriesPoint {
            label: month.to_string(),
            values: CAMPUSES
                .iter()
                .map(|campus| CampusValue {
                    campus: campus.name.to_string(),
                    value: pick(campus),
                })
                .collect(),
        })
        .collect()
}

fn comparison_series(totals: &[CampusTotals]) -> Vec<SeriesPoint> {
    let categories: [(&str, fn(&CampusTotals) -> f64); 4] = [
        ("Generator Diesel", |t: &CampusTotals| t.scope1),
        ("Grid Electricity", |t: &CampusTotals| t.scope2),
        ("Commuting", |t: &CampusTotals| t.scope3_commuting),
        ("Waste", |t: &CampusTotals| t.scope3_waste),
    ];

    categories
        .iter()
        .map(|(label, pick)| SeriesPoint {
            label: label.to_string(),
            values: totals
                .iter()
                .map(|t| CampusValue {
                    campus: t.campus.clone(),
                    value: pick(t),
                })
                .collect(),
        })
        .collect()
}

impl DashboardData {
    pub fn build() -> Self {
        let campuses: Vec<CampusTotals> = CAMPUSES.iter().map(CampusProfile::annual).collect();
        let comparison = comparison_series(&campuses);

        Self {
            campuses,
            scope1_monthly: monthly_series(|c| c.scope1_monthly),
            scope2_monthly: monthly_series(|c| c.scope2_monthly),
            scope3_waste_monthly: monthly_series(|c| c.scope3_waste_monthly),
            comparison,
        }
    }
}
