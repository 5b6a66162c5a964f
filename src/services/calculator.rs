//! Cálculo de emisiones Scope 1, 2 y 3
//!
//! Función pura: mismas cantidades y mismos factores dan siempre el mismo
//! resultado. No hay estado compartido ni errores posibles en la aritmética.

use tracing::{debug, warn};

use crate::models::emission::{
    EmissionInput, EmissionResult, Scope1Breakdown, Scope2Breakdown, Scope3Breakdown,
};
use crate::models::factors::EmissionFactors;

/// Calcular las emisiones para una entrada del formulario
pub fn calculate(input: &EmissionInput, factors: &EmissionFactors) -> EmissionResult {
    let scope1 = scope1(input, factors);
    let scope2 = scope2(input, factors);
    let scope3 = scope3(input, factors);
    let total = scope1.total + scope2.net + scope3.total;

    debug!(
        "🧮 Emisiones calculadas: scope1={:.2} scope2={:.2} scope3={:.2} total={:.2}",
        scope1.total, scope2.net, scope3.total, total
    );

    EmissionResult {
        scope1,
        scope2,
        scope3,
        total,
    }
}

fn scope1(input: &EmissionInput, factors: &EmissionFactors) -> Scope1Breakdown {
    let diesel = input.diesel_liters * factors.fuels.diesel;
    let natural_gas = input.gas_m3 * factors.fuels.natural_gas;
    let lpg = input.lpg_kg * factors.fuels.lpg;

    // Tipo desconocido: factor 0, no es un error
    let vehicle_factor = factors.vehicle(&input.vehicle_type).unwrap_or_else(|| {
        warn!("⚠️ Tipo de vehículo desconocido '{}', factor 0", input.vehicle_type);
        0.0
    });
    let vehicles = input.vehicle_distance_km * vehicle_factor;

    Scope1Breakdown {
        diesel,
        natural_gas,
        lpg,
        vehicles,
        total: diesel + natural_gas + lpg + vehicles,
    }
}

fn scope2(input: &EmissionInput, factors: &EmissionFactors) -> Scope2Breakdown {
    let electricity = input.electricity_kwh * factors.electricity;
    let solar_offset = input.solar_kwh * factors.electricity;

    Scope2Breakdown {
        electricity,
        solar_offset,
        net: electricity - solar_offset,
    }
}

fn scope3(input: &EmissionInput, factors: &EmissionFactors) -> Scope3Breakdown {
    let waste = &factors.waste;
    let total_waste = input.food_waste * waste.food
        + input.plastic_waste * waste.plastic
        + input.bottle_waste * waste.bottles
        + input.glass_waste * waste.glass
        + input.carton_waste * waste.cartons;

    Scope3Breakdown {
        waste: total_waste,
        total: total_waste,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * b.abs().max(1.0)
    }

    fn factors() -> EmissionFactors {
        EmissionFactors::default()
    }

    #[test]
    fn all_zero_input_gives_all_zero_output() {
        let result = calculate(&EmissionInput::default(), &factors());
        assert_eq!(result, EmissionResult::default());
    }

    #[test]
    fn campus_example() {
        let input = EmissionInput {
            diesel_liters: 1200.0,
            gas_m3: 500.0,
            electricity_kwh: 24000.0,
            solar_kwh: 12000.0,
            ..Default::default()
        };
        let result = calculate(&input, &factors());

        assert!(close(result.scope1.diesel, 4428.0));
        assert!(close(result.scope1.natural_gas, 950.0));
        assert!(close(result.scope1.total, 5378.0));
        assert!(close(result.scope2.electricity, 23160.0));
        assert!(close(result.scope2.solar_offset, 11580.0));
        assert!(close(result.scope2.net, 11580.0));
        assert_eq!(result.scope3.total, 0.0);
        assert!(close(result.total, 16958.0));
    }

    #[test]
    fn unknown_vehicle_contributes_nothing() {
        let input = EmissionInput {
            vehicle_distance_km: 1000.0,
            vehicle_type: "Hovercraft".to_string(),
            ..Default::default()
        };
        let result = calculate(&input, &factors());
        assert_eq!(result.scope1.vehicles, 0.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn known_vehicle_uses_its_factor() {
        let input = EmissionInput {
            vehicle_distance_km: 100.0,
            vehicle_type: "Large Diesel Car".to_string(),
            ..Default::default()
        };
        let result = calculate(&input, &factors());
        assert!(close(result.scope1.vehicles, 21.0));
        assert!(close(result.scope1.total, 21.0));
    }

    #[test]
    fn solar_beyond_consumption_goes_negative() {
        let input = EmissionInput {
            diesel_liters: 10.0,
            electricity_kwh: 100.0,
            solar_kwh: 300.0,
            ..Default::default()
        };
        let result = calculate(&input, &factors());
        assert!(result.scope2.net < 0.0);
        assert!(close(result.scope2.net, -193.0));
        assert!(close(result.total, 36.9 - 193.0));
    }

    #[test]
    fn total_is_sum_of_scopes() {
        let input = EmissionInput {
            diesel_liters: 3.0,
            gas_m3: 7.0,
            lpg_kg: 11.0,
            vehicle_distance_km: 13.0,
            electricity_kwh: 17.0,
            solar_kwh: 19.0,
            food_waste: 23.0,
            plastic_waste: 29.0,
            bottle_waste: 31.0,
            glass_waste: 37.0,
            carton_waste: 41.0,
            ..Default::default()
        };
        let r = calculate(&input, &factors());
        assert_eq!(r.total, r.scope1.total + r.scope2.net + r.scope3.total);
        assert_eq!(r.scope3.total, r.scope3.waste);
    }

    #[test]
    fn scope1_and_scope3_scale_linearly() {
        let base = EmissionInput {
            diesel_liters: 12.0,
            gas_m3: 4.0,
            lpg_kg: 2.5,
            vehicle_distance_km: 80.0,
            vehicle_type: "Motorcycle".to_string(),
            food_waste: 9.0,
            plastic_waste: 1.5,
            bottle_waste: 2.0,
            glass_waste: 3.0,
            carton_waste: 4.0,
            ..Default::default()
        };
        let k = 3.5;
        let scaled = EmissionInput {
            diesel_liters: base.diesel_liters * k,
            gas_m3: base.gas_m3 * k,
            lpg_kg: base.lpg_kg * k,
            vehicle_distance_km: base.vehicle_distance_km * k,
            food_waste: base.food_waste * k,
            plastic_waste: base.plastic_waste * k,
            bottle_waste: base.bottle_waste * k,
            glass_waste: base.glass_waste * k,
            carton_waste: base.carton_waste * k,
            ..base.clone()
        };

        let a = calculate(&base, &factors());
        let b = calculate(&scaled, &factors());
        assert!(close(b.scope1.total, a.scope1.total * k));
        assert!(close(b.scope3.total, a.scope3.total * k));
    }

    #[test]
    fn increasing_one_quantity_never_lowers_its_scope() {
        let base = EmissionInput {
            diesel_liters: 5.0,
            gas_m3: 5.0,
            lpg_kg: 5.0,
            vehicle_distance_km: 5.0,
            electricity_kwh: 5.0,
            solar_kwh: 5.0,
            food_waste: 5.0,
            plastic_waste: 5.0,
            bottle_waste: 5.0,
            glass_waste: 5.0,
            carton_waste: 5.0,
            ..Default::default()
        };
        let before = calculate(&base, &factors());

        let bumps: [fn(&mut EmissionInput); 11] = [
            |i: &mut EmissionInput| i.diesel_liters += 10.0,
            |i: &mut EmissionInput| i.gas_m3 += 10.0,
            |i: &mut EmissionInput| i.lpg_kg += 10.0,
            |i: &mut EmissionInput| i.vehicle_distance_km += 10.0,
            |i: &mut EmissionInput| i.electricity_kwh += 10.0,
            |i: &mut EmissionInput| i.solar_kwh += 10.0,
            |i: &mut EmissionInput| i.food_waste += 10.0,
            |i: &mut EmissionInput| i.plastic_waste += 10.0,
            |i: &mut EmissionInput| i.bottle_waste += 10.0,
            |i: &mut EmissionInput| i.glass_waste += 10.0,
            |i: &mut EmissionInput| i.carton_waste += 10.0,
        ];

        for (idx, bump) in bumps.iter().enumerate() {
            let mut input = base.clone();
            bump(&mut input);
            let after = calculate(&input, &factors());

            assert!(after.scope1.total >= before.scope1.total, "bump {idx}");
            assert!(after.scope3.total >= before.scope3.total, "bump {idx}");
            if idx == 5 {
                assert!(after.scope2.net < before.scope2.net);
            } else {
                assert!(after.scope2.net >= before.scope2.net, "bump {idx}");
            }
        }
    }

    #[test]
    fn custom_factor_table_is_respected() {
        let mut table = factors();
        table.fuels.diesel = 2.68;
        table.electricity = 0.615;

        let input = EmissionInput {
            diesel_liters: 100.0,
            electricity_kwh: 1000.0,
            ..Default::default()
        };
        let result = calculate(&input, &table);
        assert!(close(result.scope1.diesel, 268.0));
        assert!(close(result.scope2.electricity, 615.0));
    }

    #[test]
    fn same_input_same_output() {
        let input = EmissionInput {
            diesel_liters: 42.0,
            plastic_waste: 7.0,
            ..Default::default()
        };
        assert_eq!(calculate(&input, &factors()), calculate(&input, &factors()));
    }
}
