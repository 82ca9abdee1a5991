//! # Water Heating Cost Calculator
//!
//! Estimates what it costs to bring pool water up to a target temperature and
//! keep it there, for five heating methods, plus a standardized cost
//! comparison across all methods.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Temperature, Volume};

/// BTUs needed to raise one gallon of water by 1 °F
pub const BTU_PER_GALLON_DEGREE_F: f64 = 8.34;
pub const KWH_PER_BTU: f64 = 0.000293071;
pub const THERM_PER_BTU: f64 = 0.00001;
pub const PROPANE_BTU_PER_GALLON: f64 = 91_500.0;

/// Typical heat output of small consumer heaters, BTU per hour
pub const ELECTRIC_HEATER_BTU_HR: f64 = 5000.0;
pub const GAS_HEATER_BTU_HR: f64 = 8000.0;
pub const HEAT_PUMP_BTU_HR: f64 = 4000.0;
pub const SOLAR_HEATER_BTU_HR: f64 = 2000.0;

/// How quickly the pool sheds heat to the surroundings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatLossRate {
    /// Indoor or well insulated
    Low,
    /// Outdoor with cover
    Medium,
    /// Outdoor without cover
    High,
}

impl HeatLossRate {
    pub const ALL: [HeatLossRate; 3] =
        [HeatLossRate::Low, HeatLossRate::Medium, HeatLossRate::High];

    /// Fraction of stored heat lost per hour
    pub fn factor(&self) -> f64 {
        match self {
            HeatLossRate::Low => 0.05,
            HeatLossRate::Medium => 0.10,
            HeatLossRate::High => 0.20,
        }
    }
}

/// Heating method with its energy pricing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum HeatingMethod {
    Electric {
        /// Dollars per kWh
        rate: f64,
        /// Heater efficiency, 0-1
        efficiency: f64,
    },
    GasNatural {
        /// Dollars per therm
        rate: f64,
        efficiency: f64,
    },
    GasPropane {
        /// Dollars per gallon of propane
        rate: f64,
        efficiency: f64,
    },
    HeatPump {
        /// Dollars per kWh
        rate: f64,
        /// Coefficient of performance, typically 3-5
        cop: f64,
    },
    Solar {
        /// Dollars per kWh for the circulation pump
        pump_rate: f64,
        pump_watts: f64,
    },
}

impl HeatingMethod {
    fn validate(&self) -> CalcResult<()> {
        let check = |field: &str, value: f64, lo: f64, hi: f64| -> CalcResult<()> {
            if !value.is_finite() || value < lo || value > hi {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Must be between {lo} and {hi}"),
                ));
            }
            Ok(())
        };
        match self {
            HeatingMethod::Electric { rate, efficiency }
            | HeatingMethod::GasNatural { rate, efficiency }
            | HeatingMethod::GasPropane { rate, efficiency } => {
                check("rate", *rate, 0.0, f64::MAX)?;
                check("efficiency", *efficiency, 0.01, 1.0)
            }
            HeatingMethod::HeatPump { rate, cop } => {
                check("rate", *rate, 0.0, f64::MAX)?;
                check("cop", *cop, 1.0, 10.0)
            }
            HeatingMethod::Solar {
                pump_rate,
                pump_watts,
            } => {
                check("pump_rate", *pump_rate, 0.0, f64::MAX)?;
                check("pump_watts", *pump_watts, 0.0, f64::MAX)
            }
        }
    }

    /// Cost in dollars to deliver `btu` of heat into the water
    fn energy_cost(&self, btu: f64) -> f64 {
        match self {
            HeatingMethod::Electric { rate, efficiency } => {
                (btu / efficiency) * KWH_PER_BTU * rate
            }
            HeatingMethod::GasNatural { rate, efficiency } => {
                (btu / efficiency) * THERM_PER_BTU * rate
            }
            HeatingMethod::GasPropane { rate, efficiency } => {
                (btu / efficiency) / PROPANE_BTU_PER_GALLON * rate
            }
            HeatingMethod::HeatPump { rate, cop } => (btu / cop) * KWH_PER_BTU * rate,
            HeatingMethod::Solar {
                pump_rate,
                pump_watts,
            } => {
                // sunlight is free, the pump is not
                let pump_hours = btu / SOLAR_HEATER_BTU_HR;
                (pump_watts / 1000.0) * pump_hours * pump_rate
            }
        }
    }

    /// Hours to deliver `btu` at this method's typical heater output
    fn heating_hours(&self, btu: f64) -> f64 {
        match self {
            HeatingMethod::Electric { efficiency, .. } => {
                btu / (ELECTRIC_HEATER_BTU_HR * efficiency)
            }
            HeatingMethod::GasNatural { efficiency, .. }
            | HeatingMethod::GasPropane { efficiency, .. } => {
                btu / (GAS_HEATER_BTU_HR * efficiency)
            }
            // heat pump output is already delivered heat
            HeatingMethod::HeatPump { .. } => btu / HEAT_PUMP_BTU_HR,
            HeatingMethod::Solar { .. } => btu / SOLAR_HEATER_BTU_HR,
        }
    }

    /// Human-readable quantity of energy consumed for `btu` of delivered heat
    fn energy_description(&self, btu: f64) -> String {
        match self {
            HeatingMethod::Electric { efficiency, .. } => {
                format!("{:.2} kWh", (btu / efficiency) * KWH_PER_BTU)
            }
            HeatingMethod::GasNatural { efficiency, .. } => {
                format!("{:.2} therms", (btu / efficiency) * THERM_PER_BTU)
            }
            HeatingMethod::GasPropane { efficiency, .. } => {
                format!(
                    "{:.2} gallons of propane",
                    (btu / efficiency) / PROPANE_BTU_PER_GALLON
                )
            }
            HeatingMethod::HeatPump { cop, .. } => {
                format!("{:.2} kWh", (btu / cop) * KWH_PER_BTU)
            }
            HeatingMethod::Solar { .. } => format!("{btu:.0} BTU (solar)"),
        }
    }
}

/// Input parameters for the heating cost calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume": { "value": 300.0, "unit": "gallons" },
///   "current_temp": { "value": 65.0, "unit": "fahrenheit" },
///   "desired_temp": { "value": 80.0, "unit": "fahrenheit" },
///   "ambient_temp": { "value": 70.0, "unit": "fahrenheit" },
///   "heat_loss": "medium",
///   "heating": { "method": "electric", "rate": 0.15, "efficiency": 0.9 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatingCostInput {
    pub volume: Volume,
    pub current_temp: Temperature,
    pub desired_temp: Temperature,
    pub ambient_temp: Temperature,
    pub heat_loss: HeatLossRate,
    pub heating: HeatingMethod,
}

impl HeatingCostInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.volume.value.is_finite() || self.volume.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "volume",
                self.volume.value.to_string(),
                "Volume must be positive",
            ));
        }
        if self.desired_temp.canonical() <= self.current_temp.canonical() {
            return Err(CalcError::invalid_input(
                "desired_temp",
                self.desired_temp.value.to_string(),
                "Desired temperature must be above the current temperature",
            ));
        }
        self.heating.validate()
    }
}

/// Cost of one heating method at standardized rates, for comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    pub method: String,
    pub cost_usd: f64,
}

/// Results of the heating cost calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingCostResult {
    pub btu_required: f64,
    /// One-time cost to reach the desired temperature
    pub initial_cost_usd: f64,
    pub energy_required: String,
    pub heating_time_hours: f64,
    /// Daily cost to hold the desired temperature against heat loss
    pub daily_maintenance_usd: f64,
    pub weekly_maintenance_usd: f64,
    /// All methods priced at standardized average rates
    pub comparison: Vec<MethodComparison>,
}

/// Calculate heating cost, time, and upkeep for the chosen method
pub fn calculate(input: &HeatingCostInput) -> CalcResult<HeatingCostResult> {
    input.validate()?;

    let gallons = input.volume.canonical();
    let current_f = input.current_temp.canonical();
    let desired_f = input.desired_temp.canonical();
    let ambient_f = input.ambient_temp.canonical();

    let btu_required = gallons * (desired_f - current_f) * BTU_PER_GALLON_DEGREE_F;

    // heat shed to the surroundings over a day, held at the desired temperature
    let loss_delta = (desired_f - ambient_f).max(0.0);
    let btu_lost_per_day =
        gallons * loss_delta * BTU_PER_GALLON_DEGREE_F * input.heat_loss.factor() * 24.0;

    let daily_maintenance_usd = maintenance_cost(&input.heating, btu_lost_per_day);

    Ok(HeatingCostResult {
        btu_required,
        initial_cost_usd: input.heating.energy_cost(btu_required),
        energy_required: input.heating.energy_description(btu_required),
        heating_time_hours: input.heating.heating_hours(btu_required),
        daily_maintenance_usd,
        weekly_maintenance_usd: daily_maintenance_usd * 7.0,
        comparison: comparison(btu_required),
    })
}

fn maintenance_cost(method: &HeatingMethod, btu_lost_per_day: f64) -> f64 {
    match method {
        HeatingMethod::Solar {
            pump_rate,
            pump_watts,
        } => {
            if *pump_watts > 0.0 && *pump_rate > 0.0 {
                let pump_hours = (btu_lost_per_day / SOLAR_HEATER_BTU_HR).min(12.0);
                (pump_watts / 1000.0) * pump_hours * pump_rate
            } else {
                0.0
            }
        }
        other => other.energy_cost(btu_lost_per_day),
    }
}

/// Standardized average rates so the methods can be compared fairly
fn comparison(btu_required: f64) -> Vec<MethodComparison> {
    let methods: [(&'static str, HeatingMethod); 5] = [
        (
            "electric",
            HeatingMethod::Electric {
                rate: 0.15,
                efficiency: 0.9,
            },
        ),
        (
            "gas-natural",
            HeatingMethod::GasNatural {
                rate: 1.20,
                efficiency: 0.8,
            },
        ),
        (
            "gas-propane",
            HeatingMethod::GasPropane {
                rate: 2.50,
                efficiency: 0.8,
            },
        ),
        (
            "heat-pump",
            HeatingMethod::HeatPump {
                rate: 0.15,
                cop: 4.0,
            },
        ),
        (
            "solar",
            HeatingMethod::Solar {
                pump_rate: 0.15,
                pump_watts: 45.0,
            },
        ),
    ];
    methods
        .iter()
        .map(|(name, m)| MethodComparison {
            method: name.to_string(),
            cost_usd: m.energy_cost(btu_required),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TemperatureUnit, VolumeUnit};

    fn base_input() -> HeatingCostInput {
        HeatingCostInput {
            volume: Volume::new(300.0, VolumeUnit::Gallons),
            current_temp: Temperature::new(65.0, TemperatureUnit::Fahrenheit),
            desired_temp: Temperature::new(80.0, TemperatureUnit::Fahrenheit),
            ambient_temp: Temperature::new(70.0, TemperatureUnit::Fahrenheit),
            heat_loss: HeatLossRate::Medium,
            heating: HeatingMethod::Electric {
                rate: 0.15,
                efficiency: 0.9,
            },
        }
    }

    #[test]
    fn test_electric_heating_cost() {
        let result = calculate(&base_input()).unwrap();
        // 300 gal × 15 °F × 8.34 = 37,530 BTU
        assert!((result.btu_required - 37_530.0).abs() < 1e-6);
        let expected_kwh = (37_530.0 / 0.9) * KWH_PER_BTU;
        assert!((result.initial_cost_usd - expected_kwh * 0.15).abs() < 1e-9);
        assert!((result.heating_time_hours - 37_530.0 / 4500.0).abs() < 1e-9);
        assert!(result.energy_required.contains("kWh"));
    }

    #[test]
    fn test_maintenance_uses_heat_loss_factor() {
        let result = calculate(&base_input()).unwrap();
        // 10 °F over ambient, 10%/hr loss: 300 × 10 × 8.34 × 0.10 × 24 BTU/day
        let btu_day = 300.0 * 10.0 * 8.34 * 0.10 * 24.0;
        let expected = (btu_day / 0.9) * KWH_PER_BTU * 0.15;
        assert!((result.daily_maintenance_usd - expected).abs() < 1e-9);
        assert!((result.weekly_maintenance_usd - expected * 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_heat_pump_divides_by_cop() {
        let input = HeatingCostInput {
            heating: HeatingMethod::HeatPump {
                rate: 0.15,
                cop: 4.0,
            },
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        let expected = (37_530.0 / 4.0) * KWH_PER_BTU * 0.15;
        assert!((result.initial_cost_usd - expected).abs() < 1e-9);
        assert!((result.heating_time_hours - 37_530.0 / 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_solar_costs_only_pump_power() {
        let input = HeatingCostInput {
            heating: HeatingMethod::Solar {
                pump_rate: 0.15,
                pump_watts: 45.0,
            },
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        let pump_hours = 37_530.0 / 2000.0;
        let expected = 0.045 * pump_hours * 0.15;
        assert!((result.initial_cost_usd - expected).abs() < 1e-9);
    }

    #[test]
    fn test_comparison_covers_all_methods() {
        let result = calculate(&base_input()).unwrap();
        assert_eq!(result.comparison.len(), 5);
        // propane at standard rates is the priciest of the bunch
        let propane = result
            .comparison
            .iter()
            .find(|c| c.method == "gas-propane")
            .unwrap();
        let solar = result.comparison.iter().find(|c| c.method == "solar").unwrap();
        assert!(propane.cost_usd > solar.cost_usd);
    }

    #[test]
    fn test_already_warm_enough_rejected() {
        let input = HeatingCostInput {
            desired_temp: Temperature::new(60.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        assert!(calculate(&input).is_err());
    }
}
