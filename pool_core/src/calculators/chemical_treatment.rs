//! # Chemical Treatment Calculator
//!
//! Doses sanitizer for a pool: how much of the chosen chemical to add for a
//! target sanitizer level, adjusted for what is already in the water and for
//! hot water, with a kitchen-measurement equivalent and safety notes.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Temperature, Volume};

/// Water above this temperature needs extra sanitizer
pub const HOT_WATER_THRESHOLD_F: f64 = 85.0;
/// Degrees F per unit of hot-water dose increase
pub const TEMP_ADJUSTMENT_SENSITIVITY: f64 = 50.0;
/// Dosing tables are only calibrated for this water temperature range
pub const MIN_WATER_TEMP_F: f64 = 50.0;
pub const MAX_WATER_TEMP_F: f64 = 104.0;

/// Sanitizer product being dosed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChemicalType {
    ChlorineTablets,
    ChlorineGranules,
    LiquidChlorine,
    ChlorineFree,
    HydrogenPeroxide,
}

impl ChemicalType {
    pub const ALL: [ChemicalType; 5] = [
        ChemicalType::ChlorineTablets,
        ChemicalType::ChlorineGranules,
        ChemicalType::LiquidChlorine,
        ChemicalType::ChlorineFree,
        ChemicalType::HydrogenPeroxide,
    ];

    pub fn is_chlorine(&self) -> bool {
        matches!(
            self,
            ChemicalType::ChlorineTablets
                | ChemicalType::ChlorineGranules
                | ChemicalType::LiquidChlorine
                | ChemicalType::ChlorineFree
        )
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ChemicalType::ChlorineTablets => "tablets",
            _ => "ounces",
        }
    }

    /// Dose per gallon for a target level
    pub fn dose_per_gallon(&self, level: TargetLevel) -> f64 {
        match self {
            ChemicalType::ChlorineTablets => match level {
                TargetLevel::Low => 0.005,
                TargetLevel::Medium => 0.01,
                TargetLevel::High => 0.015,
            },
            ChemicalType::ChlorineGranules => match level {
                TargetLevel::Low => 0.0015,
                TargetLevel::Medium => 0.003,
                TargetLevel::High => 0.005,
            },
            ChemicalType::LiquidChlorine => match level {
                TargetLevel::Low => 0.05,
                TargetLevel::Medium => 0.1,
                TargetLevel::High => 0.15,
            },
            ChemicalType::ChlorineFree => match level {
                TargetLevel::Low => 0.1,
                TargetLevel::Medium => 0.15,
                TargetLevel::High => 0.2,
            },
            ChemicalType::HydrogenPeroxide => match level {
                TargetLevel::Low => 0.5,
                TargetLevel::Medium => 0.75,
                TargetLevel::High => 1.0,
            },
        }
    }

    /// Days between treatments at a target level
    pub fn frequency_days(&self, level: TargetLevel) -> u32 {
        match (self, level) {
            (ChemicalType::LiquidChlorine, TargetLevel::Low) => 2,
            (ChemicalType::LiquidChlorine, _) => 1,
            (_, TargetLevel::Low) => 3,
            (_, TargetLevel::Medium) => 2,
            (_, TargetLevel::High) => 1,
        }
    }

    pub fn safety_notes(&self) -> &'static str {
        match self {
            ChemicalType::ChlorineTablets => {
                "Break tablets into smaller pieces for kiddie pools. Wait at least 1 hour \
                 after adding before allowing swimming. Test water before use."
            }
            ChemicalType::ChlorineGranules => {
                "Pre-dissolve granules in a bucket of water before adding to pool. Wait at \
                 least 30 minutes before swimming. Test water before use."
            }
            ChemicalType::LiquidChlorine => {
                "Use household bleach with 5-6% sodium hypochlorite, unscented. Dilute \
                 before adding to pool. Wait at least 30 minutes before swimming. Test water \
                 before use."
            }
            ChemicalType::ChlorineFree => {
                "Follow product-specific instructions. Most chlorine-free sanitizers are \
                 safer for children but may be less effective in very hot weather or with \
                 heavy use."
            }
            ChemicalType::HydrogenPeroxide => {
                "Use 3% hydrogen peroxide (standard household strength). Safe for children, \
                 but less effective than chlorine. May need more frequent application in hot \
                 weather."
            }
        }
    }

    /// Kitchen-measurement equivalent for a dose in this chemical's unit
    pub fn measurement(&self, amount: f64) -> String {
        match self {
            ChemicalType::ChlorineTablets => format!("{amount:.2} tablet(s)"),
            ChemicalType::ChlorineGranules => {
                if amount < 0.125 {
                    format!("{:.1} pinches", amount * 96.0)
                } else if amount < 0.5 {
                    format!("{:.1} teaspoons", amount * 6.0)
                } else {
                    format!("{:.2} tablespoons", amount / 2.0)
                }
            }
            ChemicalType::LiquidChlorine | ChemicalType::ChlorineFree => {
                if amount < 0.5 {
                    format!("{:.1} teaspoons", amount * 6.0)
                } else if amount < 8.0 {
                    format!("{:.1} tablespoons", amount / 2.0)
                } else {
                    format!("{:.2} cups", amount / 8.0)
                }
            }
            ChemicalType::HydrogenPeroxide => {
                if amount < 8.0 {
                    format!("{:.1} tablespoons", amount / 2.0)
                } else {
                    format!("{:.2} cups", amount / 8.0)
                }
            }
        }
    }
}

/// Desired sanitizer strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetLevel {
    Low,
    Medium,
    High,
}

impl TargetLevel {
    /// Midpoint of the target chlorine range in ppm
    pub fn target_ppm(&self) -> f64 {
        match self {
            TargetLevel::Low => 1.5,
            TargetLevel::Medium => 2.5,
            TargetLevel::High => 3.5,
        }
    }
}

/// Input parameters for the chemical treatment calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume": { "value": 150.0, "unit": "gallons" },
///   "chemical": "chlorine-granules",
///   "target": "medium",
///   "current_chlorine_ppm": 0.5,
///   "water_temp": { "value": 80.0, "unit": "fahrenheit" }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreatmentInput {
    pub volume: Volume,
    pub chemical: ChemicalType,
    pub target: TargetLevel,
    /// Measured free chlorine, 0-10 ppm; zero if untested
    #[serde(default)]
    pub current_chlorine_ppm: f64,
    pub water_temp: Temperature,
}

impl TreatmentInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.volume.value.is_finite() || self.volume.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "volume",
                self.volume.value.to_string(),
                "Volume must be positive",
            ));
        }
        if !self.current_chlorine_ppm.is_finite()
            || self.current_chlorine_ppm < 0.0
            || self.current_chlorine_ppm > 10.0
        {
            return Err(CalcError::invalid_input(
                "current_chlorine_ppm",
                self.current_chlorine_ppm.to_string(),
                "Chlorine level must be between 0 and 10 ppm",
            ));
        }
        let water_f = self.water_temp.canonical();
        if !water_f.is_finite() || !(MIN_WATER_TEMP_F..=MAX_WATER_TEMP_F).contains(&water_f) {
            return Err(CalcError::invalid_input(
                "water_temp",
                self.water_temp.value.to_string(),
                "Water temperature must be between 50 and 104 °F",
            ));
        }
        Ok(())
    }
}

/// Results of the chemical treatment calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentResult {
    /// Dose in the chemical's native unit (tablets or ounces)
    pub amount: f64,
    pub unit: String,
    /// The same dose in kitchen measures
    pub measurement: String,
    pub treat_every_days: u32,
    pub safety_notes: String,
}

/// Calculate the sanitizer dose
pub fn calculate(input: &TreatmentInput) -> CalcResult<TreatmentResult> {
    input.validate()?;

    let gallons = input.volume.canonical();
    let mut amount = gallons * input.chemical.dose_per_gallon(input.target);

    // credit sanitizer already in the water
    if input.current_chlorine_ppm > 0.0 && input.chemical.is_chlorine() {
        let target_ppm = input.target.target_ppm();
        if input.current_chlorine_ppm < target_ppm {
            amount *= (target_ppm - input.current_chlorine_ppm) / target_ppm;
        } else {
            amount = 0.0;
        }
    }

    // hot water degrades sanitizer faster
    let water_f = input.water_temp.canonical();
    if water_f > HOT_WATER_THRESHOLD_F {
        amount *= 1.0 + (water_f - HOT_WATER_THRESHOLD_F) / TEMP_ADJUSTMENT_SENSITIVITY;
    }

    Ok(TreatmentResult {
        amount,
        unit: input.chemical.unit().to_string(),
        measurement: input.chemical.measurement(amount),
        treat_every_days: input.chemical.frequency_days(input.target),
        safety_notes: input.chemical.safety_notes().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TemperatureUnit, VolumeUnit};

    fn base_input() -> TreatmentInput {
        TreatmentInput {
            volume: Volume::new(100.0, VolumeUnit::Gallons),
            chemical: ChemicalType::ChlorineGranules,
            target: TargetLevel::Medium,
            current_chlorine_ppm: 0.0,
            water_temp: Temperature::new(78.0, TemperatureUnit::Fahrenheit),
        }
    }

    #[test]
    fn test_base_dose() {
        let result = calculate(&base_input()).unwrap();
        // 100 gal × 0.003 oz/gal
        assert!((result.amount - 0.3).abs() < 1e-9);
        assert_eq!(result.unit, "ounces");
        assert_eq!(result.treat_every_days, 2);
        // 0.3 oz is in teaspoon territory
        assert!(result.measurement.contains("teaspoons"));
    }

    #[test]
    fn test_existing_chlorine_reduces_dose() {
        let input = TreatmentInput {
            current_chlorine_ppm: 1.0,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // (2.5 - 1.0) / 2.5 of the base dose
        assert!((result.amount - 0.3 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_at_target_means_no_dose() {
        let input = TreatmentInput {
            current_chlorine_ppm: 3.0,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.amount, 0.0);
    }

    #[test]
    fn test_hot_water_increases_dose() {
        let input = TreatmentInput {
            water_temp: Temperature::new(95.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 10 °F over the threshold: ×1.2
        assert!((result.amount - 0.3 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_peroxide_ignores_chlorine_level() {
        let input = TreatmentInput {
            chemical: ChemicalType::HydrogenPeroxide,
            current_chlorine_ppm: 5.0,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 100 × 0.75, unaffected by the chlorine reading
        assert!((result.amount - 75.0).abs() < 1e-9);
        assert!(result.measurement.contains("cups"));
    }

    #[test]
    fn test_tablets_unit_and_frequency() {
        let input = TreatmentInput {
            chemical: ChemicalType::ChlorineTablets,
            target: TargetLevel::High,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!((result.amount - 1.5).abs() < 1e-9);
        assert_eq!(result.unit, "tablets");
        assert_eq!(result.treat_every_days, 1);
    }

    #[test]
    fn test_chlorine_reading_bounds() {
        let input = TreatmentInput {
            current_chlorine_ppm: 12.0,
            ..base_input()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_water_temp_range_enforced() {
        let scalding = TreatmentInput {
            water_temp: Temperature::new(200.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        assert!(calculate(&scalding).is_err());

        let freezing = TreatmentInput {
            water_temp: Temperature::new(49.9, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        assert!(calculate(&freezing).is_err());

        // both ends of the calibrated range are accepted
        for f in [50.0, 104.0] {
            let input = TreatmentInput {
                water_temp: Temperature::new(f, TemperatureUnit::Fahrenheit),
                ..base_input()
            };
            assert!(calculate(&input).is_ok());
        }

        // the bound applies to the converted value: 41 °C is 105.8 °F
        let celsius = TreatmentInput {
            water_temp: Temperature::new(41.0, TemperatureUnit::Celsius),
            ..base_input()
        };
        assert!(calculate(&celsius).is_err());
    }
}
