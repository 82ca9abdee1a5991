//! # Water Warming Time Calculator
//!
//! Predicts how long pool water takes to warm naturally to a target
//! temperature from sun exposure, air temperature, and pool volume.

use serde::{Deserialize, Serialize};

use crate::calculators::evaporation::SunExposure;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Temperature, Volume};

/// Reference air temperature at which warming is unadjusted
pub const BASE_AIR_TEMP_F: f64 = 65.0;
/// Degrees F of air temperature per unit of factor adjustment
pub const AIR_TEMP_SENSITIVITY: f64 = 30.0;
pub const MIN_AIR_TEMP_FACTOR: f64 = 0.5;
pub const MAX_AIR_TEMP_FACTOR: f64 = 1.5;

/// Reference pool volume at which warming is unadjusted
pub const BASE_VOLUME_GALLONS: f64 = 100.0;
pub const MIN_VOLUME_FACTOR: f64 = 0.8;
pub const MAX_VOLUME_FACTOR: f64 = 1.2;

/// Base warming rate in °F per hour for a 100-gallon pool
pub fn sun_warming_rate(sun: SunExposure) -> f64 {
    match sun {
        SunExposure::Full => 0.35,
        SunExposure::Partial => 0.2,
        SunExposure::Minimal => 0.1,
        SunExposure::Shade => 0.05,
    }
}

/// Input parameters for the warming time calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "current_temp": { "value": 68.0, "unit": "fahrenheit" },
///   "target_temp": { "value": 84.0, "unit": "fahrenheit" },
///   "air_temp": { "value": 80.0, "unit": "fahrenheit" },
///   "sun": "full",
///   "volume": { "value": 150.0, "unit": "gallons" }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarmingInput {
    pub current_temp: Temperature,
    pub target_temp: Temperature,
    pub air_temp: Temperature,
    pub sun: SunExposure,
    pub volume: Volume,
}

impl WarmingInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.volume.value.is_finite() || self.volume.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "volume",
                self.volume.value.to_string(),
                "Volume must be positive",
            ));
        }
        if self.target_temp.canonical() <= self.current_temp.canonical() {
            return Err(CalcError::invalid_input(
                "target_temp",
                self.target_temp.value.to_string(),
                "Target temperature must be above the current temperature",
            ));
        }
        Ok(())
    }
}

/// Results of the warming time calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmingResult {
    /// Whole-pool warming rate in °F per hour
    pub warming_rate_f_per_hour: f64,
    pub warming_time_hours: f64,
    /// Comfortable swimming range for small pools
    pub ideal_range_f: (f64, f64),
    /// When to fill so the water is ready
    pub ready_advisory: String,
}

/// Calculate natural warming time toward a target temperature
pub fn calculate(input: &WarmingInput) -> CalcResult<WarmingResult> {
    input.validate()?;

    let target_f = input.target_temp.canonical();
    let delta = target_f - input.current_temp.canonical();
    let air_f = input.air_temp.canonical();
    let gallons = input.volume.canonical();

    let air_factor = ((air_f - BASE_AIR_TEMP_F) / AIR_TEMP_SENSITIVITY + 1.0)
        .clamp(MIN_AIR_TEMP_FACTOR, MAX_AIR_TEMP_FACTOR);
    let volume_factor =
        (BASE_VOLUME_GALLONS / gallons).clamp(MIN_VOLUME_FACTOR, MAX_VOLUME_FACTOR);

    let rate = sun_warming_rate(input.sun) * air_factor * volume_factor;
    let hours = delta / rate;

    Ok(WarmingResult {
        warming_rate_f_per_hour: rate,
        warming_time_hours: hours,
        ideal_range_f: (84.0, 88.0),
        ready_advisory: ready_advisory(hours, target_f),
    })
}

fn ready_advisory(hours: f64, target_f: f64) -> String {
    let rounded = hours.round();
    if hours <= 8.0 {
        format!(
            "The water should reach {target_f:.0}°F about {rounded:.0} hours after filling; \
             a morning fill will be ready the same day."
        )
    } else if hours <= 24.0 {
        format!(
            "The water should reach {target_f:.0}°F about {rounded:.0} hours after filling; \
             fill the day before you plan to swim."
        )
    } else {
        format!(
            "Reaching {target_f:.0}°F would take about {rounded:.0} hours under these \
             conditions; consider a smaller target or a sunnier spot."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TemperatureUnit, VolumeUnit};

    fn base_input() -> WarmingInput {
        WarmingInput {
            current_temp: Temperature::new(68.0, TemperatureUnit::Fahrenheit),
            target_temp: Temperature::new(75.0, TemperatureUnit::Fahrenheit),
            air_temp: Temperature::new(65.0, TemperatureUnit::Fahrenheit),
            sun: SunExposure::Full,
            volume: Volume::new(100.0, VolumeUnit::Gallons),
        }
    }

    #[test]
    fn test_reference_conditions() {
        // air at 65 °F and 100 gal are both the reference, so rate = 0.35
        let result = calculate(&base_input()).unwrap();
        assert!((result.warming_rate_f_per_hour - 0.35).abs() < 1e-9);
        assert!((result.warming_time_hours - 7.0 / 0.35).abs() < 1e-9);
        // 20 hours lands in the fill-the-day-before band
        assert!(result.ready_advisory.contains("fill the day before"));
    }

    #[test]
    fn test_hot_air_capped_at_max_factor() {
        let input = WarmingInput {
            air_temp: Temperature::new(110.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // (110-65)/30+1 = 2.5, clamped to 1.5
        assert!((result.warming_rate_f_per_hour - 0.35 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_cold_air_floored_at_min_factor() {
        let input = WarmingInput {
            air_temp: Temperature::new(30.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!((result.warming_rate_f_per_hour - 0.35 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_small_pool_warms_faster() {
        let input = WarmingInput {
            volume: Volume::new(50.0, VolumeUnit::Gallons),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 100/50 = 2.0, clamped to 1.2
        assert!((result.warming_rate_f_per_hour - 0.35 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_large_pool_warms_slower() {
        let input = WarmingInput {
            volume: Volume::new(500.0, VolumeUnit::Gallons),
            sun: SunExposure::Shade,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 100/500 = 0.2, clamped to 0.8
        assert!((result.warming_rate_f_per_hour - 0.05 * 0.8).abs() < 1e-9);
        // 175 hours is hopeless without help
        assert!(result.ready_advisory.contains("consider a smaller target"));
    }

    #[test]
    fn test_target_below_current_rejected() {
        let input = WarmingInput {
            target_temp: Temperature::new(60.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        assert!(calculate(&input).is_err());
    }
}
