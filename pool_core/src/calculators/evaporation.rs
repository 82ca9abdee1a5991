//! # Evaporation Calculator
//!
//! Estimates daily and weekly water loss to evaporation from surface area,
//! water/air temperatures, humidity, sun exposure, and wind, and recommends
//! a top-up interval.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::ShapeDimensions;
use crate::scoring::TwoTier;
use crate::units::{Temperature, LITERS_PER_GALLON};

/// Base evaporation rate in inches of water level per day
pub const BASE_RATE_INCHES_PER_DAY: f64 = 0.1;

/// Rate increase per degree F that the water is warmer than the air
pub const TEMP_DIFFERENCE_FACTOR: f64 = 0.01;

/// Relative-humidity divisor: rate scales by `1 - humidity / 200`
pub const HUMIDITY_DIVISOR: f64 = 200.0;

/// Gallons lost per square foot per inch of water level drop
pub const GALLONS_PER_SQFT_INCH: f64 = 0.623;

/// Recommend topping up once the level has dropped this far
pub const TOP_UP_THRESHOLD_INCHES: f64 = 1.0;

/// Hours of direct sunlight the pool receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SunExposure {
    /// 6+ hours direct sunlight
    Full,
    /// 3-6 hours direct sunlight
    Partial,
    /// 1-3 hours direct sunlight
    Minimal,
    /// No direct sunlight
    Shade,
}

impl SunExposure {
    pub const ALL: [SunExposure; 4] = [
        SunExposure::Full,
        SunExposure::Partial,
        SunExposure::Minimal,
        SunExposure::Shade,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            SunExposure::Full => 1.5,
            SunExposure::Partial => 1.2,
            SunExposure::Minimal => 1.0,
            SunExposure::Shade => 0.7,
        }
    }
}

/// Typical wind over the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindCondition {
    /// 0-5 mph
    Calm,
    /// 5-10 mph
    Light,
    /// 10-20 mph
    Moderate,
    /// 20+ mph
    Strong,
}

impl WindCondition {
    pub const ALL: [WindCondition; 4] = [
        WindCondition::Calm,
        WindCondition::Light,
        WindCondition::Moderate,
        WindCondition::Strong,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            WindCondition::Calm => 1.0,
            WindCondition::Light => 1.3,
            WindCondition::Moderate => 1.6,
            WindCondition::Strong => 2.0,
        }
    }
}

/// Input parameters for the evaporation calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dims": { "shape": "round", "diameter": { "value": 8.0, "unit": "feet" } },
///   "water_temp": { "value": 82.0, "unit": "fahrenheit" },
///   "air_temp": { "value": 75.0, "unit": "fahrenheit" },
///   "humidity_percent": 40.0,
///   "sun": "full",
///   "wind": "light"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaporationInput {
    pub dims: ShapeDimensions,
    pub water_temp: Temperature,
    pub air_temp: Temperature,
    /// Relative humidity, 0-100
    pub humidity_percent: f64,
    pub sun: SunExposure,
    pub wind: WindCondition,
}

impl EvaporationInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.dims.validate("dims")?;
        if !self.humidity_percent.is_finite()
            || self.humidity_percent < 0.0
            || self.humidity_percent > 100.0
        {
            return Err(CalcError::invalid_input(
                "humidity_percent",
                self.humidity_percent.to_string(),
                "Humidity must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

/// Results of the evaporation calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaporationResult {
    /// Water level drop in inches per day after all adjustments
    pub level_drop_inches_per_day: f64,
    pub daily_loss_gallons: f64,
    pub daily_loss_liters: f64,
    pub weekly_loss_gallons: f64,
    /// Daily loss under current conditions vs full sun with strong wind
    pub daily_loss: TwoTier,
    /// Recommended days between top-ups, at least 1
    pub top_up_every_days: u32,
}

/// Calculate evaporation losses and a top-up interval
pub fn calculate(input: &EvaporationInput) -> CalcResult<EvaporationResult> {
    input.validate()?;

    let area = input.dims.surface_area_sqft()?;
    let water_f = input.water_temp.canonical();
    let air_f = input.air_temp.canonical();

    // warmer water than air accelerates evaporation; the reverse does not slow it
    let temp_factor = 1.0 + (water_f - air_f).max(0.0) * TEMP_DIFFERENCE_FACTOR;
    let humidity_factor = 1.0 - input.humidity_percent / HUMIDITY_DIVISOR;

    let rate = BASE_RATE_INCHES_PER_DAY
        * temp_factor
        * humidity_factor
        * input.sun.factor()
        * input.wind.factor();

    let daily_loss_gallons = rate * area * GALLONS_PER_SQFT_INCH;
    let top_up = (TOP_UP_THRESHOLD_INCHES / rate).round().max(1.0);

    // Worst case: same water and weather, but full sun and strong wind
    let worst_rate = BASE_RATE_INCHES_PER_DAY
        * temp_factor
        * humidity_factor
        * SunExposure::Full.factor()
        * WindCondition::Strong.factor();
    let worst_loss_gallons = worst_rate * area * GALLONS_PER_SQFT_INCH;

    Ok(EvaporationResult {
        level_drop_inches_per_day: rate,
        daily_loss_gallons,
        daily_loss_liters: daily_loss_gallons * LITERS_PER_GALLON,
        weekly_loss_gallons: daily_loss_gallons * 7.0,
        daily_loss: TwoTier::new(daily_loss_gallons, worst_loss_gallons),
        top_up_every_days: top_up as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Length, LengthUnit, TemperatureUnit};

    fn base_input() -> EvaporationInput {
        EvaporationInput {
            dims: ShapeDimensions::Rectangular {
                length: Length::new(10.0, LengthUnit::Feet),
                width: Length::new(10.0, LengthUnit::Feet),
            },
            water_temp: Temperature::new(75.0, TemperatureUnit::Fahrenheit),
            air_temp: Temperature::new(75.0, TemperatureUnit::Fahrenheit),
            humidity_percent: 0.0,
            sun: SunExposure::Minimal,
            wind: WindCondition::Calm,
        }
    }

    #[test]
    fn test_neutral_conditions_give_base_rate() {
        let result = calculate(&base_input()).unwrap();
        assert!((result.level_drop_inches_per_day - 0.1).abs() < 1e-9);
        // 0.1 in/day × 100 sqft × 0.623 = 6.23 gal/day
        assert!((result.daily_loss_gallons - 6.23).abs() < 1e-9);
        assert!((result.weekly_loss_gallons - 43.61).abs() < 1e-9);
        assert_eq!(result.top_up_every_days, 10);
        // worst case is full sun (1.5) and strong wind (2.0): 6.23 x 3
        assert!((result.daily_loss.extreme - 18.69).abs() < 1e-9);
        assert!(!result.daily_loss.is_inverted());
    }

    #[test]
    fn test_warm_water_increases_rate() {
        let input = EvaporationInput {
            water_temp: Temperature::new(85.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 10 °F difference: 0.1 × 1.1
        assert!((result.level_drop_inches_per_day - 0.11).abs() < 1e-9);
    }

    #[test]
    fn test_cool_water_does_not_slow_rate() {
        let input = EvaporationInput {
            water_temp: Temperature::new(60.0, TemperatureUnit::Fahrenheit),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!((result.level_drop_inches_per_day - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_humidity_and_weather_factors() {
        let input = EvaporationInput {
            humidity_percent: 50.0,
            sun: SunExposure::Full,
            wind: WindCondition::Strong,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 0.1 × (1 - 50/200) × 1.5 × 2.0 = 0.225
        assert!((result.level_drop_inches_per_day - 0.225).abs() < 1e-9);
        assert_eq!(result.top_up_every_days, 4);
    }

    #[test]
    fn test_celsius_temperatures_accepted() {
        let input = EvaporationInput {
            water_temp: Temperature::new(29.444444, TemperatureUnit::Celsius),
            air_temp: Temperature::new(23.888889, TemperatureUnit::Celsius),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // ≈ 85 °F water, 75 °F air
        assert!((result.level_drop_inches_per_day - 0.11).abs() < 1e-6);
    }

    #[test]
    fn test_humidity_out_of_range_rejected() {
        let input = EvaporationInput {
            humidity_percent: 120.0,
            ..base_input()
        };
        assert!(calculate(&input).is_err());
    }
}
