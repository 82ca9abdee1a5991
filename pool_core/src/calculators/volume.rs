//! # Water Volume Calculator
//!
//! Computes how much water a pool holds from its footprint and depth, plus
//! fill time at a typical garden-hose flow and the water cost at the average
//! US rate.
//!
//! ## Example
//!
//! ```rust
//! use pool_core::calculators::volume::{calculate, VolumeInput};
//! use pool_core::geometry::ShapeDimensions;
//! use pool_core::units::{Length, LengthUnit};
//!
//! let input = VolumeInput {
//!     dims: ShapeDimensions::Rectangular {
//!         length: Length::new(6.0, LengthUnit::Feet),
//!         width: Length::new(4.0, LengthUnit::Feet),
//!     },
//!     depth: Length::new(15.0, LengthUnit::Inches),
//! };
//! let result = calculate(&input).unwrap();
//! assert!(result.gallons > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{cuft_to_gallons, volume_cuft, ShapeDimensions};
use crate::units::{Length, LITERS_PER_GALLON};

/// Average garden hose flow in gallons per minute
pub const AVG_HOSE_GPM: f64 = 13.0;

/// Average US water rate in dollars per gallon
pub const AVG_WATER_COST_PER_GALLON: f64 = 0.004;

/// Input parameters for the water volume calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dims": { "shape": "round", "diameter": { "value": 5.0, "unit": "feet" } },
///   "depth": { "value": 1.0, "unit": "feet" }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeInput {
    /// Pool footprint dimensions
    pub dims: ShapeDimensions,
    /// Water depth (not pool wall height)
    pub depth: Length,
}

impl VolumeInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.dims.validate("dims")?;
        if !self.depth.value.is_finite() || self.depth.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "depth",
                self.depth.value.to_string(),
                "Depth must be positive",
            ));
        }
        Ok(())
    }
}

/// Results of the water volume calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeResult {
    pub cubic_feet: f64,
    pub gallons: f64,
    pub liters: f64,
    /// Minutes to fill at the average garden hose flow
    pub fill_time_minutes: f64,
    /// Dollars to fill at the average US water rate
    pub water_cost_usd: f64,
}

/// Calculate water volume and the derived fill-time/cost estimates
pub fn calculate(input: &VolumeInput) -> CalcResult<VolumeResult> {
    input.validate()?;

    let area = input.dims.surface_area_sqft()?;
    let cubic_feet = volume_cuft(area, input.depth.canonical());
    let gallons = cuft_to_gallons(cubic_feet);
    let liters = gallons * LITERS_PER_GALLON;

    Ok(VolumeResult {
        cubic_feet,
        gallons,
        liters,
        fill_time_minutes: gallons / AVG_HOSE_GPM,
        water_cost_usd: gallons * AVG_WATER_COST_PER_GALLON,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    #[test]
    fn test_round_pool_reference_volume() {
        // round, diameter 5 ft, depth 1 ft: π × 2.5² × 1 ≈ 19.635 cuft ≈ 146.9 gal
        let input = VolumeInput {
            dims: ShapeDimensions::Round {
                diameter: Length::new(5.0, LengthUnit::Feet),
            },
            depth: Length::new(1.0, LengthUnit::Feet),
        };
        let result = calculate(&input).unwrap();
        assert!((result.cubic_feet - 19.635).abs() < 0.001);
        assert!((result.gallons - 146.9).abs() < 0.05);
    }

    #[test]
    fn test_depth_unit_is_converted() {
        let in_feet = VolumeInput {
            dims: ShapeDimensions::Rectangular {
                length: Length::new(6.0, LengthUnit::Feet),
                width: Length::new(4.0, LengthUnit::Feet),
            },
            depth: Length::new(1.5, LengthUnit::Feet),
        };
        let in_inches = VolumeInput {
            depth: Length::new(18.0, LengthUnit::Inches),
            ..in_feet
        };
        let a = calculate(&in_feet).unwrap();
        let b = calculate(&in_inches).unwrap();
        assert!((a.gallons - b.gallons).abs() < 1e-9);
    }

    #[test]
    fn test_fill_time_and_cost() {
        let input = VolumeInput {
            dims: ShapeDimensions::Rectangular {
                length: Length::new(10.0, LengthUnit::Feet),
                width: Length::new(5.0, LengthUnit::Feet),
            },
            depth: Length::new(1.0, LengthUnit::Feet),
        };
        let result = calculate(&input).unwrap();
        // 50 cuft × 7.48052 = 374.026 gal
        assert!((result.gallons - 374.026).abs() < 0.001);
        assert!((result.fill_time_minutes - 374.026 / 13.0).abs() < 0.001);
        assert!((result.water_cost_usd - 374.026 * 0.004).abs() < 0.001);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let input = VolumeInput {
            dims: ShapeDimensions::Round {
                diameter: Length::new(5.0, LengthUnit::Feet),
            },
            depth: Length::new(0.0, LengthUnit::Feet),
        };
        assert!(calculate(&input).is_err());
    }
}
