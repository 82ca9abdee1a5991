//! # Filled Weight Calculator
//!
//! Totals the weight of a filled pool (water, structure, occupants), computes
//! the load per square foot, and checks it against typical surface load
//! capacities.

use serde::{Deserialize, Serialize};

use crate::calculators::{PoolType, SizeCategory};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{cuft_to_gallons, volume_cuft, ShapeDimensions};
use crate::units::{Area, Length, Volume, Weight, LBS_PER_KG};

/// Weight of a gallon of water in pounds
pub const WATER_LBS_PER_GALLON: f64 = 8.34;

/// Surface the pool will sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceType {
    Balcony,
    ElevatedDeck,
    GroundLevelDeck,
    ConcretePatio,
    Lawn,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 5] = [
        SurfaceType::Balcony,
        SurfaceType::ElevatedDeck,
        SurfaceType::GroundLevelDeck,
        SurfaceType::ConcretePatio,
        SurfaceType::Lawn,
    ];

    /// Typical load capacity range in pounds per square foot
    pub fn capacity_psf(&self) -> (f64, f64) {
        match self {
            SurfaceType::Balcony => (40.0, 60.0),
            SurfaceType::ElevatedDeck => (40.0, 60.0),
            SurfaceType::GroundLevelDeck => (100.0, 150.0),
            SurfaceType::ConcretePatio => (400.0, 600.0),
            SurfaceType::Lawn => (200.0, 300.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SurfaceType::Balcony => "Apartment balcony",
            SurfaceType::ElevatedDeck => "Elevated deck",
            SurfaceType::GroundLevelDeck => "Ground-level deck",
            SurfaceType::ConcretePatio => "Concrete patio",
            SurfaceType::Lawn => "Lawn",
        }
    }

    fn guidance(&self) -> &'static str {
        match self {
            SurfaceType::Balcony => {
                "Most apartment balconies are NOT suitable for kiddie pools due to weight \
                 limitations and potential water damage risks."
            }
            SurfaceType::ElevatedDeck => {
                "Standard elevated decks can support smaller kiddie pools if the weight is \
                 distributed evenly and the deck is in good condition. For larger pools, \
                 consult a structural engineer."
            }
            SurfaceType::GroundLevelDeck => {
                "Ground-level decks can typically support most kiddie pools, but ensure the \
                 deck is in good condition and the weight is distributed evenly."
            }
            SurfaceType::ConcretePatio => {
                "Concrete patios are ideal for kiddie pools of all sizes, as they can easily \
                 support the weight."
            }
            SurfaceType::Lawn => {
                "Lawns can support most kiddie pools, but use a ground cloth to protect both \
                 the lawn and pool. Extended periods may damage grass due to lack of sunlight."
            }
        }
    }
}

/// Empty structure weight in pounds by type and size
pub fn empty_pool_lbs(pool_type: PoolType, size: SizeCategory) -> f64 {
    match pool_type {
        PoolType::Inflatable => match size {
            SizeCategory::Tiny => 3.0,
            SizeCategory::Small => 8.0,
            SizeCategory::Medium => 15.0,
            SizeCategory::Large => 25.0,
            SizeCategory::Xlarge => 40.0,
        },
        PoolType::Framed => match size {
            SizeCategory::Tiny => 15.0,
            SizeCategory::Small => 30.0,
            SizeCategory::Medium => 50.0,
            SizeCategory::Large => 80.0,
            SizeCategory::Xlarge => 120.0,
        },
        PoolType::Rigid => match size {
            SizeCategory::Tiny => 5.0,
            SizeCategory::Small => 12.0,
            SizeCategory::Medium => 20.0,
            SizeCategory::Large => 35.0,
            SizeCategory::Xlarge => 60.0,
        },
        PoolType::Softside => match size {
            SizeCategory::Tiny => 8.0,
            SizeCategory::Small => 15.0,
            SizeCategory::Medium => 25.0,
            SizeCategory::Large => 40.0,
            SizeCategory::Xlarge => 70.0,
        },
    }
}

/// Where the pool's footprint and water volume come from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum PoolGeometry {
    /// Full volume and footprint computed from dimensions
    Dimensions { dims: ShapeDimensions, depth: Length },
    /// Known volume and footprint entered directly
    Direct { volume: Volume, footprint: Area },
}

/// Input parameters for the filled weight calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": { "source": "dimensions",
///                 "dims": { "shape": "round", "diameter": { "value": 6.0, "unit": "feet" } },
///                 "depth": { "value": 15.0, "unit": "inches" } },
///   "pool_type": "inflatable",
///   "fill_percent": 90.0,
///   "occupants": 2,
///   "avg_occupant_weight": { "value": 50.0, "unit": "pounds" }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightInput {
    pub geometry: PoolGeometry,
    pub pool_type: PoolType,
    /// How full the pool is, 0-100
    pub fill_percent: f64,
    pub occupants: u32,
    pub avg_occupant_weight: Weight,
}

impl WeightInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.fill_percent.is_finite() || self.fill_percent <= 0.0 || self.fill_percent > 100.0
        {
            return Err(CalcError::invalid_input(
                "fill_percent",
                self.fill_percent.to_string(),
                "Fill level must be between 0 and 100 percent",
            ));
        }
        if !self.avg_occupant_weight.value.is_finite() || self.avg_occupant_weight.value < 0.0 {
            return Err(CalcError::invalid_input(
                "avg_occupant_weight",
                self.avg_occupant_weight.value.to_string(),
                "Occupant weight must not be negative",
            ));
        }
        match &self.geometry {
            PoolGeometry::Dimensions { dims, depth } => {
                dims.validate("geometry.dims")?;
                if !depth.value.is_finite() || depth.value <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "geometry.depth",
                        depth.value.to_string(),
                        "Depth must be positive",
                    ));
                }
            }
            PoolGeometry::Direct { volume, footprint } => {
                if !volume.value.is_finite() || volume.value <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "geometry.volume",
                        volume.value.to_string(),
                        "Volume must be positive",
                    ));
                }
                if !footprint.value.is_finite() || footprint.value <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "geometry.footprint",
                        footprint.value.to_string(),
                        "Footprint area must be positive",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Suitability verdict for one surface type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceVerdict {
    pub surface: SurfaceType,
    pub suitable: bool,
    pub guidance: String,
}

/// Results of the filled weight calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightResult {
    pub water_weight_lbs: f64,
    pub empty_pool_lbs: f64,
    pub occupant_weight_lbs: f64,
    pub total_weight_lbs: f64,
    pub total_weight_kg: f64,
    /// Load spread over the pool footprint
    pub load_psf: f64,
    pub surfaces: Vec<SurfaceVerdict>,
}

/// Calculate total filled weight and surface suitability
pub fn calculate(input: &WeightInput) -> CalcResult<WeightResult> {
    input.validate()?;

    let (full_gallons, footprint_sqft) = match &input.geometry {
        PoolGeometry::Dimensions { dims, depth } => {
            let area = dims.surface_area_sqft()?;
            (cuft_to_gallons(volume_cuft(area, depth.canonical())), area)
        }
        PoolGeometry::Direct { volume, footprint } => (volume.canonical(), footprint.canonical()),
    };

    let water_gallons = full_gallons * input.fill_percent / 100.0;
    let water_weight_lbs = water_gallons * WATER_LBS_PER_GALLON;

    // structure weight is bucketed by the full (not filled) volume
    let size = SizeCategory::from_gallons(full_gallons);
    let empty_lbs = empty_pool_lbs(input.pool_type, size);

    let occupant_weight_lbs =
        f64::from(input.occupants) * input.avg_occupant_weight.canonical();

    let total = water_weight_lbs + empty_lbs + occupant_weight_lbs;
    let load_psf = total / footprint_sqft;

    let surfaces = SurfaceType::ALL
        .iter()
        .map(|s| {
            let (_, max) = s.capacity_psf();
            let suitable = load_psf <= max;
            let guidance = if suitable {
                s.guidance().to_string()
            } else {
                format!(
                    "This surface's maximum capacity of {max:.0} lbs/sqft is exceeded. {}",
                    s.guidance()
                )
            };
            SurfaceVerdict {
                surface: *s,
                suitable,
                guidance,
            }
        })
        .collect();

    Ok(WeightResult {
        water_weight_lbs,
        empty_pool_lbs: empty_lbs,
        occupant_weight_lbs,
        total_weight_lbs: total,
        total_weight_kg: total / LBS_PER_KG,
        load_psf,
        surfaces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AreaUnit, VolumeUnit, WeightUnit};

    fn direct(gallons: f64, sqft: f64) -> PoolGeometry {
        PoolGeometry::Direct {
            volume: Volume::new(gallons, VolumeUnit::Gallons),
            footprint: Area::new(sqft, AreaUnit::SquareFeet),
        }
    }

    #[test]
    fn test_weight_breakdown() {
        let input = WeightInput {
            geometry: direct(200.0, 50.0),
            pool_type: PoolType::Inflatable,
            fill_percent: 100.0,
            occupants: 2,
            avg_occupant_weight: Weight::new(50.0, WeightUnit::Pounds),
        };
        let result = calculate(&input).unwrap();
        assert!((result.water_weight_lbs - 1668.0).abs() < 1e-9);
        // 200 gal is the medium bucket for inflatables
        assert!((result.empty_pool_lbs - 15.0).abs() < 1e-9);
        assert!((result.occupant_weight_lbs - 100.0).abs() < 1e-9);
        assert!((result.total_weight_lbs - 1783.0).abs() < 1e-9);
        assert!((result.load_psf - 1783.0 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fill_level_scales_water_only() {
        let full = WeightInput {
            geometry: direct(200.0, 50.0),
            pool_type: PoolType::Framed,
            fill_percent: 100.0,
            occupants: 0,
            avg_occupant_weight: Weight::new(0.0, WeightUnit::Pounds),
        };
        let half = WeightInput {
            fill_percent: 50.0,
            ..full
        };
        let a = calculate(&full).unwrap();
        let b = calculate(&half).unwrap();
        assert!((b.water_weight_lbs - a.water_weight_lbs / 2.0).abs() < 1e-9);
        assert_eq!(a.empty_pool_lbs, b.empty_pool_lbs);
    }

    #[test]
    fn test_surface_verdicts() {
        let input = WeightInput {
            geometry: direct(300.0, 30.0),
            pool_type: PoolType::Rigid,
            fill_percent: 100.0,
            occupants: 0,
            avg_occupant_weight: Weight::new(0.0, WeightUnit::Pounds),
        };
        let result = calculate(&input).unwrap();
        // 300 × 8.34 + 35 = 2537 lbs across 30 sqft ≈ 84.6 psf
        assert!(result.load_psf > 60.0 && result.load_psf < 100.0);
        let balcony = result
            .surfaces
            .iter()
            .find(|s| s.surface == SurfaceType::Balcony)
            .unwrap();
        assert!(!balcony.suitable);
        let patio = result
            .surfaces
            .iter()
            .find(|s| s.surface == SurfaceType::ConcretePatio)
            .unwrap();
        assert!(patio.suitable);
    }

    #[test]
    fn test_kilogram_occupant_weight() {
        let input = WeightInput {
            geometry: direct(100.0, 20.0),
            pool_type: PoolType::Softside,
            fill_percent: 100.0,
            occupants: 1,
            avg_occupant_weight: Weight::new(20.0, WeightUnit::Kilograms),
        };
        let result = calculate(&input).unwrap();
        assert!((result.occupant_weight_lbs - 20.0 * LBS_PER_KG).abs() < 1e-9);
    }

    #[test]
    fn test_overfill_rejected() {
        let input = WeightInput {
            geometry: direct(100.0, 20.0),
            pool_type: PoolType::Inflatable,
            fill_percent: 120.0,
            occupants: 0,
            avg_occupant_weight: Weight::new(0.0, WeightUnit::Pounds),
        };
        assert!(calculate(&input).is_err());
    }
}
