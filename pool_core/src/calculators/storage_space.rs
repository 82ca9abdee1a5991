//! # Storage Space Calculator
//!
//! Works out how much room a pool needs in the off-season: packed-down
//! volume and dimensions, a container recommendation, and preparation steps
//! before it goes into storage.

use serde::{Deserialize, Serialize};

use crate::calculators::PoolType;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::ShapeDimensions;
use crate::units::Length;

/// Packed-down volume as a fraction of the erected bulk volume
pub fn deflation_factor(pool_type: PoolType) -> f64 {
    match pool_type {
        PoolType::Inflatable => 0.05,
        PoolType::Framed => 0.25,
        // rigid shells do not pack down at all
        PoolType::Rigid => 1.0,
        PoolType::Softside => 0.15,
    }
}

/// Where the pool will be stored over the off-season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageLocation {
    Indoor,
    Garage,
    Shed,
    Outdoor,
}

/// Erected-bulk size bucket, by cubic feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulkCategory {
    Small,
    Medium,
    Large,
}

impl BulkCategory {
    pub fn from_cuft(cuft: f64) -> BulkCategory {
        if cuft < 50.0 {
            BulkCategory::Small
        } else if cuft < 200.0 {
            BulkCategory::Medium
        } else {
            BulkCategory::Large
        }
    }
}

/// Input parameters for the storage space calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dims": { "shape": "round", "diameter": { "value": 8.0, "unit": "feet" } },
///   "wall_height": { "value": 2.0, "unit": "feet" },
///   "pool_type": "inflatable",
///   "location": "garage",
///   "climate_controlled": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageInput {
    pub dims: ShapeDimensions,
    /// Wall height of the erected pool, not the water depth
    pub wall_height: Length,
    pub pool_type: PoolType,
    pub location: StorageLocation,
    pub climate_controlled: bool,
}

impl StorageInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.dims.validate("dims")?;
        if !self.wall_height.value.is_finite() || self.wall_height.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "wall_height",
                self.wall_height.value.to_string(),
                "Wall height must be positive",
            ));
        }
        Ok(())
    }
}

/// Packed-down footprint and height in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageDimensions {
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
    /// False for rigid shells that store as-is
    pub folded: bool,
}

/// Results of the storage space calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageResult {
    pub erected_volume_cuft: f64,
    pub storage_volume_cuft: f64,
    pub bulk: BulkCategory,
    pub dimensions: StorageDimensions,
    pub recommended_container: String,
    pub preparation_steps: Vec<String>,
}

/// Calculate packed-down storage requirements
pub fn calculate(input: &StorageInput) -> CalcResult<StorageResult> {
    input.validate()?;

    let footprint = input.dims.surface_area_sqft()?;
    let height = input.wall_height.canonical();
    let erected = footprint * height;

    let factor = deflation_factor(input.pool_type);
    let storage = erected * factor;
    let bulk = BulkCategory::from_cuft(erected);

    let dimensions = storage_dimensions(input, footprint, height, factor);

    Ok(StorageResult {
        erected_volume_cuft: erected,
        storage_volume_cuft: storage,
        bulk,
        dimensions,
        recommended_container: container(input.pool_type, bulk),
        preparation_steps: preparation_steps(input),
    })
}

fn storage_dimensions(
    input: &StorageInput,
    footprint: f64,
    height: f64,
    factor: f64,
) -> StorageDimensions {
    let (length, width) = match input.dims {
        ShapeDimensions::Round { diameter } => {
            let d = diameter.canonical();
            (d, d)
        }
        ShapeDimensions::Rectangular { length, width } => {
            (length.canonical(), width.canonical())
        }
        ShapeDimensions::Oval {
            major_axis,
            minor_axis,
        } => (major_axis.canonical(), minor_axis.canonical()),
        ShapeDimensions::Irregular { .. } => {
            let side = footprint.sqrt();
            (side, side)
        }
    };

    if input.pool_type == PoolType::Rigid {
        return StorageDimensions {
            length_ft: length,
            width_ft: width,
            height_ft: height,
            folded: false,
        };
    }

    // folded bundle: longest side shrinks with the deflation factor
    StorageDimensions {
        length_ft: length.max(width) * factor.sqrt() * 2.0,
        width_ft: length.max(width) * factor.sqrt(),
        height_ft: (height * factor).max(0.25),
        folded: true,
    }
}

fn container(pool_type: PoolType, bulk: BulkCategory) -> String {
    let text = match pool_type {
        PoolType::Rigid => "No container needed, can be stored as-is",
        PoolType::Inflatable | PoolType::Softside => match bulk {
            BulkCategory::Small => "Storage bag or original packaging",
            BulkCategory::Medium => "Plastic storage bin (18-22 gallons)",
            BulkCategory::Large => "Large plastic storage bin (30+ gallons)",
        },
        PoolType::Framed => match bulk {
            BulkCategory::Small => "Plastic storage bin (18-22 gallons)",
            BulkCategory::Medium => "Large plastic storage bin (30+ gallons)",
            BulkCategory::Large => "Multiple storage bins or dedicated storage bag",
        },
    };
    text.to_string()
}

fn preparation_steps(input: &StorageInput) -> Vec<String> {
    let mut steps: Vec<String> = vec![
        "Drain the pool completely and wipe out any remaining water".to_string(),
        "Clean all surfaces with mild soap and rinse thoroughly".to_string(),
        "Dry the pool fully in the sun; trapped moisture causes mildew in storage"
            .to_string(),
    ];

    match input.pool_type {
        PoolType::Inflatable => {
            steps.push("Deflate all chambers fully, pressing out trapped air as you fold".to_string());
            steps.push("Fold loosely with talcum powder between layers to prevent sticking".to_string());
        }
        PoolType::Framed => {
            steps.push("Disassemble the frame and bundle poles together with ties".to_string());
            steps.push("Bag small connectors and hardware so nothing goes missing".to_string());
        }
        PoolType::Rigid => {
            steps.push("Store upright or upside down so water cannot pool inside".to_string());
        }
        PoolType::Softside => {
            steps.push("Collapse the sides inward and fold flat".to_string());
        }
    }

    if !input.climate_controlled {
        steps.push(
            "Without climate control, keep the pool off concrete floors and away from \
             direct sun to limit temperature swings"
                .to_string(),
        );
    }
    if input.location == StorageLocation::Outdoor {
        steps.push(
            "For outdoor storage, use a waterproof container raised off the ground and \
             check it periodically for pests"
                .to_string(),
        );
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    fn base_input() -> StorageInput {
        StorageInput {
            dims: ShapeDimensions::Rectangular {
                length: Length::new(10.0, LengthUnit::Feet),
                width: Length::new(6.0, LengthUnit::Feet),
            },
            wall_height: Length::new(2.0, LengthUnit::Feet),
            pool_type: PoolType::Inflatable,
            location: StorageLocation::Garage,
            climate_controlled: false,
        }
    }

    #[test]
    fn test_inflatable_packs_to_five_percent() {
        let result = calculate(&base_input()).unwrap();
        assert!((result.erected_volume_cuft - 120.0).abs() < 1e-9);
        assert!((result.storage_volume_cuft - 6.0).abs() < 1e-9);
        assert_eq!(result.bulk, BulkCategory::Medium);
        assert!(result.dimensions.folded);
    }

    #[test]
    fn test_rigid_does_not_fold() {
        let input = StorageInput {
            pool_type: PoolType::Rigid,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!((result.storage_volume_cuft - result.erected_volume_cuft).abs() < 1e-9);
        assert!(!result.dimensions.folded);
        assert_eq!(result.dimensions.length_ft, 10.0);
        assert_eq!(result.dimensions.height_ft, 2.0);
        assert!(result.recommended_container.contains("as-is"));
    }

    #[test]
    fn test_bulk_categories() {
        assert_eq!(BulkCategory::from_cuft(10.0), BulkCategory::Small);
        assert_eq!(BulkCategory::from_cuft(50.0), BulkCategory::Medium);
        assert_eq!(BulkCategory::from_cuft(200.0), BulkCategory::Large);
    }

    #[test]
    fn test_framed_large_container() {
        let input = StorageInput {
            dims: ShapeDimensions::Round {
                diameter: Length::new(12.0, LengthUnit::Feet),
            },
            pool_type: PoolType::Framed,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // π × 36 × 2 ≈ 226 cuft
        assert_eq!(result.bulk, BulkCategory::Large);
        assert!(result.recommended_container.contains("Multiple"));
        assert!(result
            .preparation_steps
            .iter()
            .any(|s| s.contains("Disassemble")));
    }

    #[test]
    fn test_outdoor_storage_step() {
        let input = StorageInput {
            location: StorageLocation::Outdoor,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!(result
            .preparation_steps
            .iter()
            .any(|s| s.contains("outdoor storage")));
    }
}
