//! # Shape Geometry
//!
//! Closed-form surface areas and volumes for the supported pool shapes.
//!
//! Area formulas operate on canonical-unit values; [`ShapeDimensions`] does the
//! unit conversion up front via [`crate::units`], so the formulas themselves
//! never see meters or centimeters. There is no fallback shape: an unknown
//! shape tag fails at the parse boundary with [`CalcError::UnknownShape`].
//!
//! ## Example
//!
//! ```rust
//! use pool_core::geometry::ShapeDimensions;
//! use pool_core::units::{Length, LengthUnit};
//!
//! let dims = ShapeDimensions::Round {
//!     diameter: Length::new(5.0, LengthUnit::Feet),
//! };
//! let area = dims.surface_area_sqft().unwrap();
//! assert!((area - 19.635).abs() < 0.001); // π × 2.5²
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Area, Length, GALLONS_PER_CUBIC_FOOT};

/// Discriminator selecting which closed-form area formula applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolShape {
    Round,
    Rectangular,
    Oval,
    Irregular,
}

impl PoolShape {
    pub const ALL: [PoolShape; 4] = [
        PoolShape::Round,
        PoolShape::Rectangular,
        PoolShape::Oval,
        PoolShape::Irregular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PoolShape::Round => "round",
            PoolShape::Rectangular => "rectangular",
            PoolShape::Oval => "oval",
            PoolShape::Irregular => "irregular",
        }
    }
}

impl fmt::Display for PoolShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PoolShape {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "round" | "circular" => Ok(PoolShape::Round),
            "rectangular" => Ok(PoolShape::Rectangular),
            "oval" => Ok(PoolShape::Oval),
            "irregular" => Ok(PoolShape::Irregular),
            other => Err(CalcError::unknown_shape(other)),
        }
    }
}

/// Pool footprint dimensions, one variant per shape.
///
/// Measurements carry their own unit tags and are converted to canonical feet
/// (or square feet) when the area is computed.
///
/// ## JSON Examples
///
/// ```json
/// { "shape": "round", "diameter": { "value": 5.0, "unit": "feet" } }
/// ```
///
/// ```json
/// {
///   "shape": "rectangular",
///   "length": { "value": 3.0, "unit": "meters" },
///   "width": { "value": 150.0, "unit": "cm" }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum ShapeDimensions {
    Round {
        diameter: Length,
    },
    Rectangular {
        length: Length,
        width: Length,
    },
    Oval {
        major_axis: Length,
        minor_axis: Length,
    },
    /// Area supplied directly by the user (no closed form)
    Irregular {
        surface_area: Area,
    },
}

impl ShapeDimensions {
    pub fn shape(&self) -> PoolShape {
        match self {
            ShapeDimensions::Round { .. } => PoolShape::Round,
            ShapeDimensions::Rectangular { .. } => PoolShape::Rectangular,
            ShapeDimensions::Oval { .. } => PoolShape::Oval,
            ShapeDimensions::Irregular { .. } => PoolShape::Irregular,
        }
    }

    /// Validate that every dimension is a positive, finite number.
    ///
    /// `field_prefix` names the input group in error messages (e.g. "dims").
    pub fn validate(&self, field_prefix: &str) -> CalcResult<()> {
        let check = |field: &str, value: f64| -> CalcResult<()> {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("{field_prefix}.{field}"),
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
            Ok(())
        };

        match self {
            ShapeDimensions::Round { diameter } => check("diameter", diameter.value),
            ShapeDimensions::Rectangular { length, width } => {
                check("length", length.value)?;
                check("width", width.value)
            }
            ShapeDimensions::Oval {
                major_axis,
                minor_axis,
            } => {
                check("major_axis", major_axis.value)?;
                check("minor_axis", minor_axis.value)
            }
            ShapeDimensions::Irregular { surface_area } => {
                check("surface_area", surface_area.value)
            }
        }
    }

    /// Surface area in canonical square feet.
    ///
    /// - round: `π × (diameter/2)²`
    /// - rectangular: `length × width`
    /// - oval: `π × (major/2) × (minor/2)`
    /// - irregular: user-supplied area, converted from square meters if needed
    pub fn surface_area_sqft(&self) -> CalcResult<f64> {
        self.validate("dims")?;
        let area = match self {
            ShapeDimensions::Round { diameter } => {
                let radius = diameter.canonical() / 2.0;
                std::f64::consts::PI * radius * radius
            }
            ShapeDimensions::Rectangular { length, width } => {
                length.canonical() * width.canonical()
            }
            ShapeDimensions::Oval {
                major_axis,
                minor_axis,
            } => {
                std::f64::consts::PI * (major_axis.canonical() / 2.0)
                    * (minor_axis.canonical() / 2.0)
            }
            ShapeDimensions::Irregular { surface_area } => surface_area.canonical(),
        };
        Ok(area)
    }
}

/// Volume in cubic feet from a canonical surface area and depth
pub fn volume_cuft(surface_area_sqft: f64, depth_ft: f64) -> f64 {
    surface_area_sqft * depth_ft
}

/// Convert cubic feet of water to gallons
pub fn cuft_to_gallons(cuft: f64) -> f64 {
    cuft * GALLONS_PER_CUBIC_FOOT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AreaUnit, LengthUnit};

    #[test]
    fn test_round_area_reference_value() {
        let dims = ShapeDimensions::Round {
            diameter: Length::new(10.0, LengthUnit::Feet),
        };
        // π × 5² = 78.54
        assert!((dims.surface_area_sqft().unwrap() - 78.54).abs() < 0.01);
    }

    #[test]
    fn test_rectangular_area_reference_value() {
        let dims = ShapeDimensions::Rectangular {
            length: Length::new(10.0, LengthUnit::Feet),
            width: Length::new(5.0, LengthUnit::Feet),
        };
        assert_eq!(dims.surface_area_sqft().unwrap(), 50.0);
    }

    #[test]
    fn test_oval_area_reference_value() {
        let dims = ShapeDimensions::Oval {
            major_axis: Length::new(10.0, LengthUnit::Feet),
            minor_axis: Length::new(5.0, LengthUnit::Feet),
        };
        // π × 5 × 2.5 = 39.27
        assert!((dims.surface_area_sqft().unwrap() - 39.27).abs() < 0.01);
    }

    #[test]
    fn test_irregular_area_converts_square_meters() {
        let dims = ShapeDimensions::Irregular {
            surface_area: Area::new(2.0, AreaUnit::SquareMeters),
        };
        assert!((dims.surface_area_sqft().unwrap() - 21.5278).abs() < 0.001);
    }

    #[test]
    fn test_mixed_unit_rectangle() {
        let dims = ShapeDimensions::Rectangular {
            length: Length::new(1.0, LengthUnit::Meters),
            width: Length::new(100.0, LengthUnit::Centimeters),
        };
        // 3.28084 ft × 3.28084 ft
        assert!((dims.surface_area_sqft().unwrap() - 10.7639).abs() < 0.001);
    }

    #[test]
    fn test_volume_and_gallons() {
        let dims = ShapeDimensions::Round {
            diameter: Length::new(5.0, LengthUnit::Feet),
        };
        let area = dims.surface_area_sqft().unwrap();
        let volume = volume_cuft(area, 1.0);
        assert!((volume - 19.635).abs() < 0.001);
        assert!((cuft_to_gallons(volume) - 146.9).abs() < 0.05);
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let dims = ShapeDimensions::Round {
            diameter: Length::new(-5.0, LengthUnit::Feet),
        };
        let err = dims.surface_area_sqft().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_shape_tag_fails() {
        let err = "triangle".parse::<PoolShape>().unwrap_err();
        assert_eq!(err, CalcError::unknown_shape("triangle"));
    }

    #[test]
    fn test_shape_dimensions_serde() {
        let dims = ShapeDimensions::Oval {
            major_axis: Length::new(10.0, LengthUnit::Feet),
            minor_axis: Length::new(5.0, LengthUnit::Feet),
        };
        let json = serde_json::to_string(&dims).unwrap();
        assert!(json.contains(r#""shape":"oval""#));
        let roundtrip: ShapeDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, roundtrip);
    }
}
