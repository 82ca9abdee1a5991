//! # Units & Conversion
//!
//! One converter for every measurement the calculators accept. Each dimension
//! has a canonical unit, and every other unit in the dimension converts to it:
//!
//! | Dimension   | Canonical   | Others                      |
//! |-------------|-------------|-----------------------------|
//! | Length      | feet        | meters, inches, centimeters |
//! | Volume      | gallons     | liters                      |
//! | Temperature | fahrenheit  | celsius                     |
//! | Weight      | pounds      | kilograms                   |
//! | Area        | square-feet | square-meters               |
//!
//! Temperature is affine (`F = C * 9/5 + 32`); everything else is a scalar
//! factor. Parsing an unrecognized unit tag is a hard [`CalcError::UnknownUnit`]
//! rather than a passthrough of the raw value; a calculator must never treat
//! an unconverted number as canonical.
//!
//! ## Example
//!
//! ```rust
//! use pool_core::units::{LengthUnit, Measurement, Unit};
//!
//! let depth = Measurement::new(18.0, LengthUnit::Inches);
//! assert!((depth.canonical() - 1.5).abs() < 1e-12); // 18 in = 1.5 ft
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

// Conversion constants, matching the values the calculators were specified with.
pub const FEET_PER_METER: f64 = 3.28084;
pub const INCHES_PER_FOOT: f64 = 12.0;
pub const FEET_PER_CM: f64 = 0.0328084;
pub const LITERS_PER_GALLON: f64 = 3.78541;
pub const GALLONS_PER_LITER: f64 = 0.264172;
pub const SQFT_PER_SQM: f64 = 10.7639;
pub const LBS_PER_KG: f64 = 2.20462;

/// Gallons in one cubic foot of water
pub const GALLONS_PER_CUBIC_FOOT: f64 = 7.48052;

/// Measurement dimension. Conversion is only defined within a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Length,
    Volume,
    Temperature,
    Weight,
    Area,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Volume => "volume",
            Dimension::Temperature => "temperature",
            Dimension::Weight => "weight",
            Dimension::Area => "area",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit tag belonging to exactly one dimension.
///
/// `to_canonical` / `from_canonical` must round-trip within 1e-9 relative
/// tolerance, and converting a value already in the canonical unit is the
/// identity.
pub trait Unit: Copy + PartialEq + Sized {
    /// The dimension this unit family belongs to
    const DIMENSION: Dimension;

    /// The canonical unit of the dimension
    fn canonical() -> Self;

    /// Express `value` (in `self` units) in the canonical unit
    fn to_canonical(&self, value: f64) -> f64;

    /// Express `value` (in canonical units) in `self` units
    fn from_canonical(&self, value: f64) -> f64;

    /// The tag string this unit serializes as
    fn tag(&self) -> &'static str;

    fn is_canonical(&self) -> bool {
        *self == Self::canonical()
    }
}

/// Convert `value` from one unit of a dimension to another
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    to.from_canonical(from.to_canonical(value))
}

// ============================================================================
// Length
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LengthUnit {
    #[default]
    Feet,
    Meters,
    Inches,
    #[serde(rename = "cm", alias = "centimeters")]
    Centimeters,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Feet,
        LengthUnit::Meters,
        LengthUnit::Inches,
        LengthUnit::Centimeters,
    ];
}

impl Unit for LengthUnit {
    const DIMENSION: Dimension = Dimension::Length;

    fn canonical() -> Self {
        LengthUnit::Feet
    }

    fn to_canonical(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Feet => value,
            LengthUnit::Meters => value * FEET_PER_METER,
            LengthUnit::Inches => value / INCHES_PER_FOOT,
            LengthUnit::Centimeters => value * FEET_PER_CM,
        }
    }

    fn from_canonical(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Feet => value,
            LengthUnit::Meters => value / FEET_PER_METER,
            LengthUnit::Inches => value * INCHES_PER_FOOT,
            LengthUnit::Centimeters => value / FEET_PER_CM,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            LengthUnit::Feet => "feet",
            LengthUnit::Meters => "meters",
            LengthUnit::Inches => "inches",
            LengthUnit::Centimeters => "cm",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "feet" => Ok(LengthUnit::Feet),
            "meters" => Ok(LengthUnit::Meters),
            "inches" => Ok(LengthUnit::Inches),
            "cm" | "centimeters" => Ok(LengthUnit::Centimeters),
            other => Err(CalcError::unknown_unit(other, Dimension::Length.as_str())),
        }
    }
}

// ============================================================================
// Volume
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeUnit {
    #[default]
    Gallons,
    Liters,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 2] = [VolumeUnit::Gallons, VolumeUnit::Liters];
}

impl Unit for VolumeUnit {
    const DIMENSION: Dimension = Dimension::Volume;

    fn canonical() -> Self {
        VolumeUnit::Gallons
    }

    fn to_canonical(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::Gallons => value,
            // Divide by the same constant from_canonical multiplies by, so the
            // round-trip holds to 1e-9 (0.264172 is a truncated reciprocal).
            VolumeUnit::Liters => value / LITERS_PER_GALLON,
        }
    }

    fn from_canonical(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::Gallons => value,
            VolumeUnit::Liters => value * LITERS_PER_GALLON,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::Liters => "liters",
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "gallons" => Ok(VolumeUnit::Gallons),
            "liters" => Ok(VolumeUnit::Liters),
            other => Err(CalcError::unknown_unit(other, Dimension::Volume.as_str())),
        }
    }
}

// ============================================================================
// Temperature (affine, not scalar)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius];
}

impl Unit for TemperatureUnit {
    const DIMENSION: Dimension = Dimension::Temperature;

    fn canonical() -> Self {
        TemperatureUnit::Fahrenheit
    }

    fn to_canonical(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Fahrenheit => value,
            TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
        }
    }

    fn from_canonical(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Fahrenheit => value,
            TemperatureUnit::Celsius => (value - 32.0) * 5.0 / 9.0,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "celsius" => Ok(TemperatureUnit::Celsius),
            other => Err(CalcError::unknown_unit(
                other,
                Dimension::Temperature.as_str(),
            )),
        }
    }
}

// ============================================================================
// Weight
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeightUnit {
    #[default]
    Pounds,
    #[serde(alias = "kg")]
    Kilograms,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Pounds, WeightUnit::Kilograms];
}

impl Unit for WeightUnit {
    const DIMENSION: Dimension = Dimension::Weight;

    fn canonical() -> Self {
        WeightUnit::Pounds
    }

    fn to_canonical(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Pounds => value,
            WeightUnit::Kilograms => value * LBS_PER_KG,
        }
    }

    fn from_canonical(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Pounds => value,
            WeightUnit::Kilograms => value / LBS_PER_KG,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            WeightUnit::Pounds => "pounds",
            WeightUnit::Kilograms => "kilograms",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "pounds" | "lbs" => Ok(WeightUnit::Pounds),
            "kilograms" | "kg" => Ok(WeightUnit::Kilograms),
            other => Err(CalcError::unknown_unit(other, Dimension::Weight.as_str())),
        }
    }
}

// ============================================================================
// Area
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AreaUnit {
    #[default]
    SquareFeet,
    SquareMeters,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 2] = [AreaUnit::SquareFeet, AreaUnit::SquareMeters];
}

impl Unit for AreaUnit {
    const DIMENSION: Dimension = Dimension::Area;

    fn canonical() -> Self {
        AreaUnit::SquareFeet
    }

    fn to_canonical(&self, value: f64) -> f64 {
        match self {
            AreaUnit::SquareFeet => value,
            AreaUnit::SquareMeters => value * SQFT_PER_SQM,
        }
    }

    fn from_canonical(&self, value: f64) -> f64 {
        match self {
            AreaUnit::SquareFeet => value,
            AreaUnit::SquareMeters => value / SQFT_PER_SQM,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "square-feet",
            AreaUnit::SquareMeters => "square-meters",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "square-feet" => Ok(AreaUnit::SquareFeet),
            "square-meters" => Ok(AreaUnit::SquareMeters),
            other => Err(CalcError::unknown_unit(other, Dimension::Area.as_str())),
        }
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// A numeric value paired with its unit tag.
///
/// ## JSON Example
///
/// ```json
/// { "value": 18.0, "unit": "inches" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement<U: Unit> {
    pub value: f64,
    pub unit: U,
}

impl<U: Unit> Measurement<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// The value expressed in the dimension's canonical unit
    pub fn canonical(&self) -> f64 {
        self.unit.to_canonical(self.value)
    }

    /// The dimension this measurement belongs to
    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }
}

pub type Length = Measurement<LengthUnit>;
pub type Volume = Measurement<VolumeUnit>;
pub type Temperature = Measurement<TemperatureUnit>;
pub type Weight = Measurement<WeightUnit>;
pub type Area = Measurement<AreaUnit>;
