//! Calculator modules.
//!
//! Each calculator follows the same pattern: an `*Input` struct that
//! deserializes from JSON and validates itself, a pure `calculate` function,
//! and a `*Result` struct that serializes back to JSON. The [`CalculatorInput`]
//! enum dispatches a tagged JSON request to the right calculator.

pub mod capacity;
pub mod chemical_treatment;
pub mod cleaning_time;
pub mod cost;
pub mod drainage;
pub mod evaporation;
pub mod heating_cost;
pub mod maintenance;
pub mod setup_time;
pub mod storage_space;
pub mod sun_exposure;
pub mod volume;
pub mod water_replacement;
pub mod water_temperature;
pub mod weight;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Pool construction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolType {
    Inflatable,
    #[serde(alias = "frame")]
    Framed,
    Rigid,
    Softside,
}

impl PoolType {
    pub const ALL: [PoolType; 4] = [
        PoolType::Inflatable,
        PoolType::Framed,
        PoolType::Rigid,
        PoolType::Softside,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PoolType::Inflatable => "Inflatable",
            PoolType::Framed => "Metal frame",
            PoolType::Rigid => "Rigid/hard plastic",
            PoolType::Softside => "Soft-sided",
        }
    }
}

/// Pool size bucket by water volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    Tiny,
    Small,
    Medium,
    Large,
    Xlarge,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 5] = [
        SizeCategory::Tiny,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::Xlarge,
    ];

    pub fn from_gallons(gallons: f64) -> SizeCategory {
        if gallons < 50.0 {
            SizeCategory::Tiny
        } else if gallons < 150.0 {
            SizeCategory::Small
        } else if gallons < 300.0 {
            SizeCategory::Medium
        } else if gallons < 1000.0 {
            SizeCategory::Large
        } else {
            SizeCategory::Xlarge
        }
    }

    /// Representative volume for the bucket, used when only a size
    /// category is known
    pub fn approximate_gallons(&self) -> f64 {
        match self {
            SizeCategory::Tiny => 30.0,
            SizeCategory::Small => 100.0,
            SizeCategory::Medium => 200.0,
            SizeCategory::Large => 500.0,
            SizeCategory::Xlarge => 1500.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SizeCategory::Tiny => "Tiny (under 50 gallons)",
            SizeCategory::Small => "Small (50-150 gallons)",
            SizeCategory::Medium => "Medium (150-300 gallons)",
            SizeCategory::Large => "Large (300-1000 gallons)",
            SizeCategory::Xlarge => "Extra large (over 1000 gallons)",
        }
    }
}

/// A request for any calculator, tagged by calculator name.
///
/// ## JSON Example
///
/// ```json
/// {
///   "calculator": "volume",
///   "dims": { "shape": "round", "diameter": { "value": 5.0, "unit": "feet" } },
///   "depth": { "value": 1.0, "unit": "feet" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculatorInput {
    Volume(volume::VolumeInput),
    Capacity(capacity::CapacityInput),
    Evaporation(evaporation::EvaporationInput),
    Drainage(drainage::DrainageInput),
    HeatingCost(heating_cost::HeatingCostInput),
    WaterTemperature(water_temperature::WarmingInput),
    Weight(weight::WeightInput),
    SetupTime(setup_time::SetupTimeInput),
    StorageSpace(storage_space::StorageInput),
    Maintenance(maintenance::MaintenanceInput),
    WaterReplacement(water_replacement::ReplacementInput),
    ChemicalTreatment(chemical_treatment::TreatmentInput),
    CleaningTime(cleaning_time::CleaningTimeInput),
    Cost(cost::CostInput),
    SunExposure(sun_exposure::SunExposureInput),
}

impl CalculatorInput {
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculatorInput::Volume(_) => "volume",
            CalculatorInput::Capacity(_) => "capacity",
            CalculatorInput::Evaporation(_) => "evaporation",
            CalculatorInput::Drainage(_) => "drainage",
            CalculatorInput::HeatingCost(_) => "heating-cost",
            CalculatorInput::WaterTemperature(_) => "water-temperature",
            CalculatorInput::Weight(_) => "weight",
            CalculatorInput::SetupTime(_) => "setup-time",
            CalculatorInput::StorageSpace(_) => "storage-space",
            CalculatorInput::Maintenance(_) => "maintenance",
            CalculatorInput::WaterReplacement(_) => "water-replacement",
            CalculatorInput::ChemicalTreatment(_) => "chemical-treatment",
            CalculatorInput::CleaningTime(_) => "cleaning-time",
            CalculatorInput::Cost(_) => "cost",
            CalculatorInput::SunExposure(_) => "sun-exposure",
        }
    }
}

/// The matching result for a [`CalculatorInput`], tagged the same way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculatorOutput {
    Volume(volume::VolumeResult),
    Capacity(capacity::CapacityResult),
    Evaporation(evaporation::EvaporationResult),
    Drainage(drainage::DrainageResult),
    HeatingCost(heating_cost::HeatingCostResult),
    WaterTemperature(water_temperature::WarmingResult),
    Weight(weight::WeightResult),
    SetupTime(setup_time::SetupTimeResult),
    StorageSpace(storage_space::StorageResult),
    Maintenance(maintenance::MaintenanceResult),
    WaterReplacement(water_replacement::ReplacementResult),
    ChemicalTreatment(chemical_treatment::TreatmentResult),
    CleaningTime(cleaning_time::CleaningTimeResult),
    Cost(cost::CostResult),
    SunExposure(sun_exposure::SunExposureResult),
}

/// Run the calculator a request is tagged for
pub fn run(input: &CalculatorInput) -> CalcResult<CalculatorOutput> {
    Ok(match input {
        CalculatorInput::Volume(i) => CalculatorOutput::Volume(volume::calculate(i)?),
        CalculatorInput::Capacity(i) => CalculatorOutput::Capacity(capacity::calculate(i)?),
        CalculatorInput::Evaporation(i) => {
            CalculatorOutput::Evaporation(evaporation::calculate(i)?)
        }
        CalculatorInput::Drainage(i) => CalculatorOutput::Drainage(drainage::calculate(i)?),
        CalculatorInput::HeatingCost(i) => {
            CalculatorOutput::HeatingCost(heating_cost::calculate(i)?)
        }
        CalculatorInput::WaterTemperature(i) => {
            CalculatorOutput::WaterTemperature(water_temperature::calculate(i)?)
        }
        CalculatorInput::Weight(i) => CalculatorOutput::Weight(weight::calculate(i)?),
        CalculatorInput::SetupTime(i) => CalculatorOutput::SetupTime(setup_time::calculate(i)?),
        CalculatorInput::StorageSpace(i) => {
            CalculatorOutput::StorageSpace(storage_space::calculate(i)?)
        }
        CalculatorInput::Maintenance(i) => {
            CalculatorOutput::Maintenance(maintenance::calculate(i)?)
        }
        CalculatorInput::WaterReplacement(i) => {
            CalculatorOutput::WaterReplacement(water_replacement::calculate(i)?)
        }
        CalculatorInput::ChemicalTreatment(i) => {
            CalculatorOutput::ChemicalTreatment(chemical_treatment::calculate(i)?)
        }
        CalculatorInput::CleaningTime(i) => {
            CalculatorOutput::CleaningTime(cleaning_time::calculate(i)?)
        }
        CalculatorInput::Cost(i) => CalculatorOutput::Cost(cost::calculate(i)?),
        CalculatorInput::SunExposure(i) => {
            CalculatorOutput::SunExposure(sun_exposure::calculate(i)?)
        }
    })
}
