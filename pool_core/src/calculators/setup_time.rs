//! # Setup Time Calculator
//!
//! Estimates how long it takes to set up a pool: assembly or inflation,
//! ground preparation, and water filling, with tips and a tool list for the
//! pool type.

use serde::{Deserialize, Serialize};

use crate::calculators::{PoolType, SizeCategory};
use crate::errors::CalcResult;

/// Assembly time reduction per helper
pub const HELPER_REDUCTION: f64 = 0.2;
/// Extra helpers past three add nothing
pub const MAX_HELPER_REDUCTION: f64 = 0.6;

/// Base assembly/inflation time in minutes, before adjustments
pub fn base_setup_minutes(pool_type: PoolType, size: SizeCategory) -> f64 {
    match pool_type {
        PoolType::Inflatable => match size {
            SizeCategory::Tiny => 5.0,
            SizeCategory::Small => 10.0,
            SizeCategory::Medium => 20.0,
            SizeCategory::Large => 40.0,
            SizeCategory::Xlarge => 60.0,
        },
        PoolType::Framed => match size {
            SizeCategory::Tiny => 15.0,
            SizeCategory::Small => 25.0,
            SizeCategory::Medium => 45.0,
            SizeCategory::Large => 90.0,
            SizeCategory::Xlarge => 150.0,
        },
        PoolType::Rigid => match size {
            SizeCategory::Tiny => 2.0,
            SizeCategory::Small => 5.0,
            SizeCategory::Medium => 10.0,
            SizeCategory::Large => 20.0,
            SizeCategory::Xlarge => 30.0,
        },
        PoolType::Softside => match size {
            SizeCategory::Tiny => 5.0,
            SizeCategory::Small => 10.0,
            SizeCategory::Medium => 20.0,
            SizeCategory::Large => 35.0,
            SizeCategory::Xlarge => 50.0,
        },
    }
}

/// How an inflatable pool gets its air
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InflationMethod {
    Electric,
    Manual,
    Breath,
}

impl InflationMethod {
    pub fn factor(&self) -> f64 {
        match self {
            InflationMethod::Electric => 1.0,
            InflationMethod::Manual => 2.5,
            InflationMethod::Breath => 4.0,
        }
    }
}

/// How fiddly a framed pool's frame is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameComplexity {
    Simple,
    Moderate,
    Complex,
}

impl FrameComplexity {
    pub fn factor(&self) -> f64 {
        match self {
            FrameComplexity::Simple => 0.8,
            FrameComplexity::Moderate => 1.0,
            FrameComplexity::Complex => 1.5,
        }
    }
}

/// How many times the person has set up this kind of pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    First,
    Some,
    Experienced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::First,
        ExperienceLevel::Some,
        ExperienceLevel::Experienced,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ExperienceLevel::First => 1.5,
            ExperienceLevel::Some => 1.0,
            ExperienceLevel::Experienced => 0.7,
        }
    }
}

/// How much work the ground needs first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroundPrep {
    None,
    Minimal,
    Moderate,
    Extensive,
}

impl GroundPrep {
    pub fn minutes(&self) -> f64 {
        match self {
            GroundPrep::None => 0.0,
            GroundPrep::Minimal => 10.0,
            GroundPrep::Moderate => 25.0,
            GroundPrep::Extensive => 45.0,
        }
    }
}

/// Where the fill water comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterSource {
    /// Outdoor garden hose
    Hose,
    /// Indoor tap with carried containers or adapter
    Indoor,
    /// Low-pressure or shared supply
    Slow,
}

impl WaterSource {
    /// Minutes to deliver 100 gallons
    pub fn minutes_per_100_gallons(&self) -> f64 {
        match self {
            WaterSource::Hose => 10.0,
            WaterSource::Indoor => 20.0,
            WaterSource::Slow => 30.0,
        }
    }
}

/// Input parameters for the setup time calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pool_type": "inflatable",
///   "size": "medium",
///   "inflation": "manual",
///   "frame": "moderate",
///   "experience": "first",
///   "helpers": 1,
///   "ground_prep": "minimal",
///   "water_source": "hose"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetupTimeInput {
    pub pool_type: PoolType,
    pub size: SizeCategory,
    /// Only applied to inflatable pools
    #[serde(default)]
    pub inflation: Option<InflationMethod>,
    /// Only applied to framed pools
    #[serde(default)]
    pub frame: Option<FrameComplexity>,
    pub experience: ExperienceLevel,
    pub helpers: u32,
    pub ground_prep: GroundPrep,
    pub water_source: WaterSource,
}

/// Results of the setup time calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupTimeResult {
    pub assembly_minutes: f64,
    pub ground_prep_minutes: f64,
    pub fill_minutes: f64,
    pub total_minutes: f64,
    pub tips: Vec<String>,
    pub basic_tools: Vec<String>,
    pub optional_tools: Vec<String>,
}

/// Calculate total setup time with a per-phase breakdown
pub fn calculate(input: &SetupTimeInput) -> CalcResult<SetupTimeResult> {
    let mut assembly = base_setup_minutes(input.pool_type, input.size);

    if input.pool_type == PoolType::Inflatable {
        if let Some(inflation) = input.inflation {
            assembly *= inflation.factor();
        }
    }
    if input.pool_type == PoolType::Framed {
        if let Some(frame) = input.frame {
            assembly *= frame.factor();
        }
    }
    assembly *= input.experience.factor();

    let helper_reduction =
        (f64::from(input.helpers) * HELPER_REDUCTION).min(MAX_HELPER_REDUCTION);
    assembly *= 1.0 - helper_reduction;
    let assembly = assembly.round();

    let ground_prep = input.ground_prep.minutes();
    let fill = (input.size.approximate_gallons() / 100.0
        * input.water_source.minutes_per_100_gallons())
    .round();

    Ok(SetupTimeResult {
        assembly_minutes: assembly,
        ground_prep_minutes: ground_prep,
        fill_minutes: fill,
        total_minutes: assembly + ground_prep + fill,
        tips: tips(input.pool_type, input.experience),
        basic_tools: basic_tools(input.pool_type),
        optional_tools: optional_tools(input.pool_type),
    })
}

fn tips(pool_type: PoolType, experience: ExperienceLevel) -> Vec<String> {
    let mut tips: Vec<String> = match pool_type {
        PoolType::Inflatable => vec![
            "Check for a flat, debris-free surface before beginning setup".to_string(),
            "Unfold the pool and let it warm in the sun for a few minutes so the vinyl relaxes"
                .to_string(),
            "Inflate rings from the bottom up and avoid over-inflating".to_string(),
        ],
        PoolType::Framed => vec![
            "Organize all frame parts by type before beginning assembly".to_string(),
            "Follow the manual's assembly order; forcing parts can bend connectors".to_string(),
            "Level the ground first; frame pools tolerate slopes poorly".to_string(),
        ],
        PoolType::Rigid => vec![
            "Select a completely flat surface for setup".to_string(),
            "Inspect the shell for cracks before filling".to_string(),
        ],
        PoolType::Softside => vec![
            "Ensure the outer material is fully extended before filling".to_string(),
            "Smooth the floor outward from the center as the water rises".to_string(),
        ],
    };
    if experience == ExperienceLevel::First {
        tips.push(
            "Read through all instructions once before starting; first setups go much \
             smoother with a dry run"
                .to_string(),
        );
    }
    tips
}

fn basic_tools(pool_type: PoolType) -> Vec<String> {
    match pool_type {
        PoolType::Inflatable => vec![
            "Air pump (electric or manual)".to_string(),
            "Ground cloth or tarp".to_string(),
            "Garden hose".to_string(),
        ],
        PoolType::Framed => vec![
            "Ground cloth or tarp".to_string(),
            "Rubber mallet".to_string(),
            "Garden hose".to_string(),
        ],
        PoolType::Rigid => vec!["Garden hose".to_string()],
        PoolType::Softside => vec![
            "Ground cloth or tarp".to_string(),
            "Garden hose".to_string(),
        ],
    }
}

fn optional_tools(pool_type: PoolType) -> Vec<String> {
    match pool_type {
        PoolType::Inflatable => vec![
            "Patch kit".to_string(),
            "Level".to_string(),
        ],
        PoolType::Framed => vec![
            "Level".to_string(),
            "Work gloves".to_string(),
        ],
        PoolType::Rigid => vec!["Level".to_string()],
        PoolType::Softside => vec!["Level".to_string(), "Patch kit".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> SetupTimeInput {
        SetupTimeInput {
            pool_type: PoolType::Inflatable,
            size: SizeCategory::Medium,
            inflation: Some(InflationMethod::Electric),
            frame: None,
            experience: ExperienceLevel::Some,
            helpers: 0,
            ground_prep: GroundPrep::None,
            water_source: WaterSource::Hose,
        }
    }

    #[test]
    fn test_baseline_medium_inflatable() {
        let result = calculate(&base_input()).unwrap();
        assert_eq!(result.assembly_minutes, 20.0);
        assert_eq!(result.ground_prep_minutes, 0.0);
        // 200 gal at 10 min per 100 gal
        assert_eq!(result.fill_minutes, 20.0);
        assert_eq!(result.total_minutes, 40.0);
    }

    #[test]
    fn test_breath_inflation_first_timer() {
        let input = SetupTimeInput {
            inflation: Some(InflationMethod::Breath),
            experience: ExperienceLevel::First,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 20 × 4.0 × 1.5 = 120
        assert_eq!(result.assembly_minutes, 120.0);
        assert!(result.tips.iter().any(|t| t.contains("dry run")));
    }

    #[test]
    fn test_helper_reduction_caps_at_three() {
        let three = SetupTimeInput {
            helpers: 3,
            ..base_input()
        };
        let five = SetupTimeInput {
            helpers: 5,
            ..base_input()
        };
        let a = calculate(&three).unwrap();
        let b = calculate(&five).unwrap();
        assert_eq!(a.assembly_minutes, b.assembly_minutes);
        assert_eq!(a.assembly_minutes, 8.0);
    }

    #[test]
    fn test_frame_complexity_only_affects_framed() {
        let inflatable = SetupTimeInput {
            frame: Some(FrameComplexity::Complex),
            ..base_input()
        };
        let result = calculate(&inflatable).unwrap();
        assert_eq!(result.assembly_minutes, 20.0);

        let framed = SetupTimeInput {
            pool_type: PoolType::Framed,
            inflation: None,
            frame: Some(FrameComplexity::Complex),
            ..base_input()
        };
        let result = calculate(&framed).unwrap();
        // 45 × 1.5 = 67.5, rounded
        assert_eq!(result.assembly_minutes, 68.0);
    }

    #[test]
    fn test_ground_prep_and_slow_fill() {
        let input = SetupTimeInput {
            pool_type: PoolType::Rigid,
            size: SizeCategory::Large,
            inflation: None,
            ground_prep: GroundPrep::Extensive,
            water_source: WaterSource::Slow,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.assembly_minutes, 20.0);
        assert_eq!(result.ground_prep_minutes, 45.0);
        // 500 gal at 30 min per 100 gal
        assert_eq!(result.fill_minutes, 150.0);
        assert_eq!(result.total_minutes, 215.0);
    }
}
