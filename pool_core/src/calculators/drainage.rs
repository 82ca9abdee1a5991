//! # Drainage Time Calculator
//!
//! Estimates how long a pool takes to empty for four drainage methods, plus
//! method-specific technique tips and environmental guidance for disposing of
//! the water.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{cuft_to_gallons, volume_cuft, ShapeDimensions};
use crate::units::{Length, Volume};

/// Gallons per minute removed per person when bailing by hand
pub const MANUAL_DRAIN_GPM: f64 = 2.0;

/// Hose inner diameter for siphon draining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoseSize {
    Half,
    FiveEighths,
    ThreeQuarters,
    One,
}

impl HoseSize {
    pub const ALL: [HoseSize; 4] = [
        HoseSize::Half,
        HoseSize::FiveEighths,
        HoseSize::ThreeQuarters,
        HoseSize::One,
    ];

    /// Base siphon flow with a 2 ft height difference
    pub fn base_gpm(&self) -> f64 {
        match self {
            HoseSize::Half => 3.0,
            HoseSize::FiveEighths => 5.0,
            HoseSize::ThreeQuarters => 7.0,
            HoseSize::One => 12.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HoseSize::Half => "1/2 inch",
            HoseSize::FiveEighths => "5/8 inch",
            HoseSize::ThreeQuarters => "3/4 inch",
            HoseSize::One => "1 inch",
        }
    }
}

/// Built-in drain plug size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrainSize {
    Small,
    Medium,
    Large,
}

impl DrainSize {
    pub fn gpm(&self) -> f64 {
        match self {
            DrainSize::Small => 3.0,
            DrainSize::Medium => 6.0,
            DrainSize::Large => 10.0,
        }
    }
}

/// How the pool will be emptied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum DrainageMethod {
    /// Gravity siphon through a garden hose
    Siphon {
        hose: HoseSize,
        /// Drop from the pool water level to the hose outlet
        height_difference: Length,
    },
    /// Electric pump with a known flow rating
    Pump { flow_gpm: f64 },
    /// Built-in drain plug
    Drain { size: DrainSize },
    /// Tipping and bailing by hand
    Manual { helpers: u32 },
}

/// How the pool water was treated, for disposal guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterTreatment {
    NoChemicals,
    Chlorinated,
    Saltwater,
    OtherChemicals,
}

/// Where the water volume comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum VolumeSource {
    /// Known volume entered directly
    Direct { volume: Volume },
    /// Computed from pool dimensions
    Dimensions { dims: ShapeDimensions, depth: Length },
}

impl VolumeSource {
    pub fn gallons(&self) -> CalcResult<f64> {
        match self {
            VolumeSource::Direct { volume } => {
                let gallons = volume.canonical();
                if !gallons.is_finite() || gallons <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "volume",
                        volume.value.to_string(),
                        "Volume must be positive",
                    ));
                }
                Ok(gallons)
            }
            VolumeSource::Dimensions { dims, depth } => {
                dims.validate("dims")?;
                if !depth.value.is_finite() || depth.value <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "depth",
                        depth.value.to_string(),
                        "Depth must be positive",
                    ));
                }
                let area = dims.surface_area_sqft()?;
                Ok(cuft_to_gallons(volume_cuft(area, depth.canonical())))
            }
        }
    }
}

/// Input parameters for the drainage time calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "water": { "source": "direct", "volume": { "value": 300.0, "unit": "gallons" } },
///   "drainage": { "method": "siphon",
///                 "hose": "five-eighths",
///                 "height_difference": { "value": 2.0, "unit": "feet" } },
///   "treatment": "chlorinated"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrainageInput {
    pub water: VolumeSource,
    pub drainage: DrainageMethod,
    pub treatment: WaterTreatment,
}

/// Results of the drainage time calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrainageResult {
    pub volume_gallons: f64,
    pub flow_gpm: f64,
    pub drain_time_minutes: f64,
    pub method_tips: Vec<String>,
    pub environmental_tips: Vec<String>,
}

/// Effective flow rate for a drainage method
pub fn flow_gpm(method: &DrainageMethod) -> CalcResult<f64> {
    let flow = match method {
        DrainageMethod::Siphon {
            hose,
            height_difference,
        } => {
            let height = height_difference.canonical();
            if !height.is_finite() || height <= 0.0 {
                return Err(CalcError::invalid_input(
                    "height_difference",
                    height_difference.value.to_string(),
                    "Siphon height difference must be positive",
                ));
            }
            // flow scales with the square root of head, referenced to a 2 ft drop
            hose.base_gpm() * (height.max(0.1) / 2.0).sqrt()
        }
        DrainageMethod::Pump { flow_gpm } => {
            if !flow_gpm.is_finite() || *flow_gpm <= 0.0 {
                return Err(CalcError::invalid_input(
                    "flow_gpm",
                    flow_gpm.to_string(),
                    "Pump flow rate must be positive",
                ));
            }
            *flow_gpm
        }
        DrainageMethod::Drain { size } => size.gpm(),
        DrainageMethod::Manual { helpers } => {
            if *helpers == 0 {
                return Err(CalcError::invalid_input(
                    "helpers",
                    "0",
                    "Manual draining needs at least one person",
                ));
            }
            MANUAL_DRAIN_GPM * f64::from(*helpers)
        }
    };
    Ok(flow)
}

/// Calculate drainage time and disposal guidance
pub fn calculate(input: &DrainageInput) -> CalcResult<DrainageResult> {
    let volume_gallons = input.water.gallons()?;
    let flow = flow_gpm(&input.drainage)?;

    Ok(DrainageResult {
        volume_gallons,
        flow_gpm: flow,
        drain_time_minutes: volume_gallons / flow,
        method_tips: method_tips(&input.drainage),
        environmental_tips: environmental_tips(input.treatment),
    })
}

fn method_tips(method: &DrainageMethod) -> Vec<String> {
    let tips: &[&str] = match method {
        DrainageMethod::Siphon { .. } => &[
            "Ensure the hose is completely filled with water before starting the siphon",
            "The drainage end must be significantly lower than the pool water level for the siphon to work effectively",
            "The greater the height difference, the faster the siphon will drain",
            "For large pools, use multiple hoses simultaneously to speed up draining",
            "If the siphon stops, check for air bubbles or kinks in the hose",
        ],
        DrainageMethod::Pump { .. } => &[
            "Place the pump at the lowest point of the pool for most efficient draining",
            "Use a pump with a filter screen or pre-filter to prevent clogging from debris",
            "Check the pump periodically during operation to ensure it's working properly",
            "Have an extension cord ready if needed, and keep electrical connections away from water",
            "Some submersible pumps will stop automatically when the water level gets too low, others may need monitoring",
        ],
        DrainageMethod::Drain { .. } => &[
            "Remove any debris around the drain plug before opening",
            "For faster draining, create a slight slope in the pool toward the drain if possible",
            "Check the drain area periodically to ensure it's not becoming clogged",
            "Have a small brush ready to clear any debris that may block the drain",
            "The last few inches of water may drain very slowly - consider using a different method for final draining",
        ],
        DrainageMethod::Manual { .. } => &[
            "For small pools, lift one edge to direct water flow to a desired area",
            "Use buckets or containers to collect water for reuse if appropriate",
            "Have towels ready to clean up any spills during manual draining",
            "Work with a partner for larger pools to prevent spills and strain",
            "Consider using a wet/dry vacuum for the last bit of water or for pools with no other drain option",
        ],
    };
    tips.iter().map(|t| t.to_string()).collect()
}

fn environmental_tips(treatment: WaterTreatment) -> Vec<String> {
    let tips: &[&str] = match treatment {
        WaterTreatment::NoChemicals => &[
            "Use the pool water to irrigate your lawn or garden plants",
            "Water trees, shrubs, or flowerbeds that need moisture",
            "Avoid draining onto vegetable gardens if sunscreen or other products were used in the water",
            "Drain in different areas to prevent oversaturation of any single spot",
        ],
        WaterTreatment::Chlorinated => &[
            "Let the pool sit unused for 1-2 days to allow chlorine to dissipate before draining",
            "Test chlorine levels before draining - they should be below 0.1 ppm for lawn irrigation",
            "Drain in a large area to dilute any remaining chemicals",
            "Avoid draining into storm drains, as chemicals can harm local waterways",
            "Check local regulations regarding pool water disposal",
        ],
        WaterTreatment::Saltwater => &[
            "Avoid draining saltwater pools onto lawns or gardens as salt can damage plants",
            "Direct saltwater to areas without vegetation or dilute it significantly with fresh water if allowed",
            "Consider draining in multiple locations to prevent salt buildup in any one area",
            "Check local regulations regarding saltwater pool disposal; specialized disposal might be required",
            "Some municipalities require special handling for saltwater pool drainage",
        ],
        WaterTreatment::OtherChemicals => &[
            "Consult product instructions for safe disposal of chemically treated water",
            "Avoid draining into storm drains or directly onto sensitive vegetation",
            "Check local regulations regarding pool water disposal",
        ],
    };
    tips.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LengthUnit, VolumeUnit};

    fn direct(gallons: f64) -> VolumeSource {
        VolumeSource::Direct {
            volume: Volume::new(gallons, VolumeUnit::Gallons),
        }
    }

    #[test]
    fn test_siphon_reference_height() {
        // 2 ft head is the reference, so the multiplier is 1
        let input = DrainageInput {
            water: direct(300.0),
            drainage: DrainageMethod::Siphon {
                hose: HoseSize::FiveEighths,
                height_difference: Length::new(2.0, LengthUnit::Feet),
            },
            treatment: WaterTreatment::Chlorinated,
        };
        let result = calculate(&input).unwrap();
        assert!((result.flow_gpm - 5.0).abs() < 1e-9);
        assert!((result.drain_time_minutes - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_siphon_height_scales_flow() {
        let input = DrainageInput {
            water: direct(300.0),
            drainage: DrainageMethod::Siphon {
                hose: HoseSize::One,
                height_difference: Length::new(8.0, LengthUnit::Feet),
            },
            treatment: WaterTreatment::NoChemicals,
        };
        let result = calculate(&input).unwrap();
        // 12 × √(8/2) = 24 GPM
        assert!((result.flow_gpm - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_siphon_head_floored() {
        let flow = flow_gpm(&DrainageMethod::Siphon {
            hose: HoseSize::Half,
            height_difference: Length::new(0.01, LengthUnit::Feet),
        })
        .unwrap();
        // head floored at 0.1 ft before the square root
        assert!((flow - 3.0 * (0.1f64 / 2.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_manual_with_helpers() {
        let input = DrainageInput {
            water: direct(100.0),
            drainage: DrainageMethod::Manual { helpers: 3 },
            treatment: WaterTreatment::NoChemicals,
        };
        let result = calculate(&input).unwrap();
        assert!((result.flow_gpm - 6.0).abs() < 1e-9);
        assert!((result.drain_time_minutes - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_flow_is_error() {
        assert!(flow_gpm(&DrainageMethod::Pump { flow_gpm: 0.0 }).is_err());
        assert!(flow_gpm(&DrainageMethod::Manual { helpers: 0 }).is_err());
    }

    #[test]
    fn test_volume_from_dimensions() {
        let input = DrainageInput {
            water: VolumeSource::Dimensions {
                dims: ShapeDimensions::Rectangular {
                    length: Length::new(10.0, LengthUnit::Feet),
                    width: Length::new(5.0, LengthUnit::Feet),
                },
                depth: Length::new(1.0, LengthUnit::Feet),
            },
            drainage: DrainageMethod::Drain {
                size: DrainSize::Medium,
            },
            treatment: WaterTreatment::Saltwater,
        };
        let result = calculate(&input).unwrap();
        assert!((result.volume_gallons - 374.026).abs() < 0.001);
        assert!((result.flow_gpm - 6.0).abs() < 1e-9);
        assert!(result
            .environmental_tips
            .iter()
            .any(|t| t.contains("saltwater")));
    }

    #[test]
    fn test_liters_volume_converted() {
        let input = DrainageInput {
            water: VolumeSource::Direct {
                volume: Volume::new(378.541, VolumeUnit::Liters),
            },
            drainage: DrainageMethod::Drain {
                size: DrainSize::Small,
            },
            treatment: WaterTreatment::NoChemicals,
        };
        let result = calculate(&input).unwrap();
        assert!((result.volume_gallons - 100.0).abs() < 1e-6);
    }
}
