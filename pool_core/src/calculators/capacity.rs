//! # Pool Capacity Calculator
//!
//! Computes how many people can comfortably use a pool from its surface area,
//! who is swimming, and how much elbow room they want. Produces a recommended
//! capacity and an absolute maximum, plus safety notes.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::ShapeDimensions;
use crate::scoring::TwoTier;
use crate::units::Length;

/// Absolute-minimum space per person as a fraction of the base requirement
pub const MIN_SPACE_FRACTION: f64 = 0.8;

/// Who will be using the pool. Drives the base space requirement per person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Toddlers,
    Preschoolers,
    Children,
    MixedChildren,
    Family,
    Adults,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Toddlers,
        AgeGroup::Preschoolers,
        AgeGroup::Children,
        AgeGroup::MixedChildren,
        AgeGroup::Family,
        AgeGroup::Adults,
    ];

    /// Base square feet per person for this group
    pub fn space_sqft(&self) -> f64 {
        match self {
            AgeGroup::Toddlers => 7.0,
            AgeGroup::Preschoolers => 9.0,
            AgeGroup::Children => 12.0,
            AgeGroup::MixedChildren => 10.0,
            AgeGroup::Family => 15.0,
            AgeGroup::Adults => 18.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgeGroup::Toddlers => "Toddlers (1-3 years)",
            AgeGroup::Preschoolers => "Preschoolers (3-5 years)",
            AgeGroup::Children => "Children (5-12 years)",
            AgeGroup::MixedChildren => "Mixed children",
            AgeGroup::Family => "Mixed family",
            AgeGroup::Adults => "Adults",
        }
    }
}

/// How much personal space each swimmer should get
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComfortLevel {
    Spacious,
    Comfortable,
    Cozy,
    Packed,
}

impl ComfortLevel {
    pub const ALL: [ComfortLevel; 4] = [
        ComfortLevel::Spacious,
        ComfortLevel::Comfortable,
        ComfortLevel::Cozy,
        ComfortLevel::Packed,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ComfortLevel::Spacious => 1.5,
            ComfortLevel::Comfortable => 1.2,
            ComfortLevel::Cozy => 1.0,
            ComfortLevel::Packed => 0.8,
        }
    }
}

/// Expected activity intensity in the water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] =
        [ActivityLevel::Low, ActivityLevel::Moderate, ActivityLevel::High];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Low => 0.9,
            ActivityLevel::Moderate => 1.0,
            ActivityLevel::High => 1.3,
        }
    }
}

/// Adult-to-child supervision ratio, used for safety notes only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupervisionRatio {
    High,
    Medium,
    Low,
}

/// Input parameters for the capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dims": { "shape": "rectangular",
///             "length": { "value": 8.0, "unit": "feet" },
///             "width": { "value": 6.0, "unit": "feet" } },
///   "depth": { "value": 15.0, "unit": "inches" },
///   "age_group": "children",
///   "comfort": "comfortable",
///   "activity": "moderate",
///   "supervision": "medium"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityInput {
    pub dims: ShapeDimensions,
    pub depth: Length,
    pub age_group: AgeGroup,
    pub comfort: ComfortLevel,
    pub activity: ActivityLevel,
    pub supervision: SupervisionRatio,
}

impl CapacityInput {
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

/// Results of the capacity calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub surface_area_sqft: f64,
    /// Recommended space per person after comfort and activity adjustments
    pub space_per_person_sqft: f64,
    /// Absolute-minimum space per person
    pub minimum_space_sqft: f64,
    /// Recommended vs. absolute-maximum headcount
    pub capacity: TwoTier,
    pub safety_notes: Vec<String>,
}

/// Calculate recommended and maximum pool capacity
pub fn calculate(input: &CapacityInput) -> CalcResult<CapacityResult> {
    input.validate()?;

    let area = input.dims.surface_area_sqft()?;
    let base = input.age_group.space_sqft();
    let recommended_space = base * input.comfort.factor() * input.activity.factor();
    let minimum_space = base * MIN_SPACE_FRACTION;

    let recommended = (area / recommended_space).floor();
    let maximum = (area / minimum_space).floor();

    Ok(CapacityResult {
        surface_area_sqft: area,
        space_per_person_sqft: recommended_space,
        minimum_space_sqft: minimum_space,
        capacity: TwoTier::new(recommended, maximum),
        safety_notes: safety_notes(input, recommended),
    })
}

fn safety_notes(input: &CapacityInput, recommended: f64) -> Vec<String> {
    let mut notes = Vec::new();

    if matches!(
        input.age_group,
        AgeGroup::Toddlers | AgeGroup::Preschoolers | AgeGroup::MixedChildren
    ) {
        notes.push(
            "Always maintain constant adult supervision with children. Never leave children \
             unattended, even for a moment."
                .to_string(),
        );
    }

    let depth_inches = input.depth.canonical() * 12.0;
    if depth_inches > 18.0 {
        notes.push(
            "This pool's depth exceeds 18 inches. Ensure all children can stand with their \
             heads above water or provide appropriate flotation devices."
                .to_string(),
        );
    }

    match input.supervision {
        SupervisionRatio::High => notes.push(
            "A high supervision ratio (1 adult per 1-2 children) is ideal for younger \
             children and ensures optimal safety."
                .to_string(),
        ),
        SupervisionRatio::Medium => notes.push(
            "With a medium supervision ratio (1 adult per 3-4 children), ensure adults can \
             maintain visual contact with all children at all times."
                .to_string(),
        ),
        SupervisionRatio::Low => notes.push(
            "A low supervision ratio (1 adult per 5+ children) is only appropriate for \
             older children with swimming experience."
                .to_string(),
        ),
    }

    if recommended < 2.0 {
        notes.push(
            "This pool is very small and best suited for 1-2 users at a time. Avoid \
             overcrowding to prevent accidents."
                .to_string(),
        );
    } else if recommended > 10.0 {
        notes.push(
            "With a high capacity pool, consider a rotation system or designated zones to \
             maintain safety."
                .to_string(),
        );
    }

    if input.activity == ActivityLevel::High {
        notes.push(
            "High activity levels increase the risk of slipping. Consider adding non-slip \
             mats around the pool area."
                .to_string(),
        );
    }

    notes.push(
        "Establish and enforce clear pool rules to prevent running, pushing, or rough play."
            .to_string(),
    );
    notes.push(
        "Keep rescue equipment (such as a reaching pole) nearby whenever the pool is in use."
            .to_string(),
    );

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    fn base_input() -> CapacityInput {
        CapacityInput {
            dims: ShapeDimensions::Rectangular {
                length: Length::new(12.0, LengthUnit::Feet),
                width: Length::new(10.0, LengthUnit::Feet),
            },
            depth: Length::new(15.0, LengthUnit::Inches),
            age_group: AgeGroup::Children,
            comfort: ComfortLevel::Cozy,
            activity: ActivityLevel::Moderate,
            supervision: SupervisionRatio::Medium,
        }
    }

    #[test]
    fn test_children_cozy_moderate() {
        // 120 sqft / (12 × 1.0 × 1.0) = 10 recommended; 120 / 9.6 = 12 max
        let result = calculate(&base_input()).unwrap();
        assert_eq!(result.capacity.recommended, 10.0);
        assert_eq!(result.capacity.extreme, 12.0);
        assert!(!result.capacity.is_inverted());
    }

    #[test]
    fn test_comfort_and_activity_scale_space() {
        let input = CapacityInput {
            comfort: ComfortLevel::Spacious,
            activity: ActivityLevel::High,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        // 12 × 1.5 × 1.3 = 23.4 sqft per person
        assert!((result.space_per_person_sqft - 23.4).abs() < 1e-9);
        assert_eq!(result.capacity.recommended, (120.0f64 / 23.4).floor());
    }

    #[test]
    fn test_deep_pool_safety_note() {
        let input = CapacityInput {
            depth: Length::new(2.0, LengthUnit::Feet),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!(result.safety_notes.iter().any(|n| n.contains("18 inches")));
    }

    #[test]
    fn test_tiny_pool_floors_to_zero() {
        let input = CapacityInput {
            dims: ShapeDimensions::Round {
                diameter: Length::new(3.0, LengthUnit::Feet),
            },
            age_group: AgeGroup::Adults,
            ..base_input()
        };
        // π × 1.5² ≈ 7.07 sqft < 18 sqft per adult
        let result = calculate(&input).unwrap();
        assert_eq!(result.capacity.recommended, 0.0);
    }
}
