//! # Water Replacement Calculator
//!
//! Predicts when the pool water will need changing by modeling water quality
//! degradation: a base days-per-quality-level rate adjusted by ten usage and
//! environment factors, projected from the current observed quality.

use serde::{Deserialize, Serialize};

use crate::calculators::evaporation::SunExposure;
use crate::calculators::maintenance::{
    ChemicalUse, Climate, FilterSystem, Surroundings, UsageFrequency,
};
use crate::errors::{CalcError, CalcResult};
use crate::scoring::{AppliedFactor, FactorChain};
use crate::units::Volume;

/// How consistently the pool is covered when idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverHabit {
    Always,
    Sometimes,
    Never,
}

/// Observable water condition right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservedQuality {
    /// Crystal clear
    Clear,
    /// Slightly cloudy
    Slightly,
    /// Noticeably cloudy
    Cloudy,
    /// Visible algae
    Algae,
    /// Significant debris
    Debris,
}

/// Modeled quality scale from best (0) to worst (4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 5] = [
        QualityLevel::Excellent,
        QualityLevel::Good,
        QualityLevel::Fair,
        QualityLevel::Poor,
        QualityLevel::VeryPoor,
    ];

    fn from_index(index: usize) -> QualityLevel {
        Self::ALL[index.min(4)]
    }

    fn index(&self) -> usize {
        *self as usize
    }

    pub fn description(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => {
                "Crystal clear, properly sanitized, no visible debris or odor"
            }
            QualityLevel::Good => "Clear with minimal debris, properly sanitized, no odor",
            QualityLevel::Fair => {
                "Slightly cloudy or with some debris, may need additional sanitizer"
            }
            QualityLevel::Poor => {
                "Cloudy, visible debris, possible algae beginning, may have slight odor"
            }
            QualityLevel::VeryPoor => {
                "Very cloudy, significant debris, visible algae, unpleasant odor"
            }
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "No immediate action needed",
            QualityLevel::Good => "Continue regular maintenance",
            QualityLevel::Fair => "Add sanitizer and remove debris",
            QualityLevel::Poor => {
                "Consider partial or full water change, shock treatment if using chemicals"
            }
            QualityLevel::VeryPoor => "Immediate full water change recommended",
        }
    }
}

impl ObservedQuality {
    fn level(&self) -> QualityLevel {
        match self {
            ObservedQuality::Clear => QualityLevel::Excellent,
            ObservedQuality::Slightly => QualityLevel::Good,
            ObservedQuality::Cloudy => QualityLevel::Fair,
            ObservedQuality::Algae | ObservedQuality::Debris => QualityLevel::Poor,
        }
    }
}

/// Base degradation rate in days per quality level, by volume
fn base_rate_days(gallons: f64) -> (&'static str, f64) {
    if gallons < 50.0 {
        ("tiny", 1.5)
    } else if gallons < 150.0 {
        ("small", 2.5)
    } else if gallons < 300.0 {
        ("medium", 3.5)
    } else {
        ("large", 5.0)
    }
}

/// Input parameters for the water replacement calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume": { "value": 200.0, "unit": "gallons" },
///   "usage": "several",
///   "average_users": 3,
///   "children_users": true,
///   "pets_users": false,
///   "climate": "hot",
///   "sun": "full",
///   "surroundings": "grass",
///   "covered": "sometimes",
///   "chemical_use": "minimal",
///   "filter": "basic",
///   "observed_quality": "slightly",
///   "days_since_change": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplacementInput {
    pub volume: Volume,
    pub usage: UsageFrequency,
    pub average_users: u32,
    pub children_users: bool,
    pub pets_users: bool,
    pub climate: Climate,
    pub sun: SunExposure,
    pub surroundings: Surroundings,
    pub covered: CoverHabit,
    pub chemical_use: ChemicalUse,
    pub filter: FilterSystem,
    pub observed_quality: ObservedQuality,
    pub days_since_change: u32,
}

impl ReplacementInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.volume.value.is_finite() || self.volume.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "volume",
                self.volume.value.to_string(),
                "Volume must be positive",
            ));
        }
        if self.days_since_change > 60 {
            return Err(CalcError::invalid_input(
                "days_since_change",
                self.days_since_change.to_string(),
                "Days since last change must be at most 60",
            ));
        }
        Ok(())
    }
}

/// Results of the water replacement calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementResult {
    /// Days for the water to drop one quality level
    pub degradation_rate_days: f64,
    /// Estimated quality right now, after time-based degradation
    pub current_quality: QualityLevel,
    pub current_quality_description: String,
    pub recommended_action: String,
    /// Days until the water should be changed; zero means change now
    pub days_until_change: u32,
    pub factors: Vec<AppliedFactor>,
    pub conservation_tips: Vec<String>,
}

/// Calculate the water replacement schedule
pub fn calculate(input: &ReplacementInput) -> CalcResult<ReplacementResult> {
    input.validate()?;

    let gallons = input.volume.canonical();
    let (size_tag, base) = base_rate_days(gallons);

    let (users_tag, users) = if input.average_users <= 2 {
        ("few", 1.0)
    } else if input.average_users <= 5 {
        ("moderate", 0.7)
    } else {
        ("many", 0.5)
    };

    let outcome = FactorChain::new(base)
        .with_factor(
            "chemical",
            chemical_tag(input.chemical_use),
            match input.chemical_use {
                ChemicalUse::None => 0.5,
                ChemicalUse::Minimal => 1.0,
                ChemicalUse::Regular => 1.8,
                ChemicalUse::Full => 2.5,
            },
        )
        .with_factor(
            "usage",
            usage_tag(input.usage),
            match input.usage {
                UsageFrequency::Daily => 0.5,
                UsageFrequency::Several => 0.7,
                UsageFrequency::Weekly => 1.2,
                UsageFrequency::Occasional => 1.5,
            },
        )
        .with_factor("users", users_tag, users)
        .with_factor(
            "children",
            if input.children_users { "yes" } else { "no" },
            if input.children_users { 0.6 } else { 1.0 },
        )
        .with_factor(
            "pets",
            if input.pets_users { "yes" } else { "no" },
            if input.pets_users { 0.5 } else { 1.0 },
        )
        .with_factor(
            "climate",
            climate_tag(input.climate),
            match input.climate {
                Climate::Hot => 0.6,
                Climate::Moderate => 1.0,
                Climate::Cool => 1.4,
            },
        )
        .with_factor(
            "sun",
            sun_tag(input.sun),
            match input.sun {
                SunExposure::Full => 0.6,
                SunExposure::Partial => 0.8,
                SunExposure::Minimal => 1.2,
                SunExposure::Shade => 1.5,
            },
        )
        .with_factor(
            "surroundings",
            surroundings_tag(input.surroundings),
            match input.surroundings {
                Surroundings::Clean => 1.3,
                Surroundings::Grass => 1.0,
                Surroundings::Trees => 0.7,
                Surroundings::Dusty => 0.6,
            },
        )
        .with_factor(
            "covered",
            match input.covered {
                CoverHabit::Always => "always",
                CoverHabit::Sometimes => "sometimes",
                CoverHabit::Never => "never",
            },
            match input.covered {
                CoverHabit::Always => 1.5,
                CoverHabit::Sometimes => 1.2,
                CoverHabit::Never => 0.8,
            },
        )
        .with_factor(
            "filter",
            filter_tag(input.filter),
            match input.filter {
                FilterSystem::None => 0.7,
                FilterSystem::Basic => 1.2,
                FilterSystem::Standard => 1.8,
            },
        )
        .finish();

    let rate = outcome.result;

    // quality slips one level every `rate` days since the last change
    let slipped = (f64::from(input.days_since_change) / rate).floor() as usize;
    let current = QualityLevel::from_index(input.observed_quality.level().index() + slipped);

    // recommend changing before the water turns poor
    let days_until_change = if current >= QualityLevel::Poor {
        0
    } else {
        let levels_until_poor = (QualityLevel::Poor.index() - current.index()) as f64;
        (levels_until_poor * rate).ceil() as u32
    };

    Ok(ReplacementResult {
        degradation_rate_days: rate,
        current_quality: current,
        current_quality_description: current.description().to_string(),
        recommended_action: current.action().to_string(),
        days_until_change,
        factors: outcome.applied,
        conservation_tips: conservation_tips(size_tag),
    })
}

fn chemical_tag(c: ChemicalUse) -> &'static str {
    match c {
        ChemicalUse::None => "none",
        ChemicalUse::Minimal => "minimal",
        ChemicalUse::Regular => "regular",
        ChemicalUse::Full => "full",
    }
}

fn usage_tag(u: UsageFrequency) -> &'static str {
    match u {
        UsageFrequency::Daily => "daily",
        UsageFrequency::Several => "several",
        UsageFrequency::Weekly => "weekly",
        UsageFrequency::Occasional => "occasional",
    }
}

fn climate_tag(c: Climate) -> &'static str {
    match c {
        Climate::Hot => "hot",
        Climate::Moderate => "moderate",
        Climate::Cool => "cool",
    }
}

fn sun_tag(s: SunExposure) -> &'static str {
    match s {
        SunExposure::Full => "full",
        SunExposure::Partial => "partial",
        SunExposure::Minimal => "minimal",
        SunExposure::Shade => "shade",
    }
}

fn surroundings_tag(s: Surroundings) -> &'static str {
    match s {
        Surroundings::Clean => "clean",
        Surroundings::Grass => "grass",
        Surroundings::Trees => "trees",
        Surroundings::Dusty => "dusty",
    }
}

fn filter_tag(f: FilterSystem) -> &'static str {
    match f {
        FilterSystem::None => "none",
        FilterSystem::Basic => "basic",
        FilterSystem::Standard => "standard",
    }
}

fn conservation_tips(size_tag: &str) -> Vec<String> {
    let tips: &[&str] = match size_tag {
        "tiny" => &[
            "Use a bucket to collect the old pool water for watering plants (if no chemicals were used)",
            "Consider using a small pool cover to reduce evaporation and debris",
            "Rinse off children before entering to reduce contaminants",
        ],
        "small" => &[
            "Use the old pool water for watering non-edible plants (if minimal chemicals were used)",
            "Use a pool cover to reduce evaporation and debris",
            "Consider a small filter to extend water life",
            "Rinse off before entering to reduce contaminants",
        ],
        "medium" => &[
            "Use a pool cover when not in use to reduce evaporation and debris",
            "Consider a basic filtration system to extend water life",
            "Implement proper chemical treatment to reduce water changes",
            "Rinse off before entering to reduce contaminants",
            "Consider partial water changes instead of full changes when possible",
        ],
        _ => &[
            "Use a quality pool cover when not in use",
            "Implement a proper filtration system",
            "Maintain proper chemical balance to extend water life",
            "Consider partial water changes (25-50%) instead of full changes",
            "Create a maintenance schedule to optimize water usage",
            "Rinse off before entering to reduce contaminants",
        ],
    };
    tips.iter().map(|t| t.to_string()).collect()
}
