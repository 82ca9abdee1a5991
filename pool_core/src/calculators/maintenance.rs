//! # Maintenance Schedule Calculator
//!
//! Builds a maintenance plan: how often to change the water given nine
//! usage and environment factors, plus daily through seasonal task lists and
//! a chemical treatment recommendation.

use serde::{Deserialize, Serialize};

use crate::calculators::evaporation::SunExposure;
use crate::calculators::PoolType;
use crate::errors::{CalcError, CalcResult};
use crate::scoring::{AppliedFactor, FactorChain};
use crate::units::Volume;

/// Chemical treatment regimen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChemicalUse {
    None,
    Minimal,
    Regular,
    Full,
}

impl ChemicalUse {
    pub const ALL: [ChemicalUse; 4] = [
        ChemicalUse::None,
        ChemicalUse::Minimal,
        ChemicalUse::Regular,
        ChemicalUse::Full,
    ];

    fn tag(&self) -> &'static str {
        match self {
            ChemicalUse::None => "none",
            ChemicalUse::Minimal => "minimal",
            ChemicalUse::Regular => "regular",
            ChemicalUse::Full => "full",
        }
    }
}

/// How often the pool gets used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageFrequency {
    Daily,
    /// Several times a week
    Several,
    Weekly,
    Occasional,
}

impl UsageFrequency {
    fn tag(&self) -> &'static str {
        match self {
            UsageFrequency::Daily => "daily",
            UsageFrequency::Several => "several",
            UsageFrequency::Weekly => "weekly",
            UsageFrequency::Occasional => "occasional",
        }
    }
}

/// Local summer climate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Climate {
    Hot,
    Moderate,
    Cool,
}

impl Climate {
    fn tag(&self) -> &'static str {
        match self {
            Climate::Hot => "hot",
            Climate::Moderate => "moderate",
            Climate::Cool => "cool",
        }
    }
}

/// What surrounds the pool area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surroundings {
    /// Paved or otherwise debris-free
    Clean,
    Grass,
    Trees,
    Dusty,
}

impl Surroundings {
    fn tag(&self) -> &'static str {
        match self {
            Surroundings::Clean => "clean",
            Surroundings::Grass => "grass",
            Surroundings::Trees => "trees",
            Surroundings::Dusty => "dusty",
        }
    }
}

/// Filtration equipment in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterSystem {
    None,
    Basic,
    Standard,
}

impl FilterSystem {
    fn tag(&self) -> &'static str {
        match self {
            FilterSystem::None => "none",
            FilterSystem::Basic => "basic",
            FilterSystem::Standard => "standard",
        }
    }
}

/// Water change interval range in days before adjustment, by volume
fn base_interval_days(gallons: f64) -> (f64, f64) {
    if gallons < 50.0 {
        (1.0, 2.0)
    } else if gallons < 150.0 {
        (2.0, 5.0)
    } else if gallons < 300.0 {
        (4.0, 10.0)
    } else {
        (7.0, 14.0)
    }
}

fn sun_tag(sun: SunExposure) -> &'static str {
    match sun {
        SunExposure::Full => "full",
        SunExposure::Partial => "partial",
        SunExposure::Minimal => "minimal",
        SunExposure::Shade => "shade",
    }
}

/// Input parameters for the maintenance schedule calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pool_type": "inflatable",
///   "volume": { "value": 200.0, "unit": "gallons" },
///   "usage": "several",
///   "average_users": 3,
///   "children_users": true,
///   "climate": "moderate",
///   "sun": "partial",
///   "surroundings": "grass",
///   "covered": false,
///   "chemical_use": "minimal",
///   "filter": "basic"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceInput {
    pub pool_type: PoolType,
    pub volume: Volume,
    pub usage: UsageFrequency,
    pub average_users: u32,
    pub children_users: bool,
    pub climate: Climate,
    pub sun: SunExposure,
    pub surroundings: Surroundings,
    pub covered: bool,
    pub chemical_use: ChemicalUse,
    pub filter: FilterSystem,
}

impl MaintenanceInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.volume.value.is_finite() || self.volume.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "volume",
                self.volume.value.to_string(),
                "Volume must be positive",
            ));
        }
        Ok(())
    }
}

/// Water change interval after all adjustments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterChangeInterval {
    pub min_days: u32,
    pub max_days: u32,
    /// Every factor that went into the adjustment, in application order
    pub factors: Vec<AppliedFactor>,
}

/// Results of the maintenance schedule calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceResult {
    pub water_change: WaterChangeInterval,
    pub daily_tasks: Vec<String>,
    pub weekly_tasks: Vec<String>,
    pub biweekly_tasks: Vec<String>,
    pub monthly_tasks: Vec<String>,
    pub seasonal_tasks: Vec<String>,
    pub chemical_recommendation: String,
}

/// Calculate the maintenance schedule
pub fn calculate(input: &MaintenanceInput) -> CalcResult<MaintenanceResult> {
    input.validate()?;

    let gallons = input.volume.canonical();
    let (base_min, base_max) = base_interval_days(gallons);

    let chemical = match input.chemical_use {
        ChemicalUse::None => 0.5,
        ChemicalUse::Minimal => 1.0,
        ChemicalUse::Regular => 1.5,
        ChemicalUse::Full => 2.0,
    };
    let usage = match input.usage {
        UsageFrequency::Daily => 0.6,
        UsageFrequency::Several => 0.8,
        UsageFrequency::Weekly => 1.2,
        UsageFrequency::Occasional => 1.5,
    };
    let (users_tag, users) = if input.average_users <= 2 {
        ("few", 1.0)
    } else if input.average_users <= 5 {
        ("moderate", 0.8)
    } else {
        ("many", 0.6)
    };
    let children = if input.children_users { 0.7 } else { 1.0 };
    let climate = match input.climate {
        Climate::Hot => 0.7,
        Climate::Moderate => 1.0,
        Climate::Cool => 1.3,
    };
    let sun = match input.sun {
        SunExposure::Full => 0.7,
        SunExposure::Partial => 0.9,
        SunExposure::Minimal => 1.1,
        SunExposure::Shade => 1.3,
    };
    let surroundings = match input.surroundings {
        Surroundings::Clean => 1.2,
        Surroundings::Grass => 1.0,
        Surroundings::Trees => 0.8,
        Surroundings::Dusty => 0.7,
    };
    let covered = if input.covered { 1.3 } else { 1.0 };
    let filter = match input.filter {
        FilterSystem::None => 0.8,
        FilterSystem::Basic => 1.2,
        FilterSystem::Standard => 1.5,
    };

    let outcome = FactorChain::new(1.0)
        .with_factor("chemical", input.chemical_use.tag(), chemical)
        .with_factor("usage", input.usage.tag(), usage)
        .with_factor("users", users_tag, users)
        .with_factor("children", if input.children_users { "yes" } else { "no" }, children)
        .with_factor("climate", input.climate.tag(), climate)
        .with_factor("sun", sun_tag(input.sun), sun)
        .with_factor("surroundings", input.surroundings.tag(), surroundings)
        .with_factor("covered", if input.covered { "yes" } else { "no" }, covered)
        .with_factor("filter", input.filter.tag(), filter)
        .finish();

    let multiplier = outcome.result;
    let min_days = ((base_min * multiplier).round().max(1.0)) as u32;
    let max_days = ((base_max * multiplier).round()).max(f64::from(min_days) + 1.0) as u32;

    let water_change = WaterChangeInterval {
        min_days,
        max_days,
        factors: outcome.applied,
    };

    let (daily, weekly, biweekly, monthly, seasonal) = tasks(input, &water_change);

    Ok(MaintenanceResult {
        chemical_recommendation: chemical_recommendation(input.chemical_use, gallons),
        water_change,
        daily_tasks: daily,
        weekly_tasks: weekly,
        biweekly_tasks: biweekly,
        monthly_tasks: monthly,
        seasonal_tasks: seasonal,
    })
}

#[allow(clippy::type_complexity)]
fn tasks(
    input: &MaintenanceInput,
    water_change: &WaterChangeInterval,
) -> (
    Vec<String>,
    Vec<String>,
    Vec<String>,
    Vec<String>,
    Vec<String>,
) {
    let mut daily: Vec<String> = vec![
        "Skim surface for debris and insects".to_string(),
        "Cover pool when not in use".to_string(),
        "Check water clarity and level".to_string(),
    ];
    let mut weekly: Vec<String> = vec![
        "Wipe down pool walls and floor".to_string(),
        "Check for any damage or leaks".to_string(),
        "Clean area around pool".to_string(),
    ];
    let mut biweekly: Vec<String> = vec![
        "Perform a deeper cleaning of pool surfaces".to_string(),
        "Check for algae growth in corners and seams".to_string(),
    ];
    let mut monthly: Vec<String> = vec![
        "Deep clean entire pool with appropriate cleaner".to_string(),
        "Inspect all components thoroughly".to_string(),
        "Clean or replace pool accessories".to_string(),
    ];
    let seasonal: Vec<String> = vec![
        "Thoroughly clean pool before first use of season".to_string(),
        "Check all components for winter damage".to_string(),
        "Set up shade or protective measures".to_string(),
        "Drain and thoroughly clean pool at season end".to_string(),
        "Dry completely before storage".to_string(),
        "Store in cool, dry place away from direct sunlight".to_string(),
    ];

    if input.chemical_use != ChemicalUse::None {
        daily.push("Test water with test strips".to_string());
        daily.push("Check sanitizer levels".to_string());
        weekly.push("Adjust pH levels".to_string());
        weekly.push("Add sanitizer as needed".to_string());
        biweekly.push("Shock treat the water".to_string());
        biweekly.push("Test total alkalinity and calcium hardness".to_string());
        monthly.push("Perform complete water testing".to_string());
        monthly.push("Balance all water parameters".to_string());
    }

    if input.filter != FilterSystem::None {
        daily.push("Run filtration system for recommended time".to_string());
        daily.push("Check filter for debris".to_string());
        weekly.push("Clean or replace filter cartridge as needed".to_string());
        monthly.push("Check and clean pump basket if applicable".to_string());
    }

    if input.pool_type == PoolType::Inflatable {
        weekly.push("Check air pressure and inflate if needed".to_string());
        weekly.push("Inspect valves and seams".to_string());
    }

    let change_task = format!(
        "Change water (or perform significant top-up) every {}-{} days",
        water_change.min_days, water_change.max_days
    );
    if water_change.min_days <= 7 {
        weekly.push(change_task);
    } else if water_change.min_days <= 14 {
        biweekly.push(change_task);
    } else {
        monthly.push(change_task);
    }

    (daily, weekly, biweekly, monthly, seasonal)
}

fn chemical_recommendation(chemical_use: ChemicalUse, gallons: f64) -> String {
    let base = match chemical_use {
        ChemicalUse::None => {
            "Without chemicals, rely on frequent water changes and mechanical cleaning. Use a \
             fine mesh net to skim debris daily and wipe surfaces during each water change."
        }
        ChemicalUse::Minimal => {
            "For minimal treatment, use 1-2 ppm chlorine or a non-chlorine alternative like \
             bromine or hydrogen peroxide. Test water before each use."
        }
        ChemicalUse::Regular => {
            "For regular treatment, maintain chlorine at 1-3 ppm, pH between 7.2-7.6, and \
             total alkalinity at 80-120 ppm. Test water 2-3 times per week."
        }
        ChemicalUse::Full => {
            "For full treatment, maintain chlorine at 1-3 ppm, pH between 7.2-7.6, total \
             alkalinity at 80-120 ppm, and calcium hardness at 150-250 ppm. Add algaecide \
             weekly and shock treat bi-weekly."
        }
    };
    let sizing = if gallons < 100.0 {
        "For small pools under 100 gallons, consider using approximately half the standard \
         dose of chemicals, or follow product instructions for small volumes."
    } else if gallons > 300.0 {
        "For larger pools over 300 gallons, follow standard dosing instructions on product \
         labels carefully."
    } else {
        "For medium-sized pools (100-300 gallons), follow product label instructions for \
         dosing precisely."
    };
    format!("{base} {sizing}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::VolumeUnit;

    fn base_input() -> MaintenanceInput {
        MaintenanceInput {
            pool_type: PoolType::Inflatable,
            volume: Volume::new(200.0, VolumeUnit::Gallons),
            usage: UsageFrequency::Weekly,
            average_users: 2,
            children_users: false,
            climate: Climate::Moderate,
            sun: SunExposure::Minimal,
            surroundings: Surroundings::Grass,
            covered: false,
            chemical_use: ChemicalUse::Minimal,
            filter: FilterSystem::None,
        }
    }

    #[test]
    fn test_interval_with_known_multiplier() {
        // 1.0 × 1.2 × 1.0 × 1.0 × 1.0 × 1.1 × 1.0 × 1.0 × 0.8 = 1.056
        let result = calculate(&base_input()).unwrap();
        // base 4-10 days for a medium pool: 4 × 1.056 ≈ 4, 10 × 1.056 ≈ 11
        assert_eq!(result.water_change.min_days, 4);
        assert_eq!(result.water_change.max_days, 11);
        assert_eq!(result.water_change.factors.len(), 9);
    }

    #[test]
    fn test_min_interval_floors_at_one_day() {
        let input = MaintenanceInput {
            volume: Volume::new(30.0, VolumeUnit::Gallons),
            chemical_use: ChemicalUse::None,
            usage: UsageFrequency::Daily,
            average_users: 7,
            children_users: true,
            climate: Climate::Hot,
            sun: SunExposure::Full,
            surroundings: Surroundings::Dusty,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.water_change.min_days, 1);
        assert!(result.water_change.max_days >= 2);
    }

    #[test]
    fn test_max_always_exceeds_min() {
        let input = MaintenanceInput {
            volume: Volume::new(40.0, VolumeUnit::Gallons),
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!(result.water_change.max_days > result.water_change.min_days);
    }

    #[test]
    fn test_chemical_tasks_only_with_chemicals() {
        let none = MaintenanceInput {
            chemical_use: ChemicalUse::None,
            ..base_input()
        };
        let result = calculate(&none).unwrap();
        assert!(!result.daily_tasks.iter().any(|t| t.contains("test strips")));
        assert!(result.chemical_recommendation.contains("Without chemicals"));

        let full = MaintenanceInput {
            chemical_use: ChemicalUse::Full,
            ..base_input()
        };
        let result = calculate(&full).unwrap();
        assert!(result.daily_tasks.iter().any(|t| t.contains("test strips")));
        assert!(result.biweekly_tasks.iter().any(|t| t.contains("Shock")));
    }

    #[test]
    fn test_inflatable_gets_valve_checks() {
        let result = calculate(&base_input()).unwrap();
        assert!(result
            .weekly_tasks
            .iter()
            .any(|t| t.contains("valves and seams")));

        let rigid = MaintenanceInput {
            pool_type: PoolType::Rigid,
            ..base_input()
        };
        let result = calculate(&rigid).unwrap();
        assert!(!result
            .weekly_tasks
            .iter()
            .any(|t| t.contains("valves and seams")));
    }

    #[test]
    fn test_water_change_task_bucketed_by_interval() {
        // large covered pool with full chemicals pushes the interval past a week
        let input = MaintenanceInput {
            volume: Volume::new(500.0, VolumeUnit::Gallons),
            chemical_use: ChemicalUse::Full,
            covered: true,
            filter: FilterSystem::Standard,
            usage: UsageFrequency::Occasional,
            ..base_input()
        };
        let result = calculate(&input).unwrap();
        assert!(result.water_change.min_days > 14);
        assert!(result
            .monthly_tasks
            .iter()
            .any(|t| t.contains("Change water")));
    }
}
