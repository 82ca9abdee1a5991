//! # Total Cost of Ownership Calculator
//!
//! Adds up what a pool really costs: purchase, annual water, electricity,
//! and maintenance spend, then first-year, lifetime, and per-use figures
//! with cost-saving tips aimed at the largest expense.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Volume;

/// Cap on cost-saving tips returned
pub const MAX_TIPS: usize = 10;

/// Water is billed per thousand gallons
const GALLONS_PER_BILLING_UNIT: f64 = 1000.0;

/// Common pool models with typical purchase figures, for pre-filling a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolModel {
    InflatableBasic,
    InflatablePremium,
    HardPlastic,
    FramedSmall,
    FramedMedium,
    FramedLarge,
}

/// Typical purchase costs and lifespan for a pool model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelSuggestion {
    pub pool_cost: f64,
    pub accessories_cost: f64,
    pub equipment_cost: f64,
    pub lifespan_years: u32,
}

impl PoolModel {
    pub fn suggestion(&self) -> ModelSuggestion {
        match self {
            PoolModel::InflatableBasic => ModelSuggestion {
                pool_cost: 30.0,
                accessories_cost: 20.0,
                equipment_cost: 0.0,
                lifespan_years: 2,
            },
            PoolModel::InflatablePremium => ModelSuggestion {
                pool_cost: 80.0,
                accessories_cost: 40.0,
                equipment_cost: 50.0,
                lifespan_years: 3,
            },
            PoolModel::HardPlastic => ModelSuggestion {
                pool_cost: 60.0,
                accessories_cost: 25.0,
                equipment_cost: 0.0,
                lifespan_years: 4,
            },
            PoolModel::FramedSmall => ModelSuggestion {
                pool_cost: 150.0,
                accessories_cost: 50.0,
                equipment_cost: 100.0,
                lifespan_years: 5,
            },
            PoolModel::FramedMedium => ModelSuggestion {
                pool_cost: 250.0,
                accessories_cost: 75.0,
                equipment_cost: 150.0,
                lifespan_years: 6,
            },
            PoolModel::FramedLarge => ModelSuggestion {
                pool_cost: 350.0,
                accessories_cost: 100.0,
                equipment_cost: 200.0,
                lifespan_years: 7,
            },
        }
    }
}

/// Input parameters for the cost calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pool_cost": 80.0,
///   "accessories_cost": 40.0,
///   "equipment_cost": 50.0,
///   "water_volume": { "value": 150.0, "unit": "gallons" },
///   "water_rate_per_1000_gal": 4.0,
///   "water_changes_per_year": 10,
///   "electricity_kwh_per_day": 0.5,
///   "electricity_rate_per_kwh": 0.15,
///   "usage_days_per_year": 90,
///   "chemicals_monthly_cost": 10.0,
///   "cleaning_supplies_annual_cost": 15.0,
///   "annual_repair_cost": 5.0,
///   "season_length_months": 3,
///   "lifespan_years": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInput {
    pub pool_cost: f64,
    pub accessories_cost: f64,
    pub equipment_cost: f64,
    pub water_volume: Volume,
    pub water_rate_per_1000_gal: f64,
    pub water_changes_per_year: u32,
    pub electricity_kwh_per_day: f64,
    pub electricity_rate_per_kwh: f64,
    pub usage_days_per_year: u32,
    pub chemicals_monthly_cost: f64,
    pub cleaning_supplies_annual_cost: f64,
    pub annual_repair_cost: f64,
    pub season_length_months: u32,
    pub lifespan_years: u32,
}

impl CostInput {
    pub fn validate(&self) -> CalcResult<()> {
        let non_negative = [
            ("pool_cost", self.pool_cost),
            ("accessories_cost", self.accessories_cost),
            ("equipment_cost", self.equipment_cost),
            ("water_rate_per_1000_gal", self.water_rate_per_1000_gal),
            ("electricity_kwh_per_day", self.electricity_kwh_per_day),
            ("electricity_rate_per_kwh", self.electricity_rate_per_kwh),
            ("chemicals_monthly_cost", self.chemicals_monthly_cost),
            (
                "cleaning_supplies_annual_cost",
                self.cleaning_supplies_annual_cost,
            ),
            ("annual_repair_cost", self.annual_repair_cost),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a non-negative number",
                ));
            }
        }
        if !self.water_volume.value.is_finite() || self.water_volume.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "water_volume",
                self.water_volume.value.to_string(),
                "Water volume must be positive",
            ));
        }
        if self.usage_days_per_year == 0 {
            return Err(CalcError::invalid_input(
                "usage_days_per_year",
                self.usage_days_per_year.to_string(),
                "Usage days must be positive",
            ));
        }
        if self.lifespan_years == 0 {
            return Err(CalcError::invalid_input(
                "lifespan_years",
                self.lifespan_years.to_string(),
                "Pool lifespan must be positive",
            ));
        }
        Ok(())
    }
}

/// One-time purchase costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialCosts {
    pub pool: f64,
    pub accessories: f64,
    pub equipment: f64,
}

impl InitialCosts {
    pub fn total(&self) -> f64 {
        self.pool + self.accessories + self.equipment
    }
}

/// Recurring yearly costs by category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualCosts {
    pub water: f64,
    pub electricity: f64,
    pub chemicals: f64,
    pub cleaning: f64,
    pub repair: f64,
}

impl AnnualCosts {
    pub fn total(&self) -> f64 {
        self.water + self.electricity + self.chemicals + self.cleaning + self.repair
    }

    /// Category with the largest annual spend; ties go to the earlier entry
    fn highest(&self) -> &'static str {
        let categories = [
            ("water", self.water),
            ("electricity", self.electricity),
            ("chemicals", self.chemicals),
            ("cleaning", self.cleaning),
            ("repair", self.repair),
        ];
        let mut best = categories[0];
        for category in &categories[1..] {
            if category.1 > best.1 {
                best = *category;
            }
        }
        best.0
    }
}

/// Results of the cost calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub initial: InitialCosts,
    pub annual: AnnualCosts,
    pub total_initial_cost: f64,
    pub total_annual_cost: f64,
    /// Initial costs plus the first year of operation
    pub first_year_cost: f64,
    /// Initial costs plus operation over the pool's lifespan
    pub lifetime_cost: f64,
    /// Lifetime cost divided by expected number of usage days
    pub cost_per_use: f64,
    pub saving_tips: Vec<String>,
}

/// Work out first-year, lifetime, and per-use costs
pub fn calculate(input: &CostInput) -> CalcResult<CostResult> {
    input.validate()?;

    let initial = InitialCosts {
        pool: input.pool_cost,
        accessories: input.accessories_cost,
        equipment: input.equipment_cost,
    };

    let gallons = input.water_volume.canonical();
    let cost_per_fill = gallons / GALLONS_PER_BILLING_UNIT * input.water_rate_per_1000_gal;

    let annual = AnnualCosts {
        water: cost_per_fill * f64::from(input.water_changes_per_year),
        electricity: input.electricity_kwh_per_day
            * input.electricity_rate_per_kwh
            * f64::from(input.usage_days_per_year),
        chemicals: input.chemicals_monthly_cost * f64::from(input.season_length_months),
        cleaning: input.cleaning_supplies_annual_cost,
        repair: input.annual_repair_cost,
    };

    let total_initial_cost = initial.total();
    let total_annual_cost = annual.total();
    let lifetime_cost = total_initial_cost + total_annual_cost * f64::from(input.lifespan_years);
    let uses = f64::from(input.usage_days_per_year) * f64::from(input.lifespan_years);

    Ok(CostResult {
        saving_tips: saving_tips(input, &annual),
        total_initial_cost,
        total_annual_cost,
        first_year_cost: total_initial_cost + total_annual_cost,
        lifetime_cost,
        cost_per_use: lifetime_cost / uses,
        initial,
        annual,
    })
}

fn saving_tips(input: &CostInput, annual: &AnnualCosts) -> Vec<String> {
    let mut tips = Vec::new();

    match annual.highest() {
        "water" => {
            tips.push(
                "Reduce water costs by using a pool cover to minimize evaporation and extend \
                 time between water changes."
                    .to_string(),
            );
            tips.push(
                "Consider collecting rainwater (where legal) to use for pool filling.".to_string(),
            );
            if input.water_changes_per_year > 3 {
                tips.push(
                    "Instead of complete water changes, consider partial water changes combined \
                     with proper chemical treatment to extend water life."
                        .to_string(),
                );
            }
        }
        "electricity" => {
            tips.push(
                "Reduce electricity costs by using a timer for your pump to run only when needed \
                 (typically 4-6 hours per day)."
                    .to_string(),
            );
            tips.push(
                "Consider solar alternatives for heating, such as solar covers or solar rings."
                    .to_string(),
            );
            tips.push(
                "Run electrical equipment during off-peak hours if your utility offers \
                 time-of-use rates."
                    .to_string(),
            );
        }
        "chemicals" => {
            tips.push(
                "Reduce chemical costs by keeping the pool covered when not in use to prevent \
                 debris and sunlight from affecting water chemistry."
                    .to_string(),
            );
            tips.push(
                "Buy chemicals in bulk during off-season sales for significant savings."
                    .to_string(),
            );
            tips.push("Test water regularly to avoid over-treatment with chemicals.".to_string());
        }
        "cleaning" => {
            tips.push(
                "Invest in a good quality pool cover to reduce cleaning frequency and supply \
                 costs."
                    .to_string(),
            );
            tips.push(
                "Create a DIY pool skimmer using household items instead of purchasing \
                 specialized equipment."
                    .to_string(),
            );
        }
        _ => {
            tips.push(
                "Invest in a higher quality pool initially to reduce repair costs over time."
                    .to_string(),
            );
            tips.push(
                "Store your pool properly during off-season to prevent damage and extend \
                 lifespan."
                    .to_string(),
            );
            tips.push(
                "Address small repairs immediately before they become major issues.".to_string(),
            );
        }
    }

    if input.lifespan_years < 3 {
        tips.push(
            "Consider investing in a more durable pool. While the initial cost is higher, the \
             longer lifespan reduces annual costs significantly."
                .to_string(),
        );
    }
    if input.usage_days_per_year < 30 {
        tips.push(
            "Increase pool usage days to improve cost-effectiveness. Your current cost per use \
             is relatively high due to limited usage."
                .to_string(),
        );
    }

    if tips.len() < 3 {
        tips.push(
            "Properly winterize your pool during off-season to prevent damage and extend its \
             lifespan."
                .to_string(),
        );
        tips.push(
            "Share maintenance supplies with neighbors or family members who also have pools to \
             split costs."
                .to_string(),
        );
    }

    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::VolumeUnit;

    fn base_input() -> CostInput {
        CostInput {
            pool_cost: 80.0,
            accessories_cost: 40.0,
            equipment_cost: 50.0,
            water_volume: Volume::new(150.0, VolumeUnit::Gallons),
            water_rate_per_1000_gal: 4.0,
            water_changes_per_year: 10,
            electricity_kwh_per_day: 0.5,
            electricity_rate_per_kwh: 0.15,
            usage_days_per_year: 90,
            chemicals_monthly_cost: 10.0,
            cleaning_supplies_annual_cost: 15.0,
            annual_repair_cost: 5.0,
            season_length_months: 3,
            lifespan_years: 3,
        }
    }

    #[test]
    fn lifetime_and_per_use_costs() {
        let result = calculate(&base_input()).unwrap();
        assert!((result.total_initial_cost - 170.0).abs() < 1e-9);
        // water 6.0, electricity 6.75, chemicals 30.0, cleaning 15.0, repair 5.0
        assert!((result.annual.water - 6.0).abs() < 1e-9);
        assert!((result.annual.electricity - 6.75).abs() < 1e-9);
        assert!((result.annual.chemicals - 30.0).abs() < 1e-9);
        assert!((result.total_annual_cost - 62.75).abs() < 1e-9);
        assert!((result.first_year_cost - 232.75).abs() < 1e-9);
        assert!((result.lifetime_cost - 358.25).abs() < 1e-9);
        assert!((result.cost_per_use - 358.25 / 270.0).abs() < 1e-9);
    }

    #[test]
    fn water_volume_accepts_liters() {
        let mut input = base_input();
        input.water_volume = Volume::new(1000.0, VolumeUnit::Liters);
        let result = calculate(&input).unwrap();
        // 1000 L is 264.172 gallons
        let expected = 264.172 / 1000.0 * 4.0 * 10.0;
        assert!((result.annual.water - expected).abs() < 1e-3);
    }

    #[test]
    fn tips_target_largest_category() {
        // Chemicals dominate the base input
        let result = calculate(&base_input()).unwrap();
        assert_eq!(result.saving_tips.len(), 3);
        assert!(result.saving_tips.iter().any(|t| t.contains("bulk")));

        let mut input = base_input();
        input.water_changes_per_year = 52;
        let result = calculate(&input).unwrap();
        // water 31.2 now edges out chemicals 30.0, and >3 changes adds the
        // partial-change tip
        assert!(result.saving_tips.iter().any(|t| t.contains("rainwater")));
        assert!(result
            .saving_tips
            .iter()
            .any(|t| t.contains("partial water changes")));
    }

    #[test]
    fn short_lifespan_and_rare_use_tips() {
        let mut input = base_input();
        input.lifespan_years = 2;
        input.usage_days_per_year = 20;
        let result = calculate(&input).unwrap();
        assert!(result.saving_tips.iter().any(|t| t.contains("durable")));
        assert!(result
            .saving_tips
            .iter()
            .any(|t| t.contains("cost per use")));
    }

    #[test]
    fn model_suggestions_prefill() {
        let framed = PoolModel::FramedMedium.suggestion();
        assert!((framed.pool_cost - 250.0).abs() < 1e-9);
        assert_eq!(framed.lifespan_years, 6);
        let basic = PoolModel::InflatableBasic.suggestion();
        assert!((basic.equipment_cost - 0.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_costs_and_zero_lifespan() {
        let mut input = base_input();
        input.accessories_cost = -1.0;
        assert!(calculate(&input).is_err());

        let mut input = base_input();
        input.lifespan_years = 0;
        assert!(calculate(&input).is_err());

        let mut input = base_input();
        input.water_volume = Volume::new(0.0, VolumeUnit::Gallons);
        assert!(calculate(&input).is_err());
    }
}
