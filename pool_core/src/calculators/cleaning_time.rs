//! # Cleaning Time Calculator
//!
//! Estimates how long a full pool cleaning takes, broken into draining,
//! debris removal, scrubbing, rinsing, drying, and setup, then adjusted for
//! helpers, experience, and weather. Also produces efficiency tips, a
//! recommended cleaning schedule, and a step checklist.

use serde::{Deserialize, Serialize};

use crate::calculators::setup_time::ExperienceLevel;
use crate::calculators::{PoolType, SizeCategory};
use crate::errors::{CalcError, CalcResult};

/// Cap on tips and checklist items returned
pub const MAX_LIST_ITEMS: usize = 10;

/// Base time in minutes for gathering supplies, before adjustments
const BASE_SETUP_MINUTES: f64 = 5.0;

/// Cleaning tables use three size classes; fold the finer categories in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeBucket {
    Small,
    Medium,
    Large,
}

fn bucket(size: SizeCategory) -> SizeBucket {
    match size {
        SizeCategory::Tiny | SizeCategory::Small => SizeBucket::Small,
        SizeCategory::Medium => SizeBucket::Medium,
        SizeCategory::Large | SizeCategory::Xlarge => SizeBucket::Large,
    }
}

/// How dirty the pool is before cleaning starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanlinessLevel {
    Light,
    Moderate,
    Heavy,
    Severe,
}

impl CleanlinessLevel {
    /// Dirtier water drains slower
    fn drain_factor(&self) -> f64 {
        match self {
            CleanlinessLevel::Light => 1.0,
            CleanlinessLevel::Moderate => 1.1,
            CleanlinessLevel::Heavy => 1.2,
            CleanlinessLevel::Severe => 1.3,
        }
    }

    fn debris_base_minutes(&self) -> f64 {
        match self {
            CleanlinessLevel::Light => 3.0,
            CleanlinessLevel::Moderate => 7.0,
            CleanlinessLevel::Heavy => 12.0,
            CleanlinessLevel::Severe => 20.0,
        }
    }

    fn scrub_factor(&self) -> f64 {
        match self {
            CleanlinessLevel::Light => 0.7,
            CleanlinessLevel::Moderate => 1.0,
            CleanlinessLevel::Heavy => 1.5,
            CleanlinessLevel::Severe => 2.2,
        }
    }

    fn is_heavy(&self) -> bool {
        matches!(self, CleanlinessLevel::Heavy | CleanlinessLevel::Severe)
    }
}

/// Dominant kind of debris in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebrisType {
    Leaves,
    Dirt,
    Sunscreen,
    Algae,
    Mixed,
}

impl DebrisType {
    fn removal_factor(&self) -> f64 {
        match self {
            DebrisType::Leaves => 1.2,
            DebrisType::Dirt => 0.9,
            DebrisType::Sunscreen => 1.1,
            DebrisType::Algae => 1.3,
            DebrisType::Mixed => 1.15,
        }
    }

    fn scrub_factor(&self) -> f64 {
        match self {
            DebrisType::Leaves => 0.9,
            DebrisType::Dirt => 1.1,
            DebrisType::Sunscreen => 1.3,
            DebrisType::Algae => 1.5,
            DebrisType::Mixed => 1.2,
        }
    }
}

/// Interior surface finish of the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceFinish {
    SmoothVinyl,
    TexturedVinyl,
    Plastic,
    Pvc,
}

impl SurfaceFinish {
    fn scrub_factor(&self) -> f64 {
        match self {
            SurfaceFinish::SmoothVinyl => 0.8,
            SurfaceFinish::TexturedVinyl => 1.2,
            SurfaceFinish::Plastic => 1.0,
            SurfaceFinish::Pvc => 0.9,
        }
    }

    fn rinse_factor(&self) -> f64 {
        match self {
            SurfaceFinish::SmoothVinyl => 0.9,
            SurfaceFinish::TexturedVinyl => 1.2,
            SurfaceFinish::Plastic => 1.0,
            SurfaceFinish::Pvc => 0.9,
        }
    }

    fn dry_factor(&self) -> f64 {
        match self {
            SurfaceFinish::SmoothVinyl => 0.9,
            SurfaceFinish::TexturedVinyl => 1.3,
            SurfaceFinish::Plastic => 1.0,
            SurfaceFinish::Pvc => 0.9,
        }
    }
}

/// How the pool gets emptied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrainMethod {
    DrainPlug,
    SubmersiblePump,
    Siphon,
    ManualBailing,
    NoDrain,
}

impl DrainMethod {
    fn base_minutes(&self, size: SizeBucket) -> f64 {
        match size {
            SizeBucket::Small => match self {
                DrainMethod::DrainPlug => 5.0,
                DrainMethod::SubmersiblePump => 2.0,
                DrainMethod::Siphon => 7.0,
                DrainMethod::ManualBailing => 15.0,
                DrainMethod::NoDrain => 0.0,
            },
            SizeBucket::Medium => match self {
                DrainMethod::DrainPlug => 12.0,
                DrainMethod::SubmersiblePump => 5.0,
                DrainMethod::Siphon => 15.0,
                DrainMethod::ManualBailing => 30.0,
                DrainMethod::NoDrain => 0.0,
            },
            SizeBucket::Large => match self {
                DrainMethod::DrainPlug => 20.0,
                DrainMethod::SubmersiblePump => 10.0,
                DrainMethod::Siphon => 25.0,
                DrainMethod::ManualBailing => 45.0,
                DrainMethod::NoDrain => 0.0,
            },
        }
    }
}

/// What the pool gets cleaned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningProduct {
    WaterOnly,
    MildSoap,
    Vinegar,
    PoolCleaner,
    BleachSolution,
}

impl CleaningProduct {
    fn scrub_factor(&self) -> f64 {
        match self {
            CleaningProduct::WaterOnly => 1.3,
            CleaningProduct::MildSoap => 1.0,
            CleaningProduct::Vinegar => 0.9,
            CleaningProduct::PoolCleaner => 0.8,
            CleaningProduct::BleachSolution => 0.85,
        }
    }

    /// Stronger products need more thorough rinsing
    fn rinse_factor(&self) -> f64 {
        match self {
            CleaningProduct::WaterOnly => 0.7,
            CleaningProduct::MildSoap => 1.0,
            CleaningProduct::Vinegar => 1.1,
            CleaningProduct::PoolCleaner => 1.2,
            CleaningProduct::BleachSolution => 1.5,
        }
    }
}

/// Tools on hand for the cleaning session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningTool {
    Skimmer,
    Brush,
    PressureWasher,
    Sponge,
    Vacuum,
}

/// Conditions while cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherConditions {
    SunnyWarm,
    Cloudy,
    Windy,
    Cold,
    Indoor,
}

impl WeatherConditions {
    fn dry_factor(&self) -> f64 {
        match self {
            WeatherConditions::SunnyWarm => 0.8,
            WeatherConditions::Cloudy => 1.0,
            WeatherConditions::Windy => 0.9,
            WeatherConditions::Cold => 1.2,
            WeatherConditions::Indoor => 1.3,
        }
    }

    /// Effect on overall working pace
    fn work_factor(&self) -> f64 {
        match self {
            WeatherConditions::SunnyWarm => 0.9,
            WeatherConditions::Cloudy => 1.0,
            WeatherConditions::Windy => 1.1,
            WeatherConditions::Cold => 1.2,
            WeatherConditions::Indoor => 0.95,
        }
    }
}

/// When the pool was last cleaned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastCleaned {
    Today,
    ThisWeek,
    OverWeek,
    Never,
}

/// Extra effect of experience on working pace, on top of setup prep
fn experience_work_factor(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::First => 1.3,
        ExperienceLevel::Some => 1.0,
        ExperienceLevel::Experienced => 0.8,
    }
}

/// Two people are more than twice as efficient; more hands bring
/// diminishing returns.
fn helper_factor(helpers: u32) -> f64 {
    match helpers {
        1 => 1.0,
        2 => 0.65,
        3 => 0.45,
        _ => 0.35,
    }
}

/// Input parameters for the cleaning time calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pool_type": "inflatable",
///   "size": "medium",
///   "surface": "plastic",
///   "cleanliness": "moderate",
///   "debris": "mixed",
///   "last_cleaning": "this-week",
///   "drain_method": "drain-plug",
///   "products": "mild-soap",
///   "tools": ["skimmer", "brush"],
///   "helpers": 1,
///   "experience": "some",
///   "weather": "cloudy"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningTimeInput {
    pub pool_type: PoolType,
    pub size: SizeCategory,
    pub surface: SurfaceFinish,
    pub cleanliness: CleanlinessLevel,
    pub debris: DebrisType,
    pub last_cleaning: LastCleaned,
    pub drain_method: DrainMethod,
    pub products: CleaningProduct,
    #[serde(default)]
    pub tools: Vec<CleaningTool>,
    pub helpers: u32,
    pub experience: ExperienceLevel,
    pub weather: WeatherConditions,
}

impl CleaningTimeInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.helpers == 0 {
            return Err(CalcError::invalid_input(
                "helpers",
                self.helpers.to_string(),
                "At least one person has to do the cleaning",
            ));
        }
        Ok(())
    }

    fn has_tool(&self, tool: CleaningTool) -> bool {
        self.tools.contains(&tool)
    }
}

/// Active minutes per cleaning stage, before efficiency adjustments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub draining: f64,
    pub debris: f64,
    pub scrubbing: f64,
    pub rinsing: f64,
    pub drying: f64,
    pub setup: f64,
}

impl TimeBreakdown {
    pub fn total(&self) -> f64 {
        self.draining + self.debris + self.scrubbing + self.rinsing + self.drying + self.setup
    }

    /// Name of the stage eating the most time
    fn longest(&self) -> &'static str {
        let stages = [
            ("draining", self.draining),
            ("debris", self.debris),
            ("scrubbing", self.scrubbing),
            ("rinsing", self.rinsing),
            ("drying", self.drying),
            ("setup", self.setup),
        ];
        let mut best = stages[0];
        for stage in &stages[1..] {
            if stage.1 > best.1 {
                best = *stage;
            }
        }
        best.0
    }
}

/// Results of the cleaning time calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningTimeResult {
    pub components: TimeBreakdown,
    /// Total time in minutes after helper, experience, and weather factors
    pub total_minutes: f64,
    /// Total time written out in hours and minutes
    pub total_display: String,
    pub efficiency_tips: Vec<String>,
    pub schedule: Vec<String>,
    pub checklist: Vec<String>,
}

/// Estimate total cleaning time, stage by stage
pub fn calculate(input: &CleaningTimeInput) -> CalcResult<CleaningTimeResult> {
    input.validate()?;
    let size = bucket(input.size);

    let components = TimeBreakdown {
        draining: draining_minutes(input, size),
        debris: debris_minutes(input, size),
        scrubbing: scrubbing_minutes(input, size),
        rinsing: rinsing_minutes(input, size),
        drying: drying_minutes(input, size),
        setup: setup_minutes(input),
    };

    let total_minutes = components.total()
        * helper_factor(input.helpers)
        * experience_work_factor(input.experience)
        * input.weather.work_factor();

    Ok(CleaningTimeResult {
        total_display: format_minutes(total_minutes),
        efficiency_tips: efficiency_tips(input, &components),
        schedule: schedule(input, size),
        checklist: checklist(input),
        components,
        total_minutes,
    })
}

fn draining_minutes(input: &CleaningTimeInput, size: SizeBucket) -> f64 {
    input.drain_method.base_minutes(size) * input.cleanliness.drain_factor()
}

fn debris_minutes(input: &CleaningTimeInput, size: SizeBucket) -> f64 {
    let size_factor = match size {
        SizeBucket::Small => 0.8,
        SizeBucket::Medium => 1.0,
        SizeBucket::Large => 1.5,
    };
    let mut minutes =
        input.cleanliness.debris_base_minutes() * input.debris.removal_factor() * size_factor;
    if input.has_tool(CleaningTool::Skimmer) {
        minutes *= 0.7;
    }
    minutes
}

fn scrubbing_minutes(input: &CleaningTimeInput, size: SizeBucket) -> f64 {
    let base = match size {
        SizeBucket::Small => 10.0,
        SizeBucket::Medium => 20.0,
        SizeBucket::Large => 35.0,
    };
    let mut minutes = base
        * input.cleanliness.scrub_factor()
        * input.surface.scrub_factor()
        * input.debris.scrub_factor()
        * input.products.scrub_factor();
    if input.has_tool(CleaningTool::Brush) {
        minutes *= 0.8;
    }
    if input.has_tool(CleaningTool::PressureWasher) {
        minutes *= 0.5;
    }
    if input.has_tool(CleaningTool::Sponge) {
        minutes *= 0.9;
    }
    minutes
}

fn rinsing_minutes(input: &CleaningTimeInput, size: SizeBucket) -> f64 {
    let base = match size {
        SizeBucket::Small => 3.0,
        SizeBucket::Medium => 6.0,
        SizeBucket::Large => 10.0,
    };
    base * input.products.rinse_factor() * input.surface.rinse_factor()
}

/// Active toweling time, not passive air drying
fn drying_minutes(input: &CleaningTimeInput, size: SizeBucket) -> f64 {
    let base = match size {
        SizeBucket::Small => 2.0,
        SizeBucket::Medium => 4.0,
        SizeBucket::Large => 7.0,
    };
    base * input.weather.dry_factor() * input.surface.dry_factor()
}

fn setup_minutes(input: &CleaningTimeInput) -> f64 {
    let mut minutes = BASE_SETUP_MINUTES * input.experience.factor();
    if input.has_tool(CleaningTool::Vacuum) {
        minutes += 3.0;
    }
    if input.has_tool(CleaningTool::PressureWasher) {
        minutes += 5.0;
    }
    minutes
}

/// Render minutes as "N minutes", "1 hour", or "H hours M minutes"
fn format_minutes(minutes: f64) -> String {
    let hours = (minutes / 60.0).floor() as u64;
    let mins = (minutes % 60.0).round() as u64;
    match (hours, mins) {
        (0, m) => format!("{m} minutes"),
        (1, 0) => "1 hour".to_string(),
        (h, 0) => format!("{h} hours"),
        (1, m) => format!("1 hour {m} minutes"),
        (h, m) => format!("{h} hours {m} minutes"),
    }
}

fn efficiency_tips(input: &CleaningTimeInput, components: &TimeBreakdown) -> Vec<String> {
    let mut tips = Vec::new();

    match components.longest() {
        "draining" => {
            tips.push(
                "Consider investing in a submersible pump to significantly reduce draining time."
                    .to_string(),
            );
            if input.drain_method == DrainMethod::ManualBailing {
                tips.push(
                    "Manual bailing is very time-consuming. A simple siphon with a garden hose \
                     is much faster."
                        .to_string(),
                );
            }
        }
        "debris" => {
            tips.push(
                "Remove large debris before draining to prevent clogging and make the process \
                 faster."
                    .to_string(),
            );
            if !input.has_tool(CleaningTool::Skimmer) {
                tips.push(
                    "A pool skimmer net can reduce debris removal time by up to 30%.".to_string(),
                );
            }
        }
        "scrubbing" => {
            if input.cleanliness.is_heavy() {
                tips.push(
                    "For heavily soiled pools, apply cleaning solution and let it sit for 5-10 \
                     minutes before scrubbing to reduce effort."
                        .to_string(),
                );
            }
            if !input.has_tool(CleaningTool::Brush) {
                tips.push(
                    "A proper pool brush with medium bristles can make scrubbing much more \
                     efficient."
                        .to_string(),
                );
            }
            if input.debris == DebrisType::Algae
                && input.products != CleaningProduct::BleachSolution
            {
                tips.push(
                    "For algae removal, a diluted bleach solution is most effective when used \
                     safely."
                        .to_string(),
                );
            }
        }
        _ => {}
    }

    if input.helpers == 1 {
        tips.push("Cleaning with a partner can reduce total cleaning time by about 35%.".to_string());
    }
    if input.experience == ExperienceLevel::First {
        tips.push(
            "Create a cleaning checklist to follow each time. Your efficiency will improve with \
             practice."
                .to_string(),
        );
    }
    if matches!(input.last_cleaning, LastCleaned::OverWeek | LastCleaned::Never) {
        tips.push(
            "Clean your pool more frequently to prevent heavy buildup, which takes much longer \
             to remove."
                .to_string(),
        );
    }
    if !input.has_tool(CleaningTool::PressureWasher) && bucket(input.size) == SizeBucket::Large {
        tips.push(
            "For large pools, a pressure washer (on low setting) can reduce scrubbing time by up \
             to 50%."
                .to_string(),
        );
    }
    if input.products == CleaningProduct::WaterOnly && input.cleanliness.is_heavy() {
        tips.push(
            "Water alone is insufficient for heavy cleaning. Consider using a mild soap or \
             specialized pool cleaner."
                .to_string(),
        );
    }

    if tips.len() < 3 {
        tips.push(
            "Organize your cleaning supplies in a caddy or bucket for easy access during the \
             cleaning process."
                .to_string(),
        );
        tips.push(
            "Clean your pool at the warmest, driest time of day for faster drying and more \
             pleasant working conditions."
                .to_string(),
        );
    }

    tips.truncate(MAX_LIST_ITEMS);
    tips
}

fn schedule(input: &CleaningTimeInput, size: SizeBucket) -> Vec<String> {
    let frequency = match size {
        SizeBucket::Small => {
            "Drain and clean after each use, or every 2-3 days if used regularly."
        }
        SizeBucket::Medium => "Clean thoroughly every 3-5 days during regular use.",
        SizeBucket::Large => "Clean thoroughly every 5-7 days during regular use.",
    };

    let mut lines = Vec::new();
    if input.cleanliness.is_heavy() {
        lines.push(
            "Based on the current condition of your pool, an immediate thorough cleaning is \
             recommended, followed by a more frequent maintenance schedule."
                .to_string(),
        );
    }
    lines.push(format!("Recommended schedule: {frequency}"));
    lines.push("Quick maintenance: skim debris daily and check water clarity.".to_string());
    lines.push(
        "Water treatment: if you use chemicals, check levels every 2-3 days.".to_string(),
    );
    if !input.cleanliness.is_heavy() {
        lines.push(
            "Seasonal consideration: during periods of heavy use or hot weather, increase \
             cleaning frequency by 30-50%."
                .to_string(),
        );
    }
    lines
}

fn checklist(input: &CleaningTimeInput) -> Vec<String> {
    let mut items: Vec<String> = [
        "Gather cleaning supplies and equipment.",
        "Remove large debris from the pool surface.",
        "Drain the pool (if necessary).",
        "Scrub the pool walls and floor.",
        "Rinse the pool thoroughly.",
        "Dry the pool and surrounding area.",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    match input.pool_type {
        PoolType::Inflatable => {
            items.push("Check for leaks or damage while cleaning.".to_string());
        }
        PoolType::Framed => {
            items.push("Inspect frame components for rust or damage.".to_string());
        }
        PoolType::Rigid | PoolType::Softside => {}
    }

    items.truncate(MAX_LIST_ITEMS);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> CleaningTimeInput {
        CleaningTimeInput {
            pool_type: PoolType::Inflatable,
            size: SizeCategory::Medium,
            surface: SurfaceFinish::Plastic,
            cleanliness: CleanlinessLevel::Moderate,
            debris: DebrisType::Mixed,
            last_cleaning: LastCleaned::ThisWeek,
            drain_method: DrainMethod::DrainPlug,
            products: CleaningProduct::MildSoap,
            tools: Vec::new(),
            helpers: 1,
            experience: ExperienceLevel::Some,
            weather: WeatherConditions::Cloudy,
        }
    }

    #[test]
    fn medium_pool_breakdown() {
        let result = calculate(&base_input()).unwrap();
        // drain 12 * 1.1, debris 7 * 1.15, scrub 20 * 1.2, rinse 6, dry 4, setup 5
        assert!((result.components.draining - 13.2).abs() < 1e-9);
        assert!((result.components.debris - 8.05).abs() < 1e-9);
        assert!((result.components.scrubbing - 24.0).abs() < 1e-9);
        assert!((result.components.rinsing - 6.0).abs() < 1e-9);
        assert!((result.components.drying - 4.0).abs() < 1e-9);
        assert!((result.components.setup - 5.0).abs() < 1e-9);
        assert!((result.total_minutes - 60.25).abs() < 1e-9);
        assert_eq!(result.total_display, "1 hour");
    }

    #[test]
    fn tools_and_efficiency_factors_stack() {
        let input = CleaningTimeInput {
            pool_type: PoolType::Rigid,
            size: SizeCategory::Tiny,
            surface: SurfaceFinish::SmoothVinyl,
            cleanliness: CleanlinessLevel::Heavy,
            debris: DebrisType::Algae,
            last_cleaning: LastCleaned::Never,
            drain_method: DrainMethod::SubmersiblePump,
            products: CleaningProduct::BleachSolution,
            tools: vec![
                CleaningTool::Skimmer,
                CleaningTool::Brush,
                CleaningTool::PressureWasher,
                CleaningTool::Vacuum,
            ],
            helpers: 2,
            experience: ExperienceLevel::Experienced,
            weather: WeatherConditions::SunnyWarm,
        };
        let result = calculate(&input).unwrap();
        // drain 2*1.2, debris 12*1.3*0.8*0.7, scrub 10*1.5*0.8*1.5*0.85*0.8*0.5,
        // rinse 3*1.5*0.9, dry 2*0.8*0.9, setup 5*0.7+3+5
        assert!((result.components.draining - 2.4).abs() < 1e-9);
        assert!((result.components.debris - 8.736).abs() < 1e-9);
        assert!((result.components.scrubbing - 6.12).abs() < 1e-9);
        assert!((result.components.rinsing - 4.05).abs() < 1e-9);
        assert!((result.components.drying - 1.44).abs() < 1e-9);
        assert!((result.components.setup - 11.5).abs() < 1e-9);
        // 34.246 raw * 0.65 * 0.8 * 0.9
        assert!((result.total_minutes - 16.027128).abs() < 1e-6);
        assert_eq!(result.total_display, "16 minutes");
    }

    #[test]
    fn zero_helpers_rejected() {
        let mut input = base_input();
        input.helpers = 0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn helper_savings_plateau_past_four() {
        let mut four = base_input();
        four.helpers = 4;
        let mut seven = base_input();
        seven.helpers = 7;
        let a = calculate(&four).unwrap();
        let b = calculate(&seven).unwrap();
        assert!((a.total_minutes - b.total_minutes).abs() < 1e-9);
    }

    #[test]
    fn draining_tips_when_bailing_dominates() {
        let mut input = base_input();
        input.size = SizeCategory::Large;
        input.cleanliness = CleanlinessLevel::Light;
        input.debris = DebrisType::Dirt;
        input.drain_method = DrainMethod::ManualBailing;
        let result = calculate(&input).unwrap();
        // draining 45.0 beats scrubbing 35*0.7*1.1 = 26.95
        assert!(result
            .efficiency_tips
            .iter()
            .any(|t| t.contains("submersible pump")));
        assert!(result.efficiency_tips.iter().any(|t| t.contains("siphon")));
    }

    #[test]
    fn scrubbing_tips_include_brush_and_partner() {
        let result = calculate(&base_input()).unwrap();
        assert_eq!(result.efficiency_tips.len(), 4);
        assert!(result.efficiency_tips.iter().any(|t| t.contains("pool brush")));
        assert!(result.efficiency_tips.iter().any(|t| t.contains("partner")));
    }

    #[test]
    fn checklist_varies_by_pool_type() {
        let inflatable = calculate(&base_input()).unwrap();
        assert!(inflatable.checklist.iter().any(|s| s.contains("leaks")));

        let mut input = base_input();
        input.pool_type = PoolType::Framed;
        let framed = calculate(&input).unwrap();
        assert!(framed.checklist.iter().any(|s| s.contains("frame components")));

        input.pool_type = PoolType::Rigid;
        let rigid = calculate(&input).unwrap();
        assert_eq!(rigid.checklist.len(), 6);
    }

    #[test]
    fn heavy_soiling_changes_schedule() {
        let mut input = base_input();
        input.cleanliness = CleanlinessLevel::Severe;
        let result = calculate(&input).unwrap();
        assert!(result.schedule[0].contains("immediate thorough cleaning"));
        assert!(!result.schedule.iter().any(|s| s.contains("Seasonal")));
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_minutes(45.0), "45 minutes");
        assert_eq!(format_minutes(60.2), "1 hour");
        assert_eq!(format_minutes(65.0), "1 hour 5 minutes");
        assert_eq!(format_minutes(120.3), "2 hours");
        assert_eq!(format_minutes(150.0), "2 hours 30 minutes");
    }
}
