//! # Sun Exposure Placement Calculator
//!
//! Finds the best spot and time of day for a pool by comparing the sun the
//! yard actually gets against the exposure its users want, adjusted for
//! water temperature preference, sunburn concern, and shade preference.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculators::maintenance::Climate;
use crate::errors::{CalcError, CalcResult};

/// Part of the day the pool could be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Morning,
    Midday,
    Afternoon,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Midday, TimeOfDay::Afternoon];

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Midday => "midday",
            TimeOfDay::Afternoon => "afternoon",
        }
    }
}

/// A sun exposure value (0 none, 1 full) for each part of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeProfile {
    pub morning: f64,
    pub midday: f64,
    pub afternoon: f64,
}

impl TimeProfile {
    const fn new(morning: f64, midday: f64, afternoon: f64) -> Self {
        TimeProfile {
            morning,
            midday,
            afternoon,
        }
    }

    pub fn get(&self, time: TimeOfDay) -> f64 {
        match time {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Midday => self.midday,
            TimeOfDay::Afternoon => self.afternoon,
        }
    }

    /// Time slot with the lowest value; ties go to the earlier slot
    fn lowest(&self) -> TimeOfDay {
        let mut best = TimeOfDay::Morning;
        for time in [TimeOfDay::Midday, TimeOfDay::Afternoon] {
            if self.get(time) < self.get(best) {
                best = time;
            }
        }
        best
    }
}

/// Who mostly uses the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserGroup {
    YoungChildren,
    OlderChildren,
    Teenagers,
    Adults,
    Mixed,
}

/// Desired sun exposure per time of day, keyed by user group and climate.
/// Younger users want less midday and afternoon sun, more so in hot climates.
static OPTIMAL_EXPOSURE: Lazy<HashMap<(UserGroup, Climate), TimeProfile>> = Lazy::new(|| {
    let mut table = HashMap::new();
    let rows = [
        (UserGroup::YoungChildren, [(1.0, 0.3, 0.1), (1.0, 0.5, 0.3), (1.0, 0.8, 0.6)]),
        (UserGroup::OlderChildren, [(1.0, 0.5, 0.2), (1.0, 0.7, 0.5), (1.0, 1.0, 0.8)]),
        (UserGroup::Teenagers, [(1.0, 0.6, 0.3), (1.0, 0.8, 0.6), (1.0, 1.0, 0.9)]),
        (UserGroup::Adults, [(1.0, 0.7, 0.4), (1.0, 0.9, 0.7), (1.0, 1.0, 1.0)]),
        (UserGroup::Mixed, [(1.0, 0.5, 0.2), (1.0, 0.7, 0.5), (1.0, 0.9, 0.8)]),
    ];
    for (group, [hot, moderate, cool]) in rows {
        table.insert((group, Climate::Hot), TimeProfile::new(hot.0, hot.1, hot.2));
        table.insert(
            (group, Climate::Moderate),
            TimeProfile::new(moderate.0, moderate.1, moderate.2),
        );
        table.insert((group, Climate::Cool), TimeProfile::new(cool.0, cool.1, cool.2));
    }
    table
});

/// Compass direction the yard's open side faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YardOrientation {
    North,
    East,
    South,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl YardOrientation {
    fn profile(&self) -> TimeProfile {
        match self {
            YardOrientation::North => TimeProfile::new(0.3, 0.7, 0.5),
            YardOrientation::East => TimeProfile::new(0.9, 0.6, 0.3),
            YardOrientation::South => TimeProfile::new(0.6, 0.9, 0.7),
            YardOrientation::West => TimeProfile::new(0.3, 0.6, 0.9),
            YardOrientation::Northeast => TimeProfile::new(0.8, 0.6, 0.3),
            YardOrientation::Northwest => TimeProfile::new(0.3, 0.6, 0.8),
            YardOrientation::Southeast => TimeProfile::new(0.8, 0.8, 0.5),
            YardOrientation::Southwest => TimeProfile::new(0.5, 0.8, 0.8),
        }
    }
}

/// Season the pool is being placed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Summer,
    Spring,
    Fall,
    Winter,
}

impl Season {
    fn profile(&self) -> TimeProfile {
        match self {
            Season::Summer => TimeProfile::new(0.8, 1.0, 0.9),
            Season::Spring => TimeProfile::new(0.7, 0.9, 0.7),
            Season::Fall => TimeProfile::new(0.6, 0.8, 0.6),
            Season::Winter => TimeProfile::new(0.4, 0.6, 0.3),
        }
    }
}

/// Broad region, used for UV intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    West,
    Northwest,
    Other,
}

impl Region {
    pub fn uv_factor(&self) -> f64 {
        match self {
            Region::Northeast => 0.7,
            Region::Southeast => 0.9,
            Region::Midwest => 0.8,
            Region::Southwest => 1.0,
            Region::West => 0.9,
            Region::Northwest => 0.6,
            Region::Other => 0.8,
        }
    }
}

/// How warm the users like the water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterTempPreference {
    Cool,
    Moderate,
    Warm,
}

impl WaterTempPreference {
    /// Weight on a shortfall of sun
    fn sun_factor(&self) -> f64 {
        match self {
            WaterTempPreference::Cool => 0.6,
            WaterTempPreference::Moderate => 0.8,
            WaterTempPreference::Warm => 1.0,
        }
    }

    /// Weight on an excess of sun
    fn shade_factor(&self) -> f64 {
        match self {
            WaterTempPreference::Cool => 1.0,
            WaterTempPreference::Moderate => 0.8,
            WaterTempPreference::Warm => 0.6,
        }
    }
}

/// How worried the household is about sunburn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SunburnConcern {
    Low,
    Medium,
    High,
}

impl SunburnConcern {
    fn factor(&self) -> f64 {
        match self {
            SunburnConcern::Low => 0.3,
            SunburnConcern::Medium => 0.6,
            SunburnConcern::High => 0.9,
        }
    }
}

/// Stated preference between sun and shade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadePreference {
    MostlySun,
    BalancedSun,
    Balanced,
    BalancedShade,
    MostlyShade,
}

impl ShadePreference {
    fn factor(&self) -> f64 {
        match self {
            ShadePreference::MostlySun => 0.2,
            ShadePreference::BalancedSun => 0.4,
            ShadePreference::Balanced => 0.5,
            ShadePreference::BalancedShade => 0.6,
            ShadePreference::MostlyShade => 0.8,
        }
    }
}

/// Input parameters for the sun exposure calculation.
///
/// Shade values are fractions of the yard covered (0.0 to 1.0).
///
/// ## JSON Example
///
/// ```json
/// {
///   "climate": "moderate",
///   "season": "summer",
///   "region": "midwest",
///   "orientation": "south",
///   "morning_shade": 0.2,
///   "afternoon_shade": 0.4,
///   "users": "mixed",
///   "water_temp": "moderate",
///   "sunburn_concern": "medium",
///   "shade_preference": "balanced",
///   "portable_shade": true
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunExposureInput {
    pub climate: Climate,
    pub season: Season,
    pub region: Region,
    pub orientation: YardOrientation,
    pub morning_shade: f64,
    pub afternoon_shade: f64,
    pub users: UserGroup,
    pub water_temp: WaterTempPreference,
    pub sunburn_concern: SunburnConcern,
    pub shade_preference: ShadePreference,
    /// Whether a portable canopy or umbrella is available
    pub portable_shade: bool,
}

impl SunExposureInput {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("morning_shade", self.morning_shade),
            ("afternoon_shade", self.afternoon_shade),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Shade must be a fraction between 0 and 1",
                ));
            }
        }
        Ok(())
    }
}

/// Results of the sun exposure calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunExposureResult {
    /// Exposure the users would ideally get at each time of day
    pub optimal_exposure: TimeProfile,
    /// Exposure the yard actually delivers after orientation, season, and shade
    pub actual_exposure: TimeProfile,
    /// Weighted mismatch per time of day; lower is better
    pub mismatch: TimeProfile,
    pub best_time: TimeOfDay,
    /// Whether setting up portable shade at the best time would help
    pub needs_portable_shade: bool,
    pub placement: String,
    pub shade_recommendations: Vec<String>,
    pub timing_recommendations: Vec<String>,
}

/// Score each time of day and recommend a placement
pub fn calculate(input: &SunExposureInput) -> CalcResult<SunExposureResult> {
    input.validate()?;

    // Table covers every group and climate, so the lookup cannot miss
    let optimal = OPTIMAL_EXPOSURE
        .get(&(input.users, input.climate))
        .copied()
        .unwrap_or(TimeProfile::new(1.0, 0.7, 0.5));

    let orientation = input.orientation.profile();
    let season = input.season.profile();
    let yard = TimeProfile::new(
        orientation.morning * season.morning,
        orientation.midday * season.midday,
        orientation.afternoon * season.afternoon,
    );

    let midday_shade = (input.morning_shade + input.afternoon_shade) / 2.0;
    let actual = TimeProfile::new(
        yard.morning * (1.0 - input.morning_shade),
        yard.midday * (1.0 - midday_shade),
        yard.afternoon * (1.0 - input.afternoon_shade),
    );

    let mut scores = [0.0f64; 3];
    for (i, time) in TimeOfDay::ALL.into_iter().enumerate() {
        let want = optimal.get(time);
        let have = actual.get(time);
        let too_sunny = have > want;

        let mut score = (want - have).abs();
        score *= if too_sunny {
            input.water_temp.shade_factor()
        } else {
            input.water_temp.sun_factor()
        };
        if too_sunny {
            score *= 1.0 + input.sunburn_concern.factor();
            score *= input.shade_preference.factor();
        } else {
            score *= 1.0 - input.shade_preference.factor();
        }
        scores[i] = score;
    }
    let mismatch = TimeProfile::new(scores[0], scores[1], scores[2]);

    let best_time = mismatch.lowest();
    let needs_portable_shade =
        input.portable_shade && actual.get(best_time) > optimal.get(best_time);

    Ok(SunExposureResult {
        placement: placement(input, best_time, needs_portable_shade),
        shade_recommendations: shade_recommendations(input, best_time, &actual, &optimal),
        timing_recommendations: timing_recommendations(input, &mismatch, best_time),
        optimal_exposure: optimal,
        actual_exposure: actual,
        mismatch,
        best_time,
        needs_portable_shade,
    })
}

fn placement(input: &SunExposureInput, best_time: TimeOfDay, needs_shade: bool) -> String {
    let spot = match best_time {
        TimeOfDay::Morning => {
            "a spot that catches morning sun, typically toward the east side of the yard"
        }
        TimeOfDay::Midday => "an open central spot that gets good midday sun",
        TimeOfDay::Afternoon => {
            "a spot with afternoon exposure, typically toward the west side of the yard"
        }
    };
    let mut text = format!(
        "Place the pool in {spot}, and plan to use it in the {}.",
        best_time.display_name()
    );
    if needs_shade {
        text.push_str(" Set up your portable shade over the pool during use.");
    }
    if input.season == Season::Winter {
        text.push_str(" Winter sun is weak; expect cool water regardless of placement.");
    }
    text
}

fn shade_recommendations(
    input: &SunExposureInput,
    best_time: TimeOfDay,
    actual: &TimeProfile,
    optimal: &TimeProfile,
) -> Vec<String> {
    let mut recs = Vec::new();

    if actual.get(best_time) > optimal.get(best_time) {
        if input.portable_shade {
            recs.push(
                "A canopy or umbrella over the pool will bring the sun down to a comfortable \
                 level at your best usage time."
                    .to_string(),
            );
        } else {
            recs.push(
                "The yard gets more sun than this group needs. Consider a portable canopy, \
                 umbrella, or shade sail."
                    .to_string(),
            );
        }
    }
    if input.sunburn_concern == SunburnConcern::High {
        recs.push(
            "With high sunburn concern, combine shade with sunscreen and limit sessions to \
             under an hour in direct sun."
                .to_string(),
        );
    }
    if input.climate == Climate::Hot && input.afternoon_shade < 0.3 {
        recs.push(
            "In a hot climate with little afternoon shade, plan to empty or cover the pool in \
             the afternoon to keep the water from overheating."
                .to_string(),
        );
    }
    if input.region.uv_factor() >= 0.9 {
        recs.push(
            "Your region has strong UV. Shade structures also protect the pool liner, which \
             degrades faster in direct sun."
                .to_string(),
        );
    }
    if recs.is_empty() {
        recs.push(
            "Your yard's natural shade pattern already suits this group; no extra shade is \
             needed."
                .to_string(),
        );
    }
    recs
}

fn timing_recommendations(
    input: &SunExposureInput,
    mismatch: &TimeProfile,
    best_time: TimeOfDay,
) -> Vec<String> {
    let mut ranked: Vec<TimeOfDay> = TimeOfDay::ALL.to_vec();
    ranked.sort_by(|a, b| {
        mismatch
            .get(*a)
            .partial_cmp(&mismatch.get(*b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut recs = vec![format!(
        "Best to worst usage times for your yard: {}, {}, {}.",
        ranked[0].display_name(),
        ranked[1].display_name(),
        ranked[2].display_name()
    )];
    if best_time == TimeOfDay::Morning {
        recs.push(
            "Morning water will be at its coolest; fill the pool the evening before if you want \
             it warmer."
                .to_string(),
        );
    }
    if input.users == UserGroup::YoungChildren {
        recs.push(
            "For young children, avoid the peak UV window from 10am to 4pm where possible, or \
             keep sessions short with shade breaks."
                .to_string(),
        );
    }
    recs
}
