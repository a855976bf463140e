//! Acclimation plan computation.

use serde::{Deserialize, Serialize};

use crate::config::{PlannerConfig, RiskThresholds};
use crate::params::TripParameters;

/// Coarse altitude-sickness risk, derived from the signed altitude change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Change of 2000 ft or less, including descents
    Low,
    /// Over 2000 ft
    Moderate,
    /// Over 5000 ft
    #[serde(rename = "Moderate-High")]
    ModerateHigh,
    /// Over 8000 ft
    High,
}

impl RiskLevel {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::ModerateHigh => "Moderate-High",
            RiskLevel::High => "High",
        }
    }

    /// Display color token.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",
            RiskLevel::Moderate => "#f59e0b",
            RiskLevel::ModerateHigh => "#f97316",
            RiskLevel::High => "#ef4444",
        }
    }

    /// Precautions for this tier.
    pub fn precautions(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::Low => &[
                "Normal activity is generally fine",
                "Drink a little more water than usual",
                "Expect to breathe harder on climbs",
            ],
            RiskLevel::Moderate => &[
                "Take your first day easy",
                "Increase fluid intake",
                "Limit alcohol for the first 48 hours",
                "Watch for headaches or poor sleep",
            ],
            RiskLevel::ModerateHigh => &[
                "Plan at least two easy days before hard efforts",
                "Consider a night at an intermediate altitude",
                "Monitor for nausea and dizziness",
                "Avoid alcohol and sleep aids early in the trip",
            ],
            RiskLevel::High => &[
                "Talk to a physician before you travel",
                "Stage your ascent if at all possible",
                "Descend if symptoms get worse",
                "Never push through severe symptoms",
            ],
        }
    }

    /// Classify a signed altitude change. Descents always land in `Low`.
    pub fn classify(altitude_change_feet: i64, thresholds: &RiskThresholds) -> Self {
        if altitude_change_feet > thresholds.high_feet {
            RiskLevel::High
        } else if altitude_change_feet > thresholds.moderate_high_feet {
            RiskLevel::ModerateHigh
        } else if altitude_change_feet > thresholds.moderate_feet {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed acclimation plan.
///
/// Plans are values: any parameter change produces a new plan. A saved
/// trip stores its plan as a snapshot so later tuning of the constants does
/// not alter it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcclimationPlan {
    /// Destination minus home, in feet (may be zero or negative)
    pub altitude_change_feet: i64,

    /// Acclimation days before scaling, at least 1
    pub base_days: u32,

    /// Days until fully acclimated, at least 1
    pub recommended_days: u32,

    /// First day light activity is allowed
    pub first_activity_day: u32,

    /// First day moderate activity is allowed
    pub moderate_activity_day: u32,

    /// First day at full intensity
    pub full_intensity_day: u32,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// Daily fluid target, one decimal place
    pub daily_hydration_liters: f64,

    /// Extra daily calories, percent
    pub calorie_increase_percent: i64,
}

/// Compute a plan with the default constants.
pub fn compute_plan(params: &TripParameters) -> AcclimationPlan {
    compute_plan_with(params, &PlannerConfig::default())
}

/// Compute a plan with the given constants.
///
/// Total for any altitudes: the change is computed in 64 bits and every
/// day count is clamped before narrowing.
pub fn compute_plan_with(params: &TripParameters, config: &PlannerConfig) -> AcclimationPlan {
    let altitude_change_feet =
        i64::from(params.destination_altitude_feet) - i64::from(params.home_altitude_feet);
    let change = altitude_change_feet as f64;

    // Floor the raw ratio, then clamp: a descent still yields one base day.
    let base_days = (change / config.schedule.feet_per_base_day).floor().max(1.0);

    let activity = config.activity_multipliers.get(params.activity_level);
    let fitness = config.fitness_multipliers.get(params.fitness_level);
    let recommended_days = to_days((base_days * activity * fitness).ceil()).max(1);

    let scaled = f64::from(recommended_days);
    let first_activity_day = to_days((scaled * config.schedule.first_activity_fraction).ceil()).max(1);
    let moderate_activity_day =
        to_days((scaled * config.schedule.moderate_activity_fraction).ceil()).max(2);
    let full_intensity_day = recommended_days.max(2);

    let nutrition = &config.nutrition;
    let hydration = nutrition.base_hydration_liters * (1.0 + change / nutrition.hydration_scale_feet);
    let daily_hydration_liters = round_half_up(hydration * 10.0) / 10.0;
    let calorie_increase_percent =
        round_half_up(change / 1000.0 * nutrition.calorie_percent_per_1000_feet) as i64;

    AcclimationPlan {
        altitude_change_feet,
        base_days: to_days(base_days),
        recommended_days,
        first_activity_day,
        moderate_activity_day,
        full_intensity_day,
        risk_level: RiskLevel::classify(altitude_change_feet, &config.risk),
        daily_hydration_liters,
        calorie_increase_percent,
    }
}

/// Round half toward positive infinity: 2.5 -> 3, -2.5 -> -2.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// Float-to-int `as` saturates, so oversized day counts pin at u32::MAX.
fn to_days(value: f64) -> u32 {
    value as u32
}
