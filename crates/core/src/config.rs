//! Planner configuration.
//!
//! Every constant the acclimation algorithm uses lives here so it can be
//! tuned without touching the algorithm. Saved trips keep the plan they were
//! created with, so retuning never rewrites history.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::{ActivityLevel, FitnessLevel};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Thresholds or fractions that must be ordered are not
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(&'static str),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable constants for plan computation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Multipliers applied per activity level
    pub activity_multipliers: ActivityMultipliers,
    /// Multipliers applied per fitness level
    pub fitness_multipliers: FitnessMultipliers,
    /// Day milestones and base-day sizing
    pub schedule: ScheduleConfig,
    /// Altitude-change thresholds for risk classification
    pub risk: RiskThresholds,
    /// Hydration and nutrition targets
    pub nutrition: NutritionConfig,
}

/// Activity multiplier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityMultipliers {
    /// Walking, sightseeing
    pub light: f64,
    /// Hiking, casual skiing
    pub moderate: f64,
    /// Running, hard skiing
    pub intense: f64,
    /// Racing, mountaineering
    pub extreme: f64,
}

impl ActivityMultipliers {
    /// Multiplier for a level.
    pub fn get(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Intense => self.intense,
            ActivityLevel::Extreme => self.extreme,
        }
    }
}

impl Default for ActivityMultipliers {
    fn default() -> Self {
        Self {
            light: 0.7,
            moderate: 1.0,
            intense: 1.3,
            extreme: 1.6,
        }
    }
}

/// Fitness multiplier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessMultipliers {
    /// Little regular exercise
    pub beginner: f64,
    /// Regular moderate exercise
    pub average: f64,
    /// Trains several times a week
    pub fit: f64,
    /// Competitive or endurance athlete
    pub athlete: f64,
}

impl FitnessMultipliers {
    /// Multiplier for a level.
    pub fn get(&self, level: FitnessLevel) -> f64 {
        match level {
            FitnessLevel::Beginner => self.beginner,
            FitnessLevel::Average => self.average,
            FitnessLevel::Fit => self.fit,
            FitnessLevel::Athlete => self.athlete,
        }
    }
}

impl Default for FitnessMultipliers {
    fn default() -> Self {
        Self {
            beginner: 1.3,
            average: 1.0,
            fit: 0.8,
            athlete: 0.7,
        }
    }
}

/// Base-day sizing and milestone placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Feet of altitude gain per base acclimation day
    pub feet_per_base_day: f64,
    /// Fraction of recommended days before light activity starts
    pub first_activity_fraction: f64,
    /// Fraction of recommended days before moderate activity starts
    pub moderate_activity_fraction: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            feet_per_base_day: 1000.0,
            first_activity_fraction: 0.3,
            moderate_activity_fraction: 0.6,
        }
    }
}

/// Risk thresholds in feet of (signed) altitude change. Each is exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Above this: Moderate
    pub moderate_feet: i64,
    /// Above this: Moderate-High
    pub moderate_high_feet: i64,
    /// Above this: High
    pub high_feet: i64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate_feet: 2000,
            moderate_high_feet: 5000,
            high_feet: 8000,
        }
    }
}

/// Hydration and calorie targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// Daily fluid baseline in liters at zero altitude change
    pub base_hydration_liters: f64,
    /// Altitude change that doubles the fluid baseline
    pub hydration_scale_feet: f64,
    /// Extra calories (percent) per 1000 ft of altitude change
    pub calorie_percent_per_1000_feet: f64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            base_hydration_liters: 2.0,
            hydration_scale_feet: 10_000.0,
            calorie_percent_per_1000_feet: 10.0,
        }
    }
}

impl PlannerConfig {
    /// Load from a JSON file. Missing sections and fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can only produce well-formed plans.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut multipliers = ActivityLevel::ALL
            .iter()
            .map(|l| self.activity_multipliers.get(*l))
            .chain(FitnessLevel::ALL.iter().map(|l| self.fitness_multipliers.get(*l)));
        if multipliers.any(|m| !m.is_finite() || m <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "multipliers must be positive and finite",
            ));
        }

        if !(self.schedule.feet_per_base_day.is_finite() && self.schedule.feet_per_base_day > 0.0) {
            return Err(ConfigError::ValueOutOfRange("feet_per_base_day must be positive"));
        }

        let first = self.schedule.first_activity_fraction;
        let moderate = self.schedule.moderate_activity_fraction;
        if !(0.0..=1.0).contains(&first) || !(0.0..=1.0).contains(&moderate) {
            return Err(ConfigError::ValueOutOfRange(
                "milestone fractions must be within 0.0-1.0",
            ));
        }
        if first > moderate {
            return Err(ConfigError::InvalidOrdering(
                "first_activity_fraction exceeds moderate_activity_fraction",
            ));
        }

        if !(self.risk.moderate_feet <= self.risk.moderate_high_feet
            && self.risk.moderate_high_feet <= self.risk.high_feet)
        {
            return Err(ConfigError::InvalidOrdering(
                "risk thresholds must be non-decreasing",
            ));
        }

        if !(self.nutrition.hydration_scale_feet.is_finite()
            && self.nutrition.hydration_scale_feet > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange("hydration_scale_feet must be positive"));
        }
        if !self.nutrition.base_hydration_liters.is_finite()
            || self.nutrition.base_hydration_liters < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "base_hydration_liters must be non-negative",
            ));
        }

        Ok(())
    }
}
