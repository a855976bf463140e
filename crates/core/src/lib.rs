//! AltitudeReady core data models.
//!
//! This crate defines the trip parameters, the acclimation plan computed
//! from them, and the day-by-day schedule that expands a plan. Everything
//! here is pure: no I/O, no clocks except trip creation timestamps.

#![warn(missing_docs)]

// Core identities
mod id;
mod error;

// Inputs and configuration
mod params;
mod config;

// Plan computation
mod plan;
mod schedule;

// Saved data
mod trip;
mod profile;

pub mod elevation;

// Re-exports
pub use id::TripId;
pub use error::{CoreError, Result};

pub use params::{
    ActivityLevel, FitnessLevel, TripInput, TripParameters, validate_trip_dates, DATE_FORMAT,
};
pub use config::{
    ActivityMultipliers, ConfigError, FitnessMultipliers, NutritionConfig, PlannerConfig,
    RiskThresholds, ScheduleConfig,
};

pub use plan::{AcclimationPlan, RiskLevel, compute_plan, compute_plan_with};
pub use schedule::{ActivityPhase, DaySchedule, generate_schedule, schedule_for_day};

pub use trip::Trip;
pub use profile::UserProfile;
pub use elevation::{city_elevation, search_cities};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
