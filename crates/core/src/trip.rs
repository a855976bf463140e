//! Trip model - a saved journey with its plan snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::{CoreError, Result};
use crate::id::TripId;
use crate::params::{validate_trip_dates, TripParameters};
use crate::plan::{compute_plan_with, AcclimationPlan};
use crate::Time;

/// A saved trip.
///
/// The plan is computed once, when the trip is created, and stored next to
/// the parameters it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,

    /// Optional trip title
    pub name: Option<String>,

    /// Where the traveler is going
    pub destination_name: String,

    /// Parameters the plan was computed from
    pub params: TripParameters,

    /// Arrival at destination
    pub arrival_date: NaiveDate,

    /// Departure from destination
    pub departure_date: NaiveDate,

    /// Plan snapshot taken at creation
    pub plan: AcclimationPlan,

    /// When created
    pub created_at: Time,
}

impl Trip {
    /// Create a trip and snapshot its plan.
    pub fn new(
        destination_name: impl Into<String>,
        params: TripParameters,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
        config: &PlannerConfig,
    ) -> Result<Self> {
        let destination_name = destination_name.into().trim().to_string();
        if destination_name.is_empty() {
            return Err(CoreError::invalid_input("destination_name", "required"));
        }
        validate_trip_dates(arrival_date, departure_date)?;

        let params = TripParameters {
            arrival_date: Some(arrival_date),
            departure_date: Some(departure_date),
            ..params
        };

        Ok(Self {
            id: TripId::new(),
            name: None,
            destination_name,
            plan: compute_plan_with(&params, config),
            params,
            arrival_date,
            departure_date,
            created_at: chrono::Utc::now(),
        })
    }

    /// Set the trip title. Blank titles are dropped.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    /// Title if set, otherwise the destination.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.destination_name)
    }

    /// Length of the stay in days.
    pub fn length_days(&self) -> i64 {
        (self.departure_date - self.arrival_date).num_days()
    }
}
