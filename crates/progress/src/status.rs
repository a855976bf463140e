//! Trip status relative to "now".
//!
//! Statuses are compared at UTC calendar-date granularity and must be
//! recomputed against a single `now` for each request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use altready_core::Trip;

/// Where a trip sits relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripStatus {
    /// Arrival is after today
    Upcoming,
    /// Today is within arrival..=departure
    Active,
    /// Departure is before today
    Past,
}

impl TripStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "UPCOMING",
            TripStatus::Active => "ACTIVE",
            TripStatus::Past => "PAST",
        }
    }
}

/// Status of one trip.
pub fn trip_status(trip: &Trip, now: DateTime<Utc>) -> TripStatus {
    let today = now.date_naive();
    if trip.arrival_date > today {
        TripStatus::Upcoming
    } else if trip.departure_date < today {
        TripStatus::Past
    } else {
        TripStatus::Active
    }
}

/// A trip collection split by status.
#[derive(Debug, Clone, Default)]
pub struct TripPartition<'a> {
    /// Trips not yet started
    pub upcoming: Vec<&'a Trip>,
    /// Trips in progress
    pub active: Vec<&'a Trip>,
    /// Finished trips
    pub past: Vec<&'a Trip>,
}

impl TripPartition<'_> {
    /// Number of trips across all sets.
    pub fn total(&self) -> usize {
        self.upcoming.len() + self.active.len() + self.past.len()
    }
}

/// Split trips by status against one consistent `now`. Input order is kept
/// within each set.
pub fn partition_trips(trips: &[Trip], now: DateTime<Utc>) -> TripPartition<'_> {
    let mut partition = TripPartition::default();
    for trip in trips {
        match trip_status(trip, now) {
            TripStatus::Upcoming => partition.upcoming.push(trip),
            TripStatus::Active => partition.active.push(trip),
            TripStatus::Past => partition.past.push(trip),
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use altready_core::{ActivityLevel, FitnessLevel, PlannerConfig, TripParameters};
    use chrono::{NaiveDate, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(destination: &str, arrival: NaiveDate, departure: NaiveDate) -> Trip {
        Trip::new(
            destination,
            TripParameters::new(33, 8150, FitnessLevel::Fit, ActivityLevel::Intense),
            arrival,
            departure,
            &PlannerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_active_window_is_inclusive() {
        let t = trip("Vail", date(2026, 2, 10), date(2026, 2, 14));

        let on_arrival = Utc.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap();
        let on_departure = Utc.with_ymd_and_hms(2026, 2, 14, 23, 59, 59).unwrap();
        assert_eq!(trip_status(&t, on_arrival), TripStatus::Active);
        assert_eq!(trip_status(&t, on_departure), TripStatus::Active);

        let day_before = Utc.with_ymd_and_hms(2026, 2, 9, 23, 0, 0).unwrap();
        let day_after = Utc.with_ymd_and_hms(2026, 2, 15, 0, 0, 0).unwrap();
        assert_eq!(trip_status(&t, day_before), TripStatus::Upcoming);
        assert_eq!(trip_status(&t, day_after), TripStatus::Past);
    }

    #[test]
    fn test_partition_covers_every_trip_once() {
        let trips = vec![
            trip("Aspen", date(2026, 1, 1), date(2026, 1, 5)),
            trip("Telluride", date(2026, 3, 1), date(2026, 3, 9)),
            trip("Vail", date(2026, 3, 8), date(2026, 3, 12)),
            trip("Leadville", date(2026, 6, 1), date(2026, 6, 30)),
        ];
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap();

        let partition = partition_trips(&trips, now);
        assert_eq!(partition.total(), trips.len());

        fn names(set: &[&Trip]) -> Vec<String> {
            set.iter().map(|t| t.destination_name.clone()).collect()
        }
        assert_eq!(names(&partition.past), vec!["Aspen"]);
        assert_eq!(names(&partition.active), vec!["Telluride", "Vail"]);
        assert_eq!(names(&partition.upcoming), vec!["Leadville"]);
    }

    #[test]
    fn test_partition_of_empty_collection() {
        let partition = partition_trips(&[], Utc::now());
        assert_eq!(partition.total(), 0);
    }
}
