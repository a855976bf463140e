//! Full-intensity date estimation.

use chrono::{DateTime, Days, NaiveDate, Utc};
use altready_core::{AcclimationPlan, Trip};

/// Date the traveler is expected to reach full intensity.
///
/// Always `arrival + full_intensity_day` days; saturates at the latest
/// representable date instead of overflowing.
pub fn full_intensity_date(arrival: NaiveDate, plan: &AcclimationPlan) -> NaiveDate {
    arrival
        .checked_add_days(Days::new(u64::from(plan.full_intensity_day)))
        .unwrap_or(NaiveDate::MAX)
}

/// Full-intensity date for a saved trip, from its plan snapshot.
pub fn trip_full_intensity_date(trip: &Trip) -> NaiveDate {
    full_intensity_date(trip.arrival_date, &trip.plan)
}

/// Whole days from `now`'s UTC date until the trip's full-intensity date.
///
/// Zero or negative once that date has been reached.
pub fn days_until_full_intensity(trip: &Trip, now: DateTime<Utc>) -> i64 {
    (trip_full_intensity_date(trip) - now.date_naive()).num_days()
}

/// Whether the stay ends before the traveler is fully acclimated.
pub fn departs_before_acclimated(trip: &Trip) -> bool {
    trip.departure_date < trip_full_intensity_date(trip)
}
