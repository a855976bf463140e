//! Progress tracking service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use altready_core::{schedule_for_day, AcclimationPlan, DaySchedule, Trip, TripId};
use altready_storage::Storage;

use crate::clock::{Clock, SystemClock};
use crate::estimator::{days_until_full_intensity, full_intensity_date, trip_full_intensity_date};
use crate::guidance::GuidanceTier;
use crate::status::{partition_trips, trip_status, TripStatus};

const SECONDS_PER_DAY: i64 = 86_400;

/// Acclimation progress at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Percent complete, 0-100
    pub percent_complete: f64,

    /// Days since arrival, rounded up; zero or negative before arrival
    pub days_elapsed: i64,

    /// Calendar day of the stay: 1 on the arrival date, zero or negative before it
    pub day_number: i64,

    /// Days from arrival to the full-intensity date
    pub days_total: i64,

    /// Guidance for this level of progress
    pub guidance_tier: GuidanceTier,

    /// Today's schedule entry while the plan is running
    pub today: Option<DaySchedule>,
}

/// Compute progress through a plan.
///
/// A plan whose full-intensity date is on or before arrival counts as
/// complete immediately.
pub fn compute_progress(
    plan: &AcclimationPlan,
    arrival_date: NaiveDate,
    full_intensity_date: NaiveDate,
    now: DateTime<Utc>,
) -> ProgressSnapshot {
    let days_total = (full_intensity_date - arrival_date).num_days();

    let arrived_at = Utc.from_utc_datetime(&arrival_date.and_time(NaiveTime::MIN));
    let days_elapsed = ceil_days((now - arrived_at).num_seconds());

    let percent_complete = if days_total <= 0 {
        100.0
    } else {
        (days_elapsed as f64 / days_total as f64 * 100.0).clamp(0.0, 100.0)
    };

    let day_number = (now.date_naive() - arrival_date).num_days() + 1;
    let today = u32::try_from(day_number)
        .ok()
        .and_then(|day| schedule_for_day(plan, day));

    ProgressSnapshot {
        percent_complete,
        days_elapsed,
        day_number,
        days_total,
        guidance_tier: GuidanceTier::from_percent(percent_complete),
        today,
    }
}

/// Progress for a saved trip, using the canonical full-intensity date.
pub fn progress_for_trip(trip: &Trip, now: DateTime<Utc>) -> ProgressSnapshot {
    compute_progress(
        &trip.plan,
        trip.arrival_date,
        trip_full_intensity_date(trip),
        now,
    )
}

/// Progress for a plan that has not been saved yet.
pub fn progress_from_arrival(
    plan: &AcclimationPlan,
    arrival_date: NaiveDate,
    now: DateTime<Utc>,
) -> ProgressSnapshot {
    compute_progress(plan, arrival_date, full_intensity_date(arrival_date, plan), now)
}

fn ceil_days(seconds: i64) -> i64 {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// A saved trip with its status and progress, all taken at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripProgress {
    /// The trip
    pub trip: Trip,

    /// Status at the evaluation instant
    pub status: TripStatus,

    /// Date full intensity is reached
    pub full_intensity_date: NaiveDate,

    /// Days from today until that date; zero or negative once reached
    pub days_until_full_intensity: i64,

    /// Progress through the plan
    pub progress: ProgressSnapshot,
}

impl TripProgress {
    /// Evaluate a trip against `now`.
    pub fn at(trip: Trip, now: DateTime<Utc>) -> Self {
        Self {
            status: trip_status(&trip, now),
            full_intensity_date: trip_full_intensity_date(&trip),
            days_until_full_intensity: days_until_full_intensity(&trip, now),
            progress: progress_for_trip(&trip, now),
            trip,
        }
    }
}

/// Trip counts and live progress for every active trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// When snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// All saved trips
    pub total_trips: usize,

    /// Trips not yet started
    pub upcoming_trips: usize,

    /// Trips in progress
    pub active_trips: usize,

    /// Finished trips
    pub past_trips: usize,

    /// Progress of each active trip
    pub active_progress: Vec<TripProgress>,
}

/// Progress tracking service.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Get progress for a saved trip.
    async fn get_trip_progress(&self, trip_id: TripId) -> Option<TripProgress>;

    /// Take a dashboard snapshot.
    async fn snapshot(&self) -> DashboardSnapshot;
}

/// Storage-backed progress tracker.
pub struct BasicProgressTracker<S: Storage, C: Clock = SystemClock> {
    storage: Arc<S>,
    clock: C,
}

impl<S: Storage> BasicProgressTracker<S> {
    /// Create a tracker on the wall clock.
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> BasicProgressTracker<S, C> {
    /// Create a tracker on the given clock.
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage: Arc::new(storage),
            clock,
        }
    }

    async fn load_trips(&self) -> Vec<Trip> {
        match self.storage.list_trips().await {
            Ok(trips) => trips,
            Err(e) => {
                warn!(error = %e, "Failed to list trips");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl<S: Storage + 'static, C: Clock + 'static> ProgressTracker for BasicProgressTracker<S, C> {
    async fn get_trip_progress(&self, trip_id: TripId) -> Option<TripProgress> {
        let trip = match self.storage.load_trip(trip_id).await {
            Ok(trip) => trip?,
            Err(e) => {
                warn!(%trip_id, error = %e, "Failed to load trip");
                return None;
            }
        };
        let progress = TripProgress::at(trip, self.clock.now());
        debug!(%trip_id, percent = progress.progress.percent_complete, "Computed trip progress");
        Some(progress)
    }

    async fn snapshot(&self) -> DashboardSnapshot {
        let now = self.clock.now();
        let trips = self.load_trips().await;
        let partition = partition_trips(&trips, now);

        let active_progress = partition
            .active
            .iter()
            .map(|trip| TripProgress::at((*trip).clone(), now))
            .collect();

        DashboardSnapshot {
            timestamp: now,
            total_trips: trips.len(),
            upcoming_trips: partition.upcoming.len(),
            active_trips: partition.active.len(),
            past_trips: partition.past.len(),
            active_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use altready_core::{
        compute_plan, ActivityLevel, ActivityPhase, FitnessLevel, PlannerConfig, TripParameters,
        UserProfile,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn nine_day_plan() -> AcclimationPlan {
        compute_plan(&TripParameters::new(
            500,
            10000,
            FitnessLevel::Average,
            ActivityLevel::Moderate,
        ))
    }

    #[test]
    fn test_progress_midway() {
        let plan = nine_day_plan();
        let arrival = date(2026, 3, 1);
        let full = full_intensity_date(arrival, &plan);

        // Noon on arrival + 3 days: 3.5 days rounded up to 4 of 9
        let progress = compute_progress(&plan, arrival, full, at(2026, 3, 4, 12));
        assert_eq!(progress.days_total, 9);
        assert_eq!(progress.days_elapsed, 4);
        assert!((progress.percent_complete - 400.0 / 9.0).abs() < 1e-9);
        assert_eq!(progress.guidance_tier, GuidanceTier::LightActivitiesOk);
        assert_eq!(progress.today.unwrap().activity, ActivityPhase::LightActivity);
    }

    #[test]
    fn test_progress_before_arrival_is_zero() {
        let plan = nine_day_plan();
        let arrival = date(2026, 3, 1);
        let progress = progress_from_arrival(&plan, arrival, at(2026, 2, 25, 9));

        assert!(progress.days_elapsed < 0);
        assert_eq!(progress.percent_complete, 0.0);
        assert_eq!(progress.guidance_tier, GuidanceTier::TakeItEasy);
        assert!(progress.today.is_none());
    }

    #[test]
    fn test_progress_saturates_at_hundred() {
        let plan = nine_day_plan();
        let arrival = date(2026, 3, 1);
        let progress = progress_from_arrival(&plan, arrival, at(2026, 4, 1, 9));

        assert_eq!(progress.percent_complete, 100.0);
        assert_eq!(progress.guidance_tier, GuidanceTier::FullyAcclimated);
        assert!(progress.today.is_none());
    }

    #[test]
    fn test_exact_arrival_instant_has_zero_elapsed() {
        let plan = nine_day_plan();
        let progress = progress_from_arrival(&plan, date(2026, 3, 1), at(2026, 3, 1, 0));
        assert_eq!(progress.days_elapsed, 0);
        assert_eq!(progress.guidance_tier, GuidanceTier::TakeItEasy);

        let progress = progress_from_arrival(&plan, date(2026, 3, 1), at(2026, 3, 1, 1));
        assert_eq!(progress.days_elapsed, 1);
    }

    #[test]
    fn test_today_follows_calendar_days() {
        let plan = nine_day_plan();
        let arrival = date(2026, 3, 1);
        let minute = |d: u32, h: u32, m: u32| Utc.with_ymd_and_hms(2026, 3, d, h, m, 0).unwrap();

        let progress = progress_from_arrival(&plan, arrival, minute(1, 0, 0));
        assert_eq!(progress.day_number, 1);
        assert_eq!(progress.today.unwrap().day_number, 1);

        let progress = progress_from_arrival(&plan, arrival, minute(1, 23, 59));
        assert_eq!(progress.today.unwrap().day_number, 1);

        let progress = progress_from_arrival(&plan, arrival, minute(2, 0, 0));
        assert_eq!(progress.day_number, 2);
        assert_eq!(progress.today.unwrap().day_number, 2);

        let progress = progress_from_arrival(&plan, arrival, minute(2, 0, 1));
        assert_eq!(progress.today.unwrap().day_number, 2);

        // Day 3 is the first light-activity day
        let progress = progress_from_arrival(&plan, arrival, minute(3, 0, 0));
        assert_eq!(progress.today.unwrap().activity, ActivityPhase::LightActivity);

        let progress = progress_from_arrival(&plan, arrival, minute(9, 23, 59));
        assert_eq!(progress.today.unwrap().day_number, 9);
        let progress = progress_from_arrival(&plan, arrival, minute(10, 0, 0));
        assert!(progress.today.is_none());
    }

    #[test]
    fn test_zero_length_plan_is_complete() {
        let plan = nine_day_plan();
        let arrival = date(2026, 3, 1);

        let progress = compute_progress(&plan, arrival, arrival, at(2026, 2, 1, 0));
        assert_eq!(progress.days_total, 0);
        assert_eq!(progress.percent_complete, 100.0);
        assert_eq!(progress.guidance_tier, GuidanceTier::FullyAcclimated);

        let progress = compute_progress(&plan, arrival, date(2026, 2, 27), at(2026, 3, 2, 0));
        assert_eq!(progress.percent_complete, 100.0);
    }

    #[test]
    fn test_ramping_up_near_the_end() {
        let plan = nine_day_plan();
        let progress = progress_from_arrival(&plan, date(2026, 3, 1), at(2026, 3, 8, 6));
        // 8 of 9 days
        assert_eq!(progress.guidance_tier, GuidanceTier::RampingUp);
        assert_eq!(progress.today.unwrap().activity, ActivityPhase::ModerateActivity);
    }

    #[test]
    fn test_ceil_days() {
        assert_eq!(ceil_days(0), 0);
        assert_eq!(ceil_days(1), 1);
        assert_eq!(ceil_days(SECONDS_PER_DAY), 1);
        assert_eq!(ceil_days(SECONDS_PER_DAY + 1), 2);
        assert_eq!(ceil_days(-1), 0);
        assert_eq!(ceil_days(-SECONDS_PER_DAY - 1), -1);
    }

    struct MockStorage {
        trips: Vec<Trip>,
    }

    #[async_trait]
    impl Storage for MockStorage {
        async fn save_trip(&mut self, trip: &Trip) -> altready_storage::Result<()> {
            self.trips.push(trip.clone());
            Ok(())
        }
        async fn load_trip(&self, id: TripId) -> altready_storage::Result<Option<Trip>> {
            Ok(self.trips.iter().find(|t| t.id == id).cloned())
        }
        async fn list_trips(&self) -> altready_storage::Result<Vec<Trip>> {
            Ok(self.trips.clone())
        }
        async fn delete_trip(&mut self, id: TripId) -> altready_storage::Result<()> {
            self.trips.retain(|t| t.id != id);
            Ok(())
        }
        async fn save_profile(&mut self, _profile: &UserProfile) -> altready_storage::Result<()> { Ok(()) }
        async fn load_profile(&self) -> altready_storage::Result<Option<UserProfile>> { Ok(None) }
        async fn commit(&mut self, _message: &str) -> altready_storage::Result<()> { Ok(()) }
        async fn rollback(&mut self) -> altready_storage::Result<()> { Ok(()) }
    }

    fn trip(destination: &str, arrival: NaiveDate, departure: NaiveDate) -> Trip {
        Trip::new(
            destination,
            TripParameters::new(500, 10000, FitnessLevel::Average, ActivityLevel::Moderate),
            arrival,
            departure,
            &PlannerConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_trip_progress() {
        let t = trip("Breckenridge", date(2026, 3, 1), date(2026, 3, 15));
        let id = t.id;
        let tracker = BasicProgressTracker::with_clock(
            MockStorage { trips: vec![t] },
            FixedClock(at(2026, 3, 4, 12)),
        );

        let result = tracker.get_trip_progress(id).await.unwrap();
        assert_eq!(result.trip.id, id);
        assert_eq!(result.status, TripStatus::Active);
        assert_eq!(result.full_intensity_date, date(2026, 3, 10));
        assert_eq!(result.days_until_full_intensity, 6);
        assert_eq!(result.progress.days_elapsed, 4);
        assert_eq!(result.progress.day_number, 4);
        assert!(tracker.get_trip_progress(TripId::new()).await.is_none());
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_counts() {
        let trips = vec![
            trip("Aspen", date(2026, 1, 1), date(2026, 1, 5)),
            trip("Breckenridge", date(2026, 3, 1), date(2026, 3, 15)),
            trip("Leadville", date(2026, 7, 1), date(2026, 7, 10)),
            trip("Telluride", date(2026, 8, 1), date(2026, 8, 10)),
        ];
        let active_id = trips[1].id;
        let now = at(2026, 3, 4, 12);
        let tracker = BasicProgressTracker::with_clock(MockStorage { trips }, FixedClock(now));

        let snapshot = tracker.snapshot().await;
        assert_eq!(snapshot.timestamp, now);
        assert_eq!(snapshot.total_trips, 4);
        assert_eq!(snapshot.past_trips, 1);
        assert_eq!(snapshot.active_trips, 1);
        assert_eq!(snapshot.upcoming_trips, 2);
        assert_eq!(snapshot.active_progress.len(), 1);
        assert_eq!(snapshot.active_progress[0].trip.id, active_id);
        assert_eq!(snapshot.active_progress[0].trip.display_name(), "Breckenridge");
        assert_eq!(snapshot.active_progress[0].status, TripStatus::Active);
    }

    #[tokio::test]
    async fn test_tracker_over_json_storage() {
        use altready_storage::JsonStorage;

        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();
        let t = trip("Vail", date(2026, 3, 1), date(2026, 3, 20));
        storage.save_trip(&t).await.unwrap();

        let tracker = BasicProgressTracker::with_clock(storage, FixedClock(at(2026, 3, 20, 12)));
        let result = tracker.get_trip_progress(t.id).await.unwrap();
        assert_eq!(result.progress.guidance_tier, GuidanceTier::FullyAcclimated);
        assert!(result.days_until_full_intensity < 0);
    }
}
