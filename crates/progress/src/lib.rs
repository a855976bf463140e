//! Acclimation Progress
//!
//! Live progress through a saved trip's plan, guidance tiers, and trip
//! status relative to now.

#![warn(missing_docs)]

pub mod clock;
pub mod guidance;
pub mod tracker;
pub mod estimator;
pub mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use guidance::GuidanceTier;
pub use tracker::{
    compute_progress, progress_for_trip, progress_from_arrival, BasicProgressTracker,
    DashboardSnapshot, ProgressSnapshot, ProgressTracker, TripProgress,
};
pub use estimator::{
    days_until_full_intensity, departs_before_acclimated, full_intensity_date,
    trip_full_intensity_date,
};
pub use status::{partition_trips, trip_status, TripPartition, TripStatus};
