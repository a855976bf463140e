//! Day-by-day schedule expansion of an acclimation plan.

use serde::{Deserialize, Serialize};

use crate::plan::AcclimationPlan;

/// The activity phase a day falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityPhase {
    /// Before the first activity day
    RestAndAcclimate,
    /// Before the moderate activity day
    LightActivity,
    /// Before the full intensity day
    ModerateActivity,
    /// Full intensity day onward
    FullIntensity,
}

impl ActivityPhase {
    /// Phase for a 1-indexed day of the plan.
    ///
    /// Milestones are checked in a fixed order and the first match wins.
    pub fn for_day(day: u32, plan: &AcclimationPlan) -> Self {
        if day < plan.first_activity_day {
            ActivityPhase::RestAndAcclimate
        } else if day < plan.moderate_activity_day {
            ActivityPhase::LightActivity
        } else if day < plan.full_intensity_day {
            ActivityPhase::ModerateActivity
        } else {
            ActivityPhase::FullIntensity
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityPhase::RestAndAcclimate => "Rest & Acclimate",
            ActivityPhase::LightActivity => "Light Activity",
            ActivityPhase::ModerateActivity => "Moderate Activity",
            ActivityPhase::FullIntensity => "Full Intensity",
        }
    }

    /// Share of normal exertion, 0-100.
    pub fn intensity_percent(&self) -> u8 {
        match self {
            ActivityPhase::RestAndAcclimate => 0,
            ActivityPhase::LightActivity => 30,
            ActivityPhase::ModerateActivity => 60,
            ActivityPhase::FullIntensity => 100,
        }
    }

    /// Guidance for the day.
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            ActivityPhase::RestAndAcclimate => &[
                "Light walking only",
                "Stay hydrated",
                "Monitor symptoms",
                "Avoid alcohol",
            ],
            ActivityPhase::LightActivity => &[
                "Easy hiking or walking",
                "Keep heart rate low",
                "Rest if symptoms appear",
                "Continue high fluid intake",
            ],
            ActivityPhase::ModerateActivity => &[
                "Moderate hiking/skiing",
                "70-80% of normal intensity",
                "Take breaks as needed",
                "Watch for altitude sickness",
            ],
            ActivityPhase::FullIntensity => &[
                "All activities OK",
                "Listen to your body",
                "Maintain hydration",
                "Recovery is key",
            ],
        }
    }
}

/// One day of an acclimation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// 1-indexed day of the plan
    pub day_number: u32,

    /// Phase the day falls into
    pub activity: ActivityPhase,

    /// Display label of the phase
    pub activity_label: String,

    /// Share of normal exertion, 0-100
    pub intensity_percent: u8,

    /// Ordered guidance for the day
    pub tips: Vec<String>,
}

impl DaySchedule {
    fn new(day_number: u32, activity: ActivityPhase) -> Self {
        Self {
            day_number,
            activity,
            activity_label: activity.label().to_string(),
            intensity_percent: activity.intensity_percent(),
            tips: activity.tips().iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Expand a plan into one entry per day, `1..=recommended_days`.
pub fn generate_schedule(plan: &AcclimationPlan) -> Vec<DaySchedule> {
    (1..=plan.recommended_days)
        .map(|day| DaySchedule::new(day, ActivityPhase::for_day(day, plan)))
        .collect()
}

/// Schedule entry for a single day, `None` outside `1..=recommended_days`.
pub fn schedule_for_day(plan: &AcclimationPlan, day: u32) -> Option<DaySchedule> {
    (1..=plan.recommended_days)
        .contains(&day)
        .then(|| DaySchedule::new(day, ActivityPhase::for_day(day, plan)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ActivityLevel, FitnessLevel, TripParameters};
    use crate::plan::compute_plan;

    fn plan(home: i32, dest: i32, fitness: FitnessLevel, activity: ActivityLevel) -> AcclimationPlan {
        compute_plan(&TripParameters::new(home, dest, fitness, activity))
    }

    #[test]
    fn test_schedule_length_matches_recommended_days() {
        for dest in [0, 3000, 7908, 10152, 14505, 29032] {
            for fitness in FitnessLevel::ALL {
                for activity in ActivityLevel::ALL {
                    let p = plan(500, dest, fitness, activity);
                    let schedule = generate_schedule(&p);
                    assert_eq!(schedule.len(), p.recommended_days as usize);
                    for (i, day) in schedule.iter().enumerate() {
                        assert_eq!(day.day_number as usize, i + 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_nine_day_schedule_phases() {
        let p = plan(500, 10000, FitnessLevel::Average, ActivityLevel::Moderate);
        let labels: Vec<&str> = generate_schedule(&p)
            .iter()
            .map(|d| d.activity.label())
            .collect();

        // first = 3, moderate = 6, full = 9
        assert_eq!(
            labels,
            vec![
                "Rest & Acclimate",
                "Rest & Acclimate",
                "Light Activity",
                "Light Activity",
                "Light Activity",
                "Moderate Activity",
                "Moderate Activity",
                "Moderate Activity",
                "Full Intensity",
            ]
        );
    }

    #[test]
    fn test_one_day_plan_is_light_activity() {
        // first = 1, moderate = 2, full = 2: day 1 is past rest but before moderate
        let p = plan(0, 1500, FitnessLevel::Average, ActivityLevel::Moderate);
        let schedule = generate_schedule(&p);

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].activity, ActivityPhase::LightActivity);
        assert_eq!(schedule[0].intensity_percent, 30);
        assert_eq!(schedule[0].tips[0], "Easy hiking or walking");
    }

    #[test]
    fn test_two_day_plan_reaches_full_intensity() {
        let p = plan(5280, 7908, FitnessLevel::Fit, ActivityLevel::Light);
        let schedule = generate_schedule(&p);

        assert_eq!(p.first_activity_day, 1);
        assert_eq!(p.moderate_activity_day, 2);
        assert_eq!(schedule[0].activity, ActivityPhase::LightActivity);
        assert_eq!(schedule[1].activity, ActivityPhase::FullIntensity);
        assert_eq!(schedule[1].intensity_percent, 100);
    }

    #[test]
    fn test_schedule_is_idempotent() {
        let p = plan(33, 9600, FitnessLevel::Beginner, ActivityLevel::Intense);
        assert_eq!(generate_schedule(&p), generate_schedule(&p));
    }

    #[test]
    fn test_schedule_for_day_bounds() {
        let p = plan(500, 10000, FitnessLevel::Average, ActivityLevel::Moderate);
        assert!(schedule_for_day(&p, 0).is_none());
        assert!(schedule_for_day(&p, 10).is_none());
        assert_eq!(schedule_for_day(&p, 6).unwrap().intensity_percent, 60);
        assert_eq!(schedule_for_day(&p, 4), generate_schedule(&p).into_iter().nth(3));
    }

    #[test]
    fn test_rest_day_tips() {
        let p = plan(500, 10000, FitnessLevel::Average, ActivityLevel::Moderate);
        let day = schedule_for_day(&p, 1).unwrap();
        assert_eq!(day.activity_label, "Rest & Acclimate");
        assert_eq!(day.intensity_percent, 0);
        assert_eq!(
            day.tips,
            vec!["Light walking only", "Stay hydrated", "Monitor symptoms", "Avoid alcohol"]
        );
    }
}
